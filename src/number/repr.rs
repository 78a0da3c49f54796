
/// The different ways a number can be represented. These are ordered
/// in terms of priority, so if `a <= b`, that implies that the
/// arithmetic system here will try to use representation `a` before
/// resorting to representation `b`. For instance, `Integer <= Float`
/// implies that we will try to use integer arithmetic and only resort
/// to floating-point values when necessary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NumberRepr {
  /// A machine integer, exact.
  Integer,
  /// An inexact IEEE 754 floating-point value.
  Float,
}
