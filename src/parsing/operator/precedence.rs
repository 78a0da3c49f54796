
/// The precedence of an operator. Higher values bind tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Precedence(u64);

impl Precedence {
  pub const MIN: Precedence = Precedence(0);

  /// Internally, we store an operator's precedence as ten times the
  /// input value, so that we can increment to represent
  /// associativity.
  ///
  /// For example, if `#` is a left-associative operator with
  /// (internal) precedence value `p`, then its left-hand side is also
  /// at precedence value `p`, while its right-hand side is at
  /// precedence value `p + 1`, so that a second `#` on the right
  /// does not bind into the right-hand operand.
  ///
  /// Use [`from_raw`](Precedence::from_raw) to bypass the
  /// multiplication and construct a `Precedence` value directly.
  pub const fn new(n: u64) -> Precedence {
    Precedence(n * 10)
  }

  pub const fn from_raw(n: u64) -> Precedence {
    Precedence(n)
  }

  pub const fn incremented(self) -> Precedence {
    Precedence(self.0 + 1)
  }
}
