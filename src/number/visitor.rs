
//! Private module used to implement promotion semantics for our
//! numerical representation. None of this functionality is directly
//! exposed outside of `crate::number`.

use super::{Number, NumberImpl};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum NumberPair {
  Integers(i64, i64),
  Floats(f64, f64),
}

impl NumberPair {
  /// Promote two numbers to a common representation, so we can do
  /// arithmetic on them.
  pub fn promote(left: Number, right: Number) -> NumberPair {
    use NumberImpl::*;
    use NumberPair::*;
    match (left.inner, right.inner) {
      (Integer(left), Integer(right)) => Integers(left, right),
      // Coerce both to floats
      (Integer(left), Float(right)) => Floats(left as f64, right),
      (Float(left), Integer(right)) => Floats(left, right as f64),
      (Float(left), Float(right)) => Floats(left, right),
    }
  }

  /// Both sides as floats, regardless of the promoted representation.
  pub fn into_floats(self) -> (f64, f64) {
    match self {
      NumberPair::Integers(left, right) => (left as f64, right as f64),
      NumberPair::Floats(left, right) => (left, right),
    }
  }
}
