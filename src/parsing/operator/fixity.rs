
//! Fixity declarations for operators.

use super::associativity::Associativity;

/// Where an operator sits relative to its operands. Prefix operators
/// have only a precedence, while infix operators also need an
/// associativity to resolve chains of equal precedence.
#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum Fixity {
  Prefix,
  Infix(Associativity),
}

/// The number of operands an operator consumes.
#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum Arity {
  Unary,
  Binary,
}

impl Fixity {
  pub fn arity(self) -> Arity {
    match self {
      Fixity::Prefix => Arity::Unary,
      Fixity::Infix(_) => Arity::Binary,
    }
  }

  /// The associativity, for infix operators. Prefix operators have
  /// none.
  pub fn associativity(self) -> Option<Associativity> {
    match self {
      Fixity::Prefix => None,
      Fixity::Infix(assoc) => Some(assoc),
    }
  }
}

impl Arity {
  pub fn operand_count(self) -> usize {
    match self {
      Arity::Unary => 1,
      Arity::Binary => 2,
    }
  }
}
