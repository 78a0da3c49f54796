
mod precedence;
mod associativity;
mod fixity;
pub mod table;

pub use precedence::Precedence;
pub use associativity::Associativity;
pub use fixity::{Fixity, Arity};

use crate::number::{Number, ArithmeticError};

use std::fmt::{self, Display, Formatter};

/// The operators understood by the evaluators. Each carries its
/// token, precedence, and fixity as fixed data; see
/// [`table`] for lookup by token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
  Plus,
  Minus,
  Multiply,
  Divide,
  Power,
  UnaryMinus,
}

/// The arguments an operator is applied to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands {
  Unary(Number),
  Binary(Number, Number),
}

impl Operator {
  /// The token of the operator, as written in expressions.
  pub fn token(self) -> &'static str {
    match self {
      Operator::Plus => "+",
      Operator::Minus | Operator::UnaryMinus => "-",
      Operator::Multiply => "*",
      Operator::Divide => "/",
      Operator::Power => "^",
    }
  }

  // Unary minus binds tighter than `+ -` and looser than `* /`, so
  // that `-2*3` negates the product and `-2+3` negates only the 2.
  pub fn precedence(self) -> Precedence {
    match self {
      Operator::Plus | Operator::Minus => Precedence::new(3),
      Operator::UnaryMinus => Precedence::new(4),
      Operator::Multiply | Operator::Divide => Precedence::new(5),
      Operator::Power => Precedence::new(6),
    }
  }

  pub fn fixity(self) -> Fixity {
    match self {
      Operator::Plus | Operator::Minus | Operator::Multiply | Operator::Divide =>
        Fixity::Infix(Associativity::LEFT),
      Operator::Power => Fixity::Infix(Associativity::RIGHT),
      Operator::UnaryMinus => Fixity::Prefix,
    }
  }

  pub fn arity(self) -> Arity {
    self.fixity().arity()
  }

  pub fn associativity(self) -> Option<Associativity> {
    self.fixity().associativity()
  }

  /// Evaluates the operator on the given operands. Fails if the
  /// operands don't match the operator's arity, or if the arithmetic
  /// itself fails.
  pub fn apply(self, operands: Operands) -> Result<Number, ArithmeticError> {
    match (self, operands) {
      (Operator::Plus, Operands::Binary(a, b)) => Ok(a + b),
      (Operator::Minus, Operands::Binary(a, b)) => Ok(a - b),
      (Operator::Multiply, Operands::Binary(a, b)) => Ok(a * b),
      (Operator::Divide, Operands::Binary(a, b)) => a.try_div(b),
      (Operator::Power, Operands::Binary(a, b)) => a.try_pow(b),
      (Operator::UnaryMinus, Operands::Unary(a)) => Ok(-a),
      (op, operands) => Err(ArithmeticError::OperandCount {
        operator: op.token(),
        expected: op.arity().operand_count(),
        actual: operands.len(),
      }),
    }
  }

  /// Whether `self`, sitting on top of the shunting yard's operator
  /// stack, must be applied before `incoming` is pushed.
  ///
  /// A prefix operator arrives where an operand is expected, so an
  /// incoming unary operator never forces a reduction. A unary `self`
  /// is applied before any binary operator that does not bind
  /// strictly tighter. Between two binary operators, `self` goes
  /// first if it binds tighter, or binds equally and associates to
  /// the left.
  pub fn outranks(self, incoming: Operator) -> bool {
    match (self.fixity(), incoming.fixity()) {
      (_, Fixity::Prefix) => false,
      (Fixity::Prefix, Fixity::Infix(_)) => incoming.precedence() <= self.precedence(),
      (Fixity::Infix(assoc), Fixity::Infix(_)) => {
        self.precedence() > incoming.precedence() ||
          (self.precedence() == incoming.precedence() && assoc.is_left_assoc())
      }
    }
  }
}

impl Operands {
  #[allow(clippy::len_without_is_empty)] // Operands are never empty
  pub fn len(&self) -> usize {
    match self {
      Operands::Unary(_) => 1,
      Operands::Binary(_, _) => 2,
    }
  }
}

impl Display for Operator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.token())
  }
}
