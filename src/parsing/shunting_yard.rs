
//! The shunting yard algorithm, driven by recursive descent.
//!
//! Operands and operators are kept on two explicit stacks. A sentinel
//! entry on the operator stack marks the start of the expression and
//! of each parenthesized group, so that reductions never reach past
//! an open parenthesis.

use super::Evaluator;
use super::cursor::{TokenCursor, MalformedExpressionError, eval_leaf};
use super::operator::{Operator, Operands, Arity};
use super::operator::table::{LEFT_PAREN, RIGHT_PAREN};
use crate::error::Error;
use crate::number::Number;

/// Evaluates expressions with the shunting yard algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShuntingYard;

/// An entry on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackEntry {
  /// No enclosing operator: the bottom of the stack, or an open
  /// parenthesis.
  Sentinel,
  Operator(Operator),
}

/// Per-evaluation state. Created fresh for every call to
/// [`ShuntingYard::evaluate`] and dropped at the end.
#[derive(Debug)]
struct ShuntingYardState<'a, S> {
  cursor: TokenCursor<'a, S>,
  operators: Vec<StackEntry>,
  operands: Vec<Number>,
}

impl StackEntry {
  /// Whether this entry must be applied before `incoming` is pushed.
  /// A sentinel always yields.
  pub fn outranks(self, incoming: Operator) -> bool {
    match self {
      StackEntry::Sentinel => false,
      StackEntry::Operator(op) => op.outranks(incoming),
    }
  }
}

impl Evaluator for ShuntingYard {
  #[tracing::instrument(level = "trace", skip_all, fields(tokens = tokens.len()))]
  fn evaluate<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Number, Error> {
    ShuntingYardState::new(tokens).run()
  }
}

impl<'a, S: AsRef<str>> ShuntingYardState<'a, S> {
  fn new(tokens: &'a [S]) -> Self {
    Self {
      cursor: TokenCursor::new(tokens),
      operators: Vec::new(),
      operands: Vec::new(),
    }
  }

  fn run(mut self) -> Result<Number, Error> {
    self.operators.push(StackEntry::Sentinel);
    self.expression()?;
    self.cursor.expect_end()?;
    let result = self.pop_operand()?;
    Ok(result)
  }

  fn expression(&mut self) -> Result<(), Error> {
    self.primary()?;
    while let Some(op) = self.cursor.peek_binary() {
      self.push_operator(op)?;
      self.cursor.advance();
      self.primary()?;
    }
    while let Some(StackEntry::Operator(_)) = self.operators.last() {
      self.pop_operator()?;
    }
    Ok(())
  }

  fn primary(&mut self) -> Result<(), Error> {
    if let Some(leaf) = self.cursor.peek_leaf() {
      self.operands.push(eval_leaf(leaf)?);
      self.cursor.advance();
    } else if self.cursor.peek_is(LEFT_PAREN) {
      self.cursor.advance();
      self.operators.push(StackEntry::Sentinel);
      self.expression()?;
      self.cursor.expect(RIGHT_PAREN)?;
      self.operators.pop();
    } else if let Some(op) = self.cursor.peek_unary() {
      self.push_operator(op)?;
      self.cursor.advance();
      self.primary()?;
    } else {
      return Err(self.cursor.unexpected().into());
    }
    Ok(())
  }

  /// Applies every stacked operator that outranks `op`, then pushes
  /// `op`.
  fn push_operator(&mut self, op: Operator) -> Result<(), Error> {
    while self.operators.last().is_some_and(|top| top.outranks(op)) {
      self.pop_operator()?;
    }
    self.operators.push(StackEntry::Operator(op));
    Ok(())
  }

  /// Pops the operator on top of the stack and applies it to the
  /// operands on top of the operand stack. The top must not be a
  /// sentinel.
  fn pop_operator(&mut self) -> Result<(), Error> {
    let Some(StackEntry::Operator(op)) = self.operators.last().copied() else {
      return Err(MalformedExpressionError::new("No operator to apply").into());
    };
    self.operators.pop();
    let operands = match op.arity() {
      Arity::Binary => {
        // The right operand was pushed last.
        let right = self.pop_operand()?;
        let left = self.pop_operand()?;
        Operands::Binary(left, right)
      }
      Arity::Unary => Operands::Unary(self.pop_operand()?),
    };
    self.operands.push(op.apply(operands)?);
    Ok(())
  }

  fn pop_operand(&mut self) -> Result<Number, MalformedExpressionError> {
    self.operands.pop().ok_or_else(|| MalformedExpressionError::new("Missing operand"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::assert_strict_eq;
  use crate::number::ArithmeticError;
  use crate::parsing::tokenizer::tokenize;

  use approx::assert_relative_eq;

  fn eval(expr: &str) -> Result<Number, Error> {
    ShuntingYard.evaluate(&tokenize(expr))
  }

  #[test]
  fn test_sentinel_never_outranks() {
    for op in crate::parsing::operator::table::operators() {
      assert!(!StackEntry::Sentinel.outranks(op));
    }
  }

  #[test]
  fn test_stack_entry_delegates_to_operator() {
    assert!(StackEntry::Operator(Operator::Divide).outranks(Operator::Plus));
    assert!(!StackEntry::Operator(Operator::Plus).outranks(Operator::Divide));
  }

  #[test]
  fn test_single_value() {
    assert_strict_eq!(eval("42"), Ok(Number::from(42)));
    assert_strict_eq!(eval("((4.5))"), Ok(Number::from(4.5)));
  }

  #[test]
  fn test_left_assoc_op() {
    assert_strict_eq!(eval("1-2-3"), Ok(Number::from(-4)));
    assert_strict_eq!(eval("1+2-3+4"), Ok(Number::from(4)));
    assert_relative_eq!(eval("8/4/2").unwrap(), Number::from(1.0));
  }

  #[test]
  fn test_right_assoc_op() {
    assert_strict_eq!(eval("2^2^3"), Ok(Number::from(256)));
    assert_strict_eq!(eval("(2^2)^3"), Ok(Number::from(64)));
  }

  #[test]
  fn test_differing_precedence() {
    assert_strict_eq!(eval("1+2*3"), Ok(Number::from(7)));
    assert_strict_eq!(eval("1*2+3"), Ok(Number::from(5)));
    assert_strict_eq!(eval("2-3*3"), Ok(Number::from(-7)));
    assert_strict_eq!(eval("2*3^2"), Ok(Number::from(18)));
  }

  #[test]
  fn test_unary_minus() {
    assert_strict_eq!(eval("-3*-3"), Ok(Number::from(9)));
    assert_strict_eq!(eval("-3*(-3)"), Ok(Number::from(9)));
    assert_strict_eq!(eval("--3"), Ok(Number::from(3)));
    assert_strict_eq!(eval("-3+2"), Ok(Number::from(-1)));
    assert_strict_eq!(eval("-2^2"), Ok(Number::from(-4)));
    assert_strict_eq!(eval("2^-1"), Ok(Number::from(0.5)));
    assert_strict_eq!(eval("2*-3+1"), Ok(Number::from(-5)));
  }

  #[test]
  fn test_parens() {
    assert_strict_eq!(eval("2*(7-4)"), Ok(Number::from(6)));
    assert_strict_eq!(eval("(7-4)/2"), Ok(Number::from(1.5)));
    assert_strict_eq!(eval("5*(2+4)-2*-2^5+1/8*8-2"), Ok(Number::from(93.0)));
  }

  #[test]
  fn test_malformed() {
    assert!(eval("1+").unwrap_err().is_malformed_expression());
    assert!(eval("(6").unwrap_err().is_malformed_expression());
    assert!(eval("abc").unwrap_err().is_malformed_expression());
    assert!(eval("").unwrap_err().is_malformed_expression());
    assert!(eval("1 2").unwrap_err().is_malformed_expression());
    assert!(eval("6)").unwrap_err().is_malformed_expression());
    assert!(eval("*3").unwrap_err().is_malformed_expression());
  }

  #[test]
  fn test_malformed_messages() {
    assert_eq!(
      eval("(6").unwrap_err().to_string(),
      "Malformed expression: Expected token ')', got end of input",
    );
    assert_eq!(
      eval("1+").unwrap_err().to_string(),
      "Malformed expression: Unexpected end of input",
    );
  }

  #[test]
  fn test_division_by_zero() {
    assert_eq!(eval("1/(2-2)"), Err(Error::Arithmetic(ArithmeticError::DivisionByZero)));
  }
}
