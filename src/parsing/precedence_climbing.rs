
//! Precedence climbing: recursive descent where each binary operator
//! only binds operands at or above a minimum precedence.

use super::Evaluator;
use super::cursor::{TokenCursor, eval_leaf};
use super::operator::{Operands, Precedence};
use super::operator::table::{LEFT_PAREN, RIGHT_PAREN};
use crate::error::Error;
use crate::number::Number;

/// Evaluates expressions by precedence climbing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrecedenceClimbing;

#[derive(Debug)]
struct ClimbingState<'a, S> {
  cursor: TokenCursor<'a, S>,
}

impl Evaluator for PrecedenceClimbing {
  #[tracing::instrument(level = "trace", skip_all, fields(tokens = tokens.len()))]
  fn evaluate<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Number, Error> {
    let mut state = ClimbingState { cursor: TokenCursor::new(tokens) };
    let value = state.climb(Precedence::MIN)?;
    state.cursor.expect_end()?;
    Ok(value)
  }
}

impl<'a, S: AsRef<str>> ClimbingState<'a, S> {
  fn climb(&mut self, min_precedence: Precedence) -> Result<Number, Error> {
    let mut result = self.primary()?;
    while let Some(op) = self.cursor.peek_binary().filter(|op| op.precedence() >= min_precedence) {
      self.cursor.advance();
      // A left-associative operator must not capture another
      // operator of the same precedence in its right operand.
      let next_min = match op.associativity() {
        Some(assoc) if assoc.is_right_assoc() => op.precedence(),
        _ => op.precedence().incremented(),
      };
      let rhs = self.climb(next_min)?;
      result = op.apply(Operands::Binary(result, rhs))?;
    }
    Ok(result)
  }

  fn primary(&mut self) -> Result<Number, Error> {
    if let Some(op) = self.cursor.peek_unary() {
      self.cursor.advance();
      let operand = self.climb(op.precedence())?;
      Ok(op.apply(Operands::Unary(operand))?)
    } else if self.cursor.peek_is(LEFT_PAREN) {
      self.cursor.advance();
      let value = self.climb(Precedence::MIN)?;
      self.cursor.expect(RIGHT_PAREN)?;
      Ok(value)
    } else if let Some(leaf) = self.cursor.peek_leaf() {
      let value = eval_leaf(leaf)?;
      self.cursor.advance();
      Ok(value)
    } else {
      Err(self.cursor.unexpected().into())
    }
  }
}
