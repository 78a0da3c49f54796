
//! Checks the structure of a token stream without computing its
//! value.
//!
//! The grammar is the one both evaluators accept:
//!
//! ```text
//! E --> P {B P}
//! P --> v | "(" E ")" | U P
//! ```
//!
//! where `B` is any binary operator, `U` any unary operator, and `v`
//! any token that is not an operator or parenthesis.

use super::cursor::{TokenCursor, MalformedExpressionError};
use super::operator::table::{LEFT_PAREN, RIGHT_PAREN};

/// Succeeds if `tokens` form a complete expression. Leaves are not
/// converted to numbers, so a stream which recognizes successfully
/// can still fail to evaluate on a non-numeric leaf or on the
/// arithmetic itself.
pub fn recognize<S: AsRef<str>>(tokens: &[S]) -> Result<(), MalformedExpressionError> {
  let mut cursor = TokenCursor::new(tokens);
  expression(&mut cursor)?;
  cursor.expect_end()
}

fn expression<S: AsRef<str>>(cursor: &mut TokenCursor<'_, S>) -> Result<(), MalformedExpressionError> {
  primary(cursor)?;
  while cursor.peek_binary().is_some() {
    cursor.advance();
    primary(cursor)?;
  }
  Ok(())
}

fn primary<S: AsRef<str>>(cursor: &mut TokenCursor<'_, S>) -> Result<(), MalformedExpressionError> {
  if cursor.peek_leaf().is_some() {
    cursor.advance();
    Ok(())
  } else if cursor.peek_is(LEFT_PAREN) {
    cursor.advance();
    expression(cursor)?;
    cursor.expect(RIGHT_PAREN)
  } else if cursor.peek_unary().is_some() {
    cursor.advance();
    primary(cursor)
  } else {
    Err(cursor.unexpected())
  }
}
