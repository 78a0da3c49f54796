
//! A forward-only cursor over a token stream, shared by the
//! evaluators and the recognizer.

use super::operator::{Operator, table};
use crate::number::Number;

use thiserror::Error;

/// The token stream does not match the expression grammar.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Malformed expression: {message}")]
pub struct MalformedExpressionError {
  message: String,
}

/// Read position over a slice of tokens. Lookahead is always exactly
/// one token, and the cursor never moves backward.
#[derive(Debug)]
pub struct TokenCursor<'a, S> {
  tokens: &'a [S],
  position: usize,
}

impl MalformedExpressionError {
  pub fn new(message: impl Into<String>) -> Self {
    Self { message: message.into() }
  }

  /// The token `expected` (or end of input, if `None`) was required,
  /// but `found` was there instead.
  pub fn expected(expected: Option<&str>, found: Option<&str>) -> Self {
    Self::new(format!("Expected {}, got {}", describe(expected), describe(found)))
  }

  /// No grammar rule applies to `found`.
  pub fn unexpected(found: Option<&str>) -> Self {
    Self::new(format!("Unexpected {}", describe(found)))
  }

  pub fn message(&self) -> &str {
    &self.message
  }
}

fn describe(token: Option<&str>) -> String {
  match token {
    Some(token) => format!("token '{token}'"),
    None => String::from("end of input"),
  }
}

impl<'a, S: AsRef<str>> TokenCursor<'a, S> {
  pub fn new(tokens: &'a [S]) -> Self {
    Self { tokens, position: 0 }
  }

  /// The current token, or `None` once every token has been consumed.
  pub fn peek(&self) -> Option<&'a str> {
    self.tokens.get(self.position).map(|t| t.as_ref())
  }

  pub fn peek_is(&self, token: &str) -> bool {
    self.peek() == Some(token)
  }

  /// The current token, if it is a binary operator.
  pub fn peek_binary(&self) -> Option<Operator> {
    self.peek().and_then(table::binary_operator)
  }

  /// The current token, if it is a unary operator.
  pub fn peek_unary(&self) -> Option<Operator> {
    self.peek().and_then(table::unary_operator)
  }

  /// The current token, if it is a leaf (anything that is not an
  /// operator or a parenthesis).
  pub fn peek_leaf(&self) -> Option<&'a str> {
    self.peek().filter(|t| !table::is_delimiter(t))
  }

  /// Moves past the current token. At the end of input, this has no
  /// effect.
  pub fn advance(&mut self) {
    if self.position < self.tokens.len() {
      self.position += 1;
    }
  }

  pub fn position(&self) -> usize {
    self.position
  }

  /// Consumes `token`, failing if it is not the current token.
  pub fn expect(&mut self, token: &str) -> Result<(), MalformedExpressionError> {
    if self.peek_is(token) {
      self.advance();
      Ok(())
    } else {
      Err(MalformedExpressionError::expected(Some(token), self.peek()))
    }
  }

  /// Fails unless every token has been consumed.
  pub fn expect_end(&self) -> Result<(), MalformedExpressionError> {
    match self.peek() {
      None => Ok(()),
      found => Err(MalformedExpressionError::expected(None, found)),
    }
  }

  /// An error for the current token, for when no rule matches it.
  pub fn unexpected(&self) -> MalformedExpressionError {
    MalformedExpressionError::unexpected(self.peek())
  }
}

/// Converts a leaf token to its numerical value, as an integer if
/// possible and as a float otherwise.
pub fn eval_leaf(token: &str) -> Result<Number, MalformedExpressionError> {
  token.parse::<Number>().map_err(|err| MalformedExpressionError::new(err.to_string()))
}
