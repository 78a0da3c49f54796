
use crate::number::ArithmeticError;
use crate::parsing::cursor::MalformedExpressionError;
use crate::parsing::validator::InvalidTokenError;

use thiserror::Error;

/// Any failure raised while turning an expression string into a
/// number. Errors are never recovered internally; they propagate to
/// the caller as-is.
#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  InvalidToken(#[from] InvalidTokenError),
  #[error("{0}")]
  MalformedExpression(#[from] MalformedExpressionError),
  #[error("{0}")]
  Arithmetic(#[from] ArithmeticError),
}

impl Error {
  pub fn is_invalid_token(&self) -> bool {
    matches!(self, Error::InvalidToken(_))
  }

  pub fn is_malformed_expression(&self) -> bool {
    matches!(self, Error::MalformedExpression(_))
  }
}
