
//! Rejects tokens which are neither numbers nor delimiters, before
//! any evaluator runs.

use super::operator::table;
use crate::number::Number;

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid token: {}", .token.as_deref().unwrap_or("<none>"))]
pub struct InvalidTokenError {
  token: Option<String>,
}

impl InvalidTokenError {
  pub fn new(token: Option<&str>) -> Self {
    Self { token: token.map(str::to_owned) }
  }

  /// The offending token, or `None` if the token was absent.
  pub fn token(&self) -> Option<&str> {
    self.token.as_deref()
  }
}

/// Whether the token is a stringified number.
pub fn is_value(token: &str) -> bool {
  token.parse::<Number>().is_ok()
}

/// Checks that `token` is a number, an operator, or a parenthesis,
/// and returns it unchanged if so. An absent token is never valid.
pub fn validate_token(token: Option<&str>) -> Result<&str, InvalidTokenError> {
  match token {
    Some(t) if is_value(t) || table::is_delimiter(t) => Ok(t),
    _ => Err(InvalidTokenError::new(token)),
  }
}

/// Validates every token in order, failing on the first invalid one.
pub fn validate_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<(), InvalidTokenError> {
  for token in tokens {
    validate_token(Some(token.as_ref()))?;
  }
  Ok(())
}
