
//! Tokenizing, validating, and evaluating infix expressions.

pub mod cursor;
pub mod operator;
pub mod precedence_climbing;
pub mod recognizer;
pub mod shunting_yard;
pub mod tokenizer;
pub mod validator;

pub use precedence_climbing::PrecedenceClimbing;
pub use shunting_yard::ShuntingYard;

use crate::error::Error;
use crate::number::Number;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A strategy for evaluating a token stream. Every implementation
/// consumes the whole stream through a single forward cursor and
/// either produces one number or fails.
pub trait Evaluator {
  fn evaluate<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Number, Error>;
}

/// The available evaluation algorithms. Both produce identical
/// results on every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
  ShuntingYard,
  #[default]
  PrecedenceClimbing,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("Unknown evaluation strategy '{0}', expected 'pc' or 'sh'")]
pub struct ParseStrategyError(String);

impl Strategy {
  pub const ALL: [Strategy; 2] = [Strategy::ShuntingYard, Strategy::PrecedenceClimbing];

  pub fn evaluate<S: AsRef<str>>(self, tokens: &[S]) -> Result<Number, Error> {
    match self {
      Strategy::ShuntingYard => ShuntingYard.evaluate(tokens),
      Strategy::PrecedenceClimbing => PrecedenceClimbing.evaluate(tokens),
    }
  }
}

impl Display for Strategy {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Strategy::ShuntingYard => write!(f, "shunting-yard"),
      Strategy::PrecedenceClimbing => write!(f, "precedence-climbing"),
    }
  }
}

impl FromStr for Strategy {
  type Err = ParseStrategyError;

  fn from_str(s: &str) -> Result<Strategy, ParseStrategyError> {
    match s {
      "sh" | "shunting-yard" => Ok(Strategy::ShuntingYard),
      "pc" | "precedence-climbing" => Ok(Strategy::PrecedenceClimbing),
      _ => Err(ParseStrategyError(s.to_owned())),
    }
  }
}

/// Evaluates an already-tokenized expression with the given strategy.
/// Tokens are not validated here; see [`validator`].
pub fn evaluate<S: AsRef<str>>(tokens: &[S], strategy: Strategy) -> Result<Number, Error> {
  strategy.evaluate(tokens)
}
