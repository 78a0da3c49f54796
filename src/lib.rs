
//! Evaluation of infix arithmetic expressions.
//!
//! An expression string is split into tokens, every token is
//! validated, and the token stream is then evaluated by one of two
//! interchangeable algorithms: the [shunting yard](parsing::ShuntingYard)
//! or [precedence climbing](parsing::PrecedenceClimbing).
//!
//! ```
//! # use calcyard::{calc, number::Number};
//! assert_eq!(calc("2*(7-4)").unwrap(), Number::from(6));
//! ```

pub mod error;
pub mod number;
pub mod parsing;
pub mod util;

pub use error::Error;
pub use number::Number;
pub use parsing::Strategy;

use parsing::tokenizer::{tokenize, remove_quotes};
use parsing::validator::validate_tokens;

/// Evaluates `expr` with the default strategy.
pub fn calc(expr: &str) -> Result<Number, Error> {
  calc_with(expr, Strategy::default())
}

/// Strips quotes from `expr`, then tokenizes, validates, and
/// evaluates it with `strategy`.
pub fn calc_with(expr: &str, strategy: Strategy) -> Result<Number, Error> {
  let expr = remove_quotes(expr);
  let tokens = tokenize(&expr);
  tracing::debug!(tokens = tokens.len(), %strategy, "evaluating expression");
  validate_tokens(&tokens)?;
  let result = strategy.evaluate(&tokens);
  match &result {
    Ok(value) => tracing::debug!(%value, "evaluated"),
    Err(err) => tracing::debug!(%err, "evaluation failed"),
  }
  result
}
