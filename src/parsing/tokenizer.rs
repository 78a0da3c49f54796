
//! Splits an expression string into tokens.
//!
//! Every operator symbol and parenthesis is a token of its own. The
//! text between two such delimiters is split on whitespace, so number
//! literals (including forms like `1.5` and `10e2`) pass through
//! untouched. Numeric syntax is not checked here; that is the job of
//! the [validator](super::validator).

use super::operator::table;
use crate::util::regex_opt;
use crate::util::regexes::QUOTES_RE;

use regex::Regex;
use once_cell::sync::Lazy;

use std::borrow::Cow;

static DELIMITER_RE: Lazy<Regex> = Lazy::new(|| regex_opt(table::delimiters()));

/// Builds the list of tokens of `expr`, in the same order as the
/// input.
///
/// # Examples
///
/// ```
/// # use calcyard::parsing::tokenizer::tokenize;
/// assert_eq!(tokenize("5 + 1*(2+3)"), vec!["5", "+", "1", "*", "(", "2", "+", "3", ")"]);
/// assert_eq!(tokenize("12 34"), vec!["12", "34"]);
/// ```
pub fn tokenize(expr: &str) -> Vec<&str> {
  let mut tokens = Vec::new();
  let mut start = 0;
  for m in DELIMITER_RE.find_iter(expr) {
    tokens.extend(expr[start..m.start()].split_whitespace());
    tokens.push(m.as_str());
    start = m.end();
  }
  tokens.extend(expr[start..].split_whitespace());
  tokens
}

/// Removes every single and double quote from the expression.
pub fn remove_quotes(expr: &str) -> Cow<'_, str> {
  QUOTES_RE.replace_all(expr, "")
}
