
//! Module containing generally useful regular expressions.

use regex::Regex;
use once_cell::sync::Lazy;

/// Single and double quote characters, which may surround or pepper
/// an expression passed in from a shell.
pub static QUOTES_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r#"['"]"#).unwrap());
