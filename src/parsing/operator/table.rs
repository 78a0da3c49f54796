
//! The static registry of recognized operators.
//!
//! Binary and unary operators are keyed separately, since `-` names
//! both subtraction and negation. Every operator token, together with
//! the two parentheses, forms the delimiter set that the tokenizer
//! splits on.

use super::Operator;

use phf::{phf_map, phf_set};

pub const LEFT_PAREN: &str = "(";
pub const RIGHT_PAREN: &str = ")";

static BINARY_OPERATORS: phf::Map<&'static str, Operator> = phf_map! {
  "+" => Operator::Plus,
  "-" => Operator::Minus,
  "*" => Operator::Multiply,
  "/" => Operator::Divide,
  "^" => Operator::Power,
};

static UNARY_OPERATORS: phf::Map<&'static str, Operator> = phf_map! {
  "-" => Operator::UnaryMinus,
};

static DELIMITERS: phf::Set<&'static str> = phf_set! {
  "+", "-", "*", "/", "^", "(", ")",
};

/// Looks up the binary operator with the given token.
pub fn binary_operator(token: &str) -> Option<Operator> {
  BINARY_OPERATORS.get(token).copied()
}

/// Looks up the unary operator with the given token.
pub fn unary_operator(token: &str) -> Option<Operator> {
  UNARY_OPERATORS.get(token).copied()
}

/// Whether `token` is an operator token or a parenthesis.
pub fn is_delimiter(token: &str) -> bool {
  DELIMITERS.contains(token)
}

pub fn delimiters() -> impl Iterator<Item = &'static str> {
  DELIMITERS.iter().copied()
}

/// Every registered operator, binary ones first.
pub fn operators() -> impl Iterator<Item = Operator> {
  BINARY_OPERATORS.values().chain(UNARY_OPERATORS.values()).copied()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parsing::operator::Arity;

  use std::collections::HashSet;

  #[test]
  fn test_minus_is_overloaded_by_arity() {
    assert_eq!(binary_operator("-"), Some(Operator::Minus));
    assert_eq!(unary_operator("-"), Some(Operator::UnaryMinus));
    assert_ne!(Operator::Minus.precedence(), Operator::UnaryMinus.precedence());
  }

  #[test]
  fn test_lookup_missing() {
    assert_eq!(binary_operator("("), None);
    assert_eq!(binary_operator("%"), None);
    assert_eq!(unary_operator("+"), None);
  }

  #[test]
  fn test_tables_are_keyed_by_token_and_arity() {
    for op in operators() {
      let found = match op.arity() {
        Arity::Unary => unary_operator(op.token()),
        Arity::Binary => binary_operator(op.token()),
      };
      assert_eq!(found, Some(op));
    }
    assert_eq!(operators().count(), 6);
  }

  #[test]
  fn test_delimiters_are_operator_tokens_and_parens() {
    let mut expected: HashSet<&str> = operators().map(|op| op.token()).collect();
    expected.insert(LEFT_PAREN);
    expected.insert(RIGHT_PAREN);
    let actual: HashSet<&str> = delimiters().collect();
    assert_eq!(actual, expected);
    assert!(is_delimiter("^"));
    assert!(!is_delimiter("1"));
    assert!(!is_delimiter("e"));
  }
}
