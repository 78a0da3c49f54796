//! Conformance suite run against both evaluation strategies.

use calcyard::{calc_with, Error, Number};
use calcyard::number::NumberRepr;
use calcyard::parsing::{evaluate, Strategy as Algorithm};
use calcyard::parsing::recognizer::recognize;
use calcyard::parsing::tokenizer::tokenize;
use calcyard::parsing::validator::validate_tokens;
use calcyard::util::stricteq::StrictEq;

use approx::assert_relative_eq;
use proptest::prelude::*;

fn int(n: i64) -> Number {
  Number::from(n)
}

fn float(f: f64) -> Number {
  Number::from(f)
}

fn conformance_suite() -> Vec<(&'static str, Number)> {
  vec![
    ("2+2", int(4)),
    ("2*(7-4)", int(6)),
    ("2^2^3", int(256)),
    ("(2^2)^3", int(64)),
    ("-3*-3", int(9)),
    ("-3*(-3)", int(9)),
    ("(7-4)/2", float(1.5)),
    ("2-3*3", int(-7)),
    ("1-2-3", int(-4)),
    ("100/8/5", float(2.5)),
    ("2*3^2", int(18)),
    ("-2^2", int(-4)),
    ("2^-1", float(0.5)),
    ("3-(-2)", int(5)),
    ("-(-(3))", int(3)),
    ("2*3-4*5", int(-14)),
    ("  12 ", int(12)),
    ("1.5*2", float(3.0)),
    ("10e2+1", float(1001.0)),
    ("2^0.5", float(std::f64::consts::SQRT_2)),
    ("5*(2+4)-2*-2^5+1/8*8-2", float(93.0)),
    ("-1.5+2*3", float(4.5)),
  ]
}

#[test]
fn test_conformance_suite() {
  for (expr, expected) in conformance_suite() {
    for strategy in Algorithm::ALL {
      let actual = calc_with(expr, strategy)
        .unwrap_or_else(|err| panic!("{expr} failed with {strategy}: {err}"));
      assert_relative_eq!(actual, expected);
      assert_eq!(actual.repr(), expected.repr(), "{expr} with {strategy}");
    }
  }
}

#[test]
fn test_strategies_agree_on_suite() {
  for (expr, _) in conformance_suite() {
    let tokens = tokenize(expr);
    let sh = evaluate(&tokens, Algorithm::ShuntingYard);
    let pc = evaluate(&tokens, Algorithm::PrecedenceClimbing);
    assert!(sh.strict_eq(&pc), "{expr}: {sh:?} != {pc:?}");
  }
}

#[test]
fn test_suite_is_recognized_and_valid() {
  for (expr, _) in conformance_suite() {
    let tokens = tokenize(expr);
    assert_eq!(validate_tokens(&tokens), Ok(()), "{expr}");
    assert_eq!(recognize(&tokens), Ok(()), "{expr}");
  }
}

#[test]
fn test_malformed_inputs() {
  for expr in ["1+", "(6", "abc", "", "()", "1 2", "6)", "2*/3"] {
    let tokens = tokenize(expr);
    assert!(recognize(&tokens).is_err(), "{expr}");
    for strategy in Algorithm::ALL {
      let err = evaluate(&tokens, strategy).unwrap_err();
      assert!(matches!(err, Error::MalformedExpression(_)), "{expr} with {strategy}: {err:?}");
    }
  }
}

#[test]
fn test_invalid_tokens_are_caught_before_evaluation() {
  for strategy in Algorithm::ALL {
    assert!(calc_with("abc", strategy).unwrap_err().is_invalid_token());
    assert!(calc_with("1 + 2 $ 3", strategy).unwrap_err().is_invalid_token());
    // Validation runs first, even on a malformed stream.
    assert!(calc_with("1 + x +", strategy).unwrap_err().is_invalid_token());
  }
}

#[test]
fn test_pinned_unary_results() {
  // Unary minus on either side of a binary operator, with and
  // without parentheses.
  for expr in ["-3*-3", "-3*(-3)", "(-3)*(-3)", "-(3*-3)"] {
    for strategy in Algorithm::ALL {
      let result = calc_with(expr, strategy).unwrap();
      assert!(result.strict_eq(&Number::from(9)), "{expr} with {strategy}: {result}");
    }
  }
}

#[test]
fn test_power_towers_agree() {
  for expr in ["2^3^2", "-2^2", "2^-1", "(-8)^(1/3)", "-(2)^-(2)^2", "5^5^5", "0^0", "2*3^2-4/2^2"] {
    let sh = calc_with(expr, Algorithm::ShuntingYard);
    let pc = calc_with(expr, Algorithm::PrecedenceClimbing);
    assert!(same_result(&sh, &pc), "{expr}: {sh:?} != {pc:?}");
  }
  let nan = calc_with("(-8)^(1/3)", Algorithm::ShuntingYard).unwrap();
  assert!(nan.to_f64().is_nan());
}

#[test]
fn test_integer_overflow_falls_back_to_float() {
  for strategy in Algorithm::ALL {
    let result = calc_with("9223372036854775807+1", strategy).unwrap();
    assert_eq!(result.repr(), NumberRepr::Float);
    let result = calc_with("2^64", strategy).unwrap();
    assert_relative_eq!(result, Number::from(18446744073709551616.0));
  }
}

// Leaves stay small so that towers of `^` remain mostly finite.
fn arb_expression() -> impl Strategy<Value = String> {
  let leaf = (0i64..6).prop_map(|n| n.to_string());
  leaf.prop_recursive(4, 32, 2, |inner| {
    prop_oneof![
      (inner.clone(), prop::sample::select(vec!["+", "-", "*", "/", "^"]), inner.clone())
        .prop_map(|(left, op, right)| format!("{left} {op} {right}")),
      inner.clone().prop_map(|expr| format!("-{expr}")),
      inner.prop_map(|expr| format!("({expr})")),
    ]
  })
}

/// Strict equality, except that two NaN floats count as the same
/// result.
fn same_result(left: &Result<Number, Error>, right: &Result<Number, Error>) -> bool {
  match (left, right) {
    (Ok(l), Ok(r)) if l.to_f64().is_nan() || r.to_f64().is_nan() => {
      l.repr() == r.repr() && l.to_f64().is_nan() && r.to_f64().is_nan()
    }
    _ => left.strict_eq(right),
  }
}

proptest! {
  #[test]
  fn tokenize_is_idempotent(s in "\\PC*") {
    let tokens = tokenize(&s);
    let rejoined = tokens.join(" ");
    prop_assert_eq!(tokenize(&rejoined), tokens);
  }

  #[test]
  fn strategies_agree(expr in arb_expression()) {
    let tokens = tokenize(&expr);
    prop_assert_eq!(recognize(&tokens), Ok(()));
    let sh = evaluate(&tokens, Algorithm::ShuntingYard);
    let pc = evaluate(&tokens, Algorithm::PrecedenceClimbing);
    prop_assert!(same_result(&sh, &pc), "{}: {:?} != {:?}", expr, sh, pc);
  }
}
