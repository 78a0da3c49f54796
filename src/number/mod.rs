
//! Numerical values produced by the evaluators.

mod repr;
mod visitor;

pub use repr::NumberRepr;

use visitor::NumberPair;
use crate::util::stricteq::StrictEq;

use thiserror::Error;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::ops;
use std::cmp::Ordering;

/// Real number type which is either an exact machine integer or an
/// IEEE 754 floating point value.
///
/// Integer arithmetic stays exact for as long as it can. Division
/// always produces a float, as does any operation with a float
/// operand or an integer result that would overflow `i64`. Use
/// [`Number::repr`] to get the number's current representation.
#[derive(Debug, Clone, Copy)]
pub struct Number {
  inner: NumberImpl,
}

#[derive(Debug, Clone, Copy)]
enum NumberImpl {
  Integer(i64),
  Float(f64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{input}' cannot be cast to a number")]
#[non_exhaustive]
pub struct ParseNumberError {
  pub input: String,
}

/// Failures of the arithmetic itself, as opposed to failures to
/// parse the expression.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArithmeticError {
  #[error("Division by zero")]
  DivisionByZero,
  #[error("Bad number of operands for operator {operator}: expected {expected}, got {actual}")]
  OperandCount {
    operator: &'static str,
    expected: usize,
    actual: usize,
  },
}

impl Number {
  /// Gets the current representation of the number.
  pub fn repr(&self) -> NumberRepr {
    match self.inner {
      NumberImpl::Integer(_) => NumberRepr::Integer,
      NumberImpl::Float(_) => NumberRepr::Float,
    }
  }

  /// Converts `self` to an `f64`. Large integers may lose precision.
  pub fn to_f64(&self) -> f64 {
    match self.inner {
      NumberImpl::Integer(i) => i as f64,
      NumberImpl::Float(f) => f,
    }
  }

  pub fn is_zero(&self) -> bool {
    match self.inner {
      NumberImpl::Integer(i) => i == 0,
      NumberImpl::Float(f) => f == 0.0,
    }
  }

  /// True division. The result is always a float, even when both
  /// operands are integers and the divisor goes in evenly.
  pub fn try_div(self, other: Number) -> Result<Number, ArithmeticError> {
    if other.is_zero() {
      return Err(ArithmeticError::DivisionByZero);
    }
    let (left, right) = NumberPair::promote(self, other).into_floats();
    Ok(Number::from(left / right))
  }

  /// Raises `self` to the power `exp`.
  ///
  /// An integer raised to a non-negative integer power stays exact
  /// unless the result overflows. Every other combination produces a
  /// float, which may be NaN if the value does not, mathematically,
  /// exist as a real number. Zero raised to a negative power is
  /// treated as a division by zero.
  pub fn try_pow(self, exp: Number) -> Result<Number, ArithmeticError> {
    let pair = NumberPair::promote(self, exp);
    let (float_base, float_exp) = pair.into_floats();
    if float_base == 0.0 && float_exp < 0.0 {
      return Err(ArithmeticError::DivisionByZero);
    }
    match pair {
      NumberPair::Integers(base, exp) if exp >= 0 => {
        let exact = u32::try_from(exp).ok().and_then(|exp| base.checked_pow(exp));
        Ok(exact.map_or_else(|| Number::from(float_base.powf(float_exp)), Number::from))
      }
      _ => Ok(Number::from(float_base.powf(float_exp))),
    }
  }
}

/// Constructs an integer number from an `i32`.
impl From<i32> for Number {
  fn from(i: i32) -> Number {
    Number { inner: NumberImpl::Integer(i.into()) }
  }
}

/// Constructs an integer number from an `i64`.
impl From<i64> for Number {
  fn from(i: i64) -> Number {
    Number { inner: NumberImpl::Integer(i) }
  }
}

/// Constructs a floating-point number from an `f64` value.
impl From<f64> for Number {
  fn from(f: f64) -> Number {
    Number { inner: NumberImpl::Float(f) }
  }
}

/// Parses an integer if possible, then falls back to a float. Integer
/// literals which do not fit in an `i64` are read as floats. Digits
/// may be grouped with single underscores, as in `1_000`.
impl FromStr for Number {
  type Err = ParseNumberError;

  fn from_str(s: &str) -> Result<Number, ParseNumberError> {
    let err = || ParseNumberError { input: s.to_owned() };
    let digits = strip_digit_separators(s).ok_or_else(err)?;
    if let Ok(i) = digits.parse::<i64>() {
      return Ok(Number::from(i));
    }
    digits.parse::<f64>()
      .map(Number::from)
      .map_err(|_| err())
  }
}

/// Removes `_` digit separators. Returns `None` if an underscore is
/// not between two ASCII digits.
fn strip_digit_separators(s: &str) -> Option<Cow<'_, str>> {
  if !s.contains('_') {
    return Some(Cow::Borrowed(s));
  }
  let bytes = s.as_bytes();
  let well_placed = bytes.iter()
    .enumerate()
    .filter(|(_, b)| **b == b'_')
    .all(|(i, _)| {
      i > 0 && bytes[i - 1].is_ascii_digit() && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
    });
  well_placed.then(|| Cow::Owned(s.replace('_', "")))
}

/// Floats with a magnitude outside `[SCIENTIFIC_BELOW, SCIENTIFIC_FROM)`
/// are printed in scientific notation.
const SCIENTIFIC_BELOW: f64 = 1e-4;
const SCIENTIFIC_FROM: f64 = 1e16;

/// Writes `d` as `<mantissa>e<sign><exponent>`, with a signed exponent
/// of at least two digits (`1e+20`, `1.5e-07`).
fn write_scientific(f: &mut Formatter<'_>, d: f64) -> fmt::Result {
  let formatted = format!("{:e}", d);
  let (mantissa, exponent) = formatted.split_once('e').unwrap_or((&formatted, "0"));
  let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
  let sign = if exponent < 0 { '-' } else { '+' };
  write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

impl Display for Number {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self.inner {
      NumberImpl::Integer(i) => {
        i.fmt(f)
      }
      NumberImpl::Float(d) => {
        if d.is_nan() {
          f.write_str("nan")
        } else if d.is_finite() && d != 0.0 && !(SCIENTIFIC_BELOW..SCIENTIFIC_FROM).contains(&d.abs()) {
          write_scientific(f, d)
        } else if d.fract() == 0.0 {
          // Integral floats keep one decimal place so they read as floats.
          write!(f, "{:.1}", d)
        } else {
          write!(f, "{}", d)
        }
      }
    }
  }
}

/// `PartialEq` impl for `Number` compares the numerical value and
/// ignores the representation. To include the representation, use
/// [`StrictEq::strict_eq`].
///
/// # Examples
///
/// ```
/// # use calcyard::number::Number;
/// assert_eq!(Number::from(0), Number::from(0));
/// assert_eq!(Number::from(0), Number::from(0.0));
/// assert_ne!(Number::from(1), Number::from(0.5));
/// ```
impl PartialEq for Number {
  fn eq(&self, other: &Number) -> bool {
    match NumberPair::promote(*self, *other) {
      NumberPair::Integers(left, right) => left == right,
      NumberPair::Floats(left, right) => left == right,
    }
  }
}

impl StrictEq for Number {
  /// Compares both the representation and the value of the type. This
  /// is stricter than the standard [`PartialEq`] implementation.
  fn strict_eq(&self, other: &Number) -> bool {
    self.repr() == other.repr() && self == other
  }
}

impl PartialOrd for Number {
  fn partial_cmp(&self, other: &Number) -> Option<Ordering> {
    match NumberPair::promote(*self, *other) {
      NumberPair::Integers(left, right) => left.partial_cmp(&right),
      NumberPair::Floats(left, right) => left.partial_cmp(&right),
    }
  }
}

impl AbsDiffEq for Number {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    <f64 as AbsDiffEq>::default_epsilon()
  }

  fn abs_diff_eq(&self, other: &Number, epsilon: f64) -> bool {
    self.to_f64().abs_diff_eq(&other.to_f64(), epsilon)
  }
}

impl RelativeEq for Number {
  fn default_max_relative() -> f64 {
    <f64 as RelativeEq>::default_max_relative()
  }

  fn relative_eq(&self, other: &Number, epsilon: f64, max_relative: f64) -> bool {
    self.to_f64().relative_eq(&other.to_f64(), epsilon, max_relative)
  }
}

impl UlpsEq for Number {
  fn default_max_ulps() -> u32 {
    <f64 as UlpsEq>::default_max_ulps()
  }

  fn ulps_eq(&self, other: &Number, epsilon: f64, max_ulps: u32) -> bool {
    self.to_f64().ulps_eq(&other.to_f64(), epsilon, max_ulps)
  }
}

impl ops::Add for Number {
  type Output = Number;

  fn add(self, other: Number) -> Number {
    match NumberPair::promote(self, other) {
      NumberPair::Integers(left, right) =>
        left.checked_add(right).map_or_else(|| Number::from(left as f64 + right as f64), Number::from),
      NumberPair::Floats(left, right) => Number::from(left + right),
    }
  }
}

impl ops::Sub for Number {
  type Output = Number;

  fn sub(self, other: Number) -> Number {
    match NumberPair::promote(self, other) {
      NumberPair::Integers(left, right) =>
        left.checked_sub(right).map_or_else(|| Number::from(left as f64 - right as f64), Number::from),
      NumberPair::Floats(left, right) => Number::from(left - right),
    }
  }
}

impl ops::Mul for Number {
  type Output = Number;

  fn mul(self, other: Number) -> Number {
    match NumberPair::promote(self, other) {
      NumberPair::Integers(left, right) =>
        left.checked_mul(right).map_or_else(|| Number::from(left as f64 * right as f64), Number::from),
      NumberPair::Floats(left, right) => Number::from(left * right),
    }
  }
}

impl ops::Neg for Number {
  type Output = Number;

  fn neg(self) -> Number {
    match self.inner {
      NumberImpl::Integer(i) => i.checked_neg().map_or_else(|| Number::from(-(i as f64)), Number::from),
      NumberImpl::Float(f) => Number::from(-f),
    }
  }
}
