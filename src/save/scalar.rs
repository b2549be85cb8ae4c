use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static INT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?[0-9]+$").expect("int regex compiles"));
static FLOAT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?[0-9]+\.[0-9]+$").expect("float regex compiles"));

/// Typed scalar inferred from one console token.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
	/// Base-10 integer, possibly negative.
	Int(i64),
	/// Decimal floating point number.
	Float(f64),
	/// Case-insensitive `true`/`false` token.
	Bool(bool),
	/// Any other token, kept verbatim.
	Text(Box<str>),
}

/// Infer the most specific scalar type for a trimmed token.
///
/// Rules apply in order, first match wins: integer, float, boolean,
/// verbatim text. Never fails; an empty token becomes `Text("")`.
pub fn coerce(token: &str) -> Scalar {
	if INT_RE.is_match(token) {
		if let Ok(value) = token.parse::<i64>() {
			return Scalar::Int(value);
		}
	}
	if FLOAT_RE.is_match(token) {
		if let Ok(value) = token.parse::<f64>() {
			return Scalar::Float(value);
		}
	}
	if token.eq_ignore_ascii_case("true") {
		return Scalar::Bool(true);
	}
	if token.eq_ignore_ascii_case("false") {
		return Scalar::Bool(false);
	}
	Scalar::Text(token.into())
}

#[cfg(test)]
mod tests {
	use super::{Scalar, coerce};

	#[test]
	fn integer_tokens_coerce_to_int() {
		assert_eq!(coerce("80"), Scalar::Int(80));
		assert_eq!(coerce("-17"), Scalar::Int(-17));
		assert_eq!(coerce("0"), Scalar::Int(0));
	}

	#[test]
	fn decimal_tokens_coerce_to_float() {
		assert_eq!(coerce("3.14"), Scalar::Float(3.14));
		assert_eq!(coerce("-3.5"), Scalar::Float(-3.5));
	}

	#[test]
	fn boolean_tokens_are_case_insensitive() {
		assert_eq!(coerce("True"), Scalar::Bool(true));
		assert_eq!(coerce("TRUE"), Scalar::Bool(true));
		assert_eq!(coerce("false"), Scalar::Bool(false));
		assert_eq!(coerce("False"), Scalar::Bool(false));
	}

	#[test]
	fn everything_else_stays_text() {
		assert_eq!(coerce("abc"), Scalar::Text("abc".into()));
		assert_eq!(coerce(""), Scalar::Text("".into()));
		assert_eq!(coerce("1.2.3"), Scalar::Text("1.2.3".into()));
		assert_eq!(coerce("-"), Scalar::Text("-".into()));
	}

	#[test]
	fn integer_wins_over_float_and_text() {
		// "12" must never come back as Float(12.0).
		assert!(matches!(coerce("12"), Scalar::Int(12)));
	}
}
