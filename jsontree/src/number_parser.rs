// SPDX-License-Identifier: Apache-2.0

use crate::config::Dialect;
use crate::parse_error::{ErrorKind, ParseError};
use crate::value::Value;

/// Converts a complete number token into a value.
///
/// Tokens without a fraction or exponent that fit in an `i64` become
/// [`Value::Integer`]; all others go through float conversion and become
/// [`Value::Number`]. Negative zero (`-0`, `-00`) takes the float path so the
/// sign survives as `Number(-0.0)`. Magnitudes beyond `f64` range are
/// rejected rather than turned into infinities.
///
/// The lenient dialect accepts whatever the float parser accepts over the
/// characters `0-9 + - . e E`; the strict dialect first checks the RFC 8259
/// number grammar.
pub(crate) fn parse_number_token(
    token: &[u8],
    dialect: Dialect,
    position: usize,
) -> Result<Value, ParseError> {
    let invalid = ParseError::new(ErrorKind::InvalidNumberSyntax, position);
    let well_formed = match dialect {
        Dialect::Lenient => token.iter().all(|&b| is_number_char(b)),
        Dialect::Strict => is_rfc8259_number(token),
    };
    if token.is_empty() || !well_formed {
        return Err(invalid);
    }
    // Only ASCII gets this far.
    let text = core::str::from_utf8(token).map_err(|_| invalid)?;

    if !token.iter().any(|&b| matches!(b, b'.' | b'e' | b'E')) {
        match text.parse::<i64>() {
            Ok(0) if token.first() == Some(&b'-') => {}
            Ok(integer) => return Ok(Value::Integer(integer)),
            Err(_) => {}
        }
    }
    match text.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(Value::Number(number)),
        _ => Err(invalid),
    }
}

const fn is_number_char(byte: u8) -> bool {
    matches!(byte, b'0'..=b'9' | b'+' | b'-' | b'.' | b'e' | b'E')
}

/// `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`
fn is_rfc8259_number(token: &[u8]) -> bool {
    fn digits(token: &[u8], mut i: usize) -> usize {
        while token.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    }

    let mut i = 0;
    if token.first() == Some(&b'-') {
        i += 1;
    }
    match token.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => i = digits(token, i + 1),
        _ => return false,
    }
    if token.get(i) == Some(&b'.') {
        let end = digits(token, i + 1);
        if end == i + 1 {
            return false;
        }
        i = end;
    }
    if matches!(token.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(token.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let end = digits(token, i);
        if end == i {
            return false;
        }
        i = end;
    }
    i == token.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lenient(token: &str) -> Result<Value, ParseError> {
        parse_number_token(token.as_bytes(), Dialect::Lenient, 0)
    }

    fn strict(token: &str) -> Result<Value, ParseError> {
        parse_number_token(token.as_bytes(), Dialect::Strict, 0)
    }

    #[test]
    fn test_integers() {
        assert_eq!(lenient("0"), Ok(Value::Integer(0)));
        assert_eq!(lenient("-42"), Ok(Value::Integer(-42)));
        assert_eq!(lenient("+7"), Ok(Value::Integer(7)));
        assert_eq!(strict("9223372036854775807"), Ok(Value::Integer(i64::MAX)));
    }

    #[test]
    fn test_integer_overflow_falls_back_to_number() {
        assert_eq!(
            strict("9223372036854775808"),
            Ok(Value::Number(9223372036854775808.0))
        );
    }

    #[test]
    fn test_floats() {
        assert_eq!(strict("1.5"), Ok(Value::Number(1.5)));
        assert_eq!(strict("-0.25e2"), Ok(Value::Number(-25.0)));
        assert_eq!(strict("1E3"), Ok(Value::Number(1000.0)));
        assert_eq!(strict("1e-2"), Ok(Value::Number(0.01)));
        assert_eq!(lenient("1.23e10"), Ok(Value::Number(1.23e10)));
    }

    #[test]
    fn test_negative_zero_keeps_its_sign() {
        for dialect in [Dialect::Lenient, Dialect::Strict] {
            let value = parse_number_token(b"-0", dialect, 0).unwrap();
            assert!(matches!(value, Value::Number(n) if n == 0.0 && n.is_sign_negative()));
        }
        assert!(matches!(lenient("-00"), Ok(Value::Number(n)) if n.is_sign_negative()));
        assert_eq!(strict("0"), Ok(Value::Integer(0)));
        assert_eq!(lenient("+0"), Ok(Value::Integer(0)));
    }

    #[test]
    fn test_out_of_range_floats_are_rejected() {
        for token in ["1e400", "-1e400", "1.7976931348623159e308"] {
            let invalid = Err(ParseError::new(ErrorKind::InvalidNumberSyntax, 0));
            assert_eq!(strict(token), invalid, "{token}");
            assert_eq!(lenient(token), invalid, "{token}");
        }
        assert_eq!(strict("1.7976931348623157e308"), Ok(Value::Number(f64::MAX)));
        // Underflow rounds to zero and is kept.
        assert_eq!(strict("1e-400"), Ok(Value::Number(0.0)));
    }

    #[test]
    fn test_lenient_rejects_non_number_chars() {
        assert!(lenient("-inf").is_err());
        assert!(lenient("1x").is_err());
        assert!(lenient("-").is_err());
        assert!(lenient("1e").is_err());
        assert!(lenient("--1").is_err());
    }

    #[test]
    fn test_strict_grammar() {
        for bad in ["+1", "01", "-", "1.", ".5", "1e", "1e+", "-01", "1.e3", "0x10"] {
            assert_eq!(
                strict(bad),
                Err(ParseError::new(ErrorKind::InvalidNumberSyntax, 0)),
                "{bad}"
            );
        }
        for good in ["0", "-0", "10", "0.0", "0e0", "-1.5E+10", "123456.789e-3"] {
            assert!(strict(good).is_ok(), "{good}");
        }
    }
}
