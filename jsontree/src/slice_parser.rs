// SPDX-License-Identifier: Apache-2.0

use crate::config::ParserConfig;
use crate::parse_error::ParseError;
use crate::parser_core::ParserCore;
use crate::slice_input_buffer::SliceInputBuffer;
use crate::value::Value;

/// Builds a [`Value`] tree from an in-memory document.
///
/// Whitespace and comments are skipped with the vectorized scanner when the
/// `simd` feature is enabled.
///
/// # Example
/// ```
/// use jsontree::{ParserConfig, SliceParser, Value};
///
/// let value = SliceParser::with_config(r#"{"name": "value"}"#, ParserConfig::strict())
///     .parse()
///     .unwrap();
/// assert_eq!(value.get("name"), Ok(&Value::from("value")));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SliceParser<'a> {
    input: &'a [u8],
    config: ParserConfig,
}

impl<'a> SliceParser<'a> {
    /// Creates a lenient parser over `str`, `[u8]`, `Vec<u8>` or anything
    /// else that views as bytes.
    pub fn new<B: AsRef<[u8]> + ?Sized>(input: &'a B) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    pub fn with_config<B: AsRef<[u8]> + ?Sized>(input: &'a B, config: ParserConfig) -> Self {
        Self {
            input: input.as_ref(),
            config,
        }
    }

    pub fn config(&self) -> ParserConfig {
        self.config
    }

    pub fn parse(self) -> Result<Value, ParseError> {
        log::trace!("slice parse of {} bytes", self.input.len());
        ParserCore::new(SliceInputBuffer::new(self.input), self.config).parse_document()
    }
}

/// Parses `input` with the lenient dialect.
///
/// The result is always an array holding every root value in document order:
/// ```
/// let roots = jsontree::parse("// two roots\n1 {\"a\": [true,]}").unwrap();
/// assert_eq!(roots.len(), Ok(2));
/// ```
pub fn parse<B: AsRef<[u8]> + ?Sized>(input: &B) -> Result<Value, ParseError> {
    SliceParser::new(input).parse()
}

/// Parses `input` as exactly one RFC 8259 document.
///
/// ```
/// use jsontree::ErrorKind;
///
/// assert!(jsontree::parse_strict("[1, 2]").is_ok());
/// let err = jsontree::parse_strict("[1, 2,]").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::TrailingComma);
/// ```
pub fn parse_strict<B: AsRef<[u8]> + ?Sized>(input: &B) -> Result<Value, ParseError> {
    SliceParser::with_config(input, ParserConfig::strict()).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_error::ErrorKind;
    use test_log::test;

    #[test]
    fn test_accepts_any_byte_view() {
        let owned: Vec<u8> = b"[1]".to_vec();
        assert_eq!(parse_strict(&owned), Ok(Value::from(vec![1])));
        assert_eq!(parse_strict(&b"[1]"[..]), Ok(Value::from(vec![1])));
        assert_eq!(parse_strict("[1]"), Ok(Value::from(vec![1])));
        assert_eq!(parse_strict(&String::from("[1]")), Ok(Value::from(vec![1])));
    }

    #[test]
    fn test_parser_is_reusable_by_copy() {
        let parser = SliceParser::new("1 2");
        assert_eq!(parser.config(), ParserConfig::lenient());
        let first = parser.parse().unwrap();
        let second = parser.parse().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_whitespace_runs_longer_than_a_vector() {
        let json = format!("{}[{}1{},{}2]{}", " ".repeat(70), "\n".repeat(33), "\t".repeat(17), " ".repeat(40), "\r\n".repeat(20));
        assert_eq!(parse_strict(&json), Ok(Value::from(vec![1, 2])));
    }

    #[test]
    fn test_error_position_is_absolute() {
        let json = format!("{}[1,]", " ".repeat(100));
        assert_eq!(parse_strict(&json), ParseError::err(ErrorKind::TrailingComma, 103));
    }
}
