// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;

use crate::parse_error::{ErrorKind, ParseError};
use crate::shared::InputSource;

/// Decoding of backslash escapes inside string literals.
pub(crate) struct EscapeProcessor;

impl EscapeProcessor {
    /// Process a simple escape sequence character and return the unescaped byte.
    ///
    /// # Arguments
    /// * `escape_char` - The character following the backslash in an escape sequence
    ///
    /// # Returns
    /// The unescaped byte value, or `None` if this is not a single-byte escape.
    pub fn process_simple_escape(escape_char: u8) -> Option<u8> {
        match escape_char {
            b'n' => Some(b'\n'),
            b't' => Some(b'\t'),
            b'r' => Some(b'\r'),
            b'\\' => Some(b'\\'),
            b'"' => Some(b'"'),
            b'/' => Some(b'/'),
            b'b' => Some(0x08), // Backspace
            b'f' => Some(0x0C), // Form feed
            _ => None,
        }
    }

    /// The numeric value (0-15) of a hex digit.
    pub fn hex_value(byte: u8) -> Option<u32> {
        match byte {
            b'0'..=b'9' => Some(u32::from(byte - b'0')),
            b'a'..=b'f' => Some(u32::from(byte - b'a') + 10),
            b'A'..=b'F' => Some(u32::from(byte - b'A') + 10),
            _ => None,
        }
    }

    /// Check if a Unicode codepoint is a high surrogate (0xD800-0xDBFF)
    pub fn is_high_surrogate(codepoint: u32) -> bool {
        (0xD800..=0xDBFF).contains(&codepoint)
    }

    /// Check if a Unicode codepoint is a low surrogate (0xDC00-0xDFFF)
    pub fn is_low_surrogate(codepoint: u32) -> bool {
        (0xDC00..=0xDFFF).contains(&codepoint)
    }

    /// Combine a high and low surrogate pair into a single Unicode codepoint
    pub fn combine_surrogate_pair(high: u32, low: u32) -> Option<u32> {
        if !Self::is_high_surrogate(high) || !Self::is_low_surrogate(low) {
            return None;
        }
        Some(0x10000 + ((high & 0x3FF) << 10) + (low & 0x3FF))
    }

    /// Decodes one escape sequence; the backslash has already been consumed.
    ///
    /// A high surrogate `\uD8xx` must be followed directly by a `\uDCxx` low
    /// surrogate; the pair is written as one 4-byte UTF-8 sequence.
    pub fn decode_escape<I: InputSource>(input: &mut I, out: &mut Vec<u8>) -> Result<(), ParseError> {
        let position = input.position();
        let Some(escape_char) = input.next_byte()? else {
            return ParseError::err(ErrorKind::UnterminatedString, position);
        };
        if escape_char == b'u' {
            let codepoint = Self::decode_unicode_escape(input, position)?;
            let ch = char::from_u32(codepoint)
                .ok_or(ParseError::new(ErrorKind::InvalidUnicodeCodepoint, position))?;
            let mut utf8 = [0u8; 4];
            out.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
            return Ok(());
        }
        match Self::process_simple_escape(escape_char) {
            Some(byte) => {
                out.push(byte);
                Ok(())
            }
            None => ParseError::err(ErrorKind::InvalidEscapeSequence, position),
        }
    }

    fn decode_unicode_escape<I: InputSource>(input: &mut I, position: usize) -> Result<u32, ParseError> {
        let first = Self::read_hex4(input)?;
        if Self::is_low_surrogate(first) {
            return ParseError::err(ErrorKind::InvalidUnicodeCodepoint, position);
        }
        if !Self::is_high_surrogate(first) {
            return Ok(first);
        }
        if input.next_byte()? != Some(b'\\') || input.next_byte()? != Some(b'u') {
            return ParseError::err(ErrorKind::InvalidUnicodeCodepoint, position);
        }
        let second = Self::read_hex4(input)?;
        Self::combine_surrogate_pair(first, second)
            .ok_or(ParseError::new(ErrorKind::InvalidUnicodeCodepoint, position))
    }

    fn read_hex4<I: InputSource>(input: &mut I) -> Result<u32, ParseError> {
        let mut codepoint = 0u32;
        for _ in 0..4 {
            let position = input.position();
            let digit = input
                .next_byte()?
                .and_then(Self::hex_value)
                .ok_or(ParseError::new(ErrorKind::InvalidUnicodeEscape, position))?;
            codepoint = (codepoint << 4) | digit;
        }
        Ok(codepoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slice_input_buffer::SliceInputBuffer;

    fn decode(escaped: &[u8]) -> Result<Vec<u8>, ParseError> {
        let mut input = SliceInputBuffer::new(escaped);
        let mut out = Vec::new();
        EscapeProcessor::decode_escape(&mut input, &mut out)?;
        Ok(out)
    }

    #[test]
    fn test_simple_escapes() {
        assert_eq!(EscapeProcessor::process_simple_escape(b'n'), Some(b'\n'));
        assert_eq!(EscapeProcessor::process_simple_escape(b'b'), Some(0x08));
        assert_eq!(EscapeProcessor::process_simple_escape(b'f'), Some(0x0C));
        assert_eq!(EscapeProcessor::process_simple_escape(b'x'), None);
        assert_eq!(decode(b"\""), Ok(Vec::from(&b"\""[..])));
        assert_eq!(decode(b"/"), Ok(Vec::from(&b"/"[..])));
    }

    #[test]
    fn test_hex_digits() {
        assert_eq!(EscapeProcessor::hex_value(b'0'), Some(0));
        assert_eq!(EscapeProcessor::hex_value(b'a'), Some(10));
        assert_eq!(EscapeProcessor::hex_value(b'F'), Some(15));
        assert_eq!(EscapeProcessor::hex_value(b'g'), None);
    }

    #[test]
    fn test_unicode_escape_widths() {
        assert_eq!(decode(b"u0041"), Ok(Vec::from(&b"A"[..])));
        assert_eq!(decode(b"u00e9"), Ok("é".as_bytes().to_vec()));
        assert_eq!(decode(b"u20AC"), Ok("€".as_bytes().to_vec()));
    }

    #[test]
    fn test_surrogate_pair_is_combined() {
        assert_eq!(decode(b"uD83D\\uDE00"), Ok("😀".as_bytes().to_vec()));
        assert_eq!(
            EscapeProcessor::combine_surrogate_pair(0xD834, 0xDD1E),
            Some(0x1D11E)
        );
        assert_eq!(EscapeProcessor::combine_surrogate_pair(0x0041, 0xDD1E), None);
    }

    #[test]
    fn test_lone_surrogates_fail() {
        let lone_high = decode(b"uD83D\"").unwrap_err();
        assert_eq!(lone_high.kind(), ErrorKind::InvalidUnicodeCodepoint);
        let lone_low = decode(b"uDE00").unwrap_err();
        assert_eq!(lone_low.kind(), ErrorKind::InvalidUnicodeCodepoint);
        let bad_pair = decode(b"uD83D\\u0041").unwrap_err();
        assert_eq!(bad_pair.kind(), ErrorKind::InvalidUnicodeCodepoint);
    }

    #[test]
    fn test_invalid_escapes() {
        assert_eq!(
            decode(b"x"),
            ParseError::err(ErrorKind::InvalidEscapeSequence, 0)
        );
        assert_eq!(decode(b"u12"), ParseError::err(ErrorKind::InvalidUnicodeEscape, 3));
        assert_eq!(decode(b"uXYZW"), ParseError::err(ErrorKind::InvalidUnicodeEscape, 1));
        assert_eq!(decode(b""), ParseError::err(ErrorKind::UnterminatedString, 0));
    }
}
