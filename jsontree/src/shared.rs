// SPDX-License-Identifier: Apache-2.0

//! Shared components for the slice and stream front ends.

use alloc::vec::Vec;

use crate::parse_error::ParseError;

/// True for the four JSON whitespace bytes.
pub const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// Bytes that end a number token.
pub(crate) const fn is_token_delimiter(byte: u8) -> bool {
    is_whitespace(byte) || matches!(byte, b',' | b'}' | b']' | b'/')
}

/// Bytes that interrupt a raw run of string content.
pub(crate) const fn is_string_special(byte: u8) -> bool {
    byte == b'"' || byte == b'\\' || byte < 0x20
}

/// Cursor over the bytes being parsed.
///
/// The grammar in [`crate::parser_core`] is written once against this trait.
/// Random-access input overrides the skipping and bulk-copy hooks with the
/// vectorized scanner; forward-only streams keep the byte-at-a-time defaults.
pub(crate) trait InputSource {
    /// Looks at the next byte without consuming it. `None` is end of input.
    fn peek(&mut self) -> Result<Option<u8>, ParseError>;

    /// Consumes the byte returned by the preceding `peek`.
    fn advance(&mut self);

    /// Byte offset of the next unconsumed byte.
    fn position(&self) -> usize;

    fn next_byte(&mut self) -> Result<Option<u8>, ParseError> {
        let byte = self.peek()?;
        if byte.is_some() {
            self.advance();
        }
        Ok(byte)
    }

    /// Skips JSON whitespace only.
    fn skip_whitespace(&mut self) -> Result<(), ParseError> {
        crate::scanner::skip_whitespace_stream(self)
    }

    /// Skips whitespace and `//` or `/* */` comments.
    fn skip_insignificant(&mut self) -> Result<(), ParseError> {
        crate::scanner::skip_insignificant_stream(self)
    }

    /// Appends string content up to the next quote, backslash or control byte.
    fn copy_string_run(&mut self, out: &mut Vec<u8>) -> Result<(), ParseError> {
        while let Some(byte) = self.peek()? {
            if is_string_special(byte) {
                break;
            }
            out.push(byte);
            self.advance();
        }
        Ok(())
    }

    /// Appends bytes up to the next token delimiter or end of input.
    fn copy_token(&mut self, out: &mut Vec<u8>) -> Result<(), ParseError> {
        while let Some(byte) = self.peek()? {
            if is_token_delimiter(byte) {
                break;
            }
            out.push(byte);
            self.advance();
        }
        Ok(())
    }
}
