// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;

use crate::parse_error::ParseError;
use crate::scanner;
use crate::shared::{is_string_special, is_token_delimiter, InputSource};

/// Random-access input: the whole document is one contiguous slice.
///
/// This is the source that gets the vectorized scanner; runs of string content
/// and number tokens are copied out in bulk instead of byte by byte.
#[derive(Debug)]
pub(crate) struct SliceInputBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceInputBuffer<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn rest(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or_default()
    }

    fn copy_until(&mut self, out: &mut Vec<u8>, stop: fn(u8) -> bool) {
        let rest = self.rest();
        let len = rest.iter().position(|&b| stop(b)).unwrap_or(rest.len());
        out.extend_from_slice(&rest[..len]);
        self.pos += len;
    }
}

impl InputSource for SliceInputBuffer<'_> {
    fn peek(&mut self) -> Result<Option<u8>, ParseError> {
        Ok(self.data.get(self.pos).copied())
    }

    fn advance(&mut self) {
        if self.pos < self.data.len() {
            self.pos += 1;
        }
    }

    fn position(&self) -> usize {
        self.pos
    }

    fn skip_whitespace(&mut self) -> Result<(), ParseError> {
        self.pos = scanner::skip_whitespace(self.data, self.pos);
        Ok(())
    }

    fn skip_insignificant(&mut self) -> Result<(), ParseError> {
        self.pos = scanner::skip_insignificant(self.data, self.pos)?;
        Ok(())
    }

    fn copy_string_run(&mut self, out: &mut Vec<u8>) -> Result<(), ParseError> {
        self.copy_until(out, is_string_special);
        Ok(())
    }

    fn copy_token(&mut self, out: &mut Vec<u8>) -> Result<(), ParseError> {
        self.copy_until(out, is_token_delimiter);
        Ok(())
    }
}
