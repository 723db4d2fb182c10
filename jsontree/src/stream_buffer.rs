// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;

use crate::parse_error::{ErrorKind, ParseError};
use crate::shared::{is_string_special, is_token_delimiter, InputSource};
use crate::stream_parser::Reader;

/// Forward-only input pulled from a [`Reader`] through a caller-provided buffer.
///
/// Only the window `buffer[start..end]` holds unread bytes. Once the reader
/// returns 0 the stream is finished and never polled again.
pub(crate) struct StreamBuffer<'b, R: Reader> {
    reader: R,
    buffer: &'b mut [u8],
    start: usize,
    end: usize,
    /// Bytes consumed since the beginning of the stream
    consumed: usize,
    finished: bool,
}

impl<'b, R: Reader> StreamBuffer<'b, R> {
    pub fn new(reader: R, buffer: &'b mut [u8]) -> Self {
        Self {
            reader,
            buffer,
            start: 0,
            end: 0,
            consumed: 0,
            finished: false,
        }
    }

    /// Makes sure at least one unread byte is buffered, unless the stream ended.
    fn fill(&mut self) -> Result<bool, ParseError> {
        if self.start < self.end {
            return Ok(true);
        }
        if self.finished {
            return Ok(false);
        }
        let read = self
            .reader
            .read(self.buffer)
            .map_err(|_| ParseError::new(ErrorKind::ReaderError, self.consumed))?;
        if read == 0 {
            self.finished = true;
            return Ok(false);
        }
        self.start = 0;
        self.end = read.min(self.buffer.len());
        Ok(true)
    }

    fn window(&self) -> &[u8] {
        self.buffer.get(self.start..self.end).unwrap_or_default()
    }

    fn consume(&mut self, count: usize) {
        self.start += count;
        self.consumed += count;
    }

    fn copy_until(&mut self, out: &mut Vec<u8>, stop: fn(u8) -> bool) -> Result<(), ParseError> {
        while self.fill()? {
            let window = self.window();
            match window.iter().position(|&b| stop(b)) {
                Some(len) => {
                    out.extend_from_slice(&window[..len]);
                    self.consume(len);
                    return Ok(());
                }
                None => {
                    let len = window.len();
                    out.extend_from_slice(window);
                    self.consume(len);
                }
            }
        }
        Ok(())
    }
}

impl<R: Reader> InputSource for StreamBuffer<'_, R> {
    fn peek(&mut self) -> Result<Option<u8>, ParseError> {
        if self.fill()? {
            Ok(self.window().first().copied())
        } else {
            Ok(None)
        }
    }

    fn advance(&mut self) {
        if self.start < self.end {
            self.consume(1);
        }
    }

    fn position(&self) -> usize {
        self.consumed
    }

    fn copy_string_run(&mut self, out: &mut Vec<u8>) -> Result<(), ParseError> {
        self.copy_until(out, is_string_special)
    }

    fn copy_token(&mut self, out: &mut Vec<u8>) -> Result<(), ParseError> {
        self.copy_until(out, is_token_delimiter)
    }
}
