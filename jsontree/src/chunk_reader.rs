// SPDX-License-Identifier: Apache-2.0

//! An in-memory [`Reader`] that can hand data out in fixed-size chunks.
//!
//! ```rust
//! use jsontree::{ChunkReader, StreamParser, Value};
//!
//! let json = br#"{"name": "Alice", "age": 30}"#;
//! let mut buffer = [0u8; 8];
//! // At most 3 bytes per read, so values straddle many refills.
//! let parser = StreamParser::new(ChunkReader::new(json, 3), &mut buffer);
//! let root = parser.parse().unwrap();
//! assert_eq!(root.at(0).unwrap().get("age"), Ok(&Value::Integer(30)));
//! ```

use core::convert::Infallible;

use crate::stream_parser::Reader;

/// A [`Reader`] over a byte slice.
///
/// [`ChunkReader::full_slice`] hands out as much as the caller's buffer holds;
/// [`ChunkReader::new`] caps every read, which simulates packetized input and
/// exercises the parser's refill paths.
#[derive(Debug, Clone)]
pub struct ChunkReader<'a> {
    data: &'a [u8],
    pos: usize,
    chunk_size: usize,
}

impl<'a> ChunkReader<'a> {
    /// Each `read()` returns at most `chunk_size` bytes (minimum 1).
    pub fn new(data: &'a [u8], chunk_size: usize) -> Self {
        Self {
            data,
            pos: 0,
            chunk_size: chunk_size.max(1),
        }
    }

    pub fn full_slice(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            chunk_size: usize::MAX,
        }
    }

    /// Bytes not yet handed out.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }
}

impl Reader for ChunkReader<'_> {
    type Error = Infallible;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let rest = self.data.get(self.pos..).unwrap_or_default();
        let count = rest.len().min(buf.len()).min(self.chunk_size);
        if let (Some(dst), Some(src)) = (buf.get_mut(..count), rest.get(..count)) {
            dst.copy_from_slice(src);
        }
        self.pos += count;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_slice_is_limited_by_buffer() {
        let mut reader = ChunkReader::full_slice(b"hello world");
        let mut buf = [0u8; 5];
        assert_eq!(reader.read(&mut buf), Ok(5));
        assert_eq!(&buf, b"hello");

        let mut buf = [0u8; 10];
        assert_eq!(reader.read(&mut buf), Ok(6));
        assert_eq!(&buf[..6], b" world");
        assert_eq!(reader.read(&mut buf), Ok(0));
    }

    #[test]
    fn test_chunks() {
        let mut reader = ChunkReader::new(b"hello world", 3);
        let mut buf = [0u8; 10];
        let mut pieces = Vec::new();
        loop {
            let n = reader.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            pieces.push(buf[..n].to_vec());
        }
        assert_eq!(pieces, [&b"hel"[..], b"lo ", b"wor", b"ld"]);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_zero_chunk_size_still_progresses() {
        let mut reader = ChunkReader::new(b"ab", 0);
        let mut buf = [0u8; 4];
        assert_eq!(reader.read(&mut buf), Ok(1));
        assert_eq!(reader.remaining(), 1);
    }

    #[test]
    fn test_empty_input() {
        let mut reader = ChunkReader::full_slice(b"");
        let mut buf = [0u8; 4];
        assert_eq!(reader.read(&mut buf), Ok(0));
    }
}
