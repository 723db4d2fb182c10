// SPDX-License-Identifier: Apache-2.0

use crate::stream_parser::Reader;

/// Adapts any [`std::io::Read`] (files, sockets, stdin) to [`Reader`].
///
/// Interrupted reads are retried; every other I/O error ends the parse with
/// [`ErrorKind::ReaderError`](crate::ErrorKind::ReaderError).
///
/// ```no_run
/// use jsontree::{parse_reader, IoReader};
///
/// let file = std::fs::File::open("data.json").unwrap();
/// let roots = parse_reader(IoReader::new(file)).unwrap();
/// println!("{roots:#}");
/// ```
#[derive(Debug)]
pub struct IoReader<R> {
    inner: R,
}

impl<R: std::io::Read> IoReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: std::io::Read> Reader for IoReader<R> {
    type Error = std::io::Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        loop {
            match self.inner.read(buf) {
                Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
                result => return result,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_error::{ErrorKind, ParseError};
    use crate::stream_parser::parse_reader_strict;
    use crate::value::Value;
    use std::io;

    /// Fails once with `Interrupted`, then serves `data`.
    struct FlakyReader<'a> {
        interrupted: bool,
        data: &'a [u8],
    }

    impl io::Read for FlakyReader<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::from(io::ErrorKind::Interrupted));
            }
            io::Read::read(&mut self.data, buf)
        }
    }

    struct BrokenPipe;

    impl io::Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_cursor_source() {
        let value = parse_reader_strict(IoReader::new(io::Cursor::new(b"{\"k\": [1.5]}"))).unwrap();
        assert_eq!(value.get("k"), Ok(&Value::from(vec![1.5])));
    }

    #[test]
    fn test_interrupted_is_retried() {
        let reader = IoReader::new(FlakyReader {
            interrupted: false,
            data: b"true",
        });
        assert_eq!(parse_reader_strict(reader), Ok(Value::Bool(true)));
    }

    #[test]
    fn test_io_error_becomes_reader_error() {
        assert_eq!(
            parse_reader_strict(IoReader::new(BrokenPipe)),
            ParseError::err(ErrorKind::ReaderError, 0)
        );
    }
}
