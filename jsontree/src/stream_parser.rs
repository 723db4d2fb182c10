// SPDX-License-Identifier: Apache-2.0

use alloc::vec;

use crate::config::ParserConfig;
use crate::parse_error::{ErrorKind, ParseError};
use crate::parser_core::ParserCore;
use crate::stream_buffer::StreamBuffer;
use crate::value::Value;

/// Buffer size used by [`parse_reader`](crate::parse_reader).
pub const DEFAULT_STREAM_BUFFER_SIZE: usize = 4096;

/// Trait for input sources that can provide data to the streaming parser.
pub trait Reader {
    /// The error type returned by read operations
    type Error;

    /// Read data into the provided buffer.
    /// Returns the number of bytes read, or an error.
    ///
    /// # Contract
    /// - A return value of 0 **MUST** indicate true end of stream
    /// - Implementations **MUST NOT** return 0 unless no more data will ever be available
    /// - Returning 0 followed by non-zero reads in subsequent calls violates this contract
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

impl<R: Reader + ?Sized> Reader for &mut R {
    type Error = R::Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        (**self).read(buf)
    }
}

/// Builds a [`Value`] tree from a [`Reader`], refilling a caller-provided
/// buffer as it goes.
///
/// The buffer only bounds how much input is held at once; string and number
/// tokens longer than the buffer are assembled across refills. The produced
/// tree is identical to what [`SliceParser`](crate::SliceParser) builds from
/// the same bytes.
pub struct StreamParser<'b, R: Reader> {
    reader: R,
    buffer: &'b mut [u8],
    config: ParserConfig,
}

impl<'b, R: Reader> StreamParser<'b, R> {
    /// Creates a lenient parser.
    pub fn new(reader: R, buffer: &'b mut [u8]) -> Self {
        Self::with_config(reader, buffer, ParserConfig::default())
    }

    pub fn with_config(reader: R, buffer: &'b mut [u8], config: ParserConfig) -> Self {
        Self {
            reader,
            buffer,
            config,
        }
    }

    /// Consumes the whole stream and returns the document.
    ///
    /// A zero-length buffer fails with [`ErrorKind::EmptyBuffer`] before the
    /// reader is touched; reader failures surface as
    /// [`ErrorKind::ReaderError`] at the stream offset where they happened.
    pub fn parse(self) -> Result<Value, ParseError> {
        if self.buffer.is_empty() {
            return ParseError::err(ErrorKind::EmptyBuffer, 0);
        }
        log::trace!("stream parse with a {} byte buffer", self.buffer.len());
        let input = StreamBuffer::new(self.reader, self.buffer);
        ParserCore::new(input, self.config).parse_document()
    }
}

/// Parses everything `reader` yields using the lenient dialect.
pub fn parse_reader<R: Reader>(reader: R) -> Result<Value, ParseError> {
    parse_reader_with_config(reader, ParserConfig::lenient())
}

/// Parses everything `reader` yields as one RFC 8259 document.
pub fn parse_reader_strict<R: Reader>(reader: R) -> Result<Value, ParseError> {
    parse_reader_with_config(reader, ParserConfig::strict())
}

fn parse_reader_with_config<R: Reader>(reader: R, config: ParserConfig) -> Result<Value, ParseError> {
    let mut buffer = vec![0u8; DEFAULT_STREAM_BUFFER_SIZE];
    StreamParser::with_config(reader, &mut buffer, config).parse()
}
