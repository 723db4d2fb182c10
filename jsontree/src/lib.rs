// SPDX-License-Identifier: Apache-2.0

//! JSON into an owned [`Value`] tree, and back to text.
//!
//! Two dialects are supported:
//! - **lenient** (the default): `//` and `/* */` comments, one trailing comma
//!   per array/object, and any number of concatenated root values. The result
//!   is always an array of the roots.
//! - **strict**: exactly one RFC 8259 document.
//!
//! ```
//! use jsontree::Value;
//!
//! let mut doc = jsontree::parse_strict(r#"{"name": "probe", "tags": ["a"]}"#).unwrap();
//! doc.get_mut("tags").unwrap().push("b").unwrap();
//! doc.insert("count", 2).unwrap();
//! assert_eq!(
//!     doc.stringify_lean(),
//!     r#"{"count":2,"name":"probe","tags":["a","b"]}"#
//! );
//! assert!(Value::Integer(1).try_lt(&Value::Integer(2)).unwrap());
//! ```
//!
//! Input can come from a slice ([`SliceParser`], [`parse`]) or from any
//! [`Reader`] through a fixed buffer ([`StreamParser`], [`parse_reader`]).
//! Both build identical trees.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

mod config;
pub use config::{Dialect, ParserConfig, DEFAULT_MAX_DEPTH};

mod parse_error;
pub use parse_error::{ErrorKind, ParseError};

mod value;
pub use value::{Array, Object, Value, ValueType};

mod value_error;
pub use value_error::ValueError;

mod stringify;

mod shared;
pub use shared::is_whitespace;

pub mod scanner;

mod escape_processor;

mod number_parser;

mod parser_core;

mod slice_input_buffer;

mod slice_parser;
pub use slice_parser::{parse, parse_strict, SliceParser};

mod stream_buffer;

mod stream_parser;
pub use stream_parser::{
    parse_reader, parse_reader_strict, Reader, StreamParser, DEFAULT_STREAM_BUFFER_SIZE,
};

mod chunk_reader;
pub use chunk_reader::ChunkReader;

#[cfg(feature = "std")]
mod io_reader;
#[cfg(feature = "std")]
pub use io_reader::IoReader;
