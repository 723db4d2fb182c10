// SPDX-License-Identifier: Apache-2.0

//! Recursive-descent grammar shared by the slice and stream front ends.
//!
//! `ParserCore` only talks to an [`InputSource`], so both front ends produce
//! identical trees and identical errors for identical bytes.

use alloc::string::String;
use alloc::vec::Vec;

use crate::config::{Dialect, ParserConfig};
use crate::escape_processor::EscapeProcessor;
use crate::number_parser::parse_number_token;
use crate::parse_error::{ErrorKind, ParseError};
use crate::shared::InputSource;
use crate::value::{Array, Object, Value};

pub(crate) struct ParserCore<I: InputSource> {
    input: I,
    config: ParserConfig,
    /// Number of arrays/objects currently open
    depth: usize,
}

impl<I: InputSource> ParserCore<I> {
    pub fn new(input: I, config: ParserConfig) -> Self {
        Self {
            input,
            config,
            depth: 0,
        }
    }

    /// Parses the complete input.
    ///
    /// Lenient documents always yield an array holding every root value in
    /// order (possibly none); strict documents yield their single root.
    pub fn parse_document(mut self) -> Result<Value, ParseError> {
        log::debug!(
            "parsing {:?} document, max depth {}",
            self.config.dialect,
            self.config.max_depth
        );
        let result = match self.config.dialect {
            Dialect::Lenient => self.parse_roots(),
            Dialect::Strict => self.parse_single_root(),
        };
        if let Err(err) = &result {
            log::debug!("parse failed: {err}");
        }
        result
    }

    fn parse_roots(&mut self) -> Result<Value, ParseError> {
        let mut roots = Array::new();
        loop {
            self.skip()?;
            if self.input.peek()?.is_none() {
                break;
            }
            roots.push(self.parse_value()?);
            log::trace!("root value {} ends at byte {}", roots.len(), self.input.position());
        }
        Ok(Value::Array(roots))
    }

    fn parse_single_root(&mut self) -> Result<Value, ParseError> {
        self.skip()?;
        let value = self.parse_value()?;
        self.skip()?;
        if self.input.peek()?.is_some() {
            return ParseError::err(ErrorKind::TrailingContent, self.input.position());
        }
        Ok(value)
    }

    /// Skips whatever the dialect treats as insignificant between tokens.
    fn skip(&mut self) -> Result<(), ParseError> {
        match self.config.dialect {
            Dialect::Lenient => self.input.skip_insignificant(),
            Dialect::Strict => self.input.skip_whitespace(),
        }
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let position = self.input.position();
        match self.input.peek()? {
            Some(b'{') => self.parse_object(),
            Some(b'[') => self.parse_array(),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b't') => self.parse_literal(b"true", Value::Bool(true)),
            Some(b'f') => self.parse_literal(b"false", Value::Bool(false)),
            Some(b'n') => self.parse_literal(b"null", Value::Null),
            Some(b'0'..=b'9' | b'-' | b'+') => self.parse_number(),
            Some(_) => ParseError::err(ErrorKind::InvalidValueSyntax, position),
            None => ParseError::err(ErrorKind::UnexpectedEnd, position),
        }
    }

    fn enter_container(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.config.max_depth {
            return ParseError::err(ErrorKind::MaxDepthReached, self.input.position());
        }
        self.depth += 1;
        self.input.advance();
        Ok(())
    }

    fn exit_container(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Handles the `]` or `}` that may start a slot. Returns true when the
    /// container was closed.
    fn close_if_end(&mut self, close: u8, after_comma: bool, endless: ErrorKind) -> Result<bool, ParseError> {
        let position = self.input.position();
        match self.input.peek()? {
            None => ParseError::err(endless, position),
            Some(byte) if byte == close => {
                if after_comma && self.config.is_strict() {
                    return ParseError::err(ErrorKind::TrailingComma, position);
                }
                self.input.advance();
                Ok(true)
            }
            Some(_) => Ok(false),
        }
    }

    /// Consumes the `,` or closing bracket after an element. Returns true when
    /// the container was closed.
    fn expect_separator(&mut self, close: u8, endless: ErrorKind) -> Result<bool, ParseError> {
        self.skip()?;
        let position = self.input.position();
        match self.input.next_byte()? {
            Some(b',') => Ok(false),
            Some(byte) if byte == close => Ok(true),
            Some(_) => ParseError::err(ErrorKind::MissingValueSeparator, position),
            None => ParseError::err(endless, position),
        }
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter_container()?;
        let mut items = Array::new();
        let mut after_comma = false;
        loop {
            self.skip()?;
            if self.close_if_end(b']', after_comma, ErrorKind::EndlessArray)? {
                break;
            }
            items.push(self.parse_value()?);
            if self.expect_separator(b']', ErrorKind::EndlessArray)? {
                break;
            }
            after_comma = true;
        }
        self.exit_container();
        Ok(Value::Array(items))
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter_container()?;
        let mut members = Object::new();
        let mut after_comma = false;
        loop {
            self.skip()?;
            if self.close_if_end(b'}', after_comma, ErrorKind::EndlessObject)? {
                break;
            }
            let key_position = self.input.position();
            if self.input.peek()? != Some(b'"') {
                return ParseError::err(ErrorKind::ExpectedObjectKey, key_position);
            }
            let key = self.parse_string()?;
            if members.contains_key(&key) {
                return ParseError::err(ErrorKind::DuplicateKey, key_position);
            }

            self.skip()?;
            let position = self.input.position();
            match self.input.next_byte()? {
                Some(b':') => {}
                Some(_) => return ParseError::err(ErrorKind::MissingNameSeparator, position),
                None => return ParseError::err(ErrorKind::EndlessObject, position),
            }
            self.skip()?;
            if self.input.peek()?.is_none() {
                return ParseError::err(ErrorKind::EndlessObject, self.input.position());
            }
            let value = self.parse_value()?;
            members.insert(key, value);

            if self.expect_separator(b'}', ErrorKind::EndlessObject)? {
                break;
            }
            after_comma = true;
        }
        self.exit_container();
        Ok(Value::Object(members))
    }

    fn parse_string(&mut self) -> Result<String, ParseError> {
        let start = self.input.position();
        self.input.advance();
        let mut bytes = Vec::new();
        loop {
            self.input.copy_string_run(&mut bytes)?;
            let position = self.input.position();
            match self.input.next_byte()? {
                Some(b'"') => break,
                Some(b'\\') => EscapeProcessor::decode_escape(&mut self.input, &mut bytes)?,
                Some(control) => {
                    if self.config.is_strict() {
                        return ParseError::err(ErrorKind::ControlCharacterInString, position);
                    }
                    bytes.push(control);
                }
                None => return ParseError::err(ErrorKind::UnterminatedString, start),
            }
        }
        String::from_utf8(bytes).map_err(|_| ParseError::new(ErrorKind::InvalidUtf8, start))
    }

    fn parse_literal(&mut self, literal: &[u8], value: Value) -> Result<Value, ParseError> {
        let position = self.input.position();
        for &expected in literal {
            if self.input.next_byte()? != Some(expected) {
                return ParseError::err(ErrorKind::InvalidLiteral, position);
            }
        }
        Ok(value)
    }

    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let position = self.input.position();
        let mut token = Vec::new();
        self.input.copy_token(&mut token)?;
        parse_number_token(&token, self.config.dialect, position)
    }
}
