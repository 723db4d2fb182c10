// SPDX-License-Identifier: Apache-2.0

/// The reason a parse failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A `/* ... */` comment was never closed.
    UnterminatedComment,
    /// A `/` was not followed by `/` or `*`.
    InvalidCommentSyntax,
    /// The next byte cannot start any JSON value.
    InvalidValueSyntax,
    /// A number token could not be converted.
    InvalidNumberSyntax,
    /// Input ended inside a string.
    UnterminatedString,
    /// A backslash was followed by an unknown escape character.
    InvalidEscapeSequence,
    /// A `\u` escape was truncated or contained non-hex digits.
    InvalidUnicodeEscape,
    /// A `\u` escape produced an unpaired surrogate.
    InvalidUnicodeCodepoint,
    /// Unescaped control byte inside a string (strict dialect only).
    ControlCharacterInString,
    /// String content was not valid UTF-8.
    InvalidUtf8,
    /// Mismatch while matching `true`, `false` or `null`.
    InvalidLiteral,
    /// An object key appeared twice in the same object.
    DuplicateKey,
    /// Object key not followed by `:`.
    MissingNameSeparator,
    /// Array element or object member not followed by `,` or a closing bracket.
    MissingValueSeparator,
    /// Something other than a string where an object key was expected.
    ExpectedObjectKey,
    /// A `,` directly before `]` or `}` (strict dialect only).
    TrailingComma,
    /// Input ended before the closing `]`.
    EndlessArray,
    /// Input ended before the closing `}`.
    EndlessObject,
    /// Non-whitespace after the root value (strict dialect only).
    TrailingContent,
    /// Input ended where a value was required.
    UnexpectedEnd,
    /// Nesting exceeded the configured maximum depth.
    MaxDepthReached,
    /// The underlying reader reported an error.
    ReaderError,
    /// A stream parser was given an empty read buffer.
    EmptyBuffer,
}

impl ErrorKind {
    const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::UnterminatedComment => "unterminated block comment",
            ErrorKind::InvalidCommentSyntax => "invalid comment syntax",
            ErrorKind::InvalidValueSyntax => "invalid value syntax",
            ErrorKind::InvalidNumberSyntax => "invalid number syntax",
            ErrorKind::UnterminatedString => "unterminated string",
            ErrorKind::InvalidEscapeSequence => "invalid escape sequence",
            ErrorKind::InvalidUnicodeEscape => "invalid unicode escape",
            ErrorKind::InvalidUnicodeCodepoint => "invalid unicode codepoint",
            ErrorKind::ControlCharacterInString => "unescaped control character in string",
            ErrorKind::InvalidUtf8 => "invalid UTF-8 in string",
            ErrorKind::InvalidLiteral => "invalid literal",
            ErrorKind::DuplicateKey => "duplicate object key",
            ErrorKind::MissingNameSeparator => "missing ':' after object key",
            ErrorKind::MissingValueSeparator => "missing ',' between values",
            ErrorKind::ExpectedObjectKey => "expected string object key",
            ErrorKind::TrailingComma => "trailing comma",
            ErrorKind::EndlessArray => "endless array",
            ErrorKind::EndlessObject => "endless object",
            ErrorKind::TrailingContent => "trailing content after root value",
            ErrorKind::UnexpectedEnd => "unexpected end of input",
            ErrorKind::MaxDepthReached => "maximum nesting depth reached",
            ErrorKind::ReaderError => "reader error",
            ErrorKind::EmptyBuffer => "empty read buffer",
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during JSON parsing
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    kind: ErrorKind,
    position: usize,
}

impl ParseError {
    pub fn new(kind: ErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// Shorthand for `Err(ParseError::new(..))`.
    pub(crate) fn err<T>(kind: ErrorKind, position: usize) -> Result<T, Self> {
        Err(Self::new(kind, position))
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Byte offset into the input at which the error was detected.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl core::fmt::Debug for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?} at {}", self.kind, self.position)
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} at byte {}", self.kind, self.position)
    }
}

impl core::error::Error for ParseError {}
