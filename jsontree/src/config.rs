// SPDX-License-Identifier: Apache-2.0

//! Runtime parser configuration.

/// Nesting depth allowed when no explicit limit is configured.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Which grammar the parser accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// JSON plus `//` and `/* */` comments, one trailing comma per container
    /// and any number of concatenated root values (collected into an array).
    #[default]
    Lenient,
    /// RFC 8259 exactly: one root value, no comments, no trailing commas.
    Strict,
}

/// Options shared by [`SliceParser`](crate::SliceParser) and
/// [`StreamParser`](crate::StreamParser).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    pub dialect: Dialect,
    /// Maximum number of nested arrays/objects; deeper input fails with
    /// [`ErrorKind::MaxDepthReached`](crate::ErrorKind::MaxDepthReached).
    pub max_depth: usize,
}

impl ParserConfig {
    pub const fn lenient() -> Self {
        Self {
            dialect: Dialect::Lenient,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub const fn strict() -> Self {
        Self {
            dialect: Dialect::Strict,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub const fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    pub(crate) fn is_strict(&self) -> bool {
        self.dialect == Dialect::Strict
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::lenient()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(ParserConfig::default(), ParserConfig::lenient());
        assert!(!ParserConfig::lenient().is_strict());
        assert!(ParserConfig::strict().is_strict());
        assert_eq!(ParserConfig::strict().max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_with_max_depth_keeps_dialect() {
        let config = ParserConfig::strict().with_max_depth(8);
        assert_eq!(config.dialect, Dialect::Strict);
        assert_eq!(config.max_depth, 8);
    }
}
