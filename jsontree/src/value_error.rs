// SPDX-License-Identifier: Apache-2.0

use crate::value::ValueType;

/// Errors raised by [`Value`](crate::Value) accessors, mutators and comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The value holds a different variant than the operation needs.
    TypeMismatch {
        expected: ValueType,
        found: ValueType,
    },
    /// Values of this variant have no ordering (objects).
    Unordered(ValueType),
    /// Array index past the end.
    IndexOutOfBounds { index: usize, len: usize },
    /// Object key not present.
    MissingKey,
}

impl ValueError {
    pub(crate) fn mismatch<T>(expected: ValueType, found: ValueType) -> Result<T, Self> {
        Err(ValueError::TypeMismatch { expected, found })
    }
}

impl core::fmt::Display for ValueError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValueError::TypeMismatch { expected, found } => {
                write!(f, "type mismatch: expected {expected}, found {found}")
            }
            ValueError::Unordered(ty) => write!(f, "{ty} values have no ordering"),
            ValueError::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for array of length {len}")
            }
            ValueError::MissingKey => f.write_str("missing object key"),
        }
    }
}

impl core::error::Error for ValueError {}
