//! Error types for TypeID parsing and validation.

use thiserror::Error;

use crate::validate::MAX_TYPE_LENGTH;

/// A violation of the type prefix rules.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TypeError {
    /// The type is longer than [`MAX_TYPE_LENGTH`].
    #[error("type can be at most {max} characters long, got {len}", max = MAX_TYPE_LENGTH)]
    TooLong { len: usize },

    /// The type starts with `_`.
    #[error("type can't start with an underscore")]
    StartsWithUnderscore,

    /// The type ends with `_`.
    #[error("type can't end with an underscore")]
    EndsWithUnderscore,

    /// The type contains something other than `a`-`z` or `_`.
    #[error("type can only contain lowercase ASCII letters and underscores (invalid byte at {position})")]
    InvalidCharacter { position: usize },
}

/// Errors that can occur when parsing or constructing a TypeID.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeIdError {
    /// The type prefix is invalid.
    #[error(transparent)]
    Type(#[from] TypeError),

    /// The input starts with `_`, i.e. an empty type with an explicit separator.
    #[error("type separator must be omitted if there is no type present")]
    SeparatorWithoutType,

    /// The suffix is not exactly 26 characters long.
    #[error("suffix must be 26 characters long, got {len}")]
    InvalidSuffixLength { len: usize },

    /// The first suffix character is above `7`, so the value would not fit in 128 bits.
    #[error("the maximum possible suffix is '7zzzzzzzzzzzzzzzzzzzzzzzzz'")]
    SuffixOverflow,

    /// The suffix contains a character outside the Crockford Base32 alphabet.
    #[error("suffix is not valid base32 (invalid character at {position})")]
    InvalidBase32Character { position: usize },

    /// A statically-typed id was parsed from a TypeID with another type.
    #[error("invalid type: expected '{expected}', got '{actual}'")]
    TypeMismatch {
        expected: &'static str,
        actual: String,
    },
}

impl TypeIdError {
    /// Returns true if the type prefix (or its separator) was rejected.
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            TypeIdError::Type(_) | TypeIdError::SeparatorWithoutType | TypeIdError::TypeMismatch { .. }
        )
    }

    /// Returns true if the Base32 suffix was rejected.
    pub fn is_suffix_error(&self) -> bool {
        matches!(
            self,
            TypeIdError::InvalidSuffixLength { .. }
                | TypeIdError::SuffixOverflow
                | TypeIdError::InvalidBase32Character { .. }
        )
    }
}
