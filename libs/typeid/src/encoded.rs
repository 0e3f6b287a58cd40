//! The string-backed TypeID.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{base32, generator, parser, TypeIdDecoded, TypeIdError};

/// A TypeID in its canonical string form.
///
/// Holds the exact string it was parsed from, so formatting a parsed TypeID
/// always reproduces the input. Ordering is byte-wise over that string, which
/// for ids of the same type is also chronological order.
///
/// Use [`TypeId::decode`] to get at the type and UUID as separate values.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(String);

impl TypeId {
    /// Parses a TypeID from a string.
    pub fn parse(input: &str) -> Result<Self, TypeIdError> {
        parser::split(input)?;
        Ok(Self(input.to_owned()))
    }

    /// Parses a TypeID, returning `None` instead of the reason it is invalid.
    #[must_use]
    pub fn try_parse(input: &str) -> Option<Self> {
        Self::parse(input).ok()
    }

    /// Generates a new TypeID with the given type and a fresh UUIDv7.
    ///
    /// Shorthand for [`TypeIdDecoded::generate`].
    pub fn generate(type_name: impl Into<String>) -> Result<TypeIdDecoded, TypeIdError> {
        TypeIdDecoded::generate(type_name)
    }

    /// Byte index of the `_` separator. The suffix has a fixed width, so this
    /// never needs to search.
    fn separator_index(&self) -> Option<usize> {
        self.0.len().checked_sub(base32::ENCODED_LEN + 1)
    }

    /// The type prefix, empty if the TypeID has none.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self.separator_index() {
            Some(separator) => &self.0[..separator],
            None => "",
        }
    }

    /// The 26-character Base32 suffix.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.0[self.0.len() - base32::ENCODED_LEN..]
    }

    /// Returns true if the TypeID has exactly this type (case-sensitive).
    #[must_use]
    pub fn has_type(&self, type_name: &str) -> bool {
        self.type_name() == type_name
    }

    /// Decodes the suffix into its UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        let bytes = base32::decode(self.suffix());
        debug_assert!(bytes.is_ok(), "suffix is validated on construction");
        Uuid::from_bytes(bytes.unwrap_or_default())
    }

    /// Splits the TypeID into its type and UUID.
    #[must_use]
    pub fn decode(&self) -> TypeIdDecoded {
        TypeIdDecoded::from_uuid_unchecked(self.type_name(), self.uuid())
    }

    /// Unix timestamp (milliseconds) embedded in the UUIDv7.
    #[must_use]
    pub fn timestamp_ms(&self) -> u64 {
        generator::timestamp_ms(&self.uuid())
    }

    /// Generation time embedded in the UUIDv7.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.decode().timestamp()
    }

    /// The canonical string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the TypeID, returning the canonical string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TypeId {
    type Err = TypeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TypeId {
    type Error = TypeIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        parser::split(&s)?;
        Ok(Self(s))
    }
}

impl TryFrom<&str> for TypeId {
    type Error = TypeIdError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl AsRef<str> for TypeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<TypeId> for String {
    fn from(id: TypeId) -> Self {
        id.0
    }
}

impl From<&TypeIdDecoded> for TypeId {
    fn from(decoded: &TypeIdDecoded) -> Self {
        Self(parser::format(decoded.type_name(), &decoded.uuid()))
    }
}

impl From<TypeIdDecoded> for TypeId {
    fn from(decoded: TypeIdDecoded) -> Self {
        Self::from(&decoded)
    }
}

impl PartialEq<TypeIdDecoded> for TypeId {
    fn eq(&self, other: &TypeIdDecoded) -> bool {
        other.has_type(self.type_name()) && self.uuid() == other.uuid()
    }
}
