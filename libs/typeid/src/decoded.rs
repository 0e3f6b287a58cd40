//! The field-backed TypeID.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::ordering::cmp_lexicographic;
use crate::validate::validate_type;
use crate::{generator, parser, TypeId, TypeIdError, UuidV7Generator};

/// A TypeID split into its type and UUID.
///
/// Constructors validate the type unless they are marked `_unchecked`. The
/// UUID is expected to be a UUIDv7 but is not checked; any 128-bit value
/// round-trips.
///
/// Ordering is by type, then by UUID bytes. See [`SortOrder`](crate::SortOrder)
/// for the timestamp-first alternative.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeIdDecoded {
    type_name: String,
    uuid: Uuid,
}

impl TypeIdDecoded {
    /// Generates a new TypeID with a fresh UUIDv7 from the global generator.
    pub fn generate(type_name: impl Into<String>) -> Result<Self, TypeIdError> {
        Self::generate_with(UuidV7Generator::global(), type_name)
    }

    /// Generates a new TypeID with a fresh UUIDv7 from `generator`.
    pub fn generate_with(
        generator: &UuidV7Generator,
        type_name: impl Into<String>,
    ) -> Result<Self, TypeIdError> {
        let type_name = type_name.into();
        validate_type(&type_name)?;
        Ok(Self::from_uuid_unchecked(type_name, generator.generate()))
    }

    /// Generates a new TypeID without validating the type.
    ///
    /// The caller must guarantee `type_name` is valid, otherwise the formatted
    /// string will not parse back.
    #[must_use]
    pub fn generate_unchecked(type_name: impl Into<String>) -> Self {
        Self::from_uuid_unchecked(type_name, UuidV7Generator::global().generate())
    }

    /// Creates a TypeID from an existing UUID.
    pub fn from_uuid(type_name: impl Into<String>, uuid: Uuid) -> Result<Self, TypeIdError> {
        let type_name = type_name.into();
        validate_type(&type_name)?;
        Ok(Self::from_uuid_unchecked(type_name, uuid))
    }

    /// Creates a TypeID from an existing UUID without validating the type.
    #[must_use]
    pub fn from_uuid_unchecked(type_name: impl Into<String>, uuid: Uuid) -> Self {
        Self {
            type_name: type_name.into(),
            uuid,
        }
    }

    /// The type prefix, empty if the TypeID has none.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The UUID value.
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Returns true if the TypeID has exactly this type (case-sensitive).
    #[must_use]
    pub fn has_type(&self, type_name: &str) -> bool {
        self.type_name == type_name
    }

    /// The UUID encoded as a 26-character Base32 suffix.
    #[must_use]
    pub fn suffix(&self) -> String {
        crate::base32::encode_to_string(self.uuid.as_bytes())
    }

    /// Unix timestamp (milliseconds) embedded in the UUIDv7.
    #[must_use]
    pub fn timestamp_ms(&self) -> u64 {
        generator::timestamp_ms(&self.uuid)
    }

    /// Generation time embedded in the UUIDv7.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        // 48-bit millisecond timestamps are always within chrono's range.
        i64::try_from(self.timestamp_ms())
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .unwrap_or_default()
    }

    /// Formats this TypeID into its canonical string form.
    #[must_use]
    pub fn encode(&self) -> TypeId {
        TypeId::from(self)
    }

    /// Consumes the TypeID, returning its parts.
    #[must_use]
    pub fn into_parts(self) -> (String, Uuid) {
        (self.type_name, self.uuid)
    }
}

impl fmt::Display for TypeIdDecoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        parser::fmt_typeid(f, &self.type_name, &self.uuid)
    }
}

impl FromStr for TypeIdDecoded {
    type Err = TypeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeId::parse(s).map(|id| id.decode())
    }
}

impl From<&TypeId> for TypeIdDecoded {
    fn from(id: &TypeId) -> Self {
        id.decode()
    }
}

impl From<TypeId> for TypeIdDecoded {
    fn from(id: TypeId) -> Self {
        id.decode()
    }
}

impl PartialEq<TypeId> for TypeIdDecoded {
    fn eq(&self, other: &TypeId) -> bool {
        other == self
    }
}

impl PartialOrd for TypeIdDecoded {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeIdDecoded {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_lexicographic(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TypeError, MAX_TYPE_LENGTH};
    use proptest::prelude::*;

    const EXAMPLE_UUID: u128 = 0x01890a5d_ac96_774b_bcce_b302099a8057;

    #[test]
    fn test_generate() {
        let id = TypeIdDecoded::generate("user").unwrap();
        assert_eq!(id.type_name(), "user");
        assert_eq!(id.uuid().get_version_num(), 7);
        assert!(id.to_string().starts_with("user_"));
        assert_eq!(id.to_string().len(), "user_".len() + 26);
    }

    #[test]
    fn test_generate_without_type() {
        let id = TypeIdDecoded::generate("").unwrap();
        assert_eq!(id.to_string().len(), 26);
        assert!(!id.to_string().contains('_'));
    }

    #[test]
    fn test_generate_rejects_invalid_type() {
        assert_eq!(
            TypeIdDecoded::generate("_user"),
            Err(TypeIdError::Type(TypeError::StartsWithUnderscore))
        );
        assert_eq!(
            TypeIdDecoded::generate("a".repeat(MAX_TYPE_LENGTH + 1)),
            Err(TypeIdError::Type(TypeError::TooLong { len: 64 }))
        );
    }

    #[test]
    fn test_generate_unchecked_skips_validation() {
        let id = TypeIdDecoded::generate_unchecked("User");
        assert_eq!(id.type_name(), "User");
    }

    #[test]
    fn test_generate_with_owned_generator() {
        let generator = UuidV7Generator::new();
        let first = TypeIdDecoded::generate_with(&generator, "job").unwrap();
        let second = TypeIdDecoded::generate_with(&generator, "job").unwrap();
        assert!(first < second);
        assert!(first.encode() < second.encode());
    }

    #[test]
    fn test_from_uuid() {
        let uuid = Uuid::from_u128(EXAMPLE_UUID);
        let id = TypeIdDecoded::from_uuid("type", uuid).unwrap();
        assert_eq!(id.to_string(), "type_01h455vb4pex5vsknk084sn02q");
        assert_eq!(id.suffix(), "01h455vb4pex5vsknk084sn02q");
        assert!(TypeIdDecoded::from_uuid("Type", uuid).is_err());
    }

    #[test]
    fn test_timestamp_of_existing_id() {
        let uuid = Uuid::parse_str("01896af3-a83a-7155-bf7e-fff6e73fe09d").unwrap();
        let id = TypeIdDecoded::from_uuid_unchecked("", uuid);
        assert_eq!(
            id.timestamp().to_rfc3339(),
            "2023-07-18T21:41:40.538+00:00"
        );
    }

    #[test]
    fn test_timestamp_of_new_id() {
        let id = TypeIdDecoded::generate("").unwrap();
        let drift = Utc::now() - id.timestamp();
        assert!(drift.num_milliseconds().abs() < 1_000);
    }

    #[test]
    fn test_format_roundtrips_parsed_input() {
        let input = "prefix_0123456789abcdefghjkmnpqrs";
        let decoded: TypeIdDecoded = input.parse().unwrap();
        assert_eq!(decoded.to_string(), input);
        assert_eq!(decoded.encode().as_str(), input);
    }

    #[test]
    fn test_has_type() {
        let id = TypeIdDecoded::from_uuid_unchecked("user", Uuid::nil());
        assert!(id.has_type("user"));
        assert!(!id.has_type("USER"));
        assert!(!id.has_type("users"));
    }

    #[test]
    fn test_ordering_by_type_first() {
        let newer_a = TypeIdDecoded::from_uuid_unchecked("aaa", Uuid::from_u128(2));
        let older_b = TypeIdDecoded::from_uuid_unchecked("bbb", Uuid::from_u128(1));
        assert!(newer_a < older_b);
    }

    #[test]
    fn test_into_parts() {
        let id = TypeIdDecoded::from_uuid_unchecked("user", Uuid::from_u128(7));
        assert_eq!(id.into_parts(), ("user".to_string(), Uuid::from_u128(7)));
    }

    proptest! {
        #[test]
        fn prop_roundtrip(ty in "([a-z]([a-z_]{0,61}[a-z])?)?", value: u128) {
            let decoded = TypeIdDecoded::from_uuid(ty.clone(), Uuid::from_u128(value)).unwrap();
            let parsed = TypeId::parse(&decoded.to_string()).unwrap();
            let again = parsed.decode().encode().decode();
            prop_assert_eq!(again.type_name(), ty.as_str());
            prop_assert_eq!(again.uuid(), Uuid::from_u128(value));
            prop_assert_eq!(parsed.as_str(), decoded.to_string());
        }

        #[test]
        fn prop_same_type_string_order_matches_value_order(a: u128, b: u128) {
            let ia = TypeIdDecoded::from_uuid_unchecked("user", Uuid::from_u128(a)).encode();
            let ib = TypeIdDecoded::from_uuid_unchecked("user", Uuid::from_u128(b)).encode();
            prop_assert_eq!(a.cmp(&b), ia.cmp(&ib));
        }
    }
}
