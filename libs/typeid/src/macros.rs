//! Macros for defining statically-typed TypeIDs.

/// Defines a TypeID newtype bound to a single type prefix.
///
/// This generates a wrapper around a UUID with:
/// - A `PREFIX` constant, checked against the type rules at compile time
/// - `new()` to generate a fresh UUIDv7 from the global generator
/// - `parse()` which rejects TypeIDs of any other type
/// - `Display`, `FromStr`, `Serialize` and `Deserialize` using the canonical string
/// - Conversions to and from [`TypeIdDecoded`](crate::TypeIdDecoded) and [`TypeId`](crate::TypeId)
/// - `Ord`, `Hash`, and other standard traits (ordering is chronological)
///
/// # Example
///
/// ```
/// typeid::define_typeid!(UserId, "user");
///
/// let id = UserId::new();
/// let parsed: UserId = id.to_string().parse()?;
/// assert_eq!(id, parsed);
/// assert!("org_01h455vb4pex5vsknk084sn02q".parse::<UserId>().is_err());
/// # Ok::<(), typeid::TypeIdError>(())
/// ```
#[macro_export]
macro_rules! define_typeid {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($crate::Uuid);

        const _: () = assert!(
            $crate::is_valid_type($prefix),
            concat!("invalid TypeID prefix: ", $prefix)
        );

        impl $name {
            /// The type prefix for this ID.
            pub const PREFIX: &'static str = $prefix;

            /// Creates a new ID with a fresh UUIDv7.
            #[must_use]
            pub fn new() -> Self {
                Self($crate::UuidV7Generator::global().generate())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: $crate::Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID.
            #[must_use]
            pub const fn uuid(&self) -> $crate::Uuid {
                self.0
            }

            /// Returns the timestamp portion of the UUIDv7 in milliseconds.
            #[must_use]
            pub fn timestamp_ms(&self) -> u64 {
                $crate::generator::timestamp_ms(&self.0)
            }

            /// Parses an ID from a string.
            ///
            /// The string must be a valid TypeID whose type is `PREFIX`.
            pub fn parse(s: &str) -> Result<Self, $crate::TypeIdError> {
                let id = $crate::TypeId::parse(s)?;
                Self::try_from(id.decode())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::__private::fmt_typeid(f, Self::PREFIX, &self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::TypeIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<$name> for $crate::TypeIdDecoded {
            fn from(id: $name) -> Self {
                $crate::TypeIdDecoded::from_uuid_unchecked($name::PREFIX, id.0)
            }
        }

        impl From<$name> for $crate::TypeId {
            fn from(id: $name) -> Self {
                $crate::TypeIdDecoded::from(id).encode()
            }
        }

        impl TryFrom<$crate::TypeIdDecoded> for $name {
            type Error = $crate::TypeIdError;

            fn try_from(decoded: $crate::TypeIdDecoded) -> Result<Self, Self::Error> {
                if !decoded.has_type(Self::PREFIX) {
                    return Err($crate::TypeIdError::TypeMismatch {
                        expected: Self::PREFIX,
                        actual: decoded.type_name().to_string(),
                    });
                }
                Ok(Self(decoded.uuid()))
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let s = <String as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&s).map_err($crate::__private::serde::de::Error::custom)
            }
        }

        impl AsRef<$crate::Uuid> for $name {
            fn as_ref(&self) -> &$crate::Uuid {
                &self.0
            }
        }
    };
}
