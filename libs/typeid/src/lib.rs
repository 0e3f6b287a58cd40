//! # typeid
//!
//! Type-safe, K-sortable identifiers: a lowercase type prefix plus a UUIDv7,
//! encoded in Crockford Base32.
//!
//! ## ID Format
//!
//! ```text
//!   user_01h455vb4pex5vsknk084sn02q
//!   └──┘ └────────────────────────┘
//!   type    uuid suffix (base32)
//! ```
//!
//! - The type is 0-63 characters of `a`-`z` and `_`, not starting or ending with `_`
//! - With an empty type the separator is omitted: `01h455vb4pex5vsknk084sn02q`
//! - The suffix is always 26 characters; the first is `0`-`7`
//!
//! This format provides:
//! - Type safety (the prefix says what the id refers to)
//! - Sortability (UUIDv7 is time-ordered, and the Base32 suffix sorts the same way)
//! - Monotonicity (ids from one generator never go backward, even if the clock does)
//!
//! ## Two representations
//!
//! - [`TypeId`] keeps the canonical string. Parsing stores the input verbatim.
//! - [`TypeIdDecoded`] keeps the type and [`Uuid`] as separate fields.
//!
//! Conversion in both directions is lossless: [`TypeId::decode`] and
//! [`TypeIdDecoded::encode`].
//!
//! ```
//! use typeid::{TypeId, TypeIdDecoded};
//!
//! let id = TypeIdDecoded::generate("user")?;
//! let encoded: TypeId = id.encode();
//! assert_eq!(encoded.decode(), id);
//!
//! let parsed = TypeId::parse("type_01h455vb4pex5vsknk084sn02q")?;
//! assert!(parsed.has_type("type"));
//! assert_eq!(
//!     parsed.uuid().to_string(),
//!     "01890a5d-ac96-774b-bcce-b302099a8057"
//! );
//! # Ok::<(), typeid::TypeIdError>(())
//! ```

pub mod base32;
mod decoded;
mod encoded;
mod error;
pub mod generator;
mod macros;
mod ordering;
mod parser;
mod serde_impl;
mod validate;

pub use decoded::TypeIdDecoded;
pub use encoded::TypeId;
pub use error::{TypeError, TypeIdError};
pub use generator::UuidV7Generator;
pub use ordering::SortOrder;
pub use validate::{is_valid_type, validate_type, MAX_TYPE_LENGTH};

/// Re-export uuid for consumers that need raw UUID operations
pub use uuid::Uuid;

#[doc(hidden)]
pub mod __private {
    pub use crate::parser::fmt_typeid;
    pub use serde;
}
