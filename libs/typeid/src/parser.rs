//! The canonical TypeID string grammar.
//!
//! ```text
//!   user_01h455vb4pex5vsknk084sn02q
//!   └──┘ └────────────────────────┘
//!   type    uuid suffix (base32)
//! ```
//!
//! `[type "_"] suffix`, where the separator is present iff the type is
//! non-empty and the suffix is exactly 26 Base32 symbols starting with `0`-`7`.

use std::fmt;

use uuid::Uuid;

use crate::validate::validate_type;
use crate::{base32, TypeIdError};

/// Splits a TypeID string into its type and suffix, enforcing every grammar rule.
pub(crate) fn split(input: &str) -> Result<(&str, &str), TypeIdError> {
    let (type_name, suffix) = match input.rfind('_') {
        None => ("", input),
        Some(0) => return Err(TypeIdError::SeparatorWithoutType),
        Some(separator) => (&input[..separator], &input[separator + 1..]),
    };

    validate_type(type_name)?;
    base32::validate(suffix)?;

    Ok((type_name, suffix))
}

/// Writes `type_name` and `uuid` in canonical form.
///
/// The type is written as given; callers are responsible for having validated it.
pub fn fmt_typeid<W: fmt::Write + ?Sized>(out: &mut W, type_name: &str, uuid: &Uuid) -> fmt::Result {
    if !type_name.is_empty() {
        out.write_str(type_name)?;
        out.write_char('_')?;
    }
    base32::encode(uuid.as_bytes())
        .iter()
        .try_for_each(|&symbol| out.write_char(char::from(symbol)))
}

/// Formats `type_name` and `uuid` into a new canonical string.
pub(crate) fn format(type_name: &str, uuid: &Uuid) -> String {
    let mut out = String::with_capacity(type_name.len() + 1 + base32::ENCODED_LEN);
    if !type_name.is_empty() {
        out.push_str(type_name);
        out.push('_');
    }
    out.extend(base32::encode(uuid.as_bytes()).iter().copied().map(char::from));
    out
}
