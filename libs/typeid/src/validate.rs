//! Type prefix validation.
//!
//! A type is 0 to 63 characters from `a`-`z` and `_`, and may not start or end
//! with `_`. The empty string is a valid type (an id without a prefix). Input is
//! never case-folded.

use crate::TypeError;

/// Maximum length of a type prefix.
pub const MAX_TYPE_LENGTH: usize = 63;

/// Validates a type prefix.
///
/// Rules are checked in a fixed order so the reported error is predictable:
/// length, leading underscore, trailing underscore, then the alphabet.
pub fn validate_type(ty: &str) -> Result<(), TypeError> {
    let bytes = ty.as_bytes();
    let (Some(&first), Some(&last)) = (bytes.first(), bytes.last()) else {
        return Ok(());
    };

    if bytes.len() > MAX_TYPE_LENGTH {
        // Byte length overcounts non-ASCII input, which then fails on the alphabet.
        let len = ty.chars().count();
        if len > MAX_TYPE_LENGTH {
            return Err(TypeError::TooLong { len });
        }
    }
    if first == b'_' {
        return Err(TypeError::StartsWithUnderscore);
    }
    if last == b'_' {
        return Err(TypeError::EndsWithUnderscore);
    }
    match bytes.iter().position(|&b| !is_type_byte(b)) {
        Some(position) => Err(TypeError::InvalidCharacter { position }),
        None => Ok(()),
    }
}

/// Returns true if `ty` is a valid type prefix.
///
/// Usable in const context, which is how [`define_typeid!`](crate::define_typeid)
/// rejects bad prefixes at compile time.
#[must_use]
pub const fn is_valid_type(ty: &str) -> bool {
    let bytes = ty.as_bytes();
    let len = bytes.len();
    if len == 0 {
        return true;
    }
    if len > MAX_TYPE_LENGTH || bytes[0] == b'_' || bytes[len - 1] == b'_' {
        return false;
    }

    let mut i = 0;
    while i < len {
        if !is_type_byte(bytes[i]) {
            return false;
        }
        i += 1;
    }
    true
}

#[inline]
const fn is_type_byte(b: u8) -> bool {
    b.is_ascii_lowercase() || b == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("user")]
    #[case("pre_fix")]
    #[case("a_b_c")]
    #[case("a__b")]
    #[case(&"a".repeat(63))]
    fn test_valid_types(#[case] ty: &str) {
        assert_eq!(validate_type(ty), Ok(()));
        assert!(is_valid_type(ty));
    }

    #[rstest]
    #[case("_user", TypeError::StartsWithUnderscore)]
    #[case("user_", TypeError::EndsWithUnderscore)]
    #[case("_", TypeError::StartsWithUnderscore)]
    #[case("PREFIX", TypeError::InvalidCharacter { position: 0 })]
    #[case("12345", TypeError::InvalidCharacter { position: 0 })]
    #[case("pre.fix", TypeError::InvalidCharacter { position: 3 })]
    #[case("préfix", TypeError::InvalidCharacter { position: 2 })]
    #[case("  prefix", TypeError::InvalidCharacter { position: 0 })]
    #[case(&"a".repeat(64), TypeError::TooLong { len: 64 })]
    #[case(&"é".repeat(32), TypeError::InvalidCharacter { position: 0 })]
    #[case(&format!("{}é", "a".repeat(62)), TypeError::InvalidCharacter { position: 62 })]
    #[case(&"é".repeat(64), TypeError::TooLong { len: 64 })]
    fn test_invalid_types(#[case] ty: &str, #[case] expected: TypeError) {
        assert_eq!(validate_type(ty), Err(expected));
        assert!(!is_valid_type(ty));
    }

    #[test]
    fn test_length_is_checked_before_shape() {
        let ty = format!("_{}", "a".repeat(63));
        assert_eq!(validate_type(&ty), Err(TypeError::TooLong { len: 64 }));
    }

    #[test]
    fn test_const_validation() {
        const OK: bool = is_valid_type("user_account");
        const BAD: bool = is_valid_type("User");
        assert!(OK);
        assert!(!BAD);
    }

    proptest! {
        #[test]
        fn prop_validation_is_idempotent(ty in "[a-z_]{0,70}") {
            let first = validate_type(&ty);
            prop_assert_eq!(first, validate_type(&ty));
            prop_assert_eq!(first.is_ok(), is_valid_type(&ty));
        }
    }
}
