//! Crockford Base32 codec for fixed-size 128-bit payloads.
//!
//! A 16-byte value always encodes to exactly 26 characters. 26 symbols of 5
//! bits hold 130 bits, so the first symbol only ever carries the top 3 bits of
//! the payload and must be in `0`-`7`.
//!
//! Only the lowercase alphabet is accepted. There is no case folding and no
//! Crockford "ambiguous letter" substitution (`i`, `l`, `o`, `u` are rejected).

use crate::TypeIdError;

/// The 32 symbols, indexed by their 5-bit value.
pub const ALPHABET: &[u8; 32] = b"0123456789abcdefghjkmnpqrstvwxyz";

/// Length of an encoded payload in characters.
pub const ENCODED_LEN: usize = 26;

/// Length of a decoded payload in bytes.
pub const DECODED_LEN: usize = 16;

const INVALID: u8 = 0xFF;

/// Maps a byte to its 5-bit value, or [`INVALID`].
const DECODING_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Encodes 16 big-endian bytes into 26 ASCII Base32 symbols.
#[must_use]
pub fn encode(bytes: &[u8; DECODED_LEN]) -> [u8; ENCODED_LEN] {
    let value = u128::from_be_bytes(*bytes);
    let mut out = [0u8; ENCODED_LEN];
    for (i, symbol) in out.iter_mut().enumerate() {
        let shift = 5 * (ENCODED_LEN - 1 - i);
        *symbol = ALPHABET[((value >> shift) & 0x1F) as usize];
    }
    out
}

/// Encodes 16 big-endian bytes into a 26-character string.
#[must_use]
pub fn encode_to_string(bytes: &[u8; DECODED_LEN]) -> String {
    encode(bytes).iter().copied().map(char::from).collect()
}

/// Checks that `input` is a well-formed 26-character suffix without decoding it.
pub fn validate(input: &str) -> Result<(), TypeIdError> {
    let bytes = input.as_bytes();
    if !input.is_ascii() {
        let len = input.chars().count();
        if len != ENCODED_LEN {
            return Err(TypeIdError::InvalidSuffixLength { len });
        }
        let position = bytes.iter().position(|b| !b.is_ascii()).unwrap_or_default();
        return Err(TypeIdError::InvalidBase32Character { position });
    }
    if bytes.len() != ENCODED_LEN {
        return Err(TypeIdError::InvalidSuffixLength { len: bytes.len() });
    }
    if bytes[0] > b'7' {
        return Err(TypeIdError::SuffixOverflow);
    }
    match bytes
        .iter()
        .position(|&b| DECODING_TABLE[usize::from(b)] == INVALID)
    {
        Some(position) => Err(TypeIdError::InvalidBase32Character { position }),
        None => Ok(()),
    }
}

/// Returns true if `input` is a well-formed 26-character suffix.
#[must_use]
pub fn is_valid(input: &str) -> bool {
    validate(input).is_ok()
}

/// Decodes a 26-character suffix into 16 big-endian bytes.
pub fn decode(input: &str) -> Result<[u8; DECODED_LEN], TypeIdError> {
    validate(input)?;

    let value = input.bytes().fold(0u128, |acc, b| {
        (acc << 5) | u128::from(DECODING_TABLE[usize::from(b)])
    });
    Ok(value.to_be_bytes())
}
