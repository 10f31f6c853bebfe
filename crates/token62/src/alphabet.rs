//! The 62-symbol numeral system used by every token.
//!
//! Symbols are ordered digits, then lowercase, then uppercase letters. The
//! position of a symbol in [`ALPHABET`] is its numeral value, so `'0'` is `0`,
//! `'a'` is `10`, and `'Z'` is `61`.
//!
//! ⚠️ This ordering is part of the wire format. Strings encoded with a
//! different base62 ordering (e.g. `0-9A-Za-z`) decode to different values.

/// Every base62 symbol, indexed by its numeral value.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The numeral base.
pub const BASE: u64 = ALPHABET.len() as u64;

const NO_VALUE: u8 = 255;

/// Lookup table for base62 decoding
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        lut[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    lut
};

/// Returns the symbol for a numeral in `0..62`.
///
/// # Panics
///
/// Panics if `digit >= 62`.
///
/// # Example
///
/// ```
/// use token62::alphabet::symbol;
///
/// assert_eq!(symbol(0), b'0');
/// assert_eq!(symbol(10), b'a');
/// assert_eq!(symbol(61), b'Z');
/// ```
#[inline]
#[must_use]
pub const fn symbol(digit: u8) -> u8 {
    ALPHABET[digit as usize]
}

/// Returns the numeral value of `symbol`, or `None` if it is not part of the
/// alphabet.
///
/// # Example
///
/// ```
/// use token62::alphabet::digit;
///
/// assert_eq!(digit(b'a'), Some(10));
/// assert_eq!(digit(b'Z'), Some(61));
/// assert_eq!(digit(b'-'), None);
/// ```
#[inline]
#[must_use]
pub const fn digit(symbol: u8) -> Option<u8> {
    match LOOKUP[symbol as usize] {
        NO_VALUE => None,
        value => Some(value),
    }
}

/// Returns `true` if `symbol` belongs to the alphabet.
#[inline]
#[must_use]
pub const fn contains(symbol: u8) -> bool {
    digit(symbol).is_some()
}
