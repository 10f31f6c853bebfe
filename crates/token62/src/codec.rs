use crate::{
    Error, Result,
    alphabet::{self, BASE},
};
use alloc::string::String;

/// The shortest string [`decode`] accepts.
pub const MIN_TOKEN_LENGTH: usize = 1;

/// The longest string [`decode`] accepts.
///
/// This is the largest `n` for which every `n`-symbol string fits in a `u64`
/// (`62^10 < 2^64 < 62^11`).
pub const MAX_TOKEN_LENGTH: usize = 10;

/// The length used when no explicit token length is requested.
pub const DEFAULT_TOKEN_LENGTH: usize = 9;

/// The longest string [`encode`] can produce for any `u64`.
///
/// Values at or above `62^10` encode to this many symbols, one more than
/// [`MAX_TOKEN_LENGTH`].
pub const ENCODED_CAPACITY: usize = MAX_TOKEN_LENGTH + 1;

const _: () = assert!(max_value_for_length(MAX_TOKEN_LENGTH) < u64::MAX);
const _: () = assert!(max_value_for_length(ENCODED_CAPACITY) == u64::MAX);
const _: () = assert!(MIN_TOKEN_LENGTH <= DEFAULT_TOKEN_LENGTH);
const _: () = assert!(DEFAULT_TOKEN_LENGTH <= MAX_TOKEN_LENGTH);

/// Returns `62^len`, saturating at `u64::MAX`.
///
/// This is the exclusive upper bound of the values that encode to **at most**
/// `len` symbols. Values in `max_value_for_length(len - 1)..max_value_for_length(len)`
/// encode to exactly `len` symbols.
///
/// # Example
///
/// ```
/// use token62::{encode, max_value_for_length};
///
/// assert_eq!(max_value_for_length(0), 1);
/// assert_eq!(max_value_for_length(2), 3844);
/// assert_eq!(encode(max_value_for_length(2) - 1), "ZZ");
/// assert_eq!(encode(max_value_for_length(2)), "100");
/// assert_eq!(max_value_for_length(11), u64::MAX);
/// ```
#[must_use]
pub const fn max_value_for_length(len: usize) -> u64 {
    let mut max = 1_u64;
    let mut i = 0;
    while i < len {
        max = match max.checked_mul(BASE) {
            Some(next) => next,
            None => return u64::MAX,
        };
        i += 1;
    }
    max
}

/// Encodes `value` as a base62 string, most significant symbol first.
///
/// ⚠️ **Note:** `0` encodes to the empty string, which [`decode`] rejects as
/// [`Error::TokenTooSmall`]. Values of `62^10` and above encode to
/// [`ENCODED_CAPACITY`] symbols, which [`decode`] rejects as
/// [`Error::TokenTooBig`].
///
/// # Example
///
/// ```
/// use token62::encode;
///
/// assert_eq!(encode(2_751_173_559_858), "Mr1NSSu");
/// assert_eq!(encode(61), "Z");
/// assert_eq!(encode(62), "10");
/// assert_eq!(encode(0), "");
/// ```
#[must_use]
pub fn encode(value: u64) -> String {
    let mut buf = [0; ENCODED_CAPACITY];
    String::from(encode_to_buf(value, &mut buf))
}

/// Encodes `value` into `buf` without heap allocation and returns the encoded
/// slice.
///
/// The returned `&str` borrows the tail of `buf`; bytes before it are left
/// untouched.
///
/// # Example
///
/// ```
/// use token62::{ENCODED_CAPACITY, encode_to_buf};
///
/// let mut buf = [0_u8; ENCODED_CAPACITY];
/// assert_eq!(encode_to_buf(2_751_173_559_858, &mut buf), "Mr1NSSu");
/// assert_eq!(encode_to_buf(u64::MAX, &mut buf), "lYGhA16ahyf");
/// ```
pub fn encode_to_buf(mut value: u64, buf: &mut [u8; ENCODED_CAPACITY]) -> &str {
    // Symbols are produced least significant first, so fill from the back.
    let mut start = ENCODED_CAPACITY;
    while value > 0 {
        start -= 1;
        buf[start] = alphabet::symbol((value % BASE) as u8);
        value /= BASE;
    }
    let encoded = &buf[start..];

    // SAFETY: every byte written above comes from `ALPHABET`, which is ASCII.
    unsafe { core::str::from_utf8_unchecked(encoded) }
}

/// Decodes a base62 string back into its `u64` value.
///
/// Validation fails fast, in this order:
/// 1. longer than [`MAX_TOKEN_LENGTH`] → [`Error::TokenTooBig`]
/// 2. shorter than [`MIN_TOKEN_LENGTH`] → [`Error::TokenTooSmall`]
/// 3. first symbol outside the alphabet → [`Error::InvalidCharacter`]
///
/// Lengths are measured in bytes.
///
/// # Errors
///
/// Returns one of the errors above. No partial value is ever returned.
///
/// # Example
///
/// ```
/// use token62::{Error, decode};
///
/// assert_eq!(decode("Mr1NSSu"), Ok(2_751_173_559_858));
/// assert_eq!(decode(""), Err(Error::TokenTooSmall { len: 0 }));
/// assert_eq!(decode("ZZZZZZZZZZZ"), Err(Error::TokenTooBig { len: 11 }));
/// assert_eq!(
///     decode("s p a c e"),
///     Err(Error::InvalidCharacter { character: ' ', index: 1 })
/// );
/// ```
pub fn decode(text: &str) -> Result<u64> {
    decode_bytes(text.as_bytes())
}

/// Decodes a base62 byte string, e.g. a raw text field read off the wire.
///
/// Behaves exactly like [`decode`]; an offending byte that does not start a
/// valid UTF-8 sequence is reported as [`char::REPLACEMENT_CHARACTER`].
///
/// # Errors
///
/// See [`decode`].
///
/// # Example
///
/// ```
/// use token62::{Error, decode_bytes};
///
/// assert_eq!(decode_bytes(b"Mr1NSSu"), Ok(2_751_173_559_858));
/// assert_eq!(
///     decode_bytes(b"ab\xFF"),
///     Err(Error::InvalidCharacter { character: char::REPLACEMENT_CHARACTER, index: 2 })
/// );
/// ```
pub fn decode_bytes(bytes: &[u8]) -> Result<u64> {
    Error::check_len(bytes.len()).inspect_err(trace_rejection)?;
    accumulate(bytes).map_err(|index| {
        let character = bytes[index..]
            .utf8_chunks()
            .next()
            .and_then(|chunk| chunk.valid().chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        let err = Error::InvalidCharacter { character, index };
        trace_rejection(&err);
        err
    })
}

/// Folds `bytes` into a value, most significant symbol first. Returns the
/// index of the first non-alphabet byte on failure.
///
/// The caller bounds `bytes.len()` by [`MAX_TOKEN_LENGTH`], so the
/// accumulator stays below `62^10` and cannot overflow.
#[inline]
fn accumulate(bytes: &[u8]) -> core::result::Result<u64, usize> {
    debug_assert!(bytes.len() <= MAX_TOKEN_LENGTH);
    let mut value = 0_u64;
    for (index, &b) in bytes.iter().enumerate() {
        let Some(digit) = alphabet::digit(b) else {
            return Err(index);
        };
        value = value * BASE + u64::from(digit);
    }
    Ok(value)
}

#[inline]
#[allow(unused_variables)]
fn trace_rejection(err: &Error) {
    #[cfg(feature = "tracing")]
    tracing::trace!(error = %err, "rejected base62 token");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::ALPHABET;

    #[test]
    fn known_vector() {
        assert_eq!(encode(2_751_173_559_858), "Mr1NSSu");
        assert_eq!(decode("Mr1NSSu").unwrap(), 2_751_173_559_858);
    }

    #[test]
    fn zero_encodes_to_empty_string() {
        assert_eq!(encode(0), "");
        assert_eq!(decode(&encode(0)), Err(Error::TokenTooSmall { len: 0 }));
    }

    #[test]
    fn single_symbols_match_alphabet_positions() {
        for (value, &symbol) in ALPHABET.iter().enumerate().skip(1) {
            let encoded = encode(value as u64);
            assert_eq!(encoded.as_bytes(), &[symbol]);
            assert_eq!(decode(&encoded).unwrap(), value as u64);
        }
        // A lone '0' is accepted even though `encode` never produces it.
        assert_eq!(decode("0").unwrap(), 0);
    }

    #[test]
    fn leading_zero_symbols_are_insignificant() {
        assert_eq!(decode("000Mr1NSSu").unwrap(), 2_751_173_559_858);
        assert_eq!(decode("0000000001").unwrap(), 1);
    }

    #[test]
    fn lengths_are_exact_at_every_boundary() {
        for n in MIN_TOKEN_LENGTH..=MAX_TOKEN_LENGTH {
            let smallest = encode(max_value_for_length(n - 1));
            let largest = encode(max_value_for_length(n) - 1);
            assert_eq!(smallest.len(), n, "smallest {n}-symbol token: {smallest}");
            assert_eq!(largest.len(), n, "largest {n}-symbol token: {largest}");
            assert!(smallest.starts_with('1') && smallest[1..].bytes().all(|b| b == b'0'));
            assert!(largest.bytes().all(|b| b == b'Z'));
        }
    }

    #[test]
    fn roundtrips_across_the_decodable_range() {
        let max = max_value_for_length(MAX_TOKEN_LENGTH) - 1;
        let mut value = 1_u64;
        while value < max {
            let encoded = encode(value);
            assert!(encoded.bytes().all(alphabet::contains), "{encoded}");
            assert_eq!(decode(&encoded).unwrap(), value, "roundtrip via {encoded}");
            value = value * 3 + 7;
        }
        assert_eq!(decode(&encode(max)).unwrap(), max);
        assert_eq!(encode(max), "ZZZZZZZZZZ");
    }

    #[test]
    fn values_beyond_max_length_encode_to_capacity() {
        let first = max_value_for_length(MAX_TOKEN_LENGTH);
        assert_eq!(encode(first), "10000000000");
        assert_eq!(encode(u64::MAX), "lYGhA16ahyf");
        assert_eq!(
            decode(&encode(u64::MAX)),
            Err(Error::TokenTooBig {
                len: ENCODED_CAPACITY
            })
        );
    }

    #[test]
    fn max_value_for_length_saturates() {
        assert_eq!(max_value_for_length(0), 1);
        assert_eq!(max_value_for_length(1), 62);
        assert_eq!(max_value_for_length(10), 839_299_365_868_340_224);
        assert_eq!(max_value_for_length(11), u64::MAX);
        assert_eq!(max_value_for_length(usize::MAX), u64::MAX);
    }

    #[test]
    fn decode_rejects_oversized_input_before_characters() {
        assert_eq!(
            decode("sfnalsdasdkasdnaerlaraksfnmaslrasdasadsadas"),
            Err(Error::TokenTooBig { len: 43 })
        );
        assert_eq!(
            decode("a b c d e f"),
            Err(Error::TokenTooBig { len: 11 })
        );
    }

    #[test]
    fn decode_rejects_undersized_input() {
        assert_eq!(decode(""), Err(Error::TokenTooSmall { len: 0 }));
        assert_eq!(decode_bytes(b""), Err(Error::TokenTooSmall { len: 0 }));
    }

    #[test]
    fn decode_reports_first_invalid_character() {
        assert_eq!(
            decode("s p a c e"),
            Err(Error::InvalidCharacter {
                character: ' ',
                index: 1
            })
        );
        assert_eq!(
            decode("abc-_"),
            Err(Error::InvalidCharacter {
                character: '-',
                index: 3
            })
        );
        assert_eq!(
            decode("héllo"),
            Err(Error::InvalidCharacter {
                character: 'é',
                index: 1
            })
        );
    }

    #[test]
    fn multibyte_length_is_measured_in_bytes() {
        // 6 chars but 12 bytes
        assert_eq!(decode("éééééé"), Err(Error::TokenTooBig { len: 12 }));
    }

    #[test]
    fn decode_bytes_matches_decode() {
        for text in ["Mr1NSSu", "ZZZZZZZZZZ", "1", "", "s p a c e", "héllo", "abcdefghijk"] {
            assert_eq!(decode_bytes(text.as_bytes()), decode(text), "{text:?}");
        }
    }

    #[test]
    fn decode_bytes_reports_invalid_utf8() {
        assert_eq!(
            decode_bytes(&[b'a', 0xC3]),
            Err(Error::InvalidCharacter {
                character: char::REPLACEMENT_CHARACTER,
                index: 1
            })
        );
        // Invalid UTF-8 after the first bad byte still reports the valid one.
        assert_eq!(
            decode_bytes(&[b'a', b'!', 0xFF]),
            Err(Error::InvalidCharacter {
                character: '!',
                index: 1
            })
        );
    }

    #[test]
    fn encode_to_buf_only_touches_the_tail() {
        let mut buf = [b'#'; ENCODED_CAPACITY];
        assert_eq!(encode_to_buf(62, &mut buf), "10");
        assert_eq!(&buf[..ENCODED_CAPACITY - 2], &[b'#'; ENCODED_CAPACITY - 2]);
        assert_eq!(encode_to_buf(0, &mut buf), "");
    }
}
