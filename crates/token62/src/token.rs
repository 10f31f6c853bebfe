use crate::{
    ENCODED_CAPACITY, Error, MAX_TOKEN_LENGTH, Result, decode, decode_bytes, encode, encode_to_buf,
    max_value_for_length,
};
use alloc::{string::String, vec::Vec};
use core::{fmt, str::FromStr};

/// A `u64` that presents itself to the outside world as a base62 string.
///
/// Internally a `Token` is just its integer: it is `Copy`, ordered
/// numerically, and hashes like a `u64`, so it can be stored and indexed as an
/// ordinary integer column. [`Display`](fmt::Display), [`FromStr`], and the
/// [`to_text`](Token::to_text) / [`from_text`](Token::from_text) adapters
/// convert it to and from its encoded form.
///
/// # Example
///
/// ```
/// use token62::Token;
///
/// let token = Token::from_raw(2_751_173_559_858);
/// assert_eq!(token.to_string(), "Mr1NSSu");
/// assert_eq!("Mr1NSSu".parse::<Token>().unwrap(), token);
/// assert_eq!(token.to_raw(), 2_751_173_559_858);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Token(u64);

impl Token {
    /// The zero token. It encodes to the empty string and does not decode.
    pub const ZERO: Self = Self(0);

    /// The largest token that survives an encode/decode round-trip
    /// (`"ZZZZZZZZZZ"`).
    pub const MAX: Self = Self(max_value_for_length(MAX_TOKEN_LENGTH) - 1);

    /// Wraps a raw integer.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer.
    #[must_use]
    pub const fn to_raw(self) -> u64 {
        self.0
    }

    /// Returns `true` if this token round-trips through its encoded form.
    ///
    /// Zero encodes to `""` and values above [`Token::MAX`] encode to more
    /// than [`MAX_TOKEN_LENGTH`] symbols; both are rejected by
    /// [`Token::decode`].
    ///
    /// # Example
    ///
    /// ```
    /// use token62::Token;
    ///
    /// assert!(Token::from_raw(1).is_valid());
    /// assert!(Token::MAX.is_valid());
    /// assert!(!Token::ZERO.is_valid());
    /// assert!(!Token::from_raw(u64::MAX).is_valid());
    /// ```
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0 && self.0 <= Self::MAX.0
    }

    /// Encodes this token into a base62 [`String`].
    ///
    /// See [`encode`](crate::encode) for the edge cases.
    #[must_use]
    pub fn encode(self) -> String {
        encode(self.0)
    }

    /// Encodes this token into `buf` without heap allocation.
    pub fn encode_to_buf(self, buf: &mut [u8; ENCODED_CAPACITY]) -> &str {
        encode_to_buf(self.0, buf)
    }

    /// Returns the number of symbols in the encoded form.
    ///
    /// # Example
    ///
    /// ```
    /// use token62::Token;
    ///
    /// assert_eq!(Token::ZERO.encoded_len(), 0);
    /// assert_eq!(Token::from_raw(61).encoded_len(), 1);
    /// assert_eq!(Token::from_raw(62).encoded_len(), 2);
    /// assert_eq!(Token::MAX.encoded_len(), 10);
    /// assert_eq!(Token::from_raw(u64::MAX).encoded_len(), 11);
    /// ```
    #[must_use]
    pub const fn encoded_len(self) -> usize {
        let mut len = 0;
        while len < ENCODED_CAPACITY && self.0 >= max_value_for_length(len) {
            len += 1;
        }
        len
    }

    /// Decodes a base62 string into a token.
    ///
    /// # Errors
    ///
    /// See [`decode`](crate::decode).
    pub fn decode(text: &str) -> Result<Self> {
        decode(text).map(Self)
    }

    /// Returns the encoded form as bytes, for text-based marshalers.
    #[must_use]
    pub fn to_text(self) -> Vec<u8> {
        self.encode().into_bytes()
    }

    /// Decodes a token from the bytes of a text field.
    ///
    /// Empty input is rejected with [`Error::TokenTooSmall`], so a token
    /// written from [`Token::ZERO`] does not read back. Model "no token" as
    /// `Option<Token>` instead.
    ///
    /// # Errors
    ///
    /// See [`decode_bytes`](crate::decode_bytes).
    pub fn from_text(bytes: &[u8]) -> Result<Self> {
        decode_bytes(bytes).map(Self)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0; ENCODED_CAPACITY];
        f.pad(self.encode_to_buf(&mut buf))
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0; ENCODED_CAPACITY];
        f.debug_tuple("Token")
            .field(&self.0)
            .field(&self.encode_to_buf(&mut buf))
            .finish()
    }
}

impl FromStr for Token {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl TryFrom<&str> for Token {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl TryFrom<&[u8]> for Token {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_text(bytes)
    }
}

impl From<u64> for Token {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<Token> for u64 {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.encode()
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        let mut buf = [0; ENCODED_CAPACITY];
        self.encode_to_buf(&mut buf) == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
