//! Serde support for [`Token`].
//!
//! A [`Token`] serializes as its base62 string and deserializes from one, so
//! structured formats (JSON, TOML, ...) only ever see the encoded form. Two
//! field adapters cover the other combinations:
//!
//! - [`as_base62`]: a plain `u64` field stored as a base62 string
//! - [`as_native`]: a [`Token`] field stored as a plain integer
//!
//! ⚠️ [`Token::ZERO`] serializes to `""`, which does not deserialize. Use
//! `Option<Token>` for fields that may be absent.
use crate::Token;
use ::serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use core::fmt;

impl Serialize for Token {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut buf = [0; crate::ENCODED_CAPACITY];
        s.serialize_str(self.encode_to_buf(&mut buf))
    }
}

impl<'de> Deserialize<'de> for Token {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_str(Base62Visitor)
    }
}

struct Base62Visitor;

impl de::Visitor<'_> for Base62Visitor {
    type Value = Token;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a base62 encoded token string")
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Token::decode(v).map_err(de::Error::custom)
    }

    #[inline]
    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Token::from_text(v).map_err(de::Error::custom)
    }
}

/// Stores a raw `u64` field as a base62 string.
///
/// # Example
///
/// ```
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Link {
///     #[serde(with = "token62::serde::as_base62")]
///     id: u64,
/// }
///
/// let json = serde_json::to_string(&Link { id: 2_751_173_559_858 }).unwrap();
/// assert_eq!(json, r#"{"id":"Mr1NSSu"}"#);
/// ```
pub mod as_base62 {
    use super::{Base62Visitor, Deserializer, Serialize, Serializer};
    use crate::Token;

    /// Serialize a `u64` as a base62 encoded string.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(raw: &u64, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Token::from_raw(*raw).serialize(s)
    }

    /// Deserialize a `u64` from a base62 encoded string.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The underlying deserializer fails or the value is not a string
    /// - The string is not a valid token (bad length or character)
    pub fn deserialize<'de, D>(d: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_str(Base62Visitor).map(Token::to_raw)
    }
}

/// Stores a [`Token`] field as its native integer.
///
/// Useful when the same type is written both to an external API (as base62)
/// and to an internal store that expects integers.
pub mod as_native {
    use super::{Deserialize, Deserializer, Serialize, Serializer};
    use crate::Token;

    /// Serialize a token as its native integer representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(token: &Token, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        token.to_raw().serialize(s)
    }

    /// Deserialize a token from its native integer representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying deserializer fails.
    pub fn deserialize<'de, D>(d: D) -> Result<Token, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(d).map(Token::from_raw)
    }
}
