use crate::{MAX_TOKEN_LENGTH, MIN_TOKEN_LENGTH};

/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `token62` can produce.
///
/// Every variant describes why an externally supplied string (or a requested
/// token length) is not acceptable. None of them are fatal: callers usually
/// branch on the variant or simply report "not a valid token".
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The token is longer than [`MAX_TOKEN_LENGTH`].
    #[error("the base62 token is larger than {max} characters (got {len})", max = MAX_TOKEN_LENGTH)]
    TokenTooBig {
        /// Length of the rejected input, in bytes.
        len: usize,
    },

    /// The token is shorter than [`MIN_TOKEN_LENGTH`].
    #[error("the base62 token is smaller than {min} character (got {len})", min = MIN_TOKEN_LENGTH)]
    TokenTooSmall {
        /// Length of the rejected input, in bytes.
        len: usize,
    },

    /// The token contains a character outside of the base62 alphabet.
    ///
    /// For input that is not valid UTF-8, `character` is
    /// [`char::REPLACEMENT_CHARACTER`].
    #[error("non base62 character {character:?} at index {index}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the offending character.
        index: usize,
    },
}

impl Error {
    /// Checks `len` against the token length bounds.
    pub(crate) const fn check_len(len: usize) -> Result<()> {
        if len > MAX_TOKEN_LENGTH {
            Err(Self::TokenTooBig { len })
        } else if len < MIN_TOKEN_LENGTH {
            Err(Self::TokenTooSmall { len })
        } else {
            Ok(())
        }
    }
}
