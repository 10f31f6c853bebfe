#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    DEFAULT_TOKEN_LENGTH, Error, MAX_TOKEN_LENGTH, MIN_TOKEN_LENGTH, RandSource, Result,
    ThreadRandom, Token, max_value_for_length,
};

/// A random token generator with an explicitly owned random source.
///
/// Each call draws a value uniformly from `0..62^len`, so the encoded token is
/// **at most** `len` symbols long (shorter when the draw has leading zero
/// digits, and empty when the draw is zero).
///
/// The generator holds no state besides its source, so it is `Send + Sync`
/// whenever the source is. [`ThreadRandom`] is lock-free;
/// [`LockRandom`](crate::LockRandom) serializes callers on a mutex.
///
/// ⚠️ Generated tokens are not guaranteed to be unique. Always check for
/// collisions before persisting one.
///
/// ## Recommended When
/// - You need fresh short-URL slugs or opaque API keys
/// - You want to inject a deterministic source in tests
///
/// # Example
/// ```
/// use token62::{LockRandom, ThreadRandom, TokenGenerator};
///
/// let generator = TokenGenerator::new(ThreadRandom);
/// let token = generator.next_token_with_length(6);
/// assert!(token.encoded_len() <= 6);
///
/// // Reproducible tokens for tests
/// let a = TokenGenerator::new(LockRandom::seed_from_u64(1));
/// let b = TokenGenerator::new(LockRandom::seed_from_u64(1));
/// assert_eq!(a.next_token(), b.next_token());
/// ```
#[derive(Clone, Debug)]
pub struct TokenGenerator<R = ThreadRandom>
where
    R: RandSource<u64>,
{
    rng: R,
}

impl<R> TokenGenerator<R>
where
    R: RandSource<u64>,
{
    /// Creates a generator drawing from `rng`.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns a reference to the underlying random source.
    pub const fn rng(&self) -> &R {
        &self.rng
    }

    /// Returns a token of at most [`DEFAULT_TOKEN_LENGTH`] symbols.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_token(&self) -> Token {
        self.draw(DEFAULT_TOKEN_LENGTH)
    }

    /// Returns a token of at most `len` symbols.
    ///
    /// `len` is expected to be a constant chosen by the programmer. Use
    /// [`Self::try_next_token_with_length`] when it comes from untrusted
    /// input.
    ///
    /// # Panics
    ///
    /// Panics if `len` is outside
    /// [`MIN_TOKEN_LENGTH`]`..=`[`MAX_TOKEN_LENGTH`].
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_token_with_length(&self, len: usize) -> Token {
        match self.try_next_token_with_length(len) {
            Ok(token) => token,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::error!(len, error = %err, "token length out of range");
                panic!(
                    "token length must be within {MIN_TOKEN_LENGTH}..={MAX_TOKEN_LENGTH}: {err}"
                )
            }
        }
    }

    /// Returns a token of at most `len` symbols, or an error if `len` is
    /// outside [`MIN_TOKEN_LENGTH`]`..=`[`MAX_TOKEN_LENGTH`].
    ///
    /// # Errors
    ///
    /// - [`Error::TokenTooSmall`] if `len < MIN_TOKEN_LENGTH`
    /// - [`Error::TokenTooBig`] if `len > MAX_TOKEN_LENGTH`
    ///
    /// # Example
    /// ```
    /// use token62::{Error, ThreadRandom, TokenGenerator};
    ///
    /// let generator = TokenGenerator::new(ThreadRandom);
    /// assert!(generator.try_next_token_with_length(4).is_ok());
    /// assert_eq!(
    ///     generator.try_next_token_with_length(11),
    ///     Err(Error::TokenTooBig { len: 11 })
    /// );
    /// ```
    pub fn try_next_token_with_length(&self, len: usize) -> Result<Token> {
        Error::check_len(len)?;
        Ok(self.draw(len))
    }

    fn draw(&self, len: usize) -> Token {
        Token::from_raw(uniform_below(&self.rng, max_value_for_length(len)))
    }
}

impl Default for TokenGenerator<ThreadRandom> {
    fn default() -> Self {
        Self::new(ThreadRandom)
    }
}

/// Draws a value uniformly from `0..ceiling` by rejection sampling.
///
/// Draws below `2^64 mod ceiling` are discarded; the remaining range is an
/// exact multiple of `ceiling`, so `r % ceiling` carries no modulo bias.
pub(crate) fn uniform_below<R>(rng: &R, ceiling: u64) -> u64
where
    R: RandSource<u64>,
{
    debug_assert!(ceiling > 0);
    let threshold = ceiling.wrapping_neg() % ceiling;
    loop {
        let r = rng.rand();
        if r >= threshold {
            return r % ceiling;
        }
    }
}

impl Token {
    /// Returns a random token of at most [`DEFAULT_TOKEN_LENGTH`] symbols,
    /// drawn from [`ThreadRandom`].
    ///
    /// # Example
    /// ```
    /// use token62::{DEFAULT_TOKEN_LENGTH, Token};
    ///
    /// let token = Token::random();
    /// assert!(token.encoded_len() <= DEFAULT_TOKEN_LENGTH);
    /// ```
    #[must_use]
    pub fn random() -> Self {
        TokenGenerator::new(ThreadRandom).next_token()
    }

    /// Returns a random token of at most `len` symbols, drawn from
    /// [`ThreadRandom`].
    ///
    /// # Panics
    ///
    /// Panics if `len` is outside
    /// [`MIN_TOKEN_LENGTH`]`..=`[`MAX_TOKEN_LENGTH`].
    #[must_use]
    pub fn random_with_length(len: usize) -> Self {
        TokenGenerator::new(ThreadRandom).next_token_with_length(len)
    }
}
