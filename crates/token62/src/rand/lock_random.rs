use crate::{
    RandSource,
    mutex::{Mutex, lock},
};
use core::fmt;
use rand::{RngCore, SeedableRng, rngs::StdRng};
use std::sync::Arc;

/// A `RandSource` backed by an explicitly owned, seeded [`StdRng`].
///
/// The RNG state lives behind an [`Arc<Mutex<_>>`], so clones share one
/// sequence and concurrent callers are serialized instead of racing on the
/// state. Enable the `parking-lot` feature to swap the std mutex for
/// `parking_lot::Mutex`.
///
/// Prefer [`ThreadRandom`] unless you need a single owned sequence, e.g. a
/// reproducible one in tests via [`LockRandom::seed_from_u64`].
///
/// ## See Also
/// - [`ThreadRandom`]
///
/// [`ThreadRandom`]: crate::ThreadRandom
#[derive(Clone)]
pub struct LockRandom {
    rng: Arc<Mutex<StdRng>>,
}

impl LockRandom {
    /// Wraps an existing RNG.
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Creates a source seeded from the operating system's entropy source.
    ///
    /// # Panics
    ///
    /// Panics if the operating system cannot provide entropy.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Creates a deterministic source from a 64-bit seed.
    ///
    /// Two sources built from the same seed yield the same sequence. Do not
    /// use this for anything that must be unpredictable.
    ///
    /// # Example
    /// ```
    /// use token62::{LockRandom, RandSource};
    ///
    /// let a = LockRandom::seed_from_u64(42);
    /// let b = LockRandom::seed_from_u64(42);
    /// assert_eq!(a.rand(), b.rand());
    /// ```
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for LockRandom {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl fmt::Debug for LockRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockRandom").finish_non_exhaustive()
    }
}

impl RandSource<u64> for LockRandom {
    fn rand(&self) -> u64 {
        lock(&self.rng).next_u64()
    }
}
