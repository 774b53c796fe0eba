//! Optional pause at a reached target.

use rw_core::RandomSource;

use crate::WalkerResult;
use crate::error::ensure_probability;

/// Probabilistic pause at an arrived target.  Composes with any
/// [`RetargetPolicy`](crate::RetargetPolicy).
///
/// Each decision draws `u ∈ [0, 1)` and waits iff `u <= wait_probability`.
/// The same rule applies on arrival and on every tick spent waiting, so with
/// `wait_probability = 1` a walker never leaves its first target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WaitingPolicy {
    wait_probability: f64,
}

impl WaitingPolicy {
    pub fn new(wait_probability: f64) -> WalkerResult<Self> {
        Ok(Self {
            wait_probability: ensure_probability("wait_probability", wait_probability)?,
        })
    }

    #[inline]
    pub fn wait_probability(&self) -> f64 {
        self.wait_probability
    }

    /// Roll once: `true` means stay (or start staying) on the target.
    #[inline]
    pub fn should_wait<R: RandomSource>(&self, rng: &mut R) -> bool {
        rng.uniform() <= self.wait_probability
    }
}
