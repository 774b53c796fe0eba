//! Simulation time model.
//!
//! Time is a monotonically increasing integer `Tick`.  One tick is one
//! transition of every walker's state machine; there is no wall-clock mapping
//! because walker velocities are expressed in distance per tick.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The following tick.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically loaded from a TOML scenario file by the application crate and
/// passed to the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SimConfig {
    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical trajectories.
    pub seed: u64,

    /// Record walker state every N ticks.  1 = every tick.
    pub record_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks:           100,
            seed:                  0,
            record_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// `true` if walker state should be recorded at `tick`.
    #[inline]
    pub fn records_at(&self, tick: Tick) -> bool {
        self.record_interval_ticks > 0 && tick.0.is_multiple_of(self.record_interval_ticks)
    }

    /// Reject configurations that cannot drive a run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.record_interval_ticks == 0 {
            return Err(CoreError::Config(
                "record_interval_ticks must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
