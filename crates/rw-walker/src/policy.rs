//! Retargeting policies: how a walker picks its next bearing and distance,
//! and when a trip is cut short.
//!
//! Every variant draws the bearing uniformly from `[0, 2π)`.  They differ in
//! the distance law and in two optional per-tick hooks the engine consults
//! while a walker is moving:
//!
//! | Variant              | Distance           | Per-tick hook                         |
//! |----------------------|--------------------|---------------------------------------|
//! | `Uniform`            | `(min, max]`       | —                                     |
//! | `UniformLevy`        | Lévy               | —                                     |
//! | `BoundedUniformLevy` | Lévy               | bounding draw may truncate the trip   |
//! | `HomesickLevy`       | Lévy, or origin    | — (α drawn once per stop)             |
//! | `RapidHomesickLevy`  | Lévy, or origin    | α drawn every moving tick             |

use rw_core::RandomSource;
use serde::{Deserialize, Serialize};

use crate::distribution::{BoundingDistribution, BoundingSampler, Levy, LevyConfig};
use crate::error::{ensure_non_negative, ensure_positive, ensure_probability};
use crate::{WalkerError, WalkerResult, WalkerState};

/// The output of a retargeting decision.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Heading {
    /// Radians in `[0, 2π)`.
    pub bearing:  f64,
    pub distance: f64,
    pub homeward: bool,
}

impl Heading {
    /// Straight back to the walker's origin.
    pub fn home(state: &WalkerState) -> Self {
        let (bearing, distance) = state.position().vector_to(state.origin());
        Self { bearing, distance, homeward: true }
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

fn unit_scale() -> f64 {
    1.0
}

/// Declarative policy selection, as written in a scenario file.
///
/// Unknown parameters are rejected at parse time.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum PolicyConfig {
    Uniform {
        #[serde(default)]
        min_distance: f64,
        max_distance: f64,
    },
    UniformLevy {
        #[serde(default)]
        levy: LevyConfig,
    },
    BoundedUniformLevy {
        #[serde(default)]
        levy:         LevyConfig,
        bounding:     BoundingDistribution,
        #[serde(default = "unit_scale")]
        scale_factor: f64,
    },
    HomesickLevy {
        #[serde(default)]
        levy:             LevyConfig,
        home_probability: f64,
    },
    RapidHomesickLevy {
        #[serde(default)]
        levy:             LevyConfig,
        home_probability: f64,
    },
}

impl PolicyConfig {
    /// Uniform distances in `(0, max_distance]`.
    pub fn uniform(max_distance: f64) -> Self {
        PolicyConfig::Uniform { min_distance: 0.0, max_distance }
    }

    pub fn uniform_levy() -> Self {
        PolicyConfig::UniformLevy { levy: LevyConfig::default() }
    }
}

// ── Runtime policy ────────────────────────────────────────────────────────────

/// A validated retargeting policy.
#[derive(Clone, Debug)]
pub enum RetargetPolicy {
    Uniform {
        min_distance: f64,
        max_distance: f64,
    },
    UniformLevy {
        levy: Levy,
    },
    BoundedUniformLevy {
        levy:         Levy,
        bounding:     BoundingSampler,
        scale_factor: f64,
    },
    HomesickLevy {
        levy:             Levy,
        home_probability: f64,
    },
    RapidHomesickLevy {
        levy:             Levy,
        home_probability: f64,
    },
}

impl RetargetPolicy {
    /// Validate `config` and build the runtime policy.
    pub fn from_config(config: &PolicyConfig) -> WalkerResult<Self> {
        let policy = match *config {
            PolicyConfig::Uniform { min_distance, max_distance } => {
                ensure_non_negative("min_distance", min_distance)?;
                ensure_positive("max_distance", max_distance)?;
                if min_distance > max_distance {
                    return Err(WalkerError::Configuration(format!(
                        "min_distance {min_distance} exceeds max_distance {max_distance}"
                    )));
                }
                RetargetPolicy::Uniform { min_distance, max_distance }
            }
            PolicyConfig::UniformLevy { levy } => RetargetPolicy::UniformLevy {
                levy: Levy::from_config(&levy)?,
            },
            PolicyConfig::BoundedUniformLevy { levy, bounding, scale_factor } => {
                RetargetPolicy::BoundedUniformLevy {
                    levy:         Levy::from_config(&levy)?,
                    bounding:     bounding.build()?,
                    scale_factor: ensure_non_negative("scale_factor", scale_factor)?,
                }
            }
            PolicyConfig::HomesickLevy { levy, home_probability } => RetargetPolicy::HomesickLevy {
                levy:             Levy::from_config(&levy)?,
                home_probability: ensure_probability("home_probability", home_probability)?,
            },
            PolicyConfig::RapidHomesickLevy { levy, home_probability } => {
                RetargetPolicy::RapidHomesickLevy {
                    levy:             Levy::from_config(&levy)?,
                    home_probability: ensure_probability("home_probability", home_probability)?,
                }
            }
        };
        Ok(policy)
    }

    pub fn name(&self) -> &'static str {
        match self {
            RetargetPolicy::Uniform { .. }            => "uniform",
            RetargetPolicy::UniformLevy { .. }        => "uniform_levy",
            RetargetPolicy::BoundedUniformLevy { .. } => "bounded_uniform_levy",
            RetargetPolicy::HomesickLevy { .. }       => "homesick_levy",
            RetargetPolicy::RapidHomesickLevy { .. }  => "rapid_homesick_levy",
        }
    }

    /// Pick the next heading.  Reads `state`, never mutates it.
    ///
    /// Draw order is part of the reproducibility contract: homesick variants
    /// draw the α test first, then (if not going home) bearing, then distance.
    pub fn choose_target<R: RandomSource>(
        &self,
        state: &WalkerState,
        rng:   &mut R,
    ) -> WalkerResult<Heading> {
        match self {
            &RetargetPolicy::Uniform { min_distance, max_distance } => {
                let bearing = rng.bearing();
                // 1 - u maps [0, 1) onto (0, 1], so the range is (min, max].
                let distance = checked_distance(
                    "uniform distance",
                    min_distance + (max_distance - min_distance) * (1.0 - rng.uniform()),
                )?;
                Ok(Heading { bearing, distance, homeward: false })
            }
            RetargetPolicy::UniformLevy { levy }
            | RetargetPolicy::BoundedUniformLevy { levy, .. } => levy_heading(levy, rng),
            RetargetPolicy::HomesickLevy { levy, home_probability }
            | RetargetPolicy::RapidHomesickLevy { levy, home_probability } => {
                if rng.uniform() < *home_probability {
                    Ok(Heading::home(state))
                } else {
                    levy_heading(levy, rng)
                }
            }
        }
    }

    /// Bounding check for a walker that is mid-trip.
    ///
    /// Returns `true` when a (scaled) bounding draw does not exceed the trip
    /// length covered so far, i.e. the trip must end here.  Variants without
    /// a bounding distribution never draw and always return `false`.
    pub fn trip_cutoff<R: RandomSource>(
        &self,
        state: &WalkerState,
        rng:   &mut R,
    ) -> WalkerResult<bool> {
        let RetargetPolicy::BoundedUniformLevy { bounding, scale_factor, .. } = self else {
            return Ok(false);
        };
        let bound = *scale_factor * rng.sample(bounding);
        if !bound.is_finite() {
            return Err(WalkerError::Sampling { what: "bounding distribution", value: bound });
        }
        Ok(bound <= state.trip_length())
    }

    /// Per-step homesick check for a walker that is mid-trip.
    ///
    /// Only `RapidHomesickLevy` draws here, and only while the current trip is
    /// not already headed home.
    pub fn homesick_redirect<R: RandomSource>(
        &self,
        state: &WalkerState,
        rng:   &mut R,
    ) -> Option<Heading> {
        let RetargetPolicy::RapidHomesickLevy { home_probability, .. } = self else {
            return None;
        };
        if state.target().is_some_and(|t| t.homeward) {
            return None;
        }
        (rng.uniform() < *home_probability).then(|| Heading::home(state))
    }
}

fn levy_heading<R: RandomSource>(levy: &Levy, rng: &mut R) -> WalkerResult<Heading> {
    let bearing = rng.bearing();
    let distance = checked_distance("levy distance", rng.sample(levy))?;
    Ok(Heading { bearing, distance, homeward: false })
}

/// Distances must be finite and non-negative.  Values are never clamped.
pub(crate) fn checked_distance(what: &'static str, value: f64) -> WalkerResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(WalkerError::Sampling { what, value })
    }
}
