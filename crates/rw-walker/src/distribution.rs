//! Trip-length distributions: the Lévy law and the bounding family.
//!
//! `rand_distr` covers the bounding kinds directly.  It has no Lévy
//! distribution, so [`Levy`] samples it through the identity
//! `location + scale / Z²` with `Z ~ N(0, 1)`, which has density
//! `f(x) = √(c / 2π) · e^(−c / 2(x−μ)) / (x−μ)^(3/2)` for `x > μ`.

use rand::Rng;
use rand_distr::{Beta, Distribution, Exp, LogNormal, Normal, StandardNormal, Uniform};
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ensure_non_negative, ensure_positive};
use crate::{WalkerError, WalkerResult};

// ── Lévy ──────────────────────────────────────────────────────────────────────

/// Location/scale parameters of a Lévy distribution.
///
/// Defaults to the standard Lévy law (`location = 0`, `scale = 1`).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LevyConfig {
    pub location: f64,
    pub scale:    f64,
}

impl Default for LevyConfig {
    fn default() -> Self {
        Self { location: 0.0, scale: 1.0 }
    }
}

/// Heavy-tailed Lévy distribution over `(location, ∞)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Levy {
    location: f64,
    scale:    f64,
}

impl Levy {
    /// `location` must be non-negative because draws are used as distances.
    pub fn new(location: f64, scale: f64) -> WalkerResult<Self> {
        Ok(Self {
            location: ensure_non_negative("levy.location", location)?,
            scale:    ensure_positive("levy.scale", scale)?,
        })
    }

    pub fn standard() -> Self {
        Self { location: 0.0, scale: 1.0 }
    }

    pub fn from_config(config: &LevyConfig) -> WalkerResult<Self> {
        Self::new(config.location, config.scale)
    }

    pub fn location(&self) -> f64 {
        self.location
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Distribution<f64> for Levy {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let z: f64 = rng.sample(StandardNormal);
        // z == 0 yields +inf; the engine reports it as a sampling error.
        self.location + self.scale / (z * z)
    }
}

// ── Bounding distributions ────────────────────────────────────────────────────

/// Declarative description of a bounding distribution, as written in a
/// scenario file.
///
/// ```toml
/// [walker.policy.bounding]
/// kind    = "normal"
/// mean    = 100.0
/// std_dev = 12.5
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum BoundingDistribution {
    Normal { mean: f64, std_dev: f64 },
    LogNormal { mu: f64, sigma: f64 },
    Beta { alpha: f64, beta: f64 },
    Uniform { low: f64, high: f64 },
    Exponential { rate: f64 },
    /// Degenerate distribution that always yields `value`.
    Constant { value: f64 },
}

impl BoundingDistribution {
    /// Validate the shape parameters and build a sampler.
    pub fn build(&self) -> WalkerResult<BoundingSampler> {
        let invalid = |kind: &str, e: &dyn std::fmt::Display| {
            WalkerError::Configuration(format!("{kind} bounding distribution: {e}"))
        };

        let sampler = match *self {
            BoundingDistribution::Normal { mean, std_dev } => {
                ensure_finite("bounding.mean", mean)?;
                ensure_non_negative("bounding.std_dev", std_dev)?;
                let d = Normal::new(mean, std_dev).map_err(|e| invalid("normal", &e))?;
                BoundingSampler::Normal(d)
            }
            BoundingDistribution::LogNormal { mu, sigma } => {
                ensure_finite("bounding.mu", mu)?;
                ensure_non_negative("bounding.sigma", sigma)?;
                let d = LogNormal::new(mu, sigma).map_err(|e| invalid("log_normal", &e))?;
                BoundingSampler::LogNormal(d)
            }
            BoundingDistribution::Beta { alpha, beta } => {
                ensure_positive("bounding.alpha", alpha)?;
                ensure_positive("bounding.beta", beta)?;
                let d = Beta::new(alpha, beta).map_err(|e| invalid("beta", &e))?;
                BoundingSampler::Beta(d)
            }
            BoundingDistribution::Uniform { low, high } => {
                ensure_finite("bounding.low", low)?;
                ensure_finite("bounding.high", high)?;
                // `Uniform::new` panics on an empty range, so reject it here.
                if low >= high {
                    return Err(WalkerError::Configuration(format!(
                        "uniform bounding distribution needs low < high, got [{low}, {high})"
                    )));
                }
                BoundingSampler::Uniform(Uniform::new(low, high))
            }
            BoundingDistribution::Exponential { rate } => {
                ensure_positive("bounding.rate", rate)?;
                let d = Exp::new(rate).map_err(|e| invalid("exponential", &e))?;
                BoundingSampler::Exponential(d)
            }
            BoundingDistribution::Constant { value } => {
                BoundingSampler::Constant(ensure_finite("bounding.value", value)?)
            }
        };
        Ok(sampler)
    }
}

/// A validated, ready-to-sample bounding distribution.
#[derive(Clone, Debug)]
pub enum BoundingSampler {
    Normal(Normal<f64>),
    LogNormal(LogNormal<f64>),
    Beta(Beta<f64>),
    Uniform(Uniform<f64>),
    Exponential(Exp<f64>),
    Constant(f64),
}

impl Distribution<f64> for BoundingSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            BoundingSampler::Normal(d)      => d.sample(rng),
            BoundingSampler::LogNormal(d)   => d.sample(rng),
            BoundingSampler::Beta(d)        => d.sample(rng),
            BoundingSampler::Uniform(d)     => d.sample(rng),
            BoundingSampler::Exponential(d) => d.sample(rng),
            BoundingSampler::Constant(v)    => *v,
        }
    }
}
