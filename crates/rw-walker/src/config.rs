//! Walker construction parameters.

use serde::{Deserialize, Serialize};

use crate::PolicyConfig;

/// Everything needed to construct a walker apart from its start position.
///
/// ```toml
/// [walker]
/// velocity         = 1.0
/// wait_probability = 0.8
///
/// [walker.policy]
/// kind             = "homesick_levy"
/// home_probability = 0.1
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalkerConfig {
    /// Distance covered per tick.  Must be > 0.
    pub velocity: f64,

    pub policy: PolicyConfig,

    /// Enables waiting at reached targets when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_probability: Option<f64>,
}

impl WalkerConfig {
    pub fn new(velocity: f64, policy: PolicyConfig) -> Self {
        Self { velocity, policy, wait_probability: None }
    }

    pub fn with_waiting(mut self, wait_probability: f64) -> Self {
        self.wait_probability = Some(wait_probability);
        self
    }
}
