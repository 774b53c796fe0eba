//! `rw-walker` — the walker state machine and its retargeting policies.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                      |
//! |------------------|---------------------------------------------------------------|
//! | [`state`]        | `WalkerState`, `Target`, `WalkerPhase`                        |
//! | [`distribution`] | `Levy`, `BoundingDistribution` → `BoundingSampler`            |
//! | [`policy`]       | `PolicyConfig` → `RetargetPolicy`, `Heading`                  |
//! | [`waiting`]      | `WaitingPolicy` — optional pause at reached targets           |
//! | [`engine`]       | `advance` — the per-tick transition, `TickEvent`              |
//! | [`walker`]       | `Walker` — state + policies, `WalkerReport`                   |
//! | [`config`]       | `WalkerConfig`                                                |
//! | [`error`]        | `WalkerError`, `WalkerResult<T>`                              |
//!
//! # Movement model (one transition per tick)
//!
//! 1. An untargeted walker spends a tick choosing a bearing (uniform on
//!    `[0, 2π)`) and a distance from its policy.
//! 2. While moving it covers `velocity` per tick along the stored bearing and
//!    snaps onto the destination on the final step.  Bounded and rapid
//!    homesick policies may end or redirect the trip first.
//! 3. On arrival it either drops the target (retargeting on the following
//!    tick) or, with a [`WaitingPolicy`], rolls each tick to stay put.
//!
//! Walkers share nothing but the random source passed to
//! [`Walker::advance_one_tick`].

pub mod config;
pub mod distribution;
pub mod engine;
pub mod error;
pub mod policy;
pub mod state;
pub mod waiting;
pub mod walker;

#[cfg(test)]
mod tests;

pub use config::WalkerConfig;
pub use distribution::{BoundingDistribution, BoundingSampler, Levy, LevyConfig};
pub use engine::TickEvent;
pub use error::{WalkerError, WalkerResult};
pub use policy::{Heading, PolicyConfig, RetargetPolicy};
pub use state::{ARRIVAL_EPSILON, Target, WalkerPhase, WalkerState};
pub use waiting::WaitingPolicy;
pub use walker::{TargetReport, Walker, WalkerReport};
