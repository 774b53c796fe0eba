//! `rw-core` — foundational types for the `rust_walk` mobility framework.
//!
//! This crate is a dependency of every other `rw-*` crate.  It intentionally
//! has no `rw-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                                 |
//! | [`geo`]         | `Position`, bearing normalisation                         |
//! | [`time`]        | `Tick`, `SimConfig`                                       |
//! | [`rng`]         | `RandomSource` trait, `AgentRng`, `AgentRngs`, `SimRng`   |
//! | [`error`]       | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{Position, normalize_bearing};
pub use ids::AgentId;
pub use rng::{AgentRng, AgentRngs, RandomSource, SimRng};
pub use time::{SimConfig, Tick};
