//! `rw-sim` — tick loop orchestrator for the rust_walk framework.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Start   — observer.on_tick_start(tick)
//!   ② Step    — every walker performs one state-machine transition with its
//!               own AgentRng (parallel with the `parallel` feature).
//!   ③ Notify  — in ascending AgentId order:
//!                 Ok(event)  → observer.on_walker_tick(tick, id, walker, event)
//!                 Err(e)     → skip; keep the first as SimError::Walker { agent: id, .. }
//!   ④ End     — observer.on_tick_end(tick, walkers); the tick is committed
//!               and the first walker error, if any, is returned
//! observer.on_sim_end(end_tick)
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the step phase on Rayon's thread pool.            |
//!
//! # Quick-start
//!
//! ```rust
//! use rw_core::{Position, SimConfig};
//! use rw_sim::{SimBuilder, TrajectoryRecorder};
//! use rw_walker::{PolicyConfig, WalkerConfig};
//!
//! let config = SimConfig { total_ticks: 20, seed: 42, record_interval_ticks: 5 };
//! let walker = WalkerConfig::new(1.0, PolicyConfig::uniform(10.0)).with_waiting(0.8);
//!
//! let mut sim = SimBuilder::new(config.clone())
//!     .populate(3, Position::ORIGIN, &walker)
//!     .build()
//!     .unwrap();
//! let mut recorder = TrajectoryRecorder::new(&config);
//! sim.run(&mut recorder).unwrap();
//!
//! // Ticks 0, 5, 10, 15 for each of the three walkers.
//! assert_eq!(recorder.records().unwrap().len(), 12);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod recorder;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use recorder::{TrajectoryRecord, TrajectoryRecorder};
pub use sim::{ModelStatus, Sim};
