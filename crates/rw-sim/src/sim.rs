//! The `Sim` struct and its tick loop.

use std::fmt;

use rw_core::{AgentId, AgentRngs, CoreError, SimConfig, Tick};
use rw_walker::{TickEvent, Walker, WalkerResult};
use tracing::{debug, info, warn};

use crate::{SimError, SimObserver, SimResult};

// ── ModelStatus ───────────────────────────────────────────────────────────────

/// Lifecycle of a [`Sim`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ModelStatus {
    /// Built, no tick processed yet.
    NotRun,
    /// At least one tick processed, or `run` in progress.
    Running,
    /// `run` reached `config.end_tick()`.
    Done,
}

impl fmt::Display for ModelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ModelStatus::NotRun  => "not run",
            ModelStatus::Running => "running",
            ModelStatus::Done    => "done",
        })
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Each tick has two phases:
///
/// 1. **Step** (optionally parallel with the `parallel` feature): every
///    walker performs one transition using its own `AgentRng`.
/// 2. **Notify** (sequential, ascending `AgentId`): events are handed to the
///    observer.  A failed walker is skipped; the tick still completes and
///    the first walker error in `AgentId` order is returned afterwards.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run configuration (total ticks, seed, record interval).
    pub config: SimConfig,

    pub(crate) walkers: Vec<Walker>,

    /// Per-walker deterministic RNGs, separated for the split-borrow pattern.
    pub(crate) rngs: AgentRngs,

    /// Next tick to process.
    pub(crate) tick: Tick,

    pub(crate) status: ModelStatus,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary and `on_sim_end` once at
    /// the end.  Use [`NoopObserver`][crate::NoopObserver] if you don't need
    /// callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = self.config.end_tick();
        info!(
            walkers     = self.walkers.len(),
            from        = %self.tick,
            total_ticks = self.config.total_ticks,
            seed        = self.config.seed,
            "simulation started"
        );
        self.status = ModelStatus::Running;

        while self.tick < end {
            self.process_tick(observer)?;
        }

        self.status = ModelStatus::Done;
        observer.on_sim_end(self.tick);
        info!(final_tick = %self.tick, "simulation finished");
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.  Does not call
    /// `on_sim_end` and leaves the status at `Running`.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        self.status = ModelStatus::Running;
        for _ in 0..n {
            self.process_tick(observer)?;
        }
        Ok(())
    }

    #[inline]
    pub fn status(&self) -> ModelStatus {
        self.status
    }

    /// The next tick to be processed (equals the number processed so far).
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn walkers(&self) -> &[Walker] {
        &self.walkers
    }

    pub fn walker(&self, agent: AgentId) -> SimResult<&Walker> {
        self.walkers
            .get(agent.index())
            .ok_or_else(|| CoreError::AgentNotFound(agent).into())
    }

    #[inline]
    pub fn agent_count(&self) -> usize {
        self.walkers.len()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.tick;
        observer.on_tick_start(now);

        let events = self.step_walkers();

        let (mut acquired, mut arrived) = (0usize, 0usize);
        let mut first_error = None;
        for (i, result) in events.into_iter().enumerate() {
            let agent = AgentId(i as u32);
            match result {
                Ok(event) => {
                    acquired += usize::from(event.acquired_target());
                    arrived += usize::from(matches!(event, TickEvent::Arrived { .. }));
                    observer.on_walker_tick(now, agent, &self.walkers[i], event);
                }
                Err(source) => {
                    warn!(tick = %now, %agent, error = %source, "walker failed");
                    first_error.get_or_insert(SimError::Walker { agent, source });
                }
            }
        }

        // Healthy walkers have already stepped, so the tick is committed.
        observer.on_tick_end(now, &self.walkers);
        debug!(tick = %now, acquired, arrived, "tick complete");
        self.tick = now.next();

        first_error.map_or(Ok(()), Err)
    }

    /// Advance every walker by one transition.
    ///
    /// Each walker draws only from its own stream, so the parallel and
    /// sequential paths produce identical results in identical order.
    fn step_walkers(&mut self) -> Vec<WalkerResult<TickEvent>> {
        #[cfg(not(feature = "parallel"))]
        {
            self.walkers
                .iter_mut()
                .zip(self.rngs.inner.iter_mut())
                .map(|(walker, rng)| walker.advance_one_tick(rng))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.walkers
                .par_iter_mut()
                .zip(self.rngs.inner.par_iter_mut())
                .map(|(walker, rng)| walker.advance_one_tick(rng))
                .collect()
        }
    }
}
