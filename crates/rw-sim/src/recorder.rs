//! Trajectory collection.

use rw_core::{AgentId, SimConfig, Tick};
use rw_walker::{TickEvent, Walker, WalkerReport};

use crate::{SimError, SimObserver, SimResult};

/// One walker's state after the transition at `tick`.
#[derive(Clone, Debug, PartialEq)]
pub struct TrajectoryRecord {
    pub tick:   Tick,
    pub agent:  AgentId,
    pub report: WalkerReport,
    pub event:  TickEvent,
}

/// A [`SimObserver`] that keeps a [`TrajectoryRecord`] for every walker at
/// every `config.record_interval_ticks`-th tick.
///
/// Records become readable once a [`Sim::run`][crate::Sim::run] has
/// finished; partial trajectories from `run_ticks` or an aborted run are
/// refused with [`SimError::RunNotCompleted`].
#[derive(Clone, Debug)]
pub struct TrajectoryRecorder {
    config:     SimConfig,
    records:    Vec<TrajectoryRecord>,
    final_tick: Option<Tick>,
}

impl TrajectoryRecorder {
    pub fn new(config: &SimConfig) -> Self {
        Self { config: config.clone(), records: Vec::new(), final_tick: None }
    }

    /// The tick reported by `on_sim_end`, once seen.
    pub fn final_tick(&self) -> Option<Tick> {
        self.final_tick
    }

    /// All records in `(tick, agent)` order.
    pub fn records(&self) -> SimResult<&[TrajectoryRecord]> {
        match self.final_tick {
            Some(_) => Ok(&self.records),
            None    => Err(SimError::RunNotCompleted),
        }
    }

    /// Like [`records`](Self::records), by value.
    pub fn into_records(self) -> SimResult<Vec<TrajectoryRecord>> {
        match self.final_tick {
            Some(_) => Ok(self.records),
            None    => Err(SimError::RunNotCompleted),
        }
    }

    /// Records for one walker, oldest first.
    pub fn trajectory(&self, agent: AgentId) -> SimResult<Vec<&TrajectoryRecord>> {
        Ok(self.records()?.iter().filter(|r| r.agent == agent).collect())
    }
}

impl SimObserver for TrajectoryRecorder {
    fn on_walker_tick(&mut self, tick: Tick, agent: AgentId, walker: &Walker, event: TickEvent) {
        if self.config.records_at(tick) {
            self.records.push(TrajectoryRecord { tick, agent, report: walker.report(), event });
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.final_tick = Some(final_tick);
    }
}
