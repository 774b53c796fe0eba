//! Fluent builder for constructing a [`Sim`].

use rw_core::{AgentId, AgentRngs, Position, SimConfig, Tick};
use rw_walker::{Walker, WalkerConfig};
use tracing::debug;

use crate::{ModelStatus, Sim, SimError, SimResult};

/// A population slot waiting for [`SimBuilder::build`].
enum Entry {
    Ready(Walker),
    Pending {
        initial: Position,
        config:  WalkerConfig,
    },
}

/// Fluent builder for [`Sim`].
///
/// Walkers receive `AgentId`s in insertion order.  Configuration errors in
/// `.populate` are reported by [`build`](Self::build) together with the
/// `AgentId` of the first offending walker.
///
/// # Optional inputs
///
/// | Method        | Default                                        |
/// |---------------|------------------------------------------------|
/// | `.rngs(r)`    | One `AgentRng` per walker from `config.seed`   |
///
/// # Example
///
/// ```rust
/// use rw_core::{Position, SimConfig};
/// use rw_sim::{NoopObserver, SimBuilder};
/// use rw_walker::{PolicyConfig, WalkerConfig};
///
/// let config = SimConfig { total_ticks: 50, ..SimConfig::default() };
/// let walker = WalkerConfig::new(1.0, PolicyConfig::uniform_levy());
/// let mut sim = SimBuilder::new(config)
///     .populate(10, Position::ORIGIN, &walker)
///     .build()
///     .unwrap();
/// sim.run(&mut NoopObserver).unwrap();
/// assert_eq!(sim.tick().0, 50);
/// ```
pub struct SimBuilder {
    config:  SimConfig,
    entries: Vec<Entry>,
    rngs:    Option<AgentRngs>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, entries: Vec::new(), rngs: None }
    }

    /// Add one already-constructed walker.
    pub fn walker(mut self, walker: Walker) -> Self {
        self.entries.push(Entry::Ready(walker));
        self
    }

    /// Add `count` walkers built from `config`, all starting at `initial`.
    pub fn populate(mut self, count: usize, initial: Position, config: &WalkerConfig) -> Self {
        self.entries.extend(
            (0..count).map(|_| Entry::Pending { initial, config: *config }),
        );
        self
    }

    /// Supply per-walker random streams (must be length `agent_count`).
    pub fn rngs(mut self, rngs: AgentRngs) -> Self {
        self.rngs = Some(rngs);
        self
    }

    /// Validate inputs, construct pending walkers, and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let agent_count = self.entries.len();
        if AgentId::try_from(agent_count).is_err() {
            return Err(SimError::Config(format!(
                "{agent_count} walkers exceed the AgentId range"
            )));
        }

        let rngs = match self.rngs {
            Some(r) => {
                if r.len() != agent_count {
                    return Err(SimError::AgentCountMismatch {
                        expected: agent_count,
                        got:      r.len(),
                        what:     "agent rngs",
                    });
                }
                r
            }
            None => AgentRngs::new(agent_count, self.config.seed)?,
        };

        let walkers = self
            .entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| match entry {
                Entry::Ready(w) => Ok(w),
                Entry::Pending { initial, config } => Walker::new(initial, &config)
                    .map_err(|source| SimError::Walker { agent: AgentId(i as u32), source }),
            })
            .collect::<SimResult<Vec<_>>>()?;

        debug!(walkers = agent_count, seed = self.config.seed, "simulation built");

        Ok(Sim {
            config: self.config,
            walkers,
            rngs,
            tick:   Tick::ZERO,
            status: ModelStatus::NotRun,
        })
    }
}
