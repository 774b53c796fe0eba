//! Simulation observer trait for progress reporting and data collection.

use rw_core::{AgentId, Tick};
use rw_walker::{TickEvent, Walker};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — arrival counter
///
/// ```rust
/// use rw_core::{AgentId, Tick};
/// use rw_sim::SimObserver;
/// use rw_walker::{TickEvent, Walker};
///
/// #[derive(Default)]
/// struct Arrivals(usize);
///
/// impl SimObserver for Arrivals {
///     fn on_walker_tick(&mut self, _t: Tick, _a: AgentId, _w: &Walker, event: TickEvent) {
///         if matches!(event, TickEvent::Arrived { .. }) {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any walker moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per walker per tick, in ascending `AgentId` order, after
    /// every walker has completed the tick's transition.
    fn on_walker_tick(
        &mut self,
        _tick:   Tick,
        _agent:  AgentId,
        _walker: &Walker,
        _event:  TickEvent,
    ) {}

    /// Called at the end of each tick with the whole population.
    fn on_tick_end(&mut self, _tick: Tick, _walkers: &[Walker]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
