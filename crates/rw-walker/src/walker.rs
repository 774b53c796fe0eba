//! `Walker` — a walker's state bundled with the policies that drive it.

use rw_core::{Position, RandomSource};
use serde::Serialize;

use crate::engine::{self, TickEvent};
use crate::{
    RetargetPolicy, Target, WaitingPolicy, WalkerConfig, WalkerPhase, WalkerResult, WalkerState,
};

/// A single mobile agent.
///
/// # Example
///
/// ```rust
/// use rw_core::{Position, SimRng};
/// use rw_walker::{PolicyConfig, Walker, WalkerConfig};
///
/// let config = WalkerConfig::new(1.0, PolicyConfig::uniform(5.0));
/// let mut walker = Walker::new(Position::ORIGIN, &config).unwrap();
/// let mut rng = SimRng::new(42);
///
/// walker.advance_one_tick(&mut rng).unwrap(); // picks a target
/// assert!(walker.target().is_some());
/// assert_eq!(walker.position(), Position::ORIGIN);
/// ```
#[derive(Clone, Debug)]
pub struct Walker {
    state:   WalkerState,
    policy:  RetargetPolicy,
    waiting: Option<WaitingPolicy>,
}

impl Walker {
    /// Validate `config` and place a new, untargeted walker at `initial`.
    pub fn new(initial: Position, config: &WalkerConfig) -> WalkerResult<Self> {
        let state = WalkerState::new(initial, config.velocity)?;
        let policy = RetargetPolicy::from_config(&config.policy)?;
        let waiting = config.wait_probability.map(WaitingPolicy::new).transpose()?;
        Ok(Self { state, policy, waiting })
    }

    /// Run one transition of the state machine.
    pub fn advance_one_tick<R: RandomSource>(&mut self, rng: &mut R) -> WalkerResult<TickEvent> {
        engine::advance(&mut self.state, &self.policy, self.waiting.as_ref(), rng)
    }

    // ── Read-only accessors ───────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> &WalkerState {
        &self.state
    }

    #[inline]
    pub fn policy(&self) -> &RetargetPolicy {
        &self.policy
    }

    #[inline]
    pub fn waiting_policy(&self) -> Option<&WaitingPolicy> {
        self.waiting.as_ref()
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.state.position()
    }

    #[inline]
    pub fn origin(&self) -> Position {
        self.state.origin()
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.state.velocity()
    }

    #[inline]
    pub fn target(&self) -> Option<&Target> {
        self.state.target()
    }

    #[inline]
    pub fn is_on_target(&self) -> bool {
        self.state.is_on_target()
    }

    #[inline]
    pub fn waiting(&self) -> bool {
        self.state.waiting()
    }

    #[inline]
    pub fn phase(&self) -> WalkerPhase {
        self.state.phase()
    }

    /// Flat snapshot for trajectory collectors.
    pub fn report(&self) -> WalkerReport {
        let position = self.state.position();
        let target = self.state.target().map(|t| TargetReport {
            x:         t.destination.x,
            y:         t.destination.y,
            bearing:   t.bearing,
            remaining: self.state.distance_to_target().unwrap_or_default(),
            homeward:  t.homeward,
        });
        WalkerReport {
            x: position.x,
            y: position.y,
            target,
            distance_traveled: self.state.distance_traveled(),
            trip_length: self.state.trip_length(),
            phase: self.state.phase().as_str(),
        }
    }
}

/// A walker's observable state at one tick.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WalkerReport {
    pub x: f64,
    pub y: f64,
    /// Absent while the walker has no target.
    pub target: Option<TargetReport>,
    pub distance_traveled: f64,
    pub trip_length: f64,
    pub phase: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TargetReport {
    pub x:         f64,
    pub y:         f64,
    pub bearing:   f64,
    pub remaining: f64,
    pub homeward:  bool,
}
