//! The per-tick transition function.
//!
//! ```text
//! NoTarget        ── choose_target ─────────────────────────▶ Moving
//! Moving          ── homesick redirect (rapid variant) ─────▶ Moving (homeward)
//!                 ── bounding cutoff ───────────────────────▶ OnTargetReady
//!                 ── step of ≤ velocity ────────────────────▶ Moving | OnTargetReady
//! OnTargetReady   ── u <= p (waiting walkers) ──────────────▶ OnTargetWaiting
//!                 ── otherwise ─────────────────────────────▶ NoTarget
//! OnTargetWaiting ── u <= p ────────────────────────────────▶ OnTargetWaiting
//!                 ── otherwise ─────────────────────────────▶ NoTarget
//! ```
//!
//! Exactly one arrow fires per tick.  Retargeting, redirecting, truncating,
//! and clearing each consume the tick without moving the walker.

use rw_core::RandomSource;
use tracing::{debug, trace};

use crate::{
    RetargetPolicy, Target, WaitingPolicy, WalkerPhase, WalkerResult, WalkerState,
    ARRIVAL_EPSILON,
};

/// What a single tick did to a walker.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TickEvent {
    /// A new target was chosen; `homeward` if a homesick policy picked origin.
    Retargeted { homeward: bool },
    /// A trip in progress was replaced by a trip home.
    RedirectedHome,
    /// Moved `step` units without reaching the target.
    Moved { step: f64 },
    /// Moved `step` units and landed on the target.
    Arrived { step: f64 },
    /// The bounding check ended the trip where the walker stands.
    TripTruncated,
    StartedWaiting,
    Waited,
    /// The reached target was dropped; the next tick retargets.
    TargetCleared,
}

impl TickEvent {
    /// `true` for the events that set a new target.
    #[inline]
    pub fn acquired_target(self) -> bool {
        matches!(self, TickEvent::Retargeted { .. } | TickEvent::RedirectedHome)
    }

    /// Distance covered during the tick.
    #[inline]
    pub fn step(self) -> f64 {
        match self {
            TickEvent::Moved { step } | TickEvent::Arrived { step } => step,
            _ => 0.0,
        }
    }
}

/// Advance `state` by one tick.
///
/// Deterministic given the next draws of `rng`.  Fails only when a
/// distribution yields an unusable value; `state` is left untouched in
/// that case.
pub fn advance<R: RandomSource>(
    state:   &mut WalkerState,
    policy:  &RetargetPolicy,
    waiting: Option<&WaitingPolicy>,
    rng:     &mut R,
) -> WalkerResult<TickEvent> {
    let event = match state.phase() {
        WalkerPhase::NoTarget => retarget(state, policy, rng)?,
        WalkerPhase::Moving => travel(state, policy, rng)?,
        WalkerPhase::OnTargetReady => match waiting {
            Some(w) if w.should_wait(rng) => {
                state.waiting = true;
                TickEvent::StartedWaiting
            }
            _ => clear(state),
        },
        WalkerPhase::OnTargetWaiting => match waiting {
            Some(w) if w.should_wait(rng) => TickEvent::Waited,
            _ => clear(state),
        },
    };
    trace!(position = %state.position, ?event, "walker tick");
    Ok(event)
}

fn retarget<R: RandomSource>(
    state:  &mut WalkerState,
    policy: &RetargetPolicy,
    rng:    &mut R,
) -> WalkerResult<TickEvent> {
    let heading = policy.choose_target(state, rng)?;
    begin_trip(state, Target::from_heading(state.position, heading, state.origin));
    debug!(
        policy   = policy.name(),
        bearing  = heading.bearing,
        distance = heading.distance,
        homeward = heading.homeward,
        "retargeted"
    );
    Ok(TickEvent::Retargeted { homeward: heading.homeward })
}

fn travel<R: RandomSource>(
    state:  &mut WalkerState,
    policy: &RetargetPolicy,
    rng:    &mut R,
) -> WalkerResult<TickEvent> {
    let Some(target) = state.target else {
        return retarget(state, policy, rng);
    };

    if let Some(heading) = policy.homesick_redirect(state, rng) {
        begin_trip(state, Target::from_heading(state.position, heading, state.origin));
        debug!(distance = heading.distance, "homesick redirect");
        return Ok(TickEvent::RedirectedHome);
    }

    if policy.trip_cutoff(state, rng)? {
        state.target = Some(target.truncated(state.position, state.trip_length));
        debug!(trip_length = state.trip_length, planned = target.distance, "trip truncated");
        return Ok(TickEvent::TripTruncated);
    }

    let remaining = state.position.distance_to(target.destination);
    // Rounding along the stored bearing can leave the last step a hair long.
    let event = if remaining <= state.velocity + ARRIVAL_EPSILON {
        state.position = target.destination;
        TickEvent::Arrived { step: remaining }
    } else {
        state.position = state.position.offset_polar(target.bearing, state.velocity);
        TickEvent::Moved { step: state.velocity }
    };
    let step = event.step();
    state.distance_traveled += step;
    state.trip_length += step;
    Ok(event)
}

fn begin_trip(state: &mut WalkerState, target: Target) {
    state.target = Some(target);
    state.waiting = false;
    state.trip_length = 0.0;
    state.trips_started += 1;
}

fn clear(state: &mut WalkerState) -> TickEvent {
    state.target = None;
    state.waiting = false;
    TickEvent::TargetCleared
}
