//! Per-walker state: position, origin, velocity, and the active target.

use rw_core::Position;

use crate::error::ensure_positive;
use crate::policy::Heading;
use crate::{WalkerError, WalkerResult};

/// Arrival tolerance.  Movement snaps onto the destination on the final step
/// of a trip, so this only absorbs rounding in the bearing-based steps.
pub const ARRIVAL_EPSILON: f64 = 1e-9;

// ── Target ────────────────────────────────────────────────────────────────────

/// An active destination together with the polar offset chosen when it was
/// set.
///
/// Movement follows the stored `bearing` instead of re-deriving it each tick.
/// `destination = start + distance · (cos bearing, sin bearing)` where `start`
/// is the walker's position at the moment of retargeting.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Target {
    pub destination: Position,
    /// Radians in `[0, 2π)`.
    pub bearing:     f64,
    pub distance:    f64,
    /// `true` when a homesick policy forced this target to the origin.
    pub homeward:    bool,
}

impl Target {
    /// Aim from `start` along `heading`.  Homeward headings land exactly on
    /// `origin` rather than on the rounded polar offset.
    pub fn from_heading(start: Position, heading: Heading, origin: Position) -> Self {
        let destination = if heading.homeward {
            origin
        } else {
            start.offset_polar(heading.bearing, heading.distance)
        };
        Self {
            destination,
            bearing:  heading.bearing,
            distance: heading.distance,
            homeward: heading.homeward,
        }
    }

    /// Cut the trip short at `position` after `trip_length` units of travel.
    pub fn truncated(self, position: Position, trip_length: f64) -> Self {
        Self { destination: position, distance: trip_length, ..self }
    }
}

// ── WalkerPhase ───────────────────────────────────────────────────────────────

/// The mutually exclusive phases of the per-tick state machine.
///
/// Derived from [`WalkerState`]; never stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WalkerPhase {
    NoTarget,
    Moving,
    OnTargetWaiting,
    OnTargetReady,
}

impl WalkerPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            WalkerPhase::NoTarget        => "no_target",
            WalkerPhase::Moving          => "moving",
            WalkerPhase::OnTargetWaiting => "waiting",
            WalkerPhase::OnTargetReady   => "on_target",
        }
    }
}

impl std::fmt::Display for WalkerPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── WalkerState ───────────────────────────────────────────────────────────────

/// Everything one walker owns.  Mutated only by [`crate::engine::advance`].
#[derive(Clone, Debug, PartialEq)]
pub struct WalkerState {
    pub(crate) position:          Position,
    pub(crate) origin:            Position,
    pub(crate) velocity:          f64,
    pub(crate) target:            Option<Target>,
    pub(crate) waiting:           bool,
    /// Odometer since construction.
    pub(crate) distance_traveled: f64,
    /// Path length covered since the current target was set.
    pub(crate) trip_length:       f64,
    pub(crate) trips_started:     u64,
}

impl WalkerState {
    /// A fresh, untargeted walker whose origin is `initial`.
    ///
    /// # Errors
    ///
    /// `Configuration` if `velocity` is not a finite positive number or
    /// `initial` has a non-finite coordinate.
    pub fn new(initial: Position, velocity: f64) -> WalkerResult<Self> {
        if !initial.is_finite() {
            return Err(WalkerError::Configuration(format!(
                "initial position must be finite, got {initial}"
            )));
        }
        Ok(Self {
            position:          initial,
            origin:            initial,
            velocity:          ensure_positive("velocity", velocity)?,
            target:            None,
            waiting:           false,
            distance_traveled: 0.0,
            trip_length:       0.0,
            trips_started:     0,
        })
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn origin(&self) -> Position {
        self.origin
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    #[inline]
    pub fn waiting(&self) -> bool {
        self.waiting
    }

    #[inline]
    pub fn distance_traveled(&self) -> f64 {
        self.distance_traveled
    }

    #[inline]
    pub fn trip_length(&self) -> f64 {
        self.trip_length
    }

    /// Number of targets acquired so far, homesick redirects included.
    #[inline]
    pub fn trips_started(&self) -> u64 {
        self.trips_started
    }

    /// Remaining straight-line distance to the target, if any.
    pub fn distance_to_target(&self) -> Option<f64> {
        self.target.map(|t| self.position.distance_to(t.destination))
    }

    /// `true` iff a target is set and the walker stands on it.
    pub fn is_on_target(&self) -> bool {
        self.target
            .is_some_and(|t| self.position.approx_eq(t.destination, ARRIVAL_EPSILON))
    }

    pub fn phase(&self) -> WalkerPhase {
        match self.target {
            None                     => WalkerPhase::NoTarget,
            Some(_) if self.waiting  => WalkerPhase::OnTargetWaiting,
            Some(_) if self.is_on_target() => WalkerPhase::OnTargetReady,
            Some(_)                  => WalkerPhase::Moving,
        }
    }
}
