//! Planar coordinate type and bearing arithmetic.
//!
//! Walkers live in unbounded continuous Euclidean space, so `Position` is a
//! plain `f64` pair.  Bearings are radians measured counter-clockwise from the
//! positive x axis and are always reported in `[0, 2π)`.

use std::f64::consts::TAU;

/// Wrap any finite angle into `[0, 2π)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `TAU`, which is
/// outside the half-open range; that case folds back to `0.0`.
#[inline]
pub fn normalize_bearing(theta: f64) -> f64 {
    let wrapped = theta.rem_euclid(TAU);
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// A point in the simulation plane.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(self, other: Position) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Bearing from `self` towards `other`, in `[0, 2π)`.
    ///
    /// Coincident points have no defined direction; `0.0` is returned.
    #[inline]
    pub fn bearing_to(self, other: Position) -> f64 {
        normalize_bearing((other.y - self.y).atan2(other.x - self.x))
    }

    /// Polar form `(bearing, distance)` of the vector from `self` to `point`.
    #[inline]
    pub fn vector_to(self, point: Position) -> (f64, f64) {
        (self.bearing_to(point), self.distance_to(point))
    }

    /// The point `r` units away along `bearing`.
    #[inline]
    pub fn offset_polar(self, bearing: f64, r: f64) -> Position {
        Position {
            x: self.x + bearing.cos() * r,
            y: self.y + bearing.sin() * r,
        }
    }

    /// `true` if `other` lies within `epsilon` of `self`.
    #[inline]
    pub fn approx_eq(self, other: Position, epsilon: f64) -> bool {
        self.distance_to(other) <= epsilon
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Position {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Position { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}
