//! Basic types and tolerances.
//!
//! - `Tol`: centralizes epsilons for dedup, boundary membership, and extent
//!   guards.
//! - `Circle`: reference circle with distance/boundary predicates.

use nalgebra::Vector2;

/// Geometry tolerances.
#[derive(Clone, Copy, Debug)]
pub struct Tol {
    /// Points closer than this are treated as duplicates by the hull.
    pub eps_dedup: f64,
    /// Slack for `|distance - radius|` when flagging boundary points.
    pub eps_circle: f64,
    /// Lower bound on frame extents to keep world→screen scales finite.
    pub eps_extent: f64,
}

impl Default for Tol {
    fn default() -> Self {
        Self {
            eps_dedup: 1e-12,
            eps_circle: 1e-6,
            eps_extent: 1e-9,
        }
    }
}

/// Reference circle: center point plus radius.
///
/// The radius is taken as given (no validation); a negative radius can never
/// match a boundary point since distances are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vector2<f64>,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(center: Vector2<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Euclidean distance from `p` to the center.
    #[inline]
    pub fn distance_to(&self, p: Vector2<f64>) -> f64 {
        (p - self.center).norm()
    }

    /// Absolute gap between `p`'s center distance and the radius.
    #[inline]
    pub fn boundary_gap(&self, p: Vector2<f64>) -> f64 {
        (self.distance_to(p) - self.radius).abs()
    }

    /// Does `p` lie on the boundary, within slack `eps`?
    #[inline]
    pub fn on_boundary_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        self.boundary_gap(p) <= eps
    }
}
