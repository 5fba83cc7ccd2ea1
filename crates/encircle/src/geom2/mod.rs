//! 2D geometry for point-set scenes.
//!
//! Purpose
//! - Provide the few primitives the figure needs: a tolerance config, a
//!   reference circle with boundary predicates, a convex hull in CCW
//!   V-representation, and a boundary-membership scan.
//! - Keep the API minimal (KISS, YAGNI) and numerically explicit (eps-aware).

pub mod rand;
mod hull;
mod scan;
mod types;

pub use hull::convex_hull;
pub use scan::on_circle_indices;
pub use types::{Circle, Tol};

#[cfg(test)]
mod tests;
