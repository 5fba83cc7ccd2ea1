//! Point-set figures: convex hulls, reference circles, boundary highlights.
//!
//! The library is pure computation. It turns a point set plus an optional
//! reference circle into a drawable [`figure::Figure`]; putting that figure
//! on a screen (or into a report) is the CLI's job.

pub mod figure;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::figure::{Figure, Frame, Scene};
    pub use crate::geom2::rand::{draw_point_cloud, CloudCfg, PointCount, ReplayToken};
    pub use crate::geom2::{convex_hull, on_circle_indices, Circle, Tol};
    pub use nalgebra::Vector2 as Vec2;
}
