//! Boundary-membership scan against a reference circle.

use nalgebra::Vector2;

use super::types::Circle;

/// Indices (ascending) of points lying on the circle's boundary within `eps`.
///
/// "On the boundary" means `|‖p − center‖ − radius| <= eps`. Duplicate
/// points each keep their own index.
pub fn on_circle_indices(points: &[Vector2<f64>], circle: &Circle, eps: f64) -> Vec<usize> {
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| circle.on_boundary_eps(**p, eps))
        .map(|(i, _)| i)
        .collect()
}
