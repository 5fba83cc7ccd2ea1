//! Scene assembly: from raw inputs to a drawable figure.
//!
//! `Scene` is the input side (points plus an optional reference circle);
//! `Figure` is everything a renderer needs, already resolved: scatter
//! markers, hull ring, boundary highlights, spokes, and a world-space frame
//! for equal-aspect mapping onto a screen.

use nalgebra::Vector2;

use crate::geom2::{convex_hull, on_circle_indices, Circle, Tol};

/// Fraction of the larger extent added as frame padding on each side.
const PAD_FRAC: f64 = 0.05;

/// Input scene: a point set, optionally with a reference circle.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub points: Vec<Vector2<f64>>,
    pub circle: Option<Circle>,
}

impl Scene {
    pub fn new(points: Vec<Vector2<f64>>) -> Self {
        Self {
            points,
            circle: None,
        }
    }

    pub fn with_circle(mut self, center: Vector2<f64>, radius: f64) -> Self {
        self.circle = Some(Circle::new(center, radius));
        self
    }

    /// Resolve the scene into a drawable figure.
    ///
    /// Without a circle only the scatter is populated. With one, the hull
    /// and boundary scan run as well: every point within `tol.eps_circle`
    /// of the boundary is flagged and gets a spoke from the center. A
    /// degenerate hull (fewer than 3 effective points) yields an empty ring
    /// rather than an error.
    pub fn figure(&self, tol: Tol) -> Figure {
        let mut hull = Vec::new();
        let mut on_circle = Vec::new();
        let mut spokes = Vec::new();
        if let Some(circle) = self.circle {
            hull = convex_hull(&self.points, tol).unwrap_or_default();
            on_circle = on_circle_indices(&self.points, &circle, tol.eps_circle);
            spokes = on_circle
                .iter()
                .map(|&i| [circle.center, self.points[i]])
                .collect();
        }
        let frame = Frame::around(&self.points, self.circle.as_ref(), tol);
        Figure {
            scatter: self.points.clone(),
            circle: self.circle,
            hull,
            on_circle,
            spokes,
            frame,
        }
    }
}

/// Resolved drawable figure.
#[derive(Clone, Debug)]
pub struct Figure {
    /// All input points, in input order.
    pub scatter: Vec<Vector2<f64>>,
    pub circle: Option<Circle>,
    /// CCW hull ring; empty when absent or degenerate.
    pub hull: Vec<Vector2<f64>>,
    /// Ascending indices into `scatter` of boundary points.
    pub on_circle: Vec<usize>,
    /// One `[center, point]` segment per flagged boundary point.
    pub spokes: Vec<[Vector2<f64>; 2]>,
    pub frame: Frame,
}

/// Padded world-space bounding box of everything drawable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Frame {
    /// Bounds of `points` plus the circle's extent, padded on each side.
    ///
    /// An empty scene gets the unit frame so downstream scales stay finite.
    pub fn around(points: &[Vector2<f64>], circle: Option<&Circle>, tol: Tol) -> Self {
        let mut lo = Vector2::new(f64::INFINITY, f64::INFINITY);
        let mut hi = Vector2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        let mut grow = |p: Vector2<f64>| {
            lo.x = lo.x.min(p.x);
            lo.y = lo.y.min(p.y);
            hi.x = hi.x.max(p.x);
            hi.y = hi.y.max(p.y);
        };
        for p in points {
            grow(*p);
        }
        if let Some(c) = circle {
            let r = c.radius.max(0.0);
            grow(c.center + Vector2::new(r, r));
            grow(c.center - Vector2::new(r, r));
        }
        if !(lo.x.is_finite() && lo.y.is_finite() && hi.x.is_finite() && hi.y.is_finite()) {
            lo = Vector2::new(-1.0, -1.0);
            hi = Vector2::new(1.0, 1.0);
        }
        let pad = ((hi.x - lo.x).max(hi.y - lo.y) * PAD_FRAC).max(tol.eps_extent);
        Self {
            min: lo - Vector2::new(pad, pad),
            max: hi + Vector2::new(pad, pad),
        }
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        (self.min + self.max) * 0.5
    }

    /// Uniform world→screen factor for a `w`×`h` pixel target (equal aspect).
    pub fn scale(&self, w: f64, h: f64) -> f64 {
        let ext = self.max - self.min;
        (w / ext.x.max(f64::MIN_POSITIVE)).min(h / ext.y.max(f64::MIN_POSITIVE))
    }

    /// Map a world point into `w`×`h` screen coordinates (y grows downward),
    /// with the frame centered on the target.
    pub fn map(&self, p: Vector2<f64>, w: f64, h: f64) -> Vector2<f64> {
        let s = self.scale(w, h);
        let c = self.center();
        Vector2::new(w * 0.5 + (p.x - c.x) * s, h * 0.5 - (p.y - c.y) * s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_with_inner() -> Vec<Vector2<f64>> {
        vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(2.0, 0.0),
            Vector2::new(2.0, 2.0),
            Vector2::new(0.0, 2.0),
            Vector2::new(1.0, 1.0),
        ]
    }

    #[test]
    fn no_circle_means_scatter_only() {
        let fig = Scene::new(square_with_inner()).figure(Tol::default());
        assert_eq!(fig.scatter.len(), 5);
        assert!(fig.circle.is_none());
        assert!(fig.hull.is_empty());
        assert!(fig.on_circle.is_empty());
        assert!(fig.spokes.is_empty());
    }

    #[test]
    fn circle_branch_resolves_hull_and_spokes() {
        // Center at the inner point: the four corners sit at distance √2.
        let fig = Scene::new(square_with_inner())
            .with_circle(Vector2::new(1.0, 1.0), 2.0_f64.sqrt())
            .figure(Tol::default());
        assert_eq!(fig.hull.len(), 4);
        assert_eq!(fig.on_circle, vec![0, 1, 2, 3]);
        assert_eq!(fig.spokes.len(), 4);
        for (k, &i) in fig.on_circle.iter().enumerate() {
            assert_eq!(fig.spokes[k][0], Vector2::new(1.0, 1.0));
            assert_eq!(fig.spokes[k][1], fig.scatter[i]);
        }
    }

    #[test]
    fn no_boundary_match_means_no_spokes() {
        let fig = Scene::new(square_with_inner())
            .with_circle(Vector2::new(1.0, 1.0), 0.5)
            .figure(Tol::default());
        assert!(fig.on_circle.is_empty());
        assert!(fig.spokes.is_empty());
        // The hull is still drawn in the circle branch.
        assert_eq!(fig.hull.len(), 4);
    }

    #[test]
    fn degenerate_hull_degrades_to_empty_ring() {
        let pts = vec![Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0)];
        let fig = Scene::new(pts)
            .with_circle(Vector2::new(0.0, 0.0), 1.0)
            .figure(Tol::default());
        assert!(fig.hull.is_empty());
        assert_eq!(fig.on_circle, vec![1]);
    }

    #[test]
    fn frame_covers_points_and_circle() {
        let fig = Scene::new(vec![Vector2::new(0.0, 0.0)])
            .with_circle(Vector2::new(3.0, 0.0), 2.0)
            .figure(Tol::default());
        assert!(fig.frame.min.x < 0.0 && fig.frame.max.x > 5.0);
        assert!(fig.frame.min.y < -2.0 && fig.frame.max.y > 2.0);
    }

    #[test]
    fn frame_map_is_equal_aspect() {
        let frame = Frame {
            min: Vector2::new(-1.0, -1.0),
            max: Vector2::new(1.0, 1.0),
        };
        let (w, h) = (800.0, 600.0);
        let o = frame.map(Vector2::new(0.0, 0.0), w, h);
        let px = frame.map(Vector2::new(1.0, 0.0), w, h);
        let py = frame.map(Vector2::new(0.0, 1.0), w, h);
        assert!((o - Vector2::new(400.0, 300.0)).norm() < 1e-12);
        // Unit steps along x and y land at the same pixel distance.
        assert!(((px - o).norm() - (py - o).norm()).abs() < 1e-9);
        // y is flipped: world up is screen up (smaller pixel row).
        assert!(py.y < o.y);
    }

    #[test]
    fn empty_scene_gets_unit_frame() {
        let frame = Frame::around(&[], None, Tol::default());
        assert!(frame.min.x < frame.max.x);
        assert!(frame.scale(640.0, 480.0).is_finite());
    }
}
