use super::hull::cross;
use super::*;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

/// Is `p` inside or on the CCW ring, within slack `eps` on the cross terms?
fn ring_contains_eps(hull: &[Vector2<f64>], p: Vector2<f64>, eps: f64) -> bool {
    hull.len() >= 3
        && (0..hull.len()).all(|k| cross(hull[k], hull[(k + 1) % hull.len()], p) >= -eps)
}

#[test]
fn hull_of_square_is_ccw_subset() {
    let points = vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(1.0, 1.0),
        Vector2::new(0.0, 1.0),
    ];
    let hull = convex_hull(&points, Tol::default()).unwrap();
    assert_eq!(hull.len(), 4);
    for v in &hull {
        assert!(points.iter().any(|p| (p - v).norm() < 1e-12));
    }
    for k in 0..hull.len() {
        let a = hull[k];
        let b = hull[(k + 1) % hull.len()];
        let c = hull[(k + 2) % hull.len()];
        assert!(cross(a, b, c) > 0.0, "ring must turn CCW");
    }
}

#[test]
fn interior_and_edge_points_are_dropped() {
    let points = vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 4.0],
        vector![0.0, 4.0],
        vector![2.0, 2.0], // interior
        vector![2.0, 0.0], // on an edge
    ];
    let hull = convex_hull(&points, Tol::default()).unwrap();
    assert_eq!(hull.len(), 4);
    assert!(!hull.iter().any(|v| (v - vector![2.0, 2.0]).norm() < 1e-12));
    assert!(!hull.iter().any(|v| (v - vector![2.0, 0.0]).norm() < 1e-12));
}

#[test]
fn degenerate_inputs_have_no_hull() {
    let tol = Tol::default();
    assert!(convex_hull(&[], tol).is_none());
    assert!(convex_hull(&[vector![1.0, 2.0]], tol).is_none());
    // All collinear.
    let line: Vec<_> = (0..5).map(|k| vector![k as f64, 2.0 * k as f64]).collect();
    assert!(convex_hull(&line, tol).is_none());
    // Coincident points collapse below three vertices.
    let twin = vec![vector![1.0, 1.0]; 4];
    assert!(convex_hull(&twin, tol).is_none());
}

#[test]
fn scan_flags_exact_distance_not_nearby() {
    let circle = Circle::new(vector![1.0, -2.0], 3.0);
    let points = vec![
        circle.center + vector![3.0, 0.0],              // exactly r
        circle.center + vector![0.0, 3.1],              // r + 0.1
        circle.center + vector![-3.0, 0.0],             // exactly r
        circle.center + vector![3.0 + 5e-7, 0.0],       // inside tolerance
        circle.center,                                  // the center itself
    ];
    let idx = on_circle_indices(&points, &circle, 1e-6);
    assert_eq!(idx, vec![0, 2, 3]);
}

#[test]
fn scan_with_negative_radius_matches_nothing() {
    let circle = Circle::new(vector![0.0, 0.0], -1.0);
    let points = vec![vector![1.0, 0.0], vector![0.0, 0.0]];
    assert!(on_circle_indices(&points, &circle, 1e-6).is_empty());
}

#[test]
fn circle_predicates() {
    let c = Circle::new(vector![2.0, 0.0], 2.0);
    assert!((c.distance_to(vector![2.0, 2.0]) - 2.0).abs() < 1e-12);
    assert!((c.boundary_gap(vector![2.0, 3.0]) - 1.0).abs() < 1e-12);
    assert!(c.on_boundary_eps(vector![0.0, 0.0], 1e-9));
    assert!(!c.on_boundary_eps(vector![2.0, 0.0], 1e-9));
}

proptest! {
    #[test]
    fn hull_is_convex_subset_containing_all_points(
        raw in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 3..40)
    ) {
        let points: Vec<Vector2<f64>> = raw.iter().map(|&(x, y)| vector![x, y]).collect();
        if let Some(hull) = convex_hull(&points, Tol::default()) {
            prop_assert!(hull.len() >= 3);
            // Subset of the input.
            for v in &hull {
                prop_assert!(points.iter().any(|p| (p - v).norm() < 1e-9));
            }
            // Convex ring, CCW turns throughout.
            for k in 0..hull.len() {
                let a = hull[k];
                let b = hull[(k + 1) % hull.len()];
                let c = hull[(k + 2) % hull.len()];
                prop_assert!(cross(a, b, c) > -1e-9);
            }
            // Encloses every input point.
            for p in &points {
                prop_assert!(ring_contains_eps(&hull, *p, 1e-6));
            }
        }
    }
}
