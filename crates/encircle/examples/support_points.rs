//! Boundary-support probe for a sampled scene.
//!
//! Purpose
//! - Provide a reproducible, code-backed data point for "how many of a
//!   cloud's points end up flagged on the reference circle, and which hull
//!   do they span?" without opening a window.
//!
//! Why this shape
//! - We pin four samples at exactly the reference radius so the boundary
//!   scan is guaranteed to have matches, mirroring the scenes the CLI
//!   renders.

use encircle::figure::Scene;
use encircle::geom2::rand::{draw_point_cloud, CloudCfg, PointCount, ReplayToken};
use encircle::geom2::Tol;
use nalgebra::Vector2;

fn main() {
    let radius = 1.5;
    let cfg = CloudCfg {
        count: PointCount::Fixed(24),
        spread: 2.0,
        ring_radius: radius,
        ring_count: 4,
    };
    let points = draw_point_cloud(cfg, ReplayToken { seed: 2015, index: 0 });

    let fig = Scene::new(points)
        .with_circle(Vector2::zeros(), radius)
        .figure(Tol::default());

    println!(
        "points={} hull_vertices={} on_circle={} spokes={}",
        fig.scatter.len(),
        fig.hull.len(),
        fig.on_circle.len(),
        fig.spokes.len()
    );
    for &i in &fig.on_circle {
        let p = fig.scatter[i];
        println!("support index={i} x={:.9} y={:.9}", p.x, p.y);
    }
    println!(
        "frame=[{:.3}, {:.3}] x [{:.3}, {:.3}]",
        fig.frame.min.x, fig.frame.max.x, fig.frame.min.y, fig.frame.max.y
    );
}
