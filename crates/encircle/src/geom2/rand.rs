//! Random point clouds (disk scatter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for demo and test scenes. The
//!   sampler can pin some samples at an exact radius so that a scene built
//!   around a reference circle of that radius is guaranteed to have
//!   boundary points to highlight.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => {
                let hi = max.max(min);
                rng.gen_range(min..=hi)
            }
        }
    }
}

/// Disk-scatter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: PointCount,
    /// Scatter radius: free samples are uniform in the disk of this radius.
    pub spread: f64,
    /// Exact distance for pinned samples. Ignored when `ring_count` is 0.
    pub ring_radius: f64,
    /// How many samples to pin at exactly `ring_radius`. Clamped to `count`.
    pub ring_count: usize,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Fixed(24),
            spread: 1.0,
            ring_radius: 0.0,
            ring_count: 0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a point cloud around the origin.
///
/// The first `ring_count` points sit at exactly `ring_radius` (random
/// angles); the rest are uniform in the disk of radius `spread`. Callers
/// translate the cloud if the scene is centered elsewhere.
pub fn draw_point_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let pinned = cfg.ring_count.min(n);
    let spread = cfg.spread.max(0.0);
    let mut pts = Vec::with_capacity(n);
    for _ in 0..pinned {
        let th = rng.gen::<f64>() * std::f64::consts::TAU;
        pts.push(Vector2::new(th.cos(), th.sin()) * cfg.ring_radius);
    }
    for _ in pinned..n {
        let th = rng.gen::<f64>() * std::f64::consts::TAU;
        // sqrt for uniform density over the disk area
        let r = spread * rng.gen::<f64>().sqrt();
        pts.push(Vector2::new(th.cos() * r, th.sin() * r));
    }
    pts
}
