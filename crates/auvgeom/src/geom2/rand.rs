//! Random point sets in convex position (shuffled order).
//!
//! Purpose
//! - Feed `Polygon::new` with unordered input whose true polygon is known:
//!   points lie on a circle, so every point is a vertex of the hull.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular
//!   jitter (strictly below half the spacing, so angles stay distinct), place
//!   the points on a circle around `center`, then shuffle.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ConvexCfg {
    /// Number of points; raised to 3 if smaller.
    pub count: usize,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    pub radius: f64,
    pub center: Point,
}

impl Default for ConvexCfg {
    fn default() -> Self {
        Self {
            count: 8,
            angle_jitter_frac: 0.3,
            radius: 1.0,
            center: Point::origin(),
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
        // SplitMix64 finalizer.
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

/// Draw `cfg.count` points on a circle in shuffled order.
///
/// The same `(cfg, tok)` always yields the same points in the same order.
pub fn draw_convex_points(cfg: ConvexCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let r = cfg.radius.abs().max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let mut pts: Vec<Point> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let theta = phase + (k as f64) * delta + jitter;
            Point::new(
                cfg.center.x + r * theta.cos(),
                cfg.center.y + r * theta.sin(),
            )
        })
        .collect();
    pts.shuffle(&mut rng);
    pts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_is_deterministic() {
        let cfg = ConvexCfg::default();
        let tok = ReplayToken { seed: 7, index: 3 };
        assert_eq!(draw_convex_points(cfg, tok), draw_convex_points(cfg, tok));
        let other = ReplayToken { seed: 7, index: 4 };
        assert_ne!(draw_convex_points(cfg, tok), draw_convex_points(cfg, other));
    }

    #[test]
    fn points_lie_on_circle() {
        let cfg = ConvexCfg {
            count: 2,
            radius: 2.5,
            center: Point::new(1.0, -1.0),
            ..ConvexCfg::default()
        };
        let pts = draw_convex_points(cfg, ReplayToken { seed: 1, index: 0 });
        assert_eq!(pts.len(), 3);
        for p in pts {
            assert!((p.distance_to_point(&cfg.center) - 2.5).abs() < 1e-12);
        }
    }
}
