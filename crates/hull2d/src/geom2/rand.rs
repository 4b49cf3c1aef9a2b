//! Random point sets for tests, benches and the CLI generator.
//!
//! Model
//! - `count` points drawn uniformly from the square `[min, max]²`, optionally
//!   snapped to integer coordinates (which makes collinear and duplicate
//!   configurations common).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::PointSet;
use crate::error::{HullError, Result};

/// Axis-aligned square `[min, max]²` to sample from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: f64,
    pub max: f64,
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self {
            min: -100.0,
            max: 100.0,
        }
    }
}

/// Point-set sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointSetCfg {
    pub count: usize,
    pub bounds: Bounds2,
    /// Round coordinates to the nearest integer.
    pub integer: bool,
}

impl Default for PointSetCfg {
    fn default() -> Self {
        Self {
            count: 32,
            bounds: Bounds2::default(),
            integer: false,
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

/// Draw a random point set. Fails with `InvalidInput` on non-finite or
/// inverted bounds.
pub fn random_point_set(cfg: PointSetCfg, tok: ReplayToken) -> Result<PointSet> {
    let Bounds2 { min, max } = cfg.bounds;
    if !(min.is_finite() && max.is_finite()) || min > max {
        return Err(HullError::invalid(format!(
            "bad sampling bounds [{min}, {max}]"
        )));
    }
    let mut rng = tok.to_std_rng();
    let mut out = PointSet::with_capacity(cfg.count);
    for _ in 0..cfg.count {
        let mut x = rng.gen_range(min..=max);
        let mut y = rng.gen_range(min..=max);
        if cfg.integer {
            x = x.round();
            y = y.round();
        }
        out.push_coords(x, y);
    }
    Ok(out)
}
