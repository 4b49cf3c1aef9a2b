//! Monotonic stack scan over an angularly sorted sequence.

use nalgebra::Vector2;

use super::boundary::HullBoundary;
use crate::error::{HullError, Result};
use crate::geom2::{distance, orientation_eps, GeomCfg, Turn};

/// Stack scan with default tolerances.
#[inline]
pub fn build_hull(ordered: &[Vector2<f64>]) -> Result<HullBoundary> {
    build_hull_with(ordered, GeomCfg::default())
}

/// Build the hull boundary from points sorted by angle around `ordered[0]`.
///
/// Each point is pushed once; before pushing, the stack is popped while its
/// top two points and the new point make a right turn. The stack is seeded
/// through the same guarded loop (never by copying the first three points
/// blindly), so a collinear or duplicated prefix converges like any other
/// run: collinear points stay for the reducer, duplicates of the top are
/// skipped, and the stack never drops below two points.
///
/// Errors: `InvalidInput` on an empty sequence, `TooFewPoints` below three.
pub fn build_hull_with(ordered: &[Vector2<f64>], cfg: GeomCfg) -> Result<HullBoundary> {
    if ordered.is_empty() {
        return Err(HullError::invalid("empty point sequence"));
    }
    if ordered.len() < 3 {
        return Err(HullError::too_few(ordered.len()));
    }
    let mut stack: Vec<Vector2<f64>> = Vec::with_capacity(ordered.len());
    for &p in ordered {
        if let Some(&top) = stack.last() {
            if distance(top, p) <= cfg.eps_point {
                continue;
            }
        }
        while stack.len() >= 2 {
            let n = stack.len();
            if orientation_eps(stack[n - 2], stack[n - 1], p, cfg.eps_turn) != Turn::Right {
                break;
            }
            stack.pop();
        }
        stack.push(p);
    }
    Ok(HullBoundary { vertices: stack })
}
