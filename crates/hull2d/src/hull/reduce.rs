//! Removal of collinear (degenerate) points from a hull boundary.

use nalgebra::Vector2;

use super::boundary::HullBoundary;
use crate::error::{HullError, Result};
use crate::geom2::{distance, orientation_eps, GeomCfg, Turn};

/// Reduction with default tolerances.
#[inline]
pub fn reduce_degeneracies(hull: &[Vector2<f64>]) -> Result<HullBoundary> {
    reduce_degeneracies_with(hull, GeomCfg::default())
}

/// Drop boundary points that lie inside an edge, including the closing edge.
///
/// Sliding window `(a, b, c)`: `a` is the last retained point, `b` the
/// candidate, `c` the candidate's successor (wrapping to `hull[0]` after the
/// last point). `b` is dropped when it coincides with `a`, or when `a, b, c`
/// are collinear and `b` lies between them. A collinear reversal (`c` back
/// towards `a`) keeps `b`, since it is an endpoint. `hull[0]` is always kept
/// and copies of it are dropped.
///
/// Errors: `TooFewPoints` below three points.
pub fn reduce_degeneracies_with(hull: &[Vector2<f64>], cfg: GeomCfg) -> Result<HullBoundary> {
    let n = hull.len();
    if n < 3 {
        return Err(HullError::too_few(n));
    }
    let mut out: Vec<Vector2<f64>> = Vec::with_capacity(n);
    out.push(hull[0]);
    for i in 1..n {
        let a = out[out.len() - 1];
        let b = hull[i];
        let c = hull[(i + 1) % n];
        // A repeated start point closes the ring; it is not a vertex.
        let closes_ring = distance(b, hull[0]) <= cfg.eps_point;
        if !closes_ring && !is_redundant(a, b, c, cfg) {
            out.push(b);
        }
    }
    Ok(HullBoundary { vertices: out })
}

#[inline]
fn is_redundant(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, cfg: GeomCfg) -> bool {
    if distance(a, b) <= cfg.eps_point {
        return true;
    }
    orientation_eps(a, b, c, cfg.eps_turn) == Turn::Collinear && (b - a).dot(&(c - b)) > 0.0
}
