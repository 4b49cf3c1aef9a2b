//! Convex hull of a planar point set (Graham scan).
//!
//! Pipeline
//! - pivot (lowest, then leftmost) → angular sort around the pivot →
//!   monotonic stack scan (`build_hull`) → optional collinear reduction
//!   (`reduce_degeneracies`).
//!
//! Conventions
//! - Boundaries are counter-clockwise and start at the pivot.
//! - The stack scan only rejects right turns, so collinear boundary points
//!   survive it; `DegeneracyMode::Reduce` removes them afterwards, including
//!   across the closing edge back to the pivot.
//!
//! Code cross-refs: `geom2::{orientation_eps, sort_by_angle_with, find_pivot}`

mod boundary;
mod reduce;
mod scan;

pub use boundary::HullBoundary;
pub use reduce::{reduce_degeneracies, reduce_degeneracies_with};
pub use scan::{build_hull, build_hull_with};

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

use crate::error::{HullError, Result};
use crate::geom2::{check_finite, collapse_pivot_copies, find_pivot, sort_by_angle_with, GeomCfg};

/// Hull algorithm selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HullMethod {
    #[default]
    GrahamScan,
}

impl fmt::Display for HullMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullMethod::GrahamScan => f.write_str("graham-scan"),
        }
    }
}

impl FromStr for HullMethod {
    type Err = HullError;

    /// Accepts `graham`, `graham-scan`, `graham_scan` (case-insensitive);
    /// anything else is `Unimplemented`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "graham" | "graham-scan" | "graham_scan" => Ok(HullMethod::GrahamScan),
            _ => Err(HullError::Unimplemented {
                method: s.to_string(),
            }),
        }
    }
}

/// What to do with collinear points left on the boundary by the stack scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DegeneracyMode {
    /// Return the stack contents as-is.
    Keep,
    /// Drop boundary points lying strictly inside a hull edge.
    #[default]
    Reduce,
}

/// Convex hull with default tolerances.
#[inline]
pub fn compute_convex_hull(
    points: &[Vector2<f64>],
    method: HullMethod,
    mode: DegeneracyMode,
) -> Result<HullBoundary> {
    compute_convex_hull_with(points, method, mode, GeomCfg::default())
}

/// Convex hull of `points` as a CCW boundary starting at the pivot.
///
/// Copies of the pivot (within `cfg.eps_point`) are collapsed into the pivot
/// before sorting; other duplicates are skipped by the stack scan. Both modes
/// return `TooFewPoints` unless the set spans a polygon: fewer than three
/// distinct points, or all points on one line (whose reduced boundary would
/// be just its two endpoints).
///
/// The input is only borrowed; any component error aborts the computation
/// and is returned unchanged.
pub fn compute_convex_hull_with(
    points: &[Vector2<f64>],
    method: HullMethod,
    mode: DegeneracyMode,
    cfg: GeomCfg,
) -> Result<HullBoundary> {
    match method {
        HullMethod::GrahamScan => graham_scan(points, mode, cfg),
    }
}

fn graham_scan(
    points: &[Vector2<f64>],
    mode: DegeneracyMode,
    cfg: GeomCfg,
) -> Result<HullBoundary> {
    if points.is_empty() {
        return Err(HullError::invalid("empty point set"));
    }
    if points.len() < 3 {
        return Err(HullError::too_few(points.len()));
    }
    check_finite(points)?;

    let pivot = points[find_pivot(points)?];
    let candidates = collapse_pivot_copies(points, pivot, cfg.eps_point);
    tracing::debug!(
        pivot_x = pivot.x,
        pivot_y = pivot.y,
        input = points.len(),
        candidates = candidates.len(),
        "graham_scan_pivot"
    );
    if candidates.len() < 3 {
        return Err(HullError::too_few(candidates.len()));
    }

    let ordered = sort_by_angle_with(&candidates, pivot, cfg)?;
    let hull = build_hull_with(&ordered.points, cfg)?;
    tracing::debug!(stack = hull.len(), "graham_scan_stack");
    if hull.len() < 3 {
        return Err(HullError::too_few(hull.len()));
    }

    let reduced = reduce_degeneracies_with(hull.vertices(), cfg)?;
    tracing::debug!(reduced = reduced.len(), "graham_scan_reduced");
    // Collinear input: the reduced boundary is a segment.
    if reduced.len() < 3 {
        return Err(HullError::too_few(reduced.len()));
    }
    match mode {
        DegeneracyMode::Keep => Ok(hull),
        DegeneracyMode::Reduce => Ok(reduced),
    }
}

#[cfg(test)]
mod tests;
