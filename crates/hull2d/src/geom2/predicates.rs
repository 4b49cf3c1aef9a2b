//! Orientation, distance, angle-from-pivot, and pivot selection.
//!
//! All predicates run in `f64`. The collinear test is relative to the edge
//! lengths, so it classifies the same way at every coordinate scale.

use nalgebra::Vector2;

use super::types::{GeomCfg, Turn};
use crate::error::{HullError, Result};

/// Turn at `b` for `a → b → c`, using the default `eps_turn`.
#[inline]
pub fn orientation(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Turn {
    orientation_eps(a, b, c, GeomCfg::default().eps_turn)
}

/// Turn at `b` for `a → b → c`.
///
/// Sign of `v = (b.y−a.y)(c.x−b.x) − (b.x−a.x)(c.y−b.y)`: positive is a right
/// (clockwise) turn, negative a left turn. `|v| <= eps·|b−a|·|c−b|` is
/// collinear, i.e. `eps` bounds the sine of the turn angle. Coincident points
/// give `v = 0` and therefore `Collinear`.
#[inline]
pub fn orientation_eps(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, eps: f64) -> Turn {
    let (ab, bc) = (b - a, c - b);
    let v = ab.y * bc.x - ab.x * bc.y;
    let tol = eps * ab.norm() * bc.norm();
    if v > tol {
        Turn::Right
    } else if v < -tol {
        Turn::Left
    } else {
        Turn::Collinear
    }
}

/// Euclidean distance; symmetric, never negative, `0` for coincident points.
#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (b - a).norm()
}

/// Angle in `[0, π]` between the ray `pivot → p` and the positive x-axis.
///
/// Domain: `p.y > pivot.y`, or `p.y == pivot.y` with `p.x > pivot.x`.
/// Errors: `AngleUndefined` if `p` coincides with `pivot`, `InvalidInput` if
/// `p` lies below (or level and left of) the pivot.
pub fn angle_from_pivot(pivot: Vector2<f64>, p: Vector2<f64>) -> Result<f64> {
    if p == pivot {
        return Err(HullError::AngleUndefined { x: p.x, y: p.y });
    }
    if p.y < pivot.y || (p.y == pivot.y && p.x < pivot.x) {
        return Err(HullError::invalid(format!(
            "point ({}, {}) lies below pivot ({}, {})",
            p.x, p.y, pivot.x, pivot.y
        )));
    }
    let d = distance(pivot, p);
    // Distinct but subnormal offsets can still underflow to zero.
    if d <= 0.0 {
        return Err(HullError::AngleUndefined { x: p.x, y: p.y });
    }
    let cos = ((p.x - pivot.x) / d).clamp(-1.0, 1.0);
    Ok(cos.acos())
}

/// Index of the pivot: minimum y, ties broken by minimum x (first occurrence wins).
pub fn find_pivot(points: &[Vector2<f64>]) -> Result<usize> {
    let (first, rest) = points
        .split_first()
        .ok_or_else(|| HullError::invalid("empty point set"))?;
    let mut best = 0usize;
    let mut low = *first;
    for (i, p) in rest.iter().enumerate() {
        if p.y < low.y || (p.y == low.y && p.x < low.x) {
            best = i + 1;
            low = *p;
        }
    }
    Ok(best)
}

/// Reject NaN/inf coordinates; they would poison every comparison downstream.
pub(crate) fn check_finite(points: &[Vector2<f64>]) -> Result<()> {
    match points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        Some(i) => Err(HullError::invalid(format!(
            "point {i} has a non-finite coordinate"
        ))),
        None => Ok(()),
    }
}
