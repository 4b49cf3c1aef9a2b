//! Stable merge sort and the angular ordering around a pivot.
//!
//! Keys are scratch values computed fresh for each call and returned beside
//! the sorted points (`OrderedPoints`); points themselves are never touched.

use std::cmp::Ordering;

use nalgebra::Vector2;

use super::predicates::{angle_from_pivot, check_finite, distance};
use super::types::{GeomCfg, KeyDesc, OrderedPoints, SortKey};
use crate::error::{HullError, Result};

/// Stable bottom-up merge sort, O(n log n) worst case.
///
/// On ties the element from the left run is taken first, so equal elements
/// keep their input order.
pub fn merge_sort_by<T, F>(items: &mut [T], mut cmp: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let n = items.len();
    if n < 2 {
        return;
    }
    let mut buf: Vec<T> = items.to_vec();
    let mut width = 1usize;
    // Runs ping-pong between `items` and `buf`.
    let mut sorted_in_items = true;
    while width < n {
        if sorted_in_items {
            merge_pass(items, &mut buf, width, &mut cmp);
        } else {
            merge_pass(&buf, items, width, &mut cmp);
        }
        sorted_in_items = !sorted_in_items;
        width = width.saturating_mul(2);
    }
    if !sorted_in_items {
        items.clone_from_slice(&buf);
    }
}

fn merge_pass<T, F>(src: &[T], dst: &mut [T], width: usize, cmp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let n = src.len();
    let mut lo = 0usize;
    while lo < n {
        let mid = lo.saturating_add(width).min(n);
        let hi = mid.saturating_add(width).min(n);
        let (mut i, mut j) = (lo, mid);
        for slot in dst[lo..hi].iter_mut() {
            let take_left = i < mid && (j >= hi || cmp(&src[j], &src[i]) != Ordering::Less);
            if take_left {
                *slot = src[i].clone();
                i += 1;
            } else {
                *slot = src[j].clone();
                j += 1;
            }
        }
        lo = hi;
    }
}

/// Sort `points` by the parallel `keys` (stable, non-decreasing by value).
pub fn sort_by_keys(points: &[Vector2<f64>], keys: &[SortKey]) -> Result<OrderedPoints> {
    if points.is_empty() {
        return Err(HullError::invalid("empty point set"));
    }
    if points.len() != keys.len() {
        return Err(HullError::invalid(format!(
            "{} points but {} sort keys",
            points.len(),
            keys.len()
        )));
    }
    let mut order: Vec<usize> = (0..points.len()).collect();
    merge_sort_by(&mut order, |&a, &b| {
        keys[a]
            .value
            .partial_cmp(&keys[b].value)
            .unwrap_or(Ordering::Equal)
    });
    Ok(gather(points, keys, &order))
}

/// Keys equal to each point's x-coordinate.
pub fn keys_by_x(points: &[Vector2<f64>]) -> Vec<SortKey> {
    points
        .iter()
        .map(|p| SortKey {
            value: p.x,
            desc: KeyDesc::XCoord,
        })
        .collect()
}

/// Keys equal to each point's distance from `pivot`.
pub fn keys_by_distance(points: &[Vector2<f64>], pivot: Vector2<f64>) -> Vec<SortKey> {
    points
        .iter()
        .map(|p| SortKey {
            value: distance(pivot, *p),
            desc: KeyDesc::DistanceFromPivot,
        })
        .collect()
}

/// Angular order around `pivot` with default tolerances.
#[inline]
pub fn sort_by_angle(points: &[Vector2<f64>], pivot: Vector2<f64>) -> Result<OrderedPoints> {
    sort_by_angle_with(points, pivot, GeomCfg::default())
}

/// Order all points by angle subtended at `pivot`, pivot first.
///
/// The first occurrence of `pivot` in `points` takes the sentinel key; every
/// other point takes `angle_from_pivot`. Two points on the same ray from the
/// pivot (collinear with it, within `cfg.eps_angle` relative to their
/// distances) are ordered by increasing distance, so the nearer one is scanned
/// first; all other pairs compare by exact angle.
///
/// Errors: `InvalidInput` (empty, non-finite, pivot not in the set, point below
/// the pivot), `TooFewPoints` (fewer than 3), `AngleUndefined` (another point
/// coincides exactly with the pivot).
pub fn sort_by_angle_with(
    points: &[Vector2<f64>],
    pivot: Vector2<f64>,
    cfg: GeomCfg,
) -> Result<OrderedPoints> {
    if points.is_empty() {
        return Err(HullError::invalid("empty point set"));
    }
    if points.len() < 3 {
        return Err(HullError::too_few(points.len()));
    }
    check_finite(points)?;
    let pivot_idx = points
        .iter()
        .position(|p| *p == pivot)
        .ok_or_else(|| HullError::invalid("pivot is not a member of the point set"))?;

    let mut keys = Vec::with_capacity(points.len());
    let mut dist = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        if i == pivot_idx {
            keys.push(SortKey::pivot());
            dist.push(0.0);
        } else {
            keys.push(SortKey {
                value: angle_from_pivot(pivot, *p)?,
                desc: KeyDesc::AngleFromPivot,
            });
            dist.push(distance(pivot, *p));
        }
    }

    let mut order: Vec<usize> = (0..points.len()).collect();
    merge_sort_by(&mut order, |&a, &b| {
        let by = if same_ray(pivot, points[a], points[b], cfg.eps_angle) {
            dist[a].partial_cmp(&dist[b])
        } else {
            keys[a].value.partial_cmp(&keys[b].value)
        };
        by.unwrap_or(Ordering::Equal)
    });
    Ok(gather(points, &keys, &order))
}

/// `p` and `q` leave `pivot` in the same direction: the sine of the angle
/// between them is within `eps` and they are not opposite.
#[inline]
fn same_ray(pivot: Vector2<f64>, p: Vector2<f64>, q: Vector2<f64>, eps: f64) -> bool {
    let (u, w) = (p - pivot, q - pivot);
    let cross = u.x * w.y - u.y * w.x;
    cross.abs() <= eps * u.norm() * w.norm() && u.dot(&w) > 0.0
}

/// `pivot` followed by every point farther than `eps_point` from it.
///
/// Copies of the pivot have no angle; dropping them lets a set with repeated
/// lowest points still be sorted and scanned.
pub fn collapse_pivot_copies(
    points: &[Vector2<f64>],
    pivot: Vector2<f64>,
    eps_point: f64,
) -> Vec<Vector2<f64>> {
    let mut out = Vec::with_capacity(points.len());
    out.push(pivot);
    out.extend(
        points
            .iter()
            .copied()
            .filter(|p| distance(pivot, *p) > eps_point),
    );
    out
}

fn gather(points: &[Vector2<f64>], keys: &[SortKey], order: &[usize]) -> OrderedPoints {
    OrderedPoints {
        points: order.iter().map(|&i| points[i]).collect(),
        keys: order.iter().map(|&i| keys[i]).collect(),
    }
}
