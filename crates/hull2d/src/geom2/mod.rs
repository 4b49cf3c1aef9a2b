//! Planar geometry for the hull pipeline.
//!
//! Purpose
//! - Orientation, distance and angle-from-pivot predicates, all in floating
//!   point with explicit tolerances (`GeomCfg`).
//! - Sorting: a stable merge sort plus the angular ordering around a pivot,
//!   with keys held in a parallel array rather than on the points.
//! - Point sets: a thin owned wrapper and a reproducible random generator.
//!
//! Code cross-refs: `hull::{build_hull, reduce_degeneracies, compute_convex_hull}`

mod predicates;
pub mod rand;
mod sort;
mod types;

pub use predicates::{angle_from_pivot, distance, find_pivot, orientation, orientation_eps};
pub use sort::{
    collapse_pivot_copies, keys_by_distance, keys_by_x, merge_sort_by, sort_by_angle,
    sort_by_angle_with, sort_by_keys,
};
pub use types::{GeomCfg, KeyDesc, OrderedPoints, PointSet, SortKey, Turn};

pub(crate) use predicates::check_finite;
