//! Flat re-export surface for callers (CLI, benches, experiments).
//!
//! Names follow the procedural interface of the hull core: predicates,
//! sorting, stack scan, reduction and the orchestrating entry point.

// Predicates
pub use crate::geom2::{
    angle_from_pivot, distance, find_pivot, orientation, orientation_eps, GeomCfg, Turn,
};
// Sorting
pub use crate::geom2::{
    collapse_pivot_copies, keys_by_distance, keys_by_x, merge_sort_by, sort_by_angle,
    sort_by_angle_with, sort_by_keys, KeyDesc, OrderedPoints, PointSet, SortKey,
};
// Random point sets
pub use crate::geom2::rand::{random_point_set, Bounds2, PointSetCfg, ReplayToken};
// Hull
pub use crate::hull::{
    build_hull, build_hull_with, compute_convex_hull, compute_convex_hull_with,
    reduce_degeneracies, reduce_degeneracies_with, DegeneracyMode, HullBoundary, HullMethod,
};
// Diagnostics
pub use crate::diagnostics::{
    describe_point, point_sets_approx_eq, points_approx_eq, write_points, DescDetail,
};
pub use crate::error::{HullError, Result};
