//! Planar convex hulls via Graham scan, with explicit handling of collinear
//! (degenerate) boundary points.
//!
//! Pipeline: pivot selection → angular sort around the pivot → monotonic stack
//! scan → optional degeneracy reduction. Each stage is usable on its own.
//!
//! API Policy
//! - Points are plain `Vector2<f64>` values; sort keys live in parallel arrays
//!   (`SortKey`), never on the points themselves.
//! - Every operation returns a new, independently owned sequence. Inputs are
//!   only borrowed.
//! - Tolerances are centralized in `GeomCfg`; functions without an `_eps`/`_with`
//!   suffix use `GeomCfg::default()`.

pub mod api;
pub mod diagnostics;
pub mod error;
pub mod geom2;
pub mod hull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{HullError, Result};
pub use geom2::GeomCfg;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{HullError, Result};
    pub use crate::geom2::rand::{random_point_set, Bounds2, PointSetCfg, ReplayToken};
    pub use crate::geom2::{
        angle_from_pivot, distance, find_pivot, orientation, sort_by_angle, GeomCfg, KeyDesc,
        OrderedPoints, PointSet, SortKey, Turn,
    };
    pub use crate::hull::{
        build_hull, compute_convex_hull, reduce_degeneracies, DegeneracyMode, HullBoundary,
        HullMethod,
    };
    pub use nalgebra::Vector2 as Vec2;
}
