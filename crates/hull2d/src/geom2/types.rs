//! Basic 2D types and tolerances used across the hull pipeline.
//!
//! - `GeomCfg`: centralizes epsilons for turn, angle-tie, and coincidence checks.
//! - `Turn`: rotational sense of three ordered points.
//! - `PointSet`: owned, index-addressable point collection.
//! - `SortKey`, `OrderedPoints`: scratch keys kept beside (not inside) points.

use nalgebra::Vector2;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Turns whose angle has `|sin| <= eps_turn` classify as collinear.
    pub eps_turn: f64,
    /// Rays from the pivot within `eps_angle` (as a sine) of each other are
    /// ties in the angular sort.
    pub eps_angle: f64,
    /// Points closer than `eps_point` are treated as coincident.
    pub eps_point: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_turn: 1e-9,
            eps_angle: 1e-9,
            eps_point: 1e-9,
        }
    }
}

/// Turn made at `b` when walking `a → b → c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    Left,
    Right,
    Collinear,
}

/// Ordered, owned collection of points.
///
/// `Clone` is the copy operation callers use to give concurrent computations
/// independent sets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    pub points: Vec<Vector2<f64>>,
}

impl PointSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
    #[inline]
    pub fn with_capacity(n: usize) -> Self {
        Self {
            points: Vec::with_capacity(n),
        }
    }
    #[inline]
    pub fn push(&mut self, p: Vector2<f64>) {
        self.points.push(p);
    }
    #[inline]
    pub fn push_coords(&mut self, x: f64, y: f64) {
        self.points.push(Vector2::new(x, y));
    }
    #[inline]
    pub fn get(&self, index: usize) -> Option<Vector2<f64>> {
        self.points.get(index).copied()
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    #[inline]
    pub fn as_slice(&self) -> &[Vector2<f64>] {
        &self.points
    }
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Vector2<f64>> {
        self.points.iter()
    }
}

impl From<Vec<Vector2<f64>>> for PointSet {
    fn from(points: Vec<Vector2<f64>>) -> Self {
        Self { points }
    }
}

impl FromIterator<Vector2<f64>> for PointSet {
    fn from_iter<I: IntoIterator<Item = Vector2<f64>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(f64, f64)> for PointSet {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(x, y)| Vector2::new(x, y))
            .collect()
    }
}

impl AsRef<[Vector2<f64>]> for PointSet {
    fn as_ref(&self) -> &[Vector2<f64>] {
        &self.points
    }
}

/// What a `SortKey` value measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyDesc {
    /// Sentinel for the pivot itself; sorts before every angle.
    Pivot,
    AngleFromPivot,
    XCoord,
    DistanceFromPivot,
}

impl KeyDesc {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyDesc::Pivot => "lowest point",
            KeyDesc::AngleFromPivot => "angle with lowest point",
            KeyDesc::XCoord => "x-coord",
            KeyDesc::DistanceFromPivot => "distance to lowest point",
        }
    }
}

/// Transient sort key for one point, kept in a parallel array.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SortKey {
    pub value: f64,
    pub desc: KeyDesc,
}

impl SortKey {
    /// Key value of the pivot; angles live in `[0, π]`.
    pub const PIVOT_SENTINEL: f64 = -1.0;

    #[inline]
    pub fn pivot() -> Self {
        Self {
            value: Self::PIVOT_SENTINEL,
            desc: KeyDesc::Pivot,
        }
    }
}

/// Points in sorted order together with the keys they were sorted by.
///
/// Invariant: `points.len() == keys.len()`; `keys` are non-decreasing (up to
/// the angle tolerance for angular orders).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderedPoints {
    pub points: Vec<Vector2<f64>>,
    pub keys: Vec<SortKey>,
}

impl OrderedPoints {
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    /// First point of the order (the pivot for angular orders).
    #[inline]
    pub fn first(&self) -> Option<Vector2<f64>> {
        self.points.first().copied()
    }
    #[inline]
    pub fn into_points(self) -> Vec<Vector2<f64>> {
        self.points
    }
}
