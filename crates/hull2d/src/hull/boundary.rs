//! Hull boundary: CCW vertex sequence starting at the pivot.

use nalgebra::Vector2;

use crate::geom2::{orientation_eps, GeomCfg, Turn};

/// Ordered vertices of a hull polygon (counter-clockwise, pivot first).
///
/// Owned and independent of the input set it was computed from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HullBoundary {
    pub vertices: Vec<Vector2<f64>>,
}

impl HullBoundary {
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vertices
    }
    #[inline]
    pub fn into_vertices(self) -> Vec<Vector2<f64>> {
        self.vertices
    }
    /// The pivot.
    #[inline]
    pub fn first(&self) -> Option<Vector2<f64>> {
        self.vertices.first().copied()
    }
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Vector2<f64>> {
        self.vertices.iter()
    }

    /// Cyclic triples `(v[i-1], v[i], v[i+1])`, wrap-around included.
    pub fn triples(&self) -> impl Iterator<Item = [Vector2<f64>; 3]> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| {
            [
                self.vertices[(i + n - 1) % n],
                self.vertices[i],
                self.vertices[(i + 1) % n],
            ]
        })
    }

    /// Boundary-inclusive membership: `p` is never right of a CCW edge.
    /// Boundaries with fewer than three vertices contain nothing.
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        (0..n).all(|i| {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            orientation_eps(a, b, p, eps) != Turn::Right
        })
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        self.contains_eps(p, GeomCfg::default().eps_turn)
    }

    /// Strictly convex and CCW: every cyclic triple is a left turn.
    pub fn is_convex_eps(&self, eps: f64) -> bool {
        self.vertices.len() >= 3
            && self
                .triples()
                .all(|[a, b, c]| orientation_eps(a, b, c, eps) == Turn::Left)
    }

    #[inline]
    pub fn is_convex(&self) -> bool {
        self.is_convex_eps(GeomCfg::default().eps_turn)
    }

    /// Shoelace area; positive for CCW order.
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        let twice: f64 = (0..n)
            .map(|i| {
                let p = self.vertices[i];
                let q = self.vertices[(i + 1) % n];
                p.x * q.y - q.x * p.y
            })
            .sum();
        0.5 * twice
    }
}

impl From<HullBoundary> for Vec<Vector2<f64>> {
    fn from(h: HullBoundary) -> Self {
        h.vertices
    }
}
