//! Human-readable descriptions of points and float-tolerant comparisons.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use nalgebra::Vector2;

use crate::error::HullError;
use crate::geom2::SortKey;
use crate::hull::HullBoundary;

/// How much to print per point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DescDetail {
    /// Coordinates only.
    #[default]
    Min,
    /// Index and coordinates.
    Verbose,
    /// Index, coordinates, sort key and what it measures.
    Full,
}

impl FromStr for DescDetail {
    type Err = HullError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" => Ok(DescDetail::Min),
            "verbose" => Ok(DescDetail::Verbose),
            "full" => Ok(DescDetail::Full),
            other => Err(HullError::invalid(format!("unknown detail level {other:?}"))),
        }
    }
}

/// One-line description of point `index`.
pub fn describe_point(
    index: usize,
    p: Vector2<f64>,
    key: Option<&SortKey>,
    detail: DescDetail,
) -> String {
    match detail {
        DescDetail::Min => format!("({}, {})", p.x, p.y),
        DescDetail::Verbose => format!("#{index} ({}, {})", p.x, p.y),
        DescDetail::Full => match key {
            Some(k) => format!(
                "#{index} ({}, {}) key={} [{}]",
                p.x,
                p.y,
                k.value,
                k.desc.as_str()
            ),
            None => format!("#{index} ({}, {}) key=-", p.x, p.y),
        },
    }
}

/// Write one described point per line. `keys`, when given, must be parallel to `points`.
pub fn write_points<W: Write>(
    w: &mut W,
    points: &[Vector2<f64>],
    keys: Option<&[SortKey]>,
    detail: DescDetail,
) -> io::Result<()> {
    for (i, p) in points.iter().enumerate() {
        let key = keys.and_then(|k| k.get(i));
        writeln!(w, "{}", describe_point(i, *p, key, detail))?;
    }
    Ok(())
}

/// Coordinate-wise equality within `eps`.
#[inline]
pub fn points_approx_eq(a: Vector2<f64>, b: Vector2<f64>, eps: f64) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps
}

/// Same length and pairwise `points_approx_eq` in order.
pub fn point_sets_approx_eq(a: &[Vector2<f64>], b: &[Vector2<f64>], eps: f64) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b.iter())
            .all(|(p, q)| points_approx_eq(*p, *q, eps))
}

impl fmt::Display for HullBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hull[{}]:", self.len())?;
        for p in self.iter() {
            write!(f, " ({}, {})", p.x, p.y)?;
        }
        Ok(())
    }
}
