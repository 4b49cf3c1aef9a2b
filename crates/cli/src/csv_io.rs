//! Point sets as two-column CSV (`x,y`), read and written through Polars.

use anyhow::{anyhow, bail, Context, Result};
use nalgebra::Vector2;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

/// Read points from the first two columns of a CSV file.
///
/// With `has_header = false` every line is a point (`x,y`). Cells are cast to
/// `f64`; empty or non-numeric cells are an error.
pub fn read_points(path: &Path, has_header: bool) -> Result<Vec<Vector2<f64>>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(has_header)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    if df.width() < 2 {
        bail!(
            "{}: expected two columns (x,y), found {}",
            path.display(),
            df.width()
        );
    }
    let cols = df.get_columns();
    let xs = cols[0].cast(&DataType::Float64)?;
    let ys = cols[1].cast(&DataType::Float64)?;
    let xs = xs.f64()?;
    let ys = ys.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Vector2::new(x, y)),
            _ => Err(anyhow!("{}: row {row} has a missing coordinate", path.display())),
        })
        .collect()
}

/// Write points as CSV with an `x,y` header, creating parent directories.
pub fn write_points(path: &Path, points: &[Vector2<f64>]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
