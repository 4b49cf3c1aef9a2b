use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hull2d::api::{
    collapse_pivot_copies, compute_convex_hull_with, find_pivot, keys_by_distance, keys_by_x,
    random_point_set, sort_by_angle, sort_by_keys, write_points, Bounds2, DegeneracyMode,
    DescDetail, GeomCfg, HullMethod, OrderedPoints, PointSetCfg, ReplayToken,
};
use nalgebra::Vector2;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod csv_io;
mod provenance;

use provenance::Sidecar;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hulls of planar point sets (Graham scan)")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the convex hull of a CSV point set and write it as CSV
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value = "graham")]
        method: String,
        /// Keep collinear points on hull edges
        #[arg(long)]
        keep_collinear: bool,
        /// Override all geometric tolerances
        #[arg(long)]
        eps: Option<f64>,
        /// Input has no header row; every line is `x,y`
        #[arg(long)]
        no_header: bool,
    },
    /// Sort a CSV point set by angle, x-coordinate, or distance from the pivot
    Sort {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Sort key; `angle` drops copies of the pivot, which have no angle
        #[arg(long, value_enum, default_value_t = SortBy::Angle)]
        by: SortBy,
        #[arg(long)]
        no_header: bool,
    },
    /// Generate a reproducible random point set
    Generate {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 32)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = -100.0, allow_hyphen_values = true)]
        min: f64,
        #[arg(long, default_value_t = 100.0, allow_hyphen_values = true)]
        max: f64,
        /// Snap coordinates to integers
        #[arg(long)]
        integer: bool,
    },
    /// Print the points of a CSV file, optionally in sorted order with keys
    Describe {
        #[arg(long)]
        input: PathBuf,
        /// min | verbose | full
        #[arg(long, default_value = "min")]
        detail: String,
        /// Sort first; `angle` drops copies of the pivot, which have no angle
        #[arg(long, value_enum)]
        sorted: Option<SortBy>,
        #[arg(long)]
        no_header: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
enum SortBy {
    Angle,
    X,
    Distance,
}

#[derive(Debug, Serialize)]
struct HullParams {
    method: String,
    mode: &'static str,
    eps_turn: f64,
    eps_angle: f64,
    eps_point: f64,
    hull_vertices: usize,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            input,
            out,
            method,
            keep_collinear,
            eps,
            no_header,
        } => run_hull(&input, &out, &method, keep_collinear, eps, !no_header).map(|_| ()),
        Action::Sort {
            input,
            out,
            by,
            no_header,
        } => run_sort(&input, &out, by, !no_header),
        Action::Generate {
            out,
            count,
            seed,
            index,
            min,
            max,
            integer,
        } => run_generate(
            &out,
            PointSetCfg {
                count,
                bounds: Bounds2 { min, max },
                integer,
            },
            ReplayToken { seed, index },
        ),
        Action::Describe {
            input,
            detail,
            sorted,
            no_header,
        } => run_describe(&input, &detail, sorted, !no_header),
    }
}

fn geom_cfg(eps: Option<f64>) -> Result<GeomCfg> {
    let mut cfg = GeomCfg::default();
    if let Some(eps) = eps {
        if !eps.is_finite() || eps < 0.0 {
            bail!("--eps must be a finite, non-negative number (got {eps})");
        }
        cfg = GeomCfg {
            eps_turn: eps,
            eps_angle: eps,
            eps_point: eps,
        };
    }
    Ok(cfg)
}

fn run_hull(
    input: &Path,
    out: &Path,
    method: &str,
    keep_collinear: bool,
    eps: Option<f64>,
    has_header: bool,
) -> Result<Vec<Vector2<f64>>> {
    let method: HullMethod = method.parse()?;
    let mode = if keep_collinear {
        DegeneracyMode::Keep
    } else {
        DegeneracyMode::Reduce
    };
    let cfg = geom_cfg(eps)?;
    let points = csv_io::read_points(input, has_header)?;
    tracing::info!(
        input = %input.display(),
        points = points.len(),
        %method,
        ?mode,
        "hull"
    );
    let hull = compute_convex_hull_with(&points, method, mode, cfg)
        .with_context(|| format!("computing hull of {}", input.display()))?;
    tracing::info!(vertices = hull.len(), out = %out.display(), "hull_done");

    csv_io::write_points(out, hull.vertices())?;
    let params = HullParams {
        method: method.to_string(),
        mode: match mode {
            DegeneracyMode::Keep => "keep",
            DegeneracyMode::Reduce => "reduce",
        },
        eps_turn: cfg.eps_turn,
        eps_angle: cfg.eps_angle,
        eps_point: cfg.eps_point,
        hull_vertices: hull.len(),
    };
    Sidecar::new("hull", serde_json::to_value(&params)?)
        .with_input(input, points.len())?
        .write(out)?;
    Ok(hull.into_vertices())
}

fn sorted(points: &[Vector2<f64>], by: SortBy) -> Result<OrderedPoints> {
    let pivot = points[find_pivot(points)?];
    let ordered = match by {
        SortBy::Angle => {
            let distinct = collapse_pivot_copies(points, pivot, GeomCfg::default().eps_point);
            if distinct.len() < points.len() {
                tracing::info!(dropped = points.len() - distinct.len(), "pivot_copies");
            }
            sort_by_angle(&distinct, pivot)?
        }
        SortBy::X => sort_by_keys(points, &keys_by_x(points))?,
        SortBy::Distance => sort_by_keys(points, &keys_by_distance(points, pivot))?,
    };
    Ok(ordered)
}

fn run_sort(input: &Path, out: &Path, by: SortBy, has_header: bool) -> Result<()> {
    let points = csv_io::read_points(input, has_header)?;
    tracing::info!(input = %input.display(), points = points.len(), ?by, "sort");
    let ordered = sorted(&points, by)?;
    csv_io::write_points(out, &ordered.points)?;
    Sidecar::new(
        "sort",
        serde_json::json!({ "by": by, "output_points": ordered.len() }),
    )
    .with_input(input, points.len())?
    .write(out)?;
    Ok(())
}

fn run_generate(out: &Path, cfg: PointSetCfg, tok: ReplayToken) -> Result<()> {
    tracing::info!(
        count = cfg.count,
        seed = tok.seed,
        index = tok.index,
        integer = cfg.integer,
        "generate"
    );
    let set = random_point_set(cfg, tok)?;
    csv_io::write_points(out, set.as_slice())?;
    Sidecar::new(
        "generate",
        serde_json::json!({
            "count": cfg.count,
            "seed": tok.seed,
            "index": tok.index,
            "min": cfg.bounds.min,
            "max": cfg.bounds.max,
            "integer": cfg.integer
        }),
    )
    .write(out)?;
    Ok(())
}

fn run_describe(input: &Path, detail: &str, by: Option<SortBy>, has_header: bool) -> Result<()> {
    let detail: DescDetail = detail.parse()?;
    let points = csv_io::read_points(input, has_header)?;
    tracing::info!(input = %input.display(), points = points.len(), ?detail, "describe");
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    match by {
        Some(by) => {
            let ordered = sorted(&points, by)?;
            write_points(&mut lock, &ordered.points, Some(ordered.keys.as_slice()), detail)?;
        }
        None => write_points(&mut lock, &points, None, detail)?,
    }
    Ok(())
}
