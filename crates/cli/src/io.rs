//! CSV point-set I/O (columns `x`, `y`).

use anyhow::{bail, Context, Result};
use encircle::Vec2;
use polars::prelude::*;
use std::path::Path;

/// Read a point set from a CSV file with `x` and `y` columns.
pub fn read_points_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Vec2<f64>>> {
    let path = path.as_ref();
    let lf = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("scanning {}", path.display()))?;
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    let xs = df.column("x")?.as_materialized_series().f64()?;
    let ys = df.column("y")?.as_materialized_series().f64()?;
    let mut points = Vec::with_capacity(df.height());
    for (x, y) in xs.into_iter().zip(ys.into_iter()) {
        let (Some(x), Some(y)) = (x, y) else {
            bail!("null coordinate in {}", path.display());
        };
        points.push(Vec2::new(x, y));
    }
    Ok(points)
}

/// Write a point set as a CSV file with `x` and `y` columns.
pub fn write_points_csv<P: AsRef<Path>>(path: P, points: &[Vec2<f64>]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = DataFrame::new(vec![Column::new("x".into(), xs), Column::new("y".into(), ys)])?;
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
