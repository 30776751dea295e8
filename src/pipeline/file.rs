// Scoring a CSV file from disk, for `tonemeter score-file`.
//
// Same checks and output as POST /api/predict-file, minus the multipart
// layer: the path must end in ".csv" and the file must have a `text` column.

use std::path::Path;

use anyhow::{Context, Result};

use crate::pipeline::batch::{score_rows, BatchRow};
use crate::sentiment::traits::PolarityAnalyzer;
use crate::table::reader::read_column;
use crate::table::TEXT_COLUMN;

/// Read `path`, pull out its `text` column and score every row in order.
pub async fn score_csv_file(
    analyzer: &dyn PolarityAnalyzer,
    path: &Path,
    concurrency: usize,
) -> Result<Vec<BatchRow>> {
    // Case-sensitive, like the upload endpoint.
    if path.extension().and_then(|e| e.to_str()) != Some("csv") {
        anyhow::bail!("Only CSV files are allowed: {}", path.display());
    }

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let cells = tokio::task::spawn_blocking(move || read_column(&bytes, TEXT_COLUMN))
        .await
        .context("CSV parse task failed")?
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    score_rows(analyzer, cells, concurrency).await
}
