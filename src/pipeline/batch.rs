// Batch scoring — one verdict per CSV row.
//
// Rows are independent, so up to `concurrency` of them are scored at once.
// `buffered` (not `buffer_unordered`) keeps results in source order. The
// first analyzer error aborts the whole batch; callers never see a partial
// result.

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt, TryStreamExt};
use serde::Serialize;
use tracing::info;

use crate::scoring::offensiveness::{score_text, Classification, Verdict};
use crate::sentiment::traits::PolarityAnalyzer;
use crate::table::CellValue;

/// A scored row: the original cell value plus its verdict. Serializes as
/// `{"text": ..., "offensiveness": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRow {
    pub text: CellValue,
    #[serde(flatten)]
    pub verdict: Verdict,
}

/// Score every cell, returning rows in the same order as `cells`.
pub async fn score_rows(
    analyzer: &dyn PolarityAnalyzer,
    cells: Vec<CellValue>,
    concurrency: usize,
) -> Result<Vec<BatchRow>> {
    let total = cells.len();

    let rows: Vec<BatchRow> = stream::iter(cells.into_iter().enumerate())
        .map(|(i, cell)| async move {
            let verdict = score_text(analyzer, &cell.as_text())
                .await
                .with_context(|| format!("Failed to score row {}", i + 1))?;
            Ok::<_, anyhow::Error>(BatchRow {
                text: cell,
                verdict,
            })
        })
        .buffered(concurrency.max(1))
        .try_collect()
        .await?;

    let flagged = rows
        .iter()
        .filter(|r| r.verdict.classification() == Classification::LikelyOffensive)
        .count();
    info!(rows = total, flagged, "Scored batch");

    Ok(rows)
}
