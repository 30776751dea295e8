// POST /api/predict-file — score every row of an uploaded CSV.
//
// Expects a multipart form with a `file` part holding a CSV that has a
// `text` column. Checks run in a fixed order, each with its own 400:
//
//   1. a `file` part is present           → "No file uploaded."
//   2. its filename ends with ".csv"       → "Only CSV files are allowed."
//   3. the CSV has a `text` column         → "CSV must have a 'text' column."
//
// On success returns [{"text", "offensiveness", "message"}, ...] in row
// order. Malformed CSV content and analyzer failures return 500; there is
// never a partial result.

use axum::body::Bytes;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, info};

use crate::pipeline::batch::score_rows;
use crate::table::reader::read_column;
use crate::table::TEXT_COLUMN;
use crate::web::{api_error, AppState};

pub const FILE_FIELD: &str = "file";
pub const NO_FILE: &str = "No file uploaded.";
pub const ONLY_CSV: &str = "Only CSV files are allowed.";

struct Upload {
    file_name: String,
    bytes: Bytes,
}

/// POST /api/predict-file — score the `text` column of an uploaded CSV.
pub async fn predict_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    // A request that isn't multipart at all has no file part either.
    let Ok(mut multipart) = multipart else {
        return api_error(StatusCode::BAD_REQUEST, NO_FILE);
    };

    let upload = match read_file_part(&mut multipart).await {
        Ok(Some(upload)) => upload,
        Ok(None) => return api_error(StatusCode::BAD_REQUEST, NO_FILE),
        Err(e) => {
            error!(error = %e, "Failed to read multipart upload");
            return api_error(e.status(), &e.body_text());
        }
    };

    // Case-sensitive on purpose: "data.CSV" is rejected.
    if !upload.file_name.ends_with(".csv") {
        return api_error(StatusCode::BAD_REQUEST, ONLY_CSV);
    }

    info!(
        file = %upload.file_name,
        bytes = upload.bytes.len(),
        "Scoring uploaded CSV"
    );

    // CSV parsing is CPU-bound; keep it off the async worker threads.
    let bytes = upload.bytes;
    let parsed = tokio::task::spawn_blocking(move || read_column(&bytes, TEXT_COLUMN)).await;

    let cells = match parsed {
        Ok(Ok(cells)) => cells,
        Ok(Err(e)) if e.is_client_error() => {
            return api_error(StatusCode::BAD_REQUEST, &e.to_string());
        }
        Ok(Err(e)) => {
            error!(error = %e, file = %upload.file_name, "Failed to parse CSV");
            return api_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string());
        }
        Err(e) => {
            error!(error = %e, "CSV parse task failed");
            return api_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string());
        }
    };

    match score_rows(
        state.analyzer.as_ref(),
        cells,
        state.config.batch_concurrency,
    )
    .await
    {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => {
            error!(error = %e, file = %upload.file_name, "Failed to score CSV rows");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, &format!("{e:#}"))
        }
    }
}

/// Find the first `file` part that carries a filename. Form fields named
/// `file` without a filename are plain values, not uploads, and are skipped.
async fn read_file_part(multipart: &mut Multipart) -> Result<Option<Upload>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let bytes = field.bytes().await?;
        return Ok(Some(Upload { file_name, bytes }));
    }
    Ok(None)
}
