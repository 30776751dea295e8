// POST /api/predict — score a single piece of text.
//
// Body: {"content": "..."}
// Returns {"offensiveness": 0-100, "message": "..."} on success.
// Returns 400 if the body isn't JSON, has no string `content`, or the
// content is blank. Returns 500 if the analyzer fails.
//
// The body is taken as raw bytes rather than through the Json extractor so
// that every malformed payload gets the same 400 response shape. A body over
// the upload limit keeps axum's status (413) but still gets a JSON error.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::scoring::offensiveness::score_text;
use crate::web::{api_error, AppState};

pub const NO_INPUT: &str = "No input provided.";

/// POST /api/predict — return the offensiveness verdict for `content`.
pub async fn predict(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Failed to read request body");
            return api_error(rejection.status(), &rejection.body_text());
        }
    };

    let Some(content) = extract_content(&body) else {
        return api_error(StatusCode::BAD_REQUEST, NO_INPUT);
    };

    match score_text(state.analyzer.as_ref(), &content).await {
        Ok(verdict) => Json(verdict).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to score text");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, &format!("{e:#}"))
        }
    }
}

/// Pull a usable `content` string out of a JSON body.
fn extract_content(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    let content = value.get("content")?.as_str()?;
    if content.trim().is_empty() {
        return None;
    }
    Some(content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_string_content() {
        assert_eq!(
            extract_content(br#"{"content": "hello"}"#),
            Some("hello".to_string())
        );
    }

    #[test]
    fn keeps_surrounding_whitespace() {
        assert_eq!(
            extract_content(br#"{"content": "  hi  "}"#),
            Some("  hi  ".to_string())
        );
    }

    #[test]
    fn rejects_unusable_bodies() {
        let bodies: [&[u8]; 10] = [
            b"",
            b"not json",
            b"[]",
            b"\"content\"",
            br#"{}"#,
            br#"{"text": "hello"}"#,
            br#"{"content": null}"#,
            br#"{"content": 42}"#,
            br#"{"content": ""}"#,
            br#"{"content": "   \n"}"#,
        ];
        for body in bodies {
            assert_eq!(
                extract_content(body),
                None,
                "{}",
                String::from_utf8_lossy(body)
            );
        }
    }
}
