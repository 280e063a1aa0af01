use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("Missing file field")]
    MissingFile,

    #[error("File must be a CSV")]
    NotCsv,

    #[error("CSV must contain 'amount' and 'category' columns")]
    MissingColumns,

    #[error("invalid UTF-8 in uploaded file: {source}")]
    Decode {
        #[from]
        source: std::str::Utf8Error,
    },

    #[error("malformed CSV: {source}")]
    Parse {
        #[from]
        source: csv::Error,
    },

    #[error("could not read multipart form: {source}")]
    Multipart {
        #[from]
        source: axum::extract::multipart::MultipartError,
    },
}

// Single classification step from failure kind to HTTP status + detail body.
// Validation failures are the client's fault (400); decode/parse failures
// surface as 500 with the underlying error text, matching the fixed
// "Error processing CSV" template the API documents.
impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        tracing::error!("Mapping AnalyzeError to HTTP response: {:?}", self);
        let (status, detail) = match &self {
            AnalyzeError::MissingFile
            | AnalyzeError::NotCsv
            | AnalyzeError::MissingColumns => (StatusCode::BAD_REQUEST, self.to_string()),
            AnalyzeError::Multipart { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            AnalyzeError::Decode { source } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error processing CSV: {}", source),
            ),
            AnalyzeError::Parse { source } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error processing CSV: {}", source),
            ),
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
