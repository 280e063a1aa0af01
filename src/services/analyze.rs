// POST /analyze handler: multipart upload in, food expense total out.
use crate::analysis;
use crate::config::settings::ServiceSettings;
use crate::data::table::Table;
use crate::error::AnalyzeError;
use crate::models::AnalysisResult;
use axum::extract::{Multipart, State};
use axum::Json;
use std::sync::Arc;

/// Accepts a multipart form with a single `file` field, validates the
/// filename suffix, loads the table and returns the rounded food total
/// together with the configured identification fields.
pub async fn analyze(
    State(settings): State<Arc<ServiceSettings>>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AnalyzeError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        upload = Some((filename, bytes.to_vec()));
    }

    let (filename, bytes) = upload.ok_or(AnalyzeError::MissingFile)?;
    tracing::info!(
        filename = %filename,
        size_bytes = bytes.len(),
        "Received analyze request"
    );

    // Suffix check is case-sensitive: "data.CSV" is rejected.
    if !filename.ends_with(".csv") {
        return Err(AnalyzeError::NotCsv);
    }

    let table = Table::from_semicolon_bytes(&bytes)?;
    let answer = analysis::food_total(&table)?;
    tracing::info!(answer, rows = table.row_count(), "Computed food total");

    Ok(Json(AnalysisResult {
        answer,
        email: settings.email.clone(),
        exam: settings.exam.clone(),
    }))
}
