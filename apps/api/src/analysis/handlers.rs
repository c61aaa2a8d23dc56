//! Axum route handlers for the Resume Analysis API.

use std::path::Path as FsPath;

use anyhow::Context;
use axum::{
    extract::{multipart::MultipartError, Multipart, Path, Query, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::models::AnalysisReport;
use crate::analysis::store::AnalysisSummary;
use crate::analysis::upload::analyze_upload;
use crate::errors::AppError;
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub message: String,
    pub data: AnalysisReport,
    pub id: Uuid,
}

struct PdfUpload {
    filename: String,
    bytes: Bytes,
}

/// POST /api/v1/resumes/analyze
///
/// Accepts a multipart PDF upload, runs the resume pipeline and stores the
/// report. A degraded analysis still returns 200 with empty objects.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let upload = read_pdf_upload(&mut multipart, state.config.max_upload_bytes).await?;
    info!(
        "Analyzing {} ({} bytes) for user {}",
        upload.filename,
        upload.bytes.len(),
        params.user_id
    );

    let analysis = analyze_upload(&state.pipeline, &state.config.upload_dir, &upload.bytes);
    let report = match tokio::time::timeout(state.config.analysis_timeout, analysis).await {
        Ok(result) => result.context("Failed to stage uploaded resume")?,
        Err(_) => {
            warn!(
                "Resume analysis exceeded {:?}, returning empty report",
                state.config.analysis_timeout
            );
            AnalysisReport::default()
        }
    };

    if report.is_empty() {
        warn!("Analysis of {} degraded to an empty report", upload.filename);
    }

    let stored = state
        .store
        .insert(params.user_id, &upload.filename, &report)
        .await?;

    Ok(Json(AnalyzeResponse {
        message: "Resume analyzed successfully".to_string(),
        data: stored.report,
        id: stored.id,
    }))
}

/// GET /api/v1/resumes/history
///
/// Summaries of the user's past analyses, newest first.
pub async fn handle_history(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<AnalysisSummary>>, AppError> {
    let analyses = state.store.list_for_user(params.user_id).await?;
    Ok(Json(analyses.iter().map(|a| a.summary()).collect()))
}

/// GET /api/v1/resumes/analyses/:id
///
/// The stored report. Analyses owned by another user are reported as missing.
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<AnalysisReport>, AppError> {
    let stored = state
        .store
        .get(id)
        .await?
        .filter(|a| a.user_id == params.user_id)
        .ok_or_else(|| AppError::NotFound("Analysis not found".to_string()))?;

    Ok(Json(stored.report))
}

async fn read_pdf_upload(
    multipart: &mut Multipart,
    max_bytes: usize,
) -> Result<PdfUpload, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        // Only the final path component is kept; browsers may send full paths.
        let filename = field
            .file_name()
            .and_then(|name| FsPath::new(name).file_name())
            .and_then(|name| name.to_str())
            .map(String::from)
            .ok_or_else(|| AppError::Validation("Uploaded file has no filename".to_string()))?;

        if !filename.to_ascii_lowercase().ends_with(".pdf") {
            return Err(AppError::Validation(
                "Only PDF files are supported.".to_string(),
            ));
        }

        let bytes = field.bytes().await.map_err(multipart_error)?;
        if bytes.len() > max_bytes {
            return Err(AppError::Validation(format!(
                "File size exceeds maximum limit of {:.1}MB",
                max_bytes as f64 / (1024.0 * 1024.0)
            )));
        }

        return Ok(PdfUpload { filename, bytes });
    }

    Err(AppError::Validation(format!(
        "Missing '{UPLOAD_FIELD}' field in multipart body"
    )))
}

fn multipart_error(e: MultipartError) -> AppError {
    AppError::Validation(format!("Invalid upload: {}", e.body_text()))
}
