//! Axum route handlers for the creditor batch search.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::creditors::sanitizer::{sanitize, sanitize_batch, unknown_codes};
use crate::errors::AppError;
use crate::models::creditor::{CreditorRecord, SearchMissReport};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    #[serde(default)]
    pub raw_text: String,
}

#[derive(Debug, Serialize)]
pub struct SanitizeResponse {
    pub codes: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub found: Vec<CreditorRecord>,
    pub unknown: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct ReportMissRequest {
    pub cordoba_id: String,
    pub codes: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ReportMissResponse {
    pub reported: usize,
}

/// POST /api/v1/creditors/sanitize
pub async fn handle_sanitize(Json(request): Json<BatchRequest>) -> Json<SanitizeResponse> {
    Json(SanitizeResponse {
        codes: sanitize_batch(&request.raw_text),
    })
}

/// POST /api/v1/creditors/batch
///
/// Sanitizes the paste, resolves the codes against the directory and splits
/// them into found records and unknown codes.
pub async fn handle_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, AppError> {
    let codes = sanitize_batch(&request.raw_text);
    if codes.is_empty() {
        return Ok(Json(BatchResponse {
            found: vec![],
            unknown: vec![],
        }));
    }

    let found = state.backend()?.batch_lookup(&codes).await?;
    let unknown = unknown_codes(&codes, found.iter().map(|c| c.abreviation.as_str()));

    info!(
        "Batch search: {} codes, {} found, {} unknown",
        codes.len(),
        found.len(),
        unknown.len()
    );

    Ok(Json(BatchResponse { found, unknown }))
}

/// GET /api/v1/creditors/search?q=
///
/// Single-entry search. The query is sanitized like a batch line, then the
/// directory's substring matches are split the same way as a batch.
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<BatchResponse>, AppError> {
    let code = sanitize(&params.q).ok_or_else(|| {
        AppError::Validation("q must contain a creditor name or code".to_string())
    })?;

    let found = state.backend()?.search_creditors(&code).await?;
    let unknown = unknown_codes(
        std::slice::from_ref(&code),
        found.iter().map(|c| c.abreviation.as_str()),
    );

    info!("Single search for {}: {} matches", code, found.len());

    Ok(Json(BatchResponse { found, unknown }))
}

/// POST /api/v1/creditors/report-miss
///
/// Flags each unknown code for the directory maintainers. Codes are
/// sanitized and deduplicated first; noise entries are dropped.
pub async fn handle_report_miss(
    State(state): State<AppState>,
    Json(request): Json<ReportMissRequest>,
) -> Result<Json<ReportMissResponse>, AppError> {
    let cordoba_id = request.cordoba_id.trim();
    if cordoba_id.is_empty() {
        return Err(AppError::Validation("cordoba_id is required".to_string()));
    }

    let sanitized: Vec<String> = request
        .codes
        .iter()
        .map(String::as_str)
        .filter_map(sanitize)
        .collect();
    let codes = unknown_codes(&sanitized, std::iter::empty());
    if codes.is_empty() {
        return Err(AppError::Validation(
            "codes must contain at least one creditor code".to_string(),
        ));
    }
    let backend = state.backend()?;

    for code in &codes {
        let report = SearchMissReport {
            abreviation: code.clone(),
            cordoba_id: cordoba_id.to_string(),
        };
        if let Err(e) = backend.report_miss(&report).await {
            warn!("Reporting miss for {} failed: {}", code, e);
            return Err(e.into());
        }
    }

    Ok(Json(ReportMissResponse {
        reported: codes.len(),
    }))
}
