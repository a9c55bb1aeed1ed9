//! Axum route handlers for the Notes API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::log::LogRecord;
use crate::notes::composer::{compose_note, NoteDraft};
use crate::notes::crm_parser::{parse, ParsedProfile};
use crate::notes::options::{CallOutcome, InfoSource, ProgressStage, TransferFailReason};
use crate::notes::payload::build_log_payload;
use crate::notes::third_party::{compose_third_party, Attendee};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    #[serde(default)]
    pub raw_text: String,
}

#[derive(Debug, Deserialize)]
pub struct ComposeRequest {
    #[serde(default)]
    pub raw_text: String,
    #[serde(default)]
    pub draft: NoteDraft,
}

#[derive(Debug, Serialize)]
pub struct ComposeResponse {
    pub profile: ParsedProfile,
    pub note: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub note: String,
    pub log: LogRecord,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub logs: Vec<LogRecord>,
}

#[derive(Debug, Deserialize)]
pub struct ThirdPartyRequest {
    pub attendees: Vec<Attendee>,
}

#[derive(Debug, Serialize)]
pub struct ThirdPartyResponse {
    pub note: String,
}

/// Closed option sets, for populating the note form.
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub outcomes: Vec<&'static str>,
    pub info_sources: Vec<&'static str>,
    pub stages: Vec<&'static str>,
    pub transfer_fail_reasons: Vec<&'static str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/notes/options
pub async fn handle_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        outcomes: CallOutcome::ALL.iter().map(|o| o.label()).collect(),
        info_sources: InfoSource::ALL.iter().map(|o| o.label()).collect(),
        stages: ProgressStage::ALL.iter().map(|o| o.label()).collect(),
        transfer_fail_reasons: TransferFailReason::ALL.iter().map(|o| o.label()).collect(),
    })
}

/// POST /api/v1/notes/parse
pub async fn handle_parse(Json(request): Json<ParseRequest>) -> Json<ParsedProfile> {
    Json(parse(&request.raw_text))
}

/// POST /api/v1/notes/compose
///
/// Re-run on every edit of the paste or the form; nothing is stored.
pub async fn handle_compose(Json(request): Json<ComposeRequest>) -> Json<ComposeResponse> {
    let profile = parse(&request.raw_text);
    let note = compose_note(&profile, &request.draft);
    Json(ComposeResponse { profile, note })
}

/// POST /api/v1/notes/submit
///
/// Composes the note and stores the matching log in the backend.
/// Rejected before any network call when the paste has no customer ID.
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(request): Json<ComposeRequest>,
) -> Result<Json<SubmitResponse>, AppError> {
    let profile = parse(&request.raw_text);
    let payload = build_log_payload(&profile, &request.draft)?;
    let backend = state.backend()?;

    let log = backend.submit_log(&payload).await?;
    info!(
        "Stored log {} for customer {} ({})",
        log.id, payload.cordoba_id, payload.result
    );

    Ok(Json(SubmitResponse {
        note: compose_note(&profile, &request.draft),
        log,
    }))
}

/// GET /api/v1/notes/history
///
/// The calling agent's recent logs, as stored by the backend.
pub async fn handle_history(
    State(state): State<AppState>,
) -> Result<Json<HistoryResponse>, AppError> {
    let logs = state.backend()?.my_logs().await?;
    Ok(Json(HistoryResponse { logs }))
}

/// POST /api/v1/notes/third-party
pub async fn handle_third_party(
    Json(request): Json<ThirdPartyRequest>,
) -> Result<Json<ThirdPartyResponse>, AppError> {
    let note = compose_third_party(&request.attendees)?;
    Ok(Json(ThirdPartyResponse { note }))
}
