pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::calendar::handlers as calendar;
use crate::creditors::handlers as creditors;
use crate::notes::handlers as notes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Notes API
        .route("/api/v1/notes/options", get(notes::handle_options))
        .route("/api/v1/notes/parse", post(notes::handle_parse))
        .route("/api/v1/notes/compose", post(notes::handle_compose))
        .route("/api/v1/notes/submit", post(notes::handle_submit))
        .route("/api/v1/notes/history", get(notes::handle_history))
        .route("/api/v1/notes/third-party", post(notes::handle_third_party))
        // Workspace deadlines
        .route("/api/v1/workspace/dates", get(calendar::handle_workspace_dates))
        .route(
            "/api/v1/workspace/business-date",
            get(calendar::handle_business_date),
        )
        // Creditor search
        .route("/api/v1/creditors/sanitize", post(creditors::handle_sanitize))
        .route("/api/v1/creditors/batch", post(creditors::handle_batch))
        .route("/api/v1/creditors/search", get(creditors::handle_search))
        .route(
            "/api/v1/creditors/report-miss",
            post(creditors::handle_report_miss),
        )
        .with_state(state)
}
