//! Axum route handlers for workspace deadlines.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::business_days::{format_display_date, PaymentDates};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DatesQuery {
    /// Defaults to today in the workspace timezone.
    pub start: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct DatesResponse {
    pub start: String,
    pub payment_dates: PaymentDates,
}

#[derive(Debug, Deserialize)]
pub struct BusinessDateQuery {
    pub start: Option<NaiveDate>,
    pub days: i64,
}

#[derive(Debug, Serialize)]
pub struct BusinessDateResponse {
    pub date: String,
}

/// Largest business-day count accepted over HTTP.
const MAX_BUSINESS_DAYS: i64 = 366;

fn resolve_start(state: &AppState, start: Option<NaiveDate>) -> NaiveDate {
    start.unwrap_or_else(|| Utc::now().with_timezone(&state.config.timezone).date_naive())
}

fn out_of_range(start: NaiveDate) -> AppError {
    AppError::Validation(format!("start {start} is too close to the end of the calendar"))
}

/// GET /api/v1/workspace/dates
///
/// Standard (3 business days), California (5 business days) and maximum
/// submission (35 calendar days) deadlines.
pub async fn handle_workspace_dates(
    State(state): State<AppState>,
    Query(params): Query<DatesQuery>,
) -> Result<Json<DatesResponse>, AppError> {
    let start = resolve_start(&state, params.start);
    let payment_dates = state
        .holidays
        .workspace_dates(start)
        .ok_or_else(|| out_of_range(start))?;
    Ok(Json(DatesResponse {
        start: format_display_date(start),
        payment_dates,
    }))
}

/// GET /api/v1/workspace/business-date
pub async fn handle_business_date(
    State(state): State<AppState>,
    Query(params): Query<BusinessDateQuery>,
) -> Result<Json<BusinessDateResponse>, AppError> {
    // add_business_days has no upper bound of its own.
    if !(0..=MAX_BUSINESS_DAYS).contains(&params.days) {
        return Err(AppError::Validation(format!(
            "days must be between 0 and {MAX_BUSINESS_DAYS}"
        )));
    }
    let start = resolve_start(&state, params.start);
    let date = state
        .holidays
        .add_business_days(start, params.days)
        .ok_or_else(|| out_of_range(start))?;
    Ok(Json(BusinessDateResponse {
        date: format_display_date(date),
    }))
}
