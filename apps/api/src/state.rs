use std::sync::Arc;

use crate::backend_client::Backend;
use crate::calendar::business_days::HolidayCalendar;
use crate::config::Config;
use crate::errors::AppError;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub holidays: Arc<HolidayCalendar>,
    /// Absent when no `BACKEND_URL` is configured.
    pub backend: Option<Arc<dyn Backend>>,
}

impl AppState {
    pub fn backend(&self) -> Result<&dyn Backend, AppError> {
        self.backend.as_deref().ok_or(AppError::BackendUnavailable)
    }
}
