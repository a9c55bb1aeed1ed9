use serde::{Deserialize, Serialize};

/// Body of `POST /logs/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogPayload {
    pub customer: String,
    /// Digits of the customer ID only, e.g. `4821`.
    pub cordoba_id: String,
    pub result: String,
    pub affiliate: String,
    pub info_until: String,
    pub client_language: String,
    pub comments: Option<String>,
    pub transfer_status: Option<String>,
}

/// A stored log as echoed back by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub id: i64,
    pub agent: String,
    pub created_at: String,
    #[serde(flatten)]
    pub entry: LogPayload,
}
