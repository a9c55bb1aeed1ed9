//! Backend Client — the single point of entry for calls to the workspace REST
//! backend (logs and creditor directory).
//!
//! Handlers depend on the [`Backend`] trait so tests can swap in a fake.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::creditor::{BatchSearchRequest, CreditorRecord, SearchMissReport};
use crate::models::log::{LogPayload, LogRecord};

const REQUEST_TIMEOUT_SECS: u64 = 30;
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Backend unavailable after {retries} retries")]
    RetriesExhausted { retries: u32 },
}

#[async_trait]
pub trait Backend: Send + Sync {
    async fn submit_log(&self, payload: &LogPayload) -> Result<LogRecord, BackendError>;

    /// The calling agent's most recent logs, newest first.
    async fn my_logs(&self) -> Result<Vec<LogRecord>, BackendError>;

    async fn batch_lookup(&self, items: &[String]) -> Result<Vec<CreditorRecord>, BackendError>;

    /// Substring search over creditor names and codes.
    async fn search_creditors(&self, query: &str) -> Result<Vec<CreditorRecord>, BackendError>;

    async fn report_miss(&self, report: &SearchMissReport) -> Result<(), BackendError>;
}

/// FastAPI-style error body: `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    detail: serde_json::Value,
}

/// Which failures a call may be re-sent after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RetryPolicy {
    /// Reads: any transport error, 429 or 5xx.
    Transient,
    /// Inserts: only failures the backend cannot have acted on, i.e. a refused
    /// connection or a 429. A 5xx or a timeout may follow a commit.
    Unsent,
}

impl RetryPolicy {
    fn retries_error(self, err: &reqwest::Error) -> bool {
        match self {
            RetryPolicy::Transient => true,
            RetryPolicy::Unsent => err.is_connect(),
        }
    }

    fn retries_status(self, status: StatusCode) -> bool {
        status == StatusCode::TOO_MANY_REQUESTS
            || (self == RetryPolicy::Transient && status.is_server_error())
    }
}

#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl BackendClient {
    pub fn new(base_url: String, token: Option<String>) -> Result<Self, BackendError> {
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        policy: RetryPolicy,
    ) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        self.execute(path, policy, || {
            self.authorized(self.client.post(&url)).json(body)
        })
        .await
    }

    async fn get_json<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, BackendError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        self.execute(path, RetryPolicy::Transient, || {
            self.authorized(self.client.get(&url)).query(query)
        })
        .await
    }

    /// Sends the request built by `build` and decodes the JSON response.
    /// Failures allowed by `policy` are retried with exponential backoff.
    async fn execute<T, F>(&self, path: &str, policy: RetryPolicy, build: F) -> Result<T, BackendError>
    where
        T: DeserializeOwned,
        F: Fn() -> RequestBuilder + Send + Sync,
    {
        let mut last_error: Option<BackendError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // 500ms, then 1s
                let delay = Duration::from_millis(500 * (1 << (attempt - 1)));
                warn!(
                    "Backend call to {} failed (attempt {}), retrying after {}ms...",
                    path,
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match build().send().await {
                Ok(r) => r,
                Err(e) if policy.retries_error(&e) => {
                    last_error = Some(BackendError::Http(e));
                    continue;
                }
                Err(e) => return Err(BackendError::Http(e)),
            };

            let status = response.status();

            if policy.retries_status(status) {
                let body = response.text().await.unwrap_or_default();
                last_error = Some(BackendError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            let text = response.text().await?;

            if !status.is_success() {
                let message = serde_json::from_str::<BackendErrorBody>(&text)
                    .map(|e| match e.detail {
                        serde_json::Value::String(s) => s,
                        other => other.to_string(),
                    })
                    .unwrap_or(text);
                return Err(BackendError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            debug!("Backend call to {} succeeded ({})", path, status);
            return Ok(serde_json::from_str(&text)?);
        }

        Err(last_error.unwrap_or(BackendError::RetriesExhausted {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl Backend for BackendClient {
    async fn submit_log(&self, payload: &LogPayload) -> Result<LogRecord, BackendError> {
        self.post_json("/logs/", payload, RetryPolicy::Unsent).await
    }

    async fn my_logs(&self) -> Result<Vec<LogRecord>, BackendError> {
        self.get_json("/logs/me", &[]).await
    }

    async fn batch_lookup(&self, items: &[String]) -> Result<Vec<CreditorRecord>, BackendError> {
        // Read-only despite the POST.
        self.post_json(
            "/creditors/batch",
            &BatchSearchRequest { items },
            RetryPolicy::Transient,
        )
        .await
    }

    async fn search_creditors(&self, query: &str) -> Result<Vec<CreditorRecord>, BackendError> {
        self.get_json("/creditors/", &[("q", query)]).await
    }

    async fn report_miss(&self, report: &SearchMissReport) -> Result<(), BackendError> {
        // The stored miss is echoed back; nothing in it is needed here.
        let _: serde_json::Value = self
            .post_json("/creditors/report-miss", report, RetryPolicy::Unsent)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use axum::{
        extract::Query,
        http::{HeaderMap, StatusCode},
        routing::{get, post},
        Json, Router,
    };
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    use super::*;

    /// Serves `router` on an ephemeral local port and points a client at it.
    async fn client_for(router: Router) -> BackendClient {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        BackendClient::new(format!("http://{addr}/"), Some("agent-token".to_string())).unwrap()
    }

    fn payload() -> LogPayload {
        LogPayload {
            customer: "John Smith".to_string(),
            cordoba_id: "4821".to_string(),
            result: "Completed".to_string(),
            affiliate: "Acme Corp".to_string(),
            info_until: "All info provided".to_string(),
            client_language: "Spanish".to_string(),
            comments: None,
            transfer_status: None,
        }
    }

    fn stored_log() -> Value {
        json!({
            "id": 9,
            "agent": "jdoe",
            "created_at": "2026-10-16T12:00:00",
            "customer": "John Smith",
            "cordoba_id": "4821",
            "result": "Completed",
            "affiliate": "Acme Corp",
            "info_until": "All info provided",
            "client_language": "Spanish",
            "comments": null,
            "transfer_status": null
        })
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = BackendClient::new("http://localhost:8000/".to_string(), None).unwrap();
        assert_eq!(client.url("/logs/"), "http://localhost:8000/logs/");
    }

    #[test]
    fn test_fastapi_error_detail_parses() {
        let body: BackendErrorBody =
            serde_json::from_str(r#"{"detail": "Could not validate credentials"}"#).unwrap();
        assert_eq!(body.detail, "Could not validate credentials");
    }

    #[test]
    fn test_writes_only_retry_rate_limits() {
        use reqwest::StatusCode as Status;

        assert!(RetryPolicy::Unsent.retries_status(Status::TOO_MANY_REQUESTS));
        assert!(!RetryPolicy::Unsent.retries_status(Status::INTERNAL_SERVER_ERROR));
        assert!(RetryPolicy::Transient.retries_status(Status::BAD_GATEWAY));
        assert!(!RetryPolicy::Transient.retries_status(Status::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_submit_log_is_not_resent_after_server_error() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let router = Router::new().route(
            "/logs/",
            post(move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    (StatusCode::INTERNAL_SERVER_ERROR, "db commit then crash")
                }
            }),
        );
        let client = client_for(router).await;

        let result = client.submit_log(&payload()).await;

        assert!(matches!(result, Err(BackendError::Api { status: 500, .. })));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_submit_log_retries_rate_limit_and_decodes_record() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let router = Router::new().route(
            "/logs/",
            post(move |Json(body): Json<Value>| {
                let counter = counter.clone();
                async move {
                    assert_eq!(body["cordoba_id"], "4821");
                    if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                        (StatusCode::TOO_MANY_REQUESTS, Json(json!({"detail": "slow down"})))
                    } else {
                        (StatusCode::OK, Json(stored_log()))
                    }
                }
            }),
        );
        let client = client_for(router).await;

        let record = client.submit_log(&payload()).await.unwrap();

        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert_eq!(record.id, 9);
        assert_eq!(record.agent, "jdoe");
        assert_eq!(record.entry, payload());
    }

    #[tokio::test]
    async fn test_batch_lookup_retries_server_errors() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let router = Router::new().route(
            "/creditors/batch",
            post(move || {
                let counter = counter.clone();
                async move {
                    if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                        (StatusCode::SERVICE_UNAVAILABLE, Json(json!({})))
                    } else {
                        (
                            StatusCode::OK,
                            Json(json!([{"id": 1, "name": "Citibank", "abreviation": "CITI"}])),
                        )
                    }
                }
            }),
        );
        let client = client_for(router).await;

        let found = client.batch_lookup(&["CITI".to_string()]).await.unwrap();

        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert_eq!(found[0].abreviation, "CITI");
    }

    #[tokio::test]
    async fn test_client_error_maps_fastapi_detail() {
        let router = Router::new().route(
            "/creditors/report-miss",
            post(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({"detail": "Could not validate credentials"})),
                )
            }),
        );
        let client = client_for(router).await;

        let report = SearchMissReport {
            abreviation: "ZELLE".to_string(),
            cordoba_id: "4821".to_string(),
        };
        match client.report_miss(&report).await {
            Err(BackendError::Api { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Could not validate credentials");
            }
            other => panic!("expected an API error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_search_creditors_sends_query_and_token() {
        let router = Router::new().route(
            "/creditors/",
            get(|headers: HeaderMap, Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(headers["authorization"], "Bearer agent-token");
                Json(json!([{"id": 2, "name": "Navy Federal", "abreviation": params["q"]}]))
            }),
        );
        let client = client_for(router).await;

        let found = client.search_creditors("NAVY FED").await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].abreviation, "NAVY FED");
    }

    #[tokio::test]
    async fn test_my_logs_decodes_list() {
        let router = Router::new().route("/logs/me", get(|| async { Json(json!([stored_log()])) }));
        let client = client_for(router).await;

        let logs = client.my_logs().await.unwrap();

        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].entry.customer, "John Smith");
    }
}
