//! HTTP surface: `GET /api/present` and a health check.

use crate::acquisition::http_client::AttendanceSource;
use crate::acquisition::http_session::PortalSession;
use crate::attendance::report::assemble;
use crate::attendance::{fetch_report, RawAttendanceQuery};
use crate::audit::logger::AuditLogger;
use crate::config::ServerConfig;
use crate::error::{AttendanceError, InvalidParameter};
use anyhow::{Context, Result};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tracing::{debug, info, warn};

pub const PRESENT_ROUTE: &str = "/api/present";

/// Shared request context. The source is read-only; the audit logger is
/// the only mutable part and is written off the async worker threads.
pub struct AppState {
    source: Arc<dyn AttendanceSource>,
    audit: Option<Arc<Mutex<AuditLogger>>>,
}

impl AppState {
    pub fn new(source: Arc<dyn AttendanceSource>) -> Self {
        Self {
            source,
            audit: None,
        }
    }

    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(Arc::new(Mutex::new(logger)));
        self
    }

    /// Append one audit line. The file write runs on the blocking pool and
    /// completes before the response is sent.
    async fn record(&self, outcome: &'static str, status: StatusCode, started: Instant) {
        let Some(audit) = &self.audit else {
            return;
        };
        let audit = Arc::clone(audit);
        let duration_ms = started.elapsed().as_millis() as u64;

        let written = tokio::task::spawn_blocking(move || match audit.lock() {
            Ok(mut logger) => logger.log_request(PRESENT_ROUTE, outcome, status.as_u16(), duration_ms),
            Err(_) => Err(anyhow::anyhow!("audit logger mutex poisoned")),
        })
        .await;

        match written {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("failed to write audit event: {e}"),
            Err(e) => warn!("audit task failed: {e}"),
        }
    }
}

impl IntoResponse for AttendanceError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(assemble(&Err(self)))).into_response()
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(PRESENT_ROUTE, get(present))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig, source: Arc<dyn AttendanceSource>) -> Result<()> {
    let mut state = AppState::new(source);
    if let Some(path) = &config.audit_log {
        state = state.with_audit(AuditLogger::open(path)?);
        info!("auditing requests to {}", path.display());
    }

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!("listening on {}", config.bind);

    axum::serve(listener, router(Arc::new(state)))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("received shutdown signal");
        })
        .await
        .context("server error")
}

async fn present(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let started = Instant::now();

    let outcome = match (forwarded_session(&headers), query) {
        (None, _) => Err(AttendanceError::MissingCookie),
        (Some(_), Err(rejection)) => {
            debug!("unreadable query string: {rejection}");
            Err(InvalidParameter::Malformed("query").into())
        }
        (Some(session), Ok(Query(pairs))) => {
            let raw = RawAttendanceQuery::from_pairs(pairs);
            fetch_report(state.source.as_ref(), &session, &raw).await
        }
    };

    match outcome {
        Ok(report) => {
            state.record("ok", StatusCode::OK, started).await;
            (StatusCode::OK, Json(assemble(&Ok(report)))).into_response()
        }
        Err(e) => {
            state.record(e.kind(), e.status(), started).await;
            e.into_response()
        }
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// The caller's whole `Cookie` header is the portal session value.
fn forwarded_session(headers: &HeaderMap) -> Option<PortalSession> {
    let value = headers.get(header::COOKIE)?.to_str().ok()?;
    PortalSession::from_forwarded(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_forwarded_session_requires_cookie() {
        let mut headers = HeaderMap::new();
        assert!(forwarded_session(&headers).is_none());

        headers.insert(header::COOKIE, HeaderValue::from_static("  "));
        assert!(forwarded_session(&headers).is_none());

        headers.insert(header::COOKIE, HeaderValue::from_static("abc123"));
        let session = forwarded_session(&headers).unwrap();
        assert_eq!(session.cookie_header(), "RITSESSIONID=abc123");
    }

    #[test]
    fn test_error_response_status() {
        let resp = AttendanceError::SessionExpired.into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = AttendanceError::MissingCookie.into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
