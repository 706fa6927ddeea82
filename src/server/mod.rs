//! Minimal HTTP front for the checker: `GET /check?email=...`.
//!
//! Every request runs its own check (own session, own cookie store); only the
//! client's identity rotation is shared between concurrent requests.

use std::net::SocketAddr;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::availability::{AvailabilityResult, FailureKind};
use crate::ProbeClient;

/// JSON body returned by `/check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSummary {
    /// `exists`, `not exists`, or `error`.
    pub status: String,
    /// Identifier is free; absent on errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    /// Identifier is registered; absent on errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exists: Option<bool>,
    /// Alternates proposed by the service; absent on errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    /// Failure reason; only present on errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckSummary {
    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".into(),
            available: None,
            exists: None,
            suggestions: None,
            message: Some(message.into()),
        }
    }
}

/// HTTP status and body for a check result.
pub fn summarize(r: &AvailabilityResult) -> (StatusCode, CheckSummary) {
    match r {
        AvailabilityResult::Available => (
            StatusCode::OK,
            CheckSummary {
                status: "not exists".into(),
                available: Some(true),
                exists: Some(false),
                suggestions: Some(Vec::new()),
                message: None,
            },
        ),
        AvailabilityResult::Taken { suggestions } => (
            StatusCode::OK,
            CheckSummary {
                status: "exists".into(),
                available: Some(false),
                exists: Some(true),
                suggestions: Some(suggestions.clone()),
                message: None,
            },
        ),
        AvailabilityResult::Failed { kind, reason } => {
            let code = match kind {
                FailureKind::Upstream => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (code, CheckSummary::error(reason.clone()))
        }
    }
}

#[derive(Debug, Deserialize)]
struct CheckParams {
    email: Option<String>,
    identifier: Option<String>,
}

/// Router with `/check` and `/health`.
pub fn router(client: ProbeClient) -> Router {
    Router::new()
        .route("/check", get(check_handler))
        .route("/health", get(|| async { "ok" }))
        .with_state(client)
}

/// Bind `addr` and serve until the process exits.
///
/// # Errors
///
/// Returns the I/O error if binding or serving fails.
pub async fn serve(client: ProbeClient, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    #[cfg(feature = "tracing")]
    tracing::info!("Starting server at http://{}", addr);
    axum::serve(listener, router(client)).await
}

async fn check_handler(
    State(client): State<ProbeClient>,
    Query(params): Query<CheckParams>,
) -> impl IntoResponse {
    let identifier = params
        .email
        .or(params.identifier)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let Some(identifier) = identifier else {
        return (
            StatusCode::BAD_REQUEST,
            Json(CheckSummary::error("Email parameter is required")),
        );
    };

    let result = client.check(&identifier).await;
    let (code, summary) = summarize(&result);
    (code, Json(summary))
}
