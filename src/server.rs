use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::State;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::models::{VerificationRequest, VerificationResult};
use crate::verifier::ReliabilityVerifier;

#[derive(Clone)]
struct AppState {
    verifier: Arc<ReliabilityVerifier>,
}

#[derive(Serialize)]
struct VerifyResponse {
    #[serde(flatten)]
    result: VerificationResult,
    report: String,
}

/// Boundary adapter for the chat-response-handling layer: the verifier
/// itself is synchronous and pure; only this hosting shell is async.
pub async fn run_server(config: AppConfig, verifier: ReliabilityVerifier) -> Result<()> {
    let state = AppState {
        verifier: Arc::new(verifier),
    };

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/verify", post(verify_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = config.bind_addr.parse()?;
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "خدمة التحقق من موثوقية ردود غسان"
    }))
}

async fn verify_handler(
    State(state): State<AppState>,
    Json(request): Json<VerificationRequest>,
) -> Json<VerifyResponse> {
    let mut result = state
        .verifier
        .verify(&request.response_text, &request.query_text);
    result.suggestions = state.verifier.suggest(&request.response_text, &result);
    let report = state.verifier.report(&result);

    Json(VerifyResponse { result, report })
}
