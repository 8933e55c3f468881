// Axum API server module
//
// Two stateless POST endpoints (ICAO assessor, numeric scorer) plus /health.
// Every response carries Access-Control-Allow-Origin: *.

use axum::{
    body::Bytes,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::icao::{assess, AssessmentRequest, AssessmentResult};
use crate::scoring::{RiskScore, RiskScoreRequest};
use crate::RiskError;

pub const ALLOWED_METHODS: &str = "POST, OPTIONS";

// ============================================================================
// Router
// ============================================================================

pub fn create_router() -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // ICAO severity x likelihood assessment (automated or manual)
        .route(
            "/api/calculate-risk",
            post(calculate_risk)
                .options(preflight)
                .fallback(method_not_allowed),
        )

        // Numeric likelihood x severity / mitigation score
        .route(
            "/api/risk-score",
            post(score_risk)
                .options(preflight)
                .fallback(method_not_allowed),
        )

        // Middleware (applied in reverse order)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(TraceLayer::new_for_http()) // Request logging
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// CORS preflight: 204, no body
async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}

async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, ALLOWED_METHODS)],
        Json(serde_json::json!({ "error": "Method not allowed" })),
    )
}

// The body is parsed by hand so malformed JSON surfaces as a 500 with the
// parser's message instead of axum's 4xx rejection.
async fn calculate_risk(body: Bytes) -> Result<Json<AssessmentResult>, AppError> {
    let request: AssessmentRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let assessment = assess(&request)?;
    tracing::debug!(
        "Assessment {} ({:?}): {} / {} -> {}",
        assessment.id,
        assessment.mode,
        assessment.severity,
        assessment.likelihood,
        assessment.risk_level
    );

    Ok(Json(assessment))
}

async fn score_risk(body: Bytes) -> Result<Json<RiskScore>, AppError> {
    let request: RiskScoreRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let score = request.score()?;
    tracing::debug!("Risk score {} ({:?})", score.risk_score, score.risk_level);

    Ok(Json(score))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    Internal(String),
}

impl From<RiskError> for AppError {
    fn from(err: RiskError) -> Self {
        if err.is_validation() {
            AppError::BadRequest(err.to_string())
        } else {
            AppError::Internal(err.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => {
                tracing::warn!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::Internal(msg) => {
                tracing::error!("Function error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
