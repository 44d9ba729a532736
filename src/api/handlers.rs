//! HTTP request handlers

use super::twiml::MessagingResponse;
use super::types::{InboundSms, MissingSender, RawInboundSms};
use super::AppState;
use crate::engine::EngineError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};

const HEALTH_TEXT: &str = "✅ Kisan Mitra SMS Bot is running";
const INVALID_REQUEST: &str = "Invalid request";
const INTERNAL_ERROR: &str = "Internal server error";

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Uptime checks
        .route("/", get(health))
        // Gateway webhook
        .route("/sms", post(sms_webhook))
        .with_state(state)
}

// ============================================================
// Health
// ============================================================

async fn health() -> &'static str {
    HEALTH_TEXT
}

// ============================================================
// SMS Webhook
// ============================================================

async fn sms_webhook(
    State(state): State<AppState>,
    sms: InboundSms,
) -> Result<MessagingResponse, AppError> {
    let reply = state.engine.handle_message(&sms.sender, &sms.body).await?;
    Ok(MessagingResponse::new().message(reply))
}

/// Decode a gateway post, form-encoded or JSON, into a validated message
#[async_trait]
impl<S: Send + Sync> FromRequest<S> for InboundSms {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        let raw = if is_json {
            let Json(raw) = Json::<RawInboundSms>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            raw
        } else {
            let Form(raw) = Form::<RawInboundSms>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            raw
        };

        Ok(InboundSms::try_from(raw)?)
    }
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

impl From<MissingSender> for AppError {
    fn from(_: MissingSender) -> Self {
        AppError::BadRequest(INVALID_REQUEST.to_string())
    }
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::MissingSender => AppError::BadRequest(INVALID_REQUEST.to_string()),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Rejected webhook request");
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Webhook failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR.to_string())
            }
        };

        (status, message).into_response()
    }
}
