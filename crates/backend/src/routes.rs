//! HTTP routes and error mapping
//!
//! Handlers hold no state beyond a shared read-only completion backend, so
//! every request is independent. Failures from the backend become a uniform
//! `{"detail": ...}` envelope with status 500; malformed request bodies are
//! rejected with a client error before the backend is ever called.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request, State},
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, warn};

use common::{
    AnswerRequest, AnswerResponse, ChatbotError, Completion, SummarizeRequest, SummarizeResponse,
};

use crate::prompt;

// Generation parameters, fixed per operation
const SUMMARIZE_TEMPERATURE: f32 = 0.5;
const SUMMARIZE_MAX_TOKENS: u32 = 150;
const ANSWER_TEMPERATURE: f32 = 0.7;
const ANSWER_MAX_TOKENS: u32 = 300;

/// Shared read-only state, established once at startup
#[derive(Clone)]
pub struct AppState {
    completion: Arc<dyn Completion>,
}

/// Build the application router
pub fn router(completion: Arc<dyn Completion>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/summarize", post(summarize))
        .route("/answer", post(answer))
        .with_state(AppState { completion })
}

/// Build the CORS layer: one allowed origin, POST and OPTIONS only,
/// all headers
pub fn cors_layer(origin: &str) -> Result<CorsLayer, axum::http::header::InvalidHeaderValue> {
    let origin: HeaderValue = origin.parse()?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(Any))
}

async fn health() -> &'static str {
    "ok"
}

/// Generate a concise summary from a list of messages
async fn summarize(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let messages = prompt::summarize_messages(&req.messages);
    let summary = state
        .completion
        .complete(messages, SUMMARIZE_TEMPERATURE, SUMMARIZE_MAX_TOKENS)
        .await?;

    Ok(Json(SummarizeResponse { summary }))
}

/// Answer a question using the entire chat history as context
async fn answer(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AnswerRequest>,
) -> Result<Json<AnswerResponse>, ApiError> {
    let messages = prompt::answer_messages(&req.history, &req.question);
    let answer = state
        .completion
        .complete(messages, ANSWER_TEMPERATURE, ANSWER_MAX_TOKENS)
        .await?;

    Ok(Json(AnswerResponse { answer }))
}

/// Uniform error envelope body
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

/// Wrapper giving `ChatbotError` an HTTP response mapping
#[derive(Debug)]
pub struct ApiError(pub ChatbotError);

impl From<ChatbotError> for ApiError {
    fn from(err: ChatbotError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ChatbotError::Validation(_) => {
                warn!("Rejected request: {}", self.0);
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ChatbotError::Upstream(_) => {
                error!("Completion call failed: {}", self.0);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorBody {
                detail: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// JSON extractor whose rejection is a `ChatbotError::Validation`, so shape
/// errors reach the caller in the same envelope as every other error
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(ApiError(ChatbotError::Validation(rejection.body_text()))),
        }
    }
}
