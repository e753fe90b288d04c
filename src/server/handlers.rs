use super::types::{AnswerRequest, AnswerResponse, ErrorResponse, StatusResponse};
use crate::{
    config::StartupMode,
    model::{ModelAvailability, QaInput},
};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};

pub const STATUS_MESSAGE: &str = "QA API is running. POST /chat with question & context.";
pub const MODEL_READY: &str = "Model loaded and ready.";
pub const MODEL_NOT_AVAILABLE: &str = "Model is NOT available. Responses are echo fallbacks.";

#[derive(Clone)]
pub struct AppState {
    pub mode: StartupMode,
    pub availability: Arc<ModelAvailability>,
}

impl AppState {
    pub fn new(mode: StartupMode, availability: ModelAvailability) -> Self {
        Self {
            mode,
            availability: Arc::new(availability),
        }
    }
}

pub fn fallback_answer(question: &str) -> String {
    format!(
        "Model is not available. Echoing your question instead: '{}'",
        question
    )
}

pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let model_status = match state.mode {
        StartupMode::Strict => None,
        StartupMode::Resilient if state.availability.is_available() => {
            Some(MODEL_READY.to_string())
        }
        StartupMode::Resilient => Some(MODEL_NOT_AVAILABLE.to_string()),
    };

    Json(StatusResponse {
        message: STATUS_MESSAGE.to_string(),
        model_status,
    })
}

pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>, (StatusCode, Json<ErrorResponse>)> {
    let model = match state.availability.as_ref() {
        ModelAvailability::Available(model) => model,
        ModelAvailability::Unavailable { reason } => {
            info!("Model unavailable ({}), echoing question back", reason);
            return Ok(Json(AnswerResponse {
                answer: fallback_answer(&request.question),
            }));
        }
    };

    info!(
        "Received chat request (question: {} chars, context: {} chars)",
        request.question.len(),
        request.context.len()
    );

    match model
        .answer(QaInput::new(request.question, request.context))
        .await
    {
        Ok(output) => Ok(Json(AnswerResponse {
            answer: output.answer.unwrap_or_default(),
        })),
        Err(e) => {
            error!("Inference failed: {}", e);
            // Raw cause is returned to the caller as well as logged.
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: format!("Model error: {}", e.cause()),
                }),
            ))
        }
    }
}
