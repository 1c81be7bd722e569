use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResumeError>;

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("prompt template not found: {0}")]
    TemplateNotFound(String),

    #[error("LLM client is not initialized")]
    Unavailable,

    #[error("OpenRouter API error: {0}")]
    Upstream(String),
}

impl From<folio_template_resume::TemplateError> for ResumeError {
    fn from(err: folio_template_resume::TemplateError) -> Self {
        match err {
            folio_template_resume::TemplateError::NotFound(name) => Self::TemplateNotFound(name),
        }
    }
}

impl From<folio_openrouter::Error> for ResumeError {
    fn from(err: folio_openrouter::Error) -> Self {
        Self::Upstream(err.to_string())
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ResumeError {
    pub(crate) fn status(&self) -> StatusCode {
        match self {
            Self::TemplateNotFound(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            Self::TemplateNotFound(_) => "Internal server error",
            Self::Unavailable => "LLM service unavailable",
            Self::Upstream(_) => "LLM provider error",
        }
    }
}

impl IntoResponse for ResumeError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        tracing::error!(error = %message, "resume_generate_failed");
        sentry::capture_message(&message, sentry::Level::Error);

        (
            self.status(),
            Json(ErrorResponse {
                error: self.public_message().to_string(),
            }),
        )
            .into_response()
    }
}
