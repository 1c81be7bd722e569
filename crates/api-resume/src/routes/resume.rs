use std::collections::HashMap;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use folio_template_resume::{RESUME_PROMPT, load, render};

use crate::error::{Result, ResumeError};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct GenerateRequest {
    /// Free-text description of the candidate. The wire name keeps the
    /// spelling existing clients already send.
    #[serde(default, rename = "userDiscription")]
    pub user_description: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct GenerateResponse {
    pub think: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Map<String, serde_json::Value>>,
}

#[utoipa::path(
    post,
    path = "/resume/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Parsed model output", body = GenerateResponse),
        (status = 502, description = "LLM provider error", body = crate::error::ErrorResponse),
        (status = 503, description = "LLM client not configured", body = crate::error::ErrorResponse),
    ),
    tag = "resume",
)]
pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>> {
    let template = load(RESUME_PROMPT)?;
    let description = payload.user_description.unwrap_or_default();
    let values = HashMap::from([("userDescription", description.as_str())]);
    let prompt = render(template, &values);

    let llm = state.llm.as_ref().ok_or(ResumeError::Unavailable)?;
    let reply = llm.complete(&state.config.model, &prompt).await?;

    let parsed = folio_llm_output::parse(reply.as_deref());
    Ok(Json(GenerateResponse {
        think: parsed.think,
        data: parsed.data,
    }))
}
