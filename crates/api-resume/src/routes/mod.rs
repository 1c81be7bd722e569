pub(crate) mod resume;

use axum::{Router, routing::post};

use crate::config::ResumeConfig;
use crate::state::AppState;

pub use resume::{GenerateRequest, GenerateResponse};

pub fn router(config: ResumeConfig) -> Router {
    let state = AppState::new(config);

    Router::new()
        .nest(
            "/resume",
            Router::new().route("/generate", post(resume::generate)),
        )
        .with_state(state)
}
