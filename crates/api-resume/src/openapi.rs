use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::routes::{GenerateRequest, GenerateResponse};

#[derive(OpenApi)]
#[openapi(
    paths(crate::routes::resume::generate),
    components(schemas(GenerateRequest, GenerateResponse, ErrorResponse)),
    tags(
        (name = "resume", description = "LLM-backed resume generation")
    )
)]
struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
