use std::collections::BTreeMap;

use utoipa::OpenApi;
use utoipa::openapi::path::PathItem;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Folio API",
        version = "1.0.0",
        description = "LLM-backed resume generation API"
    ),
    tags(
        (name = "resume", description = "Resume generation endpoints")
    )
)]
pub struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(with_path_prefix(folio_api_resume::openapi(), "/api/v1"));
    doc
}

pub fn write_openapi_json() -> std::io::Result<std::path::PathBuf> {
    let doc = openapi();
    let json = serde_json::to_string_pretty(&doc)
        .map_err(|e| std::io::Error::other(format!("serialize openapi: {e}")))?;

    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("openapi.gen.json");
    std::fs::write(&path, json)?;
    Ok(path)
}

fn with_path_prefix(mut doc: utoipa::openapi::OpenApi, prefix: &str) -> utoipa::openapi::OpenApi {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return doc;
    }

    let paths = std::mem::take(&mut doc.paths.paths);

    let prefixed: BTreeMap<String, PathItem> = paths
        .into_iter()
        .map(|(path, item)| (format!("{prefix}{path}"), item))
        .collect();

    doc.paths.paths = prefixed;
    doc
}
