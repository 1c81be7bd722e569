use std::sync::OnceLock;

use serde::Deserialize;

fn default_port() -> u16 {
    8080
}

#[derive(Deserialize)]
pub struct Env {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default, deserialize_with = "folio_api_env::filter_empty")]
    pub sentry_dsn: Option<String>,
    #[serde(default, deserialize_with = "folio_api_env::filter_empty")]
    pub resume_model: Option<String>,

    #[serde(flatten)]
    pub openrouter: folio_api_env::OpenRouterEnv,
}

static ENV: OnceLock<Env> = OnceLock::new();

pub fn env() -> &'static Env {
    ENV.get_or_init(|| {
        let _ = dotenvy::dotenv();
        envy::from_env().expect("Failed to load environment")
    })
}
