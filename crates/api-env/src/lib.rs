use serde::{Deserialize, Deserializer};

/// Treats empty or whitespace-only env vars as unset.
pub fn filter_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn default_openrouter_base_url() -> String {
    "https://openrouter.ai/api/v1/chat/completions".to_string()
}

#[derive(Clone, Deserialize)]
pub struct OpenRouterEnv {
    #[serde(default, deserialize_with = "filter_empty")]
    pub openrouter_api_key: Option<String>,
    #[serde(default = "default_openrouter_base_url")]
    pub openrouter_base_url: String,
}
