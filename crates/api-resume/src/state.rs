use crate::config::ResumeConfig;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: ResumeConfig,
    /// Absent when no API key is configured; requests then fail `Unavailable`.
    pub(crate) llm: Option<folio_openrouter::Client>,
}

impl AppState {
    pub(crate) fn new(config: ResumeConfig) -> Self {
        let llm = config.openrouter.openrouter_api_key.as_ref().map(|key| {
            folio_openrouter::Client::new(key.clone())
                .with_base_url(config.openrouter.openrouter_base_url.clone())
        });

        Self { config, llm }
    }
}
