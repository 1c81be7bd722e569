use folio_api_env::OpenRouterEnv;

pub const DEFAULT_MODEL: &str = "deepseek/deepseek-r1";

#[derive(Clone)]
pub struct ResumeConfig {
    pub openrouter: OpenRouterEnv,
    pub model: String,
}

impl ResumeConfig {
    pub fn new(openrouter: &OpenRouterEnv) -> Self {
        Self {
            openrouter: openrouter.clone(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}
