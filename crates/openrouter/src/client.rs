use crate::error::Error;
use crate::types::{ChatCompletionRequest, ChatCompletionResponse, parse_error};

pub const OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Chat-completion client. Built once at startup and shared by reference.
#[derive(Clone)]
pub struct Client {
    api_key: String,
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: OPENROUTER_URL.to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, Error> {
        let response = self
            .http
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(parse_error(status.as_u16(), &bytes));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Send a single-turn prompt and return the reply content, if any.
    pub async fn complete(&self, model: &str, prompt: &str) -> Result<Option<String>, Error> {
        let request = ChatCompletionRequest::user(model, prompt);
        let response = self.chat_completion(&request).await?;
        Ok(response.content().map(str::to_string))
    }
}
