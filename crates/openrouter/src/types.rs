use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatCompletionRequest {
    /// Single-turn request carrying one user message.
    pub fn user(model: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage {
                role: Role::User,
                content: content.into(),
            }],
            temperature: None,
            max_tokens: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<UsageInfo>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, when the provider returned one.
    pub fn content(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: AssistantMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct UsageInfo {
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub completion_tokens: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
}

pub(crate) fn parse_error(status: u16, bytes: &[u8]) -> Error {
    match serde_json::from_slice::<ApiErrorResponse>(bytes) {
        Ok(body) => Error::Api {
            status,
            message: body.error.message,
        },
        Err(_) => Error::Api {
            status,
            message: String::from_utf8_lossy(bytes).into_owned(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_openai_shape() {
        let request = ChatCompletionRequest::user("deepseek/deepseek-r1", "hello");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "deepseek/deepseek-r1");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "hello");
        assert!(value.get("temperature").is_none());
        assert!(value.get("max_tokens").is_none());
    }

    #[test]
    fn response_content_picks_first_choice() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{
                "id": "gen-123",
                "model": "deepseek/deepseek-r1",
                "choices": [
                    {"message": {"role": "assistant", "content": "first"}},
                    {"message": {"role": "assistant", "content": "second"}}
                ],
                "usage": {"prompt_tokens": 10, "completion_tokens": 20}
            }"#,
        )
        .unwrap();
        assert_eq!(response.content(), Some("first"));
        assert_eq!(response.usage.unwrap().completion_tokens, 20);
    }

    #[test]
    fn response_without_choices_has_no_content() {
        let response: ChatCompletionResponse =
            serde_json::from_str(r#"{"id": "gen-123"}"#).unwrap();
        assert_eq!(response.content(), None);
    }

    #[test]
    fn error_body_is_decoded() {
        let err = parse_error(
            401,
            br#"{"error": {"code": 401, "message": "No auth credentials found"}}"#,
        );
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "No auth credentials found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn opaque_error_body_falls_back_to_raw_text() {
        let err = parse_error(502, b"upstream exploded");
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream exploded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
