//! Best-effort parsing of LLM chat replies.
//!
//! Reasoning models interleave a `<think>...</think>` block with their final
//! answer, and the structured part of the answer arrives inside a ```json
//! fenced code block. Neither is contractually guaranteed, so extraction never
//! fails the caller: anything that cannot be confidently extracted comes back
//! as `None`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const THINK_OPEN: &str = "<think>";
const THINK_CLOSE: &str = "</think>";
const JSON_FENCE_OPEN: &str = "```json";
const FENCE: &str = "```";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResponse {
    pub think: Option<String>,
    pub data: Option<Map<String, Value>>,
}

/// Split a raw model reply into its reasoning block and embedded JSON object.
pub fn parse(response: Option<&str>) -> ParsedResponse {
    let Some(response) = response else {
        return ParsedResponse::default();
    };

    ParsedResponse {
        think: extract_think(response),
        data: extract_data(response),
    }
}

/// Trimmed content between the first `<think>` and the first `</think>`.
fn extract_think(response: &str) -> Option<String> {
    let open = response.find(THINK_OPEN)?;
    let close = response.find(THINK_CLOSE)?;
    let start = open + THINK_OPEN.len();
    if start > close {
        return None;
    }
    Some(response[start..close].trim().to_string())
}

/// JSON object between the first ```json fence and the last ``` fence.
fn extract_data(response: &str) -> Option<Map<String, Value>> {
    let open = response.find(JSON_FENCE_OPEN)?;
    let close = response.rfind(FENCE)?;
    if open >= close {
        return None;
    }

    let body = response.get(open + JSON_FENCE_OPEN.len()..close)?.trim();
    match serde_json::from_str::<Map<String, Value>>(body) {
        Ok(data) => Some(data),
        Err(err) => {
            tracing::warn!(error = %err, "model_output_json_invalid");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_response_yields_empty_result() {
        assert_eq!(parse(None), ParsedResponse::default());
    }

    #[test]
    fn plain_text_yields_empty_result() {
        let parsed = parse(Some("no markers here"));
        assert_eq!(parsed.think, None);
        assert_eq!(parsed.data, None);
    }

    #[test]
    fn think_and_json_are_both_extracted() {
        let parsed = parse(Some("<think>plan</think>```json\n{\"a\":1}\n```"));
        assert_eq!(parsed.think.as_deref(), Some("plan"));
        assert_eq!(parsed.data.unwrap()["a"], json!(1));
    }

    #[test]
    fn think_at_start_of_input_is_found() {
        // A marker at position 0 must not be confused with "not found".
        let parsed = parse(Some("<think>x</think>"));
        assert_eq!(parsed.think.as_deref(), Some("x"));
    }

    #[test]
    fn think_content_is_trimmed() {
        let parsed = parse(Some("prefix <think>\n  steps\n</think> suffix"));
        assert_eq!(parsed.think.as_deref(), Some("steps"));
    }

    #[test]
    fn empty_think_block_yields_empty_string() {
        let parsed = parse(Some("<think></think>"));
        assert_eq!(parsed.think.as_deref(), Some(""));
    }

    #[test]
    fn close_before_open_yields_no_think() {
        let parsed = parse(Some("</think>oops<think>"));
        assert_eq!(parsed.think, None);
    }

    #[test]
    fn unclosed_think_yields_none() {
        let parsed = parse(Some("<think>never closed"));
        assert_eq!(parsed.think, None);
    }

    #[test]
    fn malformed_json_degrades_to_none() {
        let parsed = parse(Some("```json\n{bad json\n```"));
        assert_eq!(parsed.data, None);
    }

    #[test]
    fn json_array_is_rejected() {
        // Only objects are accepted at the top level.
        let parsed = parse(Some("```json\n[1,2,3]\n```"));
        assert_eq!(parsed.data, None);
    }

    #[test]
    fn unclosed_fence_yields_none() {
        // The only ``` occurrence is the opening fence itself.
        let parsed = parse(Some("```json\n{\"a\":1}"));
        assert_eq!(parsed.data, None);
    }

    #[test]
    fn last_fence_wins() {
        let parsed = parse(Some(
            "```json\n{\"outer\": \"```inner``` fences are text\"}\n``` trailing ```",
        ));
        assert_eq!(parsed.data, None); // body up to the *last* fence is not valid JSON
    }

    #[test]
    fn json_after_prose_is_extracted() {
        let parsed = parse(Some(
            "Here is the resume:\n```json\n{\"summary\": \"ok\", \"skills\": []}\n```\nDone.",
        ));
        let data = parsed.data.unwrap();
        assert_eq!(data["summary"], json!("ok"));
        assert_eq!(data["skills"], json!([]));
    }

    #[test]
    fn parse_is_idempotent() {
        let input = Some("<think>plan</think>```json\n{\"a\":1}\n```");
        assert_eq!(parse(input), parse(input));
    }
}
