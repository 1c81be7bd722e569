//! Bundled prompt templates for the resume generation service.
//!
//! Templates are compiled into the binary and addressed by file name. Rendering
//! is literal `{{key}}` substitution: placeholders without a matching value are
//! left untouched, and values are inserted verbatim with no escaping.

use std::collections::HashMap;

use thiserror::Error;

/// Name of the resume generation prompt.
pub const RESUME_PROMPT: &str = "resume_prompt.txt";

const RESUME_PROMPT_TEXT: &str = include_str!("../assets/resume_prompt.txt");

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("prompt template not found: {0}")]
    NotFound(String),
}

/// Look up a bundled template by name.
pub fn load(name: &str) -> Result<&'static str, TemplateError> {
    match name {
        RESUME_PROMPT => Ok(RESUME_PROMPT_TEXT),
        _ => Err(TemplateError::NotFound(name.to_string())),
    }
}

/// Replace every `{{key}}` occurrence with the mapped value.
pub fn render(template: &str, values: &HashMap<&str, &str>) -> String {
    let mut rendered = template.to_string();
    for (key, value) in values {
        rendered = rendered.replace(&format!("{{{{{key}}}}}"), value);
    }
    rendered
}
