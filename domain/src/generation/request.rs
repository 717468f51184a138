//! Request body for the `generateContent` endpoint

use crate::core::prompt::Prompt;
use serde::{Deserialize, Serialize};

/// `{ "contents": [{ "role": "user", "parts": [{ "text": ... }] }] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl GenerateRequest {
    /// Single-turn request carrying the prompt as one user part.
    pub fn user_prompt(prompt: &Prompt) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.content().to_string(),
                }],
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shape() {
        let prompt = Prompt::new("Plan a Rust career").unwrap();
        let value = serde_json::to_value(GenerateRequest::user_prompt(&prompt)).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [
                    { "role": "user", "parts": [{ "text": "Plan a Rust career" }] }
                ]
            })
        );
    }
}
