//! Text extraction from an untyped `generateContent` response
//!
//! The payload is only partially consumed, so it stays a
//! [`serde_json::Value`] and every lookup degrades to an empty string.
//! Emptiness is the "unusable" signal the cascade checks for.

use serde_json::Value;

/// Extract generated text from the first candidate.
///
/// - `candidates[0].content.parts` as an array: concatenate each part's
///   `text` in order, without separator (non-string parts count as `""`)
/// - `parts` as a single object: its `text`
/// - anything else: `""`
pub fn extract_text(payload: &Value) -> String {
    let Some(parts) = payload.pointer("/candidates/0/content/parts") else {
        return String::new();
    };

    match parts {
        Value::Array(items) => items
            .iter()
            .map(|part| part.get("text").and_then(Value::as_str).unwrap_or(""))
            .collect(),
        Value::Object(_) => parts
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn concatenates_parts_in_order() {
        let payload = json!({
            "candidates": [
                { "content": { "parts": [{ "text": "Hello, " }, { "text": "world" }] } }
            ]
        });
        assert_eq!(extract_text(&payload), "Hello, world");
    }

    #[test]
    fn no_candidates_is_empty() {
        assert_eq!(extract_text(&json!({})), "");
        assert_eq!(extract_text(&json!({ "candidates": [] })), "");
    }

    #[test]
    fn only_first_candidate_is_read() {
        let payload = json!({
            "candidates": [
                { "content": { "parts": [{ "text": "first" }] } },
                { "content": { "parts": [{ "text": "second" }] } }
            ]
        });
        assert_eq!(extract_text(&payload), "first");
    }

    #[test]
    fn non_text_parts_count_as_empty() {
        let payload = json!({
            "candidates": [
                { "content": { "parts": [
                    { "text": "a" },
                    { "inlineData": { "mimeType": "image/png" } },
                    { "text": 42 },
                    { "text": "b" }
                ] } }
            ]
        });
        assert_eq!(extract_text(&payload), "ab");
    }

    #[test]
    fn single_part_object_is_read_directly() {
        let payload = json!({
            "candidates": [{ "content": { "parts": { "text": "solo" } } }]
        });
        assert_eq!(extract_text(&payload), "solo");
    }

    #[test]
    fn malformed_shapes_degrade_to_empty() {
        assert_eq!(extract_text(&json!(null)), "");
        assert_eq!(extract_text(&json!("text")), "");
        assert_eq!(extract_text(&json!({ "candidates": [{ "content": null }] })), "");
        assert_eq!(
            extract_text(&json!({ "candidates": [{ "content": { "parts": "x" } }] })),
            ""
        );
        // Safety-blocked candidates come back without content
        assert_eq!(
            extract_text(&json!({ "candidates": [{ "finishReason": "SAFETY" }] })),
            ""
        );
    }
}
