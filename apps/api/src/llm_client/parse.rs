//! JSON recovery for model output.
//!
//! Models are told to return bare JSON but routinely wrap it in markdown
//! fences or lead with prose. Recovery order: strip fences, direct parse,
//! then greedy brace extraction. Schema validation happens in the callers.

use serde_json::Value;
use tracing::warn;

use crate::llm_client::AiError;

/// Removes ```json / ``` fence markers anywhere in the text.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Greedy first-`{`-to-last-`}` span, if one exists.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Greedy first-`[`-to-last-`]` span, if one exists.
pub fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (end > start).then(|| &text[start..=end])
}

/// Parses model output into a JSON value.
///
/// Tries the fence-stripped text directly, then falls back to the first
/// brace-delimited span. Both failing is a hard parse error.
pub fn parse_json_response(text: &str) -> Result<Value, AiError> {
    let clean = strip_code_fences(text);

    if let Ok(value) = serde_json::from_str(&clean) {
        return Ok(value);
    }

    warn!("JSON parsing failed, attempting to extract JSON");
    if let Some(span) = extract_json_object(&clean) {
        if let Ok(value) = serde_json::from_str(span) {
            return Ok(value);
        }
    }

    Err(AiError::Parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_parse_direct() {
        let value = parse_json_response(r#"{"a": 1}"#).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_parse_fenced() {
        let value = parse_json_response("```json\n{\"a\": [1, 2]}\n```").unwrap();
        assert_eq!(value, json!({"a": [1, 2]}));
    }

    #[test]
    fn test_parse_recovers_object_embedded_in_prose() {
        let text = "Sure! Here is the JSON you asked for:\n{\"ok\": true}\nHope that helps.";
        let value = parse_json_response(text).unwrap();
        assert_eq!(value, json!({"ok": true}));
    }

    #[test]
    fn test_parse_greedy_span_covers_nested_objects() {
        let text = "prefix {\"outer\": {\"inner\": 1}} suffix";
        let value = parse_json_response(text).unwrap();
        assert_eq!(value, json!({"outer": {"inner": 1}}));
    }

    #[test]
    fn test_parse_fails_without_braces() {
        let err = parse_json_response("no json here at all").unwrap_err();
        assert!(matches!(err, AiError::Parse));
    }

    #[test]
    fn test_parse_fails_on_unbalanced_span() {
        let err = parse_json_response("{\"broken\": ").unwrap_err();
        assert!(matches!(err, AiError::Parse));
    }

    #[test]
    fn test_extract_array() {
        let text = "Suggestions: [\"a\", \"b\"] — done";
        assert_eq!(extract_json_array(text), Some("[\"a\", \"b\"]"));
    }

    #[test]
    fn test_extract_array_absent() {
        assert_eq!(extract_json_array("nothing"), None);
    }
}
