use serde_json::Value;

use crate::error::{Error, Result};

/// Parses the model's free-text reply into a JSON mapping. The reply may
/// wrap the object in prose or markdown fences despite the system prompt,
/// so extraction slices between the outermost braces before parsing.
pub fn parse_model_reply(reply: &str) -> Result<Value> {
    let json_str = extract_json(reply)?;

    serde_json::from_str(&json_str)
        .map_err(|e| Error::Parse(format!("Failed to parse model reply: {}", e)))
}

/// Slices from the first `{` to the last `}` inclusive. Deliberately
/// permissive repair, not strict parsing.
fn extract_json(text: &str) -> Result<String> {
    let start = text
        .find('{')
        .ok_or_else(|| Error::Parse("No JSON found in response".to_string()))?;
    let end = text
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or_else(|| Error::Parse("No JSON found in response".to_string()))?;

    Ok(text[start..=end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_raw_json() {
        let input = r#"The result is {"summary": "x", "type": "bug"} hope that helps"#;
        let result = extract_json(input).unwrap();
        assert_eq!(result, r#"{"summary": "x", "type": "bug"}"#);
    }

    #[test]
    fn extracts_json_from_markdown_fences() {
        let input = "```json\n{\"summary\": \"Crash on save\", \"type\": \"bug\"}\n```";
        let value = parse_model_reply(input).unwrap();
        assert_eq!(value["summary"], "Crash on save");
        assert_eq!(value["type"], "bug");
    }

    #[test]
    fn fails_without_braces() {
        assert!(matches!(
            parse_model_reply("I could not produce JSON, sorry."),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn fails_on_unbalanced_slice() {
        assert!(matches!(
            parse_model_reply("here is a } but no opening brace after it"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn fails_on_malformed_json_between_braces() {
        assert!(matches!(
            parse_model_reply(r#"{"summary": unquoted}"#),
            Err(Error::Parse(_))
        ));
    }
}
