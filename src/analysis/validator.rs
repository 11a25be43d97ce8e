use serde_json::Value;

use crate::models::{
    truncate_chars, Analysis, IssueType, MAX_IMPACT_CHARS, MAX_LABELS, MAX_PRIORITY_CHARS,
    MAX_SUMMARY_CHARS,
};

/// Normalizes a loosely-typed model output into the canonical schema.
/// Total: gaps are filled with defaults, never an error. Non-object input
/// is treated as an empty mapping.
pub fn validate(raw: &Value) -> Analysis {
    let empty = serde_json::Map::new();
    let obj = raw.as_object().unwrap_or(&empty);

    let issue_type = obj
        .get("type")
        .and_then(Value::as_str)
        .map(IssueType::from_wire)
        .unwrap_or(IssueType::Other);

    let suggested_labels = obj
        .get("suggested_labels")
        .and_then(Value::as_array)
        .map(|arr| arr.iter().take(MAX_LABELS).map(coerce_to_string).collect())
        .unwrap_or_default();

    Analysis {
        summary: field_string(obj, "summary", MAX_SUMMARY_CHARS),
        issue_type,
        priority_score: field_string(obj, "priority_score", MAX_PRIORITY_CHARS),
        suggested_labels,
        potential_impact: field_string(obj, "potential_impact", MAX_IMPACT_CHARS),
    }
}

fn field_string(obj: &serde_json::Map<String, Value>, key: &str, max: usize) -> String {
    let s = obj.get(key).map(coerce_to_string).unwrap_or_default();
    truncate_chars(&s, max)
}

/// String values pass through verbatim; anything else gets its JSON
/// rendering, null becomes empty.
fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
