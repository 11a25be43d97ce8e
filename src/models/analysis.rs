use serde::{Deserialize, Serialize};

pub const MAX_SUMMARY_CHARS: usize = 200;
pub const MAX_PRIORITY_CHARS: usize = 100;
pub const MAX_IMPACT_CHARS: usize = 200;
pub const MAX_LABELS: usize = 10;

/// Issue classification produced by both the heuristic and model paths.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    Bug,
    FeatureRequest,
    Documentation,
    Question,
    #[default]
    Other,
}

impl IssueType {
    /// Parses the wire form; anything outside the five valid values
    /// coerces to `Other`.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "bug" => IssueType::Bug,
            "feature_request" => IssueType::FeatureRequest,
            "documentation" => IssueType::Documentation,
            "question" => IssueType::Question,
            "other" => IssueType::Other,
            _ => IssueType::Other,
        }
    }
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueType::Bug => write!(f, "bug"),
            IssueType::FeatureRequest => write!(f, "feature request"),
            IssueType::Documentation => write!(f, "documentation"),
            IssueType::Question => write!(f, "question"),
            IssueType::Other => write!(f, "other"),
        }
    }
}

/// The canonical five-field analysis. Every code path (heuristic or
/// validated model output) produces this shape with all fields present.
/// Field order here is the JSON key order of the downloadable artifact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Analysis {
    pub summary: String,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub priority_score: String,
    pub suggested_labels: Vec<String>,
    pub potential_impact: String,
}

impl Default for Analysis {
    fn default() -> Self {
        Self {
            summary: String::new(),
            issue_type: IssueType::Other,
            priority_score: String::new(),
            suggested_labels: Vec::new(),
            potential_impact: String::new(),
        }
    }
}

/// Character-based prefix truncation. The caps in this crate are counted
/// in characters, not bytes, so multi-byte titles never split a char.
pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_type_wire_roundtrip() {
        assert_eq!(IssueType::from_wire("bug"), IssueType::Bug);
        assert_eq!(IssueType::from_wire("feature_request"), IssueType::FeatureRequest);
        assert_eq!(IssueType::from_wire("enhancement"), IssueType::Other);
        assert_eq!(IssueType::from_wire(""), IssueType::Other);
    }

    #[test]
    fn analysis_serializes_with_canonical_key_order() {
        let analysis = Analysis {
            summary: "Bug: crash".to_string(),
            issue_type: IssueType::Bug,
            priority_score: "3/5 - Medium - Confirmed bug needs investigation".to_string(),
            suggested_labels: vec!["bug".to_string()],
            potential_impact: "Users may experience issues.".to_string(),
        };
        let json = serde_json::to_string(&analysis).unwrap();
        let keys: Vec<usize> = ["\"summary\"", "\"type\"", "\"priority_score\"", "\"suggested_labels\"", "\"potential_impact\""]
            .iter()
            .map(|k| json.find(k).unwrap())
            .collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("short", 100), "short");
        assert_eq!(truncate_chars("", 5), "");
    }
}
