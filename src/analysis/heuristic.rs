use crate::models::{truncate_chars, Analysis, IssueData, IssueType, MAX_IMPACT_CHARS, MAX_SUMMARY_CHARS};

// Keyword tables are matched as exact substrings of the lower-cased title.
// Over-matching ("bug" inside "debugging") is intentional and load-bearing.
const BUG_KEYWORDS: &[&str] = &["bug", "error", "fix", "crash", "broken", "fail"];
const FEATURE_KEYWORDS: &[&str] = &["feature", "add", "implement", "support", "allow"];
const DOC_KEYWORDS: &[&str] = &["doc", "document", "readme", "guide", "tutorial"];
const QUESTION_KEYWORDS: &[&str] = &["why", "how", "what", "help", "question", "?"];

const CRITICAL_KEYWORDS: &[&str] = &["critical", "severe", "crash", "data loss"];
const PERFORMANCE_KEYWORDS: &[&str] = &["performance", "slow"];
const MEMORY_KEYWORDS: &[&str] = &["memory", "leak"];

const MAX_HEURISTIC_LABELS: usize = 5;

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|kw| haystack.contains(kw))
}

/// Deterministic keyword classifier. Total and pure: never fails, and the
/// result depends only on the issue. Used as demo mode and as the fallback
/// for every model-path failure.
pub fn classify(issue: &IssueData) -> Analysis {
    let title_lower = issue.title.to_lowercase();
    let comment_count = issue.comment_count();

    // Groups are checked in fixed priority order; only the title counts.
    let issue_type = if contains_any(&title_lower, BUG_KEYWORDS) {
        IssueType::Bug
    } else if contains_any(&title_lower, FEATURE_KEYWORDS) {
        IssueType::FeatureRequest
    } else if contains_any(&title_lower, DOC_KEYWORDS) {
        IssueType::Documentation
    } else if contains_any(&title_lower, QUESTION_KEYWORDS) {
        IssueType::Question
    } else {
        IssueType::Other
    };

    let priority_score = priority_for(issue_type, comment_count, &title_lower);
    let suggested_labels = labels_for(issue_type, &title_lower);
    let summary = summary_for(issue_type, &issue.title);
    let potential_impact = impact_for(issue_type, comment_count, &title_lower);

    Analysis {
        summary: truncate_chars(&summary, MAX_SUMMARY_CHARS),
        issue_type,
        priority_score,
        suggested_labels,
        potential_impact: truncate_chars(&potential_impact, MAX_IMPACT_CHARS),
    }
}

fn priority_for(issue_type: IssueType, comment_count: usize, title_lower: &str) -> String {
    let score = match issue_type {
        IssueType::Bug => {
            if contains_any(title_lower, CRITICAL_KEYWORDS) {
                "5/5 - Critical - Severe issue affecting users"
            } else if comment_count > 5 {
                "4/5 - High - Multiple users affected"
            } else {
                "3/5 - Medium - Confirmed bug needs investigation"
            }
        }
        IssueType::FeatureRequest => {
            if comment_count > 3 {
                "3/5 - Medium - Community interest"
            } else {
                "2/5 - Low - Single feature request"
            }
        }
        _ => "2/5 - Low priority",
    };
    score.to_string()
}

fn labels_for(issue_type: IssueType, title_lower: &str) -> Vec<String> {
    let mut labels: Vec<&str> = Vec::new();

    match issue_type {
        IssueType::Bug => {
            labels.extend(["bug", "needs-investigation"]);
            if contains_any(title_lower, PERFORMANCE_KEYWORDS) {
                labels.push("performance");
            }
            if contains_any(title_lower, MEMORY_KEYWORDS) {
                labels.push("memory-leak");
            }
        }
        IssueType::FeatureRequest => labels.extend(["enhancement", "feature-request"]),
        IssueType::Documentation => labels.extend(["documentation", "good-first-issue"]),
        _ => {}
    }

    // Dedup keeps first occurrence; insertion order is deterministic here.
    let mut deduped: Vec<String> = Vec::new();
    for label in labels {
        if !deduped.iter().any(|l| l == label) {
            deduped.push(label.to_string());
        }
    }
    deduped.truncate(MAX_HEURISTIC_LABELS);
    deduped
}

fn summary_for(issue_type: IssueType, title: &str) -> String {
    match issue_type {
        IssueType::Bug => format!("Bug: {}", truncate_chars(title, 80)),
        IssueType::FeatureRequest => format!("Feature request: {}", truncate_chars(title, 75)),
        _ if title.is_empty() => "Issue analysis".to_string(),
        _ => truncate_chars(title, 100),
    }
}

fn impact_for(issue_type: IssueType, comment_count: usize, title_lower: &str) -> String {
    if issue_type == IssueType::Bug {
        // The impact upgrade keys on "critical"/"severe" only, a narrower
        // check than the priority escalation list.
        if title_lower.contains("critical") || title_lower.contains("severe") {
            "Critical bug affecting core functionality and users.".to_string()
        } else {
            "Users may experience issues. Reproduction steps needed for verification.".to_string()
        }
    } else {
        format!(
            "This {} has {} comments indicating community interest.",
            issue_type, comment_count
        )
    }
}
