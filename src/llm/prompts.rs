use crate::models::{truncate_chars, IssueData};

pub const SYSTEM_PROMPT: &str =
    "You are an expert GitHub issue analyzer. Return ONLY valid JSON, no markdown formatting.";

const MAX_BODY_CHARS: usize = 2000;
const MAX_COMMENT_CHARS: usize = 500;
const MAX_COMMENTS: usize = 5;

/// Builds the user prompt: title verbatim, body capped at 2000 chars, and
/// the first 5 comments capped at 500 chars each under a numbered
/// "Comments:" section.
pub fn build_prompt(issue: &IssueData) -> String {
    let body = truncate_chars(&issue.body, MAX_BODY_CHARS);

    let mut comments_text = String::new();
    if !issue.comments.is_empty() {
        comments_text.push_str("\n\nComments:\n");
        for (i, comment) in issue.comments.iter().take(MAX_COMMENTS).enumerate() {
            comments_text.push_str(&format!(
                "{}. {}\n",
                i + 1,
                truncate_chars(&comment.body, MAX_COMMENT_CHARS)
            ));
        }
    }

    format!(
        r#"Analyze this GitHub issue and return ONLY valid JSON (no markdown, no extra text).

Issue Title: {title}

Issue Body: {body}
{comments_text}

Return a JSON object with exactly this structure:
{{
  "summary": "One sentence summary of the issue",
  "type": "bug | feature_request | documentation | question | other",
  "priority_score": "1-5 with short justification",
  "suggested_labels": ["label1", "label2", "label3"],
  "potential_impact": "Short impact statement if bug, otherwise brief description"
}}

IMPORTANT: Return ONLY the JSON object, no markdown formatting, no extra text."#,
        title = issue.title,
        body = body,
        comments_text = comments_text,
    )
}
