use serde::{Deserialize, Serialize};

/// A single issue comment, reduced to what analysis needs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueComment {
    pub body: String,
    pub user: String,
}

/// A GitHub issue with its full comment thread, as consumed by the
/// analysis pipeline. `comments` is in API order, which is chronological.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IssueData {
    pub title: String,
    pub body: String,
    pub comments: Vec<IssueComment>,
    pub labels: Vec<String>,
    pub state: String,
    pub created_at: String,
    pub updated_at: String,
}

impl IssueData {
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}

// Wire types, matching the GitHub REST v3 JSON shapes we actually read.

#[derive(Debug, Clone, Deserialize)]
pub struct RawIssue {
    #[serde(default)]
    pub title: String,
    pub body: Option<String>,
    #[serde(default)]
    pub labels: Vec<RawLabel>,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLabel {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawComment {
    pub body: Option<String>,
    pub user: Option<RawCommentUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCommentUser {
    #[serde(default)]
    pub login: String,
}

impl RawIssue {
    pub fn into_issue_data(self, comments: Vec<RawComment>) -> IssueData {
        IssueData {
            title: self.title,
            body: self.body.unwrap_or_default(),
            comments: comments
                .into_iter()
                .map(|c| IssueComment {
                    body: c.body.unwrap_or_default(),
                    user: c.user.map(|u| u.login).unwrap_or_default(),
                })
                .collect(),
            labels: self.labels.into_iter().map(|l| l.name).collect(),
            state: self.state,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
