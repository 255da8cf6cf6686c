// src/page/report.rs
// Outcome of a filtering pass, as text or JSON

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::Result;
use crate::page::comment::PageComment;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSummary {
    pub total: usize,
    pub blocked: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentReport {
    pub id: Uuid,
    pub author_name: String,
    pub identity_hash: String,
    pub blocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub visible: bool,
}

impl From<&PageComment> for CommentReport {
    fn from(comment: &PageComment) -> Self {
        let record = comment.record();
        Self {
            id: comment.id(),
            author_name: record.author_name.clone(),
            identity_hash: record.identity_hash.clone(),
            blocked: comment.is_blocked(),
            reason: comment.notice().map(|notice| notice.reason.clone()),
            visible: comment.body().is_shown(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageReport {
    pub url: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub summary: FilterSummary,
    pub comments: Vec<CommentReport>,
}

impl PageReport {
    pub fn new(url: Option<String>, summary: FilterSummary, comments: Vec<CommentReport>) -> Self {
        Self {
            url,
            generated_at: Utc::now(),
            summary,
            comments,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        if let Some(url) = &self.url {
            let _ = writeln!(out, "Page: {}", url);
        }
        for comment in &self.comments {
            let state = match (comment.blocked, comment.visible) {
                (false, _) => "shown",
                (true, true) => "revealed",
                (true, false) => "hidden",
            };
            let _ = write!(out, "[{}] {} ({})", state, comment.author_name, comment.identity_hash);
            if let Some(reason) = &comment.reason {
                let _ = write!(out, " - {}", reason);
            }
            out.push('\n');
        }
        let _ = writeln!(
            out,
            "{} comments, {} blocked, {} skipped",
            self.summary.total, self.summary.blocked, self.summary.skipped
        );
        out
    }
}
