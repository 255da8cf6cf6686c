// src/models.rs
// Values passed between the page adapter and the filter

use serde::{Deserialize, Serialize};

/// Snapshot of one comment, taken from the page before evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub identity_hash: String,
    pub author_name: String,
    pub text: String,
}

impl CommentRecord {
    pub fn new(
        identity_hash: impl Into<String>,
        author_name: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            identity_hash: identity_hash.into(),
            author_name: author_name.into(),
            text: text.into(),
        }
    }
}
