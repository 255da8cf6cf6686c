// src/page/snapshot.rs
// JSON export of one page's comment thread

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZapperError};
use crate::models::CommentRecord;
use crate::util::{identity_hash_from_avatar_url, join_paragraphs};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageSnapshot {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub comments: Vec<RawComment>,
}

/// A comment as exported from the page, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawComment {
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

impl RawComment {
    /// Extract the record the filter evaluates.
    ///
    /// Fails when the avatar or author name is missing from the export.
    pub fn to_record(&self) -> Result<CommentRecord> {
        let avatar_url = self
            .avatar_url
            .as_deref()
            .ok_or_else(|| ZapperError::Extraction("comment has no avatar".to_string()))?;
        let author_name = self
            .author_name
            .as_deref()
            .ok_or_else(|| ZapperError::Extraction("comment has no author name".to_string()))?;

        Ok(CommentRecord {
            identity_hash: identity_hash_from_avatar_url(avatar_url),
            author_name: author_name.to_string(),
            text: join_paragraphs(&self.paragraphs),
        })
    }
}

impl PageSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await?;
        Self::from_json(&contents)
            .map_err(|e| ZapperError::Parse(format!("{}: {}", path.display(), e)))
    }
}
