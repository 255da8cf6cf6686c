use std::collections::HashSet;
use std::fmt;

use tracing::{debug, info};

use crate::config::FilterConfig;
use crate::models::CommentRecord;
use crate::services::keyword_matcher::{build_matcher, KeywordMatcher};

/// Blocklist of identities, authors and keywords for comment filtering
#[derive(Debug, Default)]
pub struct ContentFilterService {
    blocked_identities: HashSet<String>,
    blocked_authors: HashSet<String>,
    // Insertion order drives the matcher alternation.
    blocked_keywords: Vec<String>,
    keyword_matcher: Option<KeywordMatcher>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockReason {
    Identity,
    Author,
    Keywords(Vec<String>),
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockReason::Identity => write!(f, "Comment identity is blocked."),
            BlockReason::Author => write!(f, "Comment author is blocked."),
            BlockReason::Keywords(keywords) => write!(
                f,
                "Comment is blocked because of keyword '{}'.",
                keywords.join("', '")
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterResult {
    Allowed,
    Blocked { reason: BlockReason },
}

impl FilterResult {
    /// The shared result for comments no rule applies to.
    pub const fn unfiltered() -> Self {
        FilterResult::Allowed
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, FilterResult::Blocked { .. })
    }

    /// Human-readable reason, present only for blocked comments.
    pub fn reason(&self) -> Option<String> {
        match self {
            FilterResult::Allowed => None,
            FilterResult::Blocked { reason } => Some(reason.to_string()),
        }
    }
}

impl fmt::Display for FilterResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterResult::Allowed => write!(f, "[blocked: false]"),
            FilterResult::Blocked { reason } => write!(f, "[blocked: true, reason: {}]", reason),
        }
    }
}

impl ContentFilterService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a filter holding every entry of the settings file.
    pub fn from_config(config: &FilterConfig) -> Self {
        let mut filter = Self::new();
        for hash in &config.blocked_identities {
            filter.add_blocked_identity(hash);
        }
        for name in &config.blocked_authors {
            filter.add_blocked_author(name);
        }
        for keyword in &config.blocked_keywords {
            filter.add_blocked_keyword(keyword);
        }

        info!(
            "Loaded filter with {} identities, {} authors, {} keywords",
            filter.blocked_identities.len(),
            filter.blocked_authors.len(),
            filter.blocked_keywords.len()
        );
        filter
    }

    /// Block every comment posted with this identity hash.
    pub fn add_blocked_identity(&mut self, hash: &str) {
        self.blocked_identities.insert(hash.to_string());
    }

    /// Block every comment by this author.
    pub fn add_blocked_author(&mut self, name: &str) {
        self.blocked_authors.insert(name.to_string());
    }

    /// Block every comment containing the keyword as a separate word.
    ///
    /// The keyword is trimmed; blank input leaves the filter untouched.
    pub fn add_blocked_keyword(&mut self, keyword: &str) {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return;
        }
        if self.blocked_keywords.iter().any(|k| k == keyword) {
            return;
        }

        self.blocked_keywords.push(keyword.to_string());
        self.keyword_matcher = build_matcher(&self.blocked_keywords);
    }

    /// Classify a comment. Identity rules win over author rules, which win
    /// over keywords.
    pub fn evaluate(&self, record: &CommentRecord) -> FilterResult {
        if self.blocked_identities.contains(&record.identity_hash) {
            debug!("Blocked comment by identity {}", record.identity_hash);
            return FilterResult::Blocked {
                reason: BlockReason::Identity,
            };
        }

        if self.blocked_authors.contains(&record.author_name) {
            debug!("Blocked comment by author {}", record.author_name);
            return FilterResult::Blocked {
                reason: BlockReason::Author,
            };
        }

        if let Some(matcher) = &self.keyword_matcher {
            let found: Vec<String> = matcher
                .find_all(&record.text)
                .into_iter()
                .map(|m| m.keyword)
                .collect();
            if !found.is_empty() {
                debug!(
                    "Blocked comment from {} containing keywords: {:?}",
                    record.author_name, found
                );
                return FilterResult::Blocked {
                    reason: BlockReason::Keywords(found),
                };
            }
        }

        FilterResult::unfiltered()
    }

    pub fn blocked_identities(&self) -> &HashSet<String> {
        &self.blocked_identities
    }

    pub fn blocked_authors(&self) -> &HashSet<String> {
        &self.blocked_authors
    }

    pub fn blocked_keywords(&self) -> &[String] {
        &self.blocked_keywords
    }

    pub fn keyword_matcher(&self) -> Option<&KeywordMatcher> {
        self.keyword_matcher.as_ref()
    }

    pub fn rule_count(&self) -> usize {
        self.blocked_identities.len() + self.blocked_authors.len() + self.blocked_keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rule_count() == 0
    }
}
