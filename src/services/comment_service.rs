// src/services/comment_service.rs

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::models::CommentRecord;
use crate::page::comment::{CommentAction, PageComment};
use crate::page::report::{CommentReport, FilterSummary, PageReport};
use crate::page::snapshot::PageSnapshot;
use crate::services::content_filter::{ContentFilterService, FilterResult};

/// Keeps the comments of one page and applies the filter to them
pub struct CommentService {
    filter: ContentFilterService,
    comments: Vec<PageComment>,
    skipped: usize,
}

impl CommentService {
    pub fn new(filter: ContentFilterService) -> Self {
        Self {
            filter,
            comments: Vec::new(),
            skipped: 0,
        }
    }

    /// Filter every comment of the snapshot. Malformed comments are skipped.
    pub fn load_snapshot(&mut self, snapshot: &PageSnapshot) -> FilterSummary {
        for (index, raw) in snapshot.comments.iter().enumerate() {
            match raw.to_record() {
                Ok(record) => {
                    self.process(record);
                }
                Err(e) => {
                    warn!("Skipping comment #{}: {}", index, e);
                    self.skipped += 1;
                }
            }
        }

        let summary = self.summary();
        info!(
            "Filtered {} comments: {} blocked, {} skipped",
            summary.total, summary.blocked, summary.skipped
        );
        summary
    }

    /// Attach the default menu to a comment, evaluate it, and hide it when blocked.
    pub fn process(&mut self, record: CommentRecord) -> Uuid {
        info!("Added a comment for author {}", record.author_name);
        debug!("Identity of {}: {}", record.author_name, record.identity_hash);

        let result = self.filter.evaluate(&record);
        debug!("Filter result for {}: {}", record.author_name, result);

        let mut comment = PageComment::new(record);
        comment.add_menu();
        comment.add_action("Hide", CommentAction::Hide);
        comment.add_action("Show", CommentAction::Show);
        comment.block(&result);

        let id = comment.id();
        self.comments.push(comment);
        id
    }

    pub fn evaluate(&self, record: &CommentRecord) -> FilterResult {
        self.filter.evaluate(record)
    }

    /// Returns false when no comment has this id.
    pub fn perform(&mut self, id: Uuid, action: CommentAction) -> bool {
        match self.comments.iter_mut().find(|comment| comment.id() == id) {
            Some(comment) => {
                comment.perform(action);
                true
            }
            None => {
                warn!("No comment with id {}", id);
                false
            }
        }
    }

    /// Show every blocked comment, keeping its notice.
    pub fn reveal_all(&mut self) -> usize {
        let mut revealed = 0;
        for comment in self.comments.iter_mut().filter(|c| c.is_blocked()) {
            comment.perform(CommentAction::Show);
            revealed += 1;
        }
        revealed
    }

    pub fn comments(&self) -> &[PageComment] {
        &self.comments
    }

    pub fn filter(&self) -> &ContentFilterService {
        &self.filter
    }

    pub fn summary(&self) -> FilterSummary {
        FilterSummary {
            total: self.comments.len(),
            blocked: self.comments.iter().filter(|c| c.is_blocked()).count(),
            skipped: self.skipped,
        }
    }

    pub fn report(&self, url: Option<String>) -> PageReport {
        let comments = self.comments.iter().map(CommentReport::from).collect();
        PageReport::new(url, self.summary(), comments)
    }
}
