pub mod comment_service;
pub mod content_filter;
pub mod keyword_matcher;

pub use comment_service::CommentService;
pub use content_filter::{BlockReason, ContentFilterService, FilterResult};
pub use keyword_matcher::{build_matcher, KeywordMatch, KeywordMatcher};
