// src/page/mod.rs

pub mod comment;
pub mod report;
pub mod snapshot;

pub use comment::{CommentAction, PageComment, Visibility};
pub use report::{FilterSummary, PageReport};
pub use snapshot::{PageSnapshot, RawComment};
