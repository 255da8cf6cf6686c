//! Comment thread filtering by blocked identity, author and keyword.
//!
//! [`ContentFilterService`] holds the blocklist and classifies a
//! [`CommentRecord`]; [`CommentService`] applies those decisions to the
//! comments of a [`PageSnapshot`].

pub mod config;
pub mod errors;
pub mod models;
pub mod page;
pub mod services;
pub mod util;

pub use config::{FilterConfig, ZapperConfig};
pub use errors::{Result, ZapperError};
pub use models::CommentRecord;
pub use page::{CommentAction, PageSnapshot};
pub use services::{BlockReason, CommentService, ContentFilterService, FilterResult};
