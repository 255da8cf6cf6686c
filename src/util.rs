// src/util.rs
// Utility functions (keyword escaping, avatar hashing, comment text)

use once_cell::sync::Lazy;
use regex::Regex;

static AVATAR_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.*avatar/").expect("avatar prefix pattern is valid"));
static QUERY_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\?.*").expect("query suffix pattern is valid"));

// Escapes a keyword so every character is matched literally.
pub fn escape_keyword(keyword: &str) -> String {
    regex::escape(keyword)
}

/// Derives the identity hash from an avatar URL such as
/// `https://secure.gravatar.com/avatar/<hash>?s=50&d=mm`.
///
/// Everything up to and including the last `avatar/` is dropped, as is the
/// query string. A URL without `avatar/` keeps its path minus the query.
pub fn identity_hash_from_avatar_url(url: &str) -> String {
    let without_prefix = AVATAR_PREFIX.replace(url, "");
    QUERY_SUFFIX.replace(&without_prefix, "").into_owned()
}

// Concatenates the visible paragraphs of a comment, each followed by a newline.
pub fn join_paragraphs<S: AsRef<str>>(paragraphs: &[S]) -> String {
    let mut text = String::new();
    for paragraph in paragraphs {
        text.push_str(paragraph.as_ref());
        text.push('\n');
    }
    text
}
