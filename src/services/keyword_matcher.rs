use regex::{Regex, RegexBuilder};
use tracing::warn;

use crate::util::escape_keyword;

/// Characters that may not touch a keyword on either side.
const WORD_CHARS: &str = "a-z0-9";

/// Combined matcher for every blocked keyword.
///
/// All keywords live in one alternation so a comment body is scanned once,
/// whatever the size of the keyword list. A keyword only matches when it is
/// flanked by a character outside `[a-z0-9]` (compared case-insensitively)
/// or by the start/end of the text.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    regex: Regex,
}

/// One keyword occurrence inside a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatch {
    /// The keyword as written in the comment.
    pub keyword: String,
    /// The full match, boundary characters included.
    pub matched: String,
    /// Byte offset of the full match.
    pub start: usize,
}

/// Builds the matcher for `keywords`, keeping their order in the alternation.
/// Returns `None` when there is nothing to match.
pub fn build_matcher<S: AsRef<str>>(keywords: &[S]) -> Option<KeywordMatcher> {
    if keywords.is_empty() {
        return None;
    }

    let alternation = keywords
        .iter()
        .map(|keyword| escape_keyword(keyword.as_ref()))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(
        "(?:^|[^{WORD_CHARS}])(?P<keyword>{alternation})(?:$|[^{WORD_CHARS}])"
    );

    // Escaped literals joined by `|` only fail on the compiled size limit.
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(regex) => Some(KeywordMatcher { regex }),
        Err(e) => {
            warn!("Failed to build keyword matcher for {} keywords: {}", keywords.len(), e);
            None
        }
    }
}

impl KeywordMatcher {
    /// Every non-overlapping keyword occurrence, in order of appearance.
    ///
    /// A boundary character consumed by one match is not available to the
    /// next, so in `"basement wager"` only `basement` is reported.
    pub fn find_all(&self, text: &str) -> Vec<KeywordMatch> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| {
                let full = caps.get(0)?;
                let keyword = caps.name("keyword")?;
                Some(KeywordMatch {
                    keyword: keyword.as_str().to_string(),
                    matched: full.as_str().to_string(),
                    start: full.start(),
                })
            })
            .collect()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(matcher: &KeywordMatcher, text: &str) -> Vec<String> {
        matcher
            .find_all(text)
            .into_iter()
            .map(|m| m.keyword)
            .collect()
    }

    #[test]
    fn empty_keyword_list_has_no_matcher() {
        assert!(build_matcher::<&str>(&[]).is_none());
    }

    #[test]
    fn matches_whole_words_only() {
        let matcher = build_matcher(&["anyone"]).unwrap();
        assert!(matcher.is_match("Is anyone home?"));
        assert!(!matcher.is_match("xanyonex"));
        assert!(!matcher.is_match("bananyone here"));
        assert!(!matcher.is_match("anyones here"));
    }

    #[test]
    fn text_edges_count_as_boundaries() {
        let matcher = build_matcher(&["anyone"]).unwrap();
        assert!(matcher.is_match("anyone"));
        assert!(matcher.is_match("anyone there"));
        assert!(matcher.is_match("is it anyone"));
    }

    #[test]
    fn matching_ignores_case() {
        let matcher = build_matcher(&["FUDster"]).unwrap();
        assert_eq!(keywords(&matcher, "what a fudster."), vec!["fudster"]);
        assert_eq!(keywords(&matcher, "WHAT A FUDSTER!"), vec!["FUDSTER"]);
    }

    #[test]
    fn uppercase_letters_are_word_characters() {
        let matcher = build_matcher(&["wager"]).unwrap();
        assert!(!matcher.is_match("WAGERS are fun"));
        assert!(!matcher.is_match("Xwager"));
    }

    #[test]
    fn finds_every_occurrence_in_order() {
        let matcher = build_matcher(&["basement", "wager"]).unwrap();
        let found = matcher.find_all("a wager, from the basement, another wager.");
        let names: Vec<&str> = found.iter().map(|m| m.keyword.as_str()).collect();
        assert_eq!(names, vec!["wager", "basement", "wager"]);
        assert!(found.windows(2).all(|pair| pair[0].start < pair[1].start));
    }

    #[test]
    fn full_match_includes_boundaries() {
        let matcher = build_matcher(&["basement"]).unwrap();
        let found = matcher.find_all("living in my basement\n");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].keyword, "basement");
        assert_eq!(found[0].matched, " basement\n");
        assert_eq!(found[0].start, 12);
    }

    #[test]
    fn adjacent_matches_share_a_single_boundary() {
        let matcher = build_matcher(&["basement", "wager"]).unwrap();
        assert_eq!(keywords(&matcher, "basement wager"), vec!["basement"]);
        assert_eq!(
            keywords(&matcher, "basement, wager"),
            vec!["basement", "wager"]
        );
    }

    #[test]
    fn pattern_characters_are_literal() {
        let matcher = build_matcher(&["c++", "a.b"]).unwrap();
        assert_eq!(keywords(&matcher, "I write c++ daily"), vec!["c++"]);
        assert!(!matcher.is_match("axb here"));
        assert!(matcher.is_match("see a.b now"));
    }

    #[test]
    fn pattern_is_stable_for_the_same_order() {
        let first = build_matcher(&["mommy", "basement"]).unwrap();
        let second = build_matcher(&["mommy", "basement"]).unwrap();
        assert_eq!(first.as_str(), second.as_str());
    }
}
