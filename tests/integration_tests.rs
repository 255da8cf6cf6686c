use std::fs;

use comment_zapper::page::Visibility;
use comment_zapper::{
    BlockReason, CommentAction, CommentRecord, CommentService, ContentFilterService,
    FilterResult, PageSnapshot, ZapperConfig,
};
use tempfile::TempDir;

const CONFIG: &str = r#"
[filter]
blocked_identities = ["ea0af1e6dffdfa291380200694704d13"]
blocked_keywords = ["basement", "mommy", "FUDster", "anyone", "wager"]
"#;

const PAGE: &str = r#"{
  "url": "https://insideevs.com/news/example-article/",
  "comments": [
    {
      "avatar_url": "https://secure.gravatar.com/avatar/ea0af1e6dffdfa291380200694704d13?s=50",
      "author_name": "ChargeAhead",
      "paragraphs": ["Range numbers look great."]
    },
    {
      "avatar_url": "https://secure.gravatar.com/avatar/5d41402abc4b2a76b9719d911017c592?s=50",
      "author_name": "VoltFan",
      "paragraphs": ["Is anyone else waiting?", "Ask your MOMMY."]
    },
    {
      "avatar_url": "https://secure.gravatar.com/avatar/7d793037a0760186574b0282f2f435e7?s=50",
      "author_name": "GasIsGone",
      "paragraphs": ["Wagers are fun, xanyonex too."]
    },
    { "author_name": "Anonymous", "paragraphs": ["no avatar"] }
  ]
}"#;

#[tokio::test]
async fn filters_page_from_files() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("zapper_config.toml");
    let page_path = dir.path().join("page.json");
    fs::write(&config_path, CONFIG).unwrap();
    fs::write(&page_path, PAGE).unwrap();

    let config = ZapperConfig::load_or_default(&config_path).await.unwrap();
    let snapshot = PageSnapshot::load(&page_path).await.unwrap();

    let mut service = CommentService::new(ContentFilterService::from_config(&config.filter));
    let summary = service.load_snapshot(&snapshot);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.blocked, 2);
    assert_eq!(summary.skipped, 1);

    let report = service.report(snapshot.url.clone());
    let reasons: Vec<Option<&str>> = report
        .comments
        .iter()
        .map(|c| c.reason.as_deref())
        .collect();
    assert_eq!(
        reasons,
        vec![
            Some("Comment identity is blocked."),
            Some("Comment is blocked because of keyword 'anyone', 'MOMMY'."),
            None,
        ]
    );

    let text = report.render_text();
    assert!(text.contains("[hidden] VoltFan"));
    assert!(text.contains("[shown] GasIsGone"));
}

#[test]
fn reader_can_show_and_rehide_a_blocked_comment() {
    let mut filter = ContentFilterService::new();
    filter.add_blocked_author("troll");
    let mut service = CommentService::new(filter);

    let id = service.process(CommentRecord::new("abc", "troll", "hello"));
    assert_eq!(service.comments()[0].body(), Visibility::Hidden);

    service.perform(id, CommentAction::Show);
    assert_eq!(service.comments()[0].body(), Visibility::Shown);
    assert!(service.comments()[0].is_blocked());

    service.perform(id, CommentAction::Hide);
    assert_eq!(service.comments()[0].body(), Visibility::Hidden);
}

#[test]
fn priority_is_identity_then_author_then_keyword() {
    let mut filter = ContentFilterService::new();
    filter.add_blocked_identity("hash");
    filter.add_blocked_author("name");
    filter.add_blocked_keyword("word");

    let reason = |record: CommentRecord| match filter.evaluate(&record) {
        FilterResult::Blocked { reason } => Some(reason),
        FilterResult::Allowed => None,
    };

    assert_eq!(
        reason(CommentRecord::new("hash", "name", "word")),
        Some(BlockReason::Identity)
    );
    assert_eq!(
        reason(CommentRecord::new("other", "name", "word")),
        Some(BlockReason::Author)
    );
    assert_eq!(
        reason(CommentRecord::new("other", "other", "a word.")),
        Some(BlockReason::Keywords(vec!["word".to_string()]))
    );
    assert_eq!(reason(CommentRecord::new("other", "other", "words")), None);
}
