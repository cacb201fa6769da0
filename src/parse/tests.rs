// Parse module tests.

use super::embedded::unescape_json_url;
use super::picture::has_image_extension;
use super::stories::STORY_MARKERS;
use super::structured::{extract_json_ld, json_ld_image};
use super::*;
use scraper::Html;

fn rules() -> DescriptionRules {
    DescriptionRules::new(
        &["सब्सक्राइबर", "subscribers"],
        &["instagram", "tiktok", "youtube"],
    )
    .unwrap()
}

#[test]
fn test_extract_title_basic() {
    let document = Html::parse_document("<html><head><title>Alice (alice)</title></head></html>");
    assert_eq!(extract_title(&document).as_deref(), Some("Alice (alice)"));
}

#[test]
fn test_extract_title_with_whitespace_and_entities() {
    let document = Html::parse_document(
        "<html><head><title>\n   Tom &amp; Jerry   \n</title></head></html>",
    );
    assert_eq!(extract_title(&document).as_deref(), Some("Tom & Jerry"));
}

#[test]
fn test_extract_title_missing_or_blank() {
    let missing = Html::parse_document("<html><head></head><body></body></html>");
    assert!(extract_title(&missing).is_none());
    let blank = Html::parse_document("<html><head><title>   </title></head></html>");
    assert!(extract_title(&blank).is_none());
}

#[test]
fn test_display_name_strips_parenthesized_username() {
    assert_eq!(
        display_name_from_title("Alice (alice)", "alice").as_deref(),
        Some("Alice")
    );
    assert_eq!(
        display_name_from_title("Alice Smith (@alice) on Snapchat", "alice").as_deref(),
        Some("Alice Smith")
    );
    // Case of the username in the title does not matter
    assert_eq!(
        display_name_from_title("Alice (ALICE)", "alice").as_deref(),
        Some("Alice")
    );
}

#[test]
fn test_display_name_without_username_is_verbatim() {
    assert_eq!(
        display_name_from_title("  Snapchat  ", "alice").as_deref(),
        Some("Snapchat")
    );
    // A different username in parentheses is kept
    assert_eq!(
        display_name_from_title("Bob (bob)", "alice").as_deref(),
        Some("Bob (bob)")
    );
}

#[test]
fn test_display_name_username_with_regex_metacharacters() {
    assert_eq!(
        display_name_from_title("Dot Man (a.b)", "a.b").as_deref(),
        Some("Dot Man")
    );
    assert_eq!(
        display_name_from_title("Dot Man (axb)", "a.b").as_deref(),
        Some("Dot Man (axb)")
    );
}

#[test]
fn test_display_name_only_username() {
    assert!(display_name_from_title("(alice)", "alice").is_none());
}

#[test]
fn test_extract_meta_description() {
    let document = Html::parse_document(
        r#"<html><head><meta name="description" content="  Hi there  "></head></html>"#,
    );
    assert_eq!(extract_meta_description(&document).as_deref(), Some("Hi there"));

    let empty =
        Html::parse_document(r#"<html><head><meta name="description" content=""></head></html>"#);
    assert!(extract_meta_description(&empty).is_none());
}

#[test]
fn test_picture_og_image_requires_image_extension() {
    let html = r#"<html><head><meta property="og:image" content="https://cdn.example/pic.jpg?x=1"></head></html>"#;
    let candidates = collect_picture_candidates(&Html::parse_document(html), html);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].source, "og:image");
    assert_eq!(candidates[0].url, "https://cdn.example/pic.jpg?x=1");

    let html = r#"<html><head><meta property="og:image" content="https://cdn.example/render?id=9"></head></html>"#;
    assert!(collect_picture_candidates(&Html::parse_document(html), html).is_empty());
}

#[test]
fn test_picture_twitter_image_any_url() {
    let html = r#"<html><head><meta name="twitter:image" content="https://cdn.example/render?id=9"></head></html>"#;
    let candidates = collect_picture_candidates(&Html::parse_document(html), html);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].source, "twitter:image");
}

#[test]
fn test_picture_img_tag_with_avatar_hint() {
    let html = r#"<html><body>
        <img src="https://cdn.example/logo.png" alt="logo">
        <img class="user-avatar" src="//cdn.example/me.webp">
        <img alt="Profile photo" src="/relative.png">
    </body></html>"#;
    let candidates = collect_picture_candidates(&Html::parse_document(html), html);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].source, "img");
    assert_eq!(candidates[0].url, "https://cdn.example/me.webp");
}

#[test]
fn test_picture_css_background() {
    let html = r#"<div style="background-image: url('https://cdn.example/bg.png')"></div>"#;
    let candidates = collect_picture_candidates(&Html::parse_document(html), html);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].source, "css");
    assert_eq!(candidates[0].url, "https://cdn.example/bg.png");
}

#[test]
fn test_picture_json_ld_image_variants() {
    let html = r#"<script type="application/ld+json">{"@type":"Person","image":{"url":"https://cdn.example/ld.jpg"}}</script>"#;
    let candidates = collect_picture_candidates(&Html::parse_document(html), html);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].source, "json-ld");
    assert_eq!(candidates[0].url, "https://cdn.example/ld.jpg");

    let values = extract_json_ld(
        r#"<script type='application/ld+json'>{"@graph":[{"@type":"WebPage"},{"image":["https://cdn.example/g.png"]}]}</script>"#,
    );
    assert_eq!(
        json_ld_image(&values).as_deref(),
        Some("https://cdn.example/g.png")
    );
}

#[test]
fn test_json_ld_invalid_block_skipped() {
    let html = r#"<script type="application/ld+json">{not json</script>
        <script type="application/ld+json">[{"image":"https://a/b.png"}]</script>"#;
    let values = extract_json_ld(html);
    assert_eq!(values.len(), 1);
    assert_eq!(json_ld_image(&values).as_deref(), Some("https://a/b.png"));
}

#[test]
fn test_picture_candidates_discovery_order() {
    let html = r#"<html><head>
        <meta name="twitter:image" content="https://cdn.example/tw.png">
        <meta property="og:image" content="https://cdn.example/og.png">
        </head><body><img class="avatar" src="https://cdn.example/img.png"></body></html>"#;
    let sources: Vec<_> = collect_picture_candidates(&Html::parse_document(html), html)
        .into_iter()
        .map(|c| c.source)
        .collect();
    assert_eq!(sources, vec!["og:image", "twitter:image", "img"]);
}

#[test]
fn test_has_image_extension() {
    assert!(has_image_extension("https://a/b.JPG"));
    assert!(has_image_extension("https://a/b.jpeg?size=2"));
    assert!(has_image_extension("https://a/b.webp#frag"));
    assert!(!has_image_extension("https://a/b.jpg.html"));
    assert!(!has_image_extension("https://a/png"));
}

#[test]
fn test_bitmoji_cdn_url() {
    let html = r#"<img src="https://sdk.bitmoji.com/render/panel/123-abc-v1.png?transparent=1">"#;
    assert_eq!(
        extract_bitmoji_url(html).as_deref(),
        Some("https://sdk.bitmoji.com/render/panel/123-abc-v1.png?transparent=1")
    );
}

#[test]
fn test_bitmoji_json_key_unescaped() {
    let html = r#"{"bitmojiAvatarUrl":"https:\/\/images.example\/bm\/9.png","x":1}"#;
    assert_eq!(
        extract_bitmoji_url(html).as_deref(),
        Some("https://images.example/bm/9.png")
    );
    let html = r#"{"bitmoji_url":"https://images.example/bm.png"}"#;
    assert_eq!(
        extract_bitmoji_url(html).as_deref(),
        Some("https://images.example/bm.png")
    );
}

#[test]
fn test_bitmoji_ignores_non_url_values() {
    assert!(extract_bitmoji_url(r#"{"bitmojiId":"12345"}"#).is_none());
}

#[test]
fn test_bitmoji_url_shape_beats_json_key() {
    let html = r#"{"bitmojiAvatarUrl":"https://images.example/a.png"}
        <img src="https://images.bitmoji.com/3d/avatar/1.png">"#;
    assert_eq!(
        extract_bitmoji_url(html).as_deref(),
        Some("https://images.bitmoji.com/3d/avatar/1.png")
    );
}

#[test]
fn test_snap_score_patterns() {
    assert_eq!(extract_snap_score(r#"{"snapScore":12345}"#), Some(12345));
    assert_eq!(extract_snap_score(r#"{"snap_score": "678"}"#), Some(678));
    assert_eq!(extract_snap_score("window.x = {snapScore: 42}"), Some(42));
    assert_eq!(extract_snap_score("no score here"), None);
}

#[test]
fn test_snap_score_quoted_key_preferred() {
    let html = r#"snapScore: 1, {"snapScore": 2}"#;
    assert_eq!(extract_snap_score(html), Some(2));
}

#[test]
fn test_friend_count_patterns() {
    assert_eq!(extract_friend_count(r#"{"friendCount":88}"#), Some(88));
    assert_eq!(extract_friend_count(r#"{"friends_count":"7"}"#), Some(7));
    assert_eq!(extract_friend_count("friendCount = 3"), Some(3));
    assert_eq!(extract_friend_count(r#"{"friendCount":null}"#), None);
}

#[test]
fn test_snap_score_overflow_is_miss() {
    assert_eq!(
        extract_snap_score(r#"{"snapScore":99999999999999999999999}"#),
        None
    );
}

#[test]
fn test_is_verified() {
    assert!(is_verified("<span>Verified</span>"));
    assert!(is_verified(r#"{"isVerified":true}"#));
    assert!(is_verified(r#"{"is_verified_user": true}"#));
    assert!(is_verified("<svg aria-label=\"VERIFIED badge\"></svg>"));
    assert!(!is_verified("<html>plain page</html>"));
}

#[test]
fn test_subscriber_count_english() {
    let rules = rules();
    assert_eq!(
        rules.subscriber_count("Creator | 4.2k subscribers").as_deref(),
        Some("4.2k")
    );
    assert_eq!(
        rules.subscriber_count("1,200 Subscribers").as_deref(),
        Some("1,200")
    );
    assert!(rules.subscriber_count("no numbers").is_none());
}

#[test]
fn test_subscriber_count_locale_order() {
    let rules = rules();
    assert_eq!(
        rules.subscriber_count("1.5M सब्सक्राइबर").as_deref(),
        Some("1.5M")
    );
    // The first label in the table wins even if a later one appears earlier in the text
    assert_eq!(
        rules
            .subscriber_count("10 subscribers / 20 सब्सक्राइबर")
            .as_deref(),
        Some("20")
    );
}

#[test]
fn test_location_pin() {
    assert_eq!(extract_location("📍 Mumbai").as_deref(), Some("Mumbai"));
    assert_eq!(
        extract_location("Dancer 📍New York City | DM for collabs").as_deref(),
        Some("New York City")
    );
}

#[test]
fn test_location_from_phrase() {
    assert_eq!(
        extract_location("Hi, I'm Sam from São Paulo.").as_deref(),
        Some("São Paulo")
    );
    assert!(extract_location("from 2019 till now").is_none());
}

#[test]
fn test_location_from_phrase_any_case_or_script() {
    assert_eq!(
        extract_location("Dancer from mumbai").as_deref(),
        Some("mumbai")
    );
    assert_eq!(
        extract_location("Dancer from मुंबई").as_deref(),
        Some("मुंबई")
    );
    assert_eq!(
        extract_location("From São Paulo, Brazil | DM").as_deref(),
        Some("São Paulo")
    );
}

#[test]
fn test_location_pin_preferred_over_from() {
    assert_eq!(
        extract_location("from Delhi 📍 Goa").as_deref(),
        Some("Goa")
    );
}

#[test]
fn test_website_label() {
    let rules = rules();
    assert_eq!(
        rules.website("Follow me! Instagram: @alice.art, thanks").as_deref(),
        Some("@alice.art")
    );
    assert_eq!(
        rules.website("youtube: youtube.com/@alice").as_deref(),
        Some("youtube.com/@alice")
    );
    assert!(rules.website("twitter: @alice").is_none());
}

#[test]
fn test_website_empty_label_table() {
    let rules = DescriptionRules::new::<&str>(&[], &[]).unwrap();
    assert!(rules.website("instagram: @alice").is_none());
    assert!(rules.subscriber_count("5 subscribers").is_none());
}

#[test]
fn test_count_stories() {
    let html = r#"<div class="StoryTile"></div><div class="StoryTile"></div><div data-story-id="3"></div>"#;
    assert_eq!(count_stories(html), 3);
    assert_eq!(count_stories("<html></html>"), 0);
}

#[test]
fn test_count_stories_counts_each_marker_occurrence() {
    let html = r#"<div class="StoryTile" data-story-id="1"></div>"#.repeat(3);
    assert_eq!(count_stories(&html), 6);
}

#[test]
fn test_count_stories_capped() {
    let html = "StoryTile ".repeat(120);
    assert_eq!(count_stories(&html), 50);
}

#[test]
fn test_story_markers_do_not_overlap() {
    for a in STORY_MARKERS {
        for b in STORY_MARKERS {
            if a != b {
                assert!(!a.contains(b), "{a} contains {b}");
            }
        }
    }
}

#[test]
fn test_extract_story_avatar() {
    let html = r#"<html><head><meta property="og:image" content="https://cdn.example/story-avatar.jpg"></head></html>"#;
    assert_eq!(
        extract_story_avatar(&Html::parse_document(html), html).as_deref(),
        Some("https://cdn.example/story-avatar.jpg")
    );
    assert!(extract_story_avatar(&Html::parse_document("<p>x</p>"), "<p>x</p>").is_none());
}

#[test]
fn test_unescape_json_url() {
    assert_eq!(
        unescape_json_url(r"https:\/\/a/b?x=1&y=2"),
        "https://a/b?x=1&y=2"
    );
}
