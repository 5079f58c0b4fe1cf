use webtools::{
    assemble_robots_txt, build_transform, count_text, extract_emails, extract_links, format_css,
    minify_css, RobotsRule, TextStats,
};

const STYLESHEET: &str = r#"
/* Layout */
body { margin: 0 auto; padding : 0 }

@media (max-width: 600px) {
    .nav > li + li { display: none; }
}

a:hover , a:focus { color: #333 }
"#;

#[test]
fn minify_is_idempotent_on_a_real_stylesheet() {
    let once = minify_css(STYLESHEET);
    assert_eq!(minify_css(&once), once);
    assert!(once.len() <= STYLESHEET.len());
    assert_eq!(
        once,
        "body{margin:0 auto;padding:0}@media(max-width:600px){.nav>li+li{display:none;}}a:hover,a:focus{color:#333}"
    );
}

#[test]
fn format_then_minify_keeps_tokens() {
    let minified = minify_css(STYLESHEET);
    assert_eq!(minify_css(&format_css(STYLESHEET)), minified);
    assert_eq!(minify_css(&format_css(&minified)), minified);
}

#[test]
fn formatted_output_has_no_long_blank_runs() {
    let formatted = format_css(STYLESHEET);
    assert!(!formatted.contains("\n\n\n"));
    assert!(formatted.starts_with("/* Layout */\nbody {\n  margin: 0 auto;"));
}

#[test]
fn counting_reference_cases() {
    assert_eq!(
        count_text(""),
        TextStats {
            lines: 1,
            ..TextStats::default()
        }
    );

    let stats = count_text("hello world");
    assert_eq!(
        (
            stats.words,
            stats.characters,
            stats.characters_no_spaces,
            stats.paragraphs,
            stats.sentences,
            stats.lines
        ),
        (2, 11, 10, 1, 0, 1)
    );
}

#[test]
fn link_extraction_reference_case() {
    assert_eq!(
        extract_links("visit https://example.com, https://example.com/ and www.test.org"),
        vec![
            "https://example.com",
            "https://example.com/",
            "https://www.test.org"
        ]
    );
}

#[test]
fn emails_and_links_do_not_overlap() {
    let text = "Reach jane.doe@mail.example.com; docs at docs.example.com.";
    assert_eq!(extract_emails(text), vec!["jane.doe@mail.example.com"]);
    assert_eq!(extract_links(text), vec!["https://docs.example.com"]);
}

#[test]
fn transform_reference_cases() {
    assert_eq!(build_transform("1", "0", "0", "0", "0", "0"), "transform: none;");
    assert_eq!(
        build_transform("1.5", "45", "10", "0", "0", "0"),
        "transform: scale(1.5) rotate(45deg) translate(10px, 0px);"
    );
}

#[test]
fn robots_reference_case() {
    let rules = vec![RobotsRule {
        user_agent: "*".to_string(),
        allow: vec![],
        disallow: vec!["/admin/".to_string()],
        crawl_delay: Some(String::new()),
    }];
    assert_eq!(
        assemble_robots_txt(&rules, Some("https://x.com/sitemap.xml")),
        "User-agent: *\nDisallow: /admin/\n\nSitemap: https://x.com/sitemap.xml\n"
    );
}
