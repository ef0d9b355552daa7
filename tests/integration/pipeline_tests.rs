use crate::{hits, mount_page, mount_robots, test_config, test_pipeline};
use gleaner::{DocumentError, ExtractionResult, GleanError, Link, Pipeline};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ARTICLE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Rust (programming language)</title></head>
<body>
    <h1>Rust</h1>
    <p>Rust is a general-purpose programming language.</p>
    <h2>History</h2>
    <p>Rust began as a personal project.</p>
    <a href="/wiki/Graydon_Hoare">Graydon Hoare</a>
    <a href="https://www.rust-lang.org/">Official site</a>
    <a href="/wiki/Mozilla">Mozilla</a>
    <a href="/w/index.php?title=Rust">Edit</a>
    <a href="/wiki/Mozilla">Mozilla again</a>
    <img src="/static/rust-logo.png" alt="Rust logo">
    <img src="/static/spacer.gif">
</body>
</html>"#;

#[tokio::test]
async fn test_extract_all_from_page() {
    let server = MockServer::start().await;
    mount_robots(&server, "User-agent: *\nDisallow: /private").await;
    mount_page(&server, "/wiki/Rust", ARTICLE, 1).await;

    let summary = test_pipeline()
        .extract_all(&format!("{}/wiki/Rust", server.uri()))
        .await
        .expect("Extraction failed");

    assert_eq!(summary.headlines, vec!["Rust", "History"]);
    assert_eq!(summary.links.len(), 5);
    assert_eq!(
        summary.links[0],
        Link {
            href: "/wiki/Graydon_Hoare".to_string(),
            text: "Graydon Hoare".to_string(),
        }
    );
    assert_eq!(summary.images.len(), 2);
    assert_eq!(summary.images[1].alt, None);
}

#[tokio::test]
async fn test_robots_disallow_blocks_fetch() {
    let server = MockServer::start().await;
    mount_robots(&server, "User-agent: *\nDisallow: /").await;
    mount_page(&server, "/wiki/Rust", ARTICLE, 0).await;

    let err = test_pipeline()
        .extract_all(&format!("{}/wiki/Rust", server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, GleanError::RobotsDenied { .. }));
    assert_eq!(hits(&server, "/wiki/Rust").await, 0);
}

#[tokio::test]
async fn test_robots_denial_applies_to_every_feature() {
    let server = MockServer::start().await;
    mount_robots(&server, "User-agent: *\nDisallow: /wiki/").await;
    mount_page(&server, "/wiki/Rust", ARTICLE, 0).await;

    let pipeline = test_pipeline();
    let url = format!("{}/wiki/Rust", server.uri());

    assert!(matches!(
        pipeline.search_text(&url, "rust").await,
        Err(GleanError::RobotsDenied { .. })
    ));
    assert!(matches!(
        pipeline.count_elements(&url, "p").await,
        Err(GleanError::RobotsDenied { .. })
    ));
    assert!(matches!(
        pipeline.follow_links(&url, 1).await,
        Err(GleanError::RobotsDenied { .. })
    ));
    assert!(matches!(
        pipeline.select(&url, "p").await,
        Err(GleanError::RobotsDenied { .. })
    ));
}

#[tokio::test]
async fn test_check_reports_decision() {
    let server = MockServer::start().await;
    mount_robots(&server, "User-agent: *\nDisallow: /private").await;

    let pipeline = test_pipeline();

    let open = pipeline
        .check(&format!("{}/wiki/Rust", server.uri()))
        .await
        .unwrap();
    assert!(open.allowed);
    assert_eq!(open.robots_url, format!("{}/robots.txt", server.uri()));

    let closed = pipeline
        .check(&format!("{}/private/page", server.uri()))
        .await
        .unwrap();
    assert!(!closed.allowed);
}

#[tokio::test]
async fn test_named_robots_agent() {
    let server = MockServer::start().await;
    mount_robots(
        &server,
        "User-agent: Gleaner\nDisallow: /\n\nUser-agent: *\nAllow: /",
    )
    .await;

    let url = format!("{}/wiki/Rust", server.uri());
    assert!(test_pipeline().check(&url).await.unwrap().allowed);

    let mut config = test_config();
    config.robots.user_agent = "Gleaner".to_string();
    let named = Pipeline::new(&config).unwrap();
    assert!(!named.check(&url).await.unwrap().allowed);
}

#[tokio::test]
async fn test_robots_refetched_per_action() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nAllow: /"))
        .expect(2)
        .mount(&server)
        .await;
    mount_page(&server, "/wiki/Rust", ARTICLE, 2).await;

    let pipeline = test_pipeline();
    let url = format!("{}/wiki/Rust", server.uri());
    pipeline.count_elements(&url, "p").await.unwrap();
    pipeline.extract_links(&url).await.unwrap();
}

#[tokio::test]
async fn test_follow_links_negative_depth_makes_no_requests() {
    let server = MockServer::start().await;

    let result = test_pipeline()
        .follow_links(&format!("{}/wiki/Rust", server.uri()), -1)
        .await
        .unwrap();

    assert_eq!(result, ExtractionResult::FollowedLinks(vec![]));
    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_follow_links_depth_zero_single_fetch() {
    let server = MockServer::start().await;
    mount_robots(&server, "User-agent: *\nAllow: /").await;
    mount_page(&server, "/wiki/Rust", ARTICLE, 1).await;

    let result = test_pipeline()
        .follow_links(&format!("{}/wiki/Rust", server.uri()), 0)
        .await
        .unwrap();

    assert_eq!(
        result,
        ExtractionResult::FollowedLinks(vec![
            "/wiki/Graydon_Hoare".to_string(),
            "/wiki/Mozilla".to_string(),
            "/wiki/Mozilla".to_string(),
        ])
    );
}

#[tokio::test]
async fn test_follow_links_never_recurses() {
    let server = MockServer::start().await;
    mount_robots(&server, "User-agent: *\nAllow: /").await;
    mount_page(&server, "/wiki/Rust", ARTICLE, 1).await;
    mount_page(&server, "/wiki/Mozilla", "<a href=\"/wiki/Firefox\">F</a>", 0).await;
    mount_page(&server, "/wiki/Graydon_Hoare", "<p>bio</p>", 0).await;

    let result = test_pipeline()
        .follow_links(&format!("{}/wiki/Rust", server.uri()), 5)
        .await
        .unwrap();

    assert_eq!(result.len(), 3);
}

#[tokio::test]
async fn test_search_text() {
    let server = MockServer::start().await;
    mount_robots(&server, "").await;
    mount_page(&server, "/wiki/Rust", ARTICLE, 1).await;

    let result = test_pipeline()
        .search_text(&format!("{}/wiki/Rust", server.uri()), "PROJECT")
        .await
        .unwrap();

    assert_eq!(
        result,
        ExtractionResult::TextMatches(vec!["Rust began as a personal project.".to_string()])
    );
}

#[tokio::test]
async fn test_search_empty_keyword_single_text_node() {
    let server = MockServer::start().await;
    mount_robots(&server, "").await;
    mount_page(&server, "/single", "<html><body><p>Lone text</p></body></html>", 1).await;

    let result = test_pipeline()
        .search_text(&format!("{}/single", server.uri()), "")
        .await
        .unwrap();

    assert_eq!(
        result,
        ExtractionResult::TextMatches(vec!["Lone text".to_string()])
    );
}

#[tokio::test]
async fn test_count_matches_select() {
    let server = MockServer::start().await;
    mount_robots(&server, "").await;
    mount_page(&server, "/wiki/Rust", ARTICLE, 2).await;

    let pipeline = test_pipeline();
    let url = format!("{}/wiki/Rust", server.uri());

    let count = pipeline.count_elements(&url, "A").await.unwrap();
    let selected = pipeline.select(&url, "a").await.unwrap();

    assert_eq!(count, ExtractionResult::ElementCount(5));
    assert_eq!(selected.len(), 5);
}

#[tokio::test]
async fn test_invalid_selector_fails_before_fetch() {
    let server = MockServer::start().await;

    let err = test_pipeline()
        .select(&format!("{}/wiki/Rust", server.uri()), "p[")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        GleanError::Document(DocumentError::Selector { .. })
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_transient_failure_recovers() {
    let server = MockServer::start().await;
    mount_robots(&server, "").await;
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_page(&server, "/flaky", "<h1>Back</h1>", 1).await;

    let summary = test_pipeline()
        .extract_all(&format!("{}/flaky", server.uri()))
        .await
        .unwrap();

    assert_eq!(summary.headlines, vec!["Back"]);
    assert_eq!(hits(&server, "/flaky").await, 2);
}

#[tokio::test]
async fn test_retries_exhausted() {
    let server = MockServer::start().await;
    mount_robots(&server, "").await;
    Mock::given(method("GET"))
        .and(path("/down"))
        .respond_with(ResponseTemplate::new(500))
        .expect(4)
        .mount(&server)
        .await;

    let err = test_pipeline()
        .extract_links(&format!("{}/down", server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, GleanError::Network { attempts: 4, .. }));
}

#[tokio::test]
async fn test_non_200_success_not_parsed() {
    let server = MockServer::start().await;
    mount_robots(&server, "").await;
    Mock::given(method("GET"))
        .and(path("/partial"))
        .respond_with(ResponseTemplate::new(203).set_body_string("<h1>Cached</h1>"))
        .mount(&server)
        .await;

    let err = test_pipeline()
        .extract_all(&format!("{}/partial", server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, GleanError::UnexpectedStatus { status: 203, .. }));
}

#[tokio::test]
async fn test_binary_body_is_parse_error() {
    let server = MockServer::start().await;
    mount_robots(&server, "").await;
    Mock::given(method("GET"))
        .and(path("/image"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x89, b'P', b'N', b'G', 0, 0, 0, 13]))
        .mount(&server)
        .await;

    let err = test_pipeline()
        .count_elements(&format!("{}/image", server.uri()), "p")
        .await
        .unwrap_err();

    assert!(matches!(err, GleanError::HtmlParse { .. }));
}

#[tokio::test]
async fn test_invalid_url_rejected() {
    let err = test_pipeline()
        .extract_all("ftp://example.com/file")
        .await
        .unwrap_err();
    assert!(matches!(err, GleanError::UrlError(_)));
}

#[tokio::test]
async fn test_declared_charset_is_honoured() {
    let server = MockServer::start().await;
    mount_robots(&server, "").await;
    Mock::given(method("GET"))
        .and(path("/latin1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            b"<html><body><p>caf\xe9 cr\xe8me</p></body></html>".to_vec(),
            "text/html; charset=iso-8859-1",
        ))
        .mount(&server)
        .await;

    let result = test_pipeline()
        .search_text(&format!("{}/latin1", server.uri()), "café")
        .await
        .unwrap();

    assert_eq!(
        result,
        ExtractionResult::TextMatches(vec!["café crème".to_string()])
    );
}

#[tokio::test]
async fn test_utf16_page_with_bom_is_parsed() {
    let server = MockServer::start().await;
    mount_robots(&server, "").await;

    let mut body = vec![0xFF, 0xFE];
    for unit in "<h1>Überblick</h1><a href=\"/wiki/Zürich\">Zürich</a>".encode_utf16() {
        body.extend_from_slice(&unit.to_le_bytes());
    }
    Mock::given(method("GET"))
        .and(path("/utf16"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html"))
        .mount(&server)
        .await;

    let summary = test_pipeline()
        .extract_all(&format!("{}/utf16", server.uri()))
        .await
        .unwrap();

    assert_eq!(summary.headlines, vec!["Überblick"]);
    assert_eq!(summary.links[0].href, "/wiki/Zürich");
}
