//! `ContentExtractor` against a local `wiremock` server.

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use funnelscope_core::Heading;
use funnelscope_extract::{ContentExtractor, ContentSource, ExtractError, ExtractionOutcome};

fn test_extractor() -> ContentExtractor {
    ContentExtractor::new(5, "funnelscope-test/0.1").expect("failed to build test extractor")
}

const ARTICLE: &str = r"<html><head><script>ignored()</script></head>
<body>
<nav>Menu</nav>
<h1>What is content marketing?</h1>
<p>A beginner guide to the basics.</p>
<h2>Getting started</h2>
<p>Start with 3 posts a week.</p>
<footer>All rights reserved</footer>
</body></html>";

#[tokio::test]
async fn fetch_url_returns_text_and_headings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blog/post"))
        .and(header("user-agent", "funnelscope-test/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ARTICLE))
        .mount(&server)
        .await;

    let url = format!("{}/blog/post", server.uri());
    let content = test_extractor().fetch_url(&url).await.unwrap();

    assert_eq!(content.source, url);
    assert!(content.content.contains("A beginner guide to the basics."));
    assert!(!content.content.contains("Menu"));
    assert!(!content.content.contains("ignored"));
    assert!(!content.content.contains("All rights reserved"));
    assert_eq!(
        content.headings,
        vec![
            Heading::new("h1", "What is content marketing?"),
            Heading::new("h2", "Getting started"),
        ]
    );
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/missing", server.uri());
    let err = test_extractor().fetch_url(&url).await.unwrap_err();
    assert!(
        matches!(err, ExtractError::UnexpectedStatus { status: 404, .. }),
        "expected UnexpectedStatus, got: {err:?}"
    );
}

#[tokio::test]
async fn page_with_only_chrome_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<nav>Home</nav><script>x()</script>"),
        )
        .mount(&server)
        .await;

    let err = test_extractor().fetch_url(&server.uri()).await.unwrap_err();
    assert!(matches!(err, ExtractError::Empty { .. }));
}

#[tokio::test]
async fn extract_outcome_turns_errors_into_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let outcome = test_extractor()
        .extract_outcome(&ContentSource::Url(server.uri()))
        .await;
    match outcome {
        ExtractionOutcome::Failure { error } => assert!(error.contains("500"), "{error}"),
        ExtractionOutcome::Success(_) => panic!("expected failure"),
    }
}

#[tokio::test]
async fn extract_outcome_passes_text_through() {
    let outcome = test_extractor()
        .extract_outcome(&ContentSource::Text("pasted copy".to_string()))
        .await;
    let content = outcome.into_result().unwrap();
    assert_eq!(content.content, "pasted copy");
    assert_eq!(content.source, "Direct Text Input");
}
