//! Integration tests for routing and page rendering.

use papershelf::pages::PageContext;
use papershelf::router::Router;
use papershelf::PaperApi;

/// All four navigable paths resolve to their named routes
#[test]
fn test_route_table() {
    let router = Router::new();

    for (path, name) in [
        ("/", "home"),
        ("/papers", "papers"),
        ("/papers/2401.12345v1", "paper-detail"),
        ("/stats", "stats"),
    ] {
        let matched = router.resolve(path).unwrap_or_else(|| panic!("{} did not resolve", path));
        assert_eq!(matched.route.name(), name);
    }

    assert!(router.resolve("/subscriptions").is_none());
}

/// Navigating to a detail path resolves paper-detail without constructing
/// the papers list page
#[test]
fn test_detail_navigation_is_lazy() {
    let mut router = Router::new();
    let (page, params) = router.navigate("/papers/abc123").unwrap();

    assert_eq!(page.name(), "paper-detail");
    assert_eq!(params.get("id").map(String::as_str), Some("abc123"));
    assert!(router.route("paper-detail").unwrap().is_loaded());
    assert!(!router.route("papers").unwrap().is_loaded());
}

/// The paper-detail page fetches exactly the paper named by the route
/// parameter and renders its record
#[tokio::test]
async fn test_paper_detail_page_renders_fetched_paper() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/papers/2401.12345v1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "arxiv_id": "2401.12345",
                "version": "v1",
                "unique_key": "2401.12345v1",
                "title": "Routing Considered Helpful",
                "authors": ["A. Author", "B. Author"],
                "abstract": "We route.",
                "categories": ["cs.NI"],
                "published": "2024-01-20 10:00:00",
                "updated": null,
                "pdf_url": "https://arxiv.org/pdf/2401.12345v1",
                "source_url": "https://arxiv.org/abs/2401.12345v1"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut router = Router::new();
    let (page, params) = router.navigate("/papers/2401.12345v1").unwrap();

    let api = PaperApi::new(server.url()).unwrap();
    let view = page
        .render(&PageContext::with_params(api, params))
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(view.contains("Routing Considered Helpful"));
    assert!(view.contains("A. Author, B. Author"));
    assert!(view.contains("We route."));
}

/// The stats page renders the aggregate snapshot
#[tokio::test]
async fn test_stats_page_renders_snapshot() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/stats")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "total_papers": 4,
                "db_size_bytes": 2097152,
                "db_size_mb": 2.0,
                "categories": {"cs.NI": 4}
            }"#,
        )
        .create_async()
        .await;

    let mut router = Router::new();
    let (page, params) = router.navigate("/stats").unwrap();

    let api = PaperApi::new(server.url()).unwrap();
    let view = page
        .render(&PageContext::with_params(api, params))
        .await
        .unwrap();

    assert!(view.contains("2.00 MB"));
    assert!(view.contains("cs.NI"));
}

/// The home page combines the stats snapshot with a short recent listing
#[tokio::test]
async fn test_home_page_renders_overview() {
    let mut server = mockito::Server::new_async().await;
    let _stats_mock = server
        .mock("GET", "/stats")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"total_papers": 1, "db_size_bytes": 1024, "db_size_mb": 0.0, "categories": {}}"#,
        )
        .create_async()
        .await;
    let list_mock = server
        .mock("GET", "/papers")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("limit".into(), "5".into()),
            mockito::Matcher::UrlEncoded("offset".into(), "0".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "papers": [{
                    "arxiv_id": "2401.77777",
                    "version": "v1",
                    "unique_key": "2401.77777v1",
                    "title": "Fresh Off The Wire",
                    "authors": ["C. Author"],
                    "abstract": "",
                    "categories": ["cs.LG"],
                    "published": "2024-02-01 09:00:00",
                    "updated": null,
                    "pdf_url": "",
                    "source_url": ""
                }],
                "total": 1,
                "limit": 5,
                "offset": 0
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut router = Router::new();
    let (page, params) = router.navigate("/").unwrap();

    let api = PaperApi::new(server.url()).unwrap();
    let view = page
        .render(&PageContext::with_params(api, params))
        .await
        .unwrap();

    list_mock.assert_async().await;
    assert!(view.contains("1 papers stored"));
    assert!(view.contains("Fresh Off The Wire"));
}

/// A failed fetch propagates out of the page instead of rendering a
/// defaulted view
#[tokio::test]
async fn test_page_propagates_fetch_errors() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/stats")
        .with_status(503)
        .with_body("warming up")
        .create_async()
        .await;

    let mut router = Router::new();
    let (page, params) = router.navigate("/stats").unwrap();

    let api = PaperApi::new(server.url()).unwrap();
    let result = page.render(&PageContext::with_params(api, params)).await;

    assert!(result.is_err());
}
