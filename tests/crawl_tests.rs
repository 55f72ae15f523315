//! Integration tests for the crawler
//!
//! These tests use wiremock to stand up mock documentation sites and run
//! the full crawl cycle end-to-end, checking the produced file set and
//! the run summary.

use docmirror::config::{Config, ContentConfig, FetchConfig, OutputConfig, SiteConfig};
use docmirror::crawler::crawl;
use std::collections::BTreeSet;
use std::path::Path;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointed at a mock server
fn create_test_config(base_url: &str, output_dir: &Path) -> Config {
    Config {
        site: SiteConfig {
            base_url: base_url.to_string(),
            source_library: "Test Library".to_string(),
            skip_substrings: vec![".pdf".to_string(), ".zip".to_string(), ".tar".to_string()],
            exclude_paths: vec![],
        },
        fetch: FetchConfig::default(),
        content: ContentConfig::default(),
        output: OutputConfig {
            directory: output_dir.display().to_string(),
        },
    }
}

/// Wraps a body in the Docusaurus-style content container the default
/// selectors look for
fn doc_page(title: &str, content: &str) -> String {
    format!(
        r#"<html><head><title>{}</title></head><body>
        <nav><a href="/">Home</a></nav>
        <div class="docItemContainer_node">{}</div>
        </body></html>"#,
        title, content
    )
}

/// Mounts a 200 text/html response for the given path
async fn mount_page(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Lists the file names present in the output directory
fn output_files(dir: &Path) -> BTreeSet<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[tokio::test]
async fn test_full_crawl_produces_expected_file_set() {
    let mock_server = MockServer::start().await;
    let output = tempfile::tempdir().unwrap();

    mount_page(
        &mock_server,
        "/",
        doc_page(
            "Home | Test",
            r#"<h1>Home</h1>
            <a href="/docs/guide">Guide</a>
            <a href="/docs/api">API</a>"#,
        ),
    )
    .await;

    mount_page(
        &mock_server,
        "/docs/guide",
        doc_page(
            "Guide | Test",
            r#"<h1>Guide</h1><a href="/docs/api">API</a><a href="/">Back</a>"#,
        ),
    )
    .await;

    mount_page(
        &mock_server,
        "/docs/api",
        doc_page("API | Test", "<h1>API</h1><p>Reference.</p>"),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), output.path());
    let summary = crawl(config).await.unwrap();

    assert_eq!(summary.pages_visited, 3);
    assert_eq!(summary.pages_saved, 3);
    assert_eq!(summary.total_failures(), 0);

    let expected: BTreeSet<String> = ["index.md", "docs__guide.md", "docs__api.md"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(output_files(output.path()), expected);
}

#[tokio::test]
async fn test_output_file_contents() {
    let mock_server = MockServer::start().await;
    let output = tempfile::tempdir().unwrap();

    mount_page(
        &mock_server,
        "/",
        doc_page(
            "Rooms API | Colyseus",
            "<h2>On this page</h2><h1>Rooms</h1><p>Room lifecycle.</p>",
        ),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), output.path());
    crawl(config).await.unwrap();

    let content = std::fs::read_to_string(output.path().join("index.md")).unwrap();

    // Frontmatter fields
    assert!(content.starts_with("---\n"));
    assert!(content.contains("title: \"Rooms API\""));
    assert!(content.contains(&format!("source_url: \"{}/\"", mock_server.uri())));
    assert!(content.contains("source_library: \"Test Library\""));
    assert!(content.contains("path_key: \"/\""));

    // Converted body, with the boilerplate heading cleaned away
    assert!(content.contains("Rooms"));
    assert!(content.contains("Room lifecycle."));
    assert!(!content.to_lowercase().contains("on this page"));
}

#[tokio::test]
async fn test_fetch_failure_does_not_stop_siblings() {
    let mock_server = MockServer::start().await;
    let output = tempfile::tempdir().unwrap();

    mount_page(
        &mock_server,
        "/",
        doc_page(
            "Home | Test",
            r#"<a href="/missing">Missing</a><a href="/alive">Alive</a>"#,
        ),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    mount_page(
        &mock_server,
        "/alive",
        doc_page("Alive | Test", "<p>Still here.</p>"),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), output.path());
    let summary = crawl(config).await.unwrap();

    assert_eq!(summary.pages_visited, 3);
    assert_eq!(summary.pages_saved, 2);
    assert_eq!(summary.fetch_failures, 1);

    let files = output_files(output.path());
    assert!(files.contains("index.md"));
    assert!(files.contains("alive.md"));
    assert!(!files.contains("missing.md"));
}

#[tokio::test]
async fn test_fragment_variants_fetch_target_once() {
    let mock_server = MockServer::start().await;
    let output = tempfile::tempdir().unwrap();

    mount_page(
        &mock_server,
        "/",
        doc_page(
            "Home | Test",
            r#"<a href="/guide#intro">Intro</a><a href="/guide#setup">Setup</a>"#,
        ),
    )
    .await;

    // The target must be requested exactly once despite two fragment
    // variants linking to it
    Mock::given(method("GET"))
        .and(path("/guide"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(doc_page("Guide | Test", "<p>Guide.</p>"))
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), output.path());
    let summary = crawl(config).await.unwrap();

    assert_eq!(summary.pages_visited, 2);
    assert_eq!(summary.pages_saved, 2);
}

#[tokio::test]
async fn test_same_page_anchors_and_non_documents_not_fetched() {
    let mock_server = MockServer::start().await;
    let output = tempfile::tempdir().unwrap();

    mount_page(
        &mock_server,
        "/",
        doc_page(
            "Home | Test",
            r#"<a href="/#section">Anchor</a>
            <a href="/release.zip">Download</a>
            <a href="https://elsewhere.example.org/page">External</a>"#,
        ),
    )
    .await;

    // Never requested: non-document resource
    Mock::given(method("GET"))
        .and(path("/release.zip"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), output.path());
    let summary = crawl(config).await.unwrap();

    // Only the seed itself is processed
    assert_eq!(summary.pages_visited, 1);
    assert_eq!(summary.pages_saved, 1);
    assert_eq!(output_files(output.path()).len(), 1);
}

#[tokio::test]
async fn test_excluded_path_not_fetched() {
    let mock_server = MockServer::start().await;
    let output = tempfile::tempdir().unwrap();

    mount_page(
        &mock_server,
        "/",
        doc_page(
            "Home | Test",
            r#"<a href="/blog/post">Post</a><a href="/docs">Docs</a>"#,
        ),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/blog/post"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    mount_page(&mock_server, "/docs", doc_page("Docs | Test", "<p>Docs.</p>")).await;

    let mut config = create_test_config(&mock_server.uri(), output.path());
    config.site.exclude_paths = vec!["/blog/".to_string()];

    let summary = crawl(config).await.unwrap();
    assert_eq!(summary.pages_visited, 2);
}

#[tokio::test]
async fn test_extraction_miss_skips_page_and_its_links() {
    let mock_server = MockServer::start().await;
    let output = tempfile::tempdir().unwrap();

    mount_page(
        &mock_server,
        "/",
        doc_page("Home | Test", r#"<a href="/bare">Bare</a>"#),
    )
    .await;

    // No content container, but it does carry a link that must not be
    // followed
    mount_page(
        &mock_server,
        "/bare",
        r#"<html><head><title>Bare</title></head><body>
        <main><a href="/hidden">Hidden</a></main>
        </body></html>"#
            .to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/hidden"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), output.path());
    let summary = crawl(config).await.unwrap();

    assert_eq!(summary.pages_visited, 2);
    assert_eq!(summary.pages_saved, 1);
    assert_eq!(summary.extraction_misses, 1);
    assert!(!output_files(output.path()).contains("bare.md"));
}

#[tokio::test]
async fn test_page_limit_stops_expansion() {
    let mock_server = MockServer::start().await;
    let output = tempfile::tempdir().unwrap();

    mount_page(
        &mock_server,
        "/",
        doc_page(
            "Home | Test",
            r#"<a href="/a">A</a><a href="/b">B</a>"#,
        ),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(&mock_server.uri(), output.path());
    config.fetch.max_pages = Some(1);

    let summary = crawl(config).await.unwrap();

    assert_eq!(summary.pages_visited, 1);
    assert_eq!(summary.pages_saved, 1);
    assert_eq!(summary.queued_remaining, 2);
}

#[tokio::test]
async fn test_rerun_is_byte_identical() {
    let mock_server = MockServer::start().await;
    let output = tempfile::tempdir().unwrap();

    mount_page(
        &mock_server,
        "/",
        doc_page("Home | Test", r#"<h1>Home</h1><a href="/docs/api">API</a>"#),
    )
    .await;

    mount_page(
        &mock_server,
        "/docs/api",
        doc_page("API | Test", "<h1>API</h1>"),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), output.path());

    crawl(config.clone()).await.unwrap();
    let first: Vec<(String, String)> = output_files(output.path())
        .into_iter()
        .map(|name| {
            let content = std::fs::read_to_string(output.path().join(&name)).unwrap();
            (name, content)
        })
        .collect();

    crawl(config).await.unwrap();
    let second: Vec<(String, String)> = output_files(output.path())
        .into_iter()
        .map(|name| {
            let content = std::fs::read_to_string(output.path().join(&name)).unwrap();
            (name, content)
        })
        .collect();

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[tokio::test]
async fn test_cyclic_link_graph_terminates() {
    let mock_server = MockServer::start().await;
    let output = tempfile::tempdir().unwrap();

    // /loop-a and /loop-b link to each other, and both link back to the
    // root
    mount_page(
        &mock_server,
        "/",
        doc_page("Home | Test", r#"<a href="/loop-a">A</a>"#),
    )
    .await;

    mount_page(
        &mock_server,
        "/loop-a",
        doc_page("A | Test", r#"<a href="/loop-b">B</a><a href="/">Home</a>"#),
    )
    .await;

    mount_page(
        &mock_server,
        "/loop-b",
        doc_page("B | Test", r#"<a href="/loop-a">A</a><a href="/">Home</a>"#),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), output.path());
    let summary = crawl(config).await.unwrap();

    assert_eq!(summary.pages_visited, 3);
    assert_eq!(summary.pages_saved, 3);
}

#[tokio::test]
async fn test_html_extension_collapses_to_same_file() {
    let mock_server = MockServer::start().await;
    let output = tempfile::tempdir().unwrap();

    mount_page(
        &mock_server,
        "/",
        doc_page("Home | Test", r#"<a href="/docs/api.html">API</a>"#),
    )
    .await;

    mount_page(
        &mock_server,
        "/docs/api.html",
        doc_page("API | Test", "<h1>API</h1>"),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), output.path());
    crawl(config).await.unwrap();

    let files = output_files(output.path());
    assert!(files.contains("docs__api.md"));
    assert!(!files.contains("docs__api.html.md"));
}
