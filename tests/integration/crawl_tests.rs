//! Integration tests for the crawler
//!
//! These tests use wiremock to serve a sitemap and its pages and run the full
//! crawl end-to-end, checking the output file that comes out the other side.

use irs_pdf_crawler::config::Config;
use irs_pdf_crawler::crawler::{run_crawl, Coordinator};
use irs_pdf_crawler::CrawlerError;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointing at the mock server's sitemap
fn create_test_config(base_url: &str, output_path: PathBuf) -> Config {
    Config {
        sitemap_url: format!("{}/sitemap.xml", base_url),
        politeness_delay_ms: 0,
        page_timeout_secs: 5,
        output_path,
        user_agent: "TestBot/1.0.0".to_string(),
        show_progress: false,
    }
}

/// Builds a sitemap document listing the given URLs
fn sitemap_xml(urls: &[String]) -> String {
    let entries: String = urls
        .iter()
        .map(|url| format!("  <url><loc>{}</loc></url>\n", url))
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{}</urlset>\n",
        entries
    )
}

async fn mount_sitemap(server: &MockServer, urls: &[String]) {
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sitemap_xml(urls)))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_page(server: &MockServer, page_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body.to_string())
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(server)
        .await;
}

fn read_lines(output_path: &Path) -> Vec<String> {
    std::fs::read_to_string(output_path)
        .expect("Failed to read output")
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_two_pages_with_shared_link() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_sitemap(
        &mock_server,
        &[format!("{}/a", base_url), format!("{}/b", base_url)],
    )
    .await;
    mount_page(
        &mock_server,
        "/a",
        r#"<html><body><a href="x.pdf">X</a></body></html>"#,
    )
    .await;
    mount_page(
        &mock_server,
        "/b",
        r#"<html><body><a href="y.pdf">Y</a><a href="/x.pdf">X again</a></body></html>"#,
    )
    .await;

    let dir = tempdir().unwrap();
    let output_path = dir.path().join("output").join("irs_pdf_links.txt");
    let report = run_crawl(create_test_config(&base_url, output_path.clone()))
        .await
        .expect("Crawl failed");

    assert_eq!(
        read_lines(&output_path),
        vec![format!("{}/x.pdf", base_url), format!("{}/y.pdf", base_url)]
    );
    assert_eq!(report.statistics.pages_visited, 2);
    assert_eq!(report.statistics.unique_pdfs, 2);
    assert_eq!(report.output_path, output_path);
}

#[tokio::test]
async fn test_every_sitemap_entry_is_visited_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let pages: Vec<String> = (0..5).map(|i| format!("{}/page{}", base_url, i)).collect();
    mount_sitemap(&mock_server, &pages).await;
    for i in 0..5 {
        mount_page(
            &mock_server,
            &format!("/page{}", i),
            &format!(r#"<a href="/docs/p{}.pdf">doc</a>"#, i),
        )
        .await;
    }

    let dir = tempdir().unwrap();
    let report = run_crawl(create_test_config(&base_url, dir.path().join("links.txt")))
        .await
        .expect("Crawl failed");

    assert_eq!(report.statistics.pages_in_sitemap, 5);
    assert_eq!(report.statistics.pages_visited, 5);
    assert_eq!(report.results.len(), 5);

    // Each page mock expects exactly one request; verified here and on drop
    mock_server.verify().await;
}

#[tokio::test]
async fn test_unreachable_page_does_not_stop_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_sitemap(
        &mock_server,
        &[
            format!("{}/first", base_url),
            "http://127.0.0.1:9/unreachable".to_string(),
            format!("{}/last", base_url),
        ],
    )
    .await;
    mount_page(&mock_server, "/first", r#"<a href="/one.pdf">1</a>"#).await;
    mount_page(&mock_server, "/last", r#"<a href="/two.PDF">2</a>"#).await;

    let dir = tempdir().unwrap();
    let output_path = dir.path().join("links.txt");
    let report = run_crawl(create_test_config(&base_url, output_path.clone()))
        .await
        .expect("Crawl failed");

    assert_eq!(report.statistics.pages_visited, 3);
    assert_eq!(report.statistics.pages_failed, 1);
    assert_eq!(
        read_lines(&output_path),
        vec![format!("{}/one.pdf", base_url), format!("{}/two.PDF", base_url)]
    );
}

#[tokio::test]
async fn test_slow_page_times_out_and_crawl_continues() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_sitemap(
        &mock_server,
        &[format!("{}/slow", base_url), format!("{}/fast", base_url)],
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"<a href="/late.pdf">late</a>"#)
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/fast", r#"<a href="/fast.pdf">fast</a>"#).await;

    let dir = tempdir().unwrap();
    let output_path = dir.path().join("links.txt");
    let mut config = create_test_config(&base_url, output_path.clone());
    config.page_timeout_secs = 1;

    let report = run_crawl(config).await.expect("Crawl failed");

    assert_eq!(report.statistics.pages_failed, 1);
    assert_eq!(read_lines(&output_path), vec![format!("{}/fast.pdf", base_url)]);
}

#[tokio::test]
async fn test_malformed_sitemap_is_fatal_and_writes_nothing() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"><url><loc>x</url>"#,
        ))
        .mount(&mock_server)
        .await;

    let dir = tempdir().unwrap();
    let output_path = dir.path().join("output").join("links.txt");
    let result = run_crawl(create_test_config(&base_url, output_path.clone())).await;

    assert!(matches!(result, Err(CrawlerError::Sitemap { .. })));
    assert!(!output_path.exists());
}

#[tokio::test]
async fn test_missing_sitemap_is_fatal() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let dir = tempdir().unwrap();
    let output_path = dir.path().join("links.txt");
    let result = run_crawl(create_test_config(&base_url, output_path.clone())).await;

    assert!(matches!(result, Err(CrawlerError::Http { .. })));
    assert!(!output_path.exists());
}

#[tokio::test]
async fn test_repeated_runs_produce_identical_output() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let pages = vec![format!("{}/forms", base_url), format!("{}/pubs", base_url)];
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sitemap_xml(&pages)))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forms"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<a href="/pub/irs-pdf/fw4.pdf">W-4</a><a href="/pub/irs-pdf/f1040.pdf">1040</a>"#,
        ))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pubs"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"<a href="/pub/irs-pdf/p17.pdf">17</a>"#),
        )
        .mount(&mock_server)
        .await;

    let dir = tempdir().unwrap();
    let output_path = dir.path().join("output").join("links.txt");
    let coordinator = Coordinator::new(create_test_config(&base_url, output_path.clone()))
        .expect("Failed to create coordinator");

    coordinator.run().await.expect("First crawl failed");
    let first = std::fs::read(&output_path).unwrap();
    coordinator.run().await.expect("Second crawl failed");
    let second = std::fs::read(&output_path).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        String::from_utf8(first).unwrap(),
        format!(
            "{0}/pub/irs-pdf/f1040.pdf\n{0}/pub/irs-pdf/fw4.pdf\n{0}/pub/irs-pdf/p17.pdf\n",
            base_url
        )
    );
}

#[tokio::test]
async fn test_politeness_delay_paces_pages() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let pages: Vec<String> = (0..3).map(|i| format!("{}/p{}", base_url, i)).collect();
    mount_sitemap(&mock_server, &pages).await;
    for i in 0..3 {
        mount_page(&mock_server, &format!("/p{}", i), "<html></html>").await;
    }

    let dir = tempdir().unwrap();
    let mut config = create_test_config(&base_url, dir.path().join("links.txt"));
    config.politeness_delay_ms = 100;

    let start = std::time::Instant::now();
    run_crawl(config).await.expect("Crawl failed");

    assert!(start.elapsed() >= std::time::Duration::from_millis(300));
}
