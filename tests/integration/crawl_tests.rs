//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use contact_sweep::config::Config;
use contact_sweep::crawler::{crawl_with_config, Coordinator};
use contact_sweep::CrawlResult;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Upper bound on any single crawl in this suite
const CRAWL_DEADLINE: Duration = Duration::from_secs(30);

/// Creates a test configuration that writes into `results_dir`
fn create_test_config(max_pages: usize, concurrency: usize, results_dir: &TempDir) -> Config {
    let mut config = Config::with_limits(max_pages, concurrency);
    config.crawler.request_timeout = 2;
    config.output.results_dir = results_dir.path().display().to_string();
    config.output.print_stdout = false;
    config
}

fn html_page(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!(
            "<html><head><title>Test</title></head><body>{}</body></html>",
            body
        ))
        .insert_header("content-type", "text/html")
}

async fn mount_page(server: &MockServer, page: &str, body: &str, expected_fetches: u64) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(html_page(body))
        .expect(expected_fetches)
        .mount(server)
        .await;
}

async fn run_crawl(start_url: &str, config: Config) -> CrawlResult {
    let coordinator = Coordinator::new(start_url, config).expect("Failed to create coordinator");
    tokio::time::timeout(CRAWL_DEADLINE, coordinator.run())
        .await
        .expect("Crawl did not terminate")
}

#[tokio::test]
async fn test_two_page_site_with_external_link() {
    let site = MockServer::start().await;
    let external = MockServer::start().await;

    mount_page(
        &site,
        "/",
        &format!(
            r#"<p>Write to owner@example.com</p>
            <a href="/b">Page B</a>
            <a href="{}/c">Partner</a>"#,
            external.uri()
        ),
        1,
    )
    .await;
    mount_page(&site, "/b", "<p>Call +1 (415) 555-2671</p>", 1).await;
    mount_page(&external, "/c", "<p>never@external.com</p>", 0).await;

    let results_dir = TempDir::new().unwrap();
    let config = create_test_config(10, 2, &results_dir);
    let start_url = format!("{}/", site.uri());

    let result = tokio::time::timeout(CRAWL_DEADLINE, crawl_with_config(&start_url, &config))
        .await
        .expect("Crawl did not terminate")
        .expect("Crawl failed");

    assert_eq!(result.url, start_url);
    assert_eq!(result.emails, vec!["owner@example.com".to_string()]);
    assert_eq!(result.phones, vec!["+14155552671".to_string()]);

    // Persisted under the domain-derived file name
    let port = url::Url::parse(&site.uri()).unwrap().port().unwrap();
    let file = results_dir.path().join(format!("127.0.0.1_{}.json", port));
    let written: CrawlResult =
        serde_json::from_str(&std::fs::read_to_string(&file).expect("Result file missing"))
            .unwrap();
    assert_eq!(written, result);
}

#[tokio::test]
async fn test_each_url_fetched_at_most_once() {
    let site = MockServer::start().await;

    // Every page links to every other page, itself included
    let links = r#"<a href="/">home</a><a href="/a">a</a><a href="/b">b</a>
        <a href="/c">c</a><a href="/c#top">c again</a><a href="c?">c query</a>"#;

    mount_page(&site, "/", &format!("home@example.com {}", links), 1).await;
    mount_page(&site, "/a", &format!("a@example.com {}", links), 1).await;
    mount_page(&site, "/b", &format!("b@example.com {}", links), 1).await;
    Mock::given(method("GET"))
        .and(path("/c"))
        .respond_with(html_page(&format!("c@example.com {}", links)))
        // "/c" and "/c?" are distinct URLs
        .expect(2)
        .mount(&site)
        .await;

    let results_dir = TempDir::new().unwrap();
    let result = run_crawl(&format!("{}/", site.uri()), create_test_config(50, 4, &results_dir)).await;

    assert_eq!(
        result.emails,
        vec![
            "a@example.com".to_string(),
            "b@example.com".to_string(),
            "c@example.com".to_string(),
            "home@example.com".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_single_page_budget() {
    let site = MockServer::start().await;

    mount_page(
        &site,
        "/",
        r#"first@example.com <a href="/b">b</a> <a href="/c">c</a>"#,
        1,
    )
    .await;
    mount_page(&site, "/b", "second@example.com", 0).await;
    mount_page(&site, "/c", "third@example.com", 0).await;

    let results_dir = TempDir::new().unwrap();
    let result = run_crawl(&format!("{}/", site.uri()), create_test_config(1, 3, &results_dir)).await;

    assert_eq!(result.emails, vec!["first@example.com".to_string()]);
    assert!(result.phones.is_empty());
}

#[tokio::test]
async fn test_budget_bounds_fetch_count() {
    let site = MockServer::start().await;

    let index: String = (0..8)
        .map(|i| format!(r#"<a href="/p{}">p{}</a>"#, i, i))
        .collect();
    mount_page(&site, "/", &index, 1).await;
    Mock::given(method("GET"))
        .respond_with(html_page("leaf"))
        .mount(&site)
        .await;

    let results_dir = TempDir::new().unwrap();
    run_crawl(&format!("{}/", site.uri()), create_test_config(3, 4, &results_dir)).await;

    let requests = site.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn test_start_url_times_out() {
    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(html_page("late@example.com").set_delay(Duration::from_secs(5)))
        .mount(&site)
        .await;

    let results_dir = TempDir::new().unwrap();
    let mut config = create_test_config(10, 2, &results_dir);
    config.crawler.request_timeout = 1;

    let result = run_crawl(&site.uri(), config).await;

    assert!(result.emails.is_empty());
    assert!(result.phones.is_empty());
}

#[tokio::test]
async fn test_failed_pages_do_not_stop_crawl() {
    let site = MockServer::start().await;

    mount_page(
        &site,
        "/",
        r#"<a href="/missing">gone</a><a href="/broken">broken</a><a href="/ok">ok</a>"#,
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&site)
        .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&site)
        .await;
    mount_page(&site, "/ok", "Reach +44 20 7946 0958 or desk@example.com", 1).await;

    let results_dir = TempDir::new().unwrap();
    let result = run_crawl(&format!("{}/", site.uri()), create_test_config(10, 2, &results_dir)).await;

    assert_eq!(result.emails, vec!["desk@example.com".to_string()]);
    assert_eq!(result.phones, vec!["+442079460958".to_string()]);
}

#[tokio::test]
async fn test_results_sorted_and_unique() {
    let site = MockServer::start().await;

    mount_page(
        &site,
        "/",
        r#"zoe@example.com amy@example.com +33 1 42 68 53 00 <a href="/more">more</a>"#,
        1,
    )
    .await;
    mount_page(
        &site,
        "/more",
        "amy@example.com mia@example.com +1 (415) 555-2671 +33 1 42 68 53 00",
        1,
    )
    .await;

    let results_dir = TempDir::new().unwrap();
    let result = run_crawl(&format!("{}/", site.uri()), create_test_config(10, 3, &results_dir)).await;

    assert_eq!(
        result.emails,
        vec![
            "amy@example.com".to_string(),
            "mia@example.com".to_string(),
            "zoe@example.com".to_string(),
        ]
    );
    assert_eq!(
        result.phones,
        vec!["+14155552671".to_string(), "+33142685300".to_string()]
    );
}

#[tokio::test]
async fn test_invalid_start_url_is_rejected() {
    let results_dir = TempDir::new().unwrap();
    let config = create_test_config(10, 2, &results_dir);

    assert!(crawl_with_config("not a url", &config).await.is_err());
    assert!(crawl_with_config("mailto:someone@example.com", &config)
        .await
        .is_err());
}
