use std::time::Duration;

use ibay_core::{
    fetch::{follow_up, FollowUp},
    CategoryId, FetchConfig, FetchError, Fetcher,
};
use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn fetcher(server: &MockServer, max_attempts: u32) -> Fetcher {
    let config = FetchConfig::builder()
        .base_url(format!("{}/index.php", server.uri()))
        .max_attempts(max_attempts)
        .timeout(Duration::from_millis(500))
        .min_delay(Duration::ZERO)
        .max_delay(Duration::from_millis(5))
        .build();

    Fetcher::new(config).unwrap()
}

fn listing(id: &str) -> wiremock::MockBuilder {
    Mock::given(method("GET"))
        .and(path("/index.php"))
        .and(query_param("page", "cat_ajax"))
        .and(query_param("id", id))
}

#[tokio::test]
async fn returns_listing_unchanged() {
    let server = MockServer::start().await;
    let body = json!([{"5501": "Full Time"}, {"5502": "Part Time"}, {"5503": "Internship"}]);

    listing("55")
        .and(header("User-Agent", "Mozilla/5.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let node = fetcher(&server, 5).fetch(&CategoryId::from("55")).await;

    assert_eq!(serde_json::to_value(&node).unwrap(), body);
}

#[tokio::test]
async fn gives_up_after_max_attempts() {
    let server = MockServer::start().await;

    listing("600")
        .respond_with(ResponseTemplate::new(500))
        .expect(5)
        .mount(&server)
        .await;

    let node = fetcher(&server, 5).fetch(&CategoryId::from("600")).await;

    assert!(node.is_empty());
    server.verify().await;
}

#[tokio::test]
async fn custom_attempt_limit() {
    let server = MockServer::start().await;

    listing("19")
        .respond_with(ResponseTemplate::new(404))
        .expect(2)
        .mount(&server)
        .await;

    assert!(fetcher(&server, 2).fetch(&CategoryId::from("19")).await.is_empty());
}

#[tokio::test]
async fn zero_attempts_sends_nothing() {
    let server = MockServer::start().await;

    listing("19")
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&server)
        .await;

    assert!(fetcher(&server, 0).fetch(&CategoryId::from("19")).await.is_empty());
}

#[tokio::test]
async fn retries_empty_and_malformed_bodies() {
    let server = MockServer::start().await;

    listing("28")
        .respond_with(ResponseTemplate::new(200))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    listing("28")
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    listing("28")
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    listing("28")
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"2801":"Cleaning"}]"#))
        .expect(1)
        .mount(&server)
        .await;

    let node = fetcher(&server, 5).fetch(&CategoryId::from("28")).await;

    assert_eq!(serde_json::to_value(&node).unwrap(), json!([{"2801": "Cleaning"}]));
}

#[tokio::test]
async fn retries_timeouts() {
    let server = MockServer::start().await;

    listing("87")
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = FetchConfig::builder()
        .base_url(format!("{}/index.php", server.uri()))
        .max_attempts(3)
        .timeout(Duration::from_millis(50))
        .min_delay(Duration::ZERO)
        .max_delay(Duration::ZERO)
        .build();
    let fetcher = Fetcher::new(config).unwrap();

    assert!(fetcher.fetch(&CategoryId::from("87")).await.is_empty());
}

#[tokio::test]
async fn single_attempt_reports_the_failure() {
    let server = MockServer::start().await;

    listing("1")
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    listing("2")
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    listing("3")
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let fetcher = fetcher(&server, 1);

    assert!(matches!(
        fetcher.try_fetch(&CategoryId::from("1")).await,
        Err(FetchError::EmptyBody { .. })
    ));
    assert!(matches!(
        fetcher.try_fetch(&CategoryId::from("2")).await,
        Err(FetchError::Http(_))
    ));
    assert!(matches!(
        fetcher.try_fetch(&CategoryId::from("3")).await,
        Err(FetchError::Decode { .. })
    ));
}

#[tokio::test]
async fn status_failures_skip_the_retry_follow_up() {
    let server = MockServer::start().await;

    listing("227")
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    listing("451")
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let fetcher = fetcher(&server, 3);

    let err = fetcher.try_fetch(&CategoryId::from("227")).await.unwrap_err();
    assert!(err.is_http_status());
    assert_eq!(follow_up(&err, 1, 3), None);
    assert_eq!(follow_up(&err, 3, 3), None);

    let err = fetcher.try_fetch(&CategoryId::from("451")).await.unwrap_err();
    assert!(!err.is_http_status());
    assert_eq!(follow_up(&err, 1, 3), Some(FollowUp::Retry));
    assert_eq!(follow_up(&err, 3, 3), Some(FollowUp::GiveUp));
}

#[tokio::test]
async fn unreachable_host_degrades_to_empty() {
    let config = FetchConfig::builder()
        .base_url("http://127.0.0.1:9/index.php")
        .max_attempts(2)
        .timeout(Duration::from_millis(200))
        .min_delay(Duration::ZERO)
        .max_delay(Duration::ZERO)
        .build();
    let fetcher = Fetcher::new(config).unwrap();

    assert!(fetcher.fetch(&CategoryId::from("600")).await.is_empty());
    assert!(matches!(
        fetcher.try_fetch(&CategoryId::from("600")).await,
        Err(FetchError::Request(_))
    ));
}

#[test]
fn rejects_inverted_delay_range() {
    let config = FetchConfig::builder()
        .min_delay(Duration::from_secs(1))
        .max_delay(Duration::ZERO)
        .build();

    assert!(matches!(Fetcher::new(config), Err(FetchError::InvalidConfig(_))));
}
