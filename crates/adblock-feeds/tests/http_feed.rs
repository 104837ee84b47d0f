use adblock_core::Domain;
use adblock_feeds::{FeedAggregator, FeedError, FeedSource, HttpFeed};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_http_feed_returns_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/adservers.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ads.example.com\n"))
        .expect(1)
        .mount(&server)
        .await;

    let feed = HttpFeed::new("adservers", &format!("{}/adservers.txt", server.uri())).unwrap();
    let body = feed.fetch().await.unwrap();
    assert_eq!(body, "ads.example.com\n");
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gone.txt"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let feed = HttpFeed::new("gone", &format!("{}/gone.txt", server.uri())).unwrap();
    let err = feed.fetch().await.unwrap_err();
    assert!(matches!(err, FeedError::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_aggregates_multiple_http_feeds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/hosts"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "# hosts\n127.0.0.1 localhost\n0.0.0.0 ads.example.com\n0.0.0.0 shared.example.com\n",
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/filters"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "[Adblock Plus 2.0]\n! comment\n||shared.example.com^\n||track.example.net^$third-party\n",
        ))
        .mount(&server)
        .await;

    let aggregator = FeedAggregator::new()
        .source(HttpFeed::new("hosts", &format!("{}/hosts", server.uri())).unwrap())
        .source(HttpFeed::new("filters", &format!("{}/filters", server.uri())).unwrap());

    let set = aggregator.fetch().await.unwrap();
    let names: Vec<&str> = set.iter().map(Domain::as_str).collect();
    assert_eq!(
        names,
        vec!["ads.example.com", "shared.example.com", "track.example.net"]
    );
}

#[test]
fn test_invalid_url_is_rejected() {
    let err = HttpFeed::new("bad", "not a url").unwrap_err();
    assert!(matches!(err, FeedError::InvalidUrl { .. }));
}
