//! HTTP contract with the recommendation server
//!
//! Drives the real client against a mock server: query encoding, success
//! and error bodies for both endpoints, and the 404-with-body shape the
//! server uses for unknown movies.

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use reeltui::api::{MovieClient, RecommendOutcome, NO_RECOMMENDATIONS};

/// Test: search hits GET /search?q= and returns the matches array
#[tokio::test]
async fn test_search_returns_matching_titles() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "blade"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "matches": ["Blade Runner", "Blade"]
        })))
        .mount(&server)
        .await;

    let client = MovieClient::new(server.uri());
    let titles = client.search("blade").await.expect("search should succeed");
    assert_eq!(titles, vec!["Blade Runner".to_string(), "Blade".to_string()]);
}

/// Test: queries with spaces and reserved characters arrive decoded intact
#[tokio::test]
async fn test_search_url_encodes_the_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "fast & furious 9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "matches": [] })))
        .mount(&server)
        .await;

    let client = MovieClient::new(server.uri());
    let titles = client
        .search("fast & furious 9")
        .await
        .expect("search should succeed");
    assert!(titles.is_empty());
}

/// Test: a missing matches key decodes as an empty list, not an error
#[tokio::test]
async fn test_search_tolerates_missing_matches_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = MovieClient::new(server.uri());
    let titles = client.search("x").await.expect("search should succeed");
    assert!(titles.is_empty());
}

/// Test: a server error surfaces as an Err carrying the status
#[tokio::test]
async fn test_search_server_error_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = MovieClient::new(server.uri());
    let err = client
        .search("x")
        .await
        .expect_err("500 should surface as an error");
    assert!(
        err.to_string().contains("500"),
        "error should carry the status: {}",
        err
    );
}

/// Test: recommend posts the bare title as a JSON string and decodes the
/// movie list, tolerating a missing poster field
#[tokio::test]
async fn test_recommend_posts_title_and_decodes_movies() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .and(body_json(json!("Inception")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recommended_movies": [
                { "name": "Interstellar", "poster": "https://img.example/i.jpg" },
                { "name": "Memento" }
            ]
        })))
        .mount(&server)
        .await;

    let client = MovieClient::new(server.uri());
    let outcome = client
        .recommend("Inception")
        .await
        .expect("recommend should succeed");

    match outcome {
        RecommendOutcome::Recommended(movies) => {
            assert_eq!(movies.len(), 2);
            assert_eq!(movies[0].name, "Interstellar");
            assert_eq!(movies[0].poster, "https://img.example/i.jpg");
            assert_eq!(movies[1].poster, "", "missing poster decodes as empty");
        }
        other => panic!("expected recommendations, got {:?}", other),
    }
}

/// Test: the server reports an unknown movie as a 404 whose body carries
/// the message, which is a refusal, not a transport error
#[tokio::test]
async fn test_recommend_unknown_movie_reads_the_404_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "error": "Movie not found in our database" })),
        )
        .mount(&server)
        .await;

    let client = MovieClient::new(server.uri());
    let outcome = client
        .recommend("Nope")
        .await
        .expect("a 404 with a body is a refusal, not an error");
    assert_eq!(
        outcome,
        RecommendOutcome::Refused("Movie not found in our database".to_string())
    );
}

/// Test: an empty movie list without a message becomes the stock refusal
#[tokio::test]
async fn test_recommend_empty_list_uses_stock_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "recommended_movies": [] })),
        )
        .mount(&server)
        .await;

    let client = MovieClient::new(server.uri());
    let outcome = client
        .recommend("Moon")
        .await
        .expect("recommend should succeed");
    assert_eq!(outcome, RecommendOutcome::Refused(NO_RECOMMENDATIONS.to_string()));
}

/// Test: a body that is not JSON at all is a hard error
#[tokio::test]
async fn test_recommend_malformed_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = MovieClient::new(server.uri());
    assert!(client.recommend("Moon").await.is_err());
}

/// Test: nothing listening on the port is a hard error for both calls
#[tokio::test]
async fn test_connection_refused_is_an_error() {
    let client = MovieClient::new("http://127.0.0.1:1".to_string());
    assert!(client.search("x").await.is_err());
    assert!(client.recommend("x").await.is_err());
}
