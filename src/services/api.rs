//! API request worker
//!
//! Runs the search and recommend calls off the UI thread. Requests go in
//! over one channel, responses come back over another, and the frame loop
//! drains them between draws. Each request runs in its own task, so a slow
//! recommend call never delays a search already in flight.

use tokio::sync::mpsc;

use crate::api::{MovieClient, RecommendOutcome};

/// API request types
#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// Suggestion search, tagged with the sequence assigned at fire time
    Search { seq: u64, query: String },

    /// Recommendation request for a submitted title
    Recommend { title: String },
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    SearchResult {
        seq: u64,
        query: String,
        matches: Result<Vec<String>, anyhow::Error>,
    },

    RecommendResult {
        title: String,
        outcome: Result<RecommendOutcome, anyhow::Error>,
    },
}

async fn execute_request(client: &MovieClient, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::Search { seq, query } => {
            let matches = client.search(&query).await;
            ApiResponse::SearchResult {
                seq,
                query,
                matches,
            }
        }

        ApiRequest::Recommend { title } => {
            let outcome = client.recommend(&title).await;
            ApiResponse::RecommendResult { title, outcome }
        }
    }
}

/// Spawn the API worker
pub fn spawn_api_service(
    client: MovieClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            let client = client.clone();
            let response_tx = response_tx.clone();

            // One task per request so calls overlap instead of queueing
            tokio::spawn(async move {
                let response = execute_request(&client, request).await;
                let _ = response_tx.send(response);
            });
        }
    });

    (request_tx, response_rx)
}
