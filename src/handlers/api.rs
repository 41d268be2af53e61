//! API Response Handler
//!
//! Applies search and recommend responses from the background worker to
//! the model. Staleness is the model's call: search responses are checked
//! against the live sequence, and whatever it discards is only logged here.

use std::time::Instant;

use crate::logic::errors;
use crate::services::api::ApiResponse;
use crate::{log_debug, App};

/// Handle API response from the background worker
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::SearchResult {
            seq,
            query,
            matches,
        } => {
            let result = matches.map_err(|error| {
                log_debug(&format!(
                    "Search '{}' failed ({:?}): {}",
                    query,
                    errors::classify(&error),
                    errors::detail(&error)
                ));
                errors::detail(&error)
            });

            if !app.model.suggest.apply_search_result(seq, result) {
                log_debug(&format!(
                    "Discarded stale search response for '{}' (seq {})",
                    query, seq
                ));
            }
        }

        ApiResponse::RecommendResult { title, outcome } => {
            let outcome = outcome.map_err(|error| {
                log_debug(&format!(
                    "Recommend '{}' failed ({:?}): {}",
                    title,
                    errors::classify(&error),
                    errors::detail(&error)
                ));
                errors::detail(&error)
            });

            let applied = app
                .model
                .results
                .apply_recommendation(outcome, Instant::now());

            let (severity, message) = applied.notification;
            app.model.show_notification(severity, message);

            if applied.poster_jobs.is_empty() {
                return;
            }

            if app.poster_loader.enabled() {
                // New grid, the old generation's art will never render again
                app.poster_art.clear();
                let generation = app.model.results.generation;
                for job in applied.poster_jobs {
                    app.poster_loader
                        .spawn_fetch(generation, job.index, job.name, job.provided_url);
                }
            } else {
                app.model.results.disable_posters();
            }
        }
    }
}
