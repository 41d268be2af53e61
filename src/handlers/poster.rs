//! Poster Update Handler
//!
//! Feeds loader updates into the poster state machines and keeps the
//! protocol map in step with them: art is only stored when the model
//! actually accepted the event.

use crate::services::poster::PosterUpdate;
use crate::{log_debug, App};

pub fn handle_poster_update(app: &mut App, update: PosterUpdate) {
    match update {
        PosterUpdate::Ready {
            generation,
            index,
            tier,
            protocol,
        } => {
            if app.model.results.poster_loaded(generation, index, tier) {
                app.poster_art.insert(index, protocol);
            } else {
                // Lost to the watchdog or a newer grid, drop the art
                log_debug(&format!(
                    "Dropped late poster art for card {} (generation {})",
                    index, generation
                ));
            }
        }

        PosterUpdate::TierFailed {
            generation,
            index,
            tier,
            detail,
        } => {
            log_debug(&format!(
                "Poster tier {:?} failed for card {}: {}",
                tier, index, detail
            ));
            app.model.results.poster_tier_failed(generation, index, tier);
        }
    }
}
