//! Recommendation results state
//!
//! Owns the submit flag, the card grid and each card's poster slot. Every
//! accepted response bumps a generation counter; poster events carry the
//! generation they were spawned for, so art from an abandoned grid can
//! never land on the current one.

use std::time::Instant;

use crate::api::RecommendOutcome;
use crate::logic::navigation;
use crate::logic::notify::Severity;
use crate::logic::poster::{PosterSlot, PosterTier};

/// Shown when the recommend call itself failed, matching the message the
/// server's own clients use
pub const FETCH_FAILED: &str = "Error fetching recommendations.";

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsPhase {
    /// Nothing requested yet
    Idle,
    /// Cards are on screen
    Loaded,
    /// The last request ended in a refusal or failure, with the message
    Failed(String),
}

/// One recommendation on screen
#[derive(Debug, Clone)]
pub struct ResultCard {
    pub name: String,
    pub poster_url: String,
    pub poster: PosterSlot,
}

/// A poster fetch the frame loop should hand to the loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterJob {
    pub index: usize,
    pub name: String,
    pub provided_url: String,
}

/// What applying a recommend response asks the caller to do
#[derive(Debug)]
pub struct RecommendApplied {
    pub notification: (Severity, String),
    pub poster_jobs: Vec<PosterJob>,
}

#[derive(Debug, Clone)]
pub struct ResultsModel {
    pub phase: ResultsPhase,
    pub cards: Vec<ResultCard>,
    /// Highlight cursor within `cards`
    pub selected: Option<usize>,
    /// Bumped on every accepted recommendation, guards poster events
    pub generation: u64,
    /// True from submit until the response lands, disables re-submit
    pub submitting: bool,
    submit_started_at: Option<Instant>,
}

impl ResultsModel {
    pub fn new() -> Self {
        Self {
            phase: ResultsPhase::Idle,
            cards: Vec::new(),
            selected: None,
            generation: 0,
            submitting: false,
            submit_started_at: None,
        }
    }

    pub fn begin_submit(&mut self, now: Instant) {
        self.submitting = true;
        self.submit_started_at = Some(now);
    }

    pub fn submit_started_at(&self) -> Option<Instant> {
        self.submit_started_at
    }

    /// Apply the outcome of a recommend call.
    ///
    /// The submit flag is restored before the payload is even looked at, so
    /// no outcome shape can leave the control stuck. `Err` carries a detail
    /// string for the log; the user sees the generic message.
    pub fn apply_recommendation(
        &mut self,
        outcome: Result<RecommendOutcome, String>,
        now: Instant,
    ) -> RecommendApplied {
        self.submitting = false;
        self.submit_started_at = None;

        match outcome {
            Ok(RecommendOutcome::Recommended(movies)) => {
                self.generation += 1;
                self.cards = movies
                    .into_iter()
                    .map(|movie| ResultCard {
                        poster: PosterSlot::attach(&movie.poster, now),
                        poster_url: movie.poster,
                        name: movie.name,
                    })
                    .collect();
                self.selected = None;
                self.phase = ResultsPhase::Loaded;

                let poster_jobs = self
                    .cards
                    .iter()
                    .enumerate()
                    .map(|(index, card)| PosterJob {
                        index,
                        name: card.name.clone(),
                        provided_url: card.poster_url.clone(),
                    })
                    .collect();
                let count = self.cards.len();
                let message = if count == 1 {
                    "Found 1 recommendation".to_string()
                } else {
                    format!("Found {} recommendations", count)
                };
                RecommendApplied {
                    notification: (Severity::Success, message),
                    poster_jobs,
                }
            }
            Ok(RecommendOutcome::Refused(message)) => {
                self.cards.clear();
                self.selected = None;
                self.phase = ResultsPhase::Failed(message.clone());
                RecommendApplied {
                    notification: (Severity::Error, message),
                    poster_jobs: Vec::new(),
                }
            }
            Err(_detail) => {
                self.cards.clear();
                self.selected = None;
                self.phase = ResultsPhase::Failed(FETCH_FAILED.to_string());
                RecommendApplied {
                    notification: (Severity::Error, FETCH_FAILED.to_string()),
                    poster_jobs: Vec::new(),
                }
            }
        }
    }

    /// Artwork arrived for a card. False means the event was stale, either
    /// from an older generation or against a settled slot, and the art
    /// should be dropped.
    pub fn poster_loaded(&mut self, generation: u64, index: usize, tier: PosterTier) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.cards.get_mut(index) {
            Some(card) => card.poster.on_loaded(tier),
            None => false,
        }
    }

    /// A poster tier failed for a card, advance its chain
    pub fn poster_tier_failed(&mut self, generation: u64, index: usize, tier: PosterTier) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.cards.get_mut(index) {
            Some(card) => card.poster.on_tier_failed(tier),
            None => false,
        }
    }

    /// Sweep the watchdog over all cards, returns the indices forced this
    /// pass. Settled and already-forced slots never show up again.
    pub fn force_overdue_posters(&mut self, now: Instant) -> Vec<usize> {
        self.cards
            .iter_mut()
            .enumerate()
            .filter_map(|(index, card)| card.poster.check_watchdog(now).then_some(index))
            .collect()
    }

    /// Settle every pending slot, used when poster rendering is off
    pub fn disable_posters(&mut self) {
        for card in &mut self.cards {
            card.poster.mark_unavailable();
        }
    }

    pub fn select_next(&mut self) {
        if self.phase == ResultsPhase::Loaded {
            self.selected = navigation::cursor_down(self.selected, self.cards.len());
        }
    }

    pub fn select_prev(&mut self) {
        if self.phase == ResultsPhase::Loaded {
            self.selected = navigation::cursor_up(self.selected, self.cards.len());
        }
    }

    pub fn selected_title(&self) -> Option<&str> {
        let index = self.selected?;
        self.cards.get(index).map(|card| card.name.as_str())
    }
}

impl Default for ResultsModel {
    fn default() -> Self {
        Self::new()
    }
}
