//! Poster fallback tiers and watchdog state machine
//!
//! Every recommendation card owns one poster slot. The slot walks a fixed
//! fallback chain (provided artwork, then a placeholder naming the movie,
//! then a generic placeholder) and settles exactly once: on the first tier
//! that loads, on exhaustion of the chain, or when the watchdog gives up
//! waiting. Late events against a settled slot are ignored.

use std::time::{Duration, Instant};

/// How long a slot may sit unresolved before the watchdog forces it
pub const WATCHDOG_WINDOW: Duration = Duration::from_secs(5);

/// Generic last-resort placeholder, same artwork the backend substitutes
/// when its own poster lookup fails
pub const FALLBACK_PLACEHOLDER_URL: &str =
    "https://via.placeholder.com/300x450/cccccc/666666?text=No+Poster";

/// Placeholder carrying the movie title, tried before the generic one
pub fn named_placeholder_url(name: &str) -> String {
    format!(
        "https://via.placeholder.com/300x450/1a1a2e/e0e0e0?text={}",
        urlencoding::encode(name)
    )
}

/// One rung of the fallback chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterTier {
    /// The URL the recommendation response carried
    Provided,
    /// Placeholder labeled with the movie title
    Named,
    /// Generic "No Poster" placeholder
    Fallback,
}

impl PosterTier {
    /// The tier to try after this one fails, if any
    pub fn next(self) -> Option<PosterTier> {
        match self {
            PosterTier::Provided => Some(PosterTier::Named),
            PosterTier::Named => Some(PosterTier::Fallback),
            PosterTier::Fallback => None,
        }
    }
}

/// First tier worth trying for a card.
///
/// A blank provided URL counts as an already-failed first tier, so the
/// chain starts at the named placeholder.
pub fn first_tier(provided_url: &str) -> PosterTier {
    if provided_url.trim().is_empty() {
        PosterTier::Named
    } else {
        PosterTier::Provided
    }
}

/// The URL a given tier fetches for a card
pub fn tier_url(tier: PosterTier, name: &str, provided_url: &str) -> String {
    match tier {
        PosterTier::Provided => provided_url.to_string(),
        PosterTier::Named => named_placeholder_url(name),
        PosterTier::Fallback => FALLBACK_PLACEHOLDER_URL.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterPhase {
    /// Waiting on a fetch of the given tier
    Loading { tier: PosterTier },
    /// A tier's artwork arrived and is on screen
    Visible { tier: PosterTier },
    /// The watchdog gave up waiting and substituted a labeled card
    Forced,
    /// Every tier failed
    Unavailable,
}

/// Poster state for one recommendation card
#[derive(Debug, Clone)]
pub struct PosterSlot {
    pub phase: PosterPhase,
    attached_at: Instant,
}

impl PosterSlot {
    /// Start the chain for a card whose response carried `provided_url`
    pub fn attach(provided_url: &str, now: Instant) -> Self {
        Self {
            phase: PosterPhase::Loading {
                tier: first_tier(provided_url),
            },
            attached_at: now,
        }
    }

    /// Whether the slot has reached a terminal phase
    pub fn settled(&self) -> bool {
        !matches!(self.phase, PosterPhase::Loading { .. })
    }

    pub fn attached_at(&self) -> Instant {
        self.attached_at
    }

    /// Artwork for `tier` arrived. Returns false if the event lost the
    /// race against the watchdog or a different tier.
    pub fn on_loaded(&mut self, tier: PosterTier) -> bool {
        if self.phase == (PosterPhase::Loading { tier }) {
            self.phase = PosterPhase::Visible { tier };
            true
        } else {
            false
        }
    }

    /// The fetch for `tier` failed. Advances to the next tier, or settles
    /// unavailable after the last one. Stale or mismatched reports are
    /// ignored.
    pub fn on_tier_failed(&mut self, tier: PosterTier) -> bool {
        if self.phase != (PosterPhase::Loading { tier }) {
            return false;
        }
        self.phase = match tier.next() {
            Some(next) => PosterPhase::Loading { tier: next },
            None => PosterPhase::Unavailable,
        };
        true
    }

    /// Settle the slot without ever fetching, used when poster rendering
    /// is turned off
    pub fn mark_unavailable(&mut self) -> bool {
        if self.settled() {
            return false;
        }
        self.phase = PosterPhase::Unavailable;
        true
    }

    /// Force a still-loading slot once the watchdog window has elapsed.
    /// Returns true only on the transition, so each slot fires at most once.
    pub fn check_watchdog(&mut self, now: Instant) -> bool {
        if !matches!(self.phase, PosterPhase::Loading { .. }) {
            return false;
        }
        if now.saturating_duration_since(self.attached_at) < WATCHDOG_WINDOW {
            return false;
        }
        self.phase = PosterPhase::Forced;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tier_depends_on_provided_url() {
        assert_eq!(first_tier("https://img.example/p.jpg"), PosterTier::Provided);
        assert_eq!(first_tier(""), PosterTier::Named);
        assert_eq!(first_tier("   "), PosterTier::Named);
    }

    #[test]
    fn test_tier_chain_order() {
        assert_eq!(PosterTier::Provided.next(), Some(PosterTier::Named));
        assert_eq!(PosterTier::Named.next(), Some(PosterTier::Fallback));
        assert_eq!(PosterTier::Fallback.next(), None);
    }

    #[test]
    fn test_tier_urls() {
        assert_eq!(
            tier_url(PosterTier::Provided, "Alien", "https://img.example/a.jpg"),
            "https://img.example/a.jpg"
        );
        assert_eq!(
            tier_url(PosterTier::Named, "Blade Runner", ""),
            "https://via.placeholder.com/300x450/1a1a2e/e0e0e0?text=Blade%20Runner"
        );
        assert_eq!(
            tier_url(PosterTier::Fallback, "Alien", ""),
            FALLBACK_PLACEHOLDER_URL
        );
    }

    #[test]
    fn test_attach_with_blank_url_skips_provided_tier() {
        let slot = PosterSlot::attach("", Instant::now());
        assert_eq!(
            slot.phase,
            PosterPhase::Loading {
                tier: PosterTier::Named
            }
        );
    }

    #[test]
    fn test_full_failure_walk_settles_unavailable() {
        let mut slot = PosterSlot::attach("https://img.example/x.jpg", Instant::now());

        assert!(slot.on_tier_failed(PosterTier::Provided));
        assert_eq!(
            slot.phase,
            PosterPhase::Loading {
                tier: PosterTier::Named
            }
        );

        assert!(slot.on_tier_failed(PosterTier::Named));
        assert_eq!(
            slot.phase,
            PosterPhase::Loading {
                tier: PosterTier::Fallback
            }
        );

        assert!(slot.on_tier_failed(PosterTier::Fallback));
        assert_eq!(slot.phase, PosterPhase::Unavailable);
        assert!(slot.settled());
    }

    #[test]
    fn test_loaded_settles_and_blocks_later_events() {
        let mut slot = PosterSlot::attach("https://img.example/x.jpg", Instant::now());
        assert!(slot.on_loaded(PosterTier::Provided));
        assert_eq!(
            slot.phase,
            PosterPhase::Visible {
                tier: PosterTier::Provided
            }
        );

        // Anything after settling is a no-op
        assert!(!slot.on_tier_failed(PosterTier::Provided));
        assert!(!slot.on_loaded(PosterTier::Named));
        assert!(!slot.mark_unavailable());
        assert_eq!(
            slot.phase,
            PosterPhase::Visible {
                tier: PosterTier::Provided
            }
        );
    }

    #[test]
    fn test_mismatched_tier_report_is_ignored() {
        let mut slot = PosterSlot::attach("https://img.example/x.jpg", Instant::now());
        assert!(!slot.on_tier_failed(PosterTier::Named));
        assert!(!slot.on_loaded(PosterTier::Fallback));
        assert_eq!(
            slot.phase,
            PosterPhase::Loading {
                tier: PosterTier::Provided
            }
        );
    }

    #[test]
    fn test_watchdog_fires_once_after_window() {
        let t0 = Instant::now();
        let mut slot = PosterSlot::attach("https://img.example/x.jpg", t0);

        assert!(!slot.check_watchdog(t0 + Duration::from_millis(4_999)));
        assert_eq!(
            slot.phase,
            PosterPhase::Loading {
                tier: PosterTier::Provided
            }
        );

        assert!(slot.check_watchdog(t0 + WATCHDOG_WINDOW));
        assert_eq!(slot.phase, PosterPhase::Forced);

        // Second sweep must not report the same slot again
        assert!(!slot.check_watchdog(t0 + Duration::from_secs(10)));
    }

    #[test]
    fn test_late_artwork_after_watchdog_is_dropped() {
        let t0 = Instant::now();
        let mut slot = PosterSlot::attach("https://img.example/x.jpg", t0);
        assert!(slot.check_watchdog(t0 + WATCHDOG_WINDOW));

        assert!(!slot.on_loaded(PosterTier::Provided));
        assert_eq!(slot.phase, PosterPhase::Forced);
    }

    #[test]
    fn test_watchdog_ignores_settled_slots() {
        let t0 = Instant::now();
        let mut slot = PosterSlot::attach("https://img.example/x.jpg", t0);
        assert!(slot.on_loaded(PosterTier::Provided));
        assert!(!slot.check_watchdog(t0 + Duration::from_secs(60)));
        assert_eq!(
            slot.phase,
            PosterPhase::Visible {
                tier: PosterTier::Provided
            }
        );
    }

    #[test]
    fn test_mark_unavailable_only_while_loading() {
        let mut slot = PosterSlot::attach("", Instant::now());
        assert!(slot.mark_unavailable());
        assert_eq!(slot.phase, PosterPhase::Unavailable);
        assert!(!slot.mark_unavailable());
    }
}
