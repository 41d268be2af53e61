//! Suggestion search state
//!
//! Owns the movie title field, the debounced search slot and the dropdown
//! list. Responses are matched against a sequence number so only the most
//! recently fired search can ever touch the list.

use std::time::Instant;

use crate::logic::debounce::DebounceSlot;
use crate::logic::navigation;
use crate::logic::query;

/// What the dropdown is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestPhase {
    /// Nothing in flight, nothing to show
    Idle,
    /// A search fired and its response is pending
    Searching,
    /// Titles arrived
    Loaded,
    /// The server answered with an empty list
    NoMatches,
    /// The search call failed
    Failed,
}

/// A search the frame loop should hand to the API worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: String,
}

#[derive(Debug, Clone)]
pub struct SuggestModel {
    /// Raw field text as typed
    pub input: String,
    /// Titles currently in the dropdown
    pub suggestions: Vec<String>,
    /// Highlight cursor within `suggestions`
    pub selected: Option<usize>,
    pub phase: SuggestPhase,
    /// Whether the dropdown is on screen. Hiding is purely visual, the
    /// contents stay around until the next response replaces them.
    pub visible: bool,
    debounce: DebounceSlot<String>,
    /// Sequence of the last search actually fired
    next_seq: u64,
    /// The one in-flight search allowed to update the list, if any
    live_seq: Option<u64>,
}

impl SuggestModel {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            suggestions: Vec::new(),
            selected: None,
            phase: SuggestPhase::Idle,
            visible: false,
            debounce: DebounceSlot::new(),
            next_seq: 0,
            live_seq: None,
        }
    }

    pub fn push_char(&mut self, c: char, now: Instant) {
        self.input.push(c);
        self.input_changed(now);
    }

    pub fn pop_char(&mut self, now: Instant) {
        if self.input.pop().is_some() {
            self.input_changed(now);
        }
    }

    pub fn clear_input(&mut self, now: Instant) {
        if !self.input.is_empty() {
            self.input.clear();
            self.input_changed(now);
        }
    }

    /// The normalized query the field currently holds
    pub fn query(&self) -> &str {
        query::normalize(&self.input)
    }

    pub fn has_pending_search(&self) -> bool {
        self.debounce.is_pending()
    }

    fn input_changed(&mut self, now: Instant) {
        let query = query::normalize(&self.input);
        if query.is_empty() {
            // An emptied field cancels everything: the pending timer, the
            // in-flight search's right to answer, and the dropdown itself
            self.debounce.cancel();
            self.live_seq = None;
            self.suggestions.clear();
            self.selected = None;
            self.visible = false;
            self.phase = SuggestPhase::Idle;
        } else {
            self.debounce.schedule(now, query.to_string());
        }
    }

    /// Fire the debounced search if its quiet period has elapsed.
    ///
    /// Assigns the sequence number at fire time and makes it the only one
    /// whose response will be accepted.
    pub fn take_due_search(&mut self, now: Instant) -> Option<SearchTicket> {
        let query = self.debounce.take_due(now)?;
        self.next_seq += 1;
        let seq = self.next_seq;
        self.live_seq = Some(seq);
        self.phase = SuggestPhase::Searching;
        self.visible = true;
        self.selected = None;
        Some(SearchTicket { seq, query })
    }

    /// Apply a search response. Returns false when the response is stale,
    /// in which case nothing changes.
    pub fn apply_search_result(&mut self, seq: u64, result: Result<Vec<String>, String>) -> bool {
        if self.live_seq != Some(seq) {
            return false;
        }
        self.live_seq = None;
        self.selected = None;
        self.visible = true;
        match result {
            Ok(titles) if titles.is_empty() => {
                self.suggestions.clear();
                self.phase = SuggestPhase::NoMatches;
            }
            Ok(titles) => {
                self.suggestions = titles;
                self.phase = SuggestPhase::Loaded;
            }
            Err(_) => {
                self.suggestions.clear();
                self.phase = SuggestPhase::Failed;
            }
        }
        true
    }

    pub fn select_next(&mut self) {
        if self.list_active() {
            self.selected = navigation::cursor_down(self.selected, self.suggestions.len());
        }
    }

    pub fn select_prev(&mut self) {
        if self.list_active() {
            self.selected = navigation::cursor_up(self.selected, self.suggestions.len());
        }
    }

    fn list_active(&self) -> bool {
        self.visible && self.phase == SuggestPhase::Loaded && !self.suggestions.is_empty()
    }

    /// Take the highlighted suggestion into the field.
    ///
    /// Clears the dropdown and cancels any pending debounce, so picking a
    /// title never triggers a search for it.
    pub fn activate_selected(&mut self) -> Option<String> {
        if !self.list_active() {
            return None;
        }
        let title = self.suggestions.get(self.selected?)?.clone();
        self.input = title.clone();
        self.debounce.cancel();
        self.live_seq = None;
        self.suggestions.clear();
        self.selected = None;
        self.visible = false;
        self.phase = SuggestPhase::Idle;
        Some(title)
    }

    /// Take the dropdown off screen without touching its contents
    pub fn hide(&mut self) {
        self.visible = false;
    }
}

impl Default for SuggestModel {
    fn default() -> Self {
        Self::new()
    }
}
