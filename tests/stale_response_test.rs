//! Out-of-order search responses
//!
//! Suggestion requests resolve over the network and can land out of order:
//! the response for "mat" may arrive after the one for "matrix". Each
//! fired search gets a sequence number and only the most recently fired
//! number may update the dropdown, so a slow early response can never
//! overwrite a newer list.

use std::time::{Duration, Instant};

use reeltui::logic::debounce::QUIET_PERIOD;
use reeltui::model::suggest::{SearchTicket, SuggestModel, SuggestPhase};

/// Append text to the field and fire the resulting search immediately
fn fire_search(model: &mut SuggestModel, text: &str, now: Instant) -> SearchTicket {
    for c in text.chars() {
        model.push_char(c, now);
    }
    model
        .take_due_search(now + QUIET_PERIOD)
        .expect("search should fire after the quiet period")
}

/// Test: the late response for an older search is dropped on the floor
#[test]
fn test_late_response_for_older_search_is_dropped() {
    let mut model = SuggestModel::new();
    let t0 = Instant::now();

    let first = fire_search(&mut model, "mat", t0);
    let second = fire_search(&mut model, "rix", t0 + Duration::from_secs(1));

    // The newer response lands first
    assert!(model.apply_search_result(second.seq, Ok(vec!["The Matrix".to_string()])));
    assert_eq!(model.phase, SuggestPhase::Loaded);

    // The older one limps in afterwards and must change nothing
    assert!(
        !model.apply_search_result(first.seq, Ok(vec!["Matilda".to_string()])),
        "stale response must be rejected"
    );
    assert_eq!(model.suggestions, vec!["The Matrix".to_string()]);
    assert_eq!(model.phase, SuggestPhase::Loaded);
}

/// Test: responses applied in firing order both take effect
#[test]
fn test_in_order_responses_apply_normally() {
    let mut model = SuggestModel::new();
    let t0 = Instant::now();

    let first = fire_search(&mut model, "mat", t0);
    assert!(model.apply_search_result(first.seq, Ok(vec!["Matilda".to_string()])));
    assert_eq!(model.suggestions, vec!["Matilda".to_string()]);

    let second = fire_search(&mut model, "rix", t0 + Duration::from_secs(1));
    assert!(model.apply_search_result(second.seq, Ok(vec!["The Matrix".to_string()])));
    assert_eq!(model.suggestions, vec!["The Matrix".to_string()]);
}

/// Test: an error for a superseded search must not wipe a loaded list
#[test]
fn test_stale_error_does_not_clobber_loaded_list() {
    let mut model = SuggestModel::new();
    let t0 = Instant::now();

    let first = fire_search(&mut model, "mat", t0);
    let second = fire_search(&mut model, "rix", t0 + Duration::from_secs(1));

    assert!(model.apply_search_result(second.seq, Ok(vec!["The Matrix".to_string()])));
    assert!(!model.apply_search_result(first.seq, Err("timed out".to_string())));

    assert_eq!(model.phase, SuggestPhase::Loaded);
    assert_eq!(model.suggestions, vec!["The Matrix".to_string()]);
}

/// Test: clearing the field revokes the in-flight search's right to answer
#[test]
fn test_response_after_clear_is_dropped_even_with_matching_seq() {
    let mut model = SuggestModel::new();
    let t0 = Instant::now();

    let ticket = fire_search(&mut model, "mat", t0);

    // The user deletes everything while the request is in flight
    model.pop_char(t0 + Duration::from_millis(400));
    model.pop_char(t0 + Duration::from_millis(420));
    model.pop_char(t0 + Duration::from_millis(440));
    assert!(model.input.is_empty());

    assert!(
        !model.apply_search_result(ticket.seq, Ok(vec!["Matilda".to_string()])),
        "a cleared field leaves no live search to answer"
    );
    assert!(model.suggestions.is_empty());
    assert!(!model.visible);
    assert_eq!(model.phase, SuggestPhase::Idle);
}

/// Test: a response delivered twice applies exactly once
#[test]
fn test_duplicate_delivery_applies_once() {
    let mut model = SuggestModel::new();
    let t0 = Instant::now();

    let ticket = fire_search(&mut model, "mat", t0);
    assert!(model.apply_search_result(ticket.seq, Ok(vec!["Matilda".to_string()])));
    assert!(
        !model.apply_search_result(ticket.seq, Ok(Vec::new())),
        "second delivery of the same sequence must be rejected"
    );
    assert_eq!(model.phase, SuggestPhase::Loaded);
    assert_eq!(model.suggestions, vec!["Matilda".to_string()]);
}

/// Test: a never-fired sequence (still sitting in the debounce slot) has
/// no right to update anything
#[test]
fn test_unfired_search_cannot_be_answered() {
    let mut model = SuggestModel::new();
    let t0 = Instant::now();
    model.push_char('m', t0);

    // No take_due_search call, so no sequence was ever issued
    assert!(!model.apply_search_result(1, Ok(vec!["Moon".to_string()])));
    assert!(model.suggestions.is_empty());
}
