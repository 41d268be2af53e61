//! Keyboard Input Handler
//!
//! Handles all keyboard input and user interactions. Keystrokes are
//! dispatched by focus pane: the input pane edits the title field and
//! drives the suggestion dropdown, the results pane moves between cards
//! and copies titles.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

use crate::services::api::ApiRequest;
use crate::{log_debug, App, FocusPane};

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Quit combos work regardless of focus
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        app.model.ui.should_quit = true;
        return Ok(());
    }

    match app.model.ui.focus {
        FocusPane::Input => handle_input_key(app, key),
        FocusPane::Results => handle_results_key(app, key),
    }

    Ok(())
}

fn handle_input_key(app: &mut App, key: KeyEvent) {
    let now = Instant::now();
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.model.suggest.clear_input(now);
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.model.suggest.push_char(c, now);
        }
        KeyCode::Backspace => {
            app.model.suggest.pop_char(now);
        }
        KeyCode::Down => {
            app.model.suggest.select_next();
        }
        KeyCode::Up => {
            app.model.suggest.select_prev();
        }
        KeyCode::Esc => {
            // Hides the dropdown without touching the field
            app.model.suggest.hide();
        }
        KeyCode::Tab | KeyCode::BackTab => {
            // Moving focus away closes the dropdown, like clicking outside it
            app.model.suggest.hide();
            app.model.ui.toggle_focus();
        }
        KeyCode::Enter => {
            // With a highlighted suggestion, Enter takes it into the field
            // first and then submits the field either way
            app.model.suggest.activate_selected();
            submit_current(app);
        }
        _ => {}
    }
}

fn handle_results_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc => {
            app.model.ui.toggle_focus();
        }
        KeyCode::Right | KeyCode::Down => {
            app.model.results.select_next();
        }
        KeyCode::Left | KeyCode::Up => {
            app.model.results.select_prev();
        }
        KeyCode::Enter => {
            copy_selected_title(app);
        }
        _ => {}
    }
}

/// Submit the title field to the recommend endpoint
fn submit_current(app: &mut App) {
    if let Some(title) = app.model.submit_current(Instant::now()) {
        log_debug(&format!("Requesting recommendations for '{}'", title));
        let _ = app.api_tx.send(ApiRequest::Recommend { title });
    }
}

fn copy_selected_title(app: &mut App) {
    let Some(title) = app.model.results.selected_title().map(str::to_string) else {
        return;
    };
    app.copy_to_clipboard(&title);
}
