//! Cursor movement logic
//!
//! Pure functions for moving the highlight cursor through the suggestion list
//! and the recommendation cards, with wrapping at both ends.

/// Move the cursor one row down with wrapping
///
/// With no cursor yet, lands on the first row. Past the last row it wraps
/// back to the top.
///
/// # Examples
/// ```
/// use reeltui::logic::navigation::cursor_down;
///
/// assert_eq!(cursor_down(None, 0), None);
/// assert_eq!(cursor_down(None, 3), Some(0));
/// assert_eq!(cursor_down(Some(1), 3), Some(2));
/// assert_eq!(cursor_down(Some(2), 3), Some(0));
/// ```
pub fn cursor_down(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= list_len - 1 => 0, // Wrap to top
        Some(i) => i + 1,
        None => 0,
    })
}

/// Move the cursor one row up with wrapping
///
/// With no cursor yet, lands on the last row. Before the first row it wraps
/// around to the bottom.
///
/// # Examples
/// ```
/// use reeltui::logic::navigation::cursor_up;
///
/// assert_eq!(cursor_up(None, 0), None);
/// assert_eq!(cursor_up(None, 3), Some(2));
/// assert_eq!(cursor_up(Some(2), 3), Some(1));
/// assert_eq!(cursor_up(Some(0), 3), Some(2));
/// ```
pub fn cursor_up(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1, // Wrap to bottom
        Some(i) => i - 1,
    })
}
