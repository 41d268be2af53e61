use anyhow::Error;

/// Buckets for API call failures, mirrors the taxonomy the debug log uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    ConnectionRefused,
    Timeout,
    Http(u16), // Non-OK status
    Decode,    // Body arrived but was not the expected JSON
    Other,
}

/// Classify an API failure based on its type and error chain
pub fn classify(error: &Error) -> FailureKind {
    // reqwest errors carry the most precise signal, check them first
    if let Some(reqwest_err) = find_reqwest_error(error) {
        if reqwest_err.is_timeout() {
            return FailureKind::Timeout;
        }
        if reqwest_err.is_connect() {
            return FailureKind::ConnectionRefused;
        }
        if reqwest_err.is_decode() {
            return FailureKind::Decode;
        }
        if let Some(status) = reqwest_err.status() {
            return FailureKind::Http(status.as_u16());
        }
    }

    let error_msg = error.to_string().to_lowercase();
    if error_msg.contains("connection refused") {
        return FailureKind::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return FailureKind::Timeout;
    }
    if error_msg.contains("parse") || error_msg.contains("decode") {
        return FailureKind::Decode;
    }
    if let Some(status) = parse_status_suffix(&error_msg) {
        return FailureKind::Http(status);
    }

    FailureKind::Other
}

fn find_reqwest_error(error: &Error) -> Option<&reqwest::Error> {
    let mut current: Option<&dyn std::error::Error> = Some(error.as_ref());
    while let Some(err) = current {
        if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>() {
            return Some(reqwest_err);
        }
        current = err.source();
    }
    None
}

// Matches the "<endpoint> returned <status> ..." messages the client emits
fn parse_status_suffix(error_msg: &str) -> Option<u16> {
    let rest = error_msg.split(" returned ").nth(1)?;
    let code = rest.split_whitespace().next()?;
    code.parse().ok()
}

/// Raw detail for the debug log - the root cause, not the context wrapper
pub fn detail(error: &Error) -> String {
    if let Some(reqwest_err) = find_reqwest_error(error) {
        return reqwest_err.to_string();
    }

    let mut source = error.source();
    let mut deepest = error.to_string();

    while let Some(err) = source {
        deepest = err.to_string();
        source = err.source();
    }

    deepest
}
