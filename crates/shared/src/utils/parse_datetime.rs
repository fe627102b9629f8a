use chrono::{DateTime, Utc};

/// Normalizes a provider timestamp to RFC 3339 UTC. Returns `None` for
/// empty or unparseable input so callers can decide how strict to be.
pub fn parse_datetime(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.with_timezone(&Utc).to_rfc3339())
            .ok()
    }
}
