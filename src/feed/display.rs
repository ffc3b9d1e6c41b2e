use chrono::{DateTime, Utc};

/// `@handle` form of a display name: whitespace stripped, lower-cased.
pub fn handle(username: &str) -> String {
    let compact: String = username
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    format!("@{}", compact)
}

/// Relative age of a record, e.g. "5 minutes ago".
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds();
    if seconds < 45 {
        return "just now".to_string();
    }

    let (value, unit) = match seconds {
        s if s < 60 * 60 => (s / 60, "minute"),
        s if s < 60 * 60 * 24 => (s / (60 * 60), "hour"),
        s if s < 60 * 60 * 24 * 7 => (s / (60 * 60 * 24), "day"),
        s if s < 60 * 60 * 24 * 30 => (s / (60 * 60 * 24 * 7), "week"),
        s if s < 60 * 60 * 24 * 365 => (s / (60 * 60 * 24 * 30), "month"),
        s => (s / (60 * 60 * 24 * 365), "year"),
    };
    let value = value.max(1);
    let plural = if value == 1 { "" } else { "s" };
    format!("{} {}{} ago", value, unit, plural)
}
