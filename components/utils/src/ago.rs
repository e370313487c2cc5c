use chrono::{DateTime, Utc};

// Unit names and their length in seconds, largest first.
static UNITS: [(&str, i64); 7] = [
    ("year", 31_536_000),
    ("month", 2_628_000),
    ("week", 604_800),
    ("day", 86_400),
    ("hour", 3_600),
    ("minute", 60),
    ("second", 1),
];

/// Describe how long before `now` the instant `then` was,
/// eg: `5 minutes ago` or `a day ago`.
///
/// Uses the largest unit that fits at least once and truncates
/// the count; instants in the future are `just now`.
pub fn format(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();
    for (unit, length) in UNITS.iter() {
        if seconds >= *length {
            let count = seconds / length;
            if count == 1 {
                let article = if *unit == "hour" { "an" } else { "a" };
                return format!("{} {} ago", article, unit);
            }
            return format!("{} {}s ago", count, unit);
        }
    }
    String::from("just now")
}
