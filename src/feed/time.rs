//! Relative timestamps for directory cards

use chrono::{DateTime, Utc};
use std::time::Duration;

/// How often the directory refreshes its notion of "now"
pub const CLOCK_TICK: Duration = Duration::from_secs(60);

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Label a post timestamp relative to `now`.
///
/// Timestamps in the future read as "Just now".
pub fn relative_label(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - timestamp).num_seconds();

    if elapsed < MINUTE {
        "Just now".to_string()
    } else if elapsed < HOUR {
        format!("{}m ago", elapsed / MINUTE)
    } else if elapsed < DAY {
        format!("{}h ago", elapsed / HOUR)
    } else {
        format!("{}d ago", elapsed / DAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration as ChronoDuration, TimeZone};
    use rstest::rstest;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap()
    }

    #[rstest]
    #[case(0, "Just now")]
    #[case(30, "Just now")]
    #[case(59, "Just now")]
    #[case(60, "1m ago")]
    #[case(90, "1m ago")]
    #[case(3599, "59m ago")]
    #[case(7200, "2h ago")]
    #[case(86399, "23h ago")]
    #[case(172800, "2d ago")]
    fn test_relative_label(#[case] seconds_ago: i64, #[case] expected: &str) {
        let ts = now() - ChronoDuration::seconds(seconds_ago);
        assert_eq!(relative_label(ts, now()), expected);
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        let ts = now() + ChronoDuration::hours(3);
        assert_eq!(relative_label(ts, now()), "Just now");
    }
}
