/// 남은 시간 표시 규칙
/// 1일 이상: {d}d {h}h {m}m
/// 1시간 이상: {h}h {m}m {s}s
/// 1분 이상: {m}m {s}s
/// 그 외: {s}s
pub const URGENT_THRESHOLD_MS: i64 = 300_000;

const SECOND_MS: i64 = 1000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

pub fn format_remaining(remaining_ms: i64) -> String {
    let remaining_ms = remaining_ms.max(0);
    let days = remaining_ms / DAY_MS;
    let hours = (remaining_ms % DAY_MS) / HOUR_MS;
    let minutes = (remaining_ms % HOUR_MS) / MINUTE_MS;
    let seconds = (remaining_ms % MINUTE_MS) / SECOND_MS;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

pub fn is_urgent(remaining_ms: i64) -> bool {
    remaining_ms < URGENT_THRESHOLD_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(format_remaining(DAY_MS), "1d 0h 0m");
        assert_eq!(format_remaining(DAY_MS - 1), "23h 59m 59s");
        assert_eq!(format_remaining(HOUR_MS), "1h 0m 0s");
        assert_eq!(format_remaining(HOUR_MS - 1), "59m 59s");
        assert_eq!(format_remaining(MINUTE_MS), "1m 0s");
        assert_eq!(format_remaining(MINUTE_MS - 1), "59s");
        assert_eq!(format_remaining(999), "0s");
        assert_eq!(format_remaining(0), "0s");
    }

    #[test]
    fn day_tier_drops_seconds() {
        assert_eq!(
            format_remaining(2 * DAY_MS + 3 * HOUR_MS + 4 * MINUTE_MS + 5 * SECOND_MS),
            "2d 3h 4m"
        );
        assert_eq!(format_remaining(3_661_000), "1h 1m 1s");
    }

    #[test]
    fn urgency_threshold_is_exclusive() {
        assert!(is_urgent(URGENT_THRESHOLD_MS - 1));
        assert!(!is_urgent(URGENT_THRESHOLD_MS));
    }
}
