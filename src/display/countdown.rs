use chrono::Duration;

/// `"3h 05m 09s"`, or `"42m 07s"` under an hour. Non-positive durations are `"0s"`.
pub fn format_countdown(remaining: Duration) -> String {
    let total = remaining.num_seconds();
    if total <= 0 {
        return "0s".to_string();
    }

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{hours}h {minutes:02}m {seconds:02}s")
    } else {
        format!("{minutes}m {seconds:02}s")
    }
}
