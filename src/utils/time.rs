//! Time utilities

/// Convert elapsed seconds to (fractional) minutes
pub fn seconds_to_minutes(seconds: f64) -> f64 {
    seconds / 60.0
}

/// Format fractional minutes as `mm:ss` for log output
pub fn format_minutes(minutes: f64) -> String {
    if !minutes.is_finite() || minutes <= 0.0 {
        return "00:00".to_string();
    }

    let total_seconds = (minutes * 60.0).round() as i64;
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}
