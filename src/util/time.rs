/// Formats a duration in seconds as `M:SS`.
///
/// Negative and non-finite inputs render as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }

    let minutes = (seconds / 60.0).floor() as u64;
    let remaining = (seconds % 60.0).floor() as u64;
    format!("{minutes}:{remaining:02}")
}

/// Same as [`format_time`] for optional durations, `None` being unknown.
pub fn format_duration(seconds: Option<f64>) -> String {
    seconds.map_or_else(|| format_time(f64::NAN), format_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_seconds_to_two_digits() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(5.0), "0:05");
        assert_eq!(format_time(65.4), "1:05");
        assert_eq!(format_time(599.99), "9:59");
    }

    #[test]
    fn minutes_are_not_capped() {
        assert_eq!(format_time(3600.0), "60:00");
        assert_eq!(format_time(7384.0), "123:04");
    }

    #[test]
    fn invalid_input_renders_zero() {
        assert_eq!(format_time(-1.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(f64::NEG_INFINITY), "0:00");
    }

    #[test]
    fn unknown_duration_renders_zero() {
        assert_eq!(format_duration(None), "0:00");
        assert_eq!(format_duration(Some(212.3)), "3:32");
    }
}
