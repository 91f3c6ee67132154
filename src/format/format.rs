//! Stateless rendering of the numbers that appear in report lines.
//!
//! All functions here are plain and reentrant; callers on any thread can
//! share them freely.

/// Renders a millisecond duration at a human scale: raw milliseconds up
/// to 100 ms, then seconds, minutes, and hours to two decimal places.
pub fn format_duration_ms(ms: u64) -> String {
    if ms <= 100 {
        format!("{ms} ms")
    } else if ms <= 60_000 {
        format!("{} sec", format_2dp(ms as f64 / 1_000.0))
    } else if ms <= 3_600_000 {
        format!("{} min", format_2dp(ms as f64 / 60_000.0))
    } else {
        format!("{} hr", format_2dp(ms as f64 / 3_600_000.0))
    }
}

/// Two decimal places, switching to scientific notation below 0.01 so
/// small rates stay legible.
pub fn format_2dp(value: f64) -> String {
    if value < 0.01 {
        format!("{value:.2E}")
    } else {
        format!("{value:.2}")
    }
}

/// Five decimal places, switching to scientific notation outside
/// [1e-4, 1e4] so loss values keep their significant digits.
pub fn format_5dp(value: f64) -> String {
    if value < 1e-4 || value > 1e4 {
        format!("{value:.5E}")
    } else {
        format!("{value:.5}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_durations_are_raw_milliseconds() {
        for ms in [0, 1, 37, 99, 100] {
            let rendered = format_duration_ms(ms);
            assert!(rendered.ends_with(" ms"), "got {rendered}");
            assert_eq!(rendered, format!("{ms} ms"));
        }
    }

    #[test]
    fn second_and_minute_scales() {
        assert_eq!(format_duration_ms(500), "0.50 sec");
        assert_eq!(format_duration_ms(12_340), "12.34 sec");
        assert_eq!(format_duration_ms(60_000), "60.00 sec");
        assert_eq!(format_duration_ms(90_000), "1.50 min");
        assert_eq!(format_duration_ms(3_600_000), "60.00 min");
    }

    #[test]
    fn hour_scale_uses_true_hours() {
        assert_eq!(format_duration_ms(16_200_000), "4.50 hr");
        assert_eq!(format_duration_ms(3_600_001), "1.00 hr");
    }

    #[test]
    fn two_dp_switches_to_scientific_below_threshold() {
        assert_eq!(format_2dp(0.5), "0.50");
        assert_eq!(format_2dp(160.0), "160.00");
        assert_eq!(format_2dp(0.005), "5.00E-3");
        assert_eq!(format_2dp(0.0), "0.00E0");
    }

    #[test]
    fn five_dp_switches_to_scientific_outside_range() {
        assert_eq!(format_5dp(3.14159265), "3.14159");
        assert_eq!(format_5dp(0.00005), "5.00000E-5");
        assert_eq!(format_5dp(123456.0), "1.23456E5");
        assert_eq!(format_5dp(1.0), "1.00000");
    }
}
