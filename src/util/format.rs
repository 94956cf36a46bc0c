//! Counter and timer formatting utilities
//!
//! Provides human-readable formatting for the rep counter and the
//! elapsed-time clock shown on the session screen.

/// Format elapsed seconds as a mm:ss workout clock
///
/// # Examples
/// ```
/// use repset::util::format::format_clock;
///
/// assert_eq!(format_clock(0), "00:00");
/// assert_eq!(format_clock(67), "01:07");
/// assert_eq!(format_clock(3600), "60:00");
/// ```
pub fn format_clock(elapsed_seconds: u64) -> String {
    let minutes = elapsed_seconds / 60;
    let seconds = elapsed_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

/// Format a rep counter as "current/total"
///
/// # Examples
/// ```
/// use repset::util::format::format_rep_counter;
///
/// assert_eq!(format_rep_counter(8, 8), "8/8");
/// assert_eq!(format_rep_counter(3, 12), "3/12");
/// ```
pub fn format_rep_counter(current: u32, total: u32) -> String {
    format!("{}/{}", current, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(9), "00:09");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(60), "01:00");
        assert_eq!(format_clock(67), "01:07");
        assert_eq!(format_clock(605), "10:05");
    }

    #[test]
    fn test_format_rep_counter() {
        assert_eq!(format_rep_counter(0, 8), "0/8");
        assert_eq!(format_rep_counter(8, 8), "8/8");
    }

}
