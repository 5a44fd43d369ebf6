//! Clock formatting for the HUD and finish notification.

/// Format elapsed seconds as `m:ss`.
///
/// ```
/// use memory_lab::render::format_clock;
///
/// assert_eq!(format_clock(0), "0:00");
/// assert_eq!(format_clock(42), "0:42");
/// assert_eq!(format_clock(605), "10:05");
/// ```
#[must_use]
pub fn format_clock(total_seconds: u32) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
