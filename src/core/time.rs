//! Time representation for lesson playback.
//! Positions and durations are whole seconds of lesson video; fractional
//! time only appears while mapping player progress onto a duration.

/// Whole seconds since the start of a lesson video.
pub type Seconds = u32;

/// Fractional playback position in seconds, derived from player progress.
pub type Elapsed = f64;

pub const SECONDS_PER_MINUTE: Seconds = 60;
pub const SECONDS_PER_HOUR: Seconds = 3600;

/// Parse a display duration like "15:30" into total seconds.
///
/// Only the two-part `M:SS` form is supported; any other shape, including
/// the three-part `H:MM:SS` form, yields 0. No catalog lesson reaches an
/// hour, so the hour form carries no authored data.
pub fn parse_duration(display: &str) -> Seconds {
    let parts: Vec<Option<Seconds>> = display.split(':').map(|part| part.parse().ok()).collect();

    match parts.as_slice() {
        [Some(minutes), Some(seconds)] => minutes * SECONDS_PER_MINUTE + seconds,
        _ => 0,
    }
}

/// Format seconds for display: "MM:SS", or "HH:MM:SS" from one hour up.
pub fn format_time(seconds: Seconds) -> String {
    let hours = seconds / SECONDS_PER_HOUR;
    let minutes = (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let secs = seconds % SECONDS_PER_MINUTE;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}
