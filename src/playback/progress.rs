//! Mapping player progress onto lesson time.

use crate::core::time::{Elapsed, Seconds};

/// Convert a 0-100 progress percentage into elapsed seconds.
///
/// Out-of-range values pass through unclamped; the video player owns the
/// validity of the progress it reports.
pub fn elapsed_seconds(progress: f64, duration: Seconds) -> Elapsed {
    (progress / 100.0) * f64::from(duration)
}

/// Inverse mapping: the progress percentage for a position in a lesson.
///
/// A zero-length lesson maps every position to 0.
pub fn progress_at(position: Seconds, duration: Seconds) -> f64 {
    if duration == 0 {
        return 0.0;
    }
    f64::from(position) / f64::from(duration) * 100.0
}
