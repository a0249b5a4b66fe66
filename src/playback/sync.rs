//! Active sync point resolution against a lesson's sync table.

use crate::core::sync_point::SyncPoint;
use crate::core::time::Elapsed;

/// Find the sync point whose activation window contains `position`.
///
/// The table is scanned in authored order, so when two windows overlap the
/// earlier entry wins. Returns `None` when no window contains the position.
pub fn resolve_sync_point(position: Elapsed, points: &[SyncPoint]) -> Option<&SyncPoint> {
    points.iter().find(|point| point.is_active_at(position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sync_point::SyncAction;

    fn point(timestamp: u32, section: &str) -> SyncPoint {
        SyncPoint::new(timestamp, section, SyncAction::Reveal)
    }

    #[test]
    fn test_resolves_inside_window() {
        let table = vec![point(180, "variables"), point(420, "strings")];

        assert_eq!(resolve_sync_point(180.0, &table).map(|p| p.section.as_str()), Some("variables"));
        assert_eq!(resolve_sync_point(209.9, &table).map(|p| p.section.as_str()), Some("variables"));
        assert_eq!(resolve_sync_point(423.0, &table).map(|p| p.section.as_str()), Some("strings"));
    }

    #[test]
    fn test_no_match_outside_every_window() {
        let table = vec![point(180, "variables"), point(420, "strings")];

        assert!(resolve_sync_point(179.999, &table).is_none());
        assert!(resolve_sync_point(210.0, &table).is_none());
        assert!(resolve_sync_point(300.0, &table).is_none());
        assert!(resolve_sync_point(0.0, &table).is_none());
    }

    #[test]
    fn test_empty_table_never_matches() {
        assert!(resolve_sync_point(100.0, &[]).is_none());
    }

    #[test]
    fn test_overlap_tie_break_is_table_order() {
        // Windows [100, 130) and [110, 140) overlap on [110, 130)
        let table = vec![point(100, "first"), point(110, "second")];
        assert_eq!(resolve_sync_point(115.0, &table).map(|p| p.section.as_str()), Some("first"));

        // Same entries authored in the other order flip the winner
        let reversed = vec![point(110, "second"), point(100, "first")];
        assert_eq!(resolve_sync_point(115.0, &reversed).map(|p| p.section.as_str()), Some("second"));
    }
}
