//! Statistics footer arrangement: empty-state card, pane widths and the
//! sliding pane container.

use crate::layout::{allocate_panes, PaneArrangement, PaneWidths};
use crate::options::{PaneOptions, StatsOptions};

/// Placement of the puzzle icon and name shown when there are no solves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmptyCardLayout {
    /// Gap above the icon.
    pub icon_top: f64,
    /// Icon height.
    pub icon_height: f64,
    /// Name label font size and line height.
    pub name_height: f64,
    /// Gap below the name label.
    pub name_bottom: f64,
}

/// Lay out the empty-state card for a card of `height` pixels.
#[must_use]
pub fn layout_empty_card(height: f64, options: &StatsOptions) -> EmptyCardLayout {
    let padding = (height
        * (1.0 - options.puzzle_label_size - options.puzzle_icon_size)
        / 2.0)
        .floor();
    EmptyCardLayout {
        icon_top: padding,
        icon_height: (options.puzzle_icon_size * height).floor(),
        name_height: (options.puzzle_label_size * height).floor(),
        name_bottom: (padding / 2.0).round(),
    }
}

/// Measurements the stats footer reports for a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatsMetrics {
    /// Height of the empty-state card.
    pub card_height: f64,
    /// Width available to the panes.
    pub panes_width: f64,
    /// Height of the pane row.
    pub panes_height: f64,
    /// Natural widths of the list panes.
    pub pane_widths: PaneWidths,
}

/// How the sliding pane container should move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaneMove {
    /// Already in place.
    Unchanged,
    /// Animate to the new top.
    Animate(f64),
    /// Jump to the new top, stopping any running slide.
    Snap(f64),
}

/// Result of one stats layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsLayout {
    /// Empty-state card placement.
    pub card: EmptyCardLayout,
    /// Pane visibility and widths.
    pub panes: PaneArrangement,
    /// Sliding container movement.
    pub moving_pane: PaneMove,
}

/// Tracks whether the session is empty and where the pane container sits.
///
/// With no solves the pane row slides up out of view, revealing the
/// empty-state card underneath.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsArrangement {
    stats: StatsOptions,
    panes: PaneOptions,
    empty: bool,
    moving_pane_top: f64,
}

impl StatsArrangement {
    /// Arrangement for a session holding `solve_count` solves.
    #[must_use]
    pub fn new(stats: StatsOptions, panes: PaneOptions, solve_count: usize) -> Self {
        Self {
            stats,
            panes,
            empty: solve_count == 0,
            moving_pane_top: 0.0,
        }
    }

    /// Whether the session has no solves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Current top of the sliding pane container.
    #[must_use]
    pub fn moving_pane_top(&self) -> f64 {
        self.moving_pane_top
    }

    /// Full layout pass. `animate` selects how the pane container moves.
    pub fn layout(&mut self, metrics: &StatsMetrics, animate: bool) -> StatsLayout {
        StatsLayout {
            card: layout_empty_card(metrics.card_height, &self.stats),
            panes: allocate_panes(
                metrics.panes_width,
                metrics.pane_widths,
                &self.panes,
            ),
            moving_pane: self.move_pane(metrics.panes_height, animate),
        }
    }

    /// React to a new solve count. Returns a layout only when the session
    /// flipped between empty and non-empty; the slide animates only while
    /// the footer is fully visible.
    pub fn handle_solve_count(
        &mut self,
        solve_count: usize,
        metrics: &StatsMetrics,
        footer_fully_visible: bool,
    ) -> Option<StatsLayout> {
        let empty = solve_count == 0;
        if empty == self.empty {
            return None;
        }
        self.empty = empty;
        log::debug!("stats empty -> {empty}");
        Some(self.layout(metrics, footer_fully_visible))
    }

    fn move_pane(&mut self, panes_height: f64, animate: bool) -> PaneMove {
        let top = if self.empty { -panes_height } else { 0.0 };
        if top == self.moving_pane_top {
            return PaneMove::Unchanged;
        }
        self.moving_pane_top = top;
        if animate {
            PaneMove::Animate(top)
        } else {
            PaneMove::Snap(top)
        }
    }
}

/// Map a most-recent-first list index to a storage index.
///
/// Returns `None` when the row no longer exists, which can happen when a
/// delete races a session change; callers treat that as a no-op.
#[must_use]
pub fn resolve_delete_index(display_index: usize, len: usize) -> Option<usize> {
    if display_index >= len {
        log::debug!("ignoring delete of stale row {display_index} (len {len})");
        return None;
    }
    Some(len - (display_index + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> StatsMetrics {
        StatsMetrics {
            card_height: 200.0,
            panes_width: 1000.0,
            panes_height: 180.0,
            pane_widths: PaneWidths {
                averages: 200.0,
                times: 150.0,
            },
        }
    }

    #[test]
    fn empty_card_proportions() {
        let card = layout_empty_card(200.0, &StatsOptions::default());
        assert_eq!(card.icon_top, 18.0);
        assert_eq!(card.icon_height, 140.0);
        assert_eq!(card.name_height, 24.0);
        assert_eq!(card.name_bottom, 9.0);
    }

    #[test]
    fn empty_session_hides_panes() {
        let mut stats =
            StatsArrangement::new(StatsOptions::default(), PaneOptions::default(), 0);
        let layout = stats.layout(&metrics(), false);
        assert_eq!(layout.moving_pane, PaneMove::Snap(-180.0));
        assert!(layout.panes.graph_visible());

        // Second pass with the same inputs leaves the container alone.
        assert_eq!(stats.layout(&metrics(), false).moving_pane, PaneMove::Unchanged);
    }

    #[test]
    fn solve_count_only_relayouts_on_flip() {
        let mut stats =
            StatsArrangement::new(StatsOptions::default(), PaneOptions::default(), 0);
        let _ = stats.layout(&metrics(), false);

        let layout = stats.handle_solve_count(1, &metrics(), true).unwrap();
        assert_eq!(layout.moving_pane, PaneMove::Animate(0.0));
        assert!(stats.handle_solve_count(2, &metrics(), true).is_none());

        let layout = stats.handle_solve_count(0, &metrics(), false).unwrap();
        assert_eq!(layout.moving_pane, PaneMove::Snap(-180.0));
        assert!(stats.is_empty());
    }

    #[test]
    fn delete_index_counts_from_newest() {
        assert_eq!(resolve_delete_index(0, 3), Some(2));
        assert_eq!(resolve_delete_index(2, 3), Some(0));
        assert_eq!(resolve_delete_index(3, 3), None);
        assert_eq!(resolve_delete_index(0, 0), None);
    }
}
