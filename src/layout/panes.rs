//! Width allocator for the statistics footer panes.
//!
//! Fixed priority: the times list always stays, averages come next, the graph
//! is dropped first.

use crate::options::PaneOptions;

/// Natural widths reported by the two list panes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaneWidths {
    /// Averages list width.
    pub averages: f64,
    /// Times list width.
    pub times: f64,
}

/// Which panes are shown and how wide the flexible one gets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaneArrangement {
    /// Only the times list, stretched across the full width.
    TimesOnly {
        /// Width given to the times list.
        times_width: f64,
    },
    /// Times list plus averages; averages absorb the remaining width.
    TimesAndAverages {
        /// Width given to the averages list.
        averages_width: f64,
    },
    /// All three panes; the graph sits between the lists.
    All {
        /// Left edge of the graph.
        graph_x: f64,
        /// Width of the graph.
        graph_width: f64,
    },
}

impl PaneArrangement {
    /// Whether the graph is shown.
    #[must_use]
    pub fn graph_visible(&self) -> bool {
        matches!(self, Self::All { .. })
    }

    /// Whether the averages list is shown.
    #[must_use]
    pub fn averages_visible(&self) -> bool {
        !matches!(self, Self::TimesOnly { .. })
    }
}

/// Arrange the panes inside `total_width`.
#[must_use]
pub fn allocate_panes(
    total_width: f64,
    widths: PaneWidths,
    options: &PaneOptions,
) -> PaneArrangement {
    let spacing = options.pane_spacing;
    let lists = widths.averages + widths.times;

    if lists + spacing > total_width {
        PaneArrangement::TimesOnly {
            times_width: total_width,
        }
    } else if lists + options.min_graph_width > total_width {
        PaneArrangement::TimesAndAverages {
            averages_width: total_width - widths.times - spacing,
        }
    } else {
        PaneArrangement::All {
            graph_x: widths.times + spacing,
            graph_width: total_width - lists - spacing * 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTHS: PaneWidths = PaneWidths {
        averages: 200.0,
        times: 150.0,
    };

    #[test]
    fn wide_footer_shows_everything() {
        let layout = allocate_panes(1000.0, WIDTHS, &PaneOptions::default());
        assert_eq!(
            layout,
            PaneArrangement::All {
                graph_x: 153.0,
                graph_width: 644.0
            }
        );
        assert!(layout.graph_visible());
        assert!(layout.averages_visible());
    }

    #[test]
    fn graph_dropped_first() {
        let layout = allocate_panes(600.0, WIDTHS, &PaneOptions::default());
        assert_eq!(
            layout,
            PaneArrangement::TimesAndAverages {
                averages_width: 447.0
            }
        );
        assert!(!layout.graph_visible());
        assert!(layout.averages_visible());
    }

    #[test]
    fn averages_dropped_last() {
        let layout = allocate_panes(352.0, WIDTHS, &PaneOptions::default());
        assert_eq!(layout, PaneArrangement::TimesOnly { times_width: 352.0 });
        assert!(!layout.averages_visible());

        // Exactly enough room for the spacing keeps averages.
        let layout = allocate_panes(353.0, WIDTHS, &PaneOptions::default());
        assert!(layout.averages_visible());
    }

    #[test]
    fn graph_threshold_is_inclusive() {
        let layout = allocate_panes(650.0, WIDTHS, &PaneOptions::default());
        assert!(layout.graph_visible());
        let layout = allocate_panes(649.0, WIDTHS, &PaneOptions::default());
        assert!(!layout.graph_visible());
    }
}
