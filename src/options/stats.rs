use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Panes", inline)]
#[serde(default)]
/// Width rules for the statistics footer panes.
pub struct PaneOptions {
    /// Narrowest graph worth drawing.
    #[schemars(title = "Minimum Graph Width", range(min = 0.0))]
    pub min_graph_width: f64,
    /// Gap between adjacent panes.
    #[schemars(title = "Pane Spacing", range(min = 0.0, max = 32.0))]
    pub pane_spacing: f64,
}

impl Default for PaneOptions {
    fn default() -> Self {
        Self {
            min_graph_width: 300.0,
            pane_spacing: 3.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Stats", inline)]
#[serde(default)]
/// Proportions of the empty-state puzzle card.
pub struct StatsOptions {
    /// Puzzle name label height as a fraction of the card height.
    #[schemars(title = "Label Size", range(min = 0.0, max = 1.0))]
    pub puzzle_label_size: f64,
    /// Puzzle icon height as a fraction of the card height.
    #[schemars(title = "Icon Size", range(min = 0.0, max = 1.0))]
    pub puzzle_icon_size: f64,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            puzzle_label_size: 0.12,
            puzzle_icon_size: 0.7,
        }
    }
}
