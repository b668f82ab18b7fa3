//! Geometry and measurement types shared by the resolver and metrics.

use serde::{Deserialize, Serialize};

/// Window (viewport) size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowSize {
    /// Viewport width.
    pub width: f64,
    /// Viewport height.
    pub height: f64,
}

impl WindowSize {
    /// Size from width and height.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Which optional labels the content region should make room for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ContentVisibility {
    /// Personal-best label.
    pub pb: bool,
    /// Scramble text.
    pub scramble: bool,
    /// Memorization time.
    pub memo: bool,
}

/// Vertical space a content region needs for a visibility combination.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Constraints {
    /// Height at which everything looks as intended.
    pub soft: f64,
    /// Height below which the content is unusable.
    pub bare: f64,
}

/// Timer text placement inside the middle region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimeLayout {
    /// Font size of the time.
    pub time_size: f64,
    /// Vertical offset of the time within the middle region.
    pub time_y: f64,
}

/// Measurement half of the content-region collaborator.
///
/// Kept separate from the view-facing methods so the resolver and metric
/// computations can be exercised without a full view.
pub trait ContentMeasure {
    /// Space needed to show the given labels.
    fn compute_constraints(&self, visibility: ContentVisibility) -> Constraints;

    /// Concrete time placement given the final middle size.
    fn compute_time_layout(
        &self,
        width: f64,
        height: f64,
        visibility: ContentVisibility,
    ) -> TimeLayout;
}
