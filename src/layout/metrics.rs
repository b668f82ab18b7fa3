//! Continuous middle-region metrics derived from a resolved state.

use super::state::LayoutState;
use super::types::{ContentMeasure, TimeLayout, WindowSize};
use crate::error::{check_finite, check_metric, ViewError};

/// Bounds of the middle region plus the time placement inside it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MiddleLayout {
    /// Height of the middle region.
    pub height: f64,
    /// Top edge of the middle region.
    pub y: f64,
    /// Time text placement.
    pub time: TimeLayout,
}

/// Compute the middle region for `state` in `window`.
///
/// Non-finite heights from the window or collaborators are contract
/// violations and fail with [`ViewError::InvalidMetric`].
pub fn compute_middle_layout<C: ContentMeasure + ?Sized>(
    state: &LayoutState,
    window: WindowSize,
    header_height: f64,
    closed_footer_height: f64,
    content: &C,
) -> Result<MiddleLayout, ViewError> {
    let window_height = check_finite("windowHeight", window.height)?;
    let footer = check_finite("footerHeight", state.footer_extent(closed_footer_height))?;
    let header = if state.header_visible() {
        check_finite("headerHeight", header_height)?
    } else {
        0.0
    };

    // Validate before clamping: NaN.max(0.0) would hide the error.
    let middle = check_finite("middleHeight", window_height - header - footer)?;
    let height = middle.max(0.0);

    let time = content.compute_time_layout(
        window.width,
        height,
        state.content_visibility(),
    );
    let _ = check_metric("timeSize", time.time_size)?;
    let _ = check_finite("timeY", time.time_y)?;

    Ok(MiddleLayout {
        height,
        y: header,
        time,
    })
}
