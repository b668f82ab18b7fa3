//! The app view orchestrator and the interfaces it drives.
//!
//! [`AppView`] owns the current [`LayoutState`](crate::layout::LayoutState)
//! and an [`Animator`](crate::animation::Animator) keyed by
//! [`ViewAttribute`]. Every mutation resolves a new state, diffs it against
//! the old one and pushes attribute targets; per-frame values flow out to the
//! header, footer and content collaborators.

mod app_view;
pub mod collaborators;
pub mod events;
pub mod stats;
pub mod time_text;

pub use app_view::{AppView, InitialContent, ViewParts};
pub use collaborators::{
    ContentRegion, ContentSlot, EntryAnimation, EntryElement, EntryKind,
    EntryToken, FooterView, HeaderView, Stage, ViewSnapshot, WindowSource,
};
pub use events::{ViewEvent, ViewEvents};
pub use time_text::{LatestSolve, TimerInput};

use crate::animation::AttributeKey;

/// Attributes the app view animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewAttribute {
    /// 0 when the footer is open, 1 when closed.
    FooterClosedness,
    /// Open footer height.
    FooterHeight,
    /// Vertical footer offset.
    FooterOffset,
    /// Footer opacity.
    FooterOpacity,
    /// Vertical header offset.
    HeaderOffset,
    /// Header opacity.
    HeaderOpacity,
    /// Height of the middle region.
    MiddleHeight,
    /// Top of the middle region.
    MiddleY,
    /// Memorization time opacity.
    MemoOpacity,
    /// Personal-best label opacity.
    PbOpacity,
    /// Scramble opacity.
    ScrambleOpacity,
    /// Time font size.
    TimeSize,
    /// Time offset inside the middle region.
    TimeY,
}

impl ViewAttribute {
    /// Every attribute.
    pub const ALL: [Self; 13] = [
        Self::FooterClosedness,
        Self::FooterHeight,
        Self::FooterOffset,
        Self::FooterOpacity,
        Self::HeaderOffset,
        Self::HeaderOpacity,
        Self::MiddleHeight,
        Self::MiddleY,
        Self::MemoOpacity,
        Self::PbOpacity,
        Self::ScrambleOpacity,
        Self::TimeSize,
        Self::TimeY,
    ];
}

impl AttributeKey for ViewAttribute {
    fn name(&self) -> &'static str {
        match self {
            Self::FooterClosedness => "footerClosedness",
            Self::FooterHeight => "footerHeight",
            Self::FooterOffset => "footerOffset",
            Self::FooterOpacity => "footerOpacity",
            Self::HeaderOffset => "headerOffset",
            Self::HeaderOpacity => "headerOpacity",
            Self::MiddleHeight => "middleHeight",
            Self::MiddleY => "middleY",
            Self::MemoOpacity => "memoOpacity",
            Self::PbOpacity => "pbOpacity",
            Self::ScrambleOpacity => "scrambleOpacity",
            Self::TimeSize => "timeSize",
            Self::TimeY => "timeY",
        }
    }
}

/// Opacity target for a visibility flag.
pub(crate) fn opacity(visible: bool) -> f64 {
    if visible {
        1.0
    } else {
        0.0
    }
}

/// Closedness target for the footer open flag.
pub(crate) fn closedness(open: bool) -> f64 {
    if open {
        0.0
    } else {
        1.0
    }
}
