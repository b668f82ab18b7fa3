//! Interfaces the app view drives. Hosts implement these over their widget
//! toolkit (or the DOM); [`crate::headless`] has recording implementations.

use web_time::Duration;

use super::ViewAttribute;
use crate::animation::AttributeSnapshot;
use crate::layout::{ContentMeasure, WindowSize};

/// Attribute snapshot handed to every `layout` sink.
pub type ViewSnapshot = AttributeSnapshot<ViewAttribute>;

/// Source of the current viewport size.
pub trait WindowSource {
    /// Current window size in logical pixels.
    fn size(&self) -> WindowSize;
}

/// Optional label slots in the content region that fade out before their
/// text is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentSlot {
    /// Memorization time.
    Memo,
    /// Personal-best label.
    Pb,
    /// Scramble text.
    Scramble,
}

impl ContentSlot {
    /// Every slot, in display order.
    pub const ALL: [Self; 3] = [Self::Memo, Self::Pb, Self::Scramble];

    /// Opacity attribute that fades the slot.
    #[must_use]
    pub fn opacity(self) -> ViewAttribute {
        match self {
            Self::Memo => ViewAttribute::MemoOpacity,
            Self::Pb => ViewAttribute::PbOpacity,
            Self::Scramble => ViewAttribute::ScrambleOpacity,
        }
    }

    /// Slot faded by `attribute`, if any.
    #[must_use]
    pub fn for_opacity(attribute: ViewAttribute) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.opacity() == attribute)
    }
}

/// The middle region holding the time, scramble, memo and PB.
pub trait ContentRegion: ContentMeasure {
    /// Replace the memorization time text.
    fn set_memo(&mut self, memo: &str);
    /// Replace the personal-best text.
    fn set_pb(&mut self, pb: &str);
    /// Replace the scramble text.
    fn set_scramble(&mut self, scramble: &str);
    /// Drop the text of a slot once it has faded out.
    fn clear_slot(&mut self, slot: ContentSlot);
    /// Replace the time text.
    fn set_time(&mut self, time: &str);
    /// Style the time as a DNF.
    fn set_dnf(&mut self, dnf: bool);
    /// Toggle the entry caret blinking.
    fn set_time_blinking(&mut self, blinking: bool);
    /// Blink the entry caret once.
    fn blink_time(&mut self);
    /// Apply animated attributes.
    fn layout(&mut self, attrs: &ViewSnapshot);
}

/// Header bar.
pub trait HeaderView {
    /// Natural height of the header.
    fn height(&self) -> f64;
    /// Apply animated attributes.
    fn layout(&mut self, attrs: &ViewSnapshot);
}

/// Statistics footer.
pub trait FooterView {
    /// Height of the footer bar when closed.
    fn closed_height(&self) -> f64;
    /// Apply animated attributes.
    fn layout(&mut self, attrs: &ViewSnapshot);
}

/// Element animated in on first load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryElement {
    /// Header bar.
    Header,
    /// Time text.
    Time,
    /// Background pentagons.
    Pentagons,
    /// Statistics footer.
    Footer,
    /// Memorization time.
    MemoTime,
}

impl EntryElement {
    /// Element id in the host document.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Time => "time",
            Self::Pentagons => "pentagons",
            Self::Footer => "footer",
            Self::MemoTime => "memo-time",
        }
    }
}

/// Keyframe style of an entry animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Slide down while fading in.
    SinkFade,
    /// Shrink to size while fading in.
    ShrinkFade,
    /// Slide up while fading in.
    RiseFade,
    /// Plain fade in.
    FadeIn,
}

impl EntryKind {
    /// Keyframe name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::SinkFade => "sinkfade",
            Self::ShrinkFade => "shrinkfade",
            Self::RiseFade => "risefade",
            Self::FadeIn => "fadein",
        }
    }
}

/// Receipt for one entry animation. Hand it back through
/// [`AppView::entry_animation_finished`](super::AppView::entry_animation_finished)
/// when the animation ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryToken {
    pub(crate) generation: u64,
    pub(crate) element: EntryElement,
}

impl EntryToken {
    /// Element the token belongs to.
    #[must_use]
    pub fn element(&self) -> EntryElement {
        self.element
    }
}

/// One first-load animation for the stage to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryAnimation {
    /// Element to animate.
    pub element: EntryElement,
    /// Keyframe style.
    pub kind: EntryKind,
    /// Run time.
    pub duration: Duration,
    /// Wait before starting.
    pub delay: Duration,
    /// Completion receipt.
    pub token: EntryToken,
}

/// Whole-page surface: input gating and entry animations.
pub trait Stage {
    /// Enable or disable pointer interaction with the page.
    fn set_interactive(&mut self, interactive: bool);
    /// Start an entry animation.
    fn play_entry(&mut self, animation: &EntryAnimation);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_map_to_their_opacity() {
        for slot in ContentSlot::ALL {
            assert_eq!(ContentSlot::for_opacity(slot.opacity()), Some(slot));
        }
        assert_eq!(ContentSlot::for_opacity(ViewAttribute::FooterOpacity), None);
    }

    #[test]
    fn entry_names_match_keyframes() {
        assert_eq!(EntryElement::MemoTime.id(), "memo-time");
        assert_eq!(EntryKind::ShrinkFade.name(), "shrinkfade");
    }
}
