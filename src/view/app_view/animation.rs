//! Diff-and-animate dispatch, frame ticks and lingering-content clears.

use web_time::Instant;

use super::AppView;
use crate::error::ViewError;
use crate::layout::{classify, LayoutState, MiddleLayout, StateChange};
use crate::view::collaborators::ContentSlot;
use crate::view::{closedness, opacity, ViewAttribute};

/// Per-slot generations guarding deferred clears.
///
/// Every show or hide of a slot bumps its generation. Hiding records the new
/// generation as a pending clear, which runs once the slot's opacity settles
/// at zero, but only if no newer text arrived in between.
#[derive(Debug, Clone, Default)]
pub(super) struct LingeringContent {
    generations: [u64; 3],
    pending: [Option<u64>; 3],
}

impl LingeringContent {
    fn index(slot: ContentSlot) -> usize {
        match slot {
            ContentSlot::Memo => 0,
            ContentSlot::Pb => 1,
            ContentSlot::Scramble => 2,
        }
    }

    /// New text for `slot`: any pending clear is now stale.
    pub(super) fn replace(&mut self, slot: ContentSlot) {
        let i = Self::index(slot);
        self.generations[i] += 1;
        self.pending[i] = None;
    }

    /// Text for `slot` should go once it has faded out.
    pub(super) fn hide(&mut self, slot: ContentSlot) {
        let i = Self::index(slot);
        self.generations[i] += 1;
        self.pending[i] = Some(self.generations[i]);
    }

    /// Current generation of `slot`.
    pub(super) fn generation(&self, slot: ContentSlot) -> u64 {
        self.generations[Self::index(slot)]
    }

    /// Take the pending clear for `slot` if it is still current.
    fn take_current(&mut self, slot: ContentSlot) -> bool {
        let i = Self::index(slot);
        match self.pending[i] {
            Some(generation) if generation == self.generations[i] => {
                self.pending[i] = None;
                true
            }
            Some(generation) => {
                log::debug!(
                    "dropping stale {slot:?} clear (generation {generation})"
                );
                self.pending[i] = None;
                false
            }
            None => false,
        }
    }

    pub(super) fn is_pending(&self, slot: ContentSlot) -> bool {
        self.pending[Self::index(slot)].is_some()
    }
}

impl AppView {
    /// Advance animations to `now` and lay out collaborators.
    ///
    /// Returns `false` when nothing was animating.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(report) = self.animator.update(now) else {
            return false;
        };
        self.layout_now();
        for key in report.settled {
            if let Some(slot) = ContentSlot::for_opacity(key) {
                self.finish_lingering(slot);
            }
        }
        true
    }

    /// Advance animations to the animator clock's current time.
    pub fn tick_now(&mut self) -> bool {
        let now = self.animator.now();
        self.tick(now)
    }

    /// Resolve from `change(current)` and animate the difference.
    pub(super) fn transition(
        &mut self,
        change: impl FnOnce(LayoutState) -> LayoutState,
    ) -> Result<(), ViewError> {
        let requested = change(self.state);
        let next = self.resolve_next(requested)?;
        let middle = self.middle_layout(&next)?;
        let old = std::mem::replace(&mut self.state, next);
        self.animate_state_change(&old, &middle);
        Ok(())
    }

    /// Animate every changed field of the current state relative to `old`,
    /// then the middle metrics regardless of whether anything changed.
    fn animate_state_change(&mut self, old: &LayoutState, middle: &MiddleLayout) {
        let changes = old.changes(&self.state);
        if !changes.is_empty() {
            log::debug!(
                "layout {} -> {}: {changes:?}",
                classify(old).name(),
                classify(&self.state).name()
            );
        }
        for change in changes {
            let (key, target) = match change {
                StateChange::FooterHeight(height) => {
                    (ViewAttribute::FooterHeight, height)
                }
                StateChange::FooterOpen(open) => {
                    (ViewAttribute::FooterClosedness, closedness(open))
                }
                StateChange::FooterVisible(v) => {
                    (ViewAttribute::FooterOpacity, opacity(v))
                }
                StateChange::HeaderVisible(v) => {
                    (ViewAttribute::HeaderOpacity, opacity(v))
                }
                StateChange::MemoVisible(v) => {
                    (ViewAttribute::MemoOpacity, opacity(v))
                }
                StateChange::ScrambleVisible(v) => {
                    (ViewAttribute::ScrambleOpacity, opacity(v))
                }
                StateChange::PbVisible(v) => (ViewAttribute::PbOpacity, opacity(v)),
            };
            self.animator.animate_attribute(key, target);
        }

        self.animator
            .animate_attribute(ViewAttribute::MiddleHeight, middle.height);
        self.animator.animate_attribute(ViewAttribute::MiddleY, middle.y);
        self.animator
            .animate_attribute(ViewAttribute::TimeSize, middle.time.time_size);
        self.animator
            .animate_attribute(ViewAttribute::TimeY, middle.time.time_y);
    }

    /// Schedule the clear for a hidden slot, running it now if the slot is
    /// already transparent.
    pub(super) fn hide_lingering(&mut self, slot: ContentSlot) {
        self.lingering.hide(slot);
        if !self.animator.is_animating_key(slot.opacity()) {
            self.finish_lingering(slot);
        }
    }

    fn finish_lingering(&mut self, slot: ContentSlot) {
        if !self.lingering.is_pending(slot) {
            return;
        }
        let transparent =
            self.animator.value(slot.opacity()).unwrap_or(0.0) == 0.0;
        if transparent && self.lingering.take_current(slot) {
            log::trace!("clearing faded {slot:?}");
            self.content.clear_slot(slot);
        }
    }
}
