//! Public mutation entry points of the app view.

use super::AppView;
use crate::animation::Transition;
use crate::error::ViewError;
use crate::view::collaborators::ContentSlot;
use crate::view::events::ViewEvent;
use crate::view::time_text::no_times_label;
use crate::view::{opacity, ViewAttribute};

impl AppView {
    /// Show a memorization time, or fade the current one out with `None`.
    pub fn set_memo(&mut self, memo: Option<&str>) -> Result<(), ViewError> {
        let visible = memo.is_some();
        self.transition(|state| state.with_memo_visible(visible))?;
        self.show_or_hide(ContentSlot::Memo, memo);
        Ok(())
    }

    /// Show a personal best, or fade the current one out with `None`.
    pub fn set_pb(&mut self, pb: Option<&str>) -> Result<(), ViewError> {
        let available = pb.is_some();
        self.transition(|state| state.with_pb_available(available))?;
        self.show_or_hide(ContentSlot::Pb, pb);
        Ok(())
    }

    /// Show a scramble, or fade the current one out with `None`.
    pub fn set_scramble(
        &mut self,
        scramble: Option<&str>,
    ) -> Result<(), ViewError> {
        let available = scramble.is_some();
        self.transition(|state| state.with_scramble_available(available))?;
        self.show_or_hide(ContentSlot::Scramble, scramble);
        Ok(())
    }

    /// Push new text into `slot`, or schedule its clear for `None`.
    fn show_or_hide(&mut self, slot: ContentSlot, text: Option<&str>) {
        let Some(text) = text else {
            self.hide_lingering(slot);
            return;
        };
        self.lingering.replace(slot);
        match slot {
            ContentSlot::Memo => self.content.set_memo(text),
            ContentSlot::Pb => self.content.set_pb(text),
            ContentSlot::Scramble => self.content.set_scramble(text),
        }
    }

    /// Hide everything but the time (and memo) while `on`.
    pub fn set_theater_mode(&mut self, on: bool) -> Result<(), ViewError> {
        if self.theater_mode == on {
            return Ok(());
        }
        self.theater_mode = on;
        if let Err(e) = self.transition(|state| state) {
            self.theater_mode = !on;
            return Err(e);
        }
        self.events.emit(ViewEvent::TheaterModeChanged { on });
        Ok(())
    }

    /// Flip the footer between open and closed and remember the choice.
    pub fn toggle_footer(&mut self) -> Result<(), ViewError> {
        let open = !self.state.footer_open();
        self.transition(|state| state.with_footer_open(open))?;
        if let Err(e) = self.prefs.save_footer_open(open) {
            log::debug!("footer open state not saved: {e}");
        }
        self.events.emit(ViewEvent::FooterToggled { open });
        Ok(())
    }

    /// Apply a user drag of the footer edge.
    ///
    /// Ignored while the footer is closed or hidden, since the drag handle
    /// can still see pointer events mid-fade. Nothing animates: the drag is
    /// already continuous.
    pub fn resize_footer(&mut self, requested: f64) -> Result<(), ViewError> {
        if !self.state.footer_open() || !self.state.footer_visible() {
            log::trace!("ignoring footer drag while closed or hidden");
            return Ok(());
        }

        let previous = self.user_footer_height;
        self.user_footer_height = self.limits().clamp(requested);
        let resolved = self.resolve_next(self.state).and_then(|next| {
            self.middle_layout(&next).map(|middle| (next, middle))
        });
        let (next, middle) = match resolved {
            Ok(resolved) => resolved,
            Err(e) => {
                self.user_footer_height = previous;
                return Err(e);
            }
        };
        if let Err(e) = self.prefs.save_footer_height(self.user_footer_height) {
            log::debug!("footer height not saved: {e}");
        }

        self.state = next;
        self.animator.set_attributes([
            (ViewAttribute::FooterHeight, next.footer_height()),
            (ViewAttribute::MiddleHeight, middle.height),
            (ViewAttribute::MiddleY, middle.y),
            (ViewAttribute::TimeSize, middle.time.time_size),
            (ViewAttribute::TimeY, middle.time.time_y),
        ]);
        self.events.emit(ViewEvent::FooterResized {
            height: self.user_footer_height,
        });
        self.layout_now();
        Ok(())
    }

    /// Re-resolve after the window changed size.
    ///
    /// The footer height always snaps. Footer, scramble and PB visibility
    /// flips fade, and when one happens the middle metrics animate with
    /// them; otherwise the metrics snap. `middleY` never changes on resize.
    pub fn handle_window_resize(&mut self) -> Result<(), ViewError> {
        let next = self.resolve_next(self.state)?;
        let middle = self.middle_layout(&next)?;
        let old = std::mem::replace(&mut self.state, next);

        if next.footer_height() != old.footer_height() {
            self.animator
                .set_attribute(ViewAttribute::FooterHeight, next.footer_height());
        }

        let flips = [
            (
                ViewAttribute::FooterOpacity,
                old.footer_visible(),
                next.footer_visible(),
            ),
            (
                ViewAttribute::ScrambleOpacity,
                old.scramble_visible(),
                next.scramble_visible(),
            ),
            (ViewAttribute::PbOpacity, old.pb_visible(), next.pb_visible()),
        ];
        let mut major_change = false;
        for (key, was, is) in flips {
            if was != is {
                self.animator.animate_attribute(key, opacity(is));
                major_change = true;
            }
        }

        let transition = Transition::animate_if(major_change);
        if major_change {
            log::debug!("resize changed visibility: {:?}", old.changes(&next));
        }
        log::trace!("resize metrics: {}", transition.name());
        for (key, value) in [
            (ViewAttribute::MiddleHeight, middle.height),
            (ViewAttribute::TimeSize, middle.time.time_size),
            (ViewAttribute::TimeY, middle.time.time_y),
        ] {
            self.animator.apply(key, value, transition);
        }

        self.layout_now();
        Ok(())
    }

    /// Replace the time text. `None` shows the no-times prompt.
    pub fn set_time(&mut self, time: Option<&str>) {
        match time {
            Some(text) => self.content.set_time(text),
            None => self
                .content
                .set_time(no_times_label(self.touch_device, self.timer_input)),
        }
        self.content.set_dnf(false);
    }

    /// Replace the time text and mark it DNF.
    pub fn set_time_dnf(&mut self, time: &str) {
        self.set_time(Some(time));
        self.content.set_dnf(true);
    }

    /// Toggle the entry caret blinking.
    pub fn set_time_blinking(&mut self, blinking: bool) {
        self.content.set_time_blinking(blinking);
    }

    /// Blink the entry caret once.
    pub fn blink_time(&mut self) {
        self.content.blink_time();
    }
}
