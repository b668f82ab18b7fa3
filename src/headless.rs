//! Recording collaborators for running an [`AppView`] without a UI.
//!
//! Every collaborator keeps its state behind an `Rc`, so the handles kept in
//! a [`HeadlessRig`] observe what the view did with the clones it owns. The
//! simulator binary and the unit tests both drive views this way.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_time::Duration;

use crate::error::ViewError;
use crate::layout::{
    Constraints, ContentMeasure, ContentVisibility, TimeLayout, WindowSize,
};
use crate::options::Options;
use crate::prefs::MemoryPreferenceStore;
use crate::util::frame_timing::{CountingScheduler, ManualClock};
use crate::view::{
    AppView, ContentRegion, ContentSlot, EntryAnimation, FooterView,
    HeaderView, InitialContent, Stage, ViewParts, ViewSnapshot, WindowSource,
};

/// Frame step used by [`HeadlessRig::settle`].
pub const FRAME: Duration = Duration::from_millis(16);

/// Resizable window.
#[derive(Debug, Clone)]
pub struct HeadlessWindow {
    size: Rc<Cell<WindowSize>>,
}

impl HeadlessWindow {
    /// Window of the given size.
    #[must_use]
    pub fn new(size: WindowSize) -> Self {
        Self {
            size: Rc::new(Cell::new(size)),
        }
    }

    /// Change the size. Call [`AppView::handle_window_resize`] afterwards.
    pub fn set_size(&self, size: WindowSize) {
        self.size.set(size);
    }
}

impl WindowSource for HeadlessWindow {
    fn size(&self) -> WindowSize {
        self.size.get()
    }
}

/// Heights the headless content region reserves per label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentMetrics {
    /// Space the time alone needs.
    pub time: f64,
    /// Extra space for the scramble.
    pub scramble: f64,
    /// Extra space for the memo time.
    pub memo: f64,
    /// Extra space for the PB label.
    pub pb: f64,
    /// Bare constraint as a fraction of the soft one.
    pub bare_fraction: f64,
}

impl Default for ContentMetrics {
    fn default() -> Self {
        Self {
            time: 160.0,
            scramble: 240.0,
            memo: 40.0,
            pb: 40.0,
            bare_fraction: 0.5,
        }
    }
}

impl ContentMetrics {
    fn labels(&self, visibility: ContentVisibility) -> f64 {
        let mut height = 0.0;
        if visibility.scramble {
            height += self.scramble;
        }
        if visibility.memo {
            height += self.memo;
        }
        if visibility.pb {
            height += self.pb;
        }
        height
    }
}

/// Everything the content region was told.
#[derive(Debug, Clone, Default)]
pub struct ContentRecord {
    /// Time text.
    pub time: String,
    /// DNF styling.
    pub dnf: bool,
    /// Caret blinking.
    pub blinking: bool,
    /// Number of single blinks.
    pub blinks: u32,
    /// Memo text still held.
    pub memo: Option<String>,
    /// PB text still held.
    pub pb: Option<String>,
    /// Scramble text still held.
    pub scramble: Option<String>,
    /// Slots cleared after fading, in order.
    pub cleared: Vec<ContentSlot>,
    /// Number of layout passes.
    pub layouts: usize,
    /// Attributes from the latest layout pass.
    pub last_layout: Option<ViewSnapshot>,
}

/// Content region with fixed label heights that records every call.
#[derive(Debug, Clone, Default)]
pub struct HeadlessContent {
    metrics: ContentMetrics,
    record: Rc<RefCell<ContentRecord>>,
}

impl HeadlessContent {
    /// Content region with the given label heights.
    #[must_use]
    pub fn new(metrics: ContentMetrics) -> Self {
        Self {
            metrics,
            record: Rc::default(),
        }
    }

    /// Copy of everything recorded so far.
    #[must_use]
    pub fn record(&self) -> ContentRecord {
        self.record.borrow().clone()
    }
}

impl ContentMeasure for HeadlessContent {
    fn compute_constraints(&self, visibility: ContentVisibility) -> Constraints {
        let soft = self.metrics.time + self.metrics.labels(visibility);
        Constraints {
            soft,
            bare: soft * self.metrics.bare_fraction,
        }
    }

    fn compute_time_layout(
        &self,
        width: f64,
        height: f64,
        visibility: ContentVisibility,
    ) -> TimeLayout {
        let labels = self.metrics.labels(visibility) * self.metrics.bare_fraction;
        let free = (height - labels).max(0.0);
        let time_size = (free * 0.4).min(width * 0.15);
        TimeLayout {
            time_size,
            time_y: labels + (free - time_size) / 2.0,
        }
    }
}

impl ContentRegion for HeadlessContent {
    fn set_memo(&mut self, memo: &str) {
        self.record.borrow_mut().memo = Some(memo.to_owned());
    }

    fn set_pb(&mut self, pb: &str) {
        self.record.borrow_mut().pb = Some(pb.to_owned());
    }

    fn set_scramble(&mut self, scramble: &str) {
        self.record.borrow_mut().scramble = Some(scramble.to_owned());
    }

    fn clear_slot(&mut self, slot: ContentSlot) {
        let mut record = self.record.borrow_mut();
        match slot {
            ContentSlot::Memo => record.memo = None,
            ContentSlot::Pb => record.pb = None,
            ContentSlot::Scramble => record.scramble = None,
        }
        record.cleared.push(slot);
    }

    fn set_time(&mut self, time: &str) {
        time.clone_into(&mut self.record.borrow_mut().time);
    }

    fn set_dnf(&mut self, dnf: bool) {
        self.record.borrow_mut().dnf = dnf;
    }

    fn set_time_blinking(&mut self, blinking: bool) {
        self.record.borrow_mut().blinking = blinking;
    }

    fn blink_time(&mut self) {
        self.record.borrow_mut().blinks += 1;
    }

    fn layout(&mut self, attrs: &ViewSnapshot) {
        let mut record = self.record.borrow_mut();
        record.layouts += 1;
        record.last_layout = Some(attrs.clone());
    }
}

/// Shared height plus a layout counter, used for the header and footer.
#[derive(Debug, Clone)]
pub struct HeadlessBar {
    height: Rc<Cell<f64>>,
    layouts: Rc<Cell<usize>>,
}

impl HeadlessBar {
    /// Bar reporting `height`.
    #[must_use]
    pub fn new(height: f64) -> Self {
        Self {
            height: Rc::new(Cell::new(height)),
            layouts: Rc::default(),
        }
    }

    /// Change the reported height.
    pub fn set_height(&self, height: f64) {
        self.height.set(height);
    }

    /// Number of layout passes received.
    #[must_use]
    pub fn layouts(&self) -> usize {
        self.layouts.get()
    }
}

impl HeaderView for HeadlessBar {
    fn height(&self) -> f64 {
        self.height.get()
    }

    fn layout(&mut self, _attrs: &ViewSnapshot) {
        self.layouts.set(self.layouts.get() + 1);
    }
}

impl FooterView for HeadlessBar {
    fn closed_height(&self) -> f64 {
        self.height.get()
    }

    fn layout(&mut self, _attrs: &ViewSnapshot) {
        self.layouts.set(self.layouts.get() + 1);
    }
}

/// What the stage was asked to do.
#[derive(Debug, Clone)]
pub struct StageRecord {
    /// Whether pointer interaction is enabled.
    pub interactive: bool,
    /// Entry animations started, in order.
    pub played: Vec<EntryAnimation>,
}

impl Default for StageRecord {
    fn default() -> Self {
        Self {
            interactive: true,
            played: Vec::new(),
        }
    }
}

/// Stage that records entry animations instead of playing them.
#[derive(Debug, Clone, Default)]
pub struct HeadlessStage {
    record: Rc<RefCell<StageRecord>>,
}

impl HeadlessStage {
    /// Copy of everything recorded so far.
    #[must_use]
    pub fn record(&self) -> StageRecord {
        self.record.borrow().clone()
    }
}

impl Stage for HeadlessStage {
    fn set_interactive(&mut self, interactive: bool) {
        self.record.borrow_mut().interactive = interactive;
    }

    fn play_entry(&mut self, animation: &EntryAnimation) {
        log::trace!(
            "entry {} {} after {:?}",
            animation.element.id(),
            animation.kind.name(),
            animation.delay
        );
        self.record.borrow_mut().played.push(*animation);
    }
}

/// A full set of headless collaborators on a shared manual clock.
#[derive(Debug, Clone)]
pub struct HeadlessRig {
    /// Clock shared with the view's animator.
    pub clock: ManualClock,
    /// Window handle.
    pub window: HeadlessWindow,
    /// Content region handle.
    pub content: HeadlessContent,
    /// Header handle (60px).
    pub header: HeadlessBar,
    /// Footer handle (50px closed).
    pub footer: HeadlessBar,
    /// Stage handle.
    pub stage: HeadlessStage,
    /// Preference store handle.
    pub prefs: MemoryPreferenceStore,
    /// Frame request counter.
    pub scheduler: CountingScheduler,
}

impl HeadlessRig {
    /// Rig with default content metrics and empty preferences.
    #[must_use]
    pub fn new(window: WindowSize) -> Self {
        Self {
            clock: ManualClock::new(),
            window: HeadlessWindow::new(window),
            content: HeadlessContent::new(ContentMetrics::default()),
            header: HeadlessBar::new(60.0),
            footer: HeadlessBar::new(50.0),
            stage: HeadlessStage::default(),
            prefs: MemoryPreferenceStore::new(),
            scheduler: CountingScheduler::new(),
        }
    }

    /// Replace the preference store.
    #[must_use]
    pub fn with_prefs(mut self, prefs: MemoryPreferenceStore) -> Self {
        self.prefs = prefs;
        self
    }

    /// Replace the content region's label heights.
    #[must_use]
    pub fn with_content(mut self, metrics: ContentMetrics) -> Self {
        self.content = HeadlessContent::new(metrics);
        self
    }

    /// Collaborator bundle sharing this rig's handles.
    #[must_use]
    pub fn parts(&self) -> ViewParts {
        ViewParts {
            window: Box::new(self.window.clone()),
            header: Box::new(self.header.clone()),
            footer: Box::new(self.footer.clone()),
            content: Box::new(self.content.clone()),
            stage: Box::new(self.stage.clone()),
            prefs: Box::new(self.prefs.clone()),
            clock: Box::new(self.clock.clone()),
            scheduler: Some(Box::new(self.scheduler.clone())),
        }
    }

    /// Build a view over this rig.
    pub fn build(
        &self,
        options: Options,
        initial: InitialContent,
    ) -> Result<AppView, ViewError> {
        AppView::new(self.parts(), options, initial)
    }

    /// Build a view with default options and no solves.
    pub fn build_default(&self) -> Result<AppView, ViewError> {
        self.build(Options::default(), InitialContent::default())
    }

    /// Move the clock by `step` and tick once. Returns whether a frame ran.
    pub fn advance(&self, view: &mut AppView, step: Duration) -> bool {
        let now = self.clock.advance(step);
        view.tick(now)
    }

    /// Tick frame by frame until nothing is animating.
    ///
    /// Returns the number of frames run. Gives up after ten seconds of
    /// simulated time.
    pub fn settle(&self, view: &mut AppView) -> usize {
        let mut frames = 0;
        while view.is_animating() && frames < 625 {
            let _ = self.advance(view, FRAME);
            frames += 1;
        }
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraints_add_visible_labels() {
        let content = HeadlessContent::new(ContentMetrics::default());
        let all = content.compute_constraints(ContentVisibility {
            pb: true,
            scramble: true,
            memo: true,
        });
        assert_eq!(all.soft, 480.0);
        assert_eq!(all.bare, 240.0);
        let none = content.compute_constraints(ContentVisibility::default());
        assert_eq!(none.soft, 160.0);
    }

    #[test]
    fn settle_runs_frames_until_idle() {
        let rig = HeadlessRig::new(WindowSize::new(1024.0, 900.0));
        let mut view = rig.build_default().unwrap();
        view.toggle_footer().unwrap();
        let frames = rig.settle(&mut view);
        // 400ms at 16ms per frame.
        assert_eq!(frames, 25);
        assert!(!view.is_animating());
        assert!(rig.scheduler.requests() > 0);
        assert_eq!(rig.content.record().layouts, 25);
    }
}
