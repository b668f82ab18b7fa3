//! The app view orchestrator: collaborators, construction and layout state.

mod animation;
mod loading;
mod mutations;

use self::animation::LingeringContent;
use self::loading::LoadBarrier;
use super::collaborators::{
    ContentRegion, FooterView, HeaderView, Stage, ViewSnapshot, WindowSource,
};
use super::events::ViewEvents;
use super::time_text::{LatestSolve, TimerInput, ENTRY_PLACEHOLDER};
use super::{closedness, opacity, ViewAttribute};
use crate::animation::Animator;
use crate::error::ViewError;
use crate::layout::{
    classify, compute_middle_layout, resolve, FooterLimits, LayoutState,
    MiddleLayout, ResolveInputs,
};
use crate::options::Options;
use crate::prefs::PreferenceStore;
use crate::util::frame_timing::{Clock, FrameScheduler};

/// Collaborators injected into the app view.
pub struct ViewParts {
    /// Viewport size source.
    pub window: Box<dyn WindowSource>,
    /// Header bar.
    pub header: Box<dyn HeaderView>,
    /// Statistics footer.
    pub footer: Box<dyn FooterView>,
    /// Middle content region.
    pub content: Box<dyn ContentRegion>,
    /// Page-level input gate and entry animations.
    pub stage: Box<dyn Stage>,
    /// Footer preference storage.
    pub prefs: Box<dyn PreferenceStore>,
    /// Time source for animation start times.
    pub clock: Box<dyn Clock>,
    /// Host frame callback hook, if the host wants push-style frames.
    pub scheduler: Option<Box<dyn FrameScheduler>>,
}

/// What the time slot shows at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InitialContent {
    /// Most recent solve of the active session.
    pub latest_solve: Option<LatestSolve>,
    /// Timer input method of the active puzzle.
    pub timer_input: TimerInput,
    /// Whether the device is touch-first.
    pub touch_device: bool,
}

/// Orchestrates layout state, attribute animation and collaborator layout.
///
/// All mutation goes through `&mut self` methods that resolve a new
/// [`LayoutState`], diff it against the previous one and push the
/// differences into the animator. Hosts call [`tick`](Self::tick) once per
/// frame while [`is_animating`](Self::is_animating) is true.
pub struct AppView {
    window: Box<dyn WindowSource>,
    header: Box<dyn HeaderView>,
    footer: Box<dyn FooterView>,
    content: Box<dyn ContentRegion>,
    stage: Box<dyn Stage>,
    prefs: Box<dyn PreferenceStore>,

    options: Options,
    animator: Animator<ViewAttribute>,
    state: LayoutState,
    theater_mode: bool,
    user_footer_height: f64,

    timer_input: TimerInput,
    touch_device: bool,

    lingering: LingeringContent,
    load: LoadBarrier,
    events: ViewEvents,
}

impl AppView {
    /// Build the view, resolve the initial state and seed every attribute.
    pub fn new(
        parts: ViewParts,
        options: Options,
        initial: InitialContent,
    ) -> Result<Self, ViewError> {
        let limits = options.layout.footer_limits();
        let footer_open = parts.prefs.footer_open().unwrap_or(true);
        let user_footer_height = parts.prefs.footer_height().map_or(
            options.layout.default_footer_height,
            |height| limits.clamp(height),
        );

        let mut animator = Animator::with_clock(&options.animation, parts.clock);
        if let Some(scheduler) = parts.scheduler {
            animator.set_frame_scheduler(scheduler);
        }

        let memo_visible = initial
            .latest_solve
            .is_some_and(|solve| solve.memo_ms.is_some());

        let mut view = Self {
            window: parts.window,
            header: parts.header,
            footer: parts.footer,
            content: parts.content,
            stage: parts.stage,
            prefs: parts.prefs,
            options,
            animator,
            state: LayoutState::initial(footer_open, memo_visible),
            theater_mode: false,
            user_footer_height,
            timer_input: initial.timer_input,
            touch_device: initial.touch_device,
            lingering: LingeringContent::default(),
            load: LoadBarrier::default(),
            events: ViewEvents::new(),
        };

        view.show_initial_time(initial.latest_solve);
        view.state = view.resolve_next(view.state)?;
        view.seed_attributes()?;
        log::debug!(
            "app view ready: tier {}, footer {:.0}px",
            classify(&view.state).name(),
            view.state.footer_height()
        );
        Ok(view)
    }

    /// Current layout state.
    #[must_use]
    pub fn state(&self) -> LayoutState {
        self.state
    }

    /// Whether theater mode is on.
    #[must_use]
    pub fn theater_mode(&self) -> bool {
        self.theater_mode
    }

    /// Footer height the user last dragged to.
    #[must_use]
    pub fn user_footer_height(&self) -> f64 {
        self.user_footer_height
    }

    /// Current attribute values.
    #[must_use]
    pub fn attributes(&self) -> ViewSnapshot {
        self.animator.current()
    }

    /// Whether any attribute is mid-animation.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Whether the footer is open, shown and not fading or sliding.
    #[must_use]
    pub fn footer_fully_visible(&self) -> bool {
        self.state.footer_visible()
            && self.state.footer_open()
            && !self.animator.is_animating_key(ViewAttribute::FooterOpacity)
            && !self.animator.is_animating_key(ViewAttribute::FooterClosedness)
            && self.animator.value(ViewAttribute::FooterOpacity) == Some(1.0)
    }

    /// Options the view was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Event bus for subscriptions and polling.
    pub fn events_mut(&mut self) -> &mut ViewEvents {
        &mut self.events
    }

    fn show_initial_time(&mut self, latest: Option<LatestSolve>) {
        if self.timer_input == TimerInput::Entry {
            self.set_time(Some(ENTRY_PLACEHOLDER));
            return;
        }
        let Some(solve) = latest else {
            self.set_time(None);
            return;
        };
        let text = solve.text();
        if text.dnf {
            self.set_time_dnf(&text.time);
        } else {
            self.set_time(Some(&text.time));
        }
        if let Some(memo) = solve.memo_text() {
            self.content.set_memo(&memo);
        }
    }

    fn seed_attributes(&mut self) -> Result<(), ViewError> {
        let middle = self.middle_layout(&self.state)?;
        let state = self.state;
        self.animator.set_attributes([
            (ViewAttribute::FooterClosedness, closedness(state.footer_open())),
            (ViewAttribute::FooterHeight, state.footer_height()),
            (ViewAttribute::FooterOffset, 0.0),
            (ViewAttribute::FooterOpacity, opacity(state.footer_visible())),
            (ViewAttribute::HeaderOffset, 0.0),
            (ViewAttribute::HeaderOpacity, 1.0),
            (ViewAttribute::MiddleHeight, middle.height),
            (ViewAttribute::MiddleY, middle.y),
            (ViewAttribute::MemoOpacity, opacity(state.memo_visible())),
            (ViewAttribute::PbOpacity, 0.0),
            (ViewAttribute::ScrambleOpacity, 0.0),
            (ViewAttribute::TimeSize, middle.time.time_size),
            (ViewAttribute::TimeY, middle.time.time_y),
        ]);
        Ok(())
    }

    fn limits(&self) -> FooterLimits {
        self.options.layout.footer_limits()
    }

    /// Resolve the state that follows `previous` under current conditions.
    fn resolve_next(&self, previous: LayoutState) -> Result<LayoutState, ViewError> {
        let inputs = ResolveInputs {
            window: self.window.size(),
            header_height: self.header.height(),
            footer_closed_height: self.footer.closed_height(),
            constraints: Default::default(),
            preferred_footer_height: self.user_footer_height,
            theater_mode: self.theater_mode,
            limits: self.limits(),
        }
        .for_candidate(&previous, &*self.content);
        resolve(&previous, &inputs)
    }

    fn middle_layout(&self, state: &LayoutState) -> Result<MiddleLayout, ViewError> {
        compute_middle_layout(
            state,
            self.window.size(),
            self.header.height(),
            self.footer.closed_height(),
            &*self.content,
        )
    }

    /// Push the current attribute values to every collaborator.
    fn layout_now(&mut self) {
        let attrs = self.animator.current();
        self.footer.layout(&attrs);
        self.header.layout(&attrs);
        self.content.layout(&attrs);
    }
}

impl std::fmt::Debug for AppView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppView")
            .field("state", &self.state)
            .field("theater_mode", &self.theater_mode)
            .field("user_footer_height", &self.user_footer_height)
            .field("animator", &self.animator)
            .field("load", &self.load)
            .finish_non_exhaustive()
    }
}
