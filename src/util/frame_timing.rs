//! Time sources and frame scheduling.
//!
//! The animator only needs two things from its host: the current time and a
//! way to ask for the next frame. Native hosts use [`SystemClock`]; tests and
//! the headless simulator drive a shared [`ManualClock`].

use std::cell::Cell;
use std::rc::Rc;

use web_time::{Duration, Instant};

/// A monotonic time source.
pub trait Clock {
    /// Current time.
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Wall-clock time via [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same underlying time, so a test can hand one clone to
/// the animator and keep another to advance it.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    /// Clock frozen at the current wall-clock time.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Clock frozen at `start`.
    #[must_use]
    pub fn starting_at(start: Instant) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    /// Move the clock forward by `step` and return the new time.
    pub fn advance(&self, step: Duration) -> Instant {
        let next = self.now.get() + step;
        self.now.set(next);
        next
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Host hook for requesting a frame callback (e.g. `requestAnimationFrame`).
///
/// The animator calls this at most once per pending frame and never while
/// idle.
pub trait FrameScheduler {
    /// Ask the host to call back on the next frame.
    fn request_frame(&mut self);
}

/// Frame scheduler that only counts requests. The host polls
/// [`Animator::is_animating`](crate::animation::Animator::is_animating)
/// instead of receiving callbacks.
#[derive(Debug, Clone, Default)]
pub struct CountingScheduler {
    requests: Rc<Cell<u64>>,
}

impl CountingScheduler {
    /// New scheduler with a zero count.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames requested so far (shared across clones).
    #[must_use]
    pub fn requests(&self) -> u64 {
        self.requests.get()
    }
}

impl FrameScheduler for CountingScheduler {
    fn request_frame(&mut self) {
        self.requests.set(self.requests.get() + 1);
    }
}
