//! A single in-flight attribute animation.

use web_time::{Duration, Instant};

use super::interpolation::{lerp, InterpolationContext};
use crate::util::easing::EasingFunction;

/// Animates one value from `from` to `to`, timed from its own start.
///
/// Each attribute owns its own runner so attributes started at different
/// moments settle independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AttributeAnimation {
    from: f64,
    to: f64,
    start_time: Instant,
    duration: Duration,
}

impl AttributeAnimation {
    pub(crate) fn new(
        from: f64,
        to: f64,
        start_time: Instant,
        duration: Duration,
    ) -> Self {
        Self {
            from,
            to,
            start_time,
            duration,
        }
    }

    /// Value this animation is heading toward.
    pub(crate) fn target(&self) -> f64 {
        self.to
    }

    /// Normalized progress (0.0 to 1.0).
    pub(crate) fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start_time);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Interpolation context at `now`.
    pub(crate) fn context(
        &self,
        now: Instant,
        easing: EasingFunction,
    ) -> InterpolationContext {
        let raw_t = self.progress(now);
        InterpolationContext::new(raw_t, easing.evaluate(raw_t))
    }

    /// Interpolated value at `now`.
    pub(crate) fn value_at(&self, now: Instant, easing: EasingFunction) -> f64 {
        lerp(&self.context(now, easing), self.from, self.to)
    }

    pub(crate) fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}
