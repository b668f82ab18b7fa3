//! Attribute animator: named numeric values eased toward targets.

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use web_time::{Duration, Instant};

use super::attribute::AttributeAnimation;
use super::transition::Transition;
use crate::options::AnimationOptions;
use crate::util::easing::EasingFunction;
use crate::util::frame_timing::{Clock, FrameScheduler, SystemClock};

/// Key type for animated attributes.
///
/// Implemented for `&'static str` so ad-hoc callers can use plain names, and
/// by [`ViewAttribute`](crate::view::ViewAttribute) for the app view's closed
/// set.
pub trait AttributeKey: Copy + Eq + Hash + fmt::Debug {
    /// Stable name used in logs and name-based lookups.
    fn name(&self) -> &'static str;
}

impl AttributeKey for &'static str {
    fn name(&self) -> &'static str {
        *self
    }
}

/// Point-in-time copy of every attribute value.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSnapshot<K: AttributeKey> {
    values: FxHashMap<K, f64>,
}

impl<K: AttributeKey> AttributeSnapshot<K> {
    /// Value of `key`, if it has ever been set or animated.
    #[must_use]
    pub fn get(&self, key: K) -> Option<f64> {
        self.values.get(&key).copied()
    }

    /// Value of `key`, or `0.0` if it does not exist yet.
    #[must_use]
    pub fn value(&self, key: K) -> f64 {
        self.get(key).unwrap_or(0.0)
    }

    /// Look up a value by its key name.
    #[must_use]
    pub fn get_named(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(key, _)| key.name() == name)
            .map(|(_, value)| *value)
    }

    /// Iterate over `(key, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        self.values.iter().map(|(key, value)| (*key, *value))
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no attribute exists yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Outcome of one animator frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameReport<K> {
    /// Attributes whose animation reached its target on this frame.
    pub settled: Vec<K>,
    /// Whether any animation is still in flight after this frame.
    pub animating: bool,
}

/// Listener invoked with the full snapshot on every animated frame.
pub type AnimateListener<K> = Box<dyn FnMut(&AttributeSnapshot<K>)>;

/// Owns a set of named values and animates any subset of them.
///
/// Every attribute tracks its own start time, so attributes started on
/// different events overlap and settle independently. Frames are requested
/// from the [`FrameScheduler`] only while something is in flight.
pub struct Animator<K: AttributeKey> {
    values: FxHashMap<K, f64>,
    animations: FxHashMap<K, AttributeAnimation>,
    duration: Duration,
    easing: EasingFunction,
    clock: Box<dyn Clock>,
    scheduler: Option<Box<dyn FrameScheduler>>,
    frame_pending: bool,
    on_animate: Option<AnimateListener<K>>,
}

impl<K: AttributeKey> Animator<K> {
    /// Animator on the system clock.
    #[must_use]
    pub fn new(options: &AnimationOptions) -> Self {
        Self::with_clock(options, SystemClock)
    }

    /// Animator on a caller-provided clock.
    pub fn with_clock(
        options: &AnimationOptions,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            values: FxHashMap::default(),
            animations: FxHashMap::default(),
            duration: options.duration(),
            easing: options.easing,
            clock: Box::new(clock),
            scheduler: None,
            frame_pending: false,
            on_animate: None,
        }
    }

    /// Install the host's frame scheduler.
    pub fn set_frame_scheduler(&mut self, scheduler: Box<dyn FrameScheduler>) {
        self.scheduler = Some(scheduler);
        if !self.animations.is_empty() {
            self.frame_pending = false;
            self.request_frame();
        }
    }

    /// Register the per-frame listener, replacing any previous one.
    pub fn set_on_animate(
        &mut self,
        listener: impl FnMut(&AttributeSnapshot<K>) + 'static,
    ) {
        self.on_animate = Some(Box::new(listener));
    }

    /// Current time on the animator's clock.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Set attributes immediately, cancelling in-flight animations on every
    /// touched key.
    pub fn set_attributes(&mut self, attrs: impl IntoIterator<Item = (K, f64)>) {
        for (key, value) in attrs {
            self.set_attribute(key, value);
        }
    }

    /// Set one attribute immediately, cancelling its in-flight animation.
    pub fn set_attribute(&mut self, key: K, value: f64) {
        if self.animations.remove(&key).is_some() {
            log::trace!("cancelled animation of {} by set", key.name());
        }
        let _ = self.values.insert(key, value);
    }

    /// Animate `key` toward `target`, starting now.
    pub fn animate_attribute(&mut self, key: K, target: f64) {
        let now = self.clock.now();
        self.animate_attribute_at(key, target, now);
    }

    /// Animate `key` toward `target`, starting at `now`.
    ///
    /// Re-animating toward the target already in flight does nothing.
    /// Animating toward a different target restarts from the current
    /// interpolated value.
    pub fn animate_attribute_at(&mut self, key: K, target: f64, now: Instant) {
        let from = match self.animations.get(&key) {
            Some(anim) if anim.target() == target => return,
            Some(anim) => {
                let from = anim.value_at(now, self.easing);
                log::trace!(
                    "retarget {} {:.2} -> {target:.2}",
                    key.name(),
                    anim.target()
                );
                from
            }
            None => {
                let from = self.values.get(&key).copied().unwrap_or(0.0);
                if from == target {
                    let _ = self.values.insert(key, from);
                    return;
                }
                from
            }
        };

        let _ = self.values.insert(key, from);
        let _ = self.animations.insert(
            key,
            AttributeAnimation::new(from, target, now, self.duration),
        );
        self.request_frame();
    }

    /// Route a target through [`set_attribute`](Self::set_attribute) or
    /// [`animate_attribute`](Self::animate_attribute).
    pub fn apply(&mut self, key: K, value: f64, transition: Transition) {
        match transition {
            Transition::Snap => self.set_attribute(key, value),
            Transition::Animate => self.animate_attribute(key, value),
        }
    }

    /// Snapshot of every value as of the last frame or set.
    #[must_use]
    pub fn current(&self) -> AttributeSnapshot<K> {
        AttributeSnapshot {
            values: self.values.clone(),
        }
    }

    /// Value of one attribute as of the last frame or set.
    #[must_use]
    pub fn value(&self, key: K) -> Option<f64> {
        self.values.get(&key).copied()
    }

    /// Target of the in-flight animation on `key`, if any.
    #[must_use]
    pub fn target(&self, key: K) -> Option<f64> {
        self.animations.get(&key).map(AttributeAnimation::target)
    }

    /// Whether any attribute is mid-animation.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.animations.is_empty()
    }

    /// Whether `key` is mid-animation.
    #[must_use]
    pub fn is_animating_key(&self, key: K) -> bool {
        self.animations.contains_key(&key)
    }

    /// Whether a frame has been requested and not yet delivered.
    #[must_use]
    pub fn wants_frame(&self) -> bool {
        self.frame_pending
    }

    /// Advance to the clock's current time.
    pub fn tick(&mut self) -> Option<FrameReport<K>> {
        let now = self.clock.now();
        self.update(now)
    }

    /// Advance every in-flight animation to `now`.
    ///
    /// Returns `None` when idle. Otherwise notifies the listener with the
    /// new snapshot and reports which attributes settled.
    pub fn update(&mut self, now: Instant) -> Option<FrameReport<K>> {
        self.frame_pending = false;
        if self.animations.is_empty() {
            return None;
        }

        let mut settled = Vec::new();
        for (key, anim) in &self.animations {
            if anim.is_complete(now) {
                settled.push(*key);
                let _ = self.values.insert(*key, anim.target());
            } else {
                let _ = self.values.insert(*key, anim.value_at(now, self.easing));
            }
        }
        for key in &settled {
            let _ = self.animations.remove(key);
            log::trace!("settled {}", key.name());
        }

        let animating = !self.animations.is_empty();
        if animating {
            self.request_frame();
        }

        if self.on_animate.is_some() {
            let snapshot = self.current();
            if let Some(listener) = self.on_animate.as_mut() {
                listener(&snapshot);
            }
        }

        Some(FrameReport { settled, animating })
    }

    fn request_frame(&mut self) {
        if self.frame_pending {
            return;
        }
        self.frame_pending = true;
        if let Some(scheduler) = self.scheduler.as_mut() {
            scheduler.request_frame();
        }
    }
}

impl<K: AttributeKey> fmt::Debug for Animator<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animator")
            .field("values", &self.values)
            .field("animating", &self.animations.len())
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .field("frame_pending", &self.frame_pending)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::util::frame_timing::{CountingScheduler, ManualClock};

    const MS: Duration = Duration::from_millis(1);

    fn linear_options() -> AnimationOptions {
        AnimationOptions {
            duration_ms: 100,
            easing: EasingFunction::Linear,
        }
    }

    fn animator() -> (Animator<&'static str>, ManualClock, CountingScheduler) {
        let clock = ManualClock::new();
        let scheduler = CountingScheduler::new();
        let mut animator = Animator::with_clock(&linear_options(), clock.clone());
        animator.set_frame_scheduler(Box::new(scheduler.clone()));
        (animator, clock, scheduler)
    }

    #[test]
    fn set_is_immediate_and_silent() {
        let (mut animator, _clock, scheduler) = animator();
        animator.set_attributes([("footerHeight", 300.0), ("headerOpacity", 1.0)]);
        assert_eq!(animator.value("footerHeight"), Some(300.0));
        assert_eq!(animator.current().len(), 2);
        assert!(!animator.is_animating());
        assert_eq!(scheduler.requests(), 0);
    }

    #[test]
    fn animation_interpolates_and_settles() {
        let (mut animator, clock, _scheduler) = animator();
        animator.set_attribute("pbOpacity", 0.0);
        animator.animate_attribute("pbOpacity", 1.0);

        let report = animator.update(clock.advance(50 * MS)).unwrap();
        assert!(report.animating);
        assert!(report.settled.is_empty());
        assert!((animator.value("pbOpacity").unwrap() - 0.5).abs() < 1e-9);

        let report = animator.update(clock.advance(50 * MS)).unwrap();
        assert!(!report.animating);
        assert_eq!(report.settled, vec!["pbOpacity"]);
        assert_eq!(animator.value("pbOpacity"), Some(1.0));
        assert!(animator.update(clock.advance(16 * MS)).is_none());
    }

    #[test]
    fn same_target_is_idempotent() {
        let (mut animator, clock, scheduler) = animator();
        animator.animate_attribute("middleY", 60.0);
        let _ = clock.advance(40 * MS);
        animator.animate_attribute("middleY", 60.0);
        animator.animate_attribute("middleY", 60.0);
        assert_eq!(scheduler.requests(), 1);

        // Still finishes on the original schedule.
        let report = animator.update(clock.advance(60 * MS)).unwrap();
        assert_eq!(report.settled, vec!["middleY"]);
    }

    #[test]
    fn retarget_starts_from_interpolated_value() {
        let (mut animator, clock, _scheduler) = animator();
        animator.set_attribute("timeSize", 0.0);
        animator.animate_attribute("timeSize", 100.0);
        let _ = animator.update(clock.advance(50 * MS));

        animator.animate_attribute("timeSize", 0.0);
        assert_eq!(animator.target("timeSize"), Some(0.0));
        // No snap-back: the new animation begins at 50.
        assert!((animator.value("timeSize").unwrap() - 50.0).abs() < 1e-9);

        let _ = animator.update(clock.advance(50 * MS));
        assert!((animator.value("timeSize").unwrap() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn set_cancels_in_flight_animation() {
        let (mut animator, clock, _scheduler) = animator();
        animator.animate_attribute("footerHeight", 400.0);
        animator.set_attribute("footerHeight", 264.0);
        assert!(!animator.is_animating_key("footerHeight"));
        assert!(animator.update(clock.advance(200 * MS)).is_none());
        assert_eq!(animator.value("footerHeight"), Some(264.0));
    }

    #[test]
    fn attributes_finish_independently() {
        let (mut animator, clock, _scheduler) = animator();
        animator.animate_attribute("a", 1.0);
        let _ = animator.update(clock.advance(60 * MS));
        animator.animate_attribute("b", 1.0);

        let report = animator.update(clock.advance(40 * MS)).unwrap();
        assert_eq!(report.settled, vec!["a"]);
        assert!(report.animating);

        let report = animator.update(clock.advance(60 * MS)).unwrap();
        assert_eq!(report.settled, vec!["b"]);
        assert!(!report.animating);
    }

    #[test]
    fn frames_stop_when_idle() {
        let (mut animator, clock, scheduler) = animator();
        animator.animate_attribute("a", 1.0);
        animator.animate_attribute("b", 2.0);
        assert_eq!(scheduler.requests(), 1);
        assert!(animator.wants_frame());

        let _ = animator.update(clock.advance(50 * MS));
        assert_eq!(scheduler.requests(), 2);
        let _ = animator.update(clock.advance(50 * MS));
        assert_eq!(scheduler.requests(), 2);
        assert!(!animator.wants_frame());
    }

    #[test]
    fn animating_to_current_value_does_nothing() {
        let (mut animator, _clock, scheduler) = animator();
        animator.set_attribute("memoOpacity", 1.0);
        animator.animate_attribute("memoOpacity", 1.0);
        assert!(!animator.is_animating());
        assert_eq!(scheduler.requests(), 0);
    }

    #[test]
    fn missing_attribute_starts_from_zero() {
        let (mut animator, clock, _scheduler) = animator();
        animator.animate_attribute("fresh", 10.0);
        assert_eq!(animator.value("fresh"), Some(0.0));
        let _ = animator.update(clock.advance(100 * MS));
        assert_eq!(animator.current().get_named("fresh"), Some(10.0));
    }

    #[test]
    fn listener_sees_every_frame_including_settle() {
        let (mut animator, clock, _scheduler) = animator();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        animator.set_on_animate(move |snapshot| {
            sink.borrow_mut().push(snapshot.value("x"));
        });

        animator.animate_attribute("x", 4.0);
        let _ = animator.update(clock.advance(50 * MS));
        let _ = animator.update(clock.advance(50 * MS));
        let _ = animator.update(clock.advance(50 * MS));
        assert_eq!(*seen.borrow(), vec![2.0, 4.0]);
    }

    #[test]
    fn apply_routes_by_transition() {
        let (mut animator, _clock, _scheduler) = animator();
        animator.apply("a", 5.0, Transition::Snap);
        animator.apply("b", 5.0, Transition::Animate);
        assert_eq!(animator.value("a"), Some(5.0));
        assert!(animator.is_animating_key("b"));
    }
}
