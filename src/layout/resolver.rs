//! Constraint resolver: derives the next [`LayoutState`] from window space and
//! content requirements.
//!
//! Degradation is a fixed three-tier ladder. When space runs short the
//! scramble goes first, then the footer (taking the PB label with it). There
//! are no intermediate partial states.

use serde::{Deserialize, Serialize};

use super::state::{LayoutFields, LayoutState};
use super::types::{Constraints, ContentMeasure, WindowSize};
use crate::error::{check_finite, ViewError};

/// Inclusive bounds on the footer height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FooterLimits {
    /// Smallest height at which the footer is shown at all.
    pub min: f64,
    /// Largest height a user drag may request.
    pub max: f64,
}

impl FooterLimits {
    /// Limits from explicit bounds. A `max` below `min` is raised to `min`.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max: max.max(min),
        }
    }

    /// Clamp a user-requested footer height into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, requested: f64) -> f64 {
        requested.min(self.max).max(self.min)
    }
}

impl Default for FooterLimits {
    fn default() -> Self {
        Self::new(264.0, 400.0)
    }
}

/// Everything the resolver looks at besides the previous state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolveInputs {
    /// Current viewport.
    pub window: WindowSize,
    /// Natural height of the header.
    pub header_height: f64,
    /// Height of the footer bar when closed.
    pub footer_closed_height: f64,
    /// Content-region needs for the candidate visibility.
    pub constraints: Constraints,
    /// Footer height the user last dragged to (already clamped).
    pub preferred_footer_height: f64,
    /// Whether theater mode is on.
    pub theater_mode: bool,
    /// Footer height bounds.
    pub limits: FooterLimits,
}

impl ResolveInputs {
    /// Fill in [`constraints`](Self::constraints) by asking `content` about
    /// the labels `previous` would show given unlimited space.
    #[must_use]
    pub fn for_candidate<C: ContentMeasure + ?Sized>(
        mut self,
        previous: &LayoutState,
        content: &C,
    ) -> Self {
        self.constraints =
            content.compute_constraints(previous.candidate_visibility());
        self
    }
}

/// Rung of the degradation ladder a resolved state sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Footer and every available label fit.
    Full,
    /// Scramble sacrificed; footer still shown at its minimum height.
    NoScramble,
    /// Footer hidden too.
    NoFooter,
}

impl Tier {
    /// Short lowercase name for logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::NoScramble => "no-scramble",
            Self::NoFooter => "no-footer",
        }
    }
}

/// Tier a state belongs to. Theater states report [`Tier::NoFooter`].
#[must_use]
pub fn classify(state: &LayoutState) -> Tier {
    if !state.footer_visible() {
        Tier::NoFooter
    } else if state.scramble_available() && !state.scramble_visible() {
        Tier::NoScramble
    } else {
        Tier::Full
    }
}

/// Compute the next layout state.
///
/// Only `footer_open`, the availability flags and `memo_visible` are read
/// from `previous` outside theater mode, so leaving theater mode resolves as
/// if it had never been entered.
pub fn resolve(
    previous: &LayoutState,
    inputs: &ResolveInputs,
) -> Result<LayoutState, ViewError> {
    let fields = previous.fields();

    if inputs.theater_mode {
        return LayoutState::try_new(LayoutFields {
            footer_visible: false,
            header_visible: false,
            pb_visible: false,
            scramble_visible: false,
            ..fields
        });
    }

    let window_height = check_finite("windowHeight", inputs.window.height)?;
    let header_height = check_finite("headerHeight", inputs.header_height)?;
    let soft = check_finite("softConstraint", inputs.constraints.soft)?;
    let bare = check_finite("bareConstraint", inputs.constraints.bare)?;
    let min = inputs.limits.min;

    let candidate = previous.candidate_visibility();
    let available = window_height - header_height;
    let footer_size = available - soft;

    let next = if footer_size >= min {
        LayoutFields {
            footer_height: footer_size.min(inputs.preferred_footer_height),
            footer_visible: true,
            header_visible: true,
            pb_visible: candidate.pb,
            scramble_visible: fields.scramble_available,
            ..fields
        }
    } else {
        let footer_visible = available - bare >= min;
        LayoutFields {
            footer_height: min,
            footer_visible,
            header_visible: true,
            pb_visible: footer_visible && candidate.pb,
            scramble_visible: false,
            ..fields
        }
    };
    LayoutState::try_new(next)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn inputs(height: f64, soft: f64, bare: f64) -> ResolveInputs {
        ResolveInputs {
            window: WindowSize::new(1024.0, height),
            header_height: 60.0,
            footer_closed_height: 50.0,
            constraints: Constraints { soft, bare },
            preferred_footer_height: 300.0,
            theater_mode: false,
            limits: FooterLimits::default(),
        }
    }

    fn previous(footer_open: bool, pb: bool, scramble: bool) -> LayoutState {
        LayoutState::initial(footer_open, false)
            .with_pb_available(pb)
            .with_scramble_available(scramble)
    }

    #[test]
    fn everything_fits_uses_preferred_height() {
        let prev = previous(true, true, true);
        let state = resolve(&prev, &inputs(800.0, 400.0, 200.0)).unwrap();
        assert!(state.footer_visible());
        assert_eq!(state.footer_height(), 300.0);
        assert!(state.scramble_visible());
        assert!(!state.pb_visible(), "PB hidden while footer is open");
        assert_eq!(classify(&state), Tier::Full);
    }

    #[test]
    fn footer_shrinks_below_preference_when_tight() {
        let prev = previous(true, false, true);
        let state = resolve(&prev, &inputs(760.0, 400.0, 200.0)).unwrap();
        assert_eq!(state.footer_height(), 300.0);
        let state = resolve(&prev, &inputs(740.0, 400.0, 200.0)).unwrap();
        assert_eq!(state.footer_height(), 280.0);
    }

    #[test]
    fn short_window_hides_scramble_footer_and_pb() {
        let prev = previous(false, true, true);
        let state = resolve(&prev, &inputs(500.0, 400.0, 200.0)).unwrap();
        assert!(!state.scramble_visible());
        assert!(!state.footer_visible());
        assert!(!state.pb_visible());
        assert_eq!(state.footer_height(), 264.0);
        assert_eq!(state.footer_extent(50.0), 0.0);
        assert_eq!(classify(&state), Tier::NoFooter);
    }

    #[test]
    fn middle_tier_keeps_footer_and_pb() {
        let prev = previous(false, true, true);
        // available 540, soft leaves 140, bare leaves 340
        let state = resolve(&prev, &inputs(600.0, 400.0, 200.0)).unwrap();
        assert!(!state.scramble_visible());
        assert!(state.footer_visible());
        assert!(state.pb_visible());
        assert_eq!(state.footer_height(), 264.0);
        assert_eq!(classify(&state), Tier::NoScramble);
    }

    #[test]
    fn theater_hides_chrome_and_keeps_the_rest() {
        let prev = resolve(&previous(false, true, true), &inputs(900.0, 400.0, 200.0))
            .unwrap()
            .with_memo_visible(true);
        let mut theater = inputs(900.0, 400.0, 200.0);
        theater.theater_mode = true;
        let state = resolve(&prev, &theater).unwrap();
        assert!(!state.header_visible());
        assert!(!state.footer_visible());
        assert!(!state.scramble_visible());
        assert!(!state.pb_visible());
        assert!(state.memo_visible());
        assert_eq!(state.footer_height(), prev.footer_height());
        assert!(!state.footer_open());
    }

    #[test]
    fn nan_inputs_are_rejected() {
        let prev = previous(true, false, false);
        let err = resolve(&prev, &inputs(f64::NAN, 400.0, 200.0)).unwrap_err();
        assert!(matches!(
            err,
            ViewError::InvalidMetric {
                name: "windowHeight",
                ..
            }
        ));
        assert!(resolve(&prev, &inputs(800.0, f64::NAN, 200.0)).is_err());
    }

    #[test]
    fn limits_clamp_user_drags() {
        let limits = FooterLimits::default();
        assert_eq!(limits.clamp(100.0), 264.0);
        assert_eq!(limits.clamp(320.0), 320.0);
        assert_eq!(limits.clamp(1000.0), 400.0);
        assert_eq!(FooterLimits::new(300.0, 200.0).max, 300.0);
    }

    fn arb_previous() -> impl Strategy<Value = LayoutState> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(open, pb, scramble, memo)| {
                previous(open, pb, scramble).with_memo_visible(memo)
            },
        )
    }

    proptest! {
        #[test]
        fn hidden_footer_contributes_no_height(
            prev in arb_previous(),
            height in 0.0f64..2000.0,
            soft in 0.0f64..800.0,
            slack in 0.0f64..400.0,
            theater in any::<bool>(),
        ) {
            let mut inputs = inputs(height, soft, (soft - slack).max(0.0));
            inputs.theater_mode = theater;
            let state = resolve(&prev, &inputs).unwrap();
            if !state.footer_visible() {
                prop_assert_eq!(state.footer_extent(inputs.footer_closed_height), 0.0);
            }
            prop_assert!(!state.pb_visible() || state.pb_available());
            prop_assert!(!state.scramble_visible() || state.scramble_available());
        }

        #[test]
        fn scramble_goes_before_footer(
            prev in arb_previous(),
            soft in 0.0f64..800.0,
            slack in 0.0f64..400.0,
        ) {
            let prev = prev.with_scramble_available(true);
            let bare = (soft - slack).max(0.0);
            let mut scramble_seen_hidden = false;
            let mut footer_seen_hidden = false;
            let mut height = 2000.0;
            while height >= 0.0 {
                let state = resolve(&prev, &inputs(height, soft, bare)).unwrap();
                // Once gone, stays gone as the window keeps shrinking.
                prop_assert!(!(scramble_seen_hidden && state.scramble_visible()));
                prop_assert!(!(footer_seen_hidden && state.footer_visible()));
                // The footer never disappears while the scramble remains.
                prop_assert!(state.footer_visible() || !state.scramble_visible());
                scramble_seen_hidden |= !state.scramble_visible();
                footer_seen_hidden |= !state.footer_visible();
                height -= 5.0;
            }
        }

        #[test]
        fn leaving_theater_leaves_no_residue(
            prev in arb_previous(),
            height in 0.0f64..2000.0,
            soft in 0.0f64..800.0,
        ) {
            let plain = inputs(height, soft, soft / 2.0);
            let mut theater = plain;
            theater.theater_mode = true;
            let direct = resolve(&prev, &plain).unwrap();
            let through = resolve(&resolve(&prev, &theater).unwrap(), &plain).unwrap();
            prop_assert_eq!(direct, through);
        }
    }
}
