//! Centralized interpolation utilities for animation.

/// Per-frame interpolation context computed once from raw progress and the
/// easing curve, then shared by every value derived from the same animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolationContext {
    /// Raw progress (0.0 to 1.0), unmodified from the animation timer.
    pub raw_t: f64,
    /// Eased progress. This is the value interpolation uses.
    pub eased_t: f64,
}

impl InterpolationContext {
    /// Context from raw and eased values.
    #[must_use]
    pub fn new(raw_t: f64, eased_t: f64) -> Self {
        Self { raw_t, eased_t }
    }

    /// Whether the animation this context was sampled from has finished.
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.raw_t >= 1.0
    }
}

/// Lerp two values using the context's eased progress.
///
/// A complete context returns `end` exactly so settled attributes never
/// carry rounding error.
#[inline]
#[must_use]
pub fn lerp(ctx: &InterpolationContext, start: f64, end: f64) -> f64 {
    if ctx.is_complete() {
        return end;
    }
    start + (end - start) * ctx.eased_t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_context() {
        assert!(InterpolationContext::new(1.0, 1.0).is_complete());
        assert!(!InterpolationContext::new(0.99, 1.0).is_complete());
    }

    #[test]
    fn test_lerp_uses_eased_progress() {
        let ctx = InterpolationContext::new(0.5, 0.25);
        assert!((lerp(&ctx, 0.0, 100.0) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_lerp_complete_is_exact() {
        let ctx = InterpolationContext::new(1.0, 0.999);
        assert_eq!(lerp(&ctx, 0.1, 0.3), 0.3);
    }
}
