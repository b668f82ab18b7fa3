//! Transition describes whether a new target animates or snaps.

/// How a new attribute target is applied.
///
/// Window resizes snap continuous sizes because the resize itself is already
/// continuous; user actions animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    /// Set the value immediately, cancelling any in-flight animation.
    Snap,
    /// Ease from the current value to the target.
    #[default]
    Animate,
}

impl Transition {
    /// `Animate` when `animate` is true, otherwise `Snap`.
    #[must_use]
    pub fn animate_if(animate: bool) -> Self {
        if animate {
            Self::Animate
        } else {
            Self::Snap
        }
    }

    /// Debug name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Snap => "snap",
            Self::Animate => "animate",
        }
    }
}
