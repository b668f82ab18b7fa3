//! Attribute animation system for smooth layout transitions.
//!
//! An [`Animator`] owns named numeric attributes (opacities, heights, offsets,
//! font sizes) and eases any subset toward new targets. Each attribute runs
//! on its own timer; retargeting mid-flight continues from the interpolated
//! value instead of snapping back.

mod animator;
mod attribute;
pub mod interpolation;
pub mod transition;

pub use animator::{
    AnimateListener, Animator, AttributeKey, AttributeSnapshot, FrameReport,
};
pub use transition::Transition;
