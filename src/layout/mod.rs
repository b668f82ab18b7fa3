//! Discrete layout state, the constraint resolver that derives it, and the
//! continuous metrics computed from it.
//!
//! Everything here is pure: no clocks, no collaborators beyond the
//! [`ContentMeasure`] query, no side effects.

pub mod metrics;
pub mod panes;
pub mod resolver;
pub mod state;
pub mod types;

pub use metrics::{compute_middle_layout, MiddleLayout};
pub use panes::{allocate_panes, PaneArrangement, PaneWidths};
pub use resolver::{classify, resolve, FooterLimits, ResolveInputs, Tier};
pub use state::{LayoutFields, LayoutState, StateChange};
pub use types::{
    Constraints, ContentMeasure, ContentVisibility, TimeLayout, WindowSize,
};
