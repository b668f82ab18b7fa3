//! Shared utilities for the layout engine.
//!
//! Helpers for easing curves, time sources and frame scheduling.

pub mod easing;
pub mod frame_timing;
