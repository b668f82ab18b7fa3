// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Adaptive layout state engine for a speedcubing timer view.
//!
//! The screen is split into a header, a middle region holding the timer and
//! its labels, and a resizable footer with session statistics. As the window
//! shrinks, optional content is dropped in a fixed order (scramble first,
//! then the footer) so the timer always keeps its minimum space. Every
//! visual consequence of a state change is driven through a small attribute
//! animator.
//!
//! # Key entry points
//!
//! - [`view::AppView`] - the orchestrator wiring layout state, animation,
//!   persistence and collaborators together
//! - [`layout::resolve`] - the pure layout state resolver
//! - [`animation::Animator`] - named-attribute animator with an injectable
//!   clock
//! - [`options::Options`] - runtime configuration (animation, layout, load,
//!   stats)
//!
//! # Driving the view
//!
//! The host owns the frame loop. It calls [`view::AppView::tick`] whenever
//! the installed [`util::frame_timing::FrameScheduler`] fires and lays out
//! collaborators from the returned attribute values. The [`headless`] module
//! provides in-memory collaborators and a manual clock for tests and the
//! bundled simulator.

pub mod animation;
pub mod error;
pub mod headless;
pub mod layout;
pub mod options;
pub mod prefs;
pub mod util;
pub mod view;
#[cfg(feature = "web")]
pub mod web;
