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

//! Angle-constrained orbital orientation for cameras and other objects
//! circling a focal point.
//!
//! Orbitech represents an orientation as yaw, pitch, and roll angles kept
//! inside per-axis arcs, and derives a unit direction and rotation from them.
//! Arc clamping is wrap-aware: a value outside an arc that straddles 0°/360°
//! snaps to whichever edge is angularly nearer.
//!
//! # Key entry points
//!
//! - [`orbit::Orbit`] - the orientation value with cached direction/rotation
//! - [`orbit::OrbitConstraint`] / [`orbit::AxisConstraint`] - per-axis arcs
//! - [`rig::OrbitCamera`] - distance, pan, and focus smoothing on top of an
//!   orbit
//! - [`options::Options`] - TOML presets describing a rig
//!
//! # Architecture
//!
//! The [`orbit`] module is pure value arithmetic with no clock and no scene
//! graph. [`rig`] layers the host-facing pieces (distance, focal point,
//! offsets, update modes) on top and produces a [`rig::Placement`] per
//! update, which the host copies onto its own transform.

pub mod error;
pub mod options;
pub mod orbit;
pub mod rig;
pub mod util;

pub use error::OrbitError;
