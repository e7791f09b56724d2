//! Angle-constrained orbital orientation.
//!
//! An [`Orbit`] is a yaw/pitch/roll triple kept inside the arcs allowed by an
//! [`OrbitConstraint`], with a direction vector and rotation derived from the
//! angles. Everything here is a pure value type: no clocks, no scene graph,
//! no shared state.

/// Circular degree arithmetic (wrap, shortest delta, lerp, move-towards).
pub mod angle;
/// Single-axis arc constraint with wrap-aware clamping.
pub mod axis;
/// Per-axis constraint bundle.
pub mod constraint;
/// The orientation value and its derivations.
pub mod core;
/// Persisted representation and load-time normalization.
pub mod state;

pub use axis::AxisConstraint;
pub use constraint::OrbitConstraint;
pub use self::core::Orbit;
pub use state::OrbitState;
