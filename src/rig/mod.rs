//! Host-side rigs built on [`Orbit`](crate::orbit::Orbit).
//!
//! A rig combines an orbit with a distance, a focal point and per-variant
//! offsets to produce a [`Placement`]. Rigs never touch a scene graph; the
//! host copies the placement onto its own transform.

/// Orbit camera with distance limits, pan and focus smoothing.
pub mod camera;
/// Offset hooks layered on top of the orbit placement.
pub mod offsets;
/// Base orbiting object and update modes.
pub mod satellite;

pub use camera::OrbitCamera;
pub use offsets::{CameraOffsets, NoOffsets, OrbitOffsets};
pub use satellite::{Placement, Satellite, UpdateMode};
