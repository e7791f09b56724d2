//! Numeric helpers for rigs: easing curves and critically damped smoothing.

pub mod easing;
pub mod smooth_damp;
