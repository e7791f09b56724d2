//! Easing curves for rig transitions.
//!
//! A rig blending between two placements maps its raw progress through one
//! of these before interpolating orbit, distance, and focal point.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Progress curve over `[0, 1]`.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Straight line.
    #[default]
    Linear,
    /// Slow start.
    QuadraticIn,
    /// Slow finish.
    QuadraticOut,
    /// Slow start and finish (`3t² - 2t³`).
    SmoothStep,
    /// Fast start that tapers gradually.
    SqrtOut,
    /// Cubic Bézier with fixed end points and control values `c1`, `c2`:
    /// `c1·3t(1-t)² + c2·3(1-t)t² + t³`.
    Cubic {
        /// First control value.
        c1: f32,
        /// Second control value.
        c2: f32,
    },
}

impl Easing {
    /// Map progress `t` through the curve. `t` is clamped to `[0, 1]`.
    #[inline]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let omt = 1.0 - t;
        match *self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => 1.0 - omt * omt,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::SqrtOut => t.sqrt(),
            Self::Cubic { c1, c2 } => {
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}
