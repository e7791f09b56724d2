use serde::{Deserialize, Serialize};

use super::axis::AxisConstraint;
use super::core::Orbit;

/// Independent [`AxisConstraint`]s for yaw, pitch, and roll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConstraint {
    /// Horizontal axis.
    pub yaw: AxisConstraint,
    /// Vertical axis.
    pub pitch: AxisConstraint,
    /// Axis along the orbit direction.
    pub roll: AxisConstraint,
}

impl Default for OrbitConstraint {
    fn default() -> Self {
        Self::full()
    }
}

impl OrbitConstraint {
    /// Bundle three axis constraints.
    pub fn new(
        yaw: AxisConstraint,
        pitch: AxisConstraint,
        roll: AxisConstraint,
    ) -> Self {
        Self { yaw, pitch, roll }
    }

    /// Yaw and pitch constraints with an unconstrained roll.
    pub fn yaw_pitch(yaw: AxisConstraint, pitch: AxisConstraint) -> Self {
        Self::new(yaw, pitch, AxisConstraint::full())
    }

    /// Every axis unconstrained.
    pub fn full() -> Self {
        Self::new(
            AxisConstraint::full(),
            AxisConstraint::full(),
            AxisConstraint::full(),
        )
    }

    /// Free yaw and roll, pitch limited to ±90°.
    pub fn minimal() -> Self {
        Self::new(
            AxisConstraint::full(),
            AxisConstraint::half(),
            AxisConstraint::full(),
        )
    }

    /// Free yaw, pitch and roll both limited to ±90°.
    pub fn standard() -> Self {
        Self::new(
            AxisConstraint::full(),
            AxisConstraint::half(),
            AxisConstraint::half(),
        )
    }

    /// Look up a preset by name (`full`, `minimal`, `standard`).
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "full" => Some(Self::full()),
            "minimal" => Some(Self::minimal()),
            "standard" => Some(Self::standard()),
            _ => None,
        }
    }

    /// Replace all three axes.
    pub fn set(
        &mut self,
        yaw: AxisConstraint,
        pitch: AxisConstraint,
        roll: AxisConstraint,
    ) {
        *self = Self::new(yaw, pitch, roll);
    }

    /// Constrain a yaw angle.
    #[inline]
    pub fn yaw(&self, value: f32) -> f32 {
        self.yaw.constrain(value)
    }

    /// Constrain a pitch angle.
    #[inline]
    pub fn pitch(&self, value: f32) -> f32 {
        self.pitch.constrain(value)
    }

    /// Constrain a roll angle.
    #[inline]
    pub fn roll(&self, value: f32) -> f32 {
        self.roll.constrain(value)
    }

    /// Constrain all three angles into an [`Orbit`] that carries this
    /// constraint.
    pub fn constrain(&self, yaw: f32, pitch: f32, roll: f32) -> Orbit {
        Orbit::new(yaw, pitch, roll, *self)
    }

    /// Component-wise [`AxisConstraint::lerp`]. `t` is not clamped.
    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        Self::new(
            AxisConstraint::lerp(a.yaw, b.yaw, t),
            AxisConstraint::lerp(a.pitch, b.pitch, t),
            AxisConstraint::lerp(a.roll, b.roll, t),
        )
    }
}
