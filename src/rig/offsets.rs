use glam::{Quat, Vec2, Vec3};

/// Per-variant adjustments layered on top of a rig's orbit placement.
///
/// Every hook defaults to "no adjustment", so a variant only overrides what
/// it changes.
pub trait OrbitOffsets {
    /// Added to the focal point before the orbit is applied.
    fn focal_position_offset(&self) -> Vec3 {
        Vec3::ZERO
    }

    /// Added to the final position. `orbit_rotation` is the orbit's rotation
    /// so offsets can be expressed in the rig's local frame.
    fn orbit_position_offset(&self, orbit_rotation: Quat) -> Vec3 {
        let _ = orbit_rotation;
        Vec3::ZERO
    }

    /// Applied after the orbit rotation.
    fn orbit_rotation_offset(&self) -> Quat {
        Quat::IDENTITY
    }
}

/// Plain orbit placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOffsets;

impl OrbitOffsets for NoOffsets {}

/// Offsets of an [`OrbitCamera`](super::OrbitCamera): a vertical lift of the
/// focal point and a screen-space pan.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraOffsets {
    /// Focal point lift along world `+Y`.
    pub vertical_offset: f32,
    /// Pan along the rig's local right (`x`) and up (`y`) axes.
    pub pan: Vec2,
}

impl OrbitOffsets for CameraOffsets {
    fn focal_position_offset(&self) -> Vec3 {
        Vec3::Y * self.vertical_offset
    }

    fn orbit_position_offset(&self, orbit_rotation: Quat) -> Vec3 {
        orbit_rotation * Vec3::new(self.pan.x, self.pan.y, 0.0)
    }
}
