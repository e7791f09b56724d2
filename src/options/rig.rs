use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::rig::{OrbitCamera, UpdateMode};
use crate::util::easing::Easing;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Rig", inline)]
#[serde(default)]
/// Distance, offsets and timing of an orbit camera.
pub struct RigOptions {
    /// When the rig produces a new placement.
    pub update_mode: UpdateMode,
    /// Initial distance from the focal point.
    #[schemars(title = "Distance", range(min = 0.0, max = 300.0), extend("step" = 0.1))]
    pub distance: f32,
    /// Closest allowed distance.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest allowed distance.
    #[schemars(skip)]
    pub max_distance: f32,
    /// Focal point lift along world up.
    #[schemars(title = "Vertical Offset", extend("step" = 0.05))]
    pub vertical_offset: f32,
    /// Pan along the rig's local right and up axes.
    #[schemars(skip)]
    pub pan: [f32; 2],
    /// Focus smoothing time in seconds (0 snaps).
    #[schemars(title = "Focus Damping", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub focus_damp_time: f32,
    /// Curve used when blending between rig states.
    pub transition: Easing,
}

impl Default for RigOptions {
    fn default() -> Self {
        Self {
            update_mode: UpdateMode::EveryFrame,
            distance: 1.0,
            min_distance: 0.0,
            max_distance: 10.0,
            vertical_offset: 0.0,
            pan: [0.0, 0.0],
            focus_damp_time: OrbitCamera::DEFAULT_DAMP_TIME,
            transition: Easing::Linear,
        }
    }
}
