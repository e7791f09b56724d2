use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbitError;
use crate::orbit::{AxisConstraint, Orbit, OrbitConstraint};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Axis", inline)]
/// Allowed arc on one axis, as written in a preset file.
pub struct AxisOptions {
    /// Center of the allowed arc in degrees.
    #[serde(default)]
    #[schemars(title = "Origin", range(min = 0.0, max = 360.0), extend("step" = 1.0))]
    pub origin: f32,
    /// Width of the allowed arc in degrees (360 = unconstrained).
    #[schemars(title = "Range", range(min = 15.0, max = 360.0), extend("step" = 1.0))]
    pub range: f32,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            origin: 0.0,
            range: 360.0,
        }
    }
}

impl From<AxisOptions> for AxisConstraint {
    fn from(axis: AxisOptions) -> Self {
        Self::with_origin(axis.range, axis.origin)
    }
}

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
/// Per-axis arcs for a custom constraint. Missing axes are unconstrained.
pub struct CustomConstraintOptions {
    /// Yaw arc.
    pub yaw: AxisOptions,
    /// Pitch arc.
    pub pitch: AxisOptions,
    /// Roll arc.
    pub roll: AxisOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(untagged)]
/// Either a preset name or explicit per-axis arcs.
pub enum ConstraintOptions {
    /// `"full"`, `"minimal"` or `"standard"`.
    Preset(String),
    /// Explicit arcs.
    Custom(CustomConstraintOptions),
}

impl Default for ConstraintOptions {
    fn default() -> Self {
        Self::Preset("minimal".into())
    }
}

impl ConstraintOptions {
    /// Resolve into an [`OrbitConstraint`].
    pub fn build(&self) -> Result<OrbitConstraint, OrbitError> {
        match self {
            Self::Preset(name) => OrbitConstraint::preset(name)
                .ok_or_else(|| OrbitError::UnknownPreset(name.clone())),
            Self::Custom(custom) => Ok(OrbitConstraint::new(
                custom.yaw.into(),
                custom.pitch.into(),
                custom.roll.into(),
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit", inline)]
#[serde(default)]
/// Initial orientation and its constraint.
pub struct OrbitOptions {
    /// Initial yaw in degrees.
    #[schemars(title = "Yaw", range(min = 0.0, max = 360.0), extend("step" = 1.0))]
    pub yaw: f32,
    /// Initial pitch in degrees.
    #[schemars(title = "Pitch", range(min = 0.0, max = 360.0), extend("step" = 1.0))]
    pub pitch: f32,
    /// Initial roll in degrees.
    #[schemars(title = "Roll", range(min = 0.0, max = 360.0), extend("step" = 1.0))]
    pub roll: f32,
    /// Constraint applied to every write.
    pub constraint: ConstraintOptions,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 30.0,
            roll: 0.0,
            constraint: ConstraintOptions::default(),
        }
    }
}

impl OrbitOptions {
    /// Build the configured orbit.
    pub fn build(&self) -> Result<Orbit, OrbitError> {
        let constraint = self.constraint.build()?;
        Ok(Orbit::new(self.yaw, self.pitch, self.roll, constraint))
    }
}
