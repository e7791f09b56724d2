//! Rig configuration with TOML preset support.
//!
//! The initial orbit, its constraint and the camera rig settings are
//! consolidated here. Options serialize to/from TOML so rigs can be stored
//! as named presets.

mod orbit;
mod rig;

use std::path::Path;

use glam::{Vec2, Vec3};
pub use orbit::{
    AxisOptions, ConstraintOptions, CustomConstraintOptions, OrbitOptions,
};
pub use rig::RigOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbitError;
use crate::orbit::Orbit;
use crate::rig::{OrbitCamera, Satellite};

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[rig]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Initial orientation and constraint.
    pub orbit: OrbitOptions,
    /// Camera rig parameters.
    pub rig: RigOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrbitError> {
        let content = std::fs::read_to_string(path).map_err(OrbitError::Io)?;
        toml::from_str(&content)
            .map_err(|e| OrbitError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrbitError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrbitError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrbitError::Io)?;
        }
        std::fs::write(path, content).map_err(OrbitError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Build the configured orbit.
    pub fn build_orbit(&self) -> Result<Orbit, OrbitError> {
        self.orbit.build()
    }

    /// Build an [`OrbitCamera`] focused on `focal_position`.
    pub fn build_camera(
        &self,
        focal_position: Vec3,
    ) -> Result<OrbitCamera, OrbitError> {
        let orbit = self.build_orbit()?;
        let mut satellite =
            Satellite::new(orbit, self.rig.distance, focal_position);
        satellite.set_update_mode(self.rig.update_mode);

        let mut camera = OrbitCamera::new(
            satellite,
            self.rig.min_distance,
            self.rig.max_distance,
        );
        camera.set_vertical_offset(self.rig.vertical_offset);
        camera.set_pan(Vec2::from_array(self.rig.pan));
        camera.set_damp_time(self.rig.focus_damp_time);
        camera.set_transition(self.rig.transition);
        Ok(camera)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::{AxisConstraint, OrbitConstraint};
    use crate::rig::UpdateMode;
    use crate::util::easing::Easing;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[rig]
distance = 4.5
update_mode = "manual"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.rig.distance, 4.5);
        assert_eq!(opts.rig.update_mode, UpdateMode::Manual);
        // Everything else should be default
        assert_eq!(opts.rig.max_distance, 10.0);
        assert_eq!(opts.rig.transition, Easing::Linear);
        assert_eq!(opts.orbit, OrbitOptions::default());
    }

    #[test]
    fn preset_constraint_by_name() {
        let toml_str = r#"
[orbit]
yaw = 45.0
pitch = 120.0
constraint = "standard"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        let orbit = opts.build_orbit().unwrap();
        assert_eq!(orbit.constraint(), OrbitConstraint::standard());
        assert!((orbit.yaw() - 45.0).abs() < 1e-3);
        assert!((orbit.pitch() - 90.0).abs() < 1e-3);
    }

    #[test]
    fn custom_constraint_per_axis() {
        let toml_str = r#"
[orbit.constraint]
yaw = { origin = 90.0, range = 120.0 }
pitch = { range = 5.0 }
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        let constraint = opts.orbit.constraint.build().unwrap();
        assert_eq!(constraint.yaw, AxisConstraint::with_origin(120.0, 90.0));
        assert_eq!(constraint.pitch.range(), AxisConstraint::MIN_RANGE);
        assert!(constraint.roll.is_unconstrained());
    }

    #[test]
    fn unknown_preset_is_rejected() {
        let opts: Options =
            toml::from_str("[orbit]\nconstraint = \"wobbly\"\n").unwrap();
        assert!(matches!(
            opts.build_orbit(),
            Err(OrbitError::UnknownPreset(name)) if name == "wobbly"
        ));
    }

    #[test]
    fn build_camera_applies_rig_settings() {
        let mut opts = Options::default();
        opts.rig.distance = 25.0;
        opts.rig.max_distance = 20.0;
        opts.rig.vertical_offset = 1.5;
        opts.rig.pan = [0.5, -0.5];
        opts.rig.focus_damp_time = 3.0;
        opts.rig.transition = Easing::SqrtOut;

        let camera = opts.build_camera(Vec3::ONE).unwrap();
        assert_eq!(camera.distance(), 20.0);
        assert_eq!(camera.vertical_offset(), 1.5);
        assert_eq!(camera.pan(), Vec2::new(0.5, -0.5));
        assert_eq!(camera.damp_time(), OrbitCamera::MAX_DAMP_TIME);
        assert_eq!(camera.transition(), Easing::SqrtOut);
        assert_eq!(camera.satellite().focal_position(), Vec3::ONE);
        assert_eq!(camera.orbit().constraint(), OrbitConstraint::minimal());
    }

    #[test]
    fn inverted_distance_limits_build() {
        let opts: Options = toml::from_str(
            "[rig]\nmin_distance = 5.0\nmax_distance = 2.0\n",
        )
        .unwrap();
        let camera = opts.build_camera(Vec3::ZERO).unwrap();
        assert_eq!(camera.distance_limits(), (2.0, 5.0));
        assert_eq!(camera.distance(), 2.0);
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("orbitech-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.orbit.constraint = ConstraintOptions::Preset("full".into());
        opts.rig.transition = Easing::SmoothStep;

        opts.save(&dir.join("wide.toml")).unwrap();
        Options::default().save(&dir.join("close.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["close", "wide"]);
        assert_eq!(Options::load(&dir.join("wide.toml")).unwrap(), opts);
        assert!(matches!(
            Options::load(&dir.join("missing.toml")),
            Err(OrbitError::Io(_))
        ));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("orbit"));
        assert!(props.contains_key("rig"));

        let rig = &props["rig"]["properties"];
        assert!(rig.get("distance").is_some());
        assert!(rig.get("focus_damp_time").is_some());
        assert!(rig.get("pan").is_none());
        assert!(rig.get("min_distance").is_none());
    }
}
