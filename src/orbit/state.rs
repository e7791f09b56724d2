//! At-rest representation of an [`Orbit`].
//!
//! Only the raw angles and the constraint are stored. Loading always goes
//! back through [`Orbit::new`], so angles are re-clamped by the stored
//! constraint and the direction and rotation are recomputed.

use serde::{Deserialize, Serialize};

use super::constraint::OrbitConstraint;
use super::core::Orbit;

/// Persisted angles and constraint of an [`Orbit`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitState {
    /// Raw yaw in degrees.
    pub yaw: f32,
    /// Raw pitch in degrees.
    pub pitch: f32,
    /// Raw roll in degrees.
    pub roll: f32,
    /// Per-axis `(origin, range)` constraint.
    pub constraint: OrbitConstraint,
}

/// Rebuild an [`Orbit`] from stored angles and constraint.
pub fn deserialize(
    yaw: f32,
    pitch: f32,
    roll: f32,
    constraint: OrbitConstraint,
) -> Orbit {
    Orbit::new(yaw, pitch, roll, constraint)
}

impl From<OrbitState> for Orbit {
    fn from(state: OrbitState) -> Self {
        deserialize(state.yaw, state.pitch, state.roll, state.constraint)
    }
}

impl From<Orbit> for OrbitState {
    fn from(orbit: Orbit) -> Self {
        Self {
            yaw: orbit.yaw(),
            pitch: orbit.pitch(),
            roll: orbit.roll(),
            constraint: orbit.constraint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::orbit::AxisConstraint;

    #[test]
    fn derived_fields_are_not_persisted() {
        let orbit = Orbit::new(45.0, 20.0, 0.0, OrbitConstraint::minimal());
        let value = serde_json::to_value(orbit).unwrap();
        let fields = value.as_object().unwrap();
        assert!(fields.contains_key("yaw"));
        assert!(fields.contains_key("constraint"));
        assert!(!fields.contains_key("direction"));
        assert!(!fields.contains_key("rotation"));
    }

    #[test]
    fn load_recomputes_cache() {
        let orbit = Orbit::new(120.0, 35.0, 10.0, OrbitConstraint::standard());
        let json = serde_json::to_string(&orbit).unwrap();
        let loaded: Orbit = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, orbit);
        assert!(loaded
            .direction()
            .abs_diff_eq(Orbit::direction_of(120.0, 35.0), 1e-5));
    }

    #[test]
    fn load_reclamps_against_stored_constraint() {
        // Angles saved under a wider constraint than the one now stored.
        let json = r#"{
            "yaw": 10.0,
            "pitch": 150.0,
            "roll": 0.0,
            "constraint": {
                "pitch": { "origin": 0.0, "range": 180.0 }
            }
        }"#;
        let loaded: Orbit = serde_json::from_str(json).unwrap();
        assert!((loaded.pitch() - 90.0).abs() < 1e-3);
        assert!(loaded.constraint().yaw.is_unconstrained());
        assert_eq!(loaded.constraint().pitch, AxisConstraint::half());
        assert!(loaded
            .direction()
            .abs_diff_eq(Orbit::direction_of(10.0, 90.0), 1e-5));
        assert!((loaded.rotation() * Vec3::Z)
            .abs_diff_eq(loaded.direction(), 1e-5));
    }

    #[test]
    fn deserialize_matches_constructor() {
        let constraint = OrbitConstraint::standard();
        assert_eq!(
            deserialize(-10.0, 100.0, 5.0, constraint),
            Orbit::new(-10.0, 100.0, 5.0, constraint)
        );
    }
}
