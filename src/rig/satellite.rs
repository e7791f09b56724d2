use glam::{Quat, Vec3};
use log::{debug, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::offsets::OrbitOffsets;
use crate::error::OrbitError;
use crate::orbit::{Orbit, OrbitConstraint};
use crate::util::easing::Easing;

/// When a rig produces a new placement.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum UpdateMode {
    /// Every [`Satellite::tick`].
    #[default]
    EveryFrame,
    /// Only through [`Satellite::update_manually`].
    Manual,
}

/// Final world-space pose of a rig for one update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// World position.
    pub position: Vec3,
    /// World rotation (local `-Z` faces the focal point).
    pub rotation: Quat,
}

/// An object orbiting a focal point at a bounded distance.
///
/// The satellite only stores values; a host reads [`Satellite::placement`]
/// once per update and applies it to its own transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Satellite {
    orbit: Orbit,
    distance: f32,
    focal_position: Vec3,
    update_mode: UpdateMode,
}

impl Default for Satellite {
    fn default() -> Self {
        Self::new(Orbit::origin(), 1.0, Vec3::ZERO)
    }
}

impl Satellite {
    /// Closest allowed distance to the focal point.
    pub const MIN_DISTANCE: f32 = 0.0;
    /// Farthest allowed distance from the focal point.
    pub const MAX_DISTANCE: f32 = 300.0;

    /// Satellite at `distance` from `focal_position` along `orbit`.
    pub fn new(orbit: Orbit, distance: f32, focal_position: Vec3) -> Self {
        Self {
            orbit,
            distance: clamp_distance(distance),
            focal_position,
            update_mode: UpdateMode::default(),
        }
    }

    /// Satellite that reproduces an existing transform: it sits at
    /// `position`, looks along `forward`, and focuses one unit ahead.
    pub fn from_transform(
        position: Vec3,
        forward: Vec3,
        up: Vec3,
        constraint: OrbitConstraint,
    ) -> Self {
        let forward = forward.normalize();
        let orbit = Orbit::from_direction_up(-forward, up, constraint);
        Self::new(orbit, 1.0, position + forward)
    }

    /// Current orbit.
    #[inline]
    pub fn orbit(&self) -> &Orbit {
        &self.orbit
    }

    /// Orbit yaw in degrees.
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.orbit.yaw()
    }

    /// Orbit pitch in degrees.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.orbit.pitch()
    }

    /// Orbit roll in degrees.
    #[inline]
    pub fn roll(&self) -> f32 {
        self.orbit.roll()
    }

    /// Set orbit yaw (ignored if indistinguishable from the current value).
    pub fn set_yaw(&mut self, yaw: f32) {
        self.orbit.set_yaw(yaw);
    }

    /// Set orbit pitch (ignored if indistinguishable from the current value).
    pub fn set_pitch(&mut self, pitch: f32) {
        self.orbit.set_pitch(pitch);
    }

    /// Set orbit roll (ignored if indistinguishable from the current value).
    pub fn set_roll(&mut self, roll: f32) {
        self.orbit.set_roll(roll);
    }

    /// Distance from the focal point.
    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Set the distance, clamped to `[MIN_DISTANCE, MAX_DISTANCE]`.
    pub fn set_distance(&mut self, distance: f32) {
        self.distance = clamp_distance(distance);
    }

    /// Focal point without any variant offset.
    #[inline]
    pub fn focal_position(&self) -> Vec3 {
        self.focal_position
    }

    /// Move the focal point.
    pub fn set_focal_position(&mut self, position: Vec3) {
        self.focal_position = position;
    }

    /// Current update mode.
    #[inline]
    pub fn update_mode(&self) -> UpdateMode {
        self.update_mode
    }

    /// Switch between per-tick and manual updates.
    pub fn set_update_mode(&mut self, mode: UpdateMode) {
        self.update_mode = mode;
    }

    /// Overwrite all three orbit angles.
    pub fn set_orbit(&mut self, yaw: f32, pitch: f32, roll: f32) {
        self.orbit.set(yaw, pitch, roll);
    }

    /// Overwrite yaw and pitch, keeping roll.
    pub fn set_orbit_yaw_pitch(&mut self, yaw: f32, pitch: f32) {
        self.orbit.set_yaw_pitch(yaw, pitch);
    }

    /// Replace the orbit wholesale, constraint included.
    pub fn replace_orbit(&mut self, orbit: Orbit) {
        self.orbit = orbit;
    }

    /// Add to the current angles (raw, then constrained).
    pub fn rotate(&mut self, yaw: f32, pitch: f32, roll: f32) {
        self.set_orbit(
            self.orbit.yaw() + yaw,
            self.orbit.pitch() + pitch,
            self.orbit.roll() + roll,
        );
    }

    /// Move toward (`delta < 0`) or away from the focal point.
    pub fn dolly(&mut self, delta: f32) {
        self.set_distance(self.distance + delta);
    }

    /// Blend between two satellites. `t` is clamped to `[0, 1]` and then
    /// mapped through `easing`.
    pub fn lerp(&mut self, from: &Self, to: &Self, t: f32, easing: Easing) {
        let t = easing.evaluate(t);
        self.orbit = Orbit::lerp(&from.orbit, &to.orbit, t);
        self.distance = from.distance + (to.distance - from.distance) * t;
        self.focal_position = from.focal_position.lerp(to.focal_position, t);
    }

    /// Unit vector from the focal point toward the satellite.
    #[inline]
    pub fn orbit_direction(&self) -> Vec3 {
        self.orbit.direction()
    }

    /// Orbit rotation before any variant offset.
    #[inline]
    pub fn orbit_rotation(&self) -> Quat {
        self.orbit.rotation()
    }

    /// Position on the orbit around `focal_position`, before the orbit
    /// position offset.
    pub fn orbit_position(&self, offsets: &impl OrbitOffsets) -> Vec3 {
        self.orbit_position_around(self.focal_position, offsets)
    }

    fn orbit_position_around(
        &self,
        focal_position: Vec3,
        offsets: &impl OrbitOffsets,
    ) -> Vec3 {
        focal_position
            + offsets.focal_position_offset()
            + self.orbit.direction() * self.distance
    }

    /// Final pose around the stored focal point.
    pub fn placement(&self, offsets: &impl OrbitOffsets) -> Placement {
        self.placement_around(self.focal_position, offsets)
    }

    /// Final pose around an explicit focal point (e.g. a smoothed one).
    pub fn placement_around(
        &self,
        focal_position: Vec3,
        offsets: &impl OrbitOffsets,
    ) -> Placement {
        let rotation = self.orbit.rotation();
        Placement {
            position: self.orbit_position_around(focal_position, offsets)
                + offsets.orbit_position_offset(rotation),
            rotation: rotation * offsets.orbit_rotation_offset(),
        }
    }

    /// Per-frame update: a placement in [`UpdateMode::EveryFrame`], nothing
    /// in [`UpdateMode::Manual`].
    pub fn tick(&self, offsets: &impl OrbitOffsets) -> Option<Placement> {
        match self.update_mode {
            UpdateMode::EveryFrame => Some(self.placement(offsets)),
            UpdateMode::Manual => None,
        }
    }

    /// On-demand update for rigs in [`UpdateMode::Manual`].
    pub fn update_manually(
        &self,
        offsets: &impl OrbitOffsets,
    ) -> Result<Placement, OrbitError> {
        if self.update_mode != UpdateMode::Manual {
            warn!(
                "manual update ignored: rig is in {:?} mode",
                self.update_mode
            );
            return Err(OrbitError::ManualUpdateDisabled);
        }
        let placement = self.placement(offsets);
        debug!("manual rig update -> {:?}", placement.position);
        Ok(placement)
    }
}

#[inline]
fn clamp_distance(distance: f32) -> f32 {
    distance.clamp(Satellite::MIN_DISTANCE, Satellite::MAX_DISTANCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rig::NoOffsets;

    fn assert_vec(actual: Vec3, expected: Vec3) {
        assert!(
            actual.abs_diff_eq(expected, 1e-4),
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn distance_is_clamped() {
        let mut satellite = Satellite::new(Orbit::origin(), -4.0, Vec3::ZERO);
        assert_eq!(satellite.distance(), Satellite::MIN_DISTANCE);
        satellite.set_distance(1000.0);
        assert_eq!(satellite.distance(), Satellite::MAX_DISTANCE);
        satellite.set_distance(10.0);
        satellite.dolly(-2.5);
        assert_eq!(satellite.distance(), 7.5);
        satellite.dolly(-100.0);
        assert_eq!(satellite.distance(), 0.0);
    }

    #[test]
    fn placement_orbits_focal_point() {
        let focal = Vec3::new(1.0, 2.0, 3.0);
        let satellite =
            Satellite::new(Orbit::from_yaw_pitch(90.0, 0.0), 5.0, focal);
        let placement = satellite.placement(&NoOffsets);
        assert_vec(placement.position, focal + Vec3::Z * 5.0);
        // Looking down local -Z points back at the focal point.
        assert_vec(placement.rotation * Vec3::NEG_Z, Vec3::NEG_Z);
    }

    #[test]
    fn from_transform_reproduces_pose() {
        let position = Vec3::new(0.0, 3.0, 4.0);
        let forward = Vec3::new(0.0, -3.0, -4.0);
        let satellite = Satellite::from_transform(
            position,
            forward,
            Vec3::Y,
            OrbitConstraint::full(),
        );
        let placement = satellite.placement(&NoOffsets);
        assert_vec(placement.position, position);
        assert_vec(placement.rotation * Vec3::NEG_Z, forward.normalize());
        assert_vec(satellite.focal_position(), position + forward.normalize());
    }

    #[test]
    fn rotate_adds_and_constrains() {
        let mut satellite = Satellite::new(
            Orbit::origin_with_standard_constraint(),
            2.0,
            Vec3::ZERO,
        );
        satellite.rotate(30.0, 80.0, 0.0);
        assert!((satellite.yaw() - 30.0).abs() < 1e-3);
        assert!((satellite.pitch() - 90.0).abs() < 1e-3);

        satellite.set_orbit_yaw_pitch(-10.0, 10.0);
        assert!((satellite.yaw() - 350.0).abs() < 1e-3);
        satellite.set_roll(20.0);
        assert!((satellite.roll() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn lerp_blends_every_component() {
        let from = Satellite::new(Orbit::from_yaw_pitch(350.0, 0.0), 2.0, Vec3::ZERO);
        let to = Satellite::new(
            Orbit::from_yaw_pitch(30.0, 20.0),
            6.0,
            Vec3::new(4.0, 0.0, 0.0),
        );
        let mut blended = Satellite::default();

        blended.lerp(&from, &to, 0.5, Easing::Linear);
        assert!((blended.yaw() - 10.0).abs() < 1e-3);
        assert!((blended.pitch() - 10.0).abs() < 1e-3);
        assert_eq!(blended.distance(), 4.0);
        assert_vec(blended.focal_position(), Vec3::new(2.0, 0.0, 0.0));

        // Progress past the end is clamped.
        blended.lerp(&from, &to, 3.0, Easing::SmoothStep);
        assert_eq!(blended.distance(), 6.0);
        assert!((blended.yaw() - 30.0).abs() < 1e-3);
    }

    #[test]
    fn update_modes() {
        let mut satellite = Satellite::default();
        assert!(satellite.tick(&NoOffsets).is_some());
        assert!(matches!(
            satellite.update_manually(&NoOffsets),
            Err(OrbitError::ManualUpdateDisabled)
        ));

        satellite.set_update_mode(UpdateMode::Manual);
        assert!(satellite.tick(&NoOffsets).is_none());
        let placement = satellite.update_manually(&NoOffsets).unwrap();
        assert_eq!(placement, satellite.placement(&NoOffsets));
    }
}
