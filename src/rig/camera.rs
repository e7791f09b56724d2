use glam::{Vec2, Vec3};
use log::{debug, warn};

use super::offsets::CameraOffsets;
use super::satellite::{Placement, Satellite, UpdateMode};
use crate::error::OrbitError;
use crate::orbit::{Orbit, OrbitConstraint};
use crate::util::easing::Easing;
use crate::util::smooth_damp::smooth_damp_vec3;

/// Orbit camera with distance limits, a vertical focal offset, screen-space
/// panning and a smoothed focal point that can follow a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    satellite: Satellite,
    min_distance: f32,
    max_distance: f32,
    offsets: CameraOffsets,
    focus: FocusTracker,
    transition: Easing,
}

/// Smoothed copy of the focal point.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FocusTracker {
    target: Option<Vec3>,
    smooth_position: Vec3,
    velocity: Vec3,
    damp_time: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(
            Satellite::new(
                Orbit::origin_with_minimal_constraint(),
                1.0,
                Vec3::ZERO,
            ),
            Satellite::MIN_DISTANCE,
            10.0,
        )
    }
}

impl OrbitCamera {
    /// Shortest focus damping time, in seconds (no smoothing).
    pub const MIN_DAMP_TIME: f32 = 0.0;
    /// Longest focus damping time, in seconds.
    pub const MAX_DAMP_TIME: f32 = 1.0;
    /// Focus damping time of a fresh camera.
    pub const DEFAULT_DAMP_TIME: f32 = 0.05;

    /// Camera built around `satellite`, with its distance limited to
    /// `[min_distance, max_distance]`. Inverted limits are swapped.
    pub fn new(satellite: Satellite, min_distance: f32, max_distance: f32) -> Self {
        let (min_distance, max_distance) =
            ordered_limits(min_distance, max_distance);
        let mut camera = Self {
            satellite,
            min_distance,
            max_distance,
            offsets: CameraOffsets::default(),
            focus: FocusTracker {
                target: None,
                smooth_position: satellite.focal_position(),
                velocity: Vec3::ZERO,
                damp_time: Self::DEFAULT_DAMP_TIME,
            },
            transition: Easing::default(),
        };
        camera.set_distance(satellite.distance());
        camera
    }

    /// Camera that reproduces an existing transform, pitch limited by
    /// [`OrbitConstraint::minimal`].
    pub fn from_transform(position: Vec3, forward: Vec3, up: Vec3) -> Self {
        let satellite = Satellite::from_transform(
            position,
            forward,
            up,
            OrbitConstraint::minimal(),
        );
        Self::new(satellite, Satellite::MIN_DISTANCE, 10.0)
    }

    /// Underlying satellite.
    #[inline]
    pub fn satellite(&self) -> &Satellite {
        &self.satellite
    }

    /// Mutable access to orbit, focal point and update mode.
    ///
    /// Distances written through the satellite bypass this camera's limits
    /// until the next [`OrbitCamera::set_distance`].
    #[inline]
    pub fn satellite_mut(&mut self) -> &mut Satellite {
        &mut self.satellite
    }

    /// Current orbit.
    #[inline]
    pub fn orbit(&self) -> &Orbit {
        self.satellite.orbit()
    }

    /// Distance from the focal point.
    #[inline]
    pub fn distance(&self) -> f32 {
        self.satellite.distance()
    }

    /// Set the distance, clamped to this camera's limits.
    pub fn set_distance(&mut self, distance: f32) {
        self.satellite
            .set_distance(distance.max(self.min_distance).min(self.max_distance));
    }

    /// Move toward (`delta < 0`) or away from the focal point within the
    /// limits.
    pub fn dolly(&mut self, delta: f32) {
        self.set_distance(self.distance() + delta);
    }

    /// Distance limits as `(min, max)`.
    #[inline]
    pub fn distance_limits(&self) -> (f32, f32) {
        (self.min_distance, self.max_distance)
    }

    /// Change the distance limits and re-clamp the current distance.
    /// Inverted limits are swapped.
    pub fn set_distance_limits(&mut self, min: f32, max: f32) {
        let (min, max) = ordered_limits(min, max);
        self.min_distance = min;
        self.max_distance = max;
        self.set_distance(self.distance());
        debug!(
            "distance limits [{min}, {max}], distance now {}",
            self.distance()
        );
    }

    /// Distance mapped onto `[0, 1]` across the limits.
    pub fn normalized_distance(&self) -> f32 {
        let span = self.max_distance - self.min_distance;
        if span == 0.0 {
            return 0.0;
        }
        ((self.distance() - self.min_distance) / span).clamp(0.0, 1.0)
    }

    /// Set the distance from a `[0, 1]` fraction of the limits.
    pub fn set_normalized_distance(&mut self, value: f32) {
        let value = value.clamp(0.0, 1.0);
        self.set_distance(
            self.min_distance + (self.max_distance - self.min_distance) * value,
        );
    }

    /// Focal lift along world `+Y`.
    #[inline]
    pub fn vertical_offset(&self) -> f32 {
        self.offsets.vertical_offset
    }

    /// Set the focal lift along world `+Y`.
    pub fn set_vertical_offset(&mut self, offset: f32) {
        self.offsets.vertical_offset = offset;
    }

    /// Pan along the camera's local right/up axes.
    #[inline]
    pub fn pan(&self) -> Vec2 {
        self.offsets.pan
    }

    /// Set the pan along the camera's local right/up axes.
    pub fn set_pan(&mut self, pan: Vec2) {
        self.offsets.pan = pan;
    }

    /// Offsets this camera applies on top of its orbit.
    #[inline]
    pub fn offsets(&self) -> &CameraOffsets {
        &self.offsets
    }

    /// Focus damping time in seconds.
    #[inline]
    pub fn damp_time(&self) -> f32 {
        self.focus.damp_time
    }

    /// Set the focus damping time, clamped to
    /// `[MIN_DAMP_TIME, MAX_DAMP_TIME]`. Zero disables smoothing.
    pub fn set_damp_time(&mut self, damp_time: f32) {
        self.focus.damp_time =
            damp_time.clamp(Self::MIN_DAMP_TIME, Self::MAX_DAMP_TIME);
    }

    /// Curve used by [`OrbitCamera::blend`].
    #[inline]
    pub fn transition(&self) -> Easing {
        self.transition
    }

    /// Set the curve used by [`OrbitCamera::blend`].
    pub fn set_transition(&mut self, transition: Easing) {
        self.transition = transition;
    }

    /// Blend orbit, distance and focal point between two rig states with
    /// the configured transition curve. `t` is clamped to `[0, 1]` and the
    /// blended distance stays within this camera's limits.
    pub fn blend(&mut self, from: &Satellite, to: &Satellite, t: f32) {
        self.satellite.lerp(from, to, t, self.transition);
        self.set_distance(self.satellite.distance());
    }

    /// Move the raw focal point; the smoothed one catches up on
    /// [`OrbitCamera::advance`].
    pub fn set_focal_position(&mut self, position: Vec3) {
        self.satellite.set_focal_position(position);
    }

    /// Follow `target` (or stop following with `None`). With `snap` the
    /// smoothed focal point jumps to the target immediately.
    pub fn set_focal_target(&mut self, target: Option<Vec3>, snap: bool) {
        self.focus.target = target;
        if let Some(position) = target {
            self.satellite.set_focal_position(position);
            if snap {
                debug!("focus snapped to {position:?}");
                self.focus.smooth_position = position;
                self.focus.velocity = Vec3::ZERO;
            }
        }
    }

    /// Target being followed, if any.
    #[inline]
    pub fn focal_target(&self) -> Option<Vec3> {
        self.focus.target
    }

    /// Smoothed focal point, without the vertical offset.
    #[inline]
    pub fn smooth_focal_position(&self) -> Vec3 {
        self.focus.smooth_position
    }

    /// Smoothed focal point with the vertical offset applied.
    pub fn focal_position(&self) -> Vec3 {
        self.focus.smooth_position + Vec3::Y * self.offsets.vertical_offset
    }

    /// Advance focus tracking by `delta_time` seconds.
    pub fn advance(&mut self, delta_time: f32) {
        if let Some(target) = self.focus.target {
            self.satellite.set_focal_position(target);
        }
        let raw = self.satellite.focal_position();
        self.focus.smooth_position =
            if self.focus.damp_time > 0.0 && delta_time > 0.0 {
                smooth_damp_vec3(
                    self.focus.smooth_position,
                    raw,
                    &mut self.focus.velocity,
                    self.focus.damp_time,
                    f32::INFINITY,
                    delta_time,
                )
            } else {
                self.focus.velocity = Vec3::ZERO;
                raw
            };
    }

    /// Pose for the current state, around the smoothed focal point.
    pub fn placement(&self) -> Placement {
        self.satellite
            .placement_around(self.focus.smooth_position, &self.offsets)
    }

    /// Advance focus tracking and, in [`UpdateMode::EveryFrame`], return the
    /// new pose.
    pub fn tick(&mut self, delta_time: f32) -> Option<Placement> {
        if self.satellite.update_mode() == UpdateMode::Manual {
            return None;
        }
        self.advance(delta_time);
        Some(self.placement())
    }

    /// Advance focus tracking and return the pose, for cameras in
    /// [`UpdateMode::Manual`].
    pub fn update_manually(
        &mut self,
        delta_time: f32,
    ) -> Result<Placement, OrbitError> {
        if self.satellite.update_mode() != UpdateMode::Manual {
            warn!("manual update ignored: camera updates every frame");
            return Err(OrbitError::ManualUpdateDisabled);
        }
        self.advance(delta_time);
        Ok(self.placement())
    }
}

/// `(lower, upper)` regardless of argument order. A NaN bound takes the
/// other one.
#[inline]
fn ordered_limits(a: f32, b: f32) -> (f32, f32) {
    (a.min(b), a.max(b))
}
