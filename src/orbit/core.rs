use std::ops::{Add, Mul, Sub};

use glam::{EulerRot, Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::angle::{self, ORIGIN_ROTATION, QUARTER_ROTATION};
use super::axis::AxisConstraint;
use super::constraint::OrbitConstraint;
use super::state::OrbitState;

/// Orientation on a sphere around a focal point, as constrained yaw, pitch,
/// and roll angles in degrees.
///
/// `direction` and `rotation` are derived from the angles when the value is
/// built and are never stale: every mutator rebuilds the whole value through
/// [`Orbit::new`].
///
/// Conventions (right-handed, `+Y` up):
/// - `direction` points from the focal point toward the orbiting object.
///   Yaw 0 / pitch 0 is `+X`, yaw 90 is `+Z`, pitch 90 is `+Y`.
/// - `rotation` maps local `+Z` onto `direction`, so an object looking down
///   its local `-Z` axis faces the focal point. Roll spins around
///   `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "OrbitState", into = "OrbitState")]
pub struct Orbit {
    yaw: f32,
    pitch: f32,
    roll: f32,
    direction: Vec3,
    rotation: Quat,
    constraint: OrbitConstraint,
}

impl Default for Orbit {
    fn default() -> Self {
        Self::origin()
    }
}

impl Orbit {
    /// Pitch of the shorthand origin orbits.
    const ORIGIN_PITCH: f32 = 30.0;

    /// Build from raw angles, constraining each through `constraint`.
    pub fn new(
        yaw: f32,
        pitch: f32,
        roll: f32,
        constraint: OrbitConstraint,
    ) -> Self {
        let yaw = constraint.yaw(yaw);
        let pitch = constraint.pitch(pitch);
        let roll = constraint.roll(roll);
        Self {
            yaw,
            pitch,
            roll,
            direction: Self::direction_of(yaw, pitch),
            rotation: Self::rotation_of(yaw, pitch, roll),
            constraint,
        }
    }

    /// Unconstrained orbit with no roll.
    pub fn from_yaw_pitch(yaw: f32, pitch: f32) -> Self {
        Self::new(yaw, pitch, ORIGIN_ROTATION, OrbitConstraint::full())
    }

    /// Orbit whose direction is `direction`, using world `+Y` to settle
    /// roll.
    pub fn from_direction(direction: Vec3, constraint: OrbitConstraint) -> Self {
        Self::from_direction_up(direction, Vec3::Y, constraint)
    }

    /// Orbit whose direction is `direction`, using `up` to settle roll.
    ///
    /// `direction` need not be normalized but must not be zero.
    pub fn from_direction_up(
        direction: Vec3,
        up: Vec3,
        constraint: OrbitConstraint,
    ) -> Self {
        Self::from_rotation(look_rotation(direction, up), constraint)
    }

    /// Decompose `rotation` (local `+Z` along the direction) into angles.
    pub fn from_rotation(rotation: Quat, constraint: OrbitConstraint) -> Self {
        let (y, x, z) = rotation.normalize().to_euler(EulerRot::YXZ);
        let yaw = angle::wrap(QUARTER_ROTATION - y.to_degrees());
        let pitch = angle::wrap(-x.to_degrees());
        let roll = angle::wrap(z.to_degrees());
        Self::new(yaw, pitch, roll, constraint)
    }

    /// Yaw 0, pitch 30, unconstrained.
    pub fn origin() -> Self {
        Self::new(
            ORIGIN_ROTATION,
            Self::ORIGIN_PITCH,
            ORIGIN_ROTATION,
            OrbitConstraint::full(),
        )
    }

    /// Yaw 0, pitch 30, under [`OrbitConstraint::minimal`].
    pub fn origin_with_minimal_constraint() -> Self {
        Self::new(
            ORIGIN_ROTATION,
            Self::ORIGIN_PITCH,
            ORIGIN_ROTATION,
            OrbitConstraint::minimal(),
        )
    }

    /// Yaw 0, pitch 30, under [`OrbitConstraint::standard`].
    pub fn origin_with_standard_constraint() -> Self {
        Self::new(
            ORIGIN_ROTATION,
            Self::ORIGIN_PITCH,
            ORIGIN_ROTATION,
            OrbitConstraint::standard(),
        )
    }

    /// Horizontal angle in `[0, 360)`.
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Vertical angle in `[0, 360)`.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Spin around the direction, in `[0, 360)`.
    #[inline]
    pub fn roll(&self) -> f32 {
        self.roll
    }

    /// Unit vector from the focal point toward the orbiting object.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Rotation whose local `+Z` is [`Orbit::direction`].
    #[inline]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Constraint applied to every write.
    #[inline]
    pub fn constraint(&self) -> OrbitConstraint {
        self.constraint
    }

    /// Set yaw. Values indistinguishable from the current one are ignored.
    pub fn set_yaw(&mut self, yaw: f32) {
        if !angle::approx_eq(self.yaw, yaw) {
            self.set(yaw, self.pitch, self.roll);
        }
    }

    /// Set pitch. Values indistinguishable from the current one are ignored.
    pub fn set_pitch(&mut self, pitch: f32) {
        if !angle::approx_eq(self.pitch, pitch) {
            self.set(self.yaw, pitch, self.roll);
        }
    }

    /// Set roll. Values indistinguishable from the current one are ignored.
    pub fn set_roll(&mut self, roll: f32) {
        if !angle::approx_eq(self.roll, roll) {
            self.set(self.yaw, self.pitch, roll);
        }
    }

    /// Overwrite all three angles under the current constraint.
    pub fn set(&mut self, yaw: f32, pitch: f32, roll: f32) {
        *self = Self::new(yaw, pitch, roll, self.constraint);
    }

    /// Overwrite yaw and pitch, keeping roll.
    pub fn set_yaw_pitch(&mut self, yaw: f32, pitch: f32) {
        self.set(yaw, pitch, self.roll);
    }

    /// Re-derive from a direction, keeping the current constraint.
    pub fn orient_towards(&mut self, direction: Vec3) {
        *self = Self::from_direction(direction, self.constraint);
    }

    /// Re-derive from a direction and up vector, keeping the current
    /// constraint.
    pub fn orient_towards_up(&mut self, direction: Vec3, up: Vec3) {
        *self = Self::from_direction_up(direction, up, self.constraint);
    }

    /// Re-derive from a rotation, keeping the current constraint.
    pub fn orient_towards_rotation(&mut self, rotation: Quat) {
        *self = Self::from_rotation(rotation, self.constraint);
    }

    /// Swap the constraint and re-clamp the current angles through it.
    pub fn constrain(&mut self, constraint: OrbitConstraint) {
        *self = Self::new(self.yaw, self.pitch, self.roll, constraint);
    }

    /// [`Orbit::constrain`] with the three axes given separately.
    pub fn constrain_axes(
        &mut self,
        yaw: AxisConstraint,
        pitch: AxisConstraint,
        roll: AxisConstraint,
    ) {
        self.constrain(OrbitConstraint::new(yaw, pitch, roll));
    }

    /// Shortest-path interpolation per axis, with the constraint
    /// interpolated alongside. `t` is not clamped.
    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        Self::new(
            angle::lerp(a.yaw, b.yaw, t),
            angle::lerp(a.pitch, b.pitch, t),
            angle::lerp(a.roll, b.roll, t),
            OrbitConstraint::lerp(&a.constraint, &b.constraint, t),
        )
    }

    /// Signed shortest differences `target - current` as
    /// `(yaw, pitch, roll)`, each in `(-180, 180]`.
    pub fn angular_delta(current: &Self, target: &Self) -> Vec3 {
        Vec3::new(
            angle::delta(current.yaw, target.yaw),
            angle::delta(current.pitch, target.pitch),
            angle::delta(current.roll, target.roll),
        )
    }

    /// [`Orbit::angular_delta`] packed into an orbit under `current`'s
    /// constraint.
    ///
    /// The result is a difference, not an orientation: negative deltas come
    /// back wrapped (e.g. `-20` reads as `340`).
    pub fn delta(current: &Self, target: &Self) -> Self {
        let delta = Self::angular_delta(current, target);
        Self::new(delta.x, delta.y, delta.z, current.constraint)
    }

    /// Step each axis toward `target` by at most `max_delta` degrees along
    /// the shortest arc, keeping `current`'s constraint.
    pub fn rotate_towards(current: &Self, target: &Self, max_delta: f32) -> Self {
        Self::new(
            angle::move_towards(current.yaw, target.yaw, max_delta),
            angle::move_towards(current.pitch, target.pitch, max_delta),
            angle::move_towards(current.roll, target.roll, max_delta),
            current.constraint,
        )
    }

    /// Spherical `(yaw, pitch)` to a unit direction.
    pub fn direction_of(yaw: f32, pitch: f32) -> Vec3 {
        let (sin_yaw, cos_yaw) = yaw.to_radians().sin_cos();
        let (sin_pitch, cos_pitch) = pitch.to_radians().sin_cos();
        Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch)
    }

    /// Rotation for `(yaw, pitch, roll)` whose local `+Z` matches
    /// [`Orbit::direction_of`].
    pub fn rotation_of(yaw: f32, pitch: f32, roll: f32) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            (QUARTER_ROTATION - yaw).to_radians(),
            (-pitch).to_radians(),
            roll.to_radians(),
        )
    }
}

/// Rotation with local `+Z` along `direction` and local `+Y` as close to
/// `up` as possible.
fn look_rotation(direction: Vec3, up: Vec3) -> Quat {
    let forward = direction.normalize();
    let right = up
        .cross(forward)
        .try_normalize()
        .unwrap_or_else(|| forward.any_orthonormal_vector());
    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}

// The operators below work on raw angles and ignore wrap-around; use
// `Orbit::delta` or `Orbit::rotate_towards` for shortest-path arithmetic.

impl Add for Orbit {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.yaw + rhs.yaw,
            self.pitch + rhs.pitch,
            self.roll + rhs.roll,
            self.constraint,
        )
    }
}

impl Sub for Orbit {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.yaw - rhs.yaw,
            self.pitch - rhs.pitch,
            self.roll - rhs.roll,
            self.constraint,
        )
    }
}

impl Mul for Orbit {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.yaw * rhs.yaw,
            self.pitch * rhs.pitch,
            self.roll * rhs.roll,
            self.constraint,
        )
    }
}

impl Mul<f32> for Orbit {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(
            self.yaw * rhs,
            self.pitch * rhs,
            self.roll * rhs,
            self.constraint,
        )
    }
}
