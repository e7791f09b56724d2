use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use super::angle::{
    self, FULL_ROTATION, HALF_ROTATION, ORIGIN_ROTATION, QUARTER_ROTATION,
};

/// Allowed arc on a single rotational axis.
///
/// The arc is `range` degrees wide and centered on `origin`. A range of a
/// full turn leaves the axis unconstrained. Ranges are floored at
/// [`AxisConstraint::MIN_RANGE`] so an axis can never be locked to a single
/// angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "AxisConstraintRecord")]
pub struct AxisConstraint {
    origin: f32,
    range: f32,
}

/// Unvalidated on-disk shape of an [`AxisConstraint`].
#[derive(Deserialize)]
struct AxisConstraintRecord {
    #[serde(default)]
    origin: f32,
    range: f32,
}

impl From<AxisConstraintRecord> for AxisConstraint {
    fn from(record: AxisConstraintRecord) -> Self {
        Self::with_origin(record.range, record.origin)
    }
}

impl Default for AxisConstraint {
    fn default() -> Self {
        Self::full()
    }
}

impl AxisConstraint {
    /// Narrowest arc an axis may be limited to, in degrees.
    pub const MIN_RANGE: f32 = 15.0;

    /// Arc of `range` degrees centered on 0.
    pub fn new(range: f32) -> Self {
        Self::with_origin(range, ORIGIN_ROTATION)
    }

    /// Arc of `range` degrees centered on `origin`.
    pub fn with_origin(range: f32, origin: f32) -> Self {
        Self {
            origin: angle::wrap(origin),
            range: clamp_range(range),
        }
    }

    /// Unconstrained axis.
    pub fn full() -> Self {
        Self::new(FULL_ROTATION)
    }

    /// Half-turn arc centered on 0 (±90°).
    pub fn half() -> Self {
        Self::new(HALF_ROTATION)
    }

    /// Quarter-turn arc centered on 0 (±45°).
    pub fn quarter() -> Self {
        Self::new(QUARTER_ROTATION)
    }

    /// Center of the allowed arc, in `[0, 360)`.
    #[inline]
    pub fn origin(&self) -> f32 {
        self.origin
    }

    /// Width of the allowed arc, in `[MIN_RANGE, 360]`.
    #[inline]
    pub fn range(&self) -> f32 {
        self.range
    }

    /// Width of the disallowed arc.
    #[inline]
    pub fn remainder(&self) -> f32 {
        FULL_ROTATION - self.range
    }

    /// `true` when the arc covers the whole circle.
    #[inline]
    pub fn is_unconstrained(&self) -> bool {
        self.range >= FULL_ROTATION
    }

    /// Move the arc's center. The value is wrapped into `[0, 360)`.
    pub fn set_origin(&mut self, origin: f32) {
        self.origin = angle::wrap(origin);
    }

    /// Resize the arc. The value is clamped into `[MIN_RANGE, 360]`.
    pub fn set_range(&mut self, range: f32) {
        self.range = clamp_range(range);
    }

    /// Fold `value` into the allowed arc.
    ///
    /// Values outside the arc snap to whichever edge is angularly nearer.
    /// A value exactly antipodal to the arc's center snaps to the upper edge
    /// (`origin + range / 2`).
    pub fn constrain(&self, value: f32) -> f32 {
        if self.is_unconstrained() {
            angle::wrap(value)
        } else {
            clamp(value, self.range, self.origin - self.range / 2.0)
        }
    }

    /// Interpolate origin along the shortest arc and range linearly.
    ///
    /// `t` is not clamped.
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        let origin = angle::lerp(a.origin, b.origin, t);
        let range = a.range + (b.range - a.range) * t;
        Self::with_origin(range, origin)
    }
}

#[inline]
fn clamp_range(range: f32) -> f32 {
    range.clamp(AxisConstraint::MIN_RANGE, FULL_ROTATION)
}

/// Clamp `value` onto the arc `[start, start + range]`.
fn clamp(value: f32, range: f32, start: f32) -> f32 {
    let mut value = angle::wrap(value);
    let range = clamp_range(range);

    if range >= FULL_ROTATION {
        return value;
    }

    if start.abs() > ORIGIN_ROTATION {
        return angle::wrap(clamp(value - start, range, ORIGIN_ROTATION) + start);
    }

    // Past the antipode of the arc's center the lower edge is nearer, so
    // fold the value below zero before the linear clamp.
    let boundary = range + (FULL_ROTATION - range) / 2.0;
    if value > HALF_ROTATION && value > boundary {
        value -= FULL_ROTATION;
    }

    angle::wrap(value.clamp(ORIGIN_ROTATION, range))
}

impl Add<f32> for AxisConstraint {
    type Output = Self;

    /// Rotate the arc's center by `degrees`.
    fn add(mut self, degrees: f32) -> Self {
        self.set_origin(self.origin + degrees);
        self
    }
}

impl Sub<f32> for AxisConstraint {
    type Output = Self;

    /// Rotate the arc's center by `-degrees`.
    fn sub(mut self, degrees: f32) -> Self {
        self.set_origin(self.origin - degrees);
        self
    }
}
