//! Arithmetic on the circular degree domain `[0, 360)`.
//!
//! Every stored angle in the crate passes through [`wrap`]. The shortest-path
//! helpers ([`delta`], [`lerp`], [`move_towards`]) never take the long way
//! around the circle.

/// No rotation.
pub const ORIGIN_ROTATION: f32 = 0.0;
/// A quarter turn, in degrees.
pub const QUARTER_ROTATION: f32 = 90.0;
/// A half turn, in degrees.
pub const HALF_ROTATION: f32 = 180.0;
/// A full turn, in degrees.
pub const FULL_ROTATION: f32 = 360.0;

/// Loop `value` into `[0, length]`.
///
/// Float rounding can land exactly on `length` for tiny negative inputs;
/// callers that need a half-open domain should use [`wrap`].
#[inline]
pub fn repeat(value: f32, length: f32) -> f32 {
    (value - (value / length).floor() * length).clamp(0.0, length)
}

/// Normalize an angle into `[0, 360)`.
#[inline]
pub fn wrap(value: f32) -> f32 {
    let wrapped = repeat(value, FULL_ROTATION);
    if wrapped >= FULL_ROTATION {
        ORIGIN_ROTATION
    } else {
        wrapped
    }
}

/// Signed shortest difference `target - current`, in `(-180, 180]`.
#[inline]
pub fn delta(current: f32, target: f32) -> f32 {
    let mut difference = repeat(target - current, FULL_ROTATION);
    if difference > HALF_ROTATION {
        difference -= FULL_ROTATION;
    }
    difference
}

/// Shortest-path interpolation from `a` to `b`.
///
/// `t` is not clamped: values outside `[0, 1]` extrapolate along the same
/// arc. The result is not wrapped.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + delta(a, b) * t
}

/// Step `current` toward `target` by at most `max_delta` degrees along the
/// shortest arc.
///
/// Lands exactly on `target` once it is within reach.
#[inline]
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let difference = delta(current, target);
    if -max_delta < difference && difference < max_delta {
        return target;
    }
    current + difference.signum() * max_delta
}

/// `true` when `a` and `b` are indistinguishable at `f32` precision.
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (b - a).abs() < (1e-6 * a.abs().max(b.abs())).max(f32::EPSILON * 8.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_lands_in_half_open_domain() {
        for value in [
            -1e-7, -720.5, -360.0, -0.5, 0.0, 12.0, 359.9, 360.0, 725.0,
        ] {
            let wrapped = wrap(value);
            assert!(
                (0.0..FULL_ROTATION).contains(&wrapped),
                "wrap({value}) = {wrapped}"
            );
            assert_eq!(wrap(wrapped), wrapped);
        }
        assert_eq!(wrap(360.0), 0.0);
        assert_eq!(wrap(-90.0), 270.0);
        assert_eq!(wrap(450.0), 90.0);
    }

    #[test]
    fn delta_takes_shortest_arc() {
        assert_eq!(delta(350.0, 10.0), 20.0);
        assert_eq!(delta(10.0, 350.0), -20.0);
        assert_eq!(delta(0.0, 180.0), 180.0);
        assert_eq!(delta(90.0, 90.0), 0.0);
        for (a, b) in [(0.0, 359.0), (123.0, 301.0), (-40.0, 500.0)] {
            assert!(delta(a, b).abs() <= HALF_ROTATION);
        }
    }

    #[test]
    fn lerp_crosses_wrap_point() {
        assert!((wrap(lerp(350.0, 10.0, 0.5)) - 0.0).abs() < 1e-4);
        assert_eq!(lerp(350.0, 10.0, 0.0), 350.0);
        assert!((wrap(lerp(350.0, 10.0, 1.0)) - 10.0).abs() < 1e-4);
        // Extrapolation keeps going along the same arc.
        assert!((lerp(0.0, 10.0, 2.0) - 20.0).abs() < 1e-4);
    }

    #[test]
    fn move_towards_steps_and_snaps() {
        assert_eq!(move_towards(0.0, 90.0, 30.0), 30.0);
        assert_eq!(move_towards(10.0, 350.0, 5.0), 5.0);
        assert_eq!(move_towards(0.0, 20.0, 30.0), 20.0);
    }

    #[test]
    fn approx_eq_is_relative() {
        assert!(approx_eq(1.0, 1.0 + 1e-7));
        assert!(!approx_eq(1.0, 1.001));
        assert!(approx_eq(0.0, 0.0));
    }
}
