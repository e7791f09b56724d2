//! Critically damped spring toward a moving target.
//!
//! Uses the usual polynomial approximation of `exp(-omega * dt)`, which is
//! stable for any frame time. The caller owns the velocity so several
//! followers can share one target.

use glam::Vec3;

/// Smallest smoothing time accepted, in seconds.
const MIN_SMOOTH_TIME: f32 = 1e-4;

#[inline]
fn decay(omega: f32, delta_time: f32) -> f32 {
    let x = omega * delta_time;
    1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x)
}

/// Move `current` toward `target`, reaching it in roughly `smooth_time`
/// seconds without overshooting.
///
/// `max_speed` caps the approach speed along the remaining distance (use
/// `f32::INFINITY` for no cap).
pub fn smooth_damp_vec3(
    current: Vec3,
    target: Vec3,
    velocity: &mut Vec3,
    smooth_time: f32,
    max_speed: f32,
    delta_time: f32,
) -> Vec3 {
    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let decay = decay(omega, delta_time);

    let change = (current - target).clamp_length_max(max_speed * smooth_time);
    let goal = current - change;

    let temp = (*velocity + omega * change) * delta_time;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = goal + (change + temp) * decay;

    // Stop at the target instead of passing it.
    if (target - current).dot(output - target) > 0.0 {
        output = target;
        *velocity = Vec3::ZERO;
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approaches_without_overshoot() {
        let target = Vec3::new(10.0, 0.0, 0.0);
        let mut velocity = Vec3::ZERO;
        let mut position = Vec3::ZERO;
        let mut previous = position.x;
        for _ in 0..120 {
            position = smooth_damp_vec3(
                position,
                target,
                &mut velocity,
                0.2,
                f32::INFINITY,
                1.0 / 60.0,
            );
            assert!(position.x >= previous);
            assert!(position.x <= 10.0);
            previous = position.x;
        }
        assert!((position.x - 10.0).abs() < 0.05);
    }

    #[test]
    fn respects_speed_cap() {
        let mut velocity = Vec3::ZERO;
        let position = smooth_damp_vec3(
            Vec3::ZERO,
            Vec3::new(0.0, 100.0, 0.0),
            &mut velocity,
            0.1,
            5.0,
            0.5,
        );
        assert!(position.length() <= 2.5 + 1e-3, "moved {position}");
    }

    #[test]
    fn vector_converges_to_target() {
        let target = Vec3::new(3.0, -1.0, 2.0);
        let mut velocity = Vec3::ZERO;
        let mut position = Vec3::ZERO;
        for _ in 0..240 {
            position = smooth_damp_vec3(
                position,
                target,
                &mut velocity,
                0.1,
                f32::INFINITY,
                1.0 / 60.0,
            );
            assert!(position.distance(Vec3::ZERO) <= target.length() + 1e-4);
        }
        assert!(position.abs_diff_eq(target, 1e-3));
    }

    #[test]
    fn vector_at_target_stays_put() {
        let target = Vec3::splat(1.0);
        let mut velocity = Vec3::ZERO;
        let position =
            smooth_damp_vec3(target, target, &mut velocity, 0.3, 10.0, 0.016);
        assert_eq!(position, target);
        assert_eq!(velocity, Vec3::ZERO);
    }
}
