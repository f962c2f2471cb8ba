//! Per-tick motion helpers
//!
//! Frame-rate independent easing arithmetic used by the scene animator:
//! exponential approach toward a target and linear decay toward zero.

/// Snap distance below which `approach` lands exactly on the target.
const SNAP_EPSILON: f32 = 1e-3;

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Move `current` toward `target` by the given fraction of the remaining
/// distance.
///
/// `amount` is typically `rate * dt`; it is clamped to `[0, 1]` so a stalled
/// frame can never overshoot. Values within [`SNAP_EPSILON`] of the target
/// snap exactly so convergence terminates.
pub fn approach(current: f32, target: f32, amount: f32) -> f32 {
    let next = current + (target - current) * amount.clamp(0.0, 1.0);
    if (target - next).abs() < SNAP_EPSILON {
        target
    } else {
        next
    }
}

/// Decay `value` linearly toward zero by `amount`, flooring at zero.
#[inline]
pub fn decay(value: f32, amount: f32) -> f32 {
    (value - amount).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approach_never_overshoots() {
        let mut value = 0.0;
        for _ in 0..200 {
            let next = approach(value, 10.0, 0.3);
            assert!(next >= value);
            assert!(next <= 10.0);
            value = next;
        }
        assert_eq!(value, 10.0);
    }

    #[test]
    fn approach_clamps_large_steps() {
        // A stalled frame can hand in amount > 1; the move caps at the target.
        assert_eq!(approach(0.0, 5.0, 3.5), 5.0);
    }

    #[test]
    fn decay_floors_at_zero() {
        assert_eq!(decay(0.3, 0.5), 0.0);
        assert!((decay(1.0, 0.4) - 0.6).abs() < 1e-6);
    }
}
