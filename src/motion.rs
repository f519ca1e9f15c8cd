// Target-chasing easing used by every animated eye dimension

/// Fraction of the remaining distance covered per tick.
pub(crate) const SMOOTH_FACTOR: f32 = 0.2;

/// Residual below which a value locks onto its target, in pixels.
/// Without the snap the geometric approach never quite lands, and the
/// blink machine waits on thresholds near the endpoints.
pub(crate) const SNAP_EPSILON: f32 = 0.5;

/// Advance `current` one tick toward `target`.
#[inline]
pub(crate) fn ease(current: f32, target: i32) -> f32 {
    let target = target as f32;
    let next = current + (target - current) * SMOOTH_FACTOR;
    if (target - next).abs() < SNAP_EPSILON {
        target
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_still_at_the_target() {
        assert_eq!(ease(36.0, 36), 36.0);
        assert_eq!(ease(0.0, 0), 0.0);
    }

    #[test]
    fn moves_a_fifth_of_the_distance() {
        assert_eq!(ease(0.0, 100), 20.0);
        assert_eq!(ease(100.0, 0), 80.0);
    }

    #[test]
    fn never_overshoots_and_reaches_in_finite_ticks() {
        let mut v = 0.0;
        let mut ticks = 0;
        while v != 50.0 {
            let next = ease(v, 50);
            assert!(next > v && next <= 50.0);
            v = next;
            ticks += 1;
            assert!(ticks < 64, "easing must converge");
        }
    }

    #[test]
    fn snaps_inside_half_a_pixel() {
        assert_eq!(ease(49.6, 50), 50.0);
        assert_eq!(ease(0.4, 0), 0.0);
    }
}
