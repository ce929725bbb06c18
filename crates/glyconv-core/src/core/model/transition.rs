/// Logistic function, evaluated so that neither branch overflows `exp`.
#[inline]
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// Smooth step from 1 down to 0 as `x` moves past `center`.
///
/// Equals 0.5 at `x == center`; `sensitivity_scale` sets the steepness and, when
/// positive, makes the result decrease monotonically in `x`.
#[inline]
pub fn smooth_transition(x: f64, center: f64, sensitivity_scale: f64) -> f64 {
    sigmoid(-(x - center) * sensitivity_scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn sigmoid_at_zero_is_one_half() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert_eq!(sigmoid(-0.0), 0.5);
    }

    #[test]
    fn sigmoid_is_symmetric_about_one_half() {
        for z in [0.1, 1.0, 3.5, 12.0] {
            assert!(f64_approx_equal(sigmoid(z) + sigmoid(-z), 1.0));
        }
    }

    #[test]
    fn sigmoid_matches_closed_form() {
        assert!(f64_approx_equal(sigmoid(1.0), 1.0 / (1.0 + (-1.0f64).exp())));
        assert!(f64_approx_equal(sigmoid(-2.0), 1.0 / (1.0 + 2.0f64.exp())));
    }

    #[test]
    fn sigmoid_saturates_without_nan_for_huge_arguments() {
        assert_eq!(sigmoid(1e6), 1.0);
        assert_eq!(sigmoid(-1e6), 0.0);
        assert_eq!(sigmoid(f64::INFINITY), 1.0);
        assert_eq!(sigmoid(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn smooth_transition_at_center_is_one_half() {
        assert_eq!(smooth_transition(3.0, 3.0, 0.7), 0.5);
        assert_eq!(smooth_transition(-250.0, -250.0, 42.0), 0.5);
    }

    #[test]
    fn smooth_transition_decreases_past_center() {
        let before = smooth_transition(-1.0, 0.0, 2.0);
        let at = smooth_transition(0.0, 0.0, 2.0);
        let after = smooth_transition(1.0, 0.0, 2.0);
        assert!(before > at && at > after);
        assert!(f64_approx_equal(before, 1.0 - after));
    }

    #[test]
    fn larger_scale_gives_sharper_falloff() {
        let gentle = smooth_transition(0.5, 0.0, 1.0);
        let sharp = smooth_transition(0.5, 0.0, 10.0);
        assert!(sharp < gentle);
    }

    #[test]
    fn smooth_transition_with_zero_scale_is_flat() {
        assert_eq!(smooth_transition(100.0, 0.0, 0.0), 0.5);
    }
}
