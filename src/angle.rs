//! Angle utilities for line orientations, in degrees.

/// Folds an angle in degrees into the half-open range [0, 180).
///
/// A line and its 180°-rotated reverse share one orientation.
#[inline]
pub fn normalize_half_turn_deg(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let norm = angle.rem_euclid(180.0);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if norm >= 180.0 {
        0.0
    } else {
        norm
    }
}

/// Orientation of the direction `(dx, dy)` in degrees, folded into [0, 180).
#[inline]
pub fn orientation_deg(dx: f64, dy: f64) -> f64 {
    normalize_half_turn_deg(dy.atan2(dx).to_degrees())
}

/// Whether `angle` (already in [0, 180)) lies within `band` degrees of
/// horizontal, i.e. in `[0, band]` or `[180 - band, 180)`.
#[inline]
pub fn is_near_horizontal(angle: f64, band: f64) -> bool {
    angle <= band || angle >= 180.0 - band
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn normalize_half_turn_basic() {
        assert!(approx_eq(normalize_half_turn_deg(30.0), 30.0));
        assert!(approx_eq(normalize_half_turn_deg(-45.0), 135.0));
        assert!(approx_eq(normalize_half_turn_deg(180.0), 0.0));
        assert!(approx_eq(normalize_half_turn_deg(540.0), 0.0));
        assert!(approx_eq(normalize_half_turn_deg(-1e-18), 0.0));
        assert_eq!(normalize_half_turn_deg(f64::NAN), 0.0);
    }

    #[test]
    fn orientation_ignores_direction_sign() {
        assert!(approx_eq(orientation_deg(1.0, 1.0), 45.0));
        assert!(approx_eq(orientation_deg(-1.0, -1.0), 45.0));
        assert!(approx_eq(orientation_deg(-1.0, 0.0), 0.0));
        assert!(approx_eq(orientation_deg(0.0, -3.0), 90.0));
    }

    #[test]
    fn noise_band_is_closed_at_both_ends() {
        assert!(is_near_horizontal(0.0, 10.0));
        assert!(is_near_horizontal(10.0, 10.0));
        assert!(!is_near_horizontal(10.5, 10.0));
        assert!(!is_near_horizontal(169.9, 10.0));
        assert!(is_near_horizontal(170.0, 10.0));
    }
}
