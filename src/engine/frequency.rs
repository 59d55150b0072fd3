//! Normalized pot position to Hertz.

/// Bottom of the frequency range: one cycle every 20 seconds.
pub const FREQ_MIN_HZ: f32 = 0.05;
/// Top of the frequency range, just below audio rate.
pub const FREQ_MAX_HZ: f32 = 20.0;

/// Exponential interpolation across the 400:1 range, which gives a
/// perceptually even pot feel. Monotonic in the control value.
#[inline]
pub fn control_to_hz(normalized: f32) -> f32 {
    let n = normalized.clamp(0.0, 1.0);
    FREQ_MIN_HZ * (FREQ_MAX_HZ / FREQ_MIN_HZ).powf(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        assert!((control_to_hz(0.0) - FREQ_MIN_HZ).abs() < 1e-6);
        assert!((control_to_hz(1.0) - FREQ_MAX_HZ).abs() < 1e-4);
    }

    #[test]
    fn mapping_is_strictly_monotonic() {
        let mut prev = control_to_hz(0.0);
        for step in 1..=1000 {
            let hz = control_to_hz(step as f32 / 1000.0);
            assert!(hz > prev, "mapping not monotonic at step {}", step);
            prev = hz;
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(control_to_hz(-0.5), control_to_hz(0.0));
        assert_eq!(control_to_hz(1.5), control_to_hz(1.0));
    }

    #[test]
    fn midpoint_is_geometric_mean() {
        let mid = control_to_hz(0.5);
        let mean = (FREQ_MIN_HZ * FREQ_MAX_HZ).sqrt();
        assert!((mid - mean).abs() < 1e-3, "midpoint {} vs mean {}", mid, mean);
    }
}
