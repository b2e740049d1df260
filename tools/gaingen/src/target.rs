/// Number of entries in the firmware gain table
pub const STEPS: usize = 31;

/// Attenuation at the last step, in dB
pub const MAX_ATTENUATION: f64 = 84.0;

/// Evenly spaced attenuation targets from 0 to `max_atten` inclusive.
///
/// `steps == 1` yields a single 0 dB target.
pub fn sample(steps: usize, max_atten: f64) -> Vec<f64> {
    if steps < 2 {
        return vec![0.0; steps];
    }

    let step = max_atten / (steps - 1) as f64;
    (0..steps).map(|i| i as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_curve() {
        let targets = sample(STEPS, MAX_ATTENUATION);
        assert_eq!(targets.len(), 31);
        assert_eq!(targets[0], 0.0);
        assert_eq!(targets[30], 84.0);
        assert!((targets[1] - 2.8).abs() < 1e-9);
        assert!(targets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn degenerate_step_counts() {
        assert!(sample(0, MAX_ATTENUATION).is_empty());
        assert_eq!(sample(1, MAX_ATTENUATION), vec![0.0]);
    }
}
