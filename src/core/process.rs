//! Process response models
//!
//! Closed-form nonlinear responses for the simulated SMT line: defect count
//! and cycle time as functions of the sampled process parameters, plus the
//! logistic defect-probability model and the optimal-speed-range scanner
//! used by the assembly dataset. All functions are pure; noise terms are
//! drawn by the caller so the shared random stream stays in a fixed order.

/// Speed-range scan thresholds: qualify while defect probability stays below
/// this bound.
pub const DEFECT_PROBABILITY_THRESHOLD: f64 = 0.1;

/// Sentinel reported when no assembly speed qualifies.
pub const SPEED_NOT_FOUND: f64 = -1.0;

const SCAN_SPEED_MIN: f64 = 30.0;
const SCAN_SPEED_MAX: f64 = 80.0;
const SCAN_SPEED_STEP: f64 = 0.1;

/// Expected number of defects for one simulated run, clamped at zero.
///
/// `noise` is a Normal(0, 0.5) variate drawn from the shared stream
/// immediately before this call.
pub fn defect_count(
    soldering_temp: f64,
    placement_speed: f64,
    ambient_temp: f64,
    material_quality: f64,
    humidity: f64,
    noise: f64,
) -> f64 {
    let raw = 5.0 - 0.01 * soldering_temp + 0.05 * placement_speed
        + 0.02 * (ambient_temp - 22.0).powi(2)
        - 0.5 * material_quality
        + 0.01 * humidity
        + noise;
    raw.max(0.0)
}

/// Cycle time in minutes for one simulated run, clamped at zero.
///
/// `noise` is a Normal(0, 0.01) variate drawn from the shared stream after
/// the defect-count noise.
pub fn cycle_time(
    soldering_temp: f64,
    placement_speed: f64,
    ambient_temp: f64,
    material_quality: f64,
    humidity: f64,
    noise: f64,
) -> f64 {
    let raw = 0.4 + 0.002 * soldering_temp + 0.003 * placement_speed - 0.001 * ambient_temp
        + 0.002 * (1.0 - material_quality)
        + 0.001 * humidity
        + noise;
    raw.max(0.0)
}

/// Probability that a run with the given configuration produces a defect.
///
/// Logistic transform of a fixed quadratic score in the four parameters.
pub fn defect_probability(temperature: f64, speed: f64, quality: f64, humidity: f64) -> f64 {
    let logit = -0.08 * speed.powi(2) - 0.1 * quality
        + 0.03 * (humidity - 50.0).powi(2)
        + 0.01 * (temperature - 250.0).powi(2);
    1.0 / (1.0 + (-logit).exp())
}

/// Contiguous interval of assembly speeds where the defect probability stays
/// below [`DEFECT_PROBABILITY_THRESHOLD`], or the [`SPEED_NOT_FOUND`]
/// sentinel in both fields when no speed qualifies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedRange {
    pub min: f64,
    pub max: f64,
}

impl SpeedRange {
    pub fn found(&self) -> bool {
        self.min >= 0.0
    }
}

/// Scan assembly speeds 30.0..=80.0 in steps of 0.1 for the optimal range at
/// a fixed temperature/quality/humidity triple.
///
/// The first qualifying speed sets `min`; `max` extends while the condition
/// holds. The scan stops at the first non-qualifying speed after a region
/// has been found (contiguous-interval assumption; later disjoint regions
/// are not searched for).
pub fn optimal_speed_range(temperature: f64, quality: f64, humidity: f64) -> SpeedRange {
    let mut min_speed = SPEED_NOT_FOUND;
    let mut max_speed = SPEED_NOT_FOUND;

    // Tolerance on the upper bound so accumulated 0.1 steps still reach 80.0.
    let mut speed = SCAN_SPEED_MIN;
    while speed <= SCAN_SPEED_MAX + SCAN_SPEED_STEP / 2.0 {
        let p = defect_probability(temperature, speed, quality, humidity);
        if p < DEFECT_PROBABILITY_THRESHOLD {
            if min_speed < 0.0 {
                min_speed = speed;
            }
            max_speed = speed;
        } else if min_speed >= 0.0 {
            break;
        }
        speed += SCAN_SPEED_STEP;
    }

    SpeedRange {
        min: min_speed,
        max: max_speed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defect_count_clamped_at_zero() {
        // High solder temp, perfect material, no noise pushes the raw score
        // well below zero.
        let d = defect_count(400.0, 0.0, 22.0, 1.0, 0.0, 0.0);
        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_defect_count_nominal_configuration() {
        // 5 - 3.1 + 2.5 + 0 - 0.4 + 0.5 = 4.5 at the distribution means.
        let d = defect_count(310.0, 50.0, 22.0, 0.8, 50.0, 0.0);
        assert!((d - 4.5).abs() < 1e-12);
    }

    #[test]
    fn test_cycle_time_clamped_at_zero() {
        let t = cycle_time(0.0, 0.0, 100.0, 1.0, 0.0, -10.0);
        assert_eq!(t, 0.0);
    }

    #[test]
    fn test_cycle_time_nominal_configuration() {
        // 0.4 + 0.62 + 0.15 - 0.022 + 0.0004 + 0.05 = 1.1984
        let t = cycle_time(310.0, 50.0, 22.0, 0.8, 50.0, 0.0);
        assert!((t - 1.1984).abs() < 1e-12);
    }

    #[test]
    fn test_defect_probability_sanity_bound() {
        // logit = -0.08*2500 - 0.1*1 + 0 + 0 = -200.1
        let p = defect_probability(250.0, 50.0, 1.0, 50.0);
        assert!(p < 1e-10, "probability {} should be vanishingly small", p);
    }

    #[test]
    fn test_defect_probability_is_logistic_of_logit() {
        let p = defect_probability(250.0, 0.0, 0.0, 50.0);
        // All quadratic terms vanish and quality is 0, so logit = 0.
        assert!((p - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_scan_reports_sentinel_when_nothing_qualifies() {
        // Extreme humidity keeps the logit large and positive at every speed:
        // at speed 80 the -0.08*6400 term is -512, but 0.03*(200-50)^2 = 675.
        let range = optimal_speed_range(250.0, 0.0, 200.0);
        assert_eq!(range.min, SPEED_NOT_FOUND);
        assert_eq!(range.max, SPEED_NOT_FOUND);
        assert!(!range.found());
    }

    #[test]
    fn test_scan_full_range_when_everything_qualifies() {
        // Benign triple: the speed-squared term dominates, probability is
        // near zero across the whole scan.
        let range = optimal_speed_range(250.0, 1.0, 50.0);
        assert!(range.found());
        assert!((range.min - 30.0).abs() < 1e-9);
        assert!((range.max - 80.0).abs() < 1e-6, "max {} should reach 80", range.max);
    }

    #[test]
    fn test_scan_bounds_stay_inside_scan_window() {
        let range = optimal_speed_range(255.0, 0.5, 60.0);
        if range.found() {
            assert!(range.min >= 30.0 - 1e-9 && range.min <= 80.0 + 1e-9);
            assert!(range.max >= range.min && range.max <= 80.0 + 1e-9);
        } else {
            assert_eq!(range.max, SPEED_NOT_FOUND);
        }
    }
}
