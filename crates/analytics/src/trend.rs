use serde::Serialize;

/// The default maximum relative step change for a sequence to count as stable
/// (5%).
pub const DEFAULT_TOLERANCE: f64 = 0.05;

/// Classification of an ordered numeric series.
///
/// Stability and direction are independent judgements: a series can be
/// increasing overall while a single jagged step makes it unstable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendProfile {
    pub is_stable: bool,
    pub is_increasing: bool,
    pub is_decreasing: bool,
}

/// Classifies `samples` as stable/increasing/decreasing.
///
/// Direction comes from the total change between the first and last sample:
/// strictly positive means increasing, strictly negative means decreasing,
/// exactly zero means neither. Stability requires every consecutive step's
/// relative change `|cur − prev| / |prev|` to stay within `tolerance`; the
/// scan short-circuits on the first violation.
///
/// Fewer than 2 samples is trivially stable with no direction.
///
/// A zero `prev` makes the relative change infinite, which always exceeds the
/// tolerance and marks the sequence unstable. That is long-standing observed
/// behavior that callers depend on, so it is deliberately not special-cased.
pub fn analyze_sequence(samples: &[f64], tolerance: f64) -> TrendProfile {
    let mut trends = TrendProfile {
        is_stable: true,
        is_increasing: false,
        is_decreasing: false,
    };

    if samples.len() < 2 {
        return trends;
    }

    let total_change = samples[samples.len() - 1] - samples[0];
    trends.is_increasing = total_change > 0.0;
    trends.is_decreasing = total_change < 0.0;

    for pair in samples.windows(2) {
        let relative_change = (pair[1] - pair[0]).abs() / pair[0].abs();
        if relative_change > tolerance {
            trends.is_stable = false;
            break;
        }
    }

    trends
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(stable: bool, increasing: bool, decreasing: bool) -> TrendProfile {
        TrendProfile {
            is_stable: stable,
            is_increasing: increasing,
            is_decreasing: decreasing,
        }
    }

    #[test]
    fn single_sample_is_trivially_stable() {
        assert_eq!(
            analyze_sequence(&[5.0], DEFAULT_TOLERANCE),
            profile(true, false, false)
        );
    }

    #[test]
    fn flat_sequence_is_stable_with_no_direction() {
        assert_eq!(
            analyze_sequence(&[1.0, 1.0, 1.0], DEFAULT_TOLERANCE),
            profile(true, false, false)
        );
    }

    #[test]
    fn large_jump_is_increasing_but_unstable() {
        // Relative change 900% far exceeds the 5% tolerance.
        assert_eq!(
            analyze_sequence(&[1.0, 10.0], DEFAULT_TOLERANCE),
            profile(false, true, false)
        );
    }

    #[test]
    fn large_drop_is_decreasing_but_unstable() {
        assert_eq!(
            analyze_sequence(&[10.0, 1.0], DEFAULT_TOLERANCE),
            profile(false, false, true)
        );
    }

    #[test]
    fn gentle_growth_within_tolerance_is_stable_and_increasing() {
        assert_eq!(
            analyze_sequence(&[100.0, 102.0, 104.0], DEFAULT_TOLERANCE),
            profile(true, true, false)
        );
    }

    #[test]
    fn zero_previous_sample_marks_the_sequence_unstable() {
        // 0 -> 1 divides by zero, producing infinity, which exceeds any
        // tolerance.
        assert_eq!(
            analyze_sequence(&[0.0, 1.0], DEFAULT_TOLERANCE),
            profile(false, true, false)
        );
    }
}
