//! Axis tick calculation.
//!
//! Both charts derive their vertical scale from one shared tick sequence so
//! the topmost gridline always coincides with the axis label. The sequence is
//! "nice": the maximum is rounded up to a multiple of 3 and split into four
//! equal steps.

use serde::{Deserialize, Serialize};

/// Compute the tick sequence for an axis whose data maximum is `max_value`.
///
/// Returns a strictly descending sequence of at most 5 non-negative integers,
/// always terminating at 0. For `max_value <= 0` the degenerate single-tick
/// scale `[0]` is returned so downstream conversions never divide by zero.
///
/// The first element is the adjusted maximum: `ceil(max_value / 3) * 3`. The
/// remaining ticks split it into four equal steps, each rounded to the
/// nearest integer; equal neighbors collapsing under that rounding are
/// deduplicated.
///
/// ```
/// use graficar_core::scale::calculate_ticks;
///
/// assert_eq!(calculate_ticks(11.0), vec![12, 9, 6, 3, 0]);
/// assert_eq!(calculate_ticks(5.0), vec![6, 5, 3, 2, 0]);
/// assert_eq!(calculate_ticks(0.0), vec![0]);
/// ```
#[must_use]
pub fn calculate_ticks(max_value: f64) -> Vec<u32> {
    if max_value <= 0.0 {
        return vec![0];
    }

    let nice_max = (max_value / 3.0).ceil() * 3.0;
    let step = nice_max / 4.0;

    let mut ticks = Vec::with_capacity(5);
    for i in (0..=4_u32).rev() {
        let tick = (step * f64::from(i)).round() as u32;
        if ticks.last() != Some(&tick) {
            ticks.push(tick);
        }
    }
    ticks
}

/// A tick sequence paired with the adjusted maximum that normalizes all
/// magnitude-to-pixel conversions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickScale {
    ticks: Vec<u32>,
    adjusted_max: f64,
}

impl TickScale {
    /// Build the scale for a data maximum.
    #[must_use]
    pub fn from_max_value(max_value: f64) -> Self {
        let ticks = calculate_ticks(max_value);
        let adjusted_max = f64::from(ticks[0]);
        Self {
            ticks,
            adjusted_max,
        }
    }

    /// The tick values, descending, ending at 0.
    #[must_use]
    pub fn ticks(&self) -> &[u32] {
        &self.ticks
    }

    /// The adjusted maximum (first tick). 0 for a degenerate scale.
    #[must_use]
    pub fn adjusted_max(&self) -> f64 {
        self.adjusted_max
    }

    /// Pixel height of a magnitude within a chart of the given height.
    ///
    /// Degenerate scales map every value to 0 rather than dividing by zero.
    /// Negative values are treated as 0.
    #[must_use]
    pub fn height_for(&self, value: f64, chart_height: f32) -> f32 {
        if self.adjusted_max <= 0.0 {
            return 0.0;
        }
        ((value.max(0.0) / self.adjusted_max) * f64::from(chart_height)) as f32
    }

    /// Distance of a tick's gridline from the chart baseline.
    #[must_use]
    pub fn offset_for(&self, tick: u32, chart_height: f32) -> f32 {
        self.height_for(f64::from(tick), chart_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ticks_zero_and_negative() {
        assert_eq!(calculate_ticks(0.0), vec![0]);
        assert_eq!(calculate_ticks(-3.5), vec![0]);
    }

    #[test]
    fn test_ticks_eleven_and_twelve_agree() {
        assert_eq!(calculate_ticks(11.0), vec![12, 9, 6, 3, 0]);
        assert_eq!(calculate_ticks(12.0), vec![12, 9, 6, 3, 0]);
    }

    #[test]
    fn test_ticks_five() {
        // nice_max = ceil(5/3)*3 = 6, step = 1.5, rounded half-away-from-zero
        assert_eq!(calculate_ticks(5.0), vec![6, 5, 3, 2, 0]);
    }

    #[test]
    fn test_ticks_small_max_deduplicates() {
        // nice_max = 3, step = 0.75: [3, 2.25, 1.5, 0.75, 0] rounds to
        // [3, 2, 2, 1, 0]
        assert_eq!(calculate_ticks(1.0), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_ticks_fractional_max() {
        assert_eq!(calculate_ticks(0.2), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_scale_degenerate_heights() {
        let scale = TickScale::from_max_value(0.0);
        assert_eq!(scale.adjusted_max(), 0.0);
        assert_eq!(scale.height_for(10.0, 200.0), 0.0);
    }

    #[test]
    fn test_scale_height_uses_adjusted_max() {
        let scale = TickScale::from_max_value(11.0);
        assert_eq!(scale.adjusted_max(), 12.0);
        assert!((scale.height_for(6.0, 200.0) - 100.0).abs() < 1e-4);
        assert!((scale.height_for(12.0, 200.0) - 200.0).abs() < 1e-4);
    }

    #[test]
    fn test_scale_clamps_negative_values() {
        let scale = TickScale::from_max_value(12.0);
        assert_eq!(scale.height_for(-5.0, 200.0), 0.0);
    }

    #[test]
    fn test_scale_offset_matches_height() {
        let scale = TickScale::from_max_value(12.0);
        assert_eq!(
            scale.offset_for(9, 200.0),
            scale.height_for(9.0, 200.0)
        );
    }

    proptest! {
        #[test]
        fn prop_ticks_end_at_zero(max in -100.0f64..10_000.0) {
            let ticks = calculate_ticks(max);
            prop_assert_eq!(*ticks.last().expect("non-empty"), 0);
        }

        #[test]
        fn prop_ticks_strictly_descending(max in 0.01f64..10_000.0) {
            let ticks = calculate_ticks(max);
            for pair in ticks.windows(2) {
                prop_assert!(pair[0] > pair[1]);
            }
        }

        #[test]
        fn prop_first_tick_is_nice_and_covers_max(max in 0.01f64..10_000.0) {
            let ticks = calculate_ticks(max);
            let first = ticks[0];
            prop_assert_eq!(first % 3, 0);
            prop_assert!(f64::from(first) >= max);
        }

        #[test]
        fn prop_at_most_five_ticks(max in -100.0f64..10_000.0) {
            prop_assert!(calculate_ticks(max).len() <= 5);
        }

        #[test]
        fn prop_heights_never_exceed_chart(value in 0.0f64..1000.0, max in 0.01f64..1000.0) {
            let scale = TickScale::from_max_value(max);
            let height = scale.height_for(value.min(max), 240.0);
            prop_assert!(height <= 240.0 + 1e-3);
            prop_assert!(height >= 0.0);
        }
    }
}
