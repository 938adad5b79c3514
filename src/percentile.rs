/// Fraction of `sorted` that is strictly less than `value`.
///
/// Values equal to `value` are not counted, so the minimum of a sample has
/// a fraction of exactly 0.0. `sorted` must be in ascending order.
pub fn fraction_below(sorted: &[f64], value: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }

    let below = sorted.partition_point(|&height| height < value);

    below as f64 / sorted.len() as f64
}

/// Quantile of an ascending sample, interpolating linearly between the two
/// nearest order statistics at `fraction * (n - 1)`.
///
/// Positions outside the sample are clamped to its first or last value.
pub fn quantile(sorted: &[f64], fraction: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;

    let position = (fraction * last as f64).max(0.0).min(last as f64);
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;

    if lower == upper {
        return Some(sorted[lower]);
    }

    let weight = position - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
}

/// Rounds to `decimals` places; exact ties go to the even digit, so
/// 0.125 rounds to 0.12 and 130.25 to 130.2.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_below_simple() {
        let data = vec![130.0, 135.0, 140.0, 145.0, 150.0];

        let result = fraction_below(&data, 140.0);

        assert_eq!(result, 0.4);
    }

    #[test]
    fn test_fraction_below_excludes_ties() {
        let data = vec![130.0, 130.0, 130.0, 140.0];

        assert_eq!(fraction_below(&data, 130.0), 0.0);
        assert_eq!(fraction_below(&data, 130.1), 0.75);
    }

    #[test]
    fn test_fraction_below_outside_sample() {
        let data = vec![130.0, 140.0];

        assert_eq!(fraction_below(&data, 10.0), 0.0);
        assert_eq!(fraction_below(&data, 500.0), 1.0);
    }

    #[test]
    fn test_fraction_below_empty() {
        assert_eq!(fraction_below(&[], 140.0), 0.0);
    }

    #[test]
    fn test_quantile_interpolates() {
        let data = vec![130.0, 135.0, 140.0, 145.0, 150.0];

        let result = quantile(&data, 0.4).unwrap();

        assert!((result - 138.0).abs() < 1e-9);
    }

    #[test]
    fn test_quantile_median_even() {
        let data = vec![0.0, 1.0, 2.0, 3.0];

        let result = quantile(&data, 0.5).unwrap();

        assert_eq!(result, 1.5);
    }

    #[test]
    fn test_quantile_exact_order_statistic() {
        let data = vec![4.0, 5.0, 7.0];

        assert_eq!(quantile(&data, 0.0), Some(4.0));
        assert_eq!(quantile(&data, 0.5), Some(5.0));
        assert_eq!(quantile(&data, 1.0), Some(7.0));
    }

    #[test]
    fn test_quantile_clamps_out_of_range_fractions() {
        let data = vec![4.0, 5.0, 7.0];

        assert_eq!(quantile(&data, -0.5), Some(4.0));
        assert_eq!(quantile(&data, 1.7), Some(7.0));
    }

    #[test]
    fn test_quantile_single_value() {
        assert_eq!(quantile(&[152.5], 0.9), Some(152.5));
    }

    #[test]
    fn test_quantile_empty() {
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.333333, 2), 0.33);
        assert_eq!(round_to(138.00000000000003, 1), 138.0);
        assert_eq!(round_to(0.675, 1), 0.7);
    }

    #[test]
    fn test_round_to_ties_go_to_even() {
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(0.625, 2), 0.62);
        assert_eq!(round_to(0.875, 2), 0.88);
        assert_eq!(round_to(130.25, 1), 130.2);
        assert_eq!(round_to(130.75, 1), 130.8);
        assert_eq!(round_to(0.5, 0), 0.0);
        assert_eq!(round_to(1.5, 0), 2.0);
    }
}
