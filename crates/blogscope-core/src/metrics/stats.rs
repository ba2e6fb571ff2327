//! Small numeric helpers
//!
//! Every ratio here returns 0 for an empty input or a zero denominator.

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `numerator / denominator`, or 0 when the denominator is 0
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Percentage of `part` in `total`, rounded to two decimals
pub fn percentage(part: usize, total: usize) -> f64 {
    round2(ratio(part as f64, total as f64) * 100.0)
}

/// Sum of counters, saturating at `u64::MAX`
pub fn total(values: impl IntoIterator<Item = u64>) -> u64 {
    values.into_iter().fold(0, u64::saturating_add)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median (mean of the two middle values for even lengths)
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::max).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.005_1), 1.01);
        assert_eq!(round2(2.0 / 3.0), 0.67);
        assert_eq!(round2(200.0), 200.0);
    }

    #[test]
    fn test_ratio_zero_denominator() {
        assert_eq!(ratio(10.0, 0.0), 0.0);
        assert_eq!(ratio(10.0, 4.0), 2.5);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1, 3), 33.33);
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(4, 4), 100.0);
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn test_total_saturates() {
        assert_eq!(total([1, 2, 3]), 6);
        assert_eq!(total([]), 0);
        assert_eq!(total([u64::MAX, 1]), u64::MAX);
    }

    #[test]
    fn test_mean_and_max() {
        assert_eq!(mean(&[1.0, 2.0, 6.0]), 3.0);
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(max(&[1.0, 7.5, 3.0]), 7.5);
        assert_eq!(max(&[]), 0.0);
    }
}
