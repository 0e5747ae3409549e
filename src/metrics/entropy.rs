//! Shannon entropy and power-mean helpers.

use ndarray::ArrayView1;

use crate::core::types::Count;

/// Shannon entropy, in bits, of an unnormalized count vector.
///
/// Counts are normalized by their sum and zero cells contribute nothing
/// (`0 · log 0 = 0`). Returns `None` when the counts sum to zero, since no
/// distribution exists to measure. Counts are expected to be finite and
/// non-negative.
pub fn shannon_entropy(counts: ArrayView1<'_, Count>) -> Option<f64> {
    // Scale by the largest cell first so the sum cannot overflow.
    let scale = counts.iter().copied().fold(0.0, f64::max);
    if scale <= 0.0 {
        return None;
    }

    let total: f64 = counts.iter().map(|&c| c / scale).sum();
    // Filter after normalizing: a tiny cell beside a huge one can round to p = 0.
    let entropy = counts
        .iter()
        .map(|&c| (c / scale) / total)
        .filter(|&p| p > 0.0)
        .fold(0.0, |acc, p| acc - p * p.log2());
    Some(entropy)
}

/// Entropy of `counts` divided by the entropy of a uniform distribution over
/// `num_categories` outcomes.
///
/// With a single category every distribution is certain, so the result is 0
/// and `log2(1) = 0` is never used as a divisor.
pub fn normalized_entropy(counts: ArrayView1<'_, Count>, num_categories: usize) -> Option<f64> {
    let entropy = shannon_entropy(counts)?;
    if num_categories <= 1 {
        return Some(0.0);
    }
    Some(entropy / (num_categories as f64).log2())
}

/// Power mean `((1/n) Σ xᵢ^α)^(1/α)` of non-negative values.
///
/// `alpha = ∞` gives the maximum. Values are scaled by their maximum before
/// exponentiation so large exponents do not underflow to zero.
/// Returns `None` for an empty slice or if any value is NaN or infinite.
pub fn power_mean(values: &[f64], alpha: f64) -> Option<f64> {
    if values.is_empty() || values.iter().any(|v| !v.is_finite()) {
        return None;
    }

    let max = values.iter().copied().fold(0.0, f64::max);
    if alpha.is_infinite() || max == 0.0 {
        return Some(max);
    }

    let mean = values.iter().map(|&v| (v / max).powf(alpha)).sum::<f64>() / values.len() as f64;
    Some(max * mean.powf(1.0 / alpha))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_shannon_entropy_uniform() {
        let entropy = shannon_entropy(array![5.0, 5.0].view()).unwrap();
        assert_abs_diff_eq!(entropy, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            shannon_entropy(array![1.0, 1.0, 1.0, 1.0].view()).unwrap(),
            2.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_shannon_entropy_certain() {
        assert_eq!(shannon_entropy(array![0.0, 7.0, 0.0].view()), Some(0.0));
    }

    #[test]
    fn test_shannon_entropy_skewed() {
        // p = (3/4, 1/4)
        let expected = -(0.75f64 * 0.75f64.log2() + 0.25 * 0.25f64.log2());
        let entropy = shannon_entropy(array![3.0, 1.0].view()).unwrap();
        assert_abs_diff_eq!(entropy, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_shannon_entropy_near_overflow() {
        let huge = f64::MAX / 2.0;
        assert_eq!(shannon_entropy(array![huge, huge, huge, huge].view()), Some(2.0));
        assert_eq!(shannon_entropy(array![0.0, f64::MAX].view()), Some(0.0));

        let tiny = f64::MIN_POSITIVE / 8.0;
        assert_eq!(shannon_entropy(array![tiny, tiny].view()), Some(1.0));

        let lopsided = shannon_entropy(array![1e300, 1e-300].view()).unwrap();
        assert!(lopsided.is_finite());
        assert_abs_diff_eq!(lopsided, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_shannon_entropy_zero_sum() {
        assert_eq!(shannon_entropy(array![0.0, 0.0].view()), None);
    }

    #[test]
    fn test_normalized_entropy() {
        assert_abs_diff_eq!(
            normalized_entropy(array![2.0, 2.0, 2.0].view(), 3).unwrap(),
            1.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            normalized_entropy(array![1.0, 1.0, 0.0, 0.0].view(), 4).unwrap(),
            0.5,
            epsilon = 1e-12
        );
        assert_eq!(normalized_entropy(array![9.0].view(), 1), Some(0.0));
        assert_eq!(normalized_entropy(array![0.0].view(), 1), None);
    }

    #[test]
    fn test_power_mean() {
        assert_abs_diff_eq!(power_mean(&[0.2, 0.4], 1.0).unwrap(), 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(
            power_mean(&[0.0, 1.0], 2.0).unwrap(),
            (0.5f64).sqrt(),
            epsilon = 1e-12
        );
        assert_eq!(power_mean(&[0.1, 0.9, 0.3], f64::INFINITY), Some(0.9));
        assert_eq!(power_mean(&[0.0, 0.0], 3.0), Some(0.0));
        assert_eq!(power_mean(&[], 2.0), None);
    }

    #[test]
    fn test_power_mean_rejects_non_finite() {
        assert_eq!(power_mean(&[f64::NAN, 0.5], 2.0), None);
        assert_eq!(power_mean(&[0.5, f64::NAN], f64::INFINITY), None);
        assert_eq!(power_mean(&[0.2, f64::INFINITY], 1.0), None);
    }

    #[test]
    fn test_power_mean_large_alpha_approaches_max() {
        let values = [0.5, 0.25];
        let mean = power_mean(&values, 1000.0).unwrap();
        assert!(mean <= 0.5);
        assert_abs_diff_eq!(mean, 0.5, epsilon = 1e-3);
    }
}
