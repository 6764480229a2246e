//! Descriptive statistics over point-value columns.
//!
//! All functions are generic over `T: num_traits::Float` and return `None`
//! where the statistic is undefined for the input length, so callers never
//! see a silent NaN.

use num_traits::Float;

/// Arithmetic mean.
///
/// Returns `None` for an empty slice.
///
/// # Examples
/// ```
/// use forecast_core::math::statistics::mean;
///
/// assert_eq!(mean(&[1.0_f64, 2.0, 3.0]), Some(2.0));
/// assert_eq!(mean::<f64>(&[]), None);
/// ```
pub fn mean<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let n = T::from(values.len())?;
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    Some(sum / n)
}

/// Sample standard deviation (`ddof = 1`).
///
/// # Mathematical Definition
/// ```text
/// s = sqrt( Σ (x_i - x̄)² / (n - 1) )
/// ```
///
/// Returns `None` when fewer than two values are supplied.
///
/// # Examples
/// ```
/// use forecast_core::math::statistics::sample_std_dev;
///
/// let s = sample_std_dev(&[2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert!((s - 2.138089935).abs() < 1e-9);
/// assert_eq!(sample_std_dev(&[1.0_f64]), None);
/// ```
pub fn sample_std_dev<T: Float>(values: &[T]) -> Option<T> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let dof = T::from(values.len() - 1)?;
    let sum_sq = values.iter().fold(T::zero(), |acc, &v| {
        let d = v - m;
        acc + d * d
    });
    Some((sum_sq / dof).sqrt())
}

/// Largest value. NaN entries are skipped.
pub fn max<T: Float>(values: &[T]) -> Option<T> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .reduce(|a, b| if b > a { b } else { a })
}

/// Smallest value. NaN entries are skipped.
pub fn min<T: Float>(values: &[T]) -> Option<T> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .reduce(|a, b| if b < a { b } else { a })
}
