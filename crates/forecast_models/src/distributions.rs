//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `inverse_norm_cdf`: Quantile function (Beasley-Springer-Moro)
//! - `two_sided_z`: Critical value for a central prediction interval
//!
//! All functions are generic over `T: Float`.

use num_traits::Float;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Lower clamp for probabilities passed to the quantile function.
const PROB_EPS: f64 = 1e-12;

#[inline]
fn c<T: Float>(v: f64) -> T {
    T::from(v).unwrap_or_else(T::zero)
}

/// Complementary error function approximation (Abramowitz and Stegun 7.1.26).
///
/// Maximum absolute error 1.5e-7.
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let abs_x = x.abs();

    let a1 = c::<T>(0.254829592);
    let a2 = c::<T>(-0.284496736);
    let a3 = c::<T>(1.421413741);
    let a4 = c::<T>(-1.453152027);
    let a5 = c::<T>(1.061405429);
    let p = c::<T>(0.3275911);

    let t = one / (one + p * abs_x);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    if x < T::zero() {
        c::<T>(2.0) - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// # Examples
/// ```
/// use forecast_models::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    c::<T>(0.5) * erfc_approx(-x / c::<T>(SQRT_2))
}

/// Inverse of the standard normal CDF.
///
/// Beasley-Springer-Moro approximation: a rational function in the central
/// region `|u - 0.5| <= 0.42` and a Chebyshev polynomial in `ln(-ln r)` in
/// the tails. `u` is clamped to `[1e-12, 1 - 1e-12]`.
///
/// # Examples
/// ```
/// use forecast_models::distributions::inverse_norm_cdf;
///
/// assert!(inverse_norm_cdf(0.5_f64).abs() < 1e-9);
/// assert!((inverse_norm_cdf(0.975_f64) - 1.959964).abs() < 1e-5);
/// ```
pub fn inverse_norm_cdf<T: Float>(u: T) -> T {
    let a = [
        c::<T>(2.50662823884),
        c::<T>(-18.61500062529),
        c::<T>(41.39119773534),
        c::<T>(-25.44106049637),
    ];
    let b = [
        c::<T>(-8.47351093090),
        c::<T>(23.08336743743),
        c::<T>(-21.06224101826),
        c::<T>(3.13082909833),
    ];
    let k = [
        c::<T>(0.3374754822726147),
        c::<T>(0.9761690190917186),
        c::<T>(0.1607979714918209),
        c::<T>(0.0276438810333863),
        c::<T>(0.0038405729373609),
        c::<T>(0.0003951896511919),
        c::<T>(0.0000321767881768),
        c::<T>(0.0000002888167364),
        c::<T>(0.0000003960315187),
    ];

    let one = T::one();
    let eps = c::<T>(PROB_EPS);
    let u = u.max(eps).min(one - eps);
    let y = u - c::<T>(0.5);

    if y.abs() <= c::<T>(0.42) {
        let r = y * y;
        let numer = a[0] + r * (a[1] + r * (a[2] + r * a[3]));
        let denom = one + r * (b[0] + r * (b[1] + r * (b[2] + r * b[3])));
        y * numer / denom
    } else {
        let r = if y < T::zero() { u } else { one - u };
        let s = (-r.ln()).ln();
        let z = k[0]
            + s * (k[1]
                + s * (k[2]
                    + s * (k[3]
                        + s * (k[4] + s * (k[5] + s * (k[6] + s * (k[7] + s * k[8])))))));
        if y < T::zero() {
            -z
        } else {
            z
        }
    }
}

/// Critical value `z` such that `P(|Z| <= z) = width` for `Z ~ N(0, 1)`.
///
/// # Examples
/// ```
/// use forecast_models::distributions::two_sided_z;
///
/// assert!((two_sided_z(0.95_f64) - 1.96).abs() < 1e-3);
/// ```
pub fn two_sided_z<T: Float>(width: T) -> T {
    let half = c::<T>(0.5);
    inverse_norm_cdf(half + half * width)
}
