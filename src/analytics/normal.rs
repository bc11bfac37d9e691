//! Standard normal distribution helpers.
//!
//! The standard library has no `erf`, so the CDF is built on the
//! Abramowitz and Stegun 7.1.26 rational approximation (max absolute
//! error about 1.5e-7). Winner decisions compare confidence against a
//! 95% threshold, well within that accuracy.

/// Gauss error function, Abramowitz and Stegun 7.1.26.
pub fn erf(x: f64) -> f64 {
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();

    sign * y
}

/// Standard normal CDF.
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

/// Two-tailed confidence level in percent for a Z statistic.
///
/// `100 * (2*Phi(|z|) - 1)`, which reduces to `100 * erf(|z| / sqrt(2))`.
/// The two-tailed 95% critical value 1.96 maps to 95%, 2.576 to 99%.
pub fn confidence_level(z: f64) -> f64 {
    (erf(z.abs() / std::f64::consts::SQRT_2) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference erf values from tables, 7 decimal places.
    const ERF_TABLE: &[(f64, f64)] = &[
        (0.0, 0.0),
        (0.5, 0.5204999),
        (1.0, 0.8427008),
        (1.5, 0.9661051),
        (2.0, 0.9953223),
        (3.0, 0.9999779),
    ];

    #[test]
    fn test_erf_reference_values() {
        for &(x, expected) in ERF_TABLE {
            let got = erf(x);
            assert!(
                (got - expected).abs() < 2e-7,
                "erf({}) = {}, expected {}",
                x,
                got,
                expected
            );
        }
    }

    #[test]
    fn test_erf_odd_symmetry() {
        for x in [0.1, 0.7, 1.3, 2.5] {
            assert!((erf(-x) + erf(x)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_normal_cdf_center() {
        // The A&S coefficients leave erf(0) at ~1e-9, not exactly 0.
        assert!((normal_cdf(0.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_normal_cdf_tails() {
        assert!(normal_cdf(-6.0) < 1e-6);
        assert!(normal_cdf(6.0) > 1.0 - 1e-6);
    }

    #[test]
    fn test_confidence_at_zero_is_zero() {
        // z = 0 carries no evidence of a difference; only approximation
        // noise (within the ~1.5e-7 erf error floor) remains.
        assert!(confidence_level(0.0).abs() < 1e-6);
    }

    #[test]
    fn test_confidence_symmetric_in_z() {
        for z in [0.5, 1.0, 2.0] {
            assert!((confidence_level(z) - confidence_level(-z)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_confidence_at_95_critical_value() {
        // Exact two-tailed 95% critical value.
        let c = confidence_level(1.959963985);
        assert!((c - 95.0).abs() < 1e-3, "confidence = {}", c);
    }

    #[test]
    fn test_confidence_at_99_critical_value() {
        let c = confidence_level(2.576);
        assert!((c - 99.0).abs() < 5e-3, "confidence = {}", c);
    }

    #[test]
    fn test_confidence_monotonic_in_z() {
        let mut prev = confidence_level(0.0);
        let mut z = 0.05;
        while z < 5.0 {
            let c = confidence_level(z);
            assert!(c >= prev, "confidence not monotonic at z = {}", z);
            prev = c;
            z += 0.05;
        }
    }

    #[test]
    fn test_confidence_bounded() {
        for z in [-10.0, -1.0, 0.0, 1.0, 10.0, 100.0] {
            let c = confidence_level(z);
            assert!((0.0..=100.0).contains(&c));
        }
    }
}
