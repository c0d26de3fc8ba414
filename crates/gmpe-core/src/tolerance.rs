use serde::{Deserialize, Serialize};

/// Absolute/relative tolerance pair with `numpy.allclose` semantics.
///
/// A value passes when `|actual - expected| <= abs + rel * |expected|`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Absolute tolerance.
    #[serde(default)]
    pub abs: f64,
    /// Relative tolerance scaled by the magnitude of the expected value.
    #[serde(default)]
    pub rel: f64,
}

impl Tolerance {
    /// Tolerance applied to log-mean comparisons in the reference fixtures.
    pub const LOG_MEAN: Tolerance = Tolerance::new(1e-2, 1e-2);
    /// Tolerance applied to sigma comparisons in the reference fixtures.
    pub const SIGMA: Tolerance = Tolerance::new(5e-3, 5e-3);

    /// Creates a new tolerance pair.
    pub const fn new(abs: f64, rel: f64) -> Self {
        Self { abs, rel }
    }

    /// Largest deviation accepted for the given expected value.
    pub fn bound(&self, expected: f64) -> f64 {
        self.abs + self.rel * expected.abs()
    }

    /// Returns true when `actual` is within tolerance of `expected`.
    ///
    /// NaN never compares close; equal infinities do.
    pub fn is_close(&self, actual: f64, expected: f64) -> bool {
        if actual.is_nan() || expected.is_nan() {
            return false;
        }
        if actual.is_infinite() || expected.is_infinite() {
            return actual == expected;
        }
        (actual - expected).abs() <= self.bound(expected)
    }

    /// Returns true when every pair is within tolerance and the lengths match.
    pub fn all_close<'a, A, E>(&self, actual: A, expected: E) -> bool
    where
        A: IntoIterator<Item = &'a f64>,
        E: IntoIterator<Item = &'a f64>,
    {
        let mut actual = actual.into_iter();
        let mut expected = expected.into_iter();
        loop {
            match (actual.next(), expected.next()) {
                (Some(a), Some(e)) => {
                    if !self.is_close(*a, *e) {
                        return false;
                    }
                }
                (None, None) => return true,
                _ => return false,
            }
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::LOG_MEAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_scales_with_expected() {
        let tol = Tolerance::new(0.01, 0.01);
        assert!(tol.is_close(-2.53, -2.530992));
        assert!(tol.is_close(10.1, 10.0));
        assert!(!tol.is_close(10.25, 10.0));
    }

    #[test]
    fn nan_is_never_close() {
        assert!(!Tolerance::SIGMA.is_close(f64::NAN, f64::NAN));
        assert!(Tolerance::SIGMA.is_close(f64::INFINITY, f64::INFINITY));
    }

    #[test]
    fn length_mismatch_fails() {
        let tol = Tolerance::SIGMA;
        assert!(tol.all_close(&[0.566, 0.596], &[0.566, 0.596]));
        assert!(!tol.all_close(&[0.566], &[0.566, 0.596]));
    }
}
