use crate::LfError;

/// Floating point type used throughout the analyzer.
pub type Real = f64;

/// One tolerance for everything.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-9,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, LfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(LfError::NonFinite { what, value: v })
    }
}

/// Round to 2 decimal places, the fixed precision used by reports.
///
/// Every quantity a report prints goes through this, so text comparisons
/// in tests are exact.
pub fn round2(v: Real) -> Real {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn round2_fixed_cases() {
        assert_eq!(round2(1.006), 1.01);
        assert_eq!(round2(114.999), 115.0);
        assert_eq!(round2(-2.346), -2.35);
    }

    proptest! {
        #[test]
        fn round2_is_idempotent(v in -1.0e6f64..1.0e6) {
            let r = round2(v);
            prop_assert_eq!(round2(r), r);
        }
    }
}
