use crate::BpError;

/// Floating point type used throughout the model
pub type Real = f64;

/// Absolute/relative tolerance pair for float comparisons
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
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

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, BpError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(BpError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, BpError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(BpError::OutOfRange { what, value: v })
    }
}

/// Finite and >= 0.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, BpError> {
    let v = ensure_finite(v, what)?;
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(BpError::OutOfRange { what, value: v })
    }
}

/// Finite and strictly inside (0, 1).
pub fn ensure_open_unit(v: Real, what: &'static str) -> Result<Real, BpError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 && v < 1.0 {
        Ok(v)
    } else {
        Err(BpError::OutOfRange { what, value: v })
    }
}

/// Finite and inside [0, 1].
pub fn ensure_unit_interval(v: Real, what: &'static str) -> Result<Real, BpError> {
    let v = ensure_finite(v, what)?;
    if (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err(BpError::OutOfRange { what, value: v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn open_unit_rejects_bounds() {
        assert!(ensure_open_unit(0.0, "ratio").is_err());
        assert!(ensure_open_unit(1.0, "ratio").is_err());
        assert_eq!(ensure_open_unit(0.3, "ratio").unwrap(), 0.3);
    }

    #[test]
    fn unit_interval_accepts_bounds() {
        assert!(ensure_unit_interval(0.0, "mu").is_ok());
        assert!(ensure_unit_interval(1.0, "mu").is_ok());
        assert!(ensure_unit_interval(1.01, "mu").is_err());
    }

    #[test]
    fn positive_vs_non_negative() {
        assert!(ensure_positive(0.0, "area").is_err());
        assert!(ensure_non_negative(0.0, "force").is_ok());
        assert!(ensure_non_negative(-1e-9, "force").is_err());
        assert!(matches!(
            ensure_positive(Real::INFINITY, "area"),
            Err(BpError::NonFinite { .. })
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nearly_equal_is_symmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }
    }
}
