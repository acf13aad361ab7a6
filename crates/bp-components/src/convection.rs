//! Convective heat loss from the exposed pad surface.

use crate::common::check_finite;
use crate::error::{ComponentError, ComponentResult};
use crate::traits::HeatPath;
use bp_core::units::{Area, HeatTransferCoeff, Power, Temperature, w};

/// Convection from the pad to the surrounding air.
///
/// Only heat leaving a pad hotter than ambient is modeled. Evaluating with a
/// pad at or below ambient is a contract error, not a zero rate.
#[derive(Debug, Clone)]
pub struct HeatConvection {
    /// Convective coefficient of the pad surface
    pub coefficient: HeatTransferCoeff,
    /// Area subject to convective loss
    pub pad_area: Area,
}

impl HeatConvection {
    pub fn new(coefficient: HeatTransferCoeff, pad_area: Area) -> ComponentResult<Self> {
        if !(coefficient.value > 0.0) || !coefficient.value.is_finite() {
            return Err(ComponentError::InvalidParameter {
                what: "convective coefficient must be positive",
            });
        }
        if !(pad_area.value > 0.0) || !pad_area.value.is_finite() {
            return Err(ComponentError::InvalidParameter {
                what: "pad area must be positive",
            });
        }
        Ok(Self {
            coefficient,
            pad_area,
        })
    }
}

impl HeatPath for HeatConvection {
    fn name(&self) -> &str {
        "convection"
    }

    fn heat_rate(&self, pad: Temperature, ambient: Temperature) -> ComponentResult<Power> {
        if !(pad.value > ambient.value) {
            return Err(ComponentError::PreconditionViolated {
                what: "pad temperature must exceed ambient for convection",
            });
        }
        let dt = pad.value - ambient.value;
        let q = check_finite(
            -(self.coefficient.value * dt * self.pad_area.value),
            "convection heat rate",
        )?;
        // Underflow of a tiny difference would otherwise report a zero loss.
        if !(q < 0.0) {
            return Err(ComponentError::PreconditionViolated {
                what: "pad-ambient temperature difference too small for convection",
            });
        }
        Ok(w(q))
    }

    fn conductance(&self) -> f64 {
        self.coefficient.value * self.pad_area.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bp_core::units::{k, m2, w_per_m2k};

    #[test]
    fn convection_basic() {
        let conv = HeatConvection::new(w_per_m2k(0.5), m2(2.0)).unwrap();
        let q = conv.heat_rate(k(350.0), k(300.0)).unwrap();
        assert_eq!(q.value, -50.0);
    }

    #[test]
    fn convection_requires_hot_pad() {
        let conv = HeatConvection::new(w_per_m2k(0.5), m2(2.0)).unwrap();

        let equal = conv.heat_rate(k(300.0), k(300.0));
        assert!(matches!(
            equal,
            Err(ComponentError::PreconditionViolated { .. })
        ));

        let colder = conv.heat_rate(k(290.0), k(300.0));
        assert!(matches!(
            colder,
            Err(ComponentError::PreconditionViolated { .. })
        ));
    }

    #[test]
    fn convection_rejects_bad_parameters() {
        assert!(matches!(
            HeatConvection::new(w_per_m2k(0.0), m2(1.0)),
            Err(ComponentError::InvalidParameter { .. })
        ));
        assert!(matches!(
            HeatConvection::new(w_per_m2k(0.5), m2(-1.0)),
            Err(ComponentError::InvalidParameter { .. })
        ));
    }
}
