//! Conductive heat loss through the pad's contact patch.

use crate::common::{as_loss, check_finite};
use crate::error::{ComponentError, ComponentResult};
use crate::traits::HeatPath;
use bp_core::numeric::ensure_non_negative;
use bp_core::units::{Area, HeatTransferCoeff, Power, Temperature, w};

/// Conduction between the pad and the body it is clamped against.
///
/// The rate is always reported as a loss: `-|k * (T_pad - T_contact) * A|`.
/// A contact hotter than the pad still drains the pad.
#[derive(Debug, Clone)]
pub struct HeatConduction {
    /// Contact conductance per unit area
    pub coefficient: HeatTransferCoeff,
    /// Contact patch area
    pub contact_area: Area,
}

impl HeatConduction {
    pub fn new(coefficient: HeatTransferCoeff, contact_area: Area) -> ComponentResult<Self> {
        if !(contact_area.value > 0.0) {
            return Err(ComponentError::InvalidParameter {
                what: "contact area must be positive",
            });
        }
        ensure_non_negative(coefficient.value, "conduction coefficient")?;
        Ok(Self {
            coefficient,
            contact_area,
        })
    }
}

impl HeatPath for HeatConduction {
    fn name(&self) -> &str {
        "conduction"
    }

    fn heat_rate(&self, pad: Temperature, boundary: Temperature) -> ComponentResult<Power> {
        let dt = pad.value - boundary.value;
        let raw = self.coefficient.value * dt * self.contact_area.value;
        let q = check_finite(as_loss(raw), "conduction heat rate")?;
        Ok(w(q))
    }

    fn conductance(&self) -> f64 {
        self.coefficient.value * self.contact_area.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bp_core::units::{k, m2, w_per_m2k};

    #[test]
    fn conduction_is_always_a_loss() {
        let cond = HeatConduction::new(w_per_m2k(2.0), m2(0.5)).unwrap();

        let hot_pad = cond.heat_rate(k(310.0), k(300.0)).unwrap();
        let cold_pad = cond.heat_rate(k(300.0), k(310.0)).unwrap();

        assert_eq!(hot_pad.value, -10.0);
        assert_eq!(cold_pad.value, -10.0);
    }

    #[test]
    fn conduction_zero_at_equal_temperature() {
        let cond = HeatConduction::new(w_per_m2k(2.0), m2(0.5)).unwrap();
        let q = cond.heat_rate(k(300.0), k(300.0)).unwrap();
        assert_eq!(q.value, 0.0);
    }

    #[test]
    fn conduction_rejects_bad_area() {
        assert!(matches!(
            HeatConduction::new(w_per_m2k(2.0), m2(0.0)),
            Err(ComponentError::InvalidParameter { .. })
        ));
        assert!(HeatConduction::new(w_per_m2k(2.0), m2(-1.0)).is_err());
        assert!(HeatConduction::new(w_per_m2k(2.0), m2(f64::NAN)).is_err());
    }

    #[test]
    fn conduction_rejects_negative_coefficient() {
        assert!(matches!(
            HeatConduction::new(w_per_m2k(-1.0), m2(1.0)),
            Err(ComponentError::InvalidParameter { .. })
        ));
    }
}
