// bp-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, Force as UomForce, HeatTransfer as UomHeatTransfer, Mass as UomMass,
    Power as UomPower, Ratio as UomRatio, SpecificHeatCapacity as UomSpecificHeatCapacity,
    ThermodynamicTemperature as UomThermodynamicTemperature, Time as UomTime,
    Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Force = UomForce;
/// Surface heat transfer coefficient, W/(m²·K)
pub type HeatTransferCoeff = UomHeatTransfer;
pub type Mass = UomMass;
pub type Power = UomPower;
pub type Ratio = UomRatio;
pub type SpecificHeat = UomSpecificHeatCapacity;
pub type Temperature = UomThermodynamicTemperature;
pub type Time = UomTime;
pub type Velocity = UomVelocity;

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn n(v: f64) -> Force {
    use uom::si::force::newton;
    Force::new::<newton>(v)
}

#[inline]
pub fn w(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn w_per_m2k(v: f64) -> HeatTransferCoeff {
    use uom::si::heat_transfer::watt_per_square_meter_kelvin;
    HeatTransferCoeff::new::<watt_per_square_meter_kelvin>(v)
}

#[inline]
pub fn j_per_kgk(v: f64) -> SpecificHeat {
    use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;
    SpecificHeat::new::<joule_per_kilogram_kelvin>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _t = k(300.0);
        let _f = n(500.0);
        let _q = w(1_000.0);
        let _v = mps(10.0);
        let _a = m2(0.01);
        let _m = kg(2.0);
        let _dt = s(0.01);
        let _h = w_per_m2k(0.5);
        let _c = j_per_kgk(1.0);
        let _r = unitless(0.5);
    }

    #[test]
    fn values_are_si_base() {
        assert_eq!(k(300.0).value, 300.0);
        assert_eq!(n(500.0).value, 500.0);
        assert_eq!(w_per_m2k(12.5).value, 12.5);
        assert_eq!(j_per_kgk(900.0).value, 900.0);
    }
}
