//! Property tests for the pad transfer functions.

use bp_components::{
    ComponentError, FrictionModel, HeatConvection, HeatGeneration, HeatPath, HeatRates,
    TemperatureUpdate,
};
use bp_core::units::{j_per_kgk, k, kg, m2, mps, n, s, w, w_per_m2k};
use proptest::prelude::*;

proptest! {
    #[test]
    fn convection_negative_when_pad_hotter(
        h in 1e-3_f64..1e3,
        area in 1e-4_f64..10.0,
        ambient in 200.0_f64..400.0,
        excess in 1e-3_f64..500.0,
    ) {
        let conv = HeatConvection::new(w_per_m2k(h), m2(area)).unwrap();
        let q = conv.heat_rate(k(ambient + excess), k(ambient)).unwrap();
        prop_assert!(q.value < 0.0);
    }

    #[test]
    fn convection_rejects_pad_not_hotter(
        h in 1e-3_f64..1e3,
        area in 1e-4_f64..10.0,
        ambient in 200.0_f64..400.0,
        deficit in 0.0_f64..100.0,
    ) {
        let conv = HeatConvection::new(w_per_m2k(h), m2(area)).unwrap();
        let res = conv.heat_rate(k(ambient - deficit), k(ambient));
        let is_precondition = matches!(res, Err(ComponentError::PreconditionViolated { .. }));
        prop_assert!(is_precondition);
    }

    #[test]
    fn generation_split_conserves_total(
        ratio in 1e-6_f64..(1.0 - 1e-6),
        force in 0.0_f64..1e5,
        velocity in -200.0_f64..200.0,
    ) {
        let split = HeatGeneration::new(ratio).unwrap().split(n(force), mps(velocity)).unwrap();
        prop_assert_eq!(split.pad.value + split.track.value, split.total.value);
        prop_assert_eq!(split.total.value, force * velocity);
    }

    #[test]
    fn temperature_update_sign_invariant(
        conv in -1e4_f64..1e4,
        cond in -1e4_f64..1e4,
        gen_rate in -1e4_f64..1e4,
        t0 in 250.0_f64..800.0,
    ) {
        let update = TemperatureUpdate::new(j_per_kgk(1.0), s(0.01)).unwrap();
        let raw = HeatRates { convection: w(conv), conduction: w(cond), generated: w(gen_rate) };
        let flipped = HeatRates { convection: w(-conv), conduction: w(-cond), generated: w(-gen_rate) };

        let once = update.advance(k(t0), kg(2.0), raw).unwrap();
        let other = update.advance(k(t0), kg(2.0), flipped).unwrap();
        let twice = update.advance(k(t0), kg(2.0), raw.normalized()).unwrap();

        prop_assert_eq!(once, other);
        prop_assert_eq!(once, twice);
        prop_assert_eq!(raw.normalized().normalized(), raw.normalized());
    }

    #[test]
    fn friction_coefficient_bounded_and_non_increasing(
        mu_ss in 0.0_f64..1.0,
        m_v in 0.0_f64..1.0,
        m_t in 0.0_f64..0.1,
        p_v in 0.0_f64..3.0,
        p_t in 0.0_f64..3.0,
        v in 0.0_f64..150.0,
        t_lo in 200.0_f64..900.0,
        dt in 0.0_f64..300.0,
    ) {
        let model = FrictionModel::new(mu_ss, m_v, m_t, p_v, p_t, k(300.0)).unwrap();
        let lo = model.coefficient(k(t_lo), mps(v)).unwrap();
        let hi = model.coefficient(k(t_lo + dt), mps(v)).unwrap();

        prop_assert!((0.0..=mu_ss).contains(&lo));
        prop_assert!((0.0..=mu_ss).contains(&hi));
        prop_assert!(hi <= lo);
    }
}

#[test]
fn ratio_boundaries_are_invalid() {
    assert!(matches!(
        HeatGeneration::new(0.0),
        Err(ComponentError::InvalidParameter { .. })
    ));
    assert!(matches!(
        HeatGeneration::new(1.0),
        Err(ComponentError::InvalidParameter { .. })
    ));
}

#[test]
fn heat_paths_behind_trait_objects() {
    use bp_components::HeatConduction;

    let paths: Vec<Box<dyn HeatPath>> = vec![
        Box::new(HeatConduction::new(w_per_m2k(1.0), m2(0.01)).unwrap()),
        Box::new(HeatConvection::new(w_per_m2k(0.5), m2(0.02)).unwrap()),
    ];

    let total: f64 = paths
        .iter()
        .map(|p| p.heat_rate(k(400.0), k(300.0)).unwrap().value)
        .sum();
    // conduction -1.0 W, convection -1.0 W
    assert!((total + 2.0).abs() < 1e-12);

    let names: Vec<&str> = paths.iter().map(|p| p.name()).collect();
    assert_eq!(names, ["conduction", "convection"]);
}
