//! 조성 → 물성 계산 회귀 테스트.
use gas_turbine_fuel_analyzer::conversion::property_value;
use gas_turbine_fuel_analyzer::gas::{
    calculate, calculate_named, presets, Component, Composition, GasError,
};
use gas_turbine_fuel_analyzer::quantity::PropertyKind;
use gas_turbine_fuel_analyzer::units::UnitSystem;
use proptest::prelude::*;

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

fn pure_methane() -> Composition {
    Composition::from_amounts([(Component::Methane, 100.0)])
}

#[test]
fn pure_methane_reference_values() {
    let r = calculate(&pure_methane()).expect("methane record");
    assert_close(r.molecular_weight, 16.043, 1e-9);
    assert_close(r.specific_gravity, 0.5538, 1e-3);
    assert_close(r.density_si, 0.7158, 1e-3);
    assert_close(r.density_us, 0.04228, 1e-4);
    assert_close(r.lhv_mass, 50.01, 1e-9);
    assert_close(r.hhv_mass, 55.50, 1e-9);
    assert_close(r.lhv_volume, 35.795, 1e-3);
    assert_close(r.wobbe_lower, 48.11, 0.05);
    assert_close(r.methane_number, 137.78, 1e-9);
    assert_close(r.air_fuel_ratio, 17.239, 1e-3);
    assert_close(r.flame_temperature_c, 1989.49, 0.01);
    assert_close(r.flame_speed_index, 1.0, 1e-12);
    assert_eq!(r.h2_mol_percent, 0.0);
    assert_eq!(r.inerts_mol_percent, 0.0);
    assert_eq!(r.h2s_ppmv, 0.0);
}

#[test]
fn pipeline_preset_values() {
    let preset = presets::find_preset("pipeline").unwrap();
    let r = calculate(&preset.composition()).unwrap();
    assert_close(r.molecular_weight, 16.99, 0.01);
    assert_close(r.specific_gravity, 0.587, 0.002);
    assert_close(r.lhv_volume, 36.291, 0.01);
    assert_close(r.hhv_volume, 40.230, 0.01);
    assert_close(r.wobbe_lower, 47.384, 0.01);
    assert_close(r.methane_number, 129.52, 0.01);
    assert_close(r.inerts_mol_percent, 1.8, 1e-9);
    assert_close(r.air_fuel_ratio, 16.376, 1e-3);
}

#[test]
fn hydrogen_fuel_counts_toward_h2_content() {
    let r = calculate_named([("hydrogen", 100.0)]).unwrap().unwrap();
    assert_close(r.h2_mol_percent, 100.0, 1e-9);
    assert_close(r.methane_number, 0.0, 1e-12);
    assert_close(r.wobbe_lower, 40.915, 1e-3);
}

#[test]
fn empty_and_all_zero_compositions_yield_nothing() {
    assert!(calculate(&Composition::new()).is_none());
    let zeros = Composition::from_amounts([(Component::Methane, 0.0), (Component::Ethane, 0.0)]);
    assert!(calculate(&zeros).is_none());
    assert!(calculate_named(Vec::<(&str, f64)>::new()).unwrap().is_none());
}

#[test]
fn negative_amounts_are_dropped_before_normalizing() {
    let with_negative =
        Composition::from_amounts([(Component::Methane, 100.0), (Component::Ethane, -5.0)]);
    assert_eq!(calculate(&with_negative), calculate(&pure_methane()));
}

#[test]
fn huge_amounts_still_give_finite_properties() {
    let huge = calculate_named([("methane", 1e308), ("ethane", 1e308)])
        .unwrap()
        .unwrap();
    let even = calculate_named([("methane", 50.0), ("ethane", 50.0)])
        .unwrap()
        .unwrap();
    assert_eq!(huge, even);
    assert!(huge.molecular_weight > 0.0);
    assert!(huge.wobbe_lower.is_finite());
}

#[test]
fn non_finite_typed_amounts_are_ignored() {
    let only_inf = Composition::from_amounts([(Component::Methane, f64::INFINITY)]);
    assert!(calculate(&only_inf).is_none());

    let mixed = Composition::from_amounts([
        (Component::Methane, 100.0),
        (Component::Ethane, f64::INFINITY),
        (Component::Propane, f64::NAN),
    ]);
    assert_eq!(calculate(&mixed), calculate(&pure_methane()));
}

#[test]
fn unknown_species_is_rejected() {
    let err = calculate_named([("Unobtainium", 50.0)]).unwrap_err();
    assert!(matches!(err, GasError::UnknownSpecies(ref s) if s == "Unobtainium"));
}

#[test]
fn non_finite_amount_is_rejected() {
    let err = calculate_named([("methane", f64::NAN)]).unwrap_err();
    assert!(matches!(err, GasError::InvalidAmount { .. }));
}

#[test]
fn scaled_inputs_give_identical_records() {
    let a = calculate_named([("methane", 30.0), ("ethane", 70.0)]).unwrap();
    let b = calculate_named([("methane", 45.0), ("ethane", 105.0)]).unwrap();
    assert_eq!(a, b);
}

#[test]
fn us_values_are_fixed_multiples_of_si() {
    let r = calculate(&presets::find_preset("rich").unwrap().composition()).unwrap();
    let pairs = [
        (PropertyKind::LhvMass, 429.923),
        (PropertyKind::HhvMass, 429.923),
        (PropertyKind::LhvVolume, 26.839),
        (PropertyKind::HhvVolume, 26.839),
        (PropertyKind::WobbeLower, 26.839),
        (PropertyKind::WobbeHigher, 26.839),
    ];
    for (kind, factor) in pairs {
        let si = property_value(&r, kind, UnitSystem::SI);
        let us = property_value(&r, kind, UnitSystem::US);
        let rel = (us - si * factor).abs() / (si * factor);
        assert!(rel < 1e-9, "{kind:?}: si={si} us={us}");
    }
    let f = property_value(&r, PropertyKind::FlameTemperature, UnitSystem::US);
    assert_close(f, r.flame_temperature_c * 1.8 + 32.0, 1e-9);
    assert_eq!(
        property_value(&r, PropertyKind::Density, UnitSystem::US),
        r.density_us
    );
}

proptest! {
    #[test]
    fn normalization_is_scale_invariant(
        ch4 in 1.0f64..100.0,
        c2h6 in 0.0f64..20.0,
        n2 in 0.0f64..10.0,
        scale in 0.01f64..1000.0,
    ) {
        let base = Composition::from_amounts([
            (Component::Methane, ch4),
            (Component::Ethane, c2h6),
            (Component::Nitrogen, n2),
        ]);
        let scaled = Composition::from_amounts([
            (Component::Methane, ch4 * scale),
            (Component::Ethane, c2h6 * scale),
            (Component::Nitrogen, n2 * scale),
        ]);
        let a = calculate(&base).unwrap();
        let b = calculate(&scaled).unwrap();
        prop_assert!((a.molecular_weight - b.molecular_weight).abs() < 1e-9);
        prop_assert!((a.wobbe_lower - b.wobbe_lower).abs() < 1e-9);
        prop_assert!((a.methane_number - b.methane_number).abs() < 1e-9);
        prop_assert!((a.inerts_mol_percent - b.inerts_mol_percent).abs() < 1e-9);
    }

    #[test]
    fn fractions_always_sum_to_one(
        amounts in proptest::collection::vec(0.0f64..100.0, 14),
    ) {
        let comp = Composition::from_amounts(Component::ALL.into_iter().zip(amounts));
        if let Some(norm) = comp.normalize() {
            let sum: f64 = norm.iter().map(|(_, x)| x).sum();
            prop_assert!((sum - 1.0).abs() < 1e-12);
        } else {
            prop_assert!(comp.is_empty());
        }
    }
}
