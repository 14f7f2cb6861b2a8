//! 조성으로부터 연소 관련 물성을 계산한다.
//!
//! 모든 값은 SI 기준으로 저장한다. US 단위 값은 `conversion` 모듈에서 환산하며,
//! 예외적으로 표준상태 밀도만 SI/US 를 각각 독립된 식으로 계산한다.

use serde::Serialize;
use tracing::debug;

use super::components::Component;
use super::composition::{Composition, NormalizedComposition};
use super::error::GasResult;

/// 건조 공기의 몰질량 [g/mol]
pub const AIR_MOLAR_MASS: f64 = 28.97;
/// 0 °C, 1 atm 이상기체 몰부피 [m³/kmol]
pub const MOLAR_VOLUME_SI: f64 = 22.414;
/// 60 °F, 14.7 psia 이상기체 몰부피 [ft³/lbmol]
pub const MOLAR_VOLUME_US: f64 = 379.49;
/// 공기 중 산소 몰분율
pub const AIR_O2_FRACTION: f64 = 0.2095;

/// 계산된 물성 스냅샷. 생성 후 변경하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyRecord {
    pub composition: NormalizedComposition,
    /// 분자량 [g/mol] (= lb/lbmol)
    pub molecular_weight: f64,
    /// 비중(공기 기준)
    pub specific_gravity: f64,
    /// 표준상태 밀도 [kg/m³] (0 °C, 1 atm)
    pub density_si: f64,
    /// 표준상태 밀도 [lb/ft³] (60 °F, 14.7 psia)
    pub density_us: f64,
    /// 질량 기준 저위발열량 [MJ/kg]
    pub lhv_mass: f64,
    /// 질량 기준 고위발열량 [MJ/kg]
    pub hhv_mass: f64,
    /// 체적 기준 저위발열량 [MJ/m³]
    pub lhv_volume: f64,
    /// 체적 기준 고위발열량 [MJ/m³]
    pub hhv_volume: f64,
    /// 저위 Wobbe Index [MJ/m³]
    pub wobbe_lower: f64,
    /// 고위 Wobbe Index [MJ/m³]
    pub wobbe_higher: f64,
    /// 수소 함량 [mol%]
    pub h2_mol_percent: f64,
    /// CO2+N2 불활성 성분 [mol%]
    pub inerts_mol_percent: f64,
    /// 황화수소 [ppmv]
    pub h2s_ppmv: f64,
    /// 메탄가(경험식 근사)
    pub methane_number: f64,
    /// 이론 공연비 [kg 공기/kg 연료]
    pub air_fuel_ratio: f64,
    /// 단열화염온도 추정치 [°C]. 선형 근사식이며 연소 계산이 아니다.
    pub flame_temperature_c: f64,
    /// 화염속도 지표. 근거 없는 자리표시용 가중합이다.
    pub flame_speed_index: f64,
}

/// 이름 기반 조성을 검증한 뒤 물성을 계산한다.
///
/// 기준표에 없는 성분은 `Err`, 유효 성분이 없으면 `Ok(None)`.
pub fn calculate_named<I, S>(amounts: I) -> GasResult<Option<PropertyRecord>>
where
    I: IntoIterator<Item = (S, f64)>,
    S: AsRef<str>,
{
    let composition = Composition::from_named(amounts)?;
    Ok(calculate(&composition))
}

/// 조성으로부터 전체 물성을 계산한다. 유효 성분이 없으면 `None`.
pub fn calculate(composition: &Composition) -> Option<PropertyRecord> {
    let comp = composition.normalize()?;

    let mw: f64 = comp.iter().map(|(c, x)| x * c.molar_mass()).sum();
    let sg = mw / AIR_MOLAR_MASS;
    let density_si = mw / MOLAR_VOLUME_SI;
    let density_us = mw / MOLAR_VOLUME_US;

    // 질량분율 가중 평균 (몰분율 가중이 아님)
    let (lhv_mass, hhv_mass) = comp.iter().fold((0.0, 0.0), |(lhv, hhv), (c, x)| {
        let data = c.data();
        let w = x * data.molar_mass / mw;
        (lhv + w * data.lhv, hhv + w * data.hhv)
    });
    let lhv_volume = lhv_mass * density_si;
    let hhv_volume = hhv_mass * density_si;

    let sqrt_sg = sg.sqrt();
    let wobbe_lower = lhv_volume / sqrt_sg;
    let wobbe_higher = hhv_volume / sqrt_sg;

    let x = |c: Component| comp.fraction(c);
    let h2_mol_percent = x(Component::Hydrogen) * 100.0;
    let inerts_mol_percent = (x(Component::CarbonDioxide) + x(Component::Nitrogen)) * 100.0;
    let h2s_ppmv = x(Component::HydrogenSulfide) * 1e6;

    let methane_number = 137.78 * x(Component::Methane) - 40.0 * x(Component::Ethane)
        - 79.52 * x(Component::Propane)
        + 1.5 * inerts_mol_percent / 100.0;

    let o2_demand = x(Component::Methane) * 2.0
        + x(Component::Ethane) * 3.5
        + x(Component::Propane) * 5.0
        + x(Component::Hydrogen) * 0.5;
    let air_fuel_ratio = (o2_demand / AIR_O2_FRACTION * AIR_MOLAR_MASS) / mw;

    let flame_temperature_c = 1900.0 + (lhv_volume / 40.0) * 100.0 - inerts_mol_percent * 15.0;
    let flame_speed_index = x(Component::Methane) * 1.0 + x(Component::Ethane) * 0.9;

    debug!(
        species = comp.len(),
        molecular_weight = mw,
        wobbe_lower,
        "gas properties calculated"
    );

    Some(PropertyRecord {
        composition: comp,
        molecular_weight: mw,
        specific_gravity: sg,
        density_si,
        density_us,
        lhv_mass,
        hhv_mass,
        lhv_volume,
        hhv_volume,
        wobbe_lower,
        wobbe_higher,
        h2_mol_percent,
        inerts_mol_percent,
        h2s_ppmv,
        methane_number,
        air_fuel_ratio,
        flame_temperature_c,
        flame_speed_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn hydrogen_only_indicators() {
        let rec = calculate(&Composition::from_amounts([(Component::Hydrogen, 100.0)])).unwrap();
        assert!(close(rec.h2_mol_percent, 100.0, 1e-12));
        assert!(close(rec.inerts_mol_percent, 0.0, 1e-12));
        assert!(close(rec.methane_number, 0.0, 1e-12));
        // 0.5 / 0.2095 * 28.97 / 2.016
        assert!(close(rec.air_fuel_ratio, 0.5 / 0.2095 * 28.97 / 2.016, 1e-9));
    }

    #[test]
    fn inerts_only_mixture_has_zero_heating_value() {
        let rec = calculate(&Composition::from_amounts([
            (Component::CarbonDioxide, 50.0),
            (Component::Nitrogen, 50.0),
        ]))
        .unwrap();
        assert_eq!(rec.lhv_mass, 0.0);
        assert_eq!(rec.wobbe_lower, 0.0);
        assert!(close(rec.inerts_mol_percent, 100.0, 1e-9));
        assert!(close(rec.flame_temperature_c, 1900.0 - 1500.0, 1e-9));
        assert_eq!(rec.air_fuel_ratio, 0.0);
    }

    #[test]
    fn heating_value_is_mass_weighted() {
        // 메탄/수소 50:50 -> 몰 가중 평균(85 MJ/kg)과 달라야 한다
        let rec = calculate(&Composition::from_amounts([
            (Component::Methane, 50.0),
            (Component::Hydrogen, 50.0),
        ]))
        .unwrap();
        let mw = 0.5 * 16.043 + 0.5 * 2.016;
        let expected = (0.5 * 16.043 / mw) * 50.01 + (0.5 * 2.016 / mw) * 120.0;
        assert!(close(rec.lhv_mass, expected, 1e-9));
        assert!(!close(rec.lhv_mass, 85.005, 0.5));
    }

    #[test]
    fn h2s_in_ppmv() {
        let rec = calculate(&Composition::from_amounts([
            (Component::Methane, 99.9),
            (Component::HydrogenSulfide, 0.1),
        ]))
        .unwrap();
        assert!(close(rec.h2s_ppmv, 1000.0, 1e-6));
    }
}
