//! SI 기준 계산 결과를 표시 단위로 바꾸는 유일한 경계.
//!
//! 계산기와 판정기는 SI 값만 다루고, 단위계 선택은 여기서만 한다.

use thiserror::Error;

use crate::gas::{AcceptanceLimit, LimitKey, PropertyRecord};
use crate::quantity::{Dimension, PropertyKind, QuantityKind};
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    /// 지원하지 않는 물리량
    #[error("지원하지 않는 물리량: {0}")]
    UnsupportedQuantity(String),
}

/// 물성의 SI 기준 값을 꺼낸다.
pub fn si_value(record: &PropertyRecord, kind: PropertyKind) -> f64 {
    match kind {
        PropertyKind::MolecularWeight => record.molecular_weight,
        PropertyKind::SpecificGravity => record.specific_gravity,
        PropertyKind::Density => record.density_si,
        PropertyKind::LhvMass => record.lhv_mass,
        PropertyKind::LhvVolume => record.lhv_volume,
        PropertyKind::HhvMass => record.hhv_mass,
        PropertyKind::HhvVolume => record.hhv_volume,
        PropertyKind::WobbeLower => record.wobbe_lower,
        PropertyKind::WobbeHigher => record.wobbe_higher,
        PropertyKind::H2Content => record.h2_mol_percent,
        PropertyKind::Inerts => record.inerts_mol_percent,
        PropertyKind::H2s => record.h2s_ppmv,
        PropertyKind::MethaneNumber => record.methane_number,
        PropertyKind::AirFuelRatio => record.air_fuel_ratio,
        PropertyKind::FlameTemperature => record.flame_temperature_c,
        PropertyKind::FlameSpeedIndex => record.flame_speed_index,
    }
}

/// 물성을 요청한 단위계의 값으로 돌려준다.
///
/// 밀도만 예외로, US 값은 환산하지 않고 60 °F 기준으로 따로 계산된 값을 쓴다.
pub fn property_value(record: &PropertyRecord, kind: PropertyKind, system: UnitSystem) -> f64 {
    match (system, kind.dimension()) {
        (UnitSystem::US, Dimension::StandardDensity) => record.density_us,
        (system, dim) => to_display(si_value(record, kind), dim, system),
    }
}

/// SI 값 하나를 차원에 맞춰 표시 단위로 환산한다. 표준상태 밀도는 환산 대상이 아니다.
pub fn to_display(si: f64, dimension: Dimension, system: UnitSystem) -> f64 {
    if system == UnitSystem::SI {
        return si;
    }
    match dimension {
        Dimension::SpecificEnergy => {
            convert_specific_energy(si, SpecificEnergyUnit::MjPerKg, SpecificEnergyUnit::BtuPerLb)
        }
        Dimension::VolumetricEnergy => convert_volumetric_energy(
            si,
            VolumetricEnergyUnit::MjPerM3,
            VolumetricEnergyUnit::BtuPerScf,
        ),
        Dimension::Temperature => {
            convert_temperature(si, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit)
        }
        Dimension::MolarMass
        | Dimension::Dimensionless
        | Dimension::StandardDensity
        | Dimension::MolePercent
        | Dimension::Ppmv
        | Dimension::MassRatio => si,
    }
}

/// 단위 라벨.
pub fn unit_label(kind: PropertyKind, system: UnitSystem) -> &'static str {
    let si = system == UnitSystem::SI;
    match kind.dimension() {
        Dimension::MolarMass => if si { "g/mol" } else { "lb/lbmol" },
        Dimension::Dimensionless => "-",
        Dimension::StandardDensity => if si { "kg/m3" } else { "lb/ft3" },
        Dimension::SpecificEnergy => if si { "MJ/kg" } else { "Btu/lb" },
        Dimension::VolumetricEnergy => if si { "MJ/m3" } else { "Btu/scf" },
        Dimension::MolePercent => "mol%",
        Dimension::Ppmv => "ppmv",
        Dimension::MassRatio => if si { "kg/kg" } else { "lb/lb" },
        Dimension::Temperature => if si { "C" } else { "F" },
    }
}

/// 허용 범위를 표시 단위로 환산한다. 판정에는 쓰지 않는다.
pub fn display_limit(key: LimitKey, limit: &AcceptanceLimit, system: UnitSystem) -> (f64, f64) {
    let dim = key.property().dimension();
    (
        to_display(limit.min, dim, system),
        to_display(limit.max, dim, system),
    )
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시: `MJ/kg`, `Btu/lb`, `MJ/m3`, `Btu/scf`, `kg/m3`, `lb/ft3`, `C`, `F`.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        QuantityKind::Density => {
            let from = parse_density_unit(from_unit_str)?;
            let to = parse_density_unit(to_unit_str)?;
            Ok(convert_density(value, from, to))
        }
        QuantityKind::SpecificEnergy => {
            let from = parse_specific_energy_unit(from_unit_str)?;
            let to = parse_specific_energy_unit(to_unit_str)?;
            Ok(convert_specific_energy(value, from, to))
        }
        QuantityKind::VolumetricEnergy => {
            let from = parse_volumetric_energy_unit(from_unit_str)?;
            let to = parse_volumetric_energy_unit(to_unit_str)?;
            Ok(convert_volumetric_energy(value, from, to))
        }
    }
}

/// 물리량 이름을 해석한다.
pub fn parse_quantity_kind(s: &str) -> Result<QuantityKind, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "temperature" | "temp" | "t" => Ok(QuantityKind::Temperature),
        "density" | "rho" => Ok(QuantityKind::Density),
        "specific-energy" | "mass-hv" | "hv-mass" => Ok(QuantityKind::SpecificEnergy),
        "volumetric-energy" | "volume-hv" | "hv-volume" | "wobbe" => {
            Ok(QuantityKind::VolumetricEnergy)
        }
        other => Err(ConversionError::UnsupportedQuantity(other.to_string())),
    }
}

fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        "r" | "rankine" => Ok(TemperatureUnit::Rankine),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_density_unit(s: &str) -> Result<DensityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kg/m3" | "kg/m³" => Ok(DensityUnit::KgPerM3),
        "g/l" => Ok(DensityUnit::GPerL),
        "lb/ft3" | "lb/ft³" | "lbm/ft3" => Ok(DensityUnit::LbPerFt3),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_specific_energy_unit(s: &str) -> Result<SpecificEnergyUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "mj/kg" => Ok(SpecificEnergyUnit::MjPerKg),
        "kj/kg" => Ok(SpecificEnergyUnit::KjPerKg),
        "kcal/kg" => Ok(SpecificEnergyUnit::KcalPerKg),
        "btu/lb" | "btu/lbm" => Ok(SpecificEnergyUnit::BtuPerLb),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_volumetric_energy_unit(s: &str) -> Result<VolumetricEnergyUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "mj/m3" | "mj/m³" | "mj/nm3" => Ok(VolumetricEnergyUnit::MjPerM3),
        "kj/m3" | "kj/m³" => Ok(VolumetricEnergyUnit::KjPerM3),
        "btu/scf" | "btu/ft3" => Ok(VolumetricEnergyUnit::BtuPerScf),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_heating_value_strings() {
        let v = convert(QuantityKind::SpecificEnergy, 1.0, "MJ/kg", "Btu/lb").unwrap();
        assert_eq!(v, 429.923);
        let v = convert(QuantityKind::VolumetricEnergy, 26.839, "Btu/scf", "MJ/m3").unwrap();
        assert!((v - 1.0).abs() < 1e-12);
        let v = convert(QuantityKind::SpecificEnergy, 1.0, "kcal/kg", "kJ/kg").unwrap();
        assert!((v - 4.184).abs() < 1e-9);
    }

    #[test]
    fn convert_density_and_temperature() {
        let v = convert(QuantityKind::Density, 1.0, "kg/m3", "lb/ft3").unwrap();
        assert_eq!(v, 0.062428);
        let v = convert(QuantityKind::Temperature, 100.0, "C", "F").unwrap();
        assert!((v - 212.0).abs() < 1e-9);
        let v = convert(QuantityKind::Temperature, 0.0, "C", "K").unwrap();
        assert!((v - 273.15).abs() < 1e-9);
    }

    #[test]
    fn unknown_unit_is_error() {
        let err = convert(QuantityKind::Density, 1.0, "stone/acre", "kg/m3").unwrap_err();
        assert!(matches!(err, ConversionError::UnknownUnit(_)));
        assert!(parse_quantity_kind("luminosity").is_err());
        assert_eq!(parse_quantity_kind("Wobbe").unwrap(), QuantityKind::VolumetricEnergy);
    }

    #[test]
    fn wobbe_limit_scales_only_for_us() {
        let lim = AcceptanceLimit::new(47.0, 51.0, "Wobbe Index (L)");
        assert_eq!(display_limit(LimitKey::WobbeLower, &lim, UnitSystem::SI), (47.0, 51.0));
        let (lo, hi) = display_limit(LimitKey::WobbeLower, &lim, UnitSystem::US);
        assert_eq!(lo, 47.0 * 26.839);
        assert_eq!(hi, 51.0 * 26.839);
        let sg = AcceptanceLimit::new(0.55, 0.75, "Specific Gravity");
        assert_eq!(
            display_limit(LimitKey::SpecificGravity, &sg, UnitSystem::US),
            (0.55, 0.75)
        );
    }
}
