//! 단위 정의 및 변환 모듈 모음.

pub mod density;
pub mod specific_energy;
pub mod temperature;
pub mod volumetric_energy;

use serde::{Deserialize, Serialize};

pub use density::{convert_density, DensityUnit};
pub use specific_energy::{convert_specific_energy, SpecificEnergyUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
pub use volumetric_energy::{convert_volumetric_energy, VolumetricEnergyUnit};

/// 결과 표시 단위계. 계산과 판정은 항상 SI 로 이뤄진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitSystem {
    /// SI (MJ/kg, MJ/m³, kg/m³, °C)
    #[default]
    SI,
    /// 미국 관용 단위 (Btu/lb, Btu/scf, lb/ft³, °F)
    US,
}

impl UnitSystem {
    pub fn parse(s: &str) -> Option<UnitSystem> {
        match s.trim().to_lowercase().as_str() {
            "si" | "metric" => Some(UnitSystem::SI),
            "us" | "imperial" => Some(UnitSystem::US),
            _ => None,
        }
    }
}
