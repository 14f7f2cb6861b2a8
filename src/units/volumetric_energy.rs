use serde::{Deserialize, Serialize};

/// 체적 기준 발열량(및 Wobbe Index) 단위. 내부 기준은 MJ/m³ 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumetricEnergyUnit {
    MjPerM3,
    KjPerM3,
    BtuPerScf,
}

/// MJ/m³ → Btu/scf. 표준상태 차이를 포함한 관용 환산 계수.
pub const BTU_PER_SCF_PER_MJ_PER_M3: f64 = 26.839;

fn to_mj_per_m3(value: f64, unit: VolumetricEnergyUnit) -> f64 {
    match unit {
        VolumetricEnergyUnit::MjPerM3 => value,
        VolumetricEnergyUnit::KjPerM3 => value / 1000.0,
        VolumetricEnergyUnit::BtuPerScf => value / BTU_PER_SCF_PER_MJ_PER_M3,
    }
}

fn from_mj_per_m3(value: f64, unit: VolumetricEnergyUnit) -> f64 {
    match unit {
        VolumetricEnergyUnit::MjPerM3 => value,
        VolumetricEnergyUnit::KjPerM3 => value * 1000.0,
        VolumetricEnergyUnit::BtuPerScf => value * BTU_PER_SCF_PER_MJ_PER_M3,
    }
}

/// 체적 기준 발열량을 변환한다.
pub fn convert_volumetric_energy(
    value: f64,
    from: VolumetricEnergyUnit,
    to: VolumetricEnergyUnit,
) -> f64 {
    from_mj_per_m3(to_mj_per_m3(value, from), to)
}
