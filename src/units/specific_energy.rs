use serde::{Deserialize, Serialize};

/// 질량 기준 발열량 단위. 내부 기준은 MJ/kg 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecificEnergyUnit {
    MjPerKg,
    KjPerKg,
    KcalPerKg,
    BtuPerLb,
}

/// MJ/kg → Btu/lb
pub const BTU_PER_LB_PER_MJ_PER_KG: f64 = 429.923;

fn to_mj_per_kg(value: f64, unit: SpecificEnergyUnit) -> f64 {
    match unit {
        SpecificEnergyUnit::MjPerKg => value,
        SpecificEnergyUnit::KjPerKg => value / 1000.0,
        SpecificEnergyUnit::KcalPerKg => value * 4.184 / 1000.0,
        SpecificEnergyUnit::BtuPerLb => value / BTU_PER_LB_PER_MJ_PER_KG,
    }
}

fn from_mj_per_kg(value: f64, unit: SpecificEnergyUnit) -> f64 {
    match unit {
        SpecificEnergyUnit::MjPerKg => value,
        SpecificEnergyUnit::KjPerKg => value * 1000.0,
        SpecificEnergyUnit::KcalPerKg => value * 1000.0 / 4.184,
        SpecificEnergyUnit::BtuPerLb => value * BTU_PER_LB_PER_MJ_PER_KG,
    }
}

/// 질량 기준 발열량을 변환한다.
pub fn convert_specific_energy(
    value: f64,
    from: SpecificEnergyUnit,
    to: SpecificEnergyUnit,
) -> f64 {
    from_mj_per_kg(to_mj_per_kg(value, from), to)
}
