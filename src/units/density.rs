use serde::{Deserialize, Serialize};

/// 밀도 단위. 내부 기준은 kg/m³ 이다.
///
/// 순수한 단위 환산이다. 가스의 SI/US 표준상태 밀도는 기준 조건이 달라서
/// 이 계수로 서로 바꿀 수 없다(`gas::properties` 참고).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityUnit {
    KgPerM3,
    GPerL,
    LbPerFt3,
}

/// kg/m³ → lb/ft³
pub const LB_PER_FT3_PER_KG_PER_M3: f64 = 0.062428;

fn to_kg_per_m3(value: f64, unit: DensityUnit) -> f64 {
    match unit {
        DensityUnit::KgPerM3 | DensityUnit::GPerL => value,
        DensityUnit::LbPerFt3 => value / LB_PER_FT3_PER_KG_PER_M3,
    }
}

fn from_kg_per_m3(value: f64, unit: DensityUnit) -> f64 {
    match unit {
        DensityUnit::KgPerM3 | DensityUnit::GPerL => value,
        DensityUnit::LbPerFt3 => value * LB_PER_FT3_PER_KG_PER_M3,
    }
}

/// 밀도를 변환한다.
pub fn convert_density(value: f64, from: DensityUnit, to: DensityUnit) -> f64 {
    from_kg_per_m3(to_kg_per_m3(value, from), to)
}
