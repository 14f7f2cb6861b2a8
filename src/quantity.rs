/// 단위 변환기에서 다루는 물리량 계열.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Temperature,
    Density,
    /// 질량 기준 발열량
    SpecificEnergy,
    /// 체적 기준 발열량 및 Wobbe Index
    VolumetricEnergy,
}

/// 계산 결과에서 표시 가능한 물성 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    MolecularWeight,
    SpecificGravity,
    Density,
    LhvMass,
    LhvVolume,
    HhvMass,
    HhvVolume,
    WobbeLower,
    WobbeHigher,
    H2Content,
    Inerts,
    H2s,
    MethaneNumber,
    AirFuelRatio,
    FlameTemperature,
    FlameSpeedIndex,
}

/// 표시 단위 선택에 쓰이는 물성의 차원.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// g/mol 와 lb/lbmol 은 같은 수치
    MolarMass,
    Dimensionless,
    /// SI/US 표준상태 밀도는 각각 따로 계산된다
    StandardDensity,
    SpecificEnergy,
    VolumetricEnergy,
    MolePercent,
    Ppmv,
    /// kg/kg 와 lb/lb 는 같은 수치
    MassRatio,
    Temperature,
}

impl PropertyKind {
    /// 결과 표 출력 순서.
    pub const TABLE: [PropertyKind; 16] = [
        PropertyKind::MolecularWeight,
        PropertyKind::SpecificGravity,
        PropertyKind::Density,
        PropertyKind::LhvMass,
        PropertyKind::LhvVolume,
        PropertyKind::HhvMass,
        PropertyKind::HhvVolume,
        PropertyKind::WobbeLower,
        PropertyKind::WobbeHigher,
        PropertyKind::H2Content,
        PropertyKind::Inerts,
        PropertyKind::H2s,
        PropertyKind::MethaneNumber,
        PropertyKind::AirFuelRatio,
        PropertyKind::FlameTemperature,
        PropertyKind::FlameSpeedIndex,
    ];

    pub fn dimension(self) -> Dimension {
        match self {
            PropertyKind::MolecularWeight => Dimension::MolarMass,
            PropertyKind::SpecificGravity
            | PropertyKind::MethaneNumber
            | PropertyKind::FlameSpeedIndex => Dimension::Dimensionless,
            PropertyKind::Density => Dimension::StandardDensity,
            PropertyKind::LhvMass | PropertyKind::HhvMass => Dimension::SpecificEnergy,
            PropertyKind::LhvVolume
            | PropertyKind::HhvVolume
            | PropertyKind::WobbeLower
            | PropertyKind::WobbeHigher => Dimension::VolumetricEnergy,
            PropertyKind::H2Content | PropertyKind::Inerts => Dimension::MolePercent,
            PropertyKind::H2s => Dimension::Ppmv,
            PropertyKind::AirFuelRatio => Dimension::MassRatio,
            PropertyKind::FlameTemperature => Dimension::Temperature,
        }
    }

    /// 영문 표시 이름. 번역은 `i18n` 에서 덮어쓴다.
    pub fn label(self) -> &'static str {
        match self {
            PropertyKind::MolecularWeight => "Molecular Weight",
            PropertyKind::SpecificGravity => "Specific Gravity",
            PropertyKind::Density => "Density",
            PropertyKind::LhvMass => "LHV (mass)",
            PropertyKind::LhvVolume => "LHV (volume)",
            PropertyKind::HhvMass => "HHV (mass)",
            PropertyKind::HhvVolume => "HHV (volume)",
            PropertyKind::WobbeLower => "Wobbe Index (L)",
            PropertyKind::WobbeHigher => "Wobbe Index (H)",
            PropertyKind::H2Content => "H2 Content",
            PropertyKind::Inerts => "CO2+N2",
            PropertyKind::H2s => "H2S",
            PropertyKind::MethaneNumber => "Methane Number",
            PropertyKind::AirFuelRatio => "Air/Fuel Ratio",
            PropertyKind::FlameTemperature => "Flame Temp",
            PropertyKind::FlameSpeedIndex => "Flame Speed Index",
        }
    }

    /// 표시 소수 자릿수.
    pub fn decimals(self) -> usize {
        match self {
            PropertyKind::MolecularWeight => 3,
            PropertyKind::SpecificGravity | PropertyKind::Density => 4,
            PropertyKind::H2s | PropertyKind::MethaneNumber => 1,
            PropertyKind::FlameTemperature => 0,
            PropertyKind::FlameSpeedIndex => 3,
            _ => 2,
        }
    }
}
