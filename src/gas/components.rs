use serde::{Deserialize, Serialize};

/// 기준표에 등록된 연료 가스 성분.
///
/// 선언 순서가 곧 표시 순서이며 `Ord` 도 이 순서를 따른다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Component {
    Methane,
    Ethane,
    Propane,
    NButane,
    IButane,
    NPentane,
    IPentane,
    NHexane,
    Heptane,
    Hydrogen,
    CarbonMonoxide,
    CarbonDioxide,
    Nitrogen,
    HydrogenSulfide,
}

/// 성분별 물성 데이터. 발열량은 질량 기준(MJ/kg)이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentData {
    pub component: Component,
    pub name: &'static str,
    /// 표시용 분자식
    pub formula: &'static str,
    /// 몰질량 [g/mol]
    pub molar_mass: f64,
    /// 저위발열량 [MJ/kg]
    pub lhv: f64,
    /// 고위발열량 [MJ/kg]
    pub hhv: f64,
}

impl ComponentData {
    const fn new(
        component: Component,
        name: &'static str,
        formula: &'static str,
        molar_mass: f64,
        lhv: f64,
        hhv: f64,
    ) -> Self {
        Self {
            component,
            name,
            formula,
            molar_mass,
            lhv,
            hhv,
        }
    }
}

// 배열 인덱스는 `Component` 선언 순서와 일치해야 한다.
pub static COMPONENTS: [ComponentData; 14] = [
    ComponentData::new(Component::Methane, "Methane", "CH4", 16.043, 50.01, 55.50),
    ComponentData::new(Component::Ethane, "Ethane", "C2H6", 30.070, 47.49, 51.88),
    ComponentData::new(Component::Propane, "Propane", "C3H8", 44.097, 46.35, 50.36),
    ComponentData::new(Component::NButane, "n-Butane", "C4H10", 58.123, 45.75, 49.50),
    ComponentData::new(Component::IButane, "i-Butane", "C4H10", 58.123, 45.61, 49.36),
    ComponentData::new(Component::NPentane, "n-Pentane", "C5H12", 72.150, 45.36, 49.01),
    ComponentData::new(Component::IPentane, "i-Pentane", "C5H12", 72.150, 45.24, 48.89),
    ComponentData::new(Component::NHexane, "n-Hexane", "C6H14", 86.177, 45.10, 48.68),
    ComponentData::new(Component::Heptane, "Heptane", "C7H16", 100.204, 44.93, 48.45),
    ComponentData::new(Component::Hydrogen, "Hydrogen", "H2", 2.016, 120.00, 141.80),
    ComponentData::new(Component::CarbonMonoxide, "Carbon Monoxide", "CO", 28.010, 10.10, 10.10),
    ComponentData::new(Component::CarbonDioxide, "Carbon Dioxide", "CO2", 44.010, 0.00, 0.00),
    ComponentData::new(Component::Nitrogen, "Nitrogen", "N2", 28.014, 0.00, 0.00),
    ComponentData::new(Component::HydrogenSulfide, "Hydrogen Sulfide", "H2S", 34.081, 15.20, 16.53),
];

impl Component {
    pub const ALL: [Component; 14] = [
        Component::Methane,
        Component::Ethane,
        Component::Propane,
        Component::NButane,
        Component::IButane,
        Component::NPentane,
        Component::IPentane,
        Component::NHexane,
        Component::Heptane,
        Component::Hydrogen,
        Component::CarbonMonoxide,
        Component::CarbonDioxide,
        Component::Nitrogen,
        Component::HydrogenSulfide,
    ];

    /// 기준표의 물성 데이터를 반환한다.
    pub fn data(self) -> &'static ComponentData {
        &COMPONENTS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.data().name
    }

    pub fn formula(self) -> &'static str {
        self.data().formula
    }

    pub fn molar_mass(self) -> f64 {
        self.data().molar_mass
    }

    /// 이름 또는 분자식으로 성분을 찾는다.
    ///
    /// 대소문자, 공백, `-`, `_` 는 무시한다. 분자식은 하나의 성분만 가리킬 때만
    /// 인정한다(C4H10 처럼 이성질체가 있는 경우는 이름으로만 찾을 수 있다).
    pub fn from_name(name: &str) -> Option<Component> {
        let key = normalize_name(name);
        if key.is_empty() {
            return None;
        }
        if let Some(found) = COMPONENTS
            .iter()
            .find(|c| normalize_name(c.name) == key)
        {
            return Some(found.component);
        }
        let mut by_formula = COMPONENTS
            .iter()
            .filter(|c| normalize_name(c.formula) == key);
        match (by_formula.next(), by_formula.next()) {
            (Some(only), None) => Some(only.component),
            _ => None,
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn normalize_name(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_enum() {
        for (idx, c) in Component::ALL.iter().enumerate() {
            assert_eq!(COMPONENTS[idx].component, *c);
        }
    }

    #[test]
    fn every_species_has_positive_molar_mass() {
        assert!(COMPONENTS.iter().all(|c| c.molar_mass > 0.0));
        assert!(COMPONENTS.iter().all(|c| c.hhv >= c.lhv));
    }

    #[test]
    fn lookup_ignores_case_and_separators() {
        assert_eq!(Component::from_name("CarbonDioxide"), Some(Component::CarbonDioxide));
        assert_eq!(Component::from_name("carbon dioxide"), Some(Component::CarbonDioxide));
        assert_eq!(Component::from_name("n_butane"), Some(Component::NButane));
        assert_eq!(Component::from_name("i-Butane"), Some(Component::IButane));
    }

    #[test]
    fn lookup_by_unique_formula_only() {
        assert_eq!(Component::from_name("CH4"), Some(Component::Methane));
        assert_eq!(Component::from_name("h2s"), Some(Component::HydrogenSulfide));
        assert_eq!(Component::from_name("C4H10"), None);
        assert_eq!(Component::from_name("Unobtainium"), None);
        assert_eq!(Component::from_name(" "), None);
    }
}
