use super::components::Component;
use super::composition::Composition;

/// 이름이 붙은 대표 조성(mol%).
#[derive(Debug)]
pub struct Preset {
    pub name: &'static str,
    pub amounts: &'static [(Component, f64)],
}

impl Preset {
    pub fn composition(&self) -> Composition {
        Composition::from_amounts(self.amounts.iter().copied())
    }
}

pub static PRESETS: [Preset; 3] = [
    Preset {
        name: "Pipeline Natural Gas",
        amounts: &[
            (Component::Methane, 95.0),
            (Component::Ethane, 2.5),
            (Component::Propane, 0.5),
            (Component::NButane, 0.2),
            (Component::CarbonDioxide, 1.0),
            (Component::Nitrogen, 0.8),
        ],
    },
    Preset {
        name: "Rich Natural Gas",
        amounts: &[
            (Component::Methane, 85.0),
            (Component::Ethane, 8.0),
            (Component::Propane, 4.0),
            (Component::NButane, 1.5),
            (Component::CarbonDioxide, 0.5),
            (Component::Nitrogen, 1.0),
        ],
    },
    Preset {
        name: "Lean Natural Gas",
        amounts: &[
            (Component::Methane, 98.0),
            (Component::Ethane, 0.5),
            (Component::CarbonDioxide, 1.0),
            (Component::Nitrogen, 0.5),
        ],
    },
];

pub fn presets() -> &'static [Preset] {
    &PRESETS
}

/// 프리셋을 이름으로 찾는다. 대소문자를 무시하고 첫 단어(`pipeline`, `rich`, `lean`)만으로도 찾는다.
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    let key = name.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }
    PRESETS.iter().find(|p| {
        let full = p.name.to_lowercase();
        full == key || full.split_whitespace().next() == Some(key.as_str())
    })
}
