use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::properties::PropertyRecord;
use crate::quantity::PropertyKind;

/// 허용 범위를 걸 수 있는 물성 키. 직렬화 이름은 설정 파일 키로 쓰인다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LimitKey {
    #[serde(rename = "wobbe_lower")]
    WobbeLower,
    #[serde(rename = "lhv_vol")]
    LhvVolume,
    #[serde(rename = "sg")]
    SpecificGravity,
    #[serde(rename = "mn")]
    MethaneNumber,
    #[serde(rename = "h2")]
    H2Content,
    #[serde(rename = "co2_n2")]
    Inerts,
    #[serde(rename = "h2s")]
    H2sContent,
}

impl LimitKey {
    /// 적합성 판정에 포함되는 키 목록(평가 순서).
    pub const EVALUATED: [LimitKey; 7] = [
        LimitKey::WobbeLower,
        LimitKey::LhvVolume,
        LimitKey::SpecificGravity,
        LimitKey::MethaneNumber,
        LimitKey::H2Content,
        LimitKey::Inerts,
        LimitKey::H2sContent,
    ];

    pub fn code(self) -> &'static str {
        match self {
            LimitKey::WobbeLower => "wobbe_lower",
            LimitKey::LhvVolume => "lhv_vol",
            LimitKey::SpecificGravity => "sg",
            LimitKey::MethaneNumber => "mn",
            LimitKey::H2Content => "h2",
            LimitKey::Inerts => "co2_n2",
            LimitKey::H2sContent => "h2s",
        }
    }

    pub fn from_code(code: &str) -> Option<LimitKey> {
        let code = code.trim().to_lowercase();
        Self::EVALUATED.into_iter().find(|k| k.code() == code)
    }

    /// 비교 대상 물성. 단위 환산 계열을 결정한다.
    pub fn property(self) -> PropertyKind {
        match self {
            LimitKey::WobbeLower => PropertyKind::WobbeLower,
            LimitKey::LhvVolume => PropertyKind::LhvVolume,
            LimitKey::SpecificGravity => PropertyKind::SpecificGravity,
            LimitKey::MethaneNumber => PropertyKind::MethaneNumber,
            LimitKey::H2Content => PropertyKind::H2Content,
            LimitKey::Inerts => PropertyKind::Inerts,
            LimitKey::H2sContent => PropertyKind::H2s,
        }
    }

    /// 기록에서 SI 기준 비교값을 꺼낸다.
    pub fn value_of(self, record: &PropertyRecord) -> f64 {
        match self {
            LimitKey::WobbeLower => record.wobbe_lower,
            LimitKey::LhvVolume => record.lhv_volume,
            LimitKey::SpecificGravity => record.specific_gravity,
            LimitKey::MethaneNumber => record.methane_number,
            LimitKey::H2Content => record.h2_mol_percent,
            LimitKey::Inerts => record.inerts_mol_percent,
            LimitKey::H2sContent => record.h2s_ppmv,
        }
    }
}

impl std::fmt::Display for LimitKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// SI 기준 허용 범위. 양 끝 포함.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcceptanceLimit {
    pub min: f64,
    pub max: f64,
    pub label: String,
}

impl AcceptanceLimit {
    pub fn new(min: f64, max: f64, label: impl Into<String>) -> Self {
        Self {
            min,
            max,
            label: label.into(),
        }
    }

    /// min > max 인 설정 오류. 이 경우 어떤 값도 통과하지 못한다.
    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// 기본 허용 범위.
pub fn default_limit(key: LimitKey) -> AcceptanceLimit {
    match key {
        LimitKey::WobbeLower => AcceptanceLimit::new(47.0, 51.0, "Wobbe Index (L)"),
        LimitKey::LhvVolume => AcceptanceLimit::new(32.0, 40.0, "LHV (volume)"),
        LimitKey::SpecificGravity => AcceptanceLimit::new(0.55, 0.75, "Specific Gravity"),
        LimitKey::MethaneNumber => AcceptanceLimit::new(80.0, 999.0, "Methane Number"),
        LimitKey::H2Content => AcceptanceLimit::new(0.0, 5.0, "H2 Content"),
        LimitKey::Inerts => AcceptanceLimit::new(0.0, 10.0, "Inerts"),
        LimitKey::H2sContent => AcceptanceLimit::new(0.0, 5.0, "H2S Content"),
    }
}

/// 설정 파일의 `[[limits]]` 항목 한 줄.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitEntry {
    pub key: LimitKey,
    pub min: f64,
    pub max: f64,
    pub label: String,
}

/// 키별 허용 범위 모음. 항목끼리는 서로 영향을 주지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<LimitEntry>", into = "Vec<LimitEntry>")]
pub struct LimitSet {
    limits: BTreeMap<LimitKey, AcceptanceLimit>,
}

impl LimitSet {
    /// 항목이 하나도 없는 집합. 모든 키가 N/A 로 평가된다.
    pub fn empty() -> Self {
        Self {
            limits: BTreeMap::new(),
        }
    }

    pub fn defaults() -> Self {
        Self {
            limits: LimitKey::EVALUATED
                .into_iter()
                .map(|k| (k, default_limit(k)))
                .collect(),
        }
    }

    pub fn get(&self, key: LimitKey) -> Option<&AcceptanceLimit> {
        self.limits.get(&key)
    }

    pub fn set(&mut self, key: LimitKey, limit: AcceptanceLimit) {
        self.limits.insert(key, limit);
    }

    /// 기존 라벨을 유지한 채 범위만 바꾼다.
    pub fn set_range(&mut self, key: LimitKey, min: f64, max: f64) {
        let label = self
            .limits
            .get(&key)
            .map(|l| l.label.clone())
            .unwrap_or_else(|| default_limit(key).label);
        self.limits.insert(key, AcceptanceLimit::new(min, max, label));
    }

    pub fn remove(&mut self, key: LimitKey) -> Option<AcceptanceLimit> {
        self.limits.remove(&key)
    }

    pub fn reset_to_defaults(&mut self) {
        *self = Self::defaults();
    }

    pub fn reset_key(&mut self, key: LimitKey) {
        self.limits.insert(key, default_limit(key));
    }

    pub fn iter(&self) -> impl Iterator<Item = (LimitKey, &AcceptanceLimit)> + '_ {
        self.limits.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}

impl Default for LimitSet {
    fn default() -> Self {
        Self::defaults()
    }
}

impl From<Vec<LimitEntry>> for LimitSet {
    fn from(entries: Vec<LimitEntry>) -> Self {
        Self {
            limits: entries
                .into_iter()
                .map(|e| (e.key, AcceptanceLimit::new(e.min, e.max, e.label)))
                .collect(),
        }
    }
}

impl From<LimitSet> for Vec<LimitEntry> {
    fn from(set: LimitSet) -> Self {
        set.limits
            .into_iter()
            .map(|(key, l)| LimitEntry {
                key,
                min: l.min,
                max: l.max,
                label: l.label,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_key() {
        let set = LimitSet::defaults();
        assert_eq!(set.len(), LimitKey::EVALUATED.len());
        let wobbe = set.get(LimitKey::WobbeLower).unwrap();
        assert_eq!((wobbe.min, wobbe.max), (47.0, 51.0));
        assert_eq!(set.get(LimitKey::H2sContent).unwrap().label, "H2S Content");
    }

    #[test]
    fn override_and_reset() {
        let mut set = LimitSet::defaults();
        set.set_range(LimitKey::SpecificGravity, 0.5, 0.8);
        let sg = set.get(LimitKey::SpecificGravity).unwrap();
        assert_eq!((sg.min, sg.max), (0.5, 0.8));
        assert_eq!(sg.label, "Specific Gravity");
        // 다른 키는 그대로
        assert_eq!(set.get(LimitKey::MethaneNumber), Some(&default_limit(LimitKey::MethaneNumber)));

        set.reset_key(LimitKey::SpecificGravity);
        assert_eq!(set, LimitSet::defaults());

        set.remove(LimitKey::H2Content);
        set.set_range(LimitKey::Inerts, 1.0, 2.0);
        set.reset_to_defaults();
        assert_eq!(set, LimitSet::defaults());
    }

    #[test]
    fn key_codes_round_trip() {
        for key in LimitKey::EVALUATED {
            assert_eq!(LimitKey::from_code(key.code()), Some(key));
        }
        assert_eq!(LimitKey::from_code(" SG "), Some(LimitKey::SpecificGravity));
        assert_eq!(LimitKey::from_code("lel"), None);
    }

    #[test]
    fn inverted_limit_contains_nothing() {
        let lim = AcceptanceLimit::new(10.0, 5.0, "bad");
        assert!(lim.is_inverted());
        for v in [-1.0, 5.0, 7.5, 10.0, 100.0] {
            assert!(!lim.contains(v));
        }
    }
}
