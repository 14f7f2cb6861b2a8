use std::collections::BTreeMap;

use serde::Serialize;

use super::components::Component;
use super::error::{GasError, GasResult};

/// 사용자가 입력한 원시 조성(mol%). 합이 100일 필요는 없다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composition {
    amounts: BTreeMap<Component, f64>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(성분, mol%)` 목록으로 조성을 만든다. 같은 성분이 반복되면 마지막 값이 남는다.
    pub fn from_amounts<I>(amounts: I) -> Self
    where
        I: IntoIterator<Item = (Component, f64)>,
    {
        Self {
            amounts: amounts.into_iter().collect(),
        }
    }

    /// 이름으로 지정된 조성을 검증하여 만든다.
    ///
    /// 기준표에 없는 이름이나 유한하지 않은 값이 있으면 정규화 전에 거부한다.
    pub fn from_named<I, S>(amounts: I) -> GasResult<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut out = BTreeMap::new();
        for (name, value) in amounts {
            let name = name.as_ref();
            let component = Component::from_name(name)
                .ok_or_else(|| GasError::UnknownSpecies(name.to_string()))?;
            if !value.is_finite() {
                return Err(GasError::InvalidAmount {
                    species: name.to_string(),
                    value,
                });
            }
            out.insert(component, value);
        }
        Ok(Self { amounts: out })
    }

    pub fn set(&mut self, component: Component, amount: f64) {
        self.amounts.insert(component, amount);
    }

    pub fn amount(&self, component: Component) -> f64 {
        self.amounts.get(&component).copied().unwrap_or(0.0)
    }

    pub fn clear(&mut self) {
        self.amounts.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Component, f64)> + '_ {
        self.amounts.iter().map(|(c, v)| (*c, *v))
    }

    pub fn is_empty(&self) -> bool {
        !self.amounts.values().any(|v| is_usable(*v))
    }

    /// 유효 입력량의 합계 [mol%].
    pub fn total(&self) -> f64 {
        self.amounts.values().filter(|v| is_usable(**v)).sum()
    }

    /// 입력 합계가 100 mol% ± 0.1 이내인지. 계산 전제조건이 아니라 안내용이다.
    pub fn totals_hundred(&self) -> bool {
        (self.total() - 100.0).abs() < 0.1
    }

    /// 0 이하이거나 유한하지 않은 항목을 버리고 몰분율 합이 1이 되도록 정규화한다.
    /// 유효 성분이 없으면 `None`.
    ///
    /// 합산 전에 최대값으로 나눠 두므로 `f64::MAX` 근처 입력도 합이 넘치지 않는다.
    pub fn normalize(&self) -> Option<NormalizedComposition> {
        let positive: Vec<(Component, f64)> = self
            .amounts
            .iter()
            .filter(|(_, v)| is_usable(**v))
            .map(|(c, v)| (*c, *v))
            .collect();
        let largest = positive.iter().map(|(_, v)| *v).fold(0.0, f64::max);
        if largest <= 0.0 {
            return None;
        }
        let scaled: Vec<(Component, f64)> =
            positive.into_iter().map(|(c, v)| (c, v / largest)).collect();
        let sum: f64 = scaled.iter().map(|(_, v)| v).sum();
        let fractions = scaled.into_iter().map(|(c, v)| (c, v / sum)).collect();
        Some(NormalizedComposition { fractions })
    }
}

fn is_usable(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

/// 정규화된 몰분율 조성. 항목은 성분 선언 순서로 정렬되어 있고 합은 1이다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedComposition {
    fractions: Vec<(Component, f64)>,
}

impl NormalizedComposition {
    /// 성분의 몰분율. 없는 성분은 0.
    pub fn fraction(&self, component: Component) -> f64 {
        self.fractions
            .iter()
            .find(|(c, _)| *c == component)
            .map(|(_, f)| *f)
            .unwrap_or(0.0)
    }

    pub fn mol_percent(&self, component: Component) -> f64 {
        self.fraction(component) * 100.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Component, f64)> + '_ {
        self.fractions.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }

    /// 몰분율 내림차순 목록(표 출력용).
    pub fn sorted_by_fraction(&self) -> Vec<(Component, f64)> {
        let mut out = self.fractions.clone();
        out.sort_by(|a, b| b.1.total_cmp(&a.1));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_drops_non_positive_entries() {
        let comp = Composition::from_amounts([
            (Component::Methane, 90.0),
            (Component::Ethane, 0.0),
            (Component::Propane, -5.0),
            (Component::Nitrogen, 10.0),
        ]);
        let norm = comp.normalize().expect("normalized");
        assert_eq!(norm.len(), 2);
        assert!((norm.fraction(Component::Methane) - 0.9).abs() < 1e-12);
        assert_eq!(norm.fraction(Component::Propane), 0.0);
        let sum: f64 = norm.iter().map(|(_, f)| f).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_empty_is_none() {
        assert!(Composition::new().normalize().is_none());
        let zeros = Composition::from_amounts([(Component::Methane, 0.0)]);
        assert!(zeros.normalize().is_none());
        assert!(zeros.is_empty());
    }

    #[test]
    fn huge_amounts_do_not_overflow_the_sum() {
        let comp = Composition::from_amounts([
            (Component::Methane, 1e308),
            (Component::Ethane, 1e308),
        ]);
        let norm = comp.normalize().expect("normalized");
        assert_eq!(norm.fraction(Component::Methane), 0.5);
        assert_eq!(norm.fraction(Component::Ethane), 0.5);
    }

    #[test]
    fn non_finite_amounts_are_dropped() {
        let only_inf = Composition::from_amounts([(Component::Methane, f64::INFINITY)]);
        assert!(only_inf.normalize().is_none());
        assert!(only_inf.is_empty());

        let comp = Composition::from_amounts([
            (Component::Methane, 100.0),
            (Component::Ethane, f64::NAN),
            (Component::Propane, f64::INFINITY),
        ]);
        let norm = comp.normalize().expect("normalized");
        assert_eq!(norm.len(), 1);
        assert_eq!(norm.mol_percent(Component::Methane), 100.0);
        assert_eq!(comp.total(), 100.0);
    }

    #[test]
    fn from_named_rejects_unknown_and_non_finite() {
        let err = Composition::from_named([("Unobtainium", 50.0)]).unwrap_err();
        assert_eq!(err, GasError::UnknownSpecies("Unobtainium".into()));

        let err = Composition::from_named([("Methane", f64::INFINITY)]).unwrap_err();
        assert!(matches!(err, GasError::InvalidAmount { .. }));
    }

    #[test]
    fn total_reports_hundred_within_tolerance() {
        let comp = Composition::from_amounts([(Component::Methane, 95.0), (Component::Ethane, 4.95)]);
        assert!(comp.totals_hundred());
        let comp = Composition::from_amounts([(Component::Methane, 95.0)]);
        assert!(!comp.totals_hundred());
    }

    #[test]
    fn sorted_by_fraction_descends() {
        let comp = Composition::from_amounts([
            (Component::Methane, 10.0),
            (Component::Nitrogen, 70.0),
            (Component::Ethane, 20.0),
        ]);
        let sorted = comp.normalize().unwrap().sorted_by_fraction();
        let order: Vec<Component> = sorted.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            order,
            vec![Component::Nitrogen, Component::Ethane, Component::Methane]
        );
    }
}
