//! 허용 범위 대비 가스터빈 연료 적합성 판정.
//!
//! 비교는 항상 SI 기준 값과 SI 기준 범위로 한다. 표시 단위는 판정에 관여하지 않는다.

use serde::Serialize;
use tracing::warn;

use super::limits::{AcceptanceLimit, LimitKey, LimitSet};
use super::properties::PropertyRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Pass,
    Fail,
    /// 해당 키에 범위가 설정되지 않음
    NotApplicable,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Pass => "OK",
            Verdict::Fail => "FAIL",
            Verdict::NotApplicable => "-",
        }
    }
}

/// 키 하나에 대한 판정 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LimitCheck {
    pub key: LimitKey,
    /// SI 기준 물성값
    pub value: f64,
    /// 판정에 사용된 SI 기준 범위
    pub limit: Option<AcceptanceLimit>,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuitabilityReport {
    pub checks: Vec<LimitCheck>,
    pub overall: Verdict,
}

impl SuitabilityReport {
    /// 하나라도 FAIL 이 없으면 적합.
    pub fn is_suitable(&self) -> bool {
        self.overall == Verdict::Pass
    }

    pub fn check(&self, key: LimitKey) -> Option<&LimitCheck> {
        self.checks.iter().find(|c| c.key == key)
    }

    pub fn failures(&self) -> impl Iterator<Item = &LimitCheck> + '_ {
        self.checks.iter().filter(|c| c.verdict == Verdict::Fail)
    }
}

/// 단일 값을 범위와 비교한다. 범위가 없으면 N/A, 뒤집힌 범위나 NaN 은 FAIL.
pub fn check_value(value: f64, limit: Option<&AcceptanceLimit>) -> Verdict {
    match limit {
        None => Verdict::NotApplicable,
        Some(lim) if lim.contains(value) => Verdict::Pass,
        Some(_) => Verdict::Fail,
    }
}

/// 물성 기록을 허용 범위 집합으로 평가한다.
pub fn evaluate(record: &PropertyRecord, limits: &LimitSet) -> SuitabilityReport {
    let checks: Vec<LimitCheck> = LimitKey::EVALUATED
        .into_iter()
        .map(|key| {
            let value = key.value_of(record);
            let limit = limits.get(key);
            if let Some(lim) = limit.filter(|l| l.is_inverted()) {
                warn!(key = key.code(), min = lim.min, max = lim.max, "inverted acceptance limit");
            }
            LimitCheck {
                key,
                value,
                verdict: check_value(value, limit),
                limit: limit.cloned(),
            }
        })
        .collect();

    let overall = if checks.iter().any(|c| c.verdict == Verdict::Fail) {
        Verdict::Fail
    } else {
        Verdict::Pass
    };
    SuitabilityReport { checks, overall }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gas::{calculate, Component, Composition};

    fn methane() -> PropertyRecord {
        calculate(&Composition::from_amounts([(Component::Methane, 100.0)])).unwrap()
    }

    #[test]
    fn pure_methane_is_suitable() {
        // SG 0.5538, Wobbe 48.1, MN 137.8 모두 기본 범위 안
        let report = evaluate(&methane(), &LimitSet::defaults());
        assert!(report.is_suitable(), "{:?}", report.failures().collect::<Vec<_>>());
        assert_eq!(report.checks.len(), LimitKey::EVALUATED.len());
    }

    #[test]
    fn missing_limit_is_not_applicable() {
        let mut limits = LimitSet::defaults();
        limits.remove(LimitKey::WobbeLower);
        let report = evaluate(&methane(), &limits);
        let wobbe = report.check(LimitKey::WobbeLower).unwrap();
        assert_eq!(wobbe.verdict, Verdict::NotApplicable);
        assert!(wobbe.limit.is_none());
    }

    #[test]
    fn empty_limit_set_is_vacuously_suitable() {
        let report = evaluate(&methane(), &LimitSet::empty());
        assert!(report.is_suitable());
        assert!(report
            .checks
            .iter()
            .all(|c| c.verdict == Verdict::NotApplicable));
    }

    #[test]
    fn boundaries_are_inclusive() {
        let lim = AcceptanceLimit::new(1.0, 2.0, "x");
        assert_eq!(check_value(1.0, Some(&lim)), Verdict::Pass);
        assert_eq!(check_value(2.0, Some(&lim)), Verdict::Pass);
        assert_eq!(check_value(2.0000001, Some(&lim)), Verdict::Fail);
        assert_eq!(check_value(f64::NAN, Some(&lim)), Verdict::Fail);
        assert_eq!(check_value(1.5, None), Verdict::NotApplicable);
    }
}
