//! 계산 결과를 표/보고서 형태로 정리한다.
//!
//! 이미 계산된 기록과 판정 결과를 재배열하고 단위 라벨만 붙인다. 물성을 다시 계산하지 않는다.

use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::conversion::{display_limit, property_value, to_display, unit_label};
use crate::gas::{PropertyRecord, SuitabilityReport, Verdict};
use crate::quantity::PropertyKind;
use crate::units::UnitSystem;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON 직렬화 오류: {0}")]
    Json(#[from] serde_json::Error),
    #[error("지원하지 않는 보고서 형식: {0}")]
    UnsupportedFormat(String),
}

/// 보고서 머리말 정보.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportMeta {
    pub project: String,
    pub source: String,
    pub analyst: String,
    /// YYYY-MM-DD
    pub date: String,
}

impl ReportMeta {
    /// 오늘 날짜를 채운 머리말.
    pub fn today(project: &str, source: &str, analyst: &str) -> Self {
        Self {
            project: project.to_string(),
            source: source.to_string(),
            analyst: analyst.to_string(),
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositionRow {
    pub component: &'static str,
    pub formula: &'static str,
    pub mol_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyRow {
    pub property: &'static str,
    pub value: f64,
    pub unit: &'static str,
    #[serde(skip)]
    pub decimals: usize,
}

impl PropertyRow {
    pub fn formatted(&self) -> String {
        format!("{:.*}", self.decimals, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentRow {
    pub property: String,
    /// 표시 단위 값
    pub value: f64,
    /// 표시 단위 범위, 범위가 없으면 None
    pub range: Option<(f64, f64)>,
    pub unit: &'static str,
    pub status: Verdict,
}

impl AssessmentRow {
    pub fn range_text(&self) -> String {
        match self.range {
            Some((lo, hi)) => format!("{} to {}", trim_number(lo), trim_number(hi)),
            None => "-".to_string(),
        }
    }
}

/// 표시 단위계가 정해진 완성 보고서.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub meta: ReportMeta,
    pub unit_system: UnitSystem,
    pub suitable: bool,
    pub composition: Vec<CompositionRow>,
    pub properties: Vec<PropertyRow>,
    pub assessment: Vec<AssessmentRow>,
}

/// 조성 표. 몰분율 내림차순.
pub fn composition_rows(record: &PropertyRecord) -> Vec<CompositionRow> {
    record
        .composition
        .sorted_by_fraction()
        .into_iter()
        .map(|(c, _)| CompositionRow {
            component: c.name(),
            formula: c.formula(),
            mol_percent: record.composition.mol_percent(c),
        })
        .collect()
}

/// 물성 표.
pub fn property_rows(record: &PropertyRecord, system: UnitSystem) -> Vec<PropertyRow> {
    PropertyKind::TABLE
        .into_iter()
        .map(|kind| PropertyRow {
            property: kind.label(),
            value: property_value(record, kind, system),
            unit: unit_label(kind, system),
            decimals: kind.decimals(),
        })
        .collect()
}

/// 판정 표. 판정은 SI 결과를 그대로 쓰고 값/범위만 표시 단위로 바꾼다.
pub fn assessment_rows(report: &SuitabilityReport, system: UnitSystem) -> Vec<AssessmentRow> {
    report
        .checks
        .iter()
        .map(|check| {
            let kind = check.key.property();
            AssessmentRow {
                property: check
                    .limit
                    .as_ref()
                    .map(|l| l.label.clone())
                    .unwrap_or_else(|| kind.label().to_string()),
                value: to_display(check.value, kind.dimension(), system),
                range: check
                    .limit
                    .as_ref()
                    .map(|l| display_limit(check.key, l, system)),
                unit: unit_label(kind, system),
                status: check.verdict,
            }
        })
        .collect()
}

impl Report {
    pub fn build(
        record: &PropertyRecord,
        suitability: &SuitabilityReport,
        system: UnitSystem,
        meta: ReportMeta,
    ) -> Self {
        Self {
            meta,
            unit_system: system,
            suitable: suitability.is_suitable(),
            composition: composition_rows(record),
            properties: property_rows(record, system),
            assessment: assessment_rows(suitability, system),
        }
    }

    /// 머리말만 바꾼 보고서. 표 내용은 그대로 둔다.
    pub fn with_meta(self, meta: ReportMeta) -> Self {
        Self { meta, ..self }
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 섹션별 CSV. 스프레드시트에서 바로 열 수 있는 형태.
    pub fn to_csv(&self) -> String {
        let mut csv = String::from("Gas Analysis Report\n");
        csv.push_str(&format!("Project,{}\n", csv_field(&self.meta.project)));
        csv.push_str(&format!("Source,{}\n", csv_field(&self.meta.source)));
        csv.push_str(&format!("Analyst,{}\n", csv_field(&self.meta.analyst)));
        csv.push_str(&format!("Date,{}\n", csv_field(&self.meta.date)));
        csv.push_str(&format!("Units,{:?}\n\n", self.unit_system));

        csv.push_str("Component,Formula,Mol%\n");
        for row in &self.composition {
            csv.push_str(&format!("{},{},{:.2}\n", row.component, row.formula, row.mol_percent));
        }

        csv.push_str("\nProperty,Value,Unit\n");
        for row in &self.properties {
            csv.push_str(&format!("{},{},{}\n", row.property, row.formatted(), row.unit));
        }

        csv.push_str("\nProperty,Value,Range,Unit,Status\n");
        for row in &self.assessment {
            csv.push_str(&format!(
                "{},{:.2},{},{},{}\n",
                csv_field(&row.property),
                row.value,
                row.range_text(),
                row.unit,
                row.status.as_str()
            ));
        }
        csv.push_str(&format!(
            "\nOverall,{}\n",
            if self.suitable { "SUITABLE" } else { "NOT SUITABLE" }
        ));
        csv
    }

    /// 확장자(.csv/.json)에 따라 보고서를 저장한다.
    pub fn write_to(&self, path: &Path) -> Result<(), ReportError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        let content = match ext.as_str() {
            "csv" => self.to_csv(),
            "json" => self.to_json()?,
            other => return Err(ReportError::UnsupportedFormat(other.to_string())),
        };
        fs::write(path, content)?;
        Ok(())
    }
}

fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

fn trim_number(v: f64) -> String {
    let s = format!("{v:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
