use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;

use crate::app::{AppError, Session};
use crate::config::Config;
use crate::conversion::{self, display_limit, unit_label};
use crate::gas::{self, presets, Component, LimitKey, LimitSet};
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;
use crate::report::{Report, ReportMeta};
use crate::units::UnitSystem;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Composition,
    Preset,
    Results,
    Summary,
    Limits,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_COMPOSITION,
        keys::MAIN_MENU_PRESET,
        keys::MAIN_MENU_RESULTS,
        keys::MAIN_MENU_SUMMARY,
        keys::MAIN_MENU_LIMITS,
        keys::MAIN_MENU_UNIT_CONVERSION,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Composition),
            "2" => return Ok(MenuChoice::Preset),
            "3" => return Ok(MenuChoice::Results),
            "4" => return Ok(MenuChoice::Summary),
            "5" => return Ok(MenuChoice::Limits),
            "6" => return Ok(MenuChoice::UnitConversion),
            "7" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 성분별 mol% 를 입력받고 계산한다.
pub fn handle_composition(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::COMPOSITION_HEADING));
    println!("{}", tr.t(keys::COMPOSITION_HINT));
    for component in Component::ALL {
        let current = session.composition.amount(component);
        let prompt = format!("{} ({}) [{current}]: ", component.name(), component.formula());
        if let Some(v) = read_optional_amount(tr, &prompt)? {
            session.composition.set(component, v);
        }
    }

    let total = session.composition.total();
    if session.composition.totals_hundred() {
        println!("{} {total:.2}%", tr.t(keys::COMPOSITION_TOTAL_OK));
    } else {
        println!("{} {total:.2}%", tr.t(keys::COMPOSITION_TOTAL_WARN));
    }
    match session.recalculate() {
        Some(_) => println!("{}", tr.t(keys::COMPOSITION_CALCULATED)),
        None => println!("{}", tr.t(keys::COMPOSITION_INVALID)),
    }
    Ok(())
}

/// 프리셋을 골라 불러오고 바로 계산한다.
pub fn handle_preset(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PRESET_HEADING));
    let list = presets::presets();
    for (i, p) in list.iter().enumerate() {
        println!("{}) {}", i + 1, p.name);
    }
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let preset = sel
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| list.get(i));
    match preset {
        Some(p) => {
            session.load(p.composition());
            println!("{} {}", tr.t(keys::PRESET_LOADED), p.name);
        }
        None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

/// 계산 결과 표를 보여주고 필요하면 보고서 파일로 저장한다.
pub fn handle_results(tr: &Translator, session: &Session, cfg: &Config) -> Result<(), AppError> {
    let Some(record) = session.record.as_ref() else {
        println!("{}", tr.t(keys::RESULTS_NEED_CALC));
        return Ok(());
    };
    let suitability = gas::evaluate(record, &cfg.limits);
    let report = Report::build(record, &suitability, cfg.unit_system, ReportMeta::default());
    print!("{}", render_report(tr, &report));

    let path = read_line(tr.t(keys::RESULTS_EXPORT_PROMPT))?;
    let path = path.trim();
    if !path.is_empty() {
        let project = read_line(tr.t(keys::RESULTS_PROMPT_PROJECT))?;
        let source = read_line(tr.t(keys::RESULTS_PROMPT_SOURCE))?;
        let analyst = read_line(tr.t(keys::RESULTS_PROMPT_ANALYST))?;
        let report =
            report.with_meta(ReportMeta::today(project.trim(), source.trim(), analyst.trim()));
        report.write_to(Path::new(path))?;
        println!("{} {path}", tr.t(keys::RESULTS_EXPORTED));
    }
    Ok(())
}

/// 적합성 판정 요약을 보여준다.
pub fn handle_summary(tr: &Translator, session: &Session, cfg: &Config) {
    let Some(record) = session.record.as_ref() else {
        println!("{}", tr.t(keys::RESULTS_NEED_CALC));
        return;
    };
    let suitability = gas::evaluate(record, &cfg.limits);
    let report = Report::build(record, &suitability, cfg.unit_system, ReportMeta::default());
    print!("{}", render_assessment(tr, &report));
}

/// 허용 범위를 보여주고 수정한다. 입력값은 SI 기준이다.
pub fn handle_limits(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::LIMITS_HEADING));
    print!("{}", render_limits(tr, &cfg.limits, cfg.unit_system));
    println!("{}", tr.t(keys::LIMITS_SI_NOTE));
    println!("{}", tr.t(keys::LIMITS_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            let Some(key) = read_limit_key(tr)? else {
                return Ok(());
            };
            let min = read_f64(tr, tr.t(keys::LIMITS_PROMPT_MIN))?;
            let max = read_f64(tr, tr.t(keys::LIMITS_PROMPT_MAX))?;
            cfg.limits.set_range(key, min, max);
        }
        "2" => {
            if let Some(key) = read_limit_key(tr)? {
                cfg.limits.reset_key(key);
                println!("{}", tr.t(keys::LIMITS_RESET_DONE));
            }
        }
        "3" => {
            cfg.limits.reset_to_defaults();
            println!("{}", tr.t(keys::LIMITS_RESET_DONE));
        }
        "4" => {
            if let Some(key) = read_limit_key(tr)? {
                cfg.limits.remove(key);
            }
        }
        "" => {}
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
        if let Some(kind) = sel.trim().parse::<u32>().ok().and_then(map_quantity) {
            break kind;
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!("{} {result} {}", tr.t(keys::UNIT_CONVERSION_RESULT), to_unit.trim());
    Ok(())
}

fn map_quantity(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::Temperature),
        2 => Some(QuantityKind::Density),
        3 => Some(QuantityKind::SpecificEnergy),
        4 => Some(QuantityKind::VolumetricEnergy),
        _ => None,
    }
}

/// 설정 메뉴에서 고를 수 있는 변경.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingChange {
    UnitSystem(UnitSystem),
    /// 설정 파일에 저장할 언어 코드(ko, en, auto)
    Language(&'static str),
}

fn map_setting(sel: &str) -> Option<SettingChange> {
    match sel.trim() {
        "1" => Some(SettingChange::UnitSystem(UnitSystem::SI)),
        "2" => Some(SettingChange::UnitSystem(UnitSystem::US)),
        "3" => Some(SettingChange::Language("ko")),
        "4" => Some(SettingChange::Language("en")),
        "5" => Some(SettingChange::Language("auto")),
        _ => None,
    }
}

/// 선택한 변경을 설정에 반영한다.
pub fn apply_setting(cfg: &mut Config, change: SettingChange) {
    match change {
        SettingChange::UnitSystem(system) => cfg.unit_system = system,
        SettingChange::Language(code) => cfg.language = code.to_string(),
    }
}

/// 설정 메뉴를 처리한다. 언어 변경은 다음 실행부터 적용된다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {:?}", tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM), cfg.unit_system);
    println!(
        "{} {} / {}",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        cfg.language,
        tr.language().as_code()
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    let Some(change) = map_setting(&sel) else {
        println!("{}", tr.t(keys::SETTINGS_INVALID));
        return Ok(());
    };
    apply_setting(cfg, change);
    match change {
        SettingChange::UnitSystem(system) => println!("{} {system:?}", tr.t(keys::SETTINGS_SAVED)),
        SettingChange::Language(code) => {
            println!("{} {code}", tr.t(keys::SETTINGS_LANGUAGE_SAVED))
        }
    }
    Ok(())
}

/// 조성/물성/판정 표 전체.
pub fn render_report(tr: &Translator, report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::RESULTS_COMPOSITION_HEADING));
    let _ = writeln!(
        out,
        "{:<18} {:<8} {:>8}",
        tr.t(keys::COL_COMPONENT),
        tr.t(keys::COL_FORMULA),
        tr.t(keys::COL_MOL_PERCENT)
    );
    for row in &report.composition {
        let _ = writeln!(out, "{:<18} {:<8} {:>8.2}", row.component, row.formula, row.mol_percent);
    }

    let _ = writeln!(out, "{}", tr.t(keys::RESULTS_PROPERTIES_HEADING));
    let _ = writeln!(
        out,
        "{:<20} {:>12} {:<8}",
        tr.t(keys::COL_PROPERTY),
        tr.t(keys::COL_VALUE),
        tr.t(keys::COL_UNIT)
    );
    for row in &report.properties {
        let _ = writeln!(out, "{:<20} {:>12} {:<8}", row.property, row.formatted(), row.unit);
    }
    out.push_str(&render_assessment(tr, report));
    out
}

/// 종합 판정과 항목별 상세 평가.
pub fn render_assessment(tr: &Translator, report: &Report) -> String {
    let mut out = String::new();
    let verdict = if report.suitable {
        keys::SUMMARY_SUITABLE
    } else {
        keys::SUMMARY_NOT_SUITABLE
    };
    let _ = writeln!(out, "\n>> {} <<", tr.t(verdict));
    let _ = writeln!(out, "{}", tr.t(keys::SUMMARY_DETAIL_HEADING));
    let _ = writeln!(
        out,
        "{:<20} {:>10} {:>20} {:<8} {:<6}",
        tr.t(keys::COL_PROPERTY),
        tr.t(keys::COL_VALUE),
        tr.t(keys::COL_RANGE),
        tr.t(keys::COL_UNIT),
        tr.t(keys::COL_STATUS)
    );
    for row in &report.assessment {
        let _ = writeln!(
            out,
            "{:<20} {:>10.2} {:>20} {:<8} {:<6}",
            row.property,
            row.value,
            row.range_text(),
            row.unit,
            row.status.as_str()
        );
    }
    out
}

/// 허용 범위 표. SI 값과 선택 단위계 표시값을 함께 보여준다.
pub fn render_limits(tr: &Translator, limits: &LimitSet, system: UnitSystem) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:<20} {:>20} {:<8}",
        "key",
        tr.t(keys::COL_PROPERTY),
        tr.t(keys::COL_RANGE),
        tr.t(keys::COL_UNIT)
    );
    for (key, limit) in limits.iter() {
        let (lo, hi) = display_limit(key, limit, system);
        let _ = writeln!(
            out,
            "{:<12} {:<20} {:>20} {:<8}",
            key.code(),
            limit.label,
            format!("{lo:.2} to {hi:.2}"),
            unit_label(key.property(), system)
        );
    }
    out
}

fn read_limit_key(tr: &Translator) -> Result<Option<LimitKey>, AppError> {
    let s = read_line(tr.t(keys::LIMITS_PROMPT_KEY))?;
    let key = LimitKey::from_code(&s);
    if key.is_none() {
        println!("{}", tr.t(keys::LIMITS_UNKNOWN_KEY));
    }
    Ok(key)
}

/// 빈 입력은 `None`(현재 값 유지). 음수나 숫자가 아닌 값은 다시 묻는다.
fn read_optional_amount(tr: &Translator, prompt: &str) -> Result<Option<f64>, AppError> {
    loop {
        let s = read_line(prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        match s.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => return Ok(Some(v)),
            _ => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
