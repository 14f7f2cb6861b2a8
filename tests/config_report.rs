//! 설정 파일 저장/복원과 보고서 파일 출력 테스트.
use std::fs;
use std::path::PathBuf;

use gas_turbine_fuel_analyzer::config::{load_or_default_from, Config, ConfigFile};
use gas_turbine_fuel_analyzer::gas::{calculate, evaluate, presets, LimitKey, LimitSet};
use gas_turbine_fuel_analyzer::report::{Report, ReportError, ReportMeta};
use gas_turbine_fuel_analyzer::units::UnitSystem;

fn temp_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gtfa-{}-{name}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn missing_config_is_created_with_defaults() {
    let path = temp_path("create").join("config.toml");
    let _ = fs::remove_file(&path);
    let cfg = load_or_default_from(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("[[limits]]"));
}

#[test]
fn edited_limits_survive_reload_and_reset() {
    let path = temp_path("edit").join("config.toml");
    let _ = fs::remove_file(&path);

    let mut file = ConfigFile::open(&path).unwrap();
    file.config.unit_system = UnitSystem::US;
    file.config.limits.set_range(LimitKey::H2Content, 0.0, 15.0);
    file.config.limits.remove(LimitKey::MethaneNumber);
    file.save().unwrap();

    let mut reloaded = ConfigFile::open(&path).unwrap();
    assert_eq!(reloaded.config.unit_system, UnitSystem::US);
    let h2 = reloaded.config.limits.get(LimitKey::H2Content).unwrap();
    assert_eq!((h2.min, h2.max), (0.0, 15.0));
    assert_eq!(h2.label, "H2 Content");
    assert!(reloaded.config.limits.get(LimitKey::MethaneNumber).is_none());

    reloaded.config.limits.reset_to_defaults();
    reloaded.save().unwrap();
    let again = ConfigFile::open(&path).unwrap();
    assert_eq!(again.config.limits, LimitSet::defaults());
}

fn lean_report() -> Report {
    let record = calculate(&presets::find_preset("lean").unwrap().composition()).unwrap();
    let suitability = evaluate(&record, &LimitSet::defaults());
    let meta = ReportMeta::today("Unit 3 retrofit", "Lab, sample 7", "J. Doe");
    Report::build(&record, &suitability, UnitSystem::SI, meta)
}

#[test]
fn csv_report_written_by_extension() {
    let path = temp_path("csv").join("report.csv");
    lean_report().write_to(&path).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Gas Analysis Report"));
    assert!(text.contains("Source,\"Lab, sample 7\""));
    assert!(text.contains("Overall,NOT SUITABLE"));
    assert!(text.contains(",FAIL"));
}

#[test]
fn json_report_written_by_extension() {
    let path = temp_path("json").join("report.json");
    lean_report().write_to(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["meta"]["analyst"], "J. Doe");
    assert_eq!(value["suitable"], false);
    assert_eq!(value["composition"][0]["formula"], "CH4");
    assert_eq!(value["meta"]["date"].as_str().unwrap().len(), 10);
}

#[test]
fn unknown_report_extension_is_rejected() {
    let path = temp_path("txt").join("report.txt");
    let err = lean_report().write_to(&path).unwrap_err();
    assert!(matches!(err, ReportError::UnsupportedFormat(ref e) if e == "txt"));
}
