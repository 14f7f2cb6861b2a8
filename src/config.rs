use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::gas::LimitSet;
use crate::units::UnitSystem;

/// 기본 설정 파일 경로(작업 디렉터리 기준).
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
///
/// 계산/판정 함수는 이 구조체를 직접 참조하지 않고, 필요한 값(단위계, 허용 범위)을
/// 인자로 넘겨받는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub unit_system: UnitSystem,
    /// UI 언어 코드(ko, en, auto)
    pub language: String,
    pub limits: LimitSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::SI,
            language: "auto".to_string(),
            limits: LimitSet::defaults(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본 설정을 저장하고 반환한다.
pub fn load_or_default_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        info!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        info!(path = %path.display(), "default config created");
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

/// 파일 위치를 기억하는 설정 핸들. CLI 세션 동안 수정 후 저장한다.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub config: Config,
}

impl ConfigFile {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let config = load_or_default_from(&path)?;
        Ok(Self { path, config })
    }

    /// 설정을 파일에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(&self.config, &self.path)?;
        info!(path = %self.path.display(), "config saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gas::LimitKey;

    #[test]
    fn config_toml_round_trip() {
        let mut cfg = Config::default();
        cfg.unit_system = UnitSystem::US;
        cfg.limits.set_range(LimitKey::H2sContent, 0.0, 20.0);
        cfg.limits.remove(LimitKey::MethaneNumber);

        let text = toml::to_string_pretty(&cfg).unwrap();
        assert!(text.contains("h2s"));
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: Config = toml::from_str("unit_system = \"US\"\n").unwrap();
        assert_eq!(cfg.unit_system, UnitSystem::US);
        assert_eq!(cfg.limits, LimitSet::defaults());
        assert_eq!(cfg.language, "auto");
    }
}
