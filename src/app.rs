use thiserror::Error;
use tracing::debug;

use crate::config::ConfigFile;
use crate::gas::{self, Composition, PropertyRecord};
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] crate::config::ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] crate::conversion::ConversionError),
    /// 조성/성분 오류
    #[error("가스 조성 오류: {0}")]
    Gas(#[from] gas::GasError),
    /// 보고서 출력 오류
    #[error("보고서 오류: {0}")]
    Report(#[from] crate::report::ReportError),
    /// 명령행 입력 오류
    #[error("입력 오류: {0}")]
    Input(String),
}

/// 대화형 세션 상태. 현재 조성과 마지막 계산 결과를 들고 있다.
#[derive(Debug, Default)]
pub struct Session {
    pub composition: Composition,
    pub record: Option<PropertyRecord>,
}

impl Session {
    /// 현재 조성으로 다시 계산한다. 유효한 성분이 없으면 결과를 비운다.
    pub fn recalculate(&mut self) -> Option<&PropertyRecord> {
        self.record = gas::calculate(&self.composition);
        debug!(calculated = self.record.is_some(), "session recalculated");
        self.record.as_ref()
    }

    /// 조성을 통째로 바꾸고 계산한다.
    pub fn load(&mut self, composition: Composition) -> Option<&PropertyRecord> {
        self.composition = composition;
        self.recalculate()
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut ConfigFile, tr: &Translator) -> Result<(), AppError> {
    let mut session = Session::default();
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Composition => ui_cli::handle_composition(tr, &mut session)?,
            MenuChoice::Preset => ui_cli::handle_preset(tr, &mut session)?,
            MenuChoice::Results => ui_cli::handle_results(tr, &session, &config.config)?,
            MenuChoice::Summary => ui_cli::handle_summary(tr, &session, &config.config),
            MenuChoice::Limits => {
                ui_cli::handle_limits(tr, &mut config.config)?;
                config.save()?;
            }
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, &mut config.config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
