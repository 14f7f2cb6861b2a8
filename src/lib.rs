//! 가스터빈 연료가스 물성 계산/적합성 판정 로직을 라이브러리로 분리하여 CLI 와 테스트에서 함께 쓴다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod gas;
pub mod i18n;
pub mod quantity;
pub mod report;
pub mod ui_cli;
pub mod units;
