use thiserror::Error;

/// 조성 입력 단계에서 거부되는 사용 오류.
///
/// 유효 성분이 하나도 없는 조성은 오류가 아니라 `Ok(None)` 으로 표현한다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GasError {
    /// 기준표에 없는 성분
    #[error("알 수 없는 성분: {0}")]
    UnknownSpecies(String),
    /// NaN/무한대 같은 유한하지 않은 입력량
    #[error("{species} 입력량이 유효하지 않음: {value}")]
    InvalidAmount { species: String, value: f64 },
}

pub type GasResult<T> = Result<T, GasError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_species() {
        let err = GasError::UnknownSpecies("Unobtainium".into());
        assert!(err.to_string().contains("Unobtainium"));

        let err = GasError::InvalidAmount {
            species: "Methane".into(),
            value: f64::NAN,
        };
        assert!(err.to_string().contains("Methane"));
    }
}
