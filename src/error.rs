// region:    --- Imports
use crate::store::StoreError;
use thiserror::Error;

// endregion: --- Imports

// region:    --- Catalog Error

/// 질의 계층과 사용자 레지스트리의 오류 분류
#[derive(Debug, Error)]
pub enum CatalogError {
    /// 사용자 이름 조회 결과 없음
    #[error("존재하지 않는 사용자입니다: {0}")]
    UserNotFound(String),

    /// 이미 등록된 사용자 이름 (호출자가 정정 가능한 오류)
    #[error("이미 사용 중인 사용자 이름입니다: {0}")]
    UsernameTaken(String),

    /// 조인 결과 길이가 튜플 폭의 배수가 아님
    #[error("조인 결과 정합성 오류: 길이 {len}은 튜플 폭 {width}의 배수가 아닙니다")]
    IntegrityMismatch { width: usize, len: usize },

    /// 스토어 인프라 오류 (내부에서 재시도하지 않고 그대로 전파)
    #[error(transparent)]
    Store(#[from] StoreError),
}

// endregion: --- Catalog Error
