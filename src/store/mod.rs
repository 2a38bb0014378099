// region:    --- Imports
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

pub mod memory;

// endregion: --- Imports

// region:    --- Store Error

/// 스토어 호출 실패 오류
#[derive(Debug, Error)]
pub enum StoreError {
    /// 스토어에 연결할 수 없음
    #[error("스토어에 연결할 수 없습니다: {0}")]
    Unavailable(String),

    /// 스토어 응답 시간 초과
    #[error("스토어 응답 시간 초과")]
    Timeout,

    /// 해석할 수 없는 조인 패턴
    #[error("잘못된 조인 패턴입니다: {0}")]
    InvalidPattern(String),

    /// 숫자 정렬 대상 멤버가 숫자가 아님
    #[error("숫자로 정렬할 수 없는 멤버입니다: {0}")]
    NotNumeric(String),
}

// endregion: --- Store Error

// region:    --- Direction

/// 인덱스 순회 방향
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "ASC")]
    Asc,
    #[default]
    #[serde(rename = "DESC")]
    Desc,
}

// endregion: --- Direction

// region:    --- Store Client Trait

/// 키-값/정렬 집합 스토어 트레이트
/// 질의 엔진과 사용자 레지스트리는 이 트레이트를 통해서만 스토어에 접근한다.
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// 점수 범위(min <= score <= max)에 드는 멤버를 점수 순서로 조회한다.
    /// offset/count로 페이지를 자르고, direction이 순회 방향을 정한다.
    async fn range_by_score(
        &self,
        key: &str,
        min: f64,
        max: f64,
        direction: Direction,
        offset: usize,
        count: usize,
    ) -> Result<Vec<String>, StoreError>;

    /// 멤버 목록과 외부 해시 필드를 한 번의 왕복으로 함께 조회한다 (SORT ... GET).
    /// sort_disabled가 true면 인덱스의 저장 순서를 그대로 쓰고(BY nosort),
    /// direction은 그 순서의 순방향/역방향만 뒤집는다.
    /// 패턴: "#"는 멤버 자신, "prefix*suffix->field"는 멤버를 치환한 해시의 필드.
    async fn sorted_join(
        &self,
        key: &str,
        patterns: &[String],
        sort_disabled: bool,
        direction: Direction,
        offset: usize,
        count: usize,
    ) -> Result<Vec<String>, StoreError>;

    /// 해시의 모든 필드 조회. 없는 키는 빈 매핑을 돌려준다.
    async fn hash_get_all(&self, key: &str) -> Result<HashMap<String, String>, StoreError>;

    /// 집합 멤버십 검사
    async fn set_contains(&self, key: &str, member: &str) -> Result<bool, StoreError>;

    /// 해시 필드 일괄 기록 (기존 필드와 병합)
    async fn hash_set_all(
        &self,
        key: &str,
        fields: HashMap<String, String>,
    ) -> Result<(), StoreError>;

    /// 집합에 멤버 추가. 새로 추가된 경우에만 true (insert-if-absent).
    /// 사용자 이름 유일성 보장이 이 반환값에 의존한다.
    async fn set_add(&self, key: &str, member: &str) -> Result<bool, StoreError>;

    /// 정렬 집합에 멤버 추가 또는 점수 갱신
    async fn sorted_set_add(&self, key: &str, member: &str, score: f64)
        -> Result<(), StoreError>;

    /// 정렬 집합에서 멤버의 점수 조회
    async fn sorted_set_score(&self, key: &str, member: &str)
        -> Result<Option<f64>, StoreError>;
}

// endregion: --- Store Client Trait
