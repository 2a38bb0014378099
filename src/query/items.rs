/// 상품 랭킹 질의
/// 1. 종료 시간 기준 조회
/// 2. 조회수 기준 조회
// region:    --- Imports
use crate::catalog::model::Item;
use crate::catalog::serialize::deserialize_item;
use crate::error::CatalogError;
use crate::keys;
use crate::store::{Direction, StoreClient};
use chrono::Utc;
use std::collections::HashMap;
use tracing::info;

// endregion: --- Imports

// region:    --- Join Patterns

/// 조회수 질의에서 상품 해시와 조인하는 필드 목록
const ITEM_JOIN_FIELDS: [&str; 5] = ["name", "views", "endingAt", "imageUrl", "price"];

/// 조인 결과 한 튜플의 폭 (멤버 id + 필드 5개)
const ITEM_JOIN_WIDTH: usize = ITEM_JOIN_FIELDS.len() + 1;

/// SORT GET 패턴 목록 ("#"는 멤버 id 자신)
fn item_join_patterns() -> Vec<String> {
    let mut patterns = vec!["#".to_string()];
    for field in ITEM_JOIN_FIELDS {
        patterns.push(format!("{}->{}", keys::items("*"), field));
    }
    patterns
}

// endregion: --- Join Patterns

// region:    --- Query Handlers

/// 1. 종료 시간 기준 상품 조회
/// 호출 시점 이후에 끝나는 상품만, 종료 시간 점수 순서대로 페이지 단위로 돌려준다.
pub async fn items_by_ending_time<S: StoreClient>(
    store: &S,
    order: Direction,
    offset: usize,
    count: usize,
) -> Result<Vec<Item>, CatalogError> {
    info!(
        "{:<12} --> 종료 시간 기준 상품 조회: {:?}, offset={}, count={}",
        "Query", order, offset, count
    );

    // 필터 기준 시각은 호출 시점에 한 번만 평가한다
    let now = Utc::now().timestamp_millis() as f64;

    let ids = store
        .range_by_score(
            keys::items_by_ending_at(),
            now,
            f64::INFINITY,
            order,
            offset,
            count,
        )
        .await?;

    // 레코드는 자신의 id로 조회해서 id와 짝을 맞춘다.
    // 인덱스에만 남은 id는 빈 해시로 돌아와 기본값 엔티티가 된다.
    let mut items = Vec::with_capacity(ids.len());
    for id in ids {
        let fields = store.hash_get_all(&keys::items(&id)).await?;
        items.push(deserialize_item(&id, &fields));
    }

    Ok(items)
}

/// 2. 조회수 기준 상품 조회
/// 인덱스의 저장 순서를 그대로 쓰고, 한 번의 조인 질의로 필드까지 함께 가져온다.
pub async fn items_by_views<S: StoreClient>(
    store: &S,
    order: Direction,
    offset: usize,
    count: usize,
) -> Result<Vec<Item>, CatalogError> {
    info!(
        "{:<12} --> 조회수 기준 상품 조회: {:?}, offset={}, count={}",
        "Query", order, offset, count
    );

    let results = store
        .sorted_join(
            keys::items_by_views(),
            &item_join_patterns(),
            true,
            order,
            offset,
            count,
        )
        .await?;

    // 평면 토큰 열은 반드시 튜플 폭의 배수여야 한다
    if results.len() % ITEM_JOIN_WIDTH != 0 {
        return Err(CatalogError::IntegrityMismatch {
            width: ITEM_JOIN_WIDTH,
            len: results.len(),
        });
    }

    let mut items = Vec::with_capacity(results.len() / ITEM_JOIN_WIDTH);
    for chunk in results.chunks_exact(ITEM_JOIN_WIDTH) {
        let id = &chunk[0];
        let mut fields = HashMap::new();
        for (field, value) in ITEM_JOIN_FIELDS.iter().zip(&chunk[1..]) {
            fields.insert(field.to_string(), value.clone());
        }
        items.push(deserialize_item(id, &fields));
    }

    Ok(items)
}

// endregion: --- Query Handlers
