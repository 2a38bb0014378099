/// 사용자 레지스트리
/// 1. 사용자 이름으로 조회
/// 2. ID로 조회
/// 3. 사용자 생성 (이름 유일성 보장)
// region:    --- Imports
use crate::catalog::model::{CreateUserAttrs, User};
use crate::catalog::serialize::{deserialize_user, serialize_user};
use crate::error::CatalogError;
use crate::keys;
use crate::store::StoreClient;
use tracing::{info, warn};

pub mod id;

use id::IdGenerator;

// endregion: --- Imports

// region:    --- Registry

/// 1. 사용자 이름으로 사용자 조회
/// usernames 정렬 집합의 점수에서 16진수 ID를 복원한 뒤 해시를 읽는다.
/// 점수만 남고 레코드가 없으면 ID만 채워진 엔티티를 돌려준다.
pub async fn get_user_by_username<S: StoreClient>(
    store: &S,
    username: &str,
) -> Result<User, CatalogError> {
    info!("{:<12} --> 사용자 이름 조회: {}", "Registry", username);

    let score = store
        .sorted_set_score(keys::usernames(), username)
        .await?
        .ok_or_else(|| CatalogError::UserNotFound(username.to_string()))?;

    // 점수를 16진수 ID로 되돌린다
    let id = format!("{:x}", score as u64);
    let fields = store.hash_get_all(&keys::users(&id)).await?;

    Ok(deserialize_user(&id, &fields))
}

/// 2. ID로 사용자 조회
/// 존재 검사는 하지 않는다. 레코드가 없으면 기본값 엔티티가 돌아온다.
pub async fn get_user_by_id<S: StoreClient>(store: &S, id: &str) -> Result<User, CatalogError> {
    info!("{:<12} --> 사용자 ID 조회: {}", "Registry", id);

    let fields = store.hash_get_all(&keys::users(id)).await?;

    Ok(deserialize_user(id, &fields))
}

/// 3. 사용자 생성
/// 유일성 집합에 대한 원자적 추가(set_add)가 선점 지점이다.
/// 선점에 성공한 호출만 레코드와 인덱스를 기록하므로, 거부된 요청은
/// 아무것도 쓰지 않고 동시 호출 중 최대 한 건만 성공한다.
pub async fn create_user<S: StoreClient>(
    store: &S,
    id_gen: &dyn IdGenerator,
    attrs: CreateUserAttrs,
) -> Result<String, CatalogError> {
    info!("{:<12} --> 사용자 생성: {}", "Registry", attrs.username);

    let raw_id = id_gen.gen_id();
    let id = format!("{:x}", raw_id);

    // 이미 등록된 이름이면 쓰기 전에 거부한다
    if store
        .set_contains(keys::usernames_unique(), &attrs.username)
        .await?
    {
        return Err(CatalogError::UsernameTaken(attrs.username));
    }

    // false면 위 검사와 이 추가 사이에 동시 호출이 먼저 등록한 것
    if !store
        .set_add(keys::usernames_unique(), &attrs.username)
        .await?
    {
        warn!(
            "{:<12} --> 동시 생성 경합으로 거부된 사용자 이름: {}",
            "Registry", attrs.username
        );
        return Err(CatalogError::UsernameTaken(attrs.username));
    }

    store
        .hash_set_all(&keys::users(&id), serialize_user(&attrs))
        .await?;
    store
        .sorted_set_add(keys::usernames(), &attrs.username, raw_id as f64)
        .await?;

    Ok(id)
}

// endregion: --- Registry
