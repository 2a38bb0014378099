/// 엔티티 레코드와 인덱스 구조의 키 네이밍 규칙
/// 접두사와 구분자 조합으로 엔티티 종류 간 키 충돌을 막는다.

/// 상품 레코드 해시 키
pub fn items(id: &str) -> String {
    format!("items#{id}")
}

/// 상품 종료 시간 인덱스 키 (sorted set)
pub fn items_by_ending_at() -> &'static str {
    "items:endingAt"
}

/// 상품 조회수 인덱스 키 (sorted set)
pub fn items_by_views() -> &'static str {
    "items:views"
}

/// 사용자 레코드 해시 키
pub fn users(id: &str) -> String {
    format!("users#{id}")
}

/// 사용자 이름 유일성 집합 키 (set)
pub fn usernames_unique() -> &'static str {
    "usernames:unique"
}

/// 사용자 이름 -> ID 매핑 인덱스 키 (sorted set)
pub fn usernames() -> &'static str {
    "usernames"
}
