/// 평면 문자열 필드 매핑과 타입 엔티티 사이의 역/직렬화 계층
/// 없는 필드는 실패 대신 기본값으로 채우고, 주어진 id를 항상 부여한다.
// region:    --- Imports
use crate::catalog::model::{CreateUserAttrs, Item, User};
use std::collections::HashMap;

// endregion: --- Imports

// region:    --- Deserialize

/// 문자열 필드 조회 (없으면 빈 문자열)
fn text_field(fields: &HashMap<String, String>, name: &str) -> String {
    fields.get(name).cloned().unwrap_or_default()
}

/// 숫자 필드 조회 (없거나 변환할 수 없으면 기본값)
fn numeric_field<T>(fields: &HashMap<String, String>, name: &str) -> T
where
    T: std::str::FromStr + Default,
{
    fields
        .get(name)
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

/// 상품 해시 역직렬화
pub fn deserialize_item(id: &str, fields: &HashMap<String, String>) -> Item {
    Item {
        id: id.to_string(),
        name: text_field(fields, "name"),
        views: numeric_field(fields, "views"),
        ending_at: numeric_field(fields, "endingAt"),
        image_url: text_field(fields, "imageUrl"),
        price: numeric_field(fields, "price"),
    }
}

/// 사용자 해시 역직렬화
pub fn deserialize_user(id: &str, fields: &HashMap<String, String>) -> User {
    User {
        id: id.to_string(),
        username: text_field(fields, "username"),
        password: text_field(fields, "password"),
    }
}

// endregion: --- Deserialize

// region:    --- Serialize

/// 사용자 생성 속성을 해시 필드 매핑으로 직렬화 (쓰기 경로)
pub fn serialize_user(attrs: &CreateUserAttrs) -> HashMap<String, String> {
    HashMap::from([
        ("username".to_string(), attrs.username.clone()),
        ("password".to_string(), attrs.password.clone()),
    ])
}

// endregion: --- Serialize
