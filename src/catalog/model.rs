use serde::{Deserialize, Serialize};

// 상품 모델
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub views: u64,
    pub ending_at: i64,
    pub image_url: String,
    pub price: f64,
}

// 사용자 모델
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
}

// 사용자 생성 속성
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateUserAttrs {
    pub username: String,
    pub password: String,
}
