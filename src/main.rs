// region:    --- Imports
use auction_catalog::catalog::model::CreateUserAttrs;
use auction_catalog::keys;
use auction_catalog::query::items::{items_by_ending_time, items_by_views};
use auction_catalog::store::memory::MemoryStore;
use auction_catalog::store::{Direction, StoreClient};
use auction_catalog::users;
use auction_catalog::users::id::ClockIdGenerator;
use chrono::Utc;
use std::collections::HashMap;
use tracing::info;

// endregion: --- Imports

// region:    --- Main

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    // 인메모리 스토어 생성 및 데모 데이터 적재
    let store = MemoryStore::new();
    seed_items(&store).await?;
    info!("{:<12} --> 데모 데이터 적재 완료", "Main");

    // 종료 시간 기준 조회 (마감 임박 순)
    let ending_soon = items_by_ending_time(&store, Direction::Asc, 0, 10).await?;
    info!("{:<12} --> 마감 임박 상품 {}건", "Main", ending_soon.len());
    println!("{}", serde_json::to_string_pretty(&ending_soon)?);

    // 조회수 기준 조회 (인기 순)
    let most_viewed = items_by_views(&store, Direction::Desc, 0, 10).await?;
    info!("{:<12} --> 조회수 상위 상품 {}건", "Main", most_viewed.len());
    println!("{}", serde_json::to_string_pretty(&most_viewed)?);

    // 사용자 생성 및 조회
    let id_gen = ClockIdGenerator::new();
    let id = users::create_user(
        &store,
        &id_gen,
        CreateUserAttrs {
            username: "demo-seller".to_string(),
            password: "demo-password".to_string(),
        },
    )
    .await?;
    info!("{:<12} --> 사용자 생성 완료: id={}", "Main", id);

    let user = users::get_user_by_username(&store, "demo-seller").await?;
    println!("{}", serde_json::to_string_pretty(&user)?);

    // 같은 이름으로 다시 만들면 거부된다
    if let Err(e) = users::create_user(
        &store,
        &id_gen,
        CreateUserAttrs {
            username: "demo-seller".to_string(),
            password: "another-password".to_string(),
        },
    )
    .await
    {
        info!("{:<12} --> 중복 사용자 이름 거부: {}", "Main", e);
    }

    Ok(())
}

// endregion: --- Main

// region:    --- Seed

/// 데모용 상품 적재
/// 외부 쓰기 경로를 대신해 레코드 해시와 두 인덱스(endingAt, views)를 채운다.
async fn seed_items(store: &MemoryStore) -> Result<(), Box<dyn std::error::Error>> {
    let now = Utc::now().timestamp_millis();

    let items = [
        ("i1", "빈티지 카메라", 120u64, now + 60_000, "https://img.example/cam.jpg", 45000.0),
        ("i2", "기계식 키보드", 80, now + 600_000, "https://img.example/kbd.jpg", 99000.0),
        ("i3", "한정판 피규어", 300, now + 3_600_000, "https://img.example/fig.jpg", 150000.0),
        ("i4", "지난 경매 상품", 10, now - 1_000, "https://img.example/old.jpg", 1000.0),
    ];

    for (id, name, views, ending_at, image_url, price) in items {
        let fields = HashMap::from([
            ("name".to_string(), name.to_string()),
            ("views".to_string(), views.to_string()),
            ("endingAt".to_string(), ending_at.to_string()),
            ("imageUrl".to_string(), image_url.to_string()),
            ("price".to_string(), price.to_string()),
        ]);
        store.hash_set_all(&keys::items(id), fields).await?;
        store
            .sorted_set_add(keys::items_by_ending_at(), id, ending_at as f64)
            .await?;
        store
            .sorted_set_add(keys::items_by_views(), id, views as f64)
            .await?;
    }

    Ok(())
}

// endregion: --- Seed
