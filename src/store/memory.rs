/// 인메모리 스토어 구현
/// 실제 스토어의 의미론을 그대로 따른다: 없는 해시는 빈 매핑, 집합 추가는
/// 새 멤버 여부 반환, nosort 조인은 정렬 집합의 저장 순위를 그대로 순회.
// region:    --- Imports
use super::{Direction, StoreClient, StoreError};
use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

// endregion: --- Imports

// region:    --- Memory Store

#[derive(Default)]
struct MemoryInner {
    hashes: HashMap<String, HashMap<String, String>>,
    sets: HashMap<String, HashSet<String>>,
    zsets: HashMap<String, HashMap<String, f64>>,
}

/// 인메모리 스토어
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// (점수, 멤버) 기준 오름차순 순위 목록
    fn ranked(zset: &HashMap<String, f64>) -> Vec<(String, f64)> {
        let mut entries: Vec<(String, f64)> =
            zset.iter().map(|(member, score)| (member.clone(), *score)).collect();
        entries.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        entries
    }

    /// SORT GET 패턴 해석
    /// "#"는 멤버 자신, "prefix*suffix->field"는 멤버를 치환한 해시의 필드 값.
    /// 없는 해시나 필드는 빈 문자열로 응답한다 (스토어의 nil 응답에 대응).
    fn resolve_pattern(
        inner: &MemoryInner,
        pattern: &str,
        member: &str,
    ) -> Result<String, StoreError> {
        if pattern == "#" {
            return Ok(member.to_string());
        }

        let (key_pattern, field) = pattern
            .split_once("->")
            .ok_or_else(|| StoreError::InvalidPattern(pattern.to_string()))?;
        if !key_pattern.contains('*') {
            return Err(StoreError::InvalidPattern(pattern.to_string()));
        }

        let key = key_pattern.replacen('*', member, 1);
        Ok(inner
            .hashes
            .get(&key)
            .and_then(|fields| fields.get(field))
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl StoreClient for MemoryStore {
    async fn range_by_score(
        &self,
        key: &str,
        min: f64,
        max: f64,
        direction: Direction,
        offset: usize,
        count: usize,
    ) -> Result<Vec<String>, StoreError> {
        let inner = self.inner.read().await;
        let Some(zset) = inner.zsets.get(key) else {
            return Ok(Vec::new());
        };

        let mut entries: Vec<(String, f64)> = Self::ranked(zset)
            .into_iter()
            .filter(|(_, score)| min <= *score && *score <= max)
            .collect();
        if direction == Direction::Desc {
            entries.reverse();
        }

        Ok(entries
            .into_iter()
            .skip(offset)
            .take(count)
            .map(|(member, _)| member)
            .collect())
    }

    async fn sorted_join(
        &self,
        key: &str,
        patterns: &[String],
        sort_disabled: bool,
        direction: Direction,
        offset: usize,
        count: usize,
    ) -> Result<Vec<String>, StoreError> {
        let inner = self.inner.read().await;
        let Some(zset) = inner.zsets.get(key) else {
            return Ok(Vec::new());
        };

        let mut members: Vec<String> = if sort_disabled {
            // 저장 순위를 그대로 순회한다
            Self::ranked(zset).into_iter().map(|(member, _)| member).collect()
        } else {
            // 멤버 값 자체를 숫자로 정렬한다
            let mut numeric: Vec<(f64, String)> = Vec::with_capacity(zset.len());
            for member in zset.keys() {
                let value: f64 = member
                    .parse()
                    .map_err(|_| StoreError::NotNumeric(member.clone()))?;
                numeric.push((value, member.clone()));
            }
            numeric.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
            numeric.into_iter().map(|(_, member)| member).collect()
        };
        if direction == Direction::Desc {
            members.reverse();
        }

        let mut results = Vec::new();
        for member in members.into_iter().skip(offset).take(count) {
            for pattern in patterns {
                results.push(Self::resolve_pattern(&inner, pattern, &member)?);
            }
        }

        Ok(results)
    }

    async fn hash_get_all(&self, key: &str) -> Result<HashMap<String, String>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.hashes.get(key).cloned().unwrap_or_default())
    }

    async fn set_contains(&self, key: &str, member: &str) -> Result<bool, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .sets
            .get(key)
            .is_some_and(|set| set.contains(member)))
    }

    async fn hash_set_all(
        &self,
        key: &str,
        fields: HashMap<String, String>,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.hashes.entry(key.to_string()).or_default().extend(fields);
        Ok(())
    }

    async fn set_add(&self, key: &str, member: &str) -> Result<bool, StoreError> {
        // 쓰기 잠금 아래에서 검사와 추가가 한 번에 일어난다
        let mut inner = self.inner.write().await;
        Ok(inner
            .sets
            .entry(key.to_string())
            .or_default()
            .insert(member.to_string()))
    }

    async fn sorted_set_add(
        &self,
        key: &str,
        member: &str,
        score: f64,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner
            .zsets
            .entry(key.to_string())
            .or_default()
            .insert(member.to_string(), score);
        Ok(())
    }

    async fn sorted_set_score(
        &self,
        key: &str,
        member: &str,
    ) -> Result<Option<f64>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.zsets.get(key).and_then(|zset| zset.get(member).copied()))
    }
}

// endregion: --- Memory Store
