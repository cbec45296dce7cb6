//! In-memory implementation of AchievementRepository.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::{AchievementError, AchievementResult};
use crate::models::Achievement;
use crate::repository::AchievementRepository;

#[derive(Default)]
pub struct MemoryAchievementRepository {
    entries: RwLock<HashMap<Uuid, Achievement>>,
}

impl MemoryAchievementRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_err(e: impl std::fmt::Display) -> AchievementError {
    AchievementError::Database(e.to_string())
}

#[async_trait]
impl AchievementRepository for MemoryAchievementRepository {
    async fn insert(&self, achievement: Achievement) -> AchievementResult<Achievement> {
        let mut entries = self.entries.write().map_err(lock_err)?;
        entries.insert(achievement.id, achievement.clone());
        Ok(achievement)
    }

    async fn get_by_id(&self, id: Uuid) -> AchievementResult<Option<Achievement>> {
        let entries = self.entries.read().map_err(lock_err)?;
        Ok(entries.get(&id).cloned())
    }

    async fn list(&self) -> AchievementResult<Vec<Achievement>> {
        let entries = self.entries.read().map_err(lock_err)?;
        let mut all: Vec<Achievement> = entries.values().cloned().collect();
        all.sort_by_key(|a| a.sort_order);
        Ok(all)
    }

    async fn replace(&self, achievement: Achievement) -> AchievementResult<Achievement> {
        let mut entries = self.entries.write().map_err(lock_err)?;
        if !entries.contains_key(&achievement.id) {
            return Err(AchievementError::NotFound(achievement.id));
        }
        entries.insert(achievement.id, achievement.clone());
        Ok(achievement)
    }

    async fn delete(&self, id: Uuid) -> AchievementResult<bool> {
        let mut entries = self.entries.write().map_err(lock_err)?;
        if entries.remove(&id).is_none() {
            return Err(AchievementError::NotFound(id));
        }
        Ok(true)
    }
}
