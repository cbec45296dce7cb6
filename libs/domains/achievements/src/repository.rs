use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AchievementResult;
use crate::models::Achievement;

/// Data access interface for achievements.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AchievementRepository: Send + Sync {
    async fn insert(&self, achievement: Achievement) -> AchievementResult<Achievement>;

    async fn get_by_id(&self, id: Uuid) -> AchievementResult<Option<Achievement>>;

    /// All entries ordered by `sort_order` ascending.
    async fn list(&self) -> AchievementResult<Vec<Achievement>>;

    async fn replace(&self, achievement: Achievement) -> AchievementResult<Achievement>;

    async fn delete(&self, id: Uuid) -> AchievementResult<bool>;
}
