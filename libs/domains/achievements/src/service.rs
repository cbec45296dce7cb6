//! Achievement service.

use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AchievementError, AchievementResult};
use crate::models::{Achievement, CreateAchievement, UpdateAchievement};
use crate::repository::AchievementRepository;

pub struct AchievementService<R: AchievementRepository> {
    repository: Arc<R>,
}

impl<R: AchievementRepository> AchievementService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(label = %input.label))]
    pub async fn create(&self, input: CreateAchievement) -> AchievementResult<Achievement> {
        input
            .validate()
            .map_err(|e| AchievementError::Validation(e.to_string()))?;
        self.repository.insert(Achievement::new(input)).await
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> AchievementResult<Vec<Achievement>> {
        self.repository.list().await
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: UpdateAchievement) -> AchievementResult<Achievement> {
        input
            .validate()
            .map_err(|e| AchievementError::Validation(e.to_string()))?;

        let mut existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(AchievementError::NotFound(id))?;
        existing.apply_update(input);
        self.repository.replace(existing).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> AchievementResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }
}

impl<R: AchievementRepository> Clone for AchievementService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryAchievementRepository;

    fn create(label: &str, sort_order: i32) -> CreateAchievement {
        CreateAchievement {
            label: label.to_string(),
            value: 100,
            suffix: Some("+".to_string()),
            sort_order,
        }
    }

    #[tokio::test]
    async fn listing_is_ordered_by_sort_order() {
        let service = AchievementService::new(MemoryAchievementRepository::new());
        service.create(create("Business plans", 2)).await.unwrap();
        service.create(create("Approval rate", 1)).await.unwrap();
        service.create(create("Years active", 3)).await.unwrap();

        let labels: Vec<String> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.label)
            .collect();
        assert_eq!(labels, ["Approval rate", "Business plans", "Years active"]);
    }

    #[tokio::test]
    async fn update_missing_entry_is_not_found() {
        let service = AchievementService::new(MemoryAchievementRepository::new());
        let err = service
            .update(Uuid::now_v7(), UpdateAchievement::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AchievementError::NotFound(_)));
    }

    #[tokio::test]
    async fn negative_value_is_rejected() {
        let service = AchievementService::new(MemoryAchievementRepository::new());
        let mut input = create("Clients", 1);
        input.value = -5;
        assert!(matches!(
            service.create(input).await,
            Err(AchievementError::Validation(_))
        ));
    }
}
