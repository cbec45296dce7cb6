//! MongoDB implementation of AchievementRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, to_bson, Bson};
use mongodb::{Collection, Database};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{AchievementError, AchievementResult};
use crate::models::Achievement;
use crate::repository::AchievementRepository;

const COLLECTION: &str = "achievements";

pub struct MongoAchievementRepository {
    collection: Collection<Achievement>,
}

impl MongoAchievementRepository {
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection::<Achievement>(COLLECTION),
        }
    }
}

#[async_trait]
impl AchievementRepository for MongoAchievementRepository {
    #[instrument(skip(self, achievement), fields(label = %achievement.label))]
    async fn insert(&self, achievement: Achievement) -> AchievementResult<Achievement> {
        self.collection.insert_one(&achievement).await?;
        tracing::info!(achievement_id = %achievement.id, "achievement created");
        Ok(achievement)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> AchievementResult<Option<Achievement>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        Ok(self.collection.find_one(filter).await?)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> AchievementResult<Vec<Achievement>> {
        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "sort_order": 1 })
            .build();
        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        Ok(cursor.try_collect().await?)
    }

    #[instrument(skip(self, achievement), fields(achievement_id = %achievement.id))]
    async fn replace(&self, achievement: Achievement) -> AchievementResult<Achievement> {
        let filter = doc! { "_id": to_bson(&achievement.id).unwrap_or(Bson::Null) };
        let result = self.collection.replace_one(filter, &achievement).await?;
        if result.matched_count == 0 {
            return Err(AchievementError::NotFound(achievement.id));
        }
        Ok(achievement)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> AchievementResult<bool> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let result = self.collection.delete_one(filter).await?;
        if result.deleted_count == 0 {
            return Err(AchievementError::NotFound(id));
        }
        tracing::info!(achievement_id = %id, "achievement deleted");
        Ok(true)
    }
}
