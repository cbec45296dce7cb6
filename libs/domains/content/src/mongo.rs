//! MongoDB implementation of ContentRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use locale::Country;
use mongodb::bson::{doc, to_bson, Bson};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ContentError, ContentResult};
use crate::models::{ContentKey, PageContent};
use crate::repository::ContentRepository;

const COLLECTION: &str = "page_content";

pub struct MongoContentRepository {
    collection: Collection<PageContent>,
}

/// Mongo duplicate-key error code.
const DUPLICATE_KEY_CODE: i32 = 11000;

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};
    matches!(
        &*err.kind,
        ErrorKind::Write(WriteFailure::WriteError(we)) if we.code == DUPLICATE_KEY_CODE
    )
}

impl MongoContentRepository {
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection::<PageContent>(COLLECTION),
        }
    }

    /// Create the unique (country, page_type, language) index. Run once
    /// at startup.
    pub async fn ensure_indexes(db: &Database) -> ContentResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "country": 1, "page_type": 1, "language": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        db.collection::<PageContent>(COLLECTION)
            .create_index(index)
            .await?;
        Ok(())
    }

    fn key_filter(key: ContentKey) -> mongodb::bson::Document {
        doc! {
            "country": key.country.code(),
            "page_type": key.page_type.to_string(),
            "language": key.language.code(),
        }
    }
}

#[async_trait]
impl ContentRepository for MongoContentRepository {
    #[instrument(skip(self, content), fields(country = %content.country, page_type = %content.page_type, language = %content.language))]
    async fn insert(&self, content: PageContent) -> ContentResult<PageContent> {
        self.collection.insert_one(&content).await.map_err(|err| {
            if is_duplicate_key(&err) {
                ContentError::DuplicateKey(content.key())
            } else {
                err.into()
            }
        })?;

        tracing::info!(content_id = %content.id, "page content created");
        Ok(content)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ContentResult<Option<PageContent>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        Ok(self.collection.find_one(filter).await?)
    }

    #[instrument(skip(self))]
    async fn get_by_key(&self, key: ContentKey) -> ContentResult<Option<PageContent>> {
        Ok(self.collection.find_one(Self::key_filter(key)).await?)
    }

    #[instrument(skip(self))]
    async fn list(&self, country: Option<Country>) -> ContentResult<Vec<PageContent>> {
        let filter = match country {
            Some(country) => doc! { "country": country.code() },
            None => doc! {},
        };
        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "country": 1, "page_type": 1, "language": 1 })
            .build();
        let cursor = self.collection.find(filter).with_options(options).await?;
        Ok(cursor.try_collect().await?)
    }

    #[instrument(skip(self, content), fields(content_id = %content.id))]
    async fn replace(&self, content: PageContent) -> ContentResult<PageContent> {
        let filter = doc! { "_id": to_bson(&content.id).unwrap_or(Bson::Null) };
        let result = self.collection.replace_one(filter, &content).await?;
        if result.matched_count == 0 {
            return Err(ContentError::NotFound(content.id));
        }
        tracing::info!(content_id = %content.id, "page content updated");
        Ok(content)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ContentResult<bool> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let result = self.collection.delete_one(filter).await?;
        if result.deleted_count == 0 {
            return Err(ContentError::NotFound(id));
        }
        tracing::info!(content_id = %id, "page content deleted");
        Ok(true)
    }
}
