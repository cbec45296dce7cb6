//! MongoDB implementations of the admin repositories.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, to_bson, Bson};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};
use tracing::instrument;
use uuid::Uuid;

use crate::error::AdminResult;
use crate::models::{AdminLogEntry, AdminSession, AdminUser, LogFilter};
use crate::repository::{AdminUserRepository, LogRepository, SessionRepository};

const USERS_COLLECTION: &str = "admin_users";
const SESSIONS_COLLECTION: &str = "admin_sessions";
const LOGS_COLLECTION: &str = "admin_logs";

pub struct MongoAdminUserRepository {
    collection: Collection<AdminUser>,
}

impl MongoAdminUserRepository {
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection::<AdminUser>(USERS_COLLECTION),
        }
    }

    /// Create the unique email index. Run once at startup.
    pub async fn ensure_indexes(db: &Database) -> AdminResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        db.collection::<AdminUser>(USERS_COLLECTION)
            .create_index(index)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl AdminUserRepository for MongoAdminUserRepository {
    #[instrument(skip(self))]
    async fn get_by_email(&self, email: &str) -> AdminResult<Option<AdminUser>> {
        Ok(self.collection.find_one(doc! { "email": email }).await?)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> AdminResult<Option<AdminUser>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        Ok(self.collection.find_one(filter).await?)
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn insert(&self, user: AdminUser) -> AdminResult<AdminUser> {
        self.collection.insert_one(&user).await?;
        tracing::info!(admin_id = %user.id, "admin user created");
        Ok(user)
    }
}

pub struct MongoSessionRepository {
    collection: Collection<AdminSession>,
}

impl MongoSessionRepository {
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection::<AdminSession>(SESSIONS_COLLECTION),
        }
    }

    /// TTL index so Mongo discards expired sessions on its own.
    pub async fn ensure_indexes(db: &Database) -> AdminResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "expires_at": 1 })
            .options(
                IndexOptions::builder()
                    .expire_after(std::time::Duration::from_secs(0))
                    .build(),
            )
            .build();
        db.collection::<AdminSession>(SESSIONS_COLLECTION)
            .create_index(index)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl SessionRepository for MongoSessionRepository {
    #[instrument(skip(self, session), fields(admin_id = %session.admin_id))]
    async fn insert(&self, session: AdminSession) -> AdminResult<AdminSession> {
        self.collection.insert_one(&session).await?;
        Ok(session)
    }

    #[instrument(skip(self, token))]
    async fn get(&self, token: &str) -> AdminResult<Option<AdminSession>> {
        Ok(self.collection.find_one(doc! { "_id": token }).await?)
    }

    #[instrument(skip(self, token))]
    async fn delete(&self, token: &str) -> AdminResult<()> {
        self.collection.delete_one(doc! { "_id": token }).await?;
        Ok(())
    }
}

pub struct MongoLogRepository {
    collection: Collection<AdminLogEntry>,
}

impl MongoLogRepository {
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection::<AdminLogEntry>(LOGS_COLLECTION),
        }
    }
}

#[async_trait]
impl LogRepository for MongoLogRepository {
    #[instrument(skip(self, entry), fields(action = %entry.action))]
    async fn insert(&self, entry: AdminLogEntry) -> AdminResult<AdminLogEntry> {
        self.collection.insert_one(&entry).await?;
        Ok(entry)
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: LogFilter) -> AdminResult<Vec<AdminLogEntry>> {
        let options = mongodb::options::FindOptions::builder()
            .limit(filter.limit)
            .skip(filter.offset)
            .sort(doc! { "timestamp": -1 })
            .build();
        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        Ok(cursor.try_collect().await?)
    }
}
