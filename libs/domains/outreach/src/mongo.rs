//! MongoDB implementations of the outreach repositories.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, to_bson, Bson};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};
use tracing::instrument;

use crate::error::{OutreachError, OutreachResult};
use crate::models::{ContactSubmission, NewsletterSubscription};
use crate::repository::{ContactRepository, NewsletterRepository};

const CONTACT_COLLECTION: &str = "contact_submissions";
const NEWSLETTER_COLLECTION: &str = "newsletter_subscriptions";

const DUPLICATE_KEY_CODE: i32 = 11000;

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};
    matches!(
        &*err.kind,
        ErrorKind::Write(WriteFailure::WriteError(we)) if we.code == DUPLICATE_KEY_CODE
    )
}

pub struct MongoContactRepository {
    collection: Collection<ContactSubmission>,
}

impl MongoContactRepository {
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection::<ContactSubmission>(CONTACT_COLLECTION),
        }
    }
}

#[async_trait]
impl ContactRepository for MongoContactRepository {
    #[instrument(skip(self, submission), fields(country = %submission.country))]
    async fn insert(&self, submission: ContactSubmission) -> OutreachResult<ContactSubmission> {
        self.collection.insert_one(&submission).await?;
        tracing::info!(submission_id = %submission.id, "contact submission stored");
        Ok(submission)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> OutreachResult<Vec<ContactSubmission>> {
        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "submitted_at": -1 })
            .build();
        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        Ok(cursor.try_collect().await?)
    }
}

pub struct MongoNewsletterRepository {
    collection: Collection<NewsletterSubscription>,
}

impl MongoNewsletterRepository {
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection::<NewsletterSubscription>(NEWSLETTER_COLLECTION),
        }
    }

    /// Create the unique email index. Run once at startup.
    pub async fn ensure_indexes(db: &Database) -> OutreachResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        db.collection::<NewsletterSubscription>(NEWSLETTER_COLLECTION)
            .create_index(index)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl NewsletterRepository for MongoNewsletterRepository {
    #[instrument(skip(self))]
    async fn get_by_email(&self, email: &str) -> OutreachResult<Option<NewsletterSubscription>> {
        Ok(self.collection.find_one(doc! { "email": email }).await?)
    }

    #[instrument(skip(self, subscription), fields(country = %subscription.country))]
    async fn insert(
        &self,
        subscription: NewsletterSubscription,
    ) -> OutreachResult<NewsletterSubscription> {
        self.collection
            .insert_one(&subscription)
            .await
            .map_err(|err| {
                if is_duplicate_key(&err) {
                    OutreachError::AlreadySubscribed(subscription.email.clone())
                } else {
                    err.into()
                }
            })?;
        tracing::info!(subscription_id = %subscription.id, "newsletter subscription stored");
        Ok(subscription)
    }

    #[instrument(skip(self, subscription), fields(subscription_id = %subscription.id))]
    async fn replace(
        &self,
        subscription: NewsletterSubscription,
    ) -> OutreachResult<NewsletterSubscription> {
        let filter = doc! { "_id": to_bson(&subscription.id).unwrap_or(Bson::Null) };
        let result = self.collection.replace_one(filter, &subscription).await?;
        if result.matched_count == 0 {
            return Err(OutreachError::NotSubscribed(subscription.email.clone()));
        }
        Ok(subscription)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> OutreachResult<Vec<NewsletterSubscription>> {
        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "subscribed_at": -1 })
            .build();
        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        Ok(cursor.try_collect().await?)
    }
}
