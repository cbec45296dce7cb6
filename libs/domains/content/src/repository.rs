use async_trait::async_trait;
use locale::Country;
use uuid::Uuid;

use crate::error::ContentResult;
use crate::models::{ContentKey, PageContent};

/// Data access interface for page overrides. Backends: MongoDB in
/// production, an in-memory map in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Insert an override. Fails on a duplicate (country, page type,
    /// language) key.
    async fn insert(&self, content: PageContent) -> ContentResult<PageContent>;

    async fn get_by_id(&self, id: Uuid) -> ContentResult<Option<PageContent>>;

    async fn get_by_key(&self, key: ContentKey) -> ContentResult<Option<PageContent>>;

    /// All overrides, optionally narrowed to one country. Admin listing.
    async fn list(&self, country: Option<Country>) -> ContentResult<Vec<PageContent>>;

    /// Replace the stored document with `content`.
    async fn replace(&self, content: PageContent) -> ContentResult<PageContent>;

    async fn delete(&self, id: Uuid) -> ContentResult<bool>;
}
