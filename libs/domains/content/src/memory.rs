//! In-memory implementation of ContentRepository, used by handler tests
//! and local development without MongoDB.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use locale::Country;
use uuid::Uuid;

use crate::error::{ContentError, ContentResult};
use crate::models::{ContentKey, PageContent};
use crate::repository::ContentRepository;

#[derive(Default)]
pub struct MemoryContentRepository {
    entries: RwLock<HashMap<Uuid, PageContent>>,
}

impl MemoryContentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_err(e: impl std::fmt::Display) -> ContentError {
    ContentError::Database(e.to_string())
}

#[async_trait]
impl ContentRepository for MemoryContentRepository {
    async fn insert(&self, content: PageContent) -> ContentResult<PageContent> {
        let mut entries = self.entries.write().map_err(lock_err)?;
        if entries.values().any(|c| c.key() == content.key()) {
            return Err(ContentError::DuplicateKey(content.key()));
        }
        entries.insert(content.id, content.clone());
        Ok(content)
    }

    async fn get_by_id(&self, id: Uuid) -> ContentResult<Option<PageContent>> {
        let entries = self.entries.read().map_err(lock_err)?;
        Ok(entries.get(&id).cloned())
    }

    async fn get_by_key(&self, key: ContentKey) -> ContentResult<Option<PageContent>> {
        let entries = self.entries.read().map_err(lock_err)?;
        Ok(entries.values().find(|c| c.key() == key).cloned())
    }

    async fn list(&self, country: Option<Country>) -> ContentResult<Vec<PageContent>> {
        let entries = self.entries.read().map_err(lock_err)?;
        let mut items: Vec<PageContent> = entries
            .values()
            .filter(|c| country.is_none_or(|wanted| c.country == wanted))
            .cloned()
            .collect();
        items.sort_by_key(|c| (c.country.code(), c.page_type.to_string(), c.language.code()));
        Ok(items)
    }

    async fn replace(&self, content: PageContent) -> ContentResult<PageContent> {
        let mut entries = self.entries.write().map_err(lock_err)?;
        if !entries.contains_key(&content.id) {
            return Err(ContentError::NotFound(content.id));
        }
        entries.insert(content.id, content.clone());
        Ok(content)
    }

    async fn delete(&self, id: Uuid) -> ContentResult<bool> {
        let mut entries = self.entries.write().map_err(lock_err)?;
        if entries.remove(&id).is_none() {
            return Err(ContentError::NotFound(id));
        }
        Ok(true)
    }
}
