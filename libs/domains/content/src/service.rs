//! Content service - business rules for page overrides.

use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use locale::Country;

use crate::error::{ContentError, ContentResult};
use crate::models::{ContentKey, ContentLookup, CreatePageContent, PageContent, UpdatePageContent};
use crate::repository::ContentRepository;

pub struct ContentService<R: ContentRepository> {
    repository: Arc<R>,
}

impl<R: ContentRepository> ContentService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create an override. The language must be offered in the target
    /// country; the (country, page type, language) key must be unused.
    #[instrument(skip(self, input), fields(country = %input.country, page_type = %input.page_type, language = %input.language))]
    pub async fn create(&self, input: CreatePageContent) -> ContentResult<PageContent> {
        input
            .validate()
            .map_err(|e| ContentError::Validation(e.to_string()))?;

        if !input.country.allows_language(input.language) {
            return Err(ContentError::LanguageNotAllowed {
                country: input.country,
                language: input.language,
            });
        }

        let content = PageContent::new(input);
        let key = content.key();
        if self.repository.get_by_key(key).await?.is_some() {
            return Err(ContentError::DuplicateKey(key));
        }
        self.repository.insert(content).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ContentResult<PageContent> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ContentError::NotFound(id))
    }

    /// Strict lookup for the admin panel and the public endpoint: a
    /// missing override is a 404.
    #[instrument(skip(self))]
    pub async fn lookup(&self, key: ContentKey) -> ContentResult<PageContent> {
        if !key.country.allows_language(key.language) {
            return Err(ContentError::LanguageNotAllowed {
                country: key.country,
                language: key.language,
            });
        }
        self.repository
            .get_by_key(key)
            .await?
            .ok_or(ContentError::NotFoundForKey(key))
    }

    /// Total lookup for page rendering. A missing override and a failed
    /// read both resolve to the static fallback; the failure is logged
    /// but never surfaces.
    #[instrument(skip(self))]
    pub async fn resolve_or_fallback(&self, key: ContentKey) -> ContentLookup {
        match self.repository.get_by_key(key).await {
            Ok(Some(content)) => ContentLookup::Override(content),
            Ok(None) => ContentLookup::Fallback,
            Err(err) => {
                tracing::warn!(?key, %err, "override lookup failed, rendering fallback");
                ContentLookup::Fallback
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, country: Option<Country>) -> ContentResult<Vec<PageContent>> {
        self.repository.list(country).await
    }

    /// Update by id. Key fields are immutable; an identical retry lands
    /// on the same stored state.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: UpdatePageContent) -> ContentResult<PageContent> {
        input
            .validate()
            .map_err(|e| ContentError::Validation(e.to_string()))?;

        let mut existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ContentError::NotFound(id))?;
        existing.apply_update(input);
        self.repository.replace(existing).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ContentResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }
}

impl<R: ContentRepository> Clone for ContentService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
