//! Blog service - business rules for posts.

use std::sync::Arc;

use locale::Country;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{BlogError, BlogResult};
use crate::models::{BlogPost, BlogPostFilter, CreateBlogPost, UpdateBlogPost};
use crate::repository::BlogRepository;

pub struct BlogService<R: BlogRepository> {
    repository: Arc<R>,
}

impl<R: BlogRepository> BlogService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(slug = %input.slug))]
    pub async fn create(&self, input: CreateBlogPost) -> BlogResult<BlogPost> {
        input
            .validate()
            .map_err(|e| BlogError::Validation(e.to_string()))?;

        if self.repository.get_by_slug(&input.slug).await?.is_some() {
            return Err(BlogError::DuplicateSlug(input.slug));
        }

        self.repository.insert(BlogPost::new(input)).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> BlogResult<BlogPost> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(BlogError::NotFound(id))
    }

    /// Public single-post lookup. Unpublished posts and posts not
    /// scoped to the country answer 404, same as a missing slug.
    #[instrument(skip(self))]
    pub async fn get_published(&self, slug: &str, country: Country) -> BlogResult<BlogPost> {
        self.repository
            .get_published_by_slug(slug, country)
            .await?
            .ok_or_else(|| BlogError::SlugNotFound(slug.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn list_published(&self, filter: BlogPostFilter) -> BlogResult<Vec<BlogPost>> {
        self.repository.list_published(filter).await
    }

    #[instrument(skip(self))]
    pub async fn list_featured(&self, country: Country) -> BlogResult<Vec<BlogPost>> {
        self.repository.list_featured(country).await
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> BlogResult<Vec<BlogPost>> {
        self.repository.list_all().await
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: UpdateBlogPost) -> BlogResult<BlogPost> {
        input
            .validate()
            .map_err(|e| BlogError::Validation(e.to_string()))?;

        let mut existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(BlogError::NotFound(id))?;

        if let Some(ref new_slug) = input.slug {
            if new_slug != &existing.slug
                && self.repository.get_by_slug(new_slug).await?.is_some()
            {
                return Err(BlogError::DuplicateSlug(new_slug.clone()));
            }
        }

        existing.apply_update(input);
        self.repository.replace(existing).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> BlogResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }
}

impl<R: BlogRepository> Clone for BlogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockBlogRepository;

    fn sample_create() -> CreateBlogPost {
        CreateBlogPost {
            title: "IPARD funding guide".to_string(),
            slug: "ipard-funding-guide".to_string(),
            excerpt: "How to apply".to_string(),
            content: "<p>Guide</p>".to_string(),
            image_url: None,
            category: "funding".to_string(),
            tags: vec![],
            countries: vec![Country::Rs],
            featured: false,
            published: true,
        }
    }

    #[tokio::test]
    async fn create_rejects_duplicate_slug() {
        let mut repo = MockBlogRepository::new();
        let existing = BlogPost::new(sample_create());
        repo.expect_get_by_slug()
            .returning(move |_| Ok(Some(existing.clone())));
        let service = BlogService::new(repo);

        let err = service.create(sample_create()).await.unwrap_err();
        assert!(matches!(err, BlogError::DuplicateSlug(_)));
    }

    #[tokio::test]
    async fn create_rejects_empty_countries() {
        let repo = MockBlogRepository::new();
        let service = BlogService::new(repo);

        let mut input = sample_create();
        input.countries.clear();
        let err = service.create(input).await.unwrap_err();
        assert!(matches!(err, BlogError::Validation(_)));
    }

    #[tokio::test]
    async fn published_lookup_misses_are_slug_not_found() {
        let mut repo = MockBlogRepository::new();
        repo.expect_get_published_by_slug().returning(|_, _| Ok(None));
        let service = BlogService::new(repo);

        let err = service
            .get_published("missing-post", Country::Rs)
            .await
            .unwrap_err();
        assert!(matches!(err, BlogError::SlugNotFound(_)));
    }

    #[tokio::test]
    async fn update_checks_slug_conflicts_only_on_change() {
        let existing = BlogPost::new(sample_create());
        let id = existing.id;

        let mut repo = MockBlogRepository::new();
        let fetched = existing.clone();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(fetched.clone())));
        repo.expect_replace().returning(Ok);
        // get_by_slug must not be called when the slug is unchanged
        repo.expect_get_by_slug().times(0);
        let service = BlogService::new(repo);

        let updated = service
            .update(
                id,
                UpdateBlogPost {
                    slug: Some(existing.slug.clone()),
                    featured: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(updated.featured);
    }
}
