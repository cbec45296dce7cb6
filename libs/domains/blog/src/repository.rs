use async_trait::async_trait;
use locale::Country;
use uuid::Uuid;

use crate::error::BlogResult;
use crate::models::{BlogPost, BlogPostFilter};

/// Data access interface for blog posts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Insert a post. Fails on a duplicate slug.
    async fn insert(&self, post: BlogPost) -> BlogResult<BlogPost>;

    async fn get_by_id(&self, id: Uuid) -> BlogResult<Option<BlogPost>>;

    /// Published lookup by slug, scoped to the requesting country.
    async fn get_published_by_slug(
        &self,
        slug: &str,
        country: Country,
    ) -> BlogResult<Option<BlogPost>>;

    async fn get_by_slug(&self, slug: &str) -> BlogResult<Option<BlogPost>>;

    /// Published posts visible in the filter's country, newest first.
    async fn list_published(&self, filter: BlogPostFilter) -> BlogResult<Vec<BlogPost>>;

    /// Featured subset of the published posts for a country.
    async fn list_featured(&self, country: Country) -> BlogResult<Vec<BlogPost>>;

    /// Every post regardless of state. Admin listing, newest first.
    async fn list_all(&self) -> BlogResult<Vec<BlogPost>>;

    async fn replace(&self, post: BlogPost) -> BlogResult<BlogPost>;

    async fn delete(&self, id: Uuid) -> BlogResult<bool>;
}
