//! In-memory implementation of BlogRepository for handler tests and
//! local development.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use locale::Country;
use uuid::Uuid;

use crate::error::{BlogError, BlogResult};
use crate::models::{BlogPost, BlogPostFilter};
use crate::repository::BlogRepository;

#[derive(Default)]
pub struct MemoryBlogRepository {
    posts: RwLock<HashMap<Uuid, BlogPost>>,
}

impl MemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_err(e: impl std::fmt::Display) -> BlogError {
    BlogError::Database(e.to_string())
}

fn newest_first(posts: &mut [BlogPost]) {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[async_trait]
impl BlogRepository for MemoryBlogRepository {
    async fn insert(&self, post: BlogPost) -> BlogResult<BlogPost> {
        let mut posts = self.posts.write().map_err(lock_err)?;
        if posts.values().any(|p| p.slug == post.slug) {
            return Err(BlogError::DuplicateSlug(post.slug.clone()));
        }
        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn get_by_id(&self, id: Uuid) -> BlogResult<Option<BlogPost>> {
        let posts = self.posts.read().map_err(lock_err)?;
        Ok(posts.get(&id).cloned())
    }

    async fn get_published_by_slug(
        &self,
        slug: &str,
        country: Country,
    ) -> BlogResult<Option<BlogPost>> {
        let posts = self.posts.read().map_err(lock_err)?;
        Ok(posts
            .values()
            .find(|p| p.slug == slug && p.visible_in(country))
            .cloned())
    }

    async fn get_by_slug(&self, slug: &str) -> BlogResult<Option<BlogPost>> {
        let posts = self.posts.read().map_err(lock_err)?;
        Ok(posts.values().find(|p| p.slug == slug).cloned())
    }

    async fn list_published(&self, filter: BlogPostFilter) -> BlogResult<Vec<BlogPost>> {
        let posts = self.posts.read().map_err(lock_err)?;
        let mut matched: Vec<BlogPost> = posts
            .values()
            .filter(|p| p.published)
            .filter(|p| filter.country.is_none_or(|c| p.countries.contains(&c)))
            .filter(|p| filter.category.as_ref().is_none_or(|c| &p.category == c))
            .filter(|p| filter.tag.as_ref().is_none_or(|t| p.tags.contains(t)))
            .cloned()
            .collect();
        newest_first(&mut matched);
        Ok(matched
            .into_iter()
            .skip(filter.offset as usize)
            .take(filter.limit.max(0) as usize)
            .collect())
    }

    async fn list_featured(&self, country: Country) -> BlogResult<Vec<BlogPost>> {
        let posts = self.posts.read().map_err(lock_err)?;
        let mut matched: Vec<BlogPost> = posts
            .values()
            .filter(|p| p.featured && p.visible_in(country))
            .cloned()
            .collect();
        newest_first(&mut matched);
        Ok(matched)
    }

    async fn list_all(&self) -> BlogResult<Vec<BlogPost>> {
        let posts = self.posts.read().map_err(lock_err)?;
        let mut all: Vec<BlogPost> = posts.values().cloned().collect();
        newest_first(&mut all);
        Ok(all)
    }

    async fn replace(&self, post: BlogPost) -> BlogResult<BlogPost> {
        let mut posts = self.posts.write().map_err(lock_err)?;
        if !posts.contains_key(&post.id) {
            return Err(BlogError::NotFound(post.id));
        }
        if posts.values().any(|p| p.slug == post.slug && p.id != post.id) {
            return Err(BlogError::DuplicateSlug(post.slug.clone()));
        }
        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> BlogResult<bool> {
        let mut posts = self.posts.write().map_err(lock_err)?;
        if posts.remove(&id).is_none() {
            return Err(BlogError::NotFound(id));
        }
        Ok(true)
    }
}
