//! MongoDB implementation of BlogRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use locale::Country;
use mongodb::bson::{doc, to_bson, Bson};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{BlogError, BlogResult};
use crate::models::{BlogPost, BlogPostFilter};
use crate::repository::BlogRepository;

const COLLECTION: &str = "blog_posts";

pub struct MongoBlogRepository {
    collection: Collection<BlogPost>,
}

const DUPLICATE_KEY_CODE: i32 = 11000;

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};
    matches!(
        &*err.kind,
        ErrorKind::Write(WriteFailure::WriteError(we)) if we.code == DUPLICATE_KEY_CODE
    )
}

impl MongoBlogRepository {
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection::<BlogPost>(COLLECTION),
        }
    }

    /// Create the unique slug index. Run once at startup.
    pub async fn ensure_indexes(db: &Database) -> BlogResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "slug": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        db.collection::<BlogPost>(COLLECTION)
            .create_index(index)
            .await?;
        Ok(())
    }

    fn published_filter(filter: &BlogPostFilter) -> mongodb::bson::Document {
        let mut doc = doc! { "published": true };

        if let Some(country) = filter.country {
            doc.insert("countries", doc! { "$in": [country.code()] });
        }
        if let Some(ref category) = filter.category {
            doc.insert("category", category);
        }
        if let Some(ref tag) = filter.tag {
            doc.insert("tags", doc! { "$in": [tag] });
        }

        doc
    }
}

#[async_trait]
impl BlogRepository for MongoBlogRepository {
    #[instrument(skip(self, post), fields(slug = %post.slug))]
    async fn insert(&self, post: BlogPost) -> BlogResult<BlogPost> {
        self.collection.insert_one(&post).await.map_err(|err| {
            if is_duplicate_key(&err) {
                BlogError::DuplicateSlug(post.slug.clone())
            } else {
                err.into()
            }
        })?;

        tracing::info!(post_id = %post.id, "blog post created");
        Ok(post)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> BlogResult<Option<BlogPost>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        Ok(self.collection.find_one(filter).await?)
    }

    #[instrument(skip(self))]
    async fn get_published_by_slug(
        &self,
        slug: &str,
        country: Country,
    ) -> BlogResult<Option<BlogPost>> {
        let filter = doc! {
            "slug": slug,
            "published": true,
            "countries": { "$in": [country.code()] },
        };
        Ok(self.collection.find_one(filter).await?)
    }

    #[instrument(skip(self))]
    async fn get_by_slug(&self, slug: &str) -> BlogResult<Option<BlogPost>> {
        Ok(self.collection.find_one(doc! { "slug": slug }).await?)
    }

    #[instrument(skip(self))]
    async fn list_published(&self, filter: BlogPostFilter) -> BlogResult<Vec<BlogPost>> {
        let mongo_filter = Self::published_filter(&filter);
        let options = mongodb::options::FindOptions::builder()
            .limit(filter.limit)
            .skip(filter.offset)
            .sort(doc! { "created_at": -1 })
            .build();
        let cursor = self
            .collection
            .find(mongo_filter)
            .with_options(options)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    #[instrument(skip(self))]
    async fn list_featured(&self, country: Country) -> BlogResult<Vec<BlogPost>> {
        let filter = doc! {
            "published": true,
            "featured": true,
            "countries": { "$in": [country.code()] },
        };
        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();
        let cursor = self.collection.find(filter).with_options(options).await?;
        Ok(cursor.try_collect().await?)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> BlogResult<Vec<BlogPost>> {
        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();
        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        Ok(cursor.try_collect().await?)
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn replace(&self, post: BlogPost) -> BlogResult<BlogPost> {
        let filter = doc! { "_id": to_bson(&post.id).unwrap_or(Bson::Null) };
        let result = self
            .collection
            .replace_one(filter, &post)
            .await
            .map_err(|err| {
                if is_duplicate_key(&err) {
                    BlogError::DuplicateSlug(post.slug.clone())
                } else {
                    err.into()
                }
            })?;
        if result.matched_count == 0 {
            return Err(BlogError::NotFound(post.id));
        }
        tracing::info!(post_id = %post.id, "blog post updated");
        Ok(post)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> BlogResult<bool> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let result = self.collection.delete_one(filter).await?;
        if result.deleted_count == 0 {
            return Err(BlogError::NotFound(id));
        }
        tracing::info!(post_id = %id, "blog post deleted");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_filter_always_requires_published() {
        let doc = MongoBlogRepository::published_filter(&BlogPostFilter::default());
        assert_eq!(doc.get_bool("published").unwrap(), true);
    }

    #[test]
    fn published_filter_scopes_to_country() {
        let filter = BlogPostFilter {
            country: Some(Country::Mk),
            ..Default::default()
        };
        let doc = MongoBlogRepository::published_filter(&filter);
        assert!(doc.contains_key("countries"));
    }

    #[test]
    fn published_filter_includes_category_and_tag() {
        let filter = BlogPostFilter {
            category: Some("funding".to_string()),
            tag: Some("ipard".to_string()),
            ..Default::default()
        };
        let doc = MongoBlogRepository::published_filter(&filter);
        assert!(doc.contains_key("category"));
        assert!(doc.contains_key("tags"));
    }
}
