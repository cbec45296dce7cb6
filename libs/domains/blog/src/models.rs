use chrono::{DateTime, Utc};
use locale::Country;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Slug shape: lowercase alphanumeric runs joined by single hyphens
static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());

fn validate_slug(slug: &str) -> Result<(), validator::ValidationError> {
    if !SLUG_PATTERN.is_match(slug) {
        return Err(validator::ValidationError::new("invalid_slug"));
    }
    Ok(())
}

fn validate_countries(countries: &Vec<Country>) -> Result<(), validator::ValidationError> {
    if countries.is_empty() {
        return Err(validator::ValidationError::new("empty_countries"));
    }
    Ok(())
}

/// Blog post entity stored in MongoDB.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BlogPost {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub title: String,
    /// URL-safe unique identifier, e.g. `ipard-funding-guide`
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: Option<String>,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Countries the post appears in; never empty
    pub countries: Vec<Country>,
    pub featured: bool,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPost {
    #[validate(length(min = 1, max = 300))]
    pub title: String,
    #[validate(length(min = 1, max = 200), custom(function = "validate_slug"))]
    pub slug: String,
    #[validate(length(min = 1, max = 1000))]
    pub excerpt: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[validate(url)]
    pub image_url: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(custom(function = "validate_countries"))]
    pub countries: Vec<Country>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogPost {
    #[validate(length(min = 1, max = 300))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 200), custom(function = "validate_slug"))]
    pub slug: Option<String>,
    #[validate(length(min = 1, max = 1000))]
    pub excerpt: Option<String>,
    #[validate(length(min = 1))]
    pub content: Option<String>,
    #[validate(url)]
    pub image_url: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    #[validate(custom(function = "validate_countries"))]
    pub countries: Option<Vec<Country>>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
}

/// Query filters for public post listings.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BlogPostFilter {
    /// Requesting country; only posts scoped to it are returned
    pub country: Option<Country>,
    pub category: Option<String>,
    /// Posts carrying this tag
    pub tag: Option<String>,
    /// Maximum number of results
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Number of results to skip
    #[serde(default)]
    pub offset: u64,
}

fn default_limit() -> i64 {
    20
}

impl BlogPost {
    pub fn new(input: CreateBlogPost) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            title: input.title,
            slug: input.slug,
            excerpt: input.excerpt,
            content: input.content,
            image_url: input.image_url,
            category: input.category,
            tags: input.tags,
            countries: input.countries,
            featured: input.featured,
            published: input.published,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, update: UpdateBlogPost) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(slug) = update.slug {
            self.slug = slug;
        }
        if let Some(excerpt) = update.excerpt {
            self.excerpt = excerpt;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(image_url) = update.image_url {
            self.image_url = Some(image_url);
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(countries) = update.countries {
            self.countries = countries;
        }
        if let Some(featured) = update.featured {
            self.featured = featured;
        }
        if let Some(published) = update.published {
            self.published = published;
        }
        self.updated_at = Utc::now();
    }

    /// Whether the post is publicly visible for a country.
    pub fn visible_in(&self, country: Country) -> bool {
        self.published && self.countries.contains(&country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn sample_create() -> CreateBlogPost {
        CreateBlogPost {
            title: "IPARD funding guide".to_string(),
            slug: "ipard-funding-guide".to_string(),
            excerpt: "How to apply for IPARD funds".to_string(),
            content: "<p>Full guide</p>".to_string(),
            image_url: None,
            category: "funding".to_string(),
            tags: vec!["ipard".to_string()],
            countries: vec![Country::Rs, Country::Mk],
            featured: false,
            published: true,
        }
    }

    #[test]
    fn slug_validation_accepts_kebab_case() {
        let input = sample_create();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn slug_validation_rejects_bad_shapes() {
        for bad in ["UpperCase", "double--hyphen", "-leading", "trailing-", "spa ce"] {
            let mut input = sample_create();
            input.slug = bad.to_string();
            assert!(input.validate().is_err(), "accepted slug {bad:?}");
        }
    }

    #[test]
    fn countries_must_be_non_empty() {
        let mut input = sample_create();
        input.countries.clear();
        assert!(input.validate().is_err());
    }

    #[test]
    fn visibility_requires_published_and_country() {
        let mut post = BlogPost::new(sample_create());
        assert!(post.visible_in(Country::Rs));
        assert!(!post.visible_in(Country::Ba));

        post.published = false;
        assert!(!post.visible_in(Country::Rs));
    }
}
