use chrono::{DateTime, Utc};
use locale::{Country, Language};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Pages that accept admin-authored overrides.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PageType {
    Home,
    About,
    Services,
    Ipard,
    BusinessPlans,
    Contact,
}

/// Unique lookup key for an override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ContentKey {
    pub country: Country,
    pub page_type: PageType,
    pub language: Language,
}

/// Admin-authored page override stored in MongoDB.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageContent {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub country: Country,
    pub page_type: PageType,
    pub language: Language,
    pub title: String,
    /// HTML blob rendered in place of the static page
    pub content: String,
    pub meta_description: Option<String>,
    /// Free-form metadata for the frontend (hero image, CTA labels, ...)
    #[serde(default)]
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Outcome of a public override lookup. Never an error: a missing
/// override or a failed read both mean "render the static page".
#[derive(Debug, Clone)]
pub enum ContentLookup {
    Override(PageContent),
    Fallback,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageContent {
    pub country: Country,
    pub page_type: PageType,
    pub language: Language,
    #[validate(length(min = 1, max = 300))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[validate(length(max = 500))]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePageContent {
    #[validate(length(min = 1, max = 300))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub content: Option<String>,
    #[validate(length(max = 500))]
    pub meta_description: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

impl PageContent {
    pub fn new(input: CreatePageContent) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            country: input.country,
            page_type: input.page_type,
            language: input.language,
            title: input.title,
            content: input.content,
            meta_description: input.meta_description,
            metadata: input.metadata,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn key(&self) -> ContentKey {
        ContentKey {
            country: self.country,
            page_type: self.page_type,
            language: self.language,
        }
    }

    pub fn apply_update(&mut self, update: UpdatePageContent) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(meta_description) = update.meta_description {
            self.meta_description = Some(meta_description);
        }
        if let Some(metadata) = update.metadata {
            self.metadata = metadata;
        }
        self.updated_at = Utc::now();
    }
}
