use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Counter entry shown on the public site, ordered by `sort_order`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Achievement {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub label: String,
    pub value: i64,
    /// Display suffix, e.g. "+" or "%"
    pub suffix: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAchievement {
    #[validate(length(min = 1, max = 200))]
    pub label: String,
    #[validate(range(min = 0))]
    pub value: i64,
    #[validate(length(max = 10))]
    pub suffix: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAchievement {
    #[validate(length(min = 1, max = 200))]
    pub label: Option<String>,
    #[validate(range(min = 0))]
    pub value: Option<i64>,
    #[validate(length(max = 10))]
    pub suffix: Option<String>,
    pub sort_order: Option<i32>,
}

impl Achievement {
    pub fn new(input: CreateAchievement) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            label: input.label,
            value: input.value,
            suffix: input.suffix,
            sort_order: input.sort_order,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, update: UpdateAchievement) {
        if let Some(label) = update.label {
            self.label = label;
        }
        if let Some(value) = update.value {
            self.value = value;
        }
        if let Some(suffix) = update.suffix {
            self.suffix = Some(suffix);
        }
        if let Some(sort_order) = update.sort_order {
            self.sort_order = sort_order;
        }
        self.updated_at = Utc::now();
    }
}
