use chrono::{DateTime, Utc};
use locale::Country;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Contact-form submission, create-only from the public site.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactSubmission {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub country: Country,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactSubmission {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    #[validate(length(max = 200))]
    pub company: Option<String>,
    pub country: Country,
    #[validate(length(min = 10, max = 5000))]
    pub message: String,
}

/// Newsletter subscription. One row per email; unsubscribing flips
/// `active` instead of deleting.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewsletterSubscription {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Always stored lowercase
    pub email: String,
    pub country: Country,
    pub active: bool,
    pub subscribed_at: DateTime<Utc>,
    pub unsubscribed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SubscribeRequest {
    #[validate(email)]
    pub email: String,
    pub country: Country,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UnsubscribeRequest {
    #[validate(email)]
    pub email: String,
}

impl ContactSubmission {
    pub fn new(input: CreateContactSubmission) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            company: input.company,
            country: input.country,
            message: input.message,
            submitted_at: Utc::now(),
        }
    }
}

impl NewsletterSubscription {
    pub fn new(email: String, country: Country) -> Self {
        Self {
            id: Uuid::now_v7(),
            email,
            country,
            active: true,
            subscribed_at: Utc::now(),
            unsubscribed_at: None,
        }
    }

    pub fn reactivate(&mut self, country: Country) {
        self.active = true;
        self.country = country;
        self.subscribed_at = Utc::now();
        self.unsubscribed_at = None;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.unsubscribed_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_message_length_is_enforced() {
        let input = CreateContactSubmission {
            name: "Marko".to_string(),
            email: "marko@example.com".to_string(),
            phone: None,
            company: None,
            country: Country::Rs,
            message: "short".to_string(),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn subscription_lifecycle_flags() {
        let mut sub = NewsletterSubscription::new("ana@example.com".to_string(), Country::Me);
        assert!(sub.active);
        assert!(sub.unsubscribed_at.is_none());

        sub.deactivate();
        assert!(!sub.active);
        assert!(sub.unsubscribed_at.is_some());

        sub.reactivate(Country::Ba);
        assert!(sub.active);
        assert_eq!(sub.country, Country::Ba);
        assert!(sub.unsubscribed_at.is_none());
    }
}
