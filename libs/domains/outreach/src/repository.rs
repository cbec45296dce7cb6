use async_trait::async_trait;

use crate::error::OutreachResult;
use crate::models::{ContactSubmission, NewsletterSubscription};

/// Data access interface for contact submissions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert(&self, submission: ContactSubmission) -> OutreachResult<ContactSubmission>;

    /// All submissions, newest first. Admin listing.
    async fn list(&self) -> OutreachResult<Vec<ContactSubmission>>;
}

/// Data access interface for newsletter subscriptions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    /// Lookup by lowercased email.
    async fn get_by_email(&self, email: &str) -> OutreachResult<Option<NewsletterSubscription>>;

    async fn insert(
        &self,
        subscription: NewsletterSubscription,
    ) -> OutreachResult<NewsletterSubscription>;

    /// Replace the stored subscription (reactivation, unsubscription).
    async fn replace(
        &self,
        subscription: NewsletterSubscription,
    ) -> OutreachResult<NewsletterSubscription>;

    /// All subscriptions, newest first. Admin listing.
    async fn list(&self) -> OutreachResult<Vec<NewsletterSubscription>>;
}
