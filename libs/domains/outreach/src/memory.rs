//! In-memory implementations for handler tests and local development.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{OutreachError, OutreachResult};
use crate::models::{ContactSubmission, NewsletterSubscription};
use crate::repository::{ContactRepository, NewsletterRepository};

fn lock_err(e: impl std::fmt::Display) -> OutreachError {
    OutreachError::Database(e.to_string())
}

#[derive(Default)]
pub struct MemoryContactRepository {
    submissions: RwLock<Vec<ContactSubmission>>,
}

impl MemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for MemoryContactRepository {
    async fn insert(&self, submission: ContactSubmission) -> OutreachResult<ContactSubmission> {
        let mut submissions = self.submissions.write().map_err(lock_err)?;
        submissions.push(submission.clone());
        Ok(submission)
    }

    async fn list(&self) -> OutreachResult<Vec<ContactSubmission>> {
        let submissions = self.submissions.read().map_err(lock_err)?;
        let mut all = submissions.clone();
        all.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(all)
    }
}

#[derive(Default)]
pub struct MemoryNewsletterRepository {
    subscriptions: RwLock<Vec<NewsletterSubscription>>,
}

impl MemoryNewsletterRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NewsletterRepository for MemoryNewsletterRepository {
    async fn get_by_email(&self, email: &str) -> OutreachResult<Option<NewsletterSubscription>> {
        let subscriptions = self.subscriptions.read().map_err(lock_err)?;
        Ok(subscriptions.iter().find(|s| s.email == email).cloned())
    }

    async fn insert(
        &self,
        subscription: NewsletterSubscription,
    ) -> OutreachResult<NewsletterSubscription> {
        let mut subscriptions = self.subscriptions.write().map_err(lock_err)?;
        if subscriptions.iter().any(|s| s.email == subscription.email) {
            return Err(OutreachError::AlreadySubscribed(subscription.email.clone()));
        }
        subscriptions.push(subscription.clone());
        Ok(subscription)
    }

    async fn replace(
        &self,
        subscription: NewsletterSubscription,
    ) -> OutreachResult<NewsletterSubscription> {
        let mut subscriptions = self.subscriptions.write().map_err(lock_err)?;
        match subscriptions.iter_mut().find(|s| s.id == subscription.id) {
            Some(existing) => {
                *existing = subscription.clone();
                Ok(subscription)
            }
            None => Err(OutreachError::NotSubscribed(subscription.email.clone())),
        }
    }

    async fn list(&self) -> OutreachResult<Vec<NewsletterSubscription>> {
        let subscriptions = self.subscriptions.read().map_err(lock_err)?;
        let mut all = subscriptions.clone();
        all.sort_by(|a, b| b.subscribed_at.cmp(&a.subscribed_at));
        Ok(all)
    }
}
