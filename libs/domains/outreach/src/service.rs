//! Outreach service - contact submissions and newsletter lifecycle.

use std::sync::Arc;

use tracing::instrument;
use validator::Validate;

use crate::error::{OutreachError, OutreachResult};
use crate::models::{
    ContactSubmission, CreateContactSubmission, NewsletterSubscription, SubscribeRequest,
    UnsubscribeRequest,
};
use crate::repository::{ContactRepository, NewsletterRepository};

pub struct OutreachService<C: ContactRepository, N: NewsletterRepository> {
    contacts: Arc<C>,
    newsletter: Arc<N>,
}

impl<C: ContactRepository, N: NewsletterRepository> OutreachService<C, N> {
    pub fn new(contacts: C, newsletter: N) -> Self {
        Self {
            contacts: Arc::new(contacts),
            newsletter: Arc::new(newsletter),
        }
    }

    #[instrument(skip(self, input), fields(country = %input.country))]
    pub async fn submit_contact(
        &self,
        input: CreateContactSubmission,
    ) -> OutreachResult<ContactSubmission> {
        input
            .validate()
            .map_err(|e| OutreachError::Validation(e.to_string()))?;
        self.contacts.insert(ContactSubmission::new(input)).await
    }

    #[instrument(skip(self))]
    pub async fn list_contacts(&self) -> OutreachResult<Vec<ContactSubmission>> {
        self.contacts.list().await
    }

    /// Subscribe an email. An active subscription is a conflict; an
    /// unsubscribed one is reactivated in place.
    #[instrument(skip(self, input), fields(country = %input.country))]
    pub async fn subscribe(
        &self,
        input: SubscribeRequest,
    ) -> OutreachResult<NewsletterSubscription> {
        input
            .validate()
            .map_err(|e| OutreachError::Validation(e.to_string()))?;

        let email = input.email.to_lowercase();
        match self.newsletter.get_by_email(&email).await? {
            Some(existing) if existing.active => Err(OutreachError::AlreadySubscribed(email)),
            Some(mut existing) => {
                existing.reactivate(input.country);
                self.newsletter.replace(existing).await
            }
            None => {
                self.newsletter
                    .insert(NewsletterSubscription::new(email, input.country))
                    .await
            }
        }
    }

    /// Unsubscribe an email. Missing or already-inactive subscriptions
    /// answer not-found.
    #[instrument(skip(self, input))]
    pub async fn unsubscribe(&self, input: UnsubscribeRequest) -> OutreachResult<()> {
        input
            .validate()
            .map_err(|e| OutreachError::Validation(e.to_string()))?;

        let email = input.email.to_lowercase();
        match self.newsletter.get_by_email(&email).await? {
            Some(mut existing) if existing.active => {
                existing.deactivate();
                self.newsletter.replace(existing).await?;
                Ok(())
            }
            _ => Err(OutreachError::NotSubscribed(email)),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_subscriptions(&self) -> OutreachResult<Vec<NewsletterSubscription>> {
        self.newsletter.list().await
    }
}

impl<C: ContactRepository, N: NewsletterRepository> Clone for OutreachService<C, N> {
    fn clone(&self) -> Self {
        Self {
            contacts: Arc::clone(&self.contacts),
            newsletter: Arc::clone(&self.newsletter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryContactRepository, MemoryNewsletterRepository};
    use locale::Country;

    fn service() -> OutreachService<MemoryContactRepository, MemoryNewsletterRepository> {
        OutreachService::new(
            MemoryContactRepository::new(),
            MemoryNewsletterRepository::new(),
        )
    }

    fn subscribe_req(email: &str) -> SubscribeRequest {
        SubscribeRequest {
            email: email.to_string(),
            country: Country::Rs,
        }
    }

    #[tokio::test]
    async fn invalid_contact_leaves_no_record() {
        let service = service();
        let input = CreateContactSubmission {
            name: String::new(),
            email: "not-an-email".to_string(),
            phone: None,
            company: None,
            country: Country::Rs,
            message: "short".to_string(),
        };

        assert!(matches!(
            service.submit_contact(input).await,
            Err(OutreachError::Validation(_))
        ));
        assert!(service.list_contacts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn double_subscribe_conflicts_without_duplicate() {
        let service = service();
        service.subscribe(subscribe_req("ana@example.com")).await.unwrap();

        let err = service
            .subscribe(subscribe_req("Ana@Example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, OutreachError::AlreadySubscribed(_)));

        let all = service.list_subscriptions().await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].active);
    }

    #[tokio::test]
    async fn unsubscribe_then_subscribe_reactivates() {
        let service = service();
        let original = service.subscribe(subscribe_req("ana@example.com")).await.unwrap();

        service
            .unsubscribe(UnsubscribeRequest {
                email: "ana@example.com".to_string(),
            })
            .await
            .unwrap();

        let reactivated = service
            .subscribe(SubscribeRequest {
                email: "ana@example.com".to_string(),
                country: Country::Mk,
            })
            .await
            .unwrap();

        assert_eq!(reactivated.id, original.id);
        assert!(reactivated.active);
        assert_eq!(reactivated.country, Country::Mk);
        assert_eq!(service.list_subscriptions().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unsubscribe_unknown_email_is_not_found() {
        let service = service();
        let err = service
            .unsubscribe(UnsubscribeRequest {
                email: "ghost@example.com".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, OutreachError::NotSubscribed(_)));
    }

    #[tokio::test]
    async fn emails_are_stored_lowercase() {
        let service = service();
        let sub = service.subscribe(subscribe_req("MiXeD@Example.COM")).await.unwrap();
        assert_eq!(sub.email, "mixed@example.com");
    }
}
