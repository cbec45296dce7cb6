//! Outreach Domain
//!
//! Public contact-form submissions and newsletter subscriptions.
//! Everything here is write-heavy from the public site and read-only
//! from the admin panel.

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongo;
pub mod repository;
pub mod service;

pub use error::{OutreachError, OutreachResult};
pub use handlers::{admin_router, public_router, AdminApiDoc, PublicApiDoc};
pub use memory::{MemoryContactRepository, MemoryNewsletterRepository};
pub use models::{
    ContactSubmission, CreateContactSubmission, NewsletterSubscription, SubscribeRequest,
    UnsubscribeRequest,
};
pub use mongo::{MongoContactRepository, MongoNewsletterRepository};
pub use repository::{ContactRepository, NewsletterRepository};
pub use service::OutreachService;
