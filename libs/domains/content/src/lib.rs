//! Page Content Domain
//!
//! Admin-authored page overrides keyed by (country, page type, language).
//! When an override exists for a triple the public site renders it in
//! place of the page's static composition; when none exists the lookup
//! reports a fallback rather than an error.
//!
//! Layering follows the house pattern: models → repository (trait +
//! MongoDB/in-memory implementations) → service → handlers.

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongo;
pub mod repository;
pub mod service;

pub use error::{ContentError, ContentResult};
pub use handlers::{admin_router, public_router, AdminApiDoc, PublicApiDoc};
pub use memory::MemoryContentRepository;
pub use models::{ContentKey, ContentLookup, CreatePageContent, PageContent, PageType, UpdatePageContent};
pub use mongo::MongoContentRepository;
pub use repository::ContentRepository;
pub use service::ContentService;
