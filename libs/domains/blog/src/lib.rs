//! Blog Domain
//!
//! Admin-authored blog posts with unique slugs, scoped to one or more
//! countries. The public surface only ever sees published posts for the
//! requesting country; drafts and other countries' posts stay invisible.

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongo;
pub mod repository;
pub mod service;

pub use error::{BlogError, BlogResult};
pub use handlers::{admin_router, public_router, AdminApiDoc, PublicApiDoc};
pub use memory::MemoryBlogRepository;
pub use models::{BlogPost, BlogPostFilter, CreateBlogPost, UpdateBlogPost};
pub use mongo::MongoBlogRepository;
pub use repository::BlogRepository;
pub use service::BlogService;
