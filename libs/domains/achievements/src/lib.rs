//! Achievements Domain
//!
//! Ordered counters shown on the public site ("120+ business plans",
//! "95% approval rate"). Publicly listed, admin-managed.

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongo;
pub mod repository;
pub mod service;

pub use error::{AchievementError, AchievementResult};
pub use handlers::{admin_router, public_router, AdminApiDoc, PublicApiDoc};
pub use memory::MemoryAchievementRepository;
pub use models::{Achievement, CreateAchievement, UpdateAchievement};
pub use mongo::MongoAchievementRepository;
pub use repository::AchievementRepository;
pub use service::AchievementService;
