//! Admin Domain
//!
//! Admin accounts, cookie-backed sessions, and the persisted audit log.
//! Sessions are opaque server-side tokens with a fixed lifetime; the
//! [`middleware`] module guards the admin routers, and the log
//! repository doubles as the [`axum_helpers::AuditSink`] every other
//! domain records into.

pub mod error;
pub mod handlers;
pub mod memory;
pub mod middleware;
pub mod models;
pub mod mongo;
pub mod repository;
pub mod service;

pub use error::{AdminError, AdminResult};
pub use handlers::{auth_router, logs_router, ApiDoc};
pub use memory::{MemoryAdminUserRepository, MemoryLogRepository, MemorySessionRepository};
pub use middleware::{require_session, SessionValidator};
pub use models::{
    AdminLogEntry, AdminSession, AdminUser, LoginRequest, LogFilter, SessionInfo,
};
pub use mongo::{MongoAdminUserRepository, MongoLogRepository, MongoSessionRepository};
pub use repository::{AdminUserRepository, LogRepository, SessionRepository};
pub use service::{session_ttl, AdminService, SESSION_TTL_HOURS};
