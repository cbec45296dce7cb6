use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AdminResult;
use crate::models::{AdminLogEntry, AdminSession, AdminUser, LogFilter};

/// Data access interface for admin accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminUserRepository: Send + Sync {
    /// Lookup by lowercased email.
    async fn get_by_email(&self, email: &str) -> AdminResult<Option<AdminUser>>;

    async fn get_by_id(&self, id: Uuid) -> AdminResult<Option<AdminUser>>;

    async fn insert(&self, user: AdminUser) -> AdminResult<AdminUser>;
}

/// Data access interface for sessions, keyed by opaque token.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn insert(&self, session: AdminSession) -> AdminResult<AdminSession>;

    async fn get(&self, token: &str) -> AdminResult<Option<AdminSession>>;

    async fn delete(&self, token: &str) -> AdminResult<()>;
}

/// Data access interface for the persisted audit log. Insertions must
/// never fail the calling request; callers log and continue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LogRepository: Send + Sync {
    async fn insert(&self, entry: AdminLogEntry) -> AdminResult<AdminLogEntry>;

    /// Newest first.
    async fn list(&self, filter: LogFilter) -> AdminResult<Vec<AdminLogEntry>>;
}
