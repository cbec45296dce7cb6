//! In-memory implementations for handler tests and local development.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::{AdminError, AdminResult};
use crate::models::{AdminLogEntry, AdminSession, AdminUser, LogFilter};
use crate::repository::{AdminUserRepository, LogRepository, SessionRepository};

fn lock_err(e: impl std::fmt::Display) -> AdminError {
    AdminError::Database(e.to_string())
}

#[derive(Default)]
pub struct MemoryAdminUserRepository {
    users: RwLock<HashMap<Uuid, AdminUser>>,
}

impl MemoryAdminUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdminUserRepository for MemoryAdminUserRepository {
    async fn get_by_email(&self, email: &str) -> AdminResult<Option<AdminUser>> {
        let users = self.users.read().map_err(lock_err)?;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn get_by_id(&self, id: Uuid) -> AdminResult<Option<AdminUser>> {
        let users = self.users.read().map_err(lock_err)?;
        Ok(users.get(&id).cloned())
    }

    async fn insert(&self, user: AdminUser) -> AdminResult<AdminUser> {
        let mut users = self.users.write().map_err(lock_err)?;
        users.insert(user.id, user.clone());
        Ok(user)
    }
}

#[derive(Default)]
pub struct MemorySessionRepository {
    sessions: RwLock<HashMap<String, AdminSession>>,
}

impl MemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for MemorySessionRepository {
    async fn insert(&self, session: AdminSession) -> AdminResult<AdminSession> {
        let mut sessions = self.sessions.write().map_err(lock_err)?;
        sessions.insert(session.token.clone(), session.clone());
        Ok(session)
    }

    async fn get(&self, token: &str) -> AdminResult<Option<AdminSession>> {
        let sessions = self.sessions.read().map_err(lock_err)?;
        Ok(sessions.get(token).cloned())
    }

    async fn delete(&self, token: &str) -> AdminResult<()> {
        let mut sessions = self.sessions.write().map_err(lock_err)?;
        sessions.remove(token);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryLogRepository {
    entries: RwLock<Vec<AdminLogEntry>>,
}

impl MemoryLogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LogRepository for MemoryLogRepository {
    async fn insert(&self, entry: AdminLogEntry) -> AdminResult<AdminLogEntry> {
        let mut entries = self.entries.write().map_err(lock_err)?;
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn list(&self, filter: LogFilter) -> AdminResult<Vec<AdminLogEntry>> {
        let entries = self.entries.read().map_err(lock_err)?;
        let mut all = entries.clone();
        all.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(all
            .into_iter()
            .skip(filter.offset as usize)
            .take(filter.limit.max(0) as usize)
            .collect())
    }
}
