//! Admin service - credentials, session lifecycle, audit log.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use async_trait::async_trait;
use axum_helpers::{AuditEvent, AuditSink};
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AdminError, AdminResult};
use crate::models::{AdminLogEntry, AdminSession, AdminUser, LogFilter, LoginRequest, SessionInfo};
use crate::repository::{AdminUserRepository, LogRepository, SessionRepository};

/// Sessions live for 24 hours from login.
pub const SESSION_TTL_HOURS: i64 = 24;

pub fn session_ttl() -> Duration {
    Duration::hours(SESSION_TTL_HOURS)
}

pub struct AdminService<U, S, L>
where
    U: AdminUserRepository,
    S: SessionRepository,
    L: LogRepository,
{
    users: Arc<U>,
    sessions: Arc<S>,
    logs: Arc<L>,
}

impl<U, S, L> AdminService<U, S, L>
where
    U: AdminUserRepository,
    S: SessionRepository,
    L: LogRepository + 'static,
{
    pub fn new(users: U, sessions: S, logs: L) -> Self {
        Self {
            users: Arc::new(users),
            sessions: Arc::new(sessions),
            logs: Arc::new(logs),
        }
    }

    /// A sink other domains can record audit events into.
    pub fn audit_sink(&self) -> Arc<dyn AuditSink> {
        Arc::new(LogAuditSink {
            logs: Arc::clone(&self.logs),
        })
    }

    /// Create the account if the email is unused. Bootstrap path, run
    /// at startup from configuration.
    #[instrument(skip(self, password))]
    pub async fn ensure_admin(&self, email: &str, name: &str, password: &str) -> AdminResult<()> {
        let email = email.to_lowercase();
        if self.users.get_by_email(&email).await?.is_some() {
            return Ok(());
        }

        let now = Utc::now();
        let user = AdminUser {
            id: Uuid::now_v7(),
            email,
            name: name.to_string(),
            password_hash: hash_password(password)?,
            active: true,
            created_at: now,
            updated_at: now,
        };
        self.users.insert(user).await?;
        Ok(())
    }

    /// Verify credentials and open a session. Both unknown emails and
    /// wrong passwords answer the same way.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginRequest) -> AdminResult<AdminSession> {
        input
            .validate()
            .map_err(|e| AdminError::Validation(e.to_string()))?;

        let email = input.email.to_lowercase();
        let user = self
            .users
            .get_by_email(&email)
            .await?
            .filter(|u| u.active)
            .ok_or(AdminError::InvalidCredentials)?;

        if !verify_password(&input.password, &user.password_hash)? {
            return Err(AdminError::InvalidCredentials);
        }

        let now = Utc::now();
        let session = AdminSession {
            token: generate_token(),
            admin_id: user.id,
            email: user.email,
            created_at: now,
            expires_at: now + session_ttl(),
        };
        self.sessions.insert(session.clone()).await?;

        tracing::info!(admin_id = %session.admin_id, "admin logged in");
        Ok(session)
    }

    /// Invalidate a session server-side. Unknown tokens are fine.
    #[instrument(skip(self, token))]
    pub async fn logout(&self, token: &str) -> AdminResult<()> {
        self.sessions.delete(token).await
    }

    /// Resolve a token to a live session. Expired sessions are deleted
    /// on sight.
    #[instrument(skip(self, token))]
    pub async fn validate_session(&self, token: &str) -> AdminResult<AdminSession> {
        let session = self
            .sessions
            .get(token)
            .await?
            .ok_or(AdminError::InvalidSession)?;

        if session.is_expired() {
            self.sessions.delete(token).await?;
            return Err(AdminError::InvalidSession);
        }

        Ok(session)
    }

    pub async fn session_info(&self, token: &str) -> AdminResult<SessionInfo> {
        let session = self.validate_session(token).await?;
        Ok(SessionInfo::from(&session))
    }

    #[instrument(skip(self))]
    pub async fn list_logs(&self, filter: LogFilter) -> AdminResult<Vec<AdminLogEntry>> {
        self.logs.list(filter).await
    }

    /// Persist an audit event directly. Failures are logged, never
    /// propagated.
    pub async fn record_event(&self, event: AuditEvent) {
        let entry = AdminLogEntry::from_event(event);
        if let Err(err) = self.logs.insert(entry).await {
            tracing::error!(%err, "failed to persist audit log entry");
        }
    }
}

impl<U, S, L> Clone for AdminService<U, S, L>
where
    U: AdminUserRepository,
    S: SessionRepository,
    L: LogRepository,
{
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            sessions: Arc::clone(&self.sessions),
            logs: Arc::clone(&self.logs),
        }
    }
}

/// AuditSink over the log repository. Persistence failures are logged
/// and swallowed so audit writes never fail the originating request.
struct LogAuditSink<L: LogRepository> {
    logs: Arc<L>,
}

#[async_trait]
impl<L: LogRepository> AuditSink for LogAuditSink<L> {
    async fn record(&self, event: AuditEvent) {
        let entry = AdminLogEntry::from_event(event);
        if let Err(err) = self.logs.insert(entry).await {
            tracing::error!(%err, "failed to persist audit log entry");
        }
    }
}

fn generate_token() -> String {
    format!(
        "{}{}",
        Uuid::new_v4().simple(),
        Uuid::new_v4().simple()
    )
}

fn hash_password(password: &str) -> AdminResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AdminError::PasswordHash(e.to_string()))
}

fn verify_password(password: &str, hash: &str) -> AdminResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| AdminError::PasswordHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
