use axum_helpers::{AuditEvent, AuditOutcome};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Admin account. Passwords are stored as argon2 hashes only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Always stored lowercase
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Server-side session backing the `admin_session` cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSession {
    /// Opaque token, also the cookie value (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "token")]
    pub token: String,
    pub admin_id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Persisted audit record of an administrative action.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminLogEntry {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// e.g. `admin.login`, `page_content.update`
    pub action: String,
    pub resource: Option<String>,
    pub resource_id: Option<String>,
    pub outcome: String,
    pub admin_email: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    #[serde(default)]
    pub details: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl AdminLogEntry {
    pub fn from_event(event: AuditEvent) -> Self {
        let outcome = match event.outcome {
            AuditOutcome::Success => "success",
            AuditOutcome::Failure => "failure",
            AuditOutcome::Denied => "denied",
        };
        Self {
            id: Uuid::now_v7(),
            action: event.action,
            resource: Some(event.resource),
            resource_id: event.resource_id,
            outcome: outcome.to_string(),
            admin_email: Some(event.actor),
            ip_address: event.ip_address,
            user_agent: event.user_agent,
            details: event.details.unwrap_or(serde_json::Value::Null),
            timestamp: event.timestamp,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Identity returned by `GET /admin/session`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionInfo {
    pub admin_id: Uuid,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

impl From<&AdminSession> for SessionInfo {
    fn from(session: &AdminSession) -> Self {
        Self {
            admin_id: session.admin_id,
            email: session.email.clone(),
            expires_at: session.expires_at,
        }
    }
}

/// Pagination for the audit log listing.
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogFilter {
    /// Maximum number of entries
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Number of entries to skip
    #[serde(default)]
    pub offset: u64,
}

impl Default for LogFilter {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            offset: 0,
        }
    }
}

fn default_limit() -> i64 {
    50
}
