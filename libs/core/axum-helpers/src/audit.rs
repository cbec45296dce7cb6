//! Audit events for administrative actions.
//!
//! Admin handlers build an [`AuditEvent`] per mutating operation, emit
//! it to the structured log via [`AuditEvent::log`], and hand it to an
//! [`AuditSink`] for durable storage. The sink lives behind a trait so
//! domain crates can record events without depending on the crate that
//! owns the audit collection.

use axum::http::HeaderMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditOutcome {
    Success,
    Failure,
    /// Request carried no valid session or insufficient permissions
    Denied,
}

/// A single administrative action worth keeping a record of.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Username of the admin performing the action
    pub actor: String,
    /// Verb describing the action, e.g. "create", "update", "delete"
    pub action: String,
    /// Resource kind, e.g. "page_content", "blog_post"
    pub resource: String,
    /// Identifier of the affected resource, when one exists
    pub resource_id: Option<String>,
    pub outcome: AuditOutcome,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    /// Free-form context, e.g. the fields that changed
    pub details: Option<serde_json::Value>,
    pub timestamp: DateTime<Utc>,
}

impl AuditEvent {
    pub fn new(
        actor: impl Into<String>,
        action: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            actor: actor.into(),
            action: action.into(),
            resource: resource.into(),
            resource_id: None,
            outcome: AuditOutcome::Success,
            ip_address: None,
            user_agent: None,
            details: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_resource_id(mut self, id: impl Into<String>) -> Self {
        self.resource_id = Some(id.into());
        self
    }

    pub fn with_outcome(mut self, outcome: AuditOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn with_request_context(mut self, headers: &HeaderMap) -> Self {
        self.ip_address = extract_ip_from_headers(headers);
        self.user_agent = extract_user_agent(headers);
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit the event to the structured log. Storage is the sink's job;
    /// this gives operators a real-time trail even if the sink fails.
    pub fn log(&self) {
        match self.outcome {
            AuditOutcome::Success => tracing::info!(
                actor = %self.actor,
                action = %self.action,
                resource = %self.resource,
                resource_id = ?self.resource_id,
                ip = ?self.ip_address,
                "audit"
            ),
            AuditOutcome::Failure | AuditOutcome::Denied => tracing::warn!(
                actor = %self.actor,
                action = %self.action,
                resource = %self.resource,
                resource_id = ?self.resource_id,
                ip = ?self.ip_address,
                "audit failure"
            ),
        }
    }
}

/// Durable storage for audit events. Implementations must not panic;
/// callers treat persistence failures as non-fatal and log them.
#[async_trait::async_trait]
pub trait AuditSink: Send + Sync {
    async fn record(&self, event: AuditEvent);
}

/// Best-effort client IP from proxy headers. `x-forwarded-for` may hold
/// a comma-separated chain; the first entry is the original client.
pub fn extract_ip_from_headers(headers: &HeaderMap) -> Option<String> {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        let first = forwarded.split(',').next()?.trim();
        if !first.is_empty() {
            return Some(first.to_string());
        }
    }
    headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .map(|ip| ip.trim().to_string())
}

pub fn extract_user_agent(headers: &HeaderMap) -> Option<String> {
    headers
        .get(axum::http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn forwarded_for_takes_first_entry() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.9, 10.0.0.1"),
        );
        assert_eq!(
            extract_ip_from_headers(&headers),
            Some("203.0.113.9".to_string())
        );
    }

    #[test]
    fn falls_back_to_real_ip() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.4"));
        assert_eq!(
            extract_ip_from_headers(&headers),
            Some("198.51.100.4".to_string())
        );
    }

    #[test]
    fn missing_headers_yield_none() {
        let headers = HeaderMap::new();
        assert_eq!(extract_ip_from_headers(&headers), None);
        assert_eq!(extract_user_agent(&headers), None);
    }

    #[test]
    fn builder_populates_fields() {
        let event = AuditEvent::new("admin", "delete", "blog_post")
            .with_resource_id("0198a7c2-0000-7000-8000-000000000000")
            .with_outcome(AuditOutcome::Failure);
        assert_eq!(event.outcome, AuditOutcome::Failure);
        assert!(event.resource_id.is_some());
    }
}
