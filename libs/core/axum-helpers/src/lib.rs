//! # Axum Helpers
//!
//! Utilities, middleware, and bootstrap helpers shared by the portal's
//! Axum services.
//!
//! ## Modules
//!
//! - **[`errors`]**: structured error responses with stable error codes
//! - **[`extractors`]**: custom extractors (UUID path, validated JSON)
//! - **[`audit`]**: audit events for administrative actions
//! - **[`http`]**: HTTP middleware (security headers)
//! - **[`server`]**: router/application setup, health checks, graceful
//!   shutdown
//! - **[`session`]**: admin session cookie format and request identity

pub mod audit;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;
pub mod session;

pub use audit::{
    AuditEvent, AuditOutcome, AuditSink, extract_ip_from_headers, extract_user_agent,
};
pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::{UuidPath, ValidatedJson};
pub use http::security_headers;
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_app, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};
pub use session::{
    CurrentAdmin, SESSION_COOKIE, clear_session_cookie, extract_session_token, session_cookie,
};
