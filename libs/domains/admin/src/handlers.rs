use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_helpers::errors::responses::{
    BadRequestValidationResponse, InternalServerErrorResponse, UnauthorizedResponse,
};
use axum_helpers::{
    clear_session_cookie, extract_session_token, session_cookie, AuditEvent, AuditOutcome,
    CurrentAdmin, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{AdminError, AdminResult};
use crate::models::{AdminLogEntry, LogFilter, LoginRequest, SessionInfo};
use crate::repository::{AdminUserRepository, LogRepository, SessionRepository};
use crate::service::{AdminService, SESSION_TTL_HOURS};

/// OpenAPI documentation for authentication and the audit log
#[derive(OpenApi)]
#[openapi(
    paths(login, logout, current_session, list_logs),
    components(
        schemas(LoginRequest, SessionInfo, AdminLogEntry),
        responses(
            UnauthorizedResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Admin: Auth", description = "Login, logout, session inspection"),
        (name = "Admin: Logs", description = "Persisted audit trail")
    )
)]
pub struct ApiDoc;

struct AuthState<U, S, L>
where
    U: AdminUserRepository,
    S: SessionRepository,
    L: LogRepository,
{
    service: AdminService<U, S, L>,
    secure_cookies: bool,
}

/// Auth router: login, logout and session inspection. Mounted outside
/// the session guard; every handler resolves the cookie itself.
pub fn auth_router<U, S, L>(service: AdminService<U, S, L>, secure_cookies: bool) -> Router
where
    U: AdminUserRepository + 'static,
    S: SessionRepository + 'static,
    L: LogRepository + 'static,
{
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/session", get(current_session))
        .with_state(Arc::new(AuthState {
            service,
            secure_cookies,
        }))
}

/// Audit-log router. Mounted behind the session guard.
pub fn logs_router<U, S, L>(service: AdminService<U, S, L>) -> Router
where
    U: AdminUserRepository + 'static,
    S: SessionRepository + 'static,
    L: LogRepository + 'static,
{
    Router::new()
        .route("/", get(list_logs))
        .with_state(Arc::new(AuthState {
            service,
            secure_cookies: false,
        }))
}

/// Verify credentials and open a session cookie
#[utoipa::path(
    post,
    path = "/login",
    tag = "Admin: Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session opened", body = SessionInfo),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn login<U, S, L>(
    State(state): State<Arc<AuthState<U, S, L>>>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> AdminResult<impl IntoResponse>
where
    U: AdminUserRepository,
    S: SessionRepository,
    L: LogRepository + 'static,
{
    let email = input.email.to_lowercase();
    let result = state.service.login(input).await;

    let mut event =
        AuditEvent::new(&email, "admin.login", "admin_session").with_request_context(&headers);
    if result.is_err() {
        event = event.with_outcome(AuditOutcome::Failure);
    }
    event.log();
    state.service.record_event(event).await;

    let session = result?;
    let cookie = session_cookie(
        &session.token,
        SESSION_TTL_HOURS * 3600,
        state.secure_cookies,
    );
    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(SessionInfo::from(&session)),
    ))
}

/// Invalidate the current session and clear the cookie
#[utoipa::path(
    post,
    path = "/logout",
    tag = "Admin: Auth",
    responses(
        (status = 204, description = "Session cleared"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn logout<U, S, L>(
    State(state): State<Arc<AuthState<U, S, L>>>,
    headers: HeaderMap,
) -> AdminResult<impl IntoResponse>
where
    U: AdminUserRepository,
    S: SessionRepository,
    L: LogRepository + 'static,
{
    if let Some(token) = extract_session_token(&headers) {
        if let Ok(session) = state.service.validate_session(&token).await {
            let event = AuditEvent::new(&session.email, "admin.logout", "admin_session")
                .with_request_context(&headers);
            event.log();
            state.service.record_event(event).await;
        }
        state.service.logout(&token).await?;
    }

    Ok((
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, clear_session_cookie(state.secure_cookies))],
    ))
}

/// Describe the current session
#[utoipa::path(
    get,
    path = "/session",
    tag = "Admin: Auth",
    responses(
        (status = 200, description = "Session is live", body = SessionInfo),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn current_session<U, S, L>(
    State(state): State<Arc<AuthState<U, S, L>>>,
    headers: HeaderMap,
) -> AdminResult<Json<SessionInfo>>
where
    U: AdminUserRepository,
    S: SessionRepository,
    L: LogRepository + 'static,
{
    let token = extract_session_token(&headers).ok_or(AdminError::InvalidSession)?;
    let info = state.service.session_info(&token).await?;
    Ok(Json(info))
}

/// List audit log entries, newest first
#[utoipa::path(
    get,
    path = "/logs",
    tag = "Admin: Logs",
    params(LogFilter),
    responses(
        (status = 200, description = "Log entries", body = Vec<AdminLogEntry>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_logs<U, S, L>(
    State(state): State<Arc<AuthState<U, S, L>>>,
    _admin: CurrentAdmin,
    Query(filter): Query<LogFilter>,
) -> AdminResult<Json<Vec<AdminLogEntry>>>
where
    U: AdminUserRepository,
    S: SessionRepository,
    L: LogRepository + 'static,
{
    let entries = state.service.list_logs(filter).await?;
    Ok(Json(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryAdminUserRepository, MemoryLogRepository, MemorySessionRepository};
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use axum_helpers::SESSION_COOKIE;
    use tower::ServiceExt;

    type Service =
        AdminService<MemoryAdminUserRepository, MemorySessionRepository, MemoryLogRepository>;

    async fn seeded_service() -> Service {
        let service = AdminService::new(
            MemoryAdminUserRepository::new(),
            MemorySessionRepository::new(),
            MemoryLogRepository::new(),
        );
        service
            .ensure_admin("admin@example.com", "Admin", "pw12345")
            .await
            .unwrap();
        service
    }

    fn login_body(email: &str, password: &str) -> Body {
        Body::from(
            serde_json::json!({"email": email, "password": password}).to_string(),
        )
    }

    #[tokio::test]
    async fn login_sets_session_cookie() {
        let app = auth_router(seeded_service().await, false);
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(login_body("admin@example.com", "pw12345"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(cookie.starts_with(&format!("{SESSION_COOKIE}=")));
        assert!(cookie.contains("HttpOnly"));
        assert!(!cookie.contains("Secure"));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let info: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(info["email"], "admin@example.com");
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized_and_audited() {
        let service = seeded_service().await;
        let app = auth_router(service.clone(), false);
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(login_body("admin@example.com", "nope123"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let entries = service.list_logs(LogFilter::default()).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, "admin.login");
        assert_eq!(entries[0].outcome, "failure");
    }

    #[tokio::test]
    async fn logout_clears_cookie_and_invalidates() {
        let service = seeded_service().await;
        let session = service
            .login(LoginRequest {
                email: "admin@example.com".to_string(),
                password: "pw12345".to_string(),
            })
            .await
            .unwrap();

        let app = auth_router(service.clone(), false);
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/logout")
                    .header(header::COOKIE, format!("{SESSION_COOKIE}={}", session.token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(cookie.contains("Max-Age=0"));
        assert!(service.validate_session(&session.token).await.is_err());
    }

    #[tokio::test]
    async fn session_endpoint_requires_cookie() {
        let app = auth_router(seeded_service().await, false);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/session")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn session_endpoint_reports_live_session() {
        let service = seeded_service().await;
        let session = service
            .login(LoginRequest {
                email: "admin@example.com".to_string(),
                password: "pw12345".to_string(),
            })
            .await
            .unwrap();

        let app = auth_router(service, false);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/session")
                    .header(header::COOKIE, format!("{SESSION_COOKIE}={}", session.token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let info: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(info["admin_id"], session.admin_id.to_string());
    }
}
