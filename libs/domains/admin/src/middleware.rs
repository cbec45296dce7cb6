//! Session-guard middleware for the admin routers.

use async_trait::async_trait;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_helpers::{extract_session_token, AppError, CurrentAdmin};
use std::sync::Arc;

use crate::repository::{AdminUserRepository, LogRepository, SessionRepository};
use crate::service::AdminService;

/// Resolves a session token to an admin identity. Trait object so
/// routers in other crates can be guarded without a concrete service
/// type in their signatures.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    async fn resolve(&self, token: &str) -> Option<CurrentAdmin>;
}

#[async_trait]
impl<U, S, L> SessionValidator for AdminService<U, S, L>
where
    U: AdminUserRepository,
    S: SessionRepository,
    L: LogRepository + 'static,
{
    async fn resolve(&self, token: &str) -> Option<CurrentAdmin> {
        let session = self.validate_session(token).await.ok()?;
        Some(CurrentAdmin {
            admin_id: session.admin_id,
            email: session.email,
        })
    }
}

/// Rejects requests without a live session before they reach handlers;
/// valid ones get a [`CurrentAdmin`] extension.
///
/// ```ignore
/// let admin_routes = Router::new()
///     .nest("/page-content", content_admin)
///     .layer(middleware::from_fn_with_state(validator, require_session));
/// ```
pub async fn require_session(
    State(validator): State<Arc<dyn SessionValidator>>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = extract_session_token(request.headers()) else {
        return AppError::Unauthorized("Authentication required".to_string()).into_response();
    };

    match validator.resolve(&token).await {
        Some(admin) => {
            request.extensions_mut().insert(admin);
            next.run(request).await
        }
        None => {
            AppError::Unauthorized("Missing or expired session".to_string()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryAdminUserRepository, MemoryLogRepository, MemorySessionRepository};
    use crate::models::LoginRequest;
    use axum::body::Body;
    use axum::http::{header, Request as HttpRequest, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use axum_helpers::SESSION_COOKIE;
    use tower::ServiceExt;

    async fn whoami(admin: CurrentAdmin) -> String {
        admin.email
    }

    async fn guarded_app() -> (Router, String) {
        let service = AdminService::new(
            MemoryAdminUserRepository::new(),
            MemorySessionRepository::new(),
            MemoryLogRepository::new(),
        );
        service
            .ensure_admin("admin@example.com", "Admin", "pw12345")
            .await
            .unwrap();
        let session = service
            .login(LoginRequest {
                email: "admin@example.com".to_string(),
                password: "pw12345".to_string(),
            })
            .await
            .unwrap();

        let validator: Arc<dyn SessionValidator> = Arc::new(service);
        let app = Router::new()
            .route("/whoami", get(whoami))
            .layer(axum::middleware::from_fn_with_state(
                validator,
                require_session,
            ));
        (app, session.token)
    }

    #[tokio::test]
    async fn missing_cookie_is_unauthorized() {
        let (app, _token) = guarded_app().await;
        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/whoami")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn bogus_token_is_unauthorized() {
        let (app, _token) = guarded_app().await;
        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/whoami")
                    .header(header::COOKIE, format!("{SESSION_COOKIE}=bogus"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn valid_session_reaches_handler() {
        let (app, token) = guarded_app().await;
        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/whoami")
                    .header(header::COOKIE, format!("{SESSION_COOKIE}={token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
