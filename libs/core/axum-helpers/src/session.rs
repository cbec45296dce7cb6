//! Admin session cookie plumbing shared by the admin-facing routers.
//!
//! Sessions are opaque server-side tokens carried in an HTTP-only
//! cookie. The middleware that validates tokens lives with the admin
//! domain; this module owns the cookie format and the request-scoped
//! identity it injects.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use uuid::Uuid;

use crate::errors::AppError;

pub const SESSION_COOKIE: &str = "admin_session";

/// Authenticated admin identity, inserted as a request extension by the
/// session middleware.
#[derive(Debug, Clone)]
pub struct CurrentAdmin {
    pub admin_id: Uuid,
    pub email: String,
}

impl<S> FromRequestParts<S> for CurrentAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentAdmin>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))
    }
}

/// `Set-Cookie` value establishing a session. `Secure` is appended
/// outside development so the cookie only travels over HTTPS.
pub fn session_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value expiring the session cookie immediately.
pub fn clear_session_cookie(secure: bool) -> String {
    session_cookie("", 0, secure)
}

/// Pulls the session token out of the `Cookie` header, if present.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers
        .get(axum::http::header::COOKIE)
        .and_then(|v| v.to_str().ok())?;

    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == SESSION_COOKIE && !value.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn cookie_carries_security_attributes() {
        let cookie = session_cookie("tok123", 86400, true);
        assert!(cookie.starts_with("admin_session=tok123;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(cookie.ends_with("Secure"));
    }

    #[test]
    fn development_cookie_skips_secure() {
        let cookie = session_cookie("tok123", 86400, false);
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn token_is_extracted_from_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::COOKIE,
            HeaderValue::from_static("theme=dark; admin_session=abc123; lang=sr"),
        );
        assert_eq!(extract_session_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn missing_or_empty_token_is_none() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_session_token(&headers), None);

        headers.insert(
            axum::http::header::COOKIE,
            HeaderValue::from_static("admin_session="),
        );
        assert_eq!(extract_session_token(&headers), None);
    }
}
