//! Router-level fallback handlers for unmatched routes and methods.

use axum::http::{Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Json;

use super::{ErrorCode, ErrorResponse};

/// Fallback for requests that match no registered route.
pub async fn not_found_handler(method: Method, uri: Uri) -> impl IntoResponse {
    tracing::debug!(%method, %uri, "route not found");
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(
            ErrorCode::NotFound,
            format!("No route for {method} {uri}"),
        )),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    #[tokio::test]
    async fn fallback_returns_json_404() {
        let app: Router = Router::new()
            .route("/known", get(|| async { "ok" }))
            .fallback(not_found_handler);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
