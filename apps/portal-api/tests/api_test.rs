//! End-to-end tests over the assembled router.
//!
//! Mirrors the production route layout with in-memory repositories:
//! public endpoints, the session guard, and the audited admin flows.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use axum_helpers::{AuditSink, SESSION_COOKIE};
use domain_admin::{
    require_session, AdminService, MemoryAdminUserRepository, MemoryLogRepository,
    MemorySessionRepository, SessionValidator,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_PASSWORD: &str = "s3cret-pw";

async fn test_app() -> Router {
    let admin = AdminService::new(
        MemoryAdminUserRepository::new(),
        MemorySessionRepository::new(),
        MemoryLogRepository::new(),
    );
    admin
        .ensure_admin(ADMIN_EMAIL, "Admin", ADMIN_PASSWORD)
        .await
        .unwrap();

    let audit: Arc<dyn AuditSink> = admin.audit_sink();
    let validator: Arc<dyn SessionValidator> = Arc::new(admin.clone());

    let content =
        domain_content::ContentService::new(domain_content::MemoryContentRepository::new());
    let blog = domain_blog::BlogService::new(domain_blog::MemoryBlogRepository::new());
    let outreach = domain_outreach::OutreachService::new(
        domain_outreach::MemoryContactRepository::new(),
        domain_outreach::MemoryNewsletterRepository::new(),
    );
    let achievements = domain_achievements::AchievementService::new(
        domain_achievements::MemoryAchievementRepository::new(),
    );

    let public = Router::new()
        .nest("/page-content", domain_content::public_router(content.clone()))
        .nest("/blog", domain_blog::public_router(blog.clone()))
        .merge(domain_outreach::public_router(outreach.clone()))
        .nest(
            "/achievements",
            domain_achievements::public_router(achievements.clone()),
        );

    let guarded = Router::new()
        .nest(
            "/page-content",
            domain_content::admin_router(content, Arc::clone(&audit)),
        )
        .nest("/blog", domain_blog::admin_router(blog, Arc::clone(&audit)))
        .nest(
            "/achievements",
            domain_achievements::admin_router(achievements, Arc::clone(&audit)),
        )
        .merge(domain_outreach::admin_router(outreach))
        .nest("/logs", domain_admin::logs_router(admin.clone()))
        .layer(axum::middleware::from_fn_with_state(
            validator,
            require_session,
        ));

    let admin_routes = guarded.merge(domain_admin::auth_router(admin, false));

    Router::new().nest("/api", public.nest("/admin", admin_routes))
}

async fn login(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/admin/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    let token = set_cookie
        .strip_prefix(&format!("{SESSION_COOKIE}="))
        .and_then(|rest| rest.split(';').next())
        .unwrap();
    format!("{SESSION_COOKIE}={token}")
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn admin_routes_reject_missing_session() {
    let app = test_app().await;

    for uri in [
        "/api/admin/page-content",
        "/api/admin/blog/posts",
        "/api/admin/achievements",
        "/api/admin/contact-submissions",
        "/api/admin/logs",
    ] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[tokio::test]
async fn login_bad_credentials_rejected() {
    let app = test_app().await;
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/admin/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({"email": ADMIN_EMAIL, "password": "wrong-pass"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn content_create_then_public_lookup() {
    let app = test_app().await;
    let cookie = login(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/admin/page-content")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::COOKIE, &cookie)
                .body(Body::from(
                    json!({
                        "country": "rs",
                        "pageType": "home",
                        "language": "sr",
                        "title": "Dobrodošli",
                        "content": "<h1>Dobrodošli</h1>"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/page-content?country=rs&pageType=home&language=sr")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["title"], "Dobrodošli");

    // No override for the other language
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/page-content?country=rs&pageType=home&language=en")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_content_key_is_conflict() {
    let app = test_app().await;
    let cookie = login(&app).await;

    let payload = json!({
        "country": "mk",
        "pageType": "services",
        "language": "mk",
        "title": "Услуги",
        "content": "<p>Услуги</p>"
    })
    .to_string();

    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/admin/page-content")
                    .header(header::CONTENT_TYPE, "application/json")
                    .header(header::COOKIE, &cookie)
                    .body(Body::from(payload.clone()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), expected);
    }
}

#[tokio::test]
async fn blog_post_visible_only_in_scoped_countries() {
    let app = test_app().await;
    let cookie = login(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/admin/blog/posts")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::COOKIE, &cookie)
                .body(Body::from(
                    json!({
                        "title": "IPARD funding in 2026",
                        "slug": "ipard-funding-2026",
                        "excerpt": "What changed this cycle",
                        "content": "Full text",
                        "category": "funding",
                        "countries": ["rs", "mk"],
                        "published": true
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/blog/posts/ipard-funding-2026?country=rs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/blog/posts/ipard-funding-2026?country=ba")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn newsletter_double_subscribe_conflicts() {
    let app = test_app().await;
    let payload = json!({"email": "reader@example.com", "country": "rs"}).to_string();

    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/newsletter/subscribe")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.clone()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), expected);
    }
}

#[tokio::test]
async fn admin_mutations_land_in_audit_log() {
    let app = test_app().await;
    let cookie = login(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/admin/achievements")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::COOKIE, &cookie)
                .body(Body::from(
                    json!({"label": "Projects delivered", "value": 120, "sortOrder": 1})
                        .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/admin/logs")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let entries = json_body(response.into_body()).await;
    let actions: Vec<&str> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["action"].as_str().unwrap())
        .collect();
    assert!(actions.contains(&"achievement.create"));
    assert!(actions.contains(&"admin.login"));
}
