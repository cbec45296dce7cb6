//! API routes module

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use axum_helpers::server::{run_health_checks, HealthCheckFuture};
use axum_helpers::AuditSink;
use domain_admin::{
    require_session, AdminService, MongoAdminUserRepository, MongoLogRepository,
    MongoSessionRepository, SessionValidator,
};
use mongodb::Client;
use std::sync::Arc;

use crate::geo;
use crate::state::AppState;

type MongoAdminService =
    AdminService<MongoAdminUserRepository, MongoSessionRepository, MongoLogRepository>;

pub fn admin_service(state: &AppState) -> MongoAdminService {
    AdminService::new(
        MongoAdminUserRepository::new(state.db.clone()),
        MongoSessionRepository::new(state.db.clone()),
        MongoLogRepository::new(state.db.clone()),
    )
}

/// Create all API routes, mounted under `/api` by the server bootstrap.
pub fn routes(state: &AppState) -> Router {
    let admin = admin_service(state);
    let audit: Arc<dyn AuditSink> = admin.audit_sink();
    let validator: Arc<dyn SessionValidator> = Arc::new(admin.clone());
    let secure_cookies = state.config.environment.use_https();

    let content = domain_content::ContentService::new(domain_content::MongoContentRepository::new(
        state.db.clone(),
    ));
    let blog = domain_blog::BlogService::new(domain_blog::MongoBlogRepository::new(
        state.db.clone(),
    ));
    let outreach = domain_outreach::OutreachService::new(
        domain_outreach::MongoContactRepository::new(state.db.clone()),
        domain_outreach::MongoNewsletterRepository::new(state.db.clone()),
    );
    let achievements = domain_achievements::AchievementService::new(
        domain_achievements::MongoAchievementRepository::new(state.db.clone()),
    );

    let public = Router::new()
        .merge(geo::router())
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

    let admin_routes = guarded.merge(domain_admin::auth_router(admin, secure_cookies));

    public.nest("/admin", admin_routes)
}

/// Create collection indexes. Run once at startup.
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    domain_content::MongoContentRepository::ensure_indexes(&state.db).await?;
    domain_blog::MongoBlogRepository::ensure_indexes(&state.db).await?;
    domain_outreach::MongoNewsletterRepository::ensure_indexes(&state.db).await?;
    domain_admin::MongoAdminUserRepository::ensure_indexes(&state.db).await?;
    domain_admin::MongoSessionRepository::ensure_indexes(&state.db).await?;
    Ok(())
}

async fn ready(
    client: Client,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "mongodb",
        Box::pin(async move {
            if database::mongo::check_health(&client).await {
                Ok(())
            } else {
                Err("MongoDB unreachable".to_string())
            }
        }),
    )];
    run_health_checks(checks).await
}

/// Readiness probe, mounted at the root alongside `/health`.
pub fn ready_router(client: Client) -> Router {
    Router::new().route("/ready", get(move || ready(client)))
}
