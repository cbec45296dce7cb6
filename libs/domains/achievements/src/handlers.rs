use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_helpers::errors::responses::{
    BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
    NotFoundResponse, UnauthorizedResponse,
};
use axum_helpers::{AuditEvent, AuditOutcome, AuditSink, CurrentAdmin, UuidPath, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::AchievementResult;
use crate::models::{Achievement, CreateAchievement, UpdateAchievement};
use crate::repository::AchievementRepository;
use crate::service::AchievementService;

/// OpenAPI documentation for the public achievements endpoint
#[derive(OpenApi)]
#[openapi(
    paths(list_achievements),
    components(schemas(Achievement), responses(InternalServerErrorResponse)),
    tags(
        (name = "Achievements", description = "Public counters")
    )
)]
pub struct PublicApiDoc;

/// OpenAPI documentation for the admin achievements endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_achievements_admin, create_achievement, update_achievement, delete_achievement),
    components(
        schemas(Achievement, CreateAchievement, UpdateAchievement),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Admin: Achievements", description = "Counter management")
    )
)]
pub struct AdminApiDoc;

struct AdminState<R: AchievementRepository> {
    service: AchievementService<R>,
    audit: Arc<dyn AuditSink>,
}

pub fn public_router<R: AchievementRepository + 'static>(
    service: AchievementService<R>,
) -> Router {
    Router::new()
        .route("/", get(list_achievements))
        .with_state(Arc::new(service))
}

pub fn admin_router<R: AchievementRepository + 'static>(
    service: AchievementService<R>,
    audit: Arc<dyn AuditSink>,
) -> Router {
    Router::new()
        .route("/", get(list_achievements_admin).post(create_achievement))
        .route("/{id}", axum::routing::put(update_achievement).delete(delete_achievement))
        .with_state(Arc::new(AdminState { service, audit }))
}

/// List counters in display order
#[utoipa::path(
    get,
    path = "",
    tag = "Achievements",
    responses(
        (status = 200, description = "Ordered counters", body = Vec<Achievement>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_achievements<R: AchievementRepository>(
    State(service): State<Arc<AchievementService<R>>>,
) -> AchievementResult<Json<Vec<Achievement>>> {
    let achievements = service.list().await?;
    Ok(Json(achievements))
}

/// List counters (admin)
#[utoipa::path(
    get,
    path = "",
    tag = "Admin: Achievements",
    responses(
        (status = 200, description = "Ordered counters", body = Vec<Achievement>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_achievements_admin<R: AchievementRepository>(
    State(state): State<Arc<AdminState<R>>>,
) -> AchievementResult<Json<Vec<Achievement>>> {
    let achievements = state.service.list().await?;
    Ok(Json(achievements))
}

/// Create a counter
#[utoipa::path(
    post,
    path = "",
    tag = "Admin: Achievements",
    request_body = CreateAchievement,
    responses(
        (status = 201, description = "Counter created", body = Achievement),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_achievement<R: AchievementRepository>(
    State(state): State<Arc<AdminState<R>>>,
    admin: CurrentAdmin,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<CreateAchievement>,
) -> AchievementResult<impl IntoResponse> {
    let result = state.service.create(input).await;

    let mut event = AuditEvent::new(&admin.email, "achievement.create", "achievement")
        .with_request_context(&headers);
    match &result {
        Ok(achievement) => event = event.with_resource_id(achievement.id.to_string()),
        Err(_) => event = event.with_outcome(AuditOutcome::Failure),
    }
    event.log();
    state.audit.record(event).await;

    let achievement = result?;
    Ok((StatusCode::CREATED, Json(achievement)))
}

/// Update a counter
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Admin: Achievements",
    params(("id" = Uuid, Path, description = "Achievement ID")),
    request_body = UpdateAchievement,
    responses(
        (status = 200, description = "Counter updated", body = Achievement),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_achievement<R: AchievementRepository>(
    State(state): State<Arc<AdminState<R>>>,
    admin: CurrentAdmin,
    headers: HeaderMap,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateAchievement>,
) -> AchievementResult<Json<Achievement>> {
    let result = state.service.update(id, input).await;

    let mut event = AuditEvent::new(&admin.email, "achievement.update", "achievement")
        .with_resource_id(id.to_string())
        .with_request_context(&headers);
    if result.is_err() {
        event = event.with_outcome(AuditOutcome::Failure);
    }
    event.log();
    state.audit.record(event).await;

    Ok(Json(result?))
}

/// Delete a counter
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Admin: Achievements",
    params(("id" = Uuid, Path, description = "Achievement ID")),
    responses(
        (status = 204, description = "Counter deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_achievement<R: AchievementRepository>(
    State(state): State<Arc<AdminState<R>>>,
    admin: CurrentAdmin,
    headers: HeaderMap,
    UuidPath(id): UuidPath,
) -> AchievementResult<impl IntoResponse> {
    let result = state.service.delete(id).await;

    let mut event = AuditEvent::new(&admin.email, "achievement.delete", "achievement")
        .with_resource_id(id.to_string())
        .with_request_context(&headers);
    if result.is_err() {
        event = event.with_outcome(AuditOutcome::Failure);
    }
    event.log();
    state.audit.record(event).await;

    result?;
    Ok(StatusCode::NO_CONTENT)
}
