use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_helpers::errors::responses::{
    BadRequestUuidResponse, BadRequestValidationResponse, ConflictResponse,
    InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
};
use axum_helpers::{AuditEvent, AuditOutcome, AuditSink, CurrentAdmin, UuidPath, ValidatedJson};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::OpenApi;

use locale::Country;

use crate::error::ContentResult;
use crate::models::{ContentKey, CreatePageContent, PageContent, UpdatePageContent};
use crate::repository::ContentRepository;
use crate::service::ContentService;

/// OpenAPI documentation for the public page-content endpoint
#[derive(OpenApi)]
#[openapi(
    paths(get_page_content),
    components(
        schemas(PageContent),
        responses(NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Page Content", description = "Admin-authored page overrides")
    )
)]
pub struct PublicApiDoc;

/// OpenAPI documentation for the admin page-content endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        list_page_content,
        create_page_content,
        get_page_content_by_id,
        update_page_content,
        delete_page_content,
    ),
    components(
        schemas(PageContent, CreatePageContent, UpdatePageContent),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            ConflictResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Admin: Page Content", description = "Page override management")
    )
)]
pub struct AdminApiDoc;

struct AdminState<R: ContentRepository> {
    service: ContentService<R>,
    audit: Arc<dyn AuditSink>,
}

/// Public router: single lookup endpoint, no session required.
pub fn public_router<R: ContentRepository + 'static>(service: ContentService<R>) -> Router {
    Router::new()
        .route("/", get(get_page_content))
        .with_state(Arc::new(service))
}

/// Admin router. Session enforcement is layered on by the app; handlers
/// only consume the injected identity for auditing.
pub fn admin_router<R: ContentRepository + 'static>(
    service: ContentService<R>,
    audit: Arc<dyn AuditSink>,
) -> Router {
    Router::new()
        .route("/", get(list_page_content).post(create_page_content))
        .route(
            "/{id}",
            get(get_page_content_by_id)
                .put(update_page_content)
                .delete(delete_page_content),
        )
        .with_state(Arc::new(AdminState { service, audit }))
}

/// Fetch the override for a (country, pageType, language) triple
#[utoipa::path(
    get,
    path = "",
    tag = "Page Content",
    params(ContentKey),
    responses(
        (status = 200, description = "Override found", body = PageContent),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_page_content<R: ContentRepository>(
    State(service): State<Arc<ContentService<R>>>,
    Query(key): Query<ContentKey>,
) -> ContentResult<Json<PageContent>> {
    let content = service.lookup(key).await?;
    Ok(Json(content))
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    country: Option<Country>,
}

/// List all overrides, optionally for one country
#[utoipa::path(
    get,
    path = "",
    tag = "Admin: Page Content",
    params(("country" = Option<String>, Query, description = "Restrict to one country code")),
    responses(
        (status = 200, description = "All overrides", body = Vec<PageContent>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_page_content<R: ContentRepository>(
    State(state): State<Arc<AdminState<R>>>,
    Query(query): Query<ListQuery>,
) -> ContentResult<Json<Vec<PageContent>>> {
    let items = state.service.list(query.country).await?;
    Ok(Json(items))
}

/// Create a page override
#[utoipa::path(
    post,
    path = "",
    tag = "Admin: Page Content",
    request_body = CreatePageContent,
    responses(
        (status = 201, description = "Override created", body = PageContent),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_page_content<R: ContentRepository>(
    State(state): State<Arc<AdminState<R>>>,
    admin: CurrentAdmin,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<CreatePageContent>,
) -> ContentResult<impl IntoResponse> {
    let result = state.service.create(input).await;

    let mut event = AuditEvent::new(&admin.email, "page_content.create", "page_content")
        .with_request_context(&headers);
    match &result {
        Ok(content) => event = event.with_resource_id(content.id.to_string()),
        Err(_) => event = event.with_outcome(AuditOutcome::Failure),
    }
    event.log();
    state.audit.record(event).await;

    let content = result?;
    Ok((StatusCode::CREATED, Json(content)))
}

/// Fetch one override by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Admin: Page Content",
    params(("id" = Uuid, Path, description = "Page content ID")),
    responses(
        (status = 200, description = "Override found", body = PageContent),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_page_content_by_id<R: ContentRepository>(
    State(state): State<Arc<AdminState<R>>>,
    UuidPath(id): UuidPath,
) -> ContentResult<Json<PageContent>> {
    let content = state.service.get(id).await?;
    Ok(Json(content))
}

/// Update an override; key fields are immutable
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Admin: Page Content",
    params(("id" = Uuid, Path, description = "Page content ID")),
    request_body = UpdatePageContent,
    responses(
        (status = 200, description = "Override updated", body = PageContent),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_page_content<R: ContentRepository>(
    State(state): State<Arc<AdminState<R>>>,
    admin: CurrentAdmin,
    headers: HeaderMap,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdatePageContent>,
) -> ContentResult<Json<PageContent>> {
    let result = state.service.update(id, input).await;

    let mut event = AuditEvent::new(&admin.email, "page_content.update", "page_content")
        .with_resource_id(id.to_string())
        .with_request_context(&headers);
    if result.is_err() {
        event = event.with_outcome(AuditOutcome::Failure);
    }
    event.log();
    state.audit.record(event).await;

    Ok(Json(result?))
}

/// Delete an override
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Admin: Page Content",
    params(("id" = Uuid, Path, description = "Page content ID")),
    responses(
        (status = 204, description = "Override deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_page_content<R: ContentRepository>(
    State(state): State<Arc<AdminState<R>>>,
    admin: CurrentAdmin,
    headers: HeaderMap,
    UuidPath(id): UuidPath,
) -> ContentResult<impl IntoResponse> {
    let result = state.service.delete(id).await;

    let mut event = AuditEvent::new(&admin.email, "page_content.delete", "page_content")
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
