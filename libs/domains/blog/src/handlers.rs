use axum::extract::{Path, Query, State};
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

use crate::error::BlogResult;
use crate::models::{BlogPost, BlogPostFilter, CreateBlogPost, UpdateBlogPost};
use crate::repository::BlogRepository;
use crate::service::BlogService;

/// OpenAPI documentation for the public blog endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_posts, list_featured, get_post_by_slug),
    components(
        schemas(BlogPost, BlogPostFilter),
        responses(NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Blog", description = "Published blog posts")
    )
)]
pub struct PublicApiDoc;

/// OpenAPI documentation for the admin blog endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_all_posts, create_post, get_post, update_post, delete_post),
    components(
        schemas(BlogPost, CreateBlogPost, UpdateBlogPost),
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
        (name = "Admin: Blog", description = "Blog post management")
    )
)]
pub struct AdminApiDoc;

struct AdminState<R: BlogRepository> {
    service: BlogService<R>,
    audit: Arc<dyn AuditSink>,
}

pub fn public_router<R: BlogRepository + 'static>(service: BlogService<R>) -> Router {
    Router::new()
        .route("/posts", get(list_posts))
        .route("/featured", get(list_featured))
        .route("/posts/{slug}", get(get_post_by_slug))
        .with_state(Arc::new(service))
}

pub fn admin_router<R: BlogRepository + 'static>(
    service: BlogService<R>,
    audit: Arc<dyn AuditSink>,
) -> Router {
    Router::new()
        .route("/posts", get(list_all_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
        .with_state(Arc::new(AdminState { service, audit }))
}

#[derive(Debug, Deserialize)]
struct CountryQuery {
    country: Option<Country>,
}

impl CountryQuery {
    fn country(&self) -> Country {
        self.country.unwrap_or(Country::DEFAULT)
    }
}

/// List published posts for a country
#[utoipa::path(
    get,
    path = "/posts",
    tag = "Blog",
    params(BlogPostFilter),
    responses(
        (status = 200, description = "Published posts, newest first", body = Vec<BlogPost>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_posts<R: BlogRepository>(
    State(service): State<Arc<BlogService<R>>>,
    Query(mut filter): Query<BlogPostFilter>,
) -> BlogResult<Json<Vec<BlogPost>>> {
    filter.country = Some(filter.country.unwrap_or(Country::DEFAULT));
    let posts = service.list_published(filter).await?;
    Ok(Json(posts))
}

/// List featured published posts for a country
#[utoipa::path(
    get,
    path = "/featured",
    tag = "Blog",
    params(("country" = Option<String>, Query, description = "Country code, defaults to rs")),
    responses(
        (status = 200, description = "Featured posts", body = Vec<BlogPost>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_featured<R: BlogRepository>(
    State(service): State<Arc<BlogService<R>>>,
    Query(query): Query<CountryQuery>,
) -> BlogResult<Json<Vec<BlogPost>>> {
    let posts = service.list_featured(query.country()).await?;
    Ok(Json(posts))
}

/// Fetch one published post by slug
#[utoipa::path(
    get,
    path = "/posts/{slug}",
    tag = "Blog",
    params(
        ("slug" = String, Path, description = "Post slug"),
        ("country" = Option<String>, Query, description = "Country code, defaults to rs")
    ),
    responses(
        (status = 200, description = "Post found", body = BlogPost),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_post_by_slug<R: BlogRepository>(
    State(service): State<Arc<BlogService<R>>>,
    Path(slug): Path<String>,
    Query(query): Query<CountryQuery>,
) -> BlogResult<Json<BlogPost>> {
    let post = service.get_published(&slug, query.country()).await?;
    Ok(Json(post))
}

/// List every post, drafts included
#[utoipa::path(
    get,
    path = "/posts",
    tag = "Admin: Blog",
    responses(
        (status = 200, description = "All posts, newest first", body = Vec<BlogPost>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_all_posts<R: BlogRepository>(
    State(state): State<Arc<AdminState<R>>>,
) -> BlogResult<Json<Vec<BlogPost>>> {
    let posts = state.service.list_all().await?;
    Ok(Json(posts))
}

/// Create a post
#[utoipa::path(
    post,
    path = "/posts",
    tag = "Admin: Blog",
    request_body = CreateBlogPost,
    responses(
        (status = 201, description = "Post created", body = BlogPost),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_post<R: BlogRepository>(
    State(state): State<Arc<AdminState<R>>>,
    admin: CurrentAdmin,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<CreateBlogPost>,
) -> BlogResult<impl IntoResponse> {
    let result = state.service.create(input).await;

    let mut event = AuditEvent::new(&admin.email, "blog_post.create", "blog_post")
        .with_request_context(&headers);
    match &result {
        Ok(post) => event = event.with_resource_id(post.id.to_string()),
        Err(_) => event = event.with_outcome(AuditOutcome::Failure),
    }
    event.log();
    state.audit.record(event).await;

    let post = result?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// Fetch one post by id
#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = "Admin: Blog",
    params(("id" = Uuid, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post found", body = BlogPost),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_post<R: BlogRepository>(
    State(state): State<Arc<AdminState<R>>>,
    UuidPath(id): UuidPath,
) -> BlogResult<Json<BlogPost>> {
    let post = state.service.get(id).await?;
    Ok(Json(post))
}

/// Update a post
#[utoipa::path(
    put,
    path = "/posts/{id}",
    tag = "Admin: Blog",
    params(("id" = Uuid, Path, description = "Post ID")),
    request_body = UpdateBlogPost,
    responses(
        (status = 200, description = "Post updated", body = BlogPost),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_post<R: BlogRepository>(
    State(state): State<Arc<AdminState<R>>>,
    admin: CurrentAdmin,
    headers: HeaderMap,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateBlogPost>,
) -> BlogResult<Json<BlogPost>> {
    let result = state.service.update(id, input).await;

    let mut event = AuditEvent::new(&admin.email, "blog_post.update", "blog_post")
        .with_resource_id(id.to_string())
        .with_request_context(&headers);
    if result.is_err() {
        event = event.with_outcome(AuditOutcome::Failure);
    }
    event.log();
    state.audit.record(event).await;

    Ok(Json(result?))
}

/// Delete a post
#[utoipa::path(
    delete,
    path = "/posts/{id}",
    tag = "Admin: Blog",
    params(("id" = Uuid, Path, description = "Post ID")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_post<R: BlogRepository>(
    State(state): State<Arc<AdminState<R>>>,
    admin: CurrentAdmin,
    headers: HeaderMap,
    UuidPath(id): UuidPath,
) -> BlogResult<impl IntoResponse> {
    let result = state.service.delete(id).await;

    let mut event = AuditEvent::new(&admin.email, "blog_post.delete", "blog_post")
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
