use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_helpers::errors::responses::{
    BadRequestValidationResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
    UnauthorizedResponse,
};
use axum_helpers::ValidatedJson;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::OutreachResult;
use crate::models::{
    ContactSubmission, CreateContactSubmission, NewsletterSubscription, SubscribeRequest,
    UnsubscribeRequest,
};
use crate::repository::{ContactRepository, NewsletterRepository};
use crate::service::OutreachService;

/// OpenAPI documentation for the public outreach endpoints
#[derive(OpenApi)]
#[openapi(
    paths(submit_contact, subscribe, unsubscribe),
    components(
        schemas(
            ContactSubmission,
            CreateContactSubmission,
            NewsletterSubscription,
            SubscribeRequest,
            UnsubscribeRequest
        ),
        responses(
            BadRequestValidationResponse,
            ConflictResponse,
            NotFoundResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Outreach", description = "Contact form and newsletter")
    )
)]
pub struct PublicApiDoc;

/// OpenAPI documentation for the admin outreach listings
#[derive(OpenApi)]
#[openapi(
    paths(list_contacts, list_subscriptions),
    components(
        schemas(ContactSubmission, NewsletterSubscription),
        responses(UnauthorizedResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Admin: Outreach", description = "Contact and newsletter listings")
    )
)]
pub struct AdminApiDoc;

/// Public router: mounted at `/api`, yielding `/api/contact` and
/// `/api/newsletter/*`.
pub fn public_router<C, N>(service: OutreachService<C, N>) -> Router
where
    C: ContactRepository + 'static,
    N: NewsletterRepository + 'static,
{
    Router::new()
        .route("/contact", post(submit_contact))
        .route("/newsletter/subscribe", post(subscribe))
        .route("/newsletter/unsubscribe", post(unsubscribe))
        .with_state(Arc::new(service))
}

/// Admin router: read-only listings for the panel.
pub fn admin_router<C, N>(service: OutreachService<C, N>) -> Router
where
    C: ContactRepository + 'static,
    N: NewsletterRepository + 'static,
{
    Router::new()
        .route("/contact-submissions", get(list_contacts))
        .route("/newsletter", get(list_subscriptions))
        .with_state(Arc::new(service))
}

/// Submit the contact form
#[utoipa::path(
    post,
    path = "/contact",
    tag = "Outreach",
    request_body = CreateContactSubmission,
    responses(
        (status = 201, description = "Submission stored", body = ContactSubmission),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn submit_contact<C: ContactRepository, N: NewsletterRepository>(
    State(service): State<Arc<OutreachService<C, N>>>,
    ValidatedJson(input): ValidatedJson<CreateContactSubmission>,
) -> OutreachResult<impl IntoResponse> {
    let submission = service.submit_contact(input).await?;
    Ok((StatusCode::CREATED, Json(submission)))
}

/// Subscribe to the newsletter
#[utoipa::path(
    post,
    path = "/newsletter/subscribe",
    tag = "Outreach",
    request_body = SubscribeRequest,
    responses(
        (status = 201, description = "Subscribed", body = NewsletterSubscription),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn subscribe<C: ContactRepository, N: NewsletterRepository>(
    State(service): State<Arc<OutreachService<C, N>>>,
    ValidatedJson(input): ValidatedJson<SubscribeRequest>,
) -> OutreachResult<impl IntoResponse> {
    let subscription = service.subscribe(input).await?;
    Ok((StatusCode::CREATED, Json(subscription)))
}

/// Unsubscribe from the newsletter
#[utoipa::path(
    post,
    path = "/newsletter/unsubscribe",
    tag = "Outreach",
    request_body = UnsubscribeRequest,
    responses(
        (status = 204, description = "Unsubscribed"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn unsubscribe<C: ContactRepository, N: NewsletterRepository>(
    State(service): State<Arc<OutreachService<C, N>>>,
    ValidatedJson(input): ValidatedJson<UnsubscribeRequest>,
) -> OutreachResult<impl IntoResponse> {
    service.unsubscribe(input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List contact submissions
#[utoipa::path(
    get,
    path = "/contact-submissions",
    tag = "Admin: Outreach",
    responses(
        (status = 200, description = "Submissions, newest first", body = Vec<ContactSubmission>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_contacts<C: ContactRepository, N: NewsletterRepository>(
    State(service): State<Arc<OutreachService<C, N>>>,
) -> OutreachResult<Json<Vec<ContactSubmission>>> {
    let submissions = service.list_contacts().await?;
    Ok(Json(submissions))
}

/// List newsletter subscriptions
#[utoipa::path(
    get,
    path = "/newsletter",
    tag = "Admin: Outreach",
    responses(
        (status = 200, description = "Subscriptions, newest first", body = Vec<NewsletterSubscription>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_subscriptions<C: ContactRepository, N: NewsletterRepository>(
    State(service): State<Arc<OutreachService<C, N>>>,
) -> OutreachResult<Json<Vec<NewsletterSubscription>>> {
    let subscriptions = service.list_subscriptions().await?;
    Ok(Json(subscriptions))
}
