//! Reusable OpenAPI response documentation for common error cases.
//!
//! Handlers reference these with `#[utoipa::path(responses(...))]` via
//! `(status = 404, response = NotFoundResponse)` so every endpoint
//! documents the same error body shape.

use super::ErrorResponse;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "code": 1004,
        "error": "NOT_FOUND",
        "message": "Resource not found"
    })
)]
pub struct NotFoundResponse(#[allow(dead_code)] ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Request validation failed",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "Request validation failed",
        "details": {"email": [{"code": "email", "message": null, "params": {"value": "not-an-email"}}]}
    })
)]
pub struct BadRequestValidationResponse(#[allow(dead_code)] ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Invalid UUID supplied in path",
    content_type = "application/json",
    example = json!({
        "code": 1002,
        "error": "INVALID_UUID",
        "message": "Invalid UUID format"
    })
)]
pub struct BadRequestUuidResponse(#[allow(dead_code)] ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Authentication required",
    content_type = "application/json",
    example = json!({
        "code": 1006,
        "error": "UNAUTHORIZED",
        "message": "Authentication required"
    })
)]
pub struct UnauthorizedResponse(#[allow(dead_code)] ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Access forbidden",
    content_type = "application/json",
    example = json!({
        "code": 1007,
        "error": "FORBIDDEN",
        "message": "Access forbidden"
    })
)]
pub struct ForbiddenResponse(#[allow(dead_code)] ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource already exists",
    content_type = "application/json",
    example = json!({
        "code": 1008,
        "error": "CONFLICT",
        "message": "Resource already exists"
    })
)]
pub struct ConflictResponse(#[allow(dead_code)] ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal server error",
    content_type = "application/json",
    example = json!({
        "code": 1005,
        "error": "INTERNAL_ERROR",
        "message": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(#[allow(dead_code)] ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Service temporarily unavailable",
    content_type = "application/json",
    example = json!({
        "code": 1011,
        "error": "SERVICE_UNAVAILABLE",
        "message": "Service is temporarily unavailable"
    })
)]
pub struct ServiceUnavailableResponse(#[allow(dead_code)] ErrorResponse);
