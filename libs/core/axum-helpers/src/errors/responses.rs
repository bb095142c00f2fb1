//! Reusable OpenAPI response types so every domain documents errors alike.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Invalid request body",
    content_type = "application/json",
    example = json!({ "error": "email: must be a valid email address" })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Missing or wrong X-Admin-Password header",
    content_type = "application/json",
    example = json!({ "error": "Invalid admin password" })
)]
pub struct UnauthorizedResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({ "error": "Attendee not found" })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({ "error": "Failed to fetch attendees" })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
