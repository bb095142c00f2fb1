use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    DataResponse, MessageResponse, ValidatedJson,
    errors::responses::{
        BadRequestResponse, InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
    },
};
use database::DocumentStore;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::analytics::DesignationBreakdown;
use crate::error::AttendeeResult;
use crate::models::{Attendee, AttendeeCount, RegisterAttendee};
use crate::service::AttendeeService;

pub const REGISTERED_MESSAGE: &str = "Registration successful";
pub const DELETED_MESSAGE: &str = "Attendee deleted successfully";

/// OpenAPI documentation for the public attendee endpoints
#[derive(OpenApi)]
#[openapi(
    paths(register_attendee, count_attendees),
    components(
        schemas(Attendee, RegisterAttendee, AttendeeCount),
        responses(BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Attendees", description = "Workshop registration")
    )
)]
pub struct ApiDoc;

/// OpenAPI documentation for the admin attendee roster
#[derive(OpenApi)]
#[openapi(
    paths(list_attendees, get_attendee, delete_attendee),
    components(
        schemas(Attendee, MessageResponse),
        responses(NotFoundResponse, UnauthorizedResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Admin: Attendees", description = "Attendee roster management")
    )
)]
pub struct AdminApiDoc;

/// OpenAPI documentation for attendee analytics
#[derive(OpenApi)]
#[openapi(
    paths(designation_analytics),
    components(
        schemas(DesignationBreakdown),
        responses(UnauthorizedResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Admin: Analytics", description = "Derived attendee statistics")
    )
)]
pub struct AnalyticsApiDoc;

/// Public routes: registration and the headcount.
pub fn public_router<S: DocumentStore<Attendee> + 'static>(service: AttendeeService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(register_attendee))
        .route("/count", get(count_attendees))
        .with_state(shared_service)
}

/// Admin roster routes. The caller layers the admin gate on top.
pub fn admin_router<S: DocumentStore<Attendee> + 'static>(service: AttendeeService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_attendees))
        .route("/{id}", get(get_attendee).delete(delete_attendee))
        .with_state(shared_service)
}

/// Admin analytics routes. The caller layers the admin gate on top.
pub fn analytics_router<S: DocumentStore<Attendee> + 'static>(
    service: AttendeeService<S>,
) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/designation", get(designation_analytics))
        .with_state(shared_service)
}

/// Register for the workshop
#[utoipa::path(
    post,
    path = "",
    tag = "Attendees",
    request_body = RegisterAttendee,
    responses(
        (status = 201, description = "Attendee registered", body = DataResponse<Attendee>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn register_attendee<S: DocumentStore<Attendee> + 'static>(
    State(service): State<Arc<AttendeeService<S>>>,
    ValidatedJson(input): ValidatedJson<RegisterAttendee>,
) -> AttendeeResult<impl IntoResponse> {
    let attendee = service.register(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(REGISTERED_MESSAGE, attendee)),
    ))
}

/// Number of registered attendees
#[utoipa::path(
    get,
    path = "/count",
    tag = "Attendees",
    responses(
        (status = 200, description = "Current headcount", body = AttendeeCount),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn count_attendees<S: DocumentStore<Attendee> + 'static>(
    State(service): State<Arc<AttendeeService<S>>>,
) -> AttendeeResult<Json<AttendeeCount>> {
    let count = service.count_attendees().await?;
    Ok(Json(AttendeeCount { count }))
}

/// List every registered attendee
#[utoipa::path(
    get,
    path = "",
    tag = "Admin: Attendees",
    security(("admin_password" = [])),
    responses(
        (status = 200, description = "All attendees", body = Vec<Attendee>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_attendees<S: DocumentStore<Attendee> + 'static>(
    State(service): State<Arc<AttendeeService<S>>>,
) -> AttendeeResult<Json<Vec<Attendee>>> {
    let attendees = service.list_attendees().await?;
    Ok(Json(attendees))
}

/// Get an attendee by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Admin: Attendees",
    security(("admin_password" = [])),
    params(
        ("id" = String, Path, description = "Attendee ID")
    ),
    responses(
        (status = 200, description = "Attendee found", body = Attendee),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_attendee<S: DocumentStore<Attendee> + 'static>(
    State(service): State<Arc<AttendeeService<S>>>,
    Path(id): Path<String>,
) -> AttendeeResult<Json<Attendee>> {
    let attendee = service.get_attendee(&id).await?;
    Ok(Json(attendee))
}

/// Delete an attendee
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Admin: Attendees",
    security(("admin_password" = [])),
    params(
        ("id" = String, Path, description = "Attendee ID")
    ),
    responses(
        (status = 200, description = "Attendee deleted (also when it did not exist)", body = MessageResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_attendee<S: DocumentStore<Attendee> + 'static>(
    State(service): State<Arc<AttendeeService<S>>>,
    Path(id): Path<String>,
) -> AttendeeResult<Json<MessageResponse>> {
    service.delete_attendee(&id).await?;
    Ok(Json(MessageResponse::new(DELETED_MESSAGE)))
}

/// Attendee counts per designation
#[utoipa::path(
    get,
    path = "/designation",
    tag = "Admin: Analytics",
    security(("admin_password" = [])),
    responses(
        (status = 200, description = "One row per distinct designation", body = Vec<DesignationBreakdown>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn designation_analytics<S: DocumentStore<Attendee> + 'static>(
    State(service): State<Arc<AttendeeService<S>>>,
) -> AttendeeResult<Json<Vec<DesignationBreakdown>>> {
    let rows = service.designation_breakdown().await?;
    Ok(Json(rows))
}
