use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    DataResponse, MessageResponse, ValidatedJson,
    errors::responses::{
        BadRequestResponse, InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
    },
};
use database::DocumentStore;
use domain_speakers::Speaker;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::SessionResult;
use crate::models::{Session, SessionInput, SessionWithSpeakers};
use crate::service::SessionService;

pub const CREATED_MESSAGE: &str = "Session created successfully";
pub const UPDATED_MESSAGE: &str = "Session updated successfully";
pub const DELETED_MESSAGE: &str = "Session deleted successfully";

type SharedService<S, P> = Arc<SessionService<S, P>>;

/// OpenAPI documentation for the public session endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_sessions, get_session),
    components(
        schemas(Session, SessionWithSpeakers, Speaker),
        responses(NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Sessions", description = "Workshop schedule")
    )
)]
pub struct ApiDoc;

/// OpenAPI documentation for session administration
#[derive(OpenApi)]
#[openapi(
    paths(
        admin_list_sessions,
        admin_get_session,
        create_session,
        update_session,
        delete_session,
    ),
    components(
        schemas(Session, SessionInput, SessionWithSpeakers, Speaker, MessageResponse),
        responses(
            BadRequestResponse,
            NotFoundResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Admin: Sessions", description = "Session management")
    )
)]
pub struct AdminApiDoc;

/// Read-only session routes.
pub fn public_router<S, P>(service: SessionService<S, P>) -> Router
where
    S: DocumentStore<Session> + 'static,
    P: DocumentStore<Speaker> + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_sessions))
        .route("/{id}", get(get_session))
        .with_state(shared_service)
}

/// Session CRUD. The caller layers the admin gate on top.
pub fn admin_router<S, P>(service: SessionService<S, P>) -> Router
where
    S: DocumentStore<Session> + 'static,
    P: DocumentStore<Speaker> + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(admin_list_sessions).post(create_session))
        .route(
            "/{id}",
            get(admin_get_session)
                .put(update_session)
                .delete(delete_session),
        )
        .with_state(shared_service)
}

/// List all sessions with their speakers
#[utoipa::path(
    get,
    path = "",
    tag = "Sessions",
    responses(
        (status = 200, description = "All sessions, speakers resolved", body = Vec<SessionWithSpeakers>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_sessions<S, P>(
    State(service): State<SharedService<S, P>>,
) -> SessionResult<Json<Vec<SessionWithSpeakers>>>
where
    S: DocumentStore<Session> + 'static,
    P: DocumentStore<Speaker> + 'static,
{
    let sessions = service.list_with_speakers().await?;
    Ok(Json(sessions))
}

/// Get a session by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Sessions",
    params(
        ("id" = String, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Session found", body = Session),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_session<S, P>(
    State(service): State<SharedService<S, P>>,
    Path(id): Path<String>,
) -> SessionResult<Json<Session>>
where
    S: DocumentStore<Session> + 'static,
    P: DocumentStore<Speaker> + 'static,
{
    let session = service.get_session(&id).await?;
    Ok(Json(session))
}

/// List all sessions with their speakers (admin)
#[utoipa::path(
    get,
    path = "",
    tag = "Admin: Sessions",
    security(("admin_password" = [])),
    responses(
        (status = 200, description = "All sessions, speakers resolved", body = Vec<SessionWithSpeakers>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn admin_list_sessions<S, P>(
    state: State<SharedService<S, P>>,
) -> SessionResult<Json<Vec<SessionWithSpeakers>>>
where
    S: DocumentStore<Session> + 'static,
    P: DocumentStore<Speaker> + 'static,
{
    list_sessions(state).await
}

/// Get a session by ID (admin)
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Admin: Sessions",
    security(("admin_password" = [])),
    params(
        ("id" = String, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Session found", body = Session),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn admin_get_session<S, P>(
    state: State<SharedService<S, P>>,
    id: Path<String>,
) -> SessionResult<Json<Session>>
where
    S: DocumentStore<Session> + 'static,
    P: DocumentStore<Speaker> + 'static,
{
    get_session(state, id).await
}

/// Create a session
#[utoipa::path(
    post,
    path = "",
    tag = "Admin: Sessions",
    security(("admin_password" = [])),
    request_body = SessionInput,
    responses(
        (status = 201, description = "Session created", body = DataResponse<Session>),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_session<S, P>(
    State(service): State<SharedService<S, P>>,
    ValidatedJson(input): ValidatedJson<SessionInput>,
) -> SessionResult<impl IntoResponse>
where
    S: DocumentStore<Session> + 'static,
    P: DocumentStore<Speaker> + 'static,
{
    let session = service.create_session(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(CREATED_MESSAGE, session)),
    ))
}

/// Replace a session
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Admin: Sessions",
    security(("admin_password" = [])),
    params(
        ("id" = String, Path, description = "Session ID")
    ),
    request_body = SessionInput,
    responses(
        (status = 200, description = "Session stored under the path id", body = DataResponse<Session>),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_session<S, P>(
    State(service): State<SharedService<S, P>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<SessionInput>,
) -> SessionResult<Json<DataResponse<Session>>>
where
    S: DocumentStore<Session> + 'static,
    P: DocumentStore<Speaker> + 'static,
{
    let session = service.update_session(&id, input).await?;
    Ok(Json(DataResponse::new(UPDATED_MESSAGE, session)))
}

/// Delete a session
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Admin: Sessions",
    security(("admin_password" = [])),
    params(
        ("id" = String, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Session deleted (also when it did not exist)", body = MessageResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_session<S, P>(
    State(service): State<SharedService<S, P>>,
    Path(id): Path<String>,
) -> SessionResult<Json<MessageResponse>>
where
    S: DocumentStore<Session> + 'static,
    P: DocumentStore<Speaker> + 'static,
{
    service.delete_session(&id).await?;
    Ok(Json(MessageResponse::new(DELETED_MESSAGE)))
}
