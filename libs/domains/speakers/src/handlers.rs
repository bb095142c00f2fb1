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
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::SpeakerResult;
use crate::models::{Speaker, SpeakerInput};
use crate::service::SpeakerService;

pub const CREATED_MESSAGE: &str = "Speaker created successfully";
pub const UPDATED_MESSAGE: &str = "Speaker updated successfully";
pub const DELETED_MESSAGE: &str = "Speaker deleted successfully";

/// OpenAPI documentation for the public speaker endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_speakers, get_speaker),
    components(
        schemas(Speaker),
        responses(NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Speakers", description = "Speaker profiles")
    )
)]
pub struct ApiDoc;

/// OpenAPI documentation for speaker administration
#[derive(OpenApi)]
#[openapi(
    paths(
        admin_list_speakers,
        admin_get_speaker,
        create_speaker,
        update_speaker,
        delete_speaker,
    ),
    components(
        schemas(Speaker, SpeakerInput, MessageResponse),
        responses(
            BadRequestResponse,
            NotFoundResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Admin: Speakers", description = "Speaker management")
    )
)]
pub struct AdminApiDoc;

/// Read-only speaker routes.
pub fn public_router<S: DocumentStore<Speaker> + 'static>(service: SpeakerService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_speakers))
        .route("/{id}", get(get_speaker))
        .with_state(shared_service)
}

/// Speaker CRUD. The caller layers the admin gate on top.
pub fn admin_router<S: DocumentStore<Speaker> + 'static>(service: SpeakerService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(admin_list_speakers).post(create_speaker))
        .route(
            "/{id}",
            get(admin_get_speaker)
                .put(update_speaker)
                .delete(delete_speaker),
        )
        .with_state(shared_service)
}

/// List all speakers
#[utoipa::path(
    get,
    path = "",
    tag = "Speakers",
    responses(
        (status = 200, description = "All speakers", body = Vec<Speaker>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_speakers<S: DocumentStore<Speaker> + 'static>(
    State(service): State<Arc<SpeakerService<S>>>,
) -> SpeakerResult<Json<Vec<Speaker>>> {
    let speakers = service.list_speakers().await?;
    Ok(Json(speakers))
}

/// Get a speaker by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Speakers",
    params(
        ("id" = String, Path, description = "Speaker ID")
    ),
    responses(
        (status = 200, description = "Speaker found", body = Speaker),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_speaker<S: DocumentStore<Speaker> + 'static>(
    State(service): State<Arc<SpeakerService<S>>>,
    Path(id): Path<String>,
) -> SpeakerResult<Json<Speaker>> {
    let speaker = service.get_speaker(&id).await?;
    Ok(Json(speaker))
}

/// List all speakers (admin)
#[utoipa::path(
    get,
    path = "",
    tag = "Admin: Speakers",
    security(("admin_password" = [])),
    responses(
        (status = 200, description = "All speakers", body = Vec<Speaker>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn admin_list_speakers<S: DocumentStore<Speaker> + 'static>(
    state: State<Arc<SpeakerService<S>>>,
) -> SpeakerResult<Json<Vec<Speaker>>> {
    list_speakers(state).await
}

/// Get a speaker by ID (admin)
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Admin: Speakers",
    security(("admin_password" = [])),
    params(
        ("id" = String, Path, description = "Speaker ID")
    ),
    responses(
        (status = 200, description = "Speaker found", body = Speaker),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn admin_get_speaker<S: DocumentStore<Speaker> + 'static>(
    state: State<Arc<SpeakerService<S>>>,
    id: Path<String>,
) -> SpeakerResult<Json<Speaker>> {
    get_speaker(state, id).await
}

/// Create a speaker
#[utoipa::path(
    post,
    path = "",
    tag = "Admin: Speakers",
    security(("admin_password" = [])),
    request_body = SpeakerInput,
    responses(
        (status = 201, description = "Speaker created", body = DataResponse<Speaker>),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_speaker<S: DocumentStore<Speaker> + 'static>(
    State(service): State<Arc<SpeakerService<S>>>,
    ValidatedJson(input): ValidatedJson<SpeakerInput>,
) -> SpeakerResult<impl IntoResponse> {
    let speaker = service.create_speaker(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(CREATED_MESSAGE, speaker)),
    ))
}

/// Replace a speaker
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Admin: Speakers",
    security(("admin_password" = [])),
    params(
        ("id" = String, Path, description = "Speaker ID")
    ),
    request_body = SpeakerInput,
    responses(
        (status = 200, description = "Speaker stored under the path id", body = DataResponse<Speaker>),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_speaker<S: DocumentStore<Speaker> + 'static>(
    State(service): State<Arc<SpeakerService<S>>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<SpeakerInput>,
) -> SpeakerResult<Json<DataResponse<Speaker>>> {
    let speaker = service.update_speaker(&id, input).await?;
    Ok(Json(DataResponse::new(UPDATED_MESSAGE, speaker)))
}

/// Delete a speaker
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Admin: Speakers",
    security(("admin_password" = [])),
    params(
        ("id" = String, Path, description = "Speaker ID")
    ),
    responses(
        (status = 200, description = "Speaker deleted (also when it did not exist)", body = MessageResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_speaker<S: DocumentStore<Speaker> + 'static>(
    State(service): State<Arc<SpeakerService<S>>>,
    Path(id): Path<String>,
) -> SpeakerResult<Json<MessageResponse>> {
    service.delete_speaker(&id).await?;
    Ok(Json(MessageResponse::new(DELETED_MESSAGE)))
}
