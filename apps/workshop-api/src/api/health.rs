//! Readiness endpoint

use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use std::future::Future;

use crate::state::AppState;

/// Create the readiness router (mounted at the root, next to `/health`)
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - pings the document store backend
async fn readiness_check(State(state): State<AppState>) -> Response {
    let check = match &state.mongo_client {
        Some(client) => (
            "mongodb",
            boxed(async move {
                database::mongodb::check_health(client)
                    .await
                    .map_err(|e| e.to_string())
            }),
        ),
        None => ("memory", boxed(async { Ok::<(), String>(()) })),
    };

    match run_health_checks(vec![check]).await {
        Ok(ready) => ready.into_response(),
        Err(not_ready) => not_ready.into_response(),
    }
}

fn boxed<'a>(check: impl Future<Output = Result<(), String>> + Send + 'a) -> HealthCheckFuture<'a> {
    Box::pin(check)
}
