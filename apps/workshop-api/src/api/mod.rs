//! API routes module
//!
//! Public routes are open; everything under `/admin` passes the admin gate
//! first. Paths here are relative to `/api`, added by
//! `axum_helpers::create_router`.

pub mod health;

use axum::{Router, middleware};
use axum_helpers::{AdminGate, admin_auth_middleware, create_router, health_router};
use domain_attendees::AttendeeService;
use domain_sessions::SessionService;
use domain_speakers::SpeakerService;
use std::io;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    let attendees = AttendeeService::new(state.attendees.clone());
    let speakers = SpeakerService::new(state.speakers.clone());
    let sessions = SessionService::new(state.sessions.clone(), state.speakers.clone());
    let gate = AdminGate::new(state.config.admin_password.clone());

    let admin = Router::new()
        .nest(
            "/attendees",
            domain_attendees::handlers::admin_router(attendees.clone()),
        )
        .nest(
            "/analytics",
            domain_attendees::handlers::analytics_router(attendees.clone()),
        )
        .nest(
            "/speakers",
            domain_speakers::handlers::admin_router(speakers.clone()),
        )
        .nest(
            "/sessions",
            domain_sessions::handlers::admin_router(sessions.clone()),
        )
        .layer(middleware::from_fn_with_state(gate, admin_auth_middleware));

    Router::new()
        .nest(
            "/attendees",
            domain_attendees::handlers::public_router(attendees),
        )
        .nest("/speakers", domain_speakers::handlers::public_router(speakers))
        .nest("/sessions", domain_sessions::handlers::public_router(sessions))
        .nest("/admin", admin)
}

/// The complete application: API, docs, middleware, `/health` and `/ready`.
pub fn app(state: &AppState) -> io::Result<Router> {
    let probes = health_router(state.config.app).merge(health::router(state.clone()));

    create_router::<ApiDoc>(
        routes(state),
        probes,
        &state.config.cors,
        state.config.server.request_timeout,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment, StoreBackend};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, cors::CorsConfig, server::ServerConfig};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const PASSWORD: &str = "correct horse";

    fn config(admin_password: Option<&str>) -> Config {
        Config {
            app: app_info!(),
            environment: Environment::Development,
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            admin_password: admin_password.map(str::to_string),
            workspace_id: "test".to_string(),
            store: StoreBackend::Memory,
            mongodb: None,
        }
    }

    fn test_app(admin_password: Option<&str>) -> Router {
        app(&AppState::in_memory(config(admin_password))).unwrap()
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        password: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(password) = password {
            request = request.header("X-Admin-Password", password);
        }
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn health_and_ready_are_open() {
        let app = test_app(None);

        let (status, body) = send(&app, "GET", "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["name"], "workshop_api");

        let (status, body) = send(&app, "GET", "/ready", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn health_endpoints_carry_cors_and_security_headers() {
        let app = test_app(None);

        for uri in ["/health", "/ready"] {
            let response = app
                .clone()
                .oneshot(
                    Request::get(uri)
                        .header("origin", "http://localhost:3000")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert_eq!(
                response.headers().get("x-content-type-options").unwrap(),
                "nosniff"
            );
            assert_eq!(
                response
                    .headers()
                    .get("access-control-allow-origin")
                    .unwrap(),
                "http://localhost:3000"
            );
        }
    }

    #[tokio::test]
    async fn admin_routes_reject_missing_and_wrong_password() {
        let app = test_app(Some(PASSWORD));

        let (status, body) = send(&app, "GET", "/api/admin/attendees", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "error": "Invalid admin password" }));

        let (status, _) = send(&app, "GET", "/api/admin/speakers", Some("guess"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(
            &app,
            "GET",
            "/api/admin/analytics/designation",
            Some(PASSWORD),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn admin_routes_fail_closed_without_configured_password() {
        let app = test_app(None);

        let (status, body) = send(
            &app,
            "POST",
            "/api/admin/speakers",
            Some("anything"),
            Some(json!({ "name": "Grace", "bio": "Admiral" })),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Admin password not configured" }));

        let (_, speakers) = send(&app, "GET", "/api/speakers", None, None).await;
        assert_eq!(speakers, json!([]));
    }

    #[tokio::test]
    async fn public_routes_ignore_admin_gate() {
        let app = test_app(None);

        let (status, body) = send(
            &app,
            "POST",
            "/api/attendees",
            None,
            Some(json!({ "name": "Ada", "email": "ada@example.com", "designation": "Eng" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Registration successful");

        let (status, body) = send(&app, "GET", "/api/attendees/count", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "count": 1 }));
    }

    #[tokio::test]
    async fn admin_writes_show_up_in_public_schedule() {
        let app = test_app(Some(PASSWORD));

        let (status, created) = send(
            &app,
            "POST",
            "/api/admin/speakers",
            Some(PASSWORD),
            Some(json!({ "name": "Grace", "bio": "Admiral" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let speaker_id = created["data"]["id"].as_str().unwrap().to_string();

        let (status, _) = send(
            &app,
            "PUT",
            "/api/admin/sessions/opening",
            Some(PASSWORD),
            Some(json!({
                "title": "Opening keynote",
                "description": "Welcome",
                "time": "09:00",
                "speakerIds": [speaker_id, "ghost"]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, schedule) = send(&app, "GET", "/api/sessions", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(schedule[0]["id"], "opening");
        assert_eq!(schedule[0]["speakers"].as_array().unwrap().len(), 1);
        assert_eq!(schedule[0]["speakers"][0]["name"], "Grace");

        let (status, session) = send(&app, "GET", "/api/sessions/opening", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(session.get("speakers").is_none());
    }

    #[tokio::test]
    async fn designation_analytics_counts_registrations() {
        let app = test_app(Some(PASSWORD));
        for (name, designation) in [("a", "Eng"), ("b", "Eng"), ("c", "PM")] {
            send(
                &app,
                "POST",
                "/api/attendees",
                None,
                Some(json!({
                    "name": name,
                    "email": format!("{name}@example.com"),
                    "designation": designation
                })),
            )
            .await;
        }

        let (status, rows) = send(
            &app,
            "GET",
            "/api/admin/analytics/designation",
            Some(PASSWORD),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let rows = rows.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        let total: u64 = rows.iter().map(|r| r["count"].as_u64().unwrap()).sum();
        assert_eq!(total, 3);
    }

    #[tokio::test]
    async fn public_surface_has_no_write_routes_for_speakers() {
        let app = test_app(Some(PASSWORD));

        let (status, _) = send(
            &app,
            "POST",
            "/api/speakers",
            None,
            Some(json!({ "name": "Grace", "bio": "Admiral" })),
        )
        .await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
