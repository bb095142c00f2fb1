//! OpenAPI documentation configuration

use axum_helpers::ADMIN_PASSWORD_HEADER;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Workshop API",
        version = "0.1.0",
        description = "Registration, speakers and schedule for a workshop event",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/attendees", api = domain_attendees::ApiDoc),
        (path = "/api/speakers", api = domain_speakers::ApiDoc),
        (path = "/api/sessions", api = domain_sessions::ApiDoc),
        (path = "/api/admin/attendees", api = domain_attendees::AdminApiDoc),
        (path = "/api/admin/speakers", api = domain_speakers::AdminApiDoc),
        (path = "/api/admin/sessions", api = domain_sessions::AdminApiDoc),
        (path = "/api/admin/analytics", api = domain_attendees::AnalyticsApiDoc)
    ),
    modifiers(&AdminPasswordScheme),
    tags(
        (name = "Attendees", description = "Workshop registration"),
        (name = "Speakers", description = "Speaker profiles"),
        (name = "Sessions", description = "Workshop schedule"),
        (name = "Admin: Attendees", description = "Attendee roster management"),
        (name = "Admin: Speakers", description = "Speaker management"),
        (name = "Admin: Sessions", description = "Session management"),
        (name = "Admin: Analytics", description = "Derived attendee statistics")
    )
)]
pub struct ApiDoc;

/// Registers the `admin_password` header scheme referenced by admin paths.
struct AdminPasswordScheme;

impl Modify for AdminPasswordScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "admin_password",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(ADMIN_PASSWORD_HEADER))),
        );
    }
}
