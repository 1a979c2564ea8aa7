//! OpenAPI documentation for the JSON endpoints.
//!
//! The HTML pages and form posts are left out; the document covers the
//! student booking endpoints, the health probes and the shared error
//! envelope. Swagger UI serves it in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::booking::{
    BookSeatForm, BookSeatResponse, BusView, PaymentResponse, RouteForm,
};

/// Describe the session cookie set by `POST /login`.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /login. Optional for booking.",
            ))),
        );
    }
}

/// OpenAPI document for the booking API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Campus bus booking API",
        description = "JSON endpoints used by the student booking page, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::booking::book_seat,
        crate::inbound::http::booking::buses_for_route,
        crate::inbound::http::booking::complete_payment,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        BookSeatForm,
        BookSeatResponse,
        RouteForm,
        BusView,
        PaymentResponse
    )),
    tags(
        (name = "student", description = "Seat booking and route lookup"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use utoipa::OpenApi;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/student/book-seat")]
    #[case("/student/get-buses-for-route")]
    #[case("/student/complete-payment")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn documents_json_endpoints(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    fn error_schema_has_code_and_message() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get("Error").expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
    }

    #[rstest]
    fn bus_view_uses_camel_case_keys() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let bus = schemas.get("BusView").expect("BusView schema");

        assert_object_schema_has_field(bus, "totalSeats");
        assert_object_schema_has_field(bus, "seatsRemaining");
    }
}
