//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the school and health endpoints plus the schema
//! wrappers from [`crate::inbound::http::schemas`]. Swagger UI serves it in
//! debug builds; `cargo run --bin openapi-dump` prints it for tooling.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    DeletedEnvelopeSchema, DeletedSchoolSchema, ErrorCodeSchema, ErrorSchema,
    SchoolEnvelopeSchema, SchoolListEnvelopeSchema,
};
use crate::inbound::http::schools::{SchoolRequest, SchoolResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "School directory API",
        description = "Create, browse and maintain the school directory."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::schools::create_school,
        crate::inbound::http::schools::list_schools,
        crate::inbound::http::schools::get_school,
        crate::inbound::http::schools::update_school,
        crate::inbound::http::schools::delete_school,
        crate::inbound::http::schools::schools_by_city,
        crate::inbound::http::schools::schools_by_state,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        SchoolRequest,
        SchoolResponse,
        SchoolEnvelopeSchema,
        SchoolListEnvelopeSchema,
        DeletedSchoolSchema,
        DeletedEnvelopeSchema,
        ErrorSchema,
        ErrorCodeSchema,
    )),
    tags(
        (name = "schools", description = "School directory operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
