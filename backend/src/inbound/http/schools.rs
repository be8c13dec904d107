//! School directory HTTP handlers.
//!
//! ```text
//! POST   /api/schools/add
//! GET    /api/schools/getschools
//! GET    /api/schools/get/{id}
//! PUT    /api/schools/{id}
//! DELETE /api/schools/{id}
//! GET    /api/schools/city/{city}
//! GET    /api/schools/state/{state}
//! ```
//!
//! Successful responses use the envelope the directory frontend expects:
//! `{"success": true, "message": ..., "data": ..., "count": ...}`.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, School, SchoolCandidate};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    DeletedEnvelopeSchema, ErrorSchema, SchoolEnvelopeSchema, SchoolListEnvelopeSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{CITY, STATE, parse_id_segment, parse_region_segment};

/// Request payload for creating or replacing a school.
///
/// Every field is optional at the wire level so that missing values are
/// reported alongside all other validation failures.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct SchoolRequest {
    #[schema(example = "Oak Hill")]
    pub name: Option<String>,
    #[schema(example = "1 Oak Way")]
    pub address: Option<String>,
    #[schema(example = "Springfield")]
    pub city: Option<String>,
    #[schema(example = "Illinois")]
    pub state: Option<String>,
    #[schema(example = "5551234567")]
    pub contact: Option<String>,
    #[schema(example = "admin@oak.edu")]
    pub email_id: Option<String>,
    /// Image URL, or image metadata from the upload pipeline.
    #[schema(value_type = Option<Object>)]
    pub image: Option<serde_json::Value>,
}

impl From<SchoolRequest> for SchoolCandidate {
    fn from(value: SchoolRequest) -> Self {
        Self {
            name: value.name,
            address: value.address,
            city: value.city,
            state: value.state,
            contact: value.contact,
            email_id: value.email_id,
            image: value.image,
        }
    }
}

/// Stored school as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SchoolResponse {
    #[schema(example = 7)]
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact: String,
    pub email_id: String,
    pub image: Option<String>,
    #[schema(example = "2024-05-01T09:00:00+00:00")]
    pub created_at: String,
    pub updated_at: String,
}

impl From<School> for SchoolResponse {
    fn from(value: School) -> Self {
        Self {
            id: value.id.get(),
            name: value.name,
            address: value.address,
            city: value.city,
            state: value.state,
            contact: value.contact,
            email_id: value.email_id,
            image: value.image,
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}

/// Success envelope wrapping handler payloads.
#[derive(Debug, Serialize)]
struct Envelope<T> {
    success: bool,
    message: String,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
}

impl<T: Serialize> Envelope<T> {
    fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
            count: None,
        }
    }
}

fn single(message: &str, school: School) -> Envelope<SchoolResponse> {
    Envelope::new(message, SchoolResponse::from(school))
}

fn listing(message: impl Into<String>, schools: Vec<School>) -> Envelope<Vec<SchoolResponse>> {
    let data: Vec<SchoolResponse> = schools.into_iter().map(SchoolResponse::from).collect();
    let count = data.len();
    Envelope {
        count: Some(count),
        ..Envelope::new(message, data)
    }
}

fn school_not_found(id: i64) -> Error {
    Error::not_found("School not found").with_details(json!({ "id": id }))
}

/// Create a school.
#[utoipa::path(
    post,
    path = "/api/schools/add",
    request_body = SchoolRequest,
    responses(
        (status = 201, description = "School created", body = SchoolEnvelopeSchema),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 409, description = "E-mail already registered", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["schools"],
    operation_id = "createSchool"
)]
#[post("/add")]
pub async fn create_school(
    state: web::Data<HttpState>,
    payload: web::Json<SchoolRequest>,
) -> ApiResult<HttpResponse> {
    let school = state.schools.create(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(single("School created successfully", school)))
}

/// List every school, newest first.
#[utoipa::path(
    get,
    path = "/api/schools/getschools",
    responses(
        (status = 200, description = "All schools", body = SchoolListEnvelopeSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["schools"],
    operation_id = "listSchools"
)]
#[get("/getschools")]
pub async fn list_schools(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let schools = state.schools_query.find_all().await?;
    Ok(HttpResponse::Ok().json(listing("Schools retrieved successfully", schools)))
}

/// Fetch one school.
#[utoipa::path(
    get,
    path = "/api/schools/get/{id}",
    params(("id" = i64, Path, description = "School identifier")),
    responses(
        (status = 200, description = "School", body = SchoolEnvelopeSchema),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "School not found", body = ErrorSchema)
    ),
    tags = ["schools"],
    operation_id = "getSchool"
)]
#[get("/get/{id}")]
pub async fn get_school(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_id_segment(&path)?;
    let school = state
        .schools_query
        .find_by_id(id)
        .await?
        .ok_or_else(|| school_not_found(id))?;
    Ok(HttpResponse::Ok().json(single("School retrieved successfully", school)))
}

/// Replace a school's fields.
#[utoipa::path(
    put,
    path = "/api/schools/{id}",
    params(("id" = i64, Path, description = "School identifier")),
    request_body = SchoolRequest,
    responses(
        (status = 200, description = "School updated", body = SchoolEnvelopeSchema),
        (status = 400, description = "Validation failed or invalid identifier", body = ErrorSchema),
        (status = 404, description = "School not found", body = ErrorSchema),
        (status = 409, description = "E-mail already registered", body = ErrorSchema)
    ),
    tags = ["schools"],
    operation_id = "updateSchool"
)]
#[put("/{id}")]
pub async fn update_school(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<SchoolRequest>,
) -> ApiResult<HttpResponse> {
    let id = parse_id_segment(&path)?;
    let school = state
        .schools
        .update_by_id(id, payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().json(single("School updated successfully", school)))
}

/// Delete a school.
#[utoipa::path(
    delete,
    path = "/api/schools/{id}",
    params(("id" = i64, Path, description = "School identifier")),
    responses(
        (status = 200, description = "School deleted", body = DeletedEnvelopeSchema),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "School not found", body = ErrorSchema)
    ),
    tags = ["schools"],
    operation_id = "deleteSchool"
)]
#[delete("/{id}")]
pub async fn delete_school(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_id_segment(&path)?;
    if !state.schools.delete_by_id(id).await? {
        return Err(school_not_found(id));
    }
    Ok(HttpResponse::Ok().json(Envelope::new(
        "School deleted successfully",
        json!({ "id": id }),
    )))
}

/// Schools in a city, exact match.
#[utoipa::path(
    get,
    path = "/api/schools/city/{city}",
    params(("city" = String, Path, description = "City name, matched exactly")),
    responses(
        (status = 200, description = "Schools in the city", body = SchoolListEnvelopeSchema),
        (status = 400, description = "City name too short", body = ErrorSchema)
    ),
    tags = ["schools"],
    operation_id = "listSchoolsByCity"
)]
#[get("/city/{city}")]
pub async fn schools_by_city(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let city = parse_region_segment(&path, CITY)?;
    let schools = state.schools_query.find_by_city(&city).await?;
    Ok(HttpResponse::Ok().json(listing(
        format!("Schools in {city} retrieved successfully"),
        schools,
    )))
}

/// Schools in a state, exact match.
#[utoipa::path(
    get,
    path = "/api/schools/state/{state}",
    params(("state" = String, Path, description = "State name, matched exactly")),
    responses(
        (status = 200, description = "Schools in the state", body = SchoolListEnvelopeSchema),
        (status = 400, description = "State name too short", body = ErrorSchema)
    ),
    tags = ["schools"],
    operation_id = "listSchoolsByState"
)]
#[get("/state/{state}")]
pub async fn schools_by_state(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let region = parse_region_segment(&path, STATE)?;
    let schools = state.schools_query.find_by_state(&region).await?;
    Ok(HttpResponse::Ok().json(listing(
        format!("Schools in {region} retrieved successfully"),
        schools,
    )))
}

/// Register the school routes under `/api/schools`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/schools")
            .service(create_school)
            .service(list_schools)
            .service(get_school)
            .service(schools_by_city)
            .service(schools_by_state)
            .service(update_school)
            .service(delete_school),
    );
}

#[cfg(test)]
#[path = "schools_tests.rs"]
mod tests;
