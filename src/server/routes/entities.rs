//! CRUD endpoints for the entity tables
//!
//! `/{table}` addresses a table by name (`users`, `teams`); `/{table}/{key}`
//! addresses a record by UUID or, failing that, by name.

use crate::core::data::DataRequest;
use crate::core::models::{
    EntityKind, NewRecord, Pagination, PaginationQuery, RecordChanges, RecordKey,
};
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, Result as ActixResult, web};
use tracing::info;

/// Configure entity routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{table}")
            .route(web::get().to(list_records))
            .route(web::post().to(create_record)),
    )
    .service(
        web::resource("/{table}/{key}")
            .route(web::get().to(read_record))
            .route(web::patch().to(update_record))
            .route(web::delete().to(delete_record)),
    );
}

/// Create a record from a JSON attribute object
pub async fn create_record(
    state: web::Data<AppState>,
    table: web::Path<String>,
    body: web::Json<serde_json::Value>,
) -> ActixResult<HttpResponse> {
    let kind: EntityKind = table.parse()?;
    let record = NewRecord::from_json(kind, body.into_inner())?;

    let response = state.data.process(DataRequest::create(record)).await?;
    info!(table = %kind, "Record created");

    Ok(HttpResponse::Created().json(ApiResponse::success(response)))
}

/// List a page of records ordered by name
pub async fn list_records(
    state: web::Data<AppState>,
    table: web::Path<String>,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    let kind: EntityKind = table.parse()?;
    let pagination = Pagination::try_from(query.into_inner())?;
    let meta = serde_json::to_value(pagination).map_err(GatewayError::from)?;

    let response = state
        .data
        .process(DataRequest::list(kind, pagination))
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success_with_meta(response, meta)))
}

/// Read one record
pub async fn read_record(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> ActixResult<HttpResponse> {
    let (table, key) = path.into_inner();
    let kind: EntityKind = table.parse()?;

    let response = state
        .data
        .process(DataRequest::read(kind, RecordKey::parse(&key)))
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// Apply a partial update
pub async fn update_record(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    body: web::Json<serde_json::Value>,
) -> ActixResult<HttpResponse> {
    let (table, key) = path.into_inner();
    let kind: EntityKind = table.parse()?;
    let changes = RecordChanges::from_json(kind, body.into_inner())?;
    let key = RecordKey::parse(&key);

    let response = state
        .data
        .process(DataRequest::update(kind, key.clone(), changes))
        .await?;
    info!(table = %kind, key = %key, "Record updated");

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// Delete a record
pub async fn delete_record(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> ActixResult<HttpResponse> {
    let (table, key) = path.into_inner();
    let kind: EntityKind = table.parse()?;
    let key = RecordKey::parse(&key);

    let response = state
        .data
        .process(DataRequest::delete(kind, key.clone()))
        .await?;
    info!(table = %kind, key = %key, "Record deleted");

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}
