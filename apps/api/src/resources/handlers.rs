use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::{DocumentQueries, ResourceService, Services};
use crate::errors::{AppError, AppJson, AppQuery};
use crate::models::document::{Document, DocumentSearch, DocumentStats};
use crate::models::{Resource, ResourceId};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedResponse {
    pub deleted_id: ResourceId,
}

/// Routes for every entity kind.
pub fn resource_router(services: &Services) -> Router {
    Router::new()
        .route("/documents/stats", get(handle_document_stats))
        .route("/documents/search", get(handle_search_documents))
        .with_state(services.document_queries.clone())
        .merge(crud_routes(services.documents.clone()))
        .merge(crud_routes(services.personnel.clone()))
        .merge(crud_routes(services.projects.clone()))
}

/// `GET/POST <base>` and `GET/PUT/DELETE <base>/:id` for one entity kind.
fn crud_routes<R: Resource>(service: ResourceService<R>) -> Router {
    let base = R::BASE_PATH;
    Router::new()
        .route(base, get(handle_list::<R>).post(handle_create::<R>))
        .route(
            &format!("{base}/:id"),
            get(handle_get::<R>)
                .put(handle_update::<R>)
                .delete(handle_delete::<R>),
        )
        .with_state(service)
}

/// Ids are integers; anything else can never name a stored row.
fn parse_id<R: Resource>(raw: &str) -> Result<ResourceId, AppError> {
    raw.trim()
        .parse::<ResourceId>()
        .map_err(|_| AppError::NotFound(format!("{} {raw} not found", R::LABEL)))
}

/// GET /<entity>
pub async fn handle_list<R: Resource>(
    State(service): State<ResourceService<R>>,
) -> Result<Json<Vec<R>>, AppError> {
    Ok(Json(service.list().await?))
}

/// GET /<entity>/:id
pub async fn handle_get<R: Resource>(
    State(service): State<ResourceService<R>>,
    Path(raw_id): Path<String>,
) -> Result<Json<R>, AppError> {
    let id = parse_id::<R>(&raw_id)?;
    Ok(Json(service.get(id).await?))
}

/// POST /<entity>
pub async fn handle_create<R: Resource>(
    State(service): State<ResourceService<R>>,
    AppJson(input): AppJson<R::Create>,
) -> Result<(StatusCode, Json<R>), AppError> {
    let created = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /<entity>/:id
pub async fn handle_update<R: Resource>(
    State(service): State<ResourceService<R>>,
    Path(raw_id): Path<String>,
    AppJson(patch): AppJson<R::Update>,
) -> Result<Json<R>, AppError> {
    let id = parse_id::<R>(&raw_id)?;
    Ok(Json(service.update(id, patch).await?))
}

/// DELETE /<entity>/:id
pub async fn handle_delete<R: Resource>(
    State(service): State<ResourceService<R>>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeletedResponse>, AppError> {
    let id = parse_id::<R>(&raw_id)?;
    let deleted_id = service.delete(id).await?;
    Ok(Json(DeletedResponse { deleted_id }))
}

/// GET /documents/stats
pub async fn handle_document_stats(
    State(queries): State<DocumentQueries>,
) -> Result<Json<DocumentStats>, AppError> {
    Ok(Json(queries.stats().await?))
}

/// GET /documents/search?search=&type=&project=
pub async fn handle_search_documents(
    State(queries): State<DocumentQueries>,
    AppQuery(criteria): AppQuery<DocumentSearch>,
) -> Result<Json<Vec<Document>>, AppError> {
    Ok(Json(queries.search(&criteria).await?))
}
