use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use crate::dto::response_dto::Resource;
use crate::service::catalog_service::{CatalogService, CatalogServiceImpl};
use crate::util::error::HandlerError;

pub async fn promotions_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    Ok(Json(Resource::many(service.promotions().await?)))
}

pub async fn recommendations_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    Ok(Json(Resource::many(service.recommendations().await?)))
}
