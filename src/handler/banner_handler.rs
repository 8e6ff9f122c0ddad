use axum::{extract::{Path, State}, response::IntoResponse, Json};
use std::sync::Arc;

use crate::dto::banner_dto::{BannerRequest, StatusQuery};
use crate::dto::response_dto::{DeleteResponse, InsertResponse, Resource, UpdateResponse};
use crate::handler::{parse_id, set_fields};
use crate::model::banner::Banner;
use crate::handler::extract::{ApiJson, ApiQuery};
use crate::service::banner_service::{BannerService, BannerServiceImpl};
use crate::util::error::HandlerError;

pub async fn list_banners_handler(
    State(service): State<Arc<BannerServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    Ok(Json(Resource::many(service.list().await?)))
}

/// Banners whose status equals `?status=`. Without the parameter nothing matches.
pub async fn active_banner_handler(
    State(service): State<Arc<BannerServiceImpl>>,
    ApiQuery(query): ApiQuery<StatusQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let banners = match query.status {
        Some(status) => service.list_by_status(&status).await?,
        None => Vec::new(),
    };
    Ok(Json(Resource::many(banners)))
}

pub async fn add_banner_handler(
    State(service): State<Arc<BannerServiceImpl>>,
    ApiJson(payload): ApiJson<BannerRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let outcome = service.create(Banner::from(payload)).await?;
    Ok(Json(InsertResponse::from(outcome)))
}

pub async fn update_banner_handler(
    State(service): State<Arc<BannerServiceImpl>>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<BannerRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_id(&id)?;
    let fields = set_fields(&payload)?;
    let outcome = service.update(id, fields).await?;
    Ok(Json(UpdateResponse::from(outcome)))
}

pub async fn delete_banner_handler(
    State(service): State<Arc<BannerServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_id(&id)?;
    let outcome = service.delete(id).await?;
    Ok(Json(DeleteResponse::from(outcome)))
}
