use axum::{extract::{Path, State}, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::debug;

use crate::dto::response_dto::{CountResponse, DeleteResponse, InsertResponse, Resource, UpdateResponse};
use crate::dto::test_dto::{CreateTestRequest, PageQuery, UpdateTestRequest};
use crate::handler::{parse_id, set_fields, validate_payload};
use crate::model::diagnostic_test::DiagnosticTest;
use crate::handler::extract::{ApiJson, ApiQuery};
use crate::service::test_service::{TestService, TestServiceImpl};
use crate::util::error::HandlerError;

pub async fn list_tests_handler(
    State(service): State<Arc<TestServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    Ok(Json(Resource::many(service.list().await?)))
}

pub async fn paged_tests_handler(
    State(service): State<Arc<TestServiceImpl>>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let (skip, limit) = query.skip_limit();
    debug!(skip, limit, "Paging tests");
    Ok(Json(Resource::many(service.list_page(skip, limit).await?)))
}

pub async fn test_count_handler(
    State(service): State<Arc<TestServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let count = service.count().await?;
    Ok(Json(CountResponse { count }))
}

pub async fn get_test_handler(
    State(service): State<Arc<TestServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_id(&id)?;
    Ok(Json(Resource::from(service.get(id).await?)))
}

pub async fn add_test_handler(
    State(service): State<Arc<TestServiceImpl>>,
    ApiJson(payload): ApiJson<CreateTestRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    validate_payload(&payload)?;
    let outcome = service.create(DiagnosticTest::from(payload)).await?;
    Ok(Json(InsertResponse::from(outcome)))
}

pub async fn update_test_handler(
    State(service): State<Arc<TestServiceImpl>>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateTestRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_id(&id)?;
    let fields = set_fields(&payload)?;
    let outcome = service.update(id, fields).await?;
    Ok(Json(UpdateResponse::from(outcome)))
}

pub async fn book_test_handler(
    State(service): State<Arc<TestServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_id(&id)?;
    let outcome = service.book(id).await?;
    Ok(Json(UpdateResponse::from(outcome)))
}

pub async fn delete_test_handler(
    State(service): State<Arc<TestServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_id(&id)?;
    let outcome = service.delete(id).await?;
    Ok(Json(DeleteResponse::from(outcome)))
}
