use axum::{extract::{Path, State}, response::IntoResponse, Json};
use std::sync::Arc;

use crate::dto::appointment_dto::{CreateAppointmentRequest, DeliveryRequest};
use crate::dto::banner_dto::StatusQuery;
use crate::dto::response_dto::{DeleteResponse, InsertResponse, Resource, UpdateResponse};
use crate::dto::user_dto::EmailQuery;
use crate::handler::{parse_id, validate_payload};
use crate::model::appointment::Appointment;
use crate::handler::extract::{ApiJson, ApiQuery};
use crate::service::appointment_service::{AppointmentService, AppointmentServiceImpl};
use crate::util::error::HandlerError;

pub async fn list_appointments_handler(
    State(service): State<Arc<AppointmentServiceImpl>>,
    ApiQuery(query): ApiQuery<StatusQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    Ok(Json(Resource::many(service.list(query.status.as_deref()).await?)))
}

pub async fn search_appointments_handler(
    State(service): State<Arc<AppointmentServiceImpl>>,
    ApiQuery(query): ApiQuery<EmailQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    Ok(Json(Resource::many(service.search(&query.email).await?)))
}

pub async fn create_appointment_handler(
    State(service): State<Arc<AppointmentServiceImpl>>,
    ApiJson(payload): ApiJson<CreateAppointmentRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    validate_payload(&payload)?;
    let outcome = service.create(Appointment::from(payload)).await?;
    Ok(Json(InsertResponse::from(outcome)))
}

pub async fn cancel_appointment_handler(
    State(service): State<Arc<AppointmentServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_id(&id)?;
    let outcome = service.cancel(id).await?;
    Ok(Json(UpdateResponse::from(outcome)))
}

pub async fn deliver_appointment_handler(
    State(service): State<Arc<AppointmentServiceImpl>>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<DeliveryRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_id(&id)?;
    validate_payload(&payload)?;
    let outcome = service.deliver(id, payload.resultUrl).await?;
    Ok(Json(UpdateResponse::from(outcome)))
}

pub async fn delete_appointment_handler(
    State(service): State<Arc<AppointmentServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_id(&id)?;
    let outcome = service.delete(id).await?;
    Ok(Json(DeleteResponse::from(outcome)))
}
