use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use crate::dto::payment_dto::{CreatePaymentIntentRequest, PaymentHistoryRequest, PaymentIntentResponse};
use crate::dto::response_dto::InsertResponse;
use crate::model::payment::PaymentRecord;
use crate::handler::extract::ApiJson;
use crate::service::payment_service::{PaymentService, PaymentServiceImpl};
use crate::util::error::HandlerError;

pub async fn create_payment_intent_handler(
    State(service): State<Arc<PaymentServiceImpl>>,
    ApiJson(payload): ApiJson<CreatePaymentIntentRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let client_secret = service.create_intent(payload.price).await?;
    Ok(Json(PaymentIntentResponse { clientSecret: client_secret }))
}

pub async fn payment_history_handler(
    State(service): State<Arc<PaymentServiceImpl>>,
    ApiJson(payload): ApiJson<PaymentHistoryRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let outcome = service.record(PaymentRecord::from(payload)).await?;
    Ok(Json(InsertResponse::from(outcome)))
}
