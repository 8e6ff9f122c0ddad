use bson::{Bson, Document};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::without_keys;
use crate::model::appointment::Appointment;

#[allow(non_snake_case)]
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAppointmentRequest {
    #[validate(email)]
    pub email: String,
    pub name: Option<String>,
    pub testId: Option<String>,
    pub testName: Option<String>,
    pub date: Option<String>,
    pub price: Option<Bson>,
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

impl From<CreateAppointmentRequest> for Appointment {
    fn from(req: CreateAppointmentRequest) -> Self {
        Appointment {
            id: None,
            email: req.email,
            name: req.name,
            testId: req.testId,
            testName: req.testName,
            date: req.date,
            price: req.price,
            status: Some(req.status.unwrap_or_else(|| Appointment::STATUS_PENDING.to_string())),
            resultUrl: None,
            extra: without_keys(req.extra, &["_id", "resultUrl"]),
        }
    }
}

/// Body of `PATCH /appointments/delivery/{id}`.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DeliveryRequest {
    #[validate(url)]
    pub resultUrl: String,
}
