use bson::{Bson, Document};
use serde::{Deserialize, Serialize};

use crate::dto::without_keys;
use crate::model::payment::PaymentRecord;

/// Body of `POST /create-payment-intent`. The price is in major units.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePaymentIntentRequest {
    pub price: f64,
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntentResponse {
    pub clientSecret: String,
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentHistoryRequest {
    pub price: Option<Bson>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub transactionId: Option<String>,
    pub testId: Option<String>,
    pub appointmentId: Option<String>,
    pub date: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

impl From<PaymentHistoryRequest> for PaymentRecord {
    fn from(req: PaymentHistoryRequest) -> Self {
        PaymentRecord {
            id: None,
            price: req.price,
            email: req.email,
            name: req.name,
            transactionId: req.transactionId,
            testId: req.testId,
            appointmentId: req.appointmentId,
            date: req.date,
            extra: without_keys(req.extra, &["_id"]),
        }
    }
}
