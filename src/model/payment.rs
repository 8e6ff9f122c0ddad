use bson::{oid::ObjectId, Bson, Document};
use serde::{Deserialize, Serialize};

/// Record of a completed payment. Insert-only.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Bson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactionId: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testId: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointmentId: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}
