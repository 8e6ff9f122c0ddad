use bson::{oid::ObjectId, Bson, Document};
use serde::{Deserialize, Serialize};

#[allow(non_snake_case)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testId: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testName: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Bson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resultUrl: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

impl Appointment {
    pub const STATUS_PENDING: &'static str = "pending";
    pub const STATUS_CANCELED: &'static str = "canceled";
    pub const STATUS_DELIVERED: &'static str = "delivered";
}
