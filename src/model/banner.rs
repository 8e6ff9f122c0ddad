use bson::{oid::ObjectId, Bson, Document};
use serde::{Deserialize, Serialize};

#[allow(non_snake_case)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgImage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub couponCode: Option<String>,
    /// Number or numeric string, as entered in the admin form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discountRate: Option<Bson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expireDate: Option<String>,
    /// Public pages only show banners whose status matches the requested one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}
