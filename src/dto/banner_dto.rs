use bson::{Bson, Document};
use serde::{Deserialize, Serialize};

use crate::dto::without_keys;
use crate::model::banner::Banner;

/// Body of both `POST /addBanner` and `PATCH /updateBanner/{id}`.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BannerRequest {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discountRate: Option<Bson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expireDate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

impl From<BannerRequest> for Banner {
    fn from(req: BannerRequest) -> Self {
        Banner {
            id: None,
            title: req.title,
            image: req.image,
            bgImage: req.bgImage,
            text: req.text,
            couponCode: req.couponCode,
            discountRate: req.discountRate,
            expireDate: req.expireDate,
            status: req.status,
            extra: without_keys(req.extra, &["_id"]),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: Option<String>,
}
