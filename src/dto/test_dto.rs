use bson::{Bson, Document};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::without_keys;
use crate::model::diagnostic_test::DiagnosticTest;

const DEFAULT_PAGE_SIZE: i64 = 10;

#[allow(non_snake_case)]
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTestRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub sample_type: Option<String>,
    pub purpose: Option<String>,
    pub price: Option<Bson>,
    pub slot: Option<Bson>,
    pub date: Option<String>,
    pub bookedCount: Option<Bson>,
    #[serde(flatten)]
    pub extra: Document,
}

impl From<CreateTestRequest> for DiagnosticTest {
    fn from(req: CreateTestRequest) -> Self {
        DiagnosticTest {
            id: None,
            name: req.name,
            description: req.description,
            category: req.category,
            image: req.image,
            sample_type: req.sample_type,
            purpose: req.purpose,
            price: req.price,
            slot: req.slot,
            date: req.date,
            bookedCount: Some(req.bookedCount.unwrap_or(Bson::Int32(0))),
            extra: without_keys(req.extra, &["_id"]),
        }
    }
}

/// Descriptive fields of a test. Slot and booking counters change through
/// the booking endpoint instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTestRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Bson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<Bson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// `?page=&size=` of `GET /allTests`. Values are not bounds-checked.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl PageQuery {
    /// Returns `(skip, limit)` for the driver: skip is `page * size`
    /// clamped at zero, limit is `size` as given.
    pub fn skip_limit(&self) -> (u64, i64) {
        let page = self.page.unwrap_or(0);
        let size = self.size.unwrap_or(DEFAULT_PAGE_SIZE);
        let skip = page.saturating_mul(size).max(0) as u64;
        (skip, size)
    }
}
