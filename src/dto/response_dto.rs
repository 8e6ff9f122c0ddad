//! Response bodies. Reads wrap stored documents in [`Resource`]; writes
//! report what the database did.

use serde::Serialize;

use crate::model::Identified;
use crate::repository::outcome::{DeleteOutcome, InsertOutcome, UpdateOutcome};

/// A stored document as clients see it: `_id` is the plain hex string that
/// the `{id}` path segments accept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource<T> {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Identified> From<T> for Resource<T> {
    fn from(mut body: T) -> Self {
        let id = body.take_id().map(|id| id.to_hex());
        Resource { id, body }
    }
}

impl<T: Identified> Resource<T> {
    pub fn many(items: Vec<T>) -> Vec<Self> {
        items.into_iter().map(Resource::from).collect()
    }
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsertResponse {
    pub acknowledged: bool,
    pub insertedId: String,
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateResponse {
    pub acknowledged: bool,
    pub matchedCount: u64,
    pub modifiedCount: u64,
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteResponse {
    pub acknowledged: bool,
    pub deletedCount: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountResponse {
    pub count: u64,
}

impl From<InsertOutcome> for InsertResponse {
    fn from(outcome: InsertOutcome) -> Self {
        InsertResponse { acknowledged: true, insertedId: outcome.inserted_id.to_hex() }
    }
}

impl From<UpdateOutcome> for UpdateResponse {
    fn from(outcome: UpdateOutcome) -> Self {
        UpdateResponse {
            acknowledged: true,
            matchedCount: outcome.matched_count,
            modifiedCount: outcome.modified_count,
        }
    }
}

impl From<DeleteOutcome> for DeleteResponse {
    fn from(outcome: DeleteOutcome) -> Self {
        DeleteResponse { acknowledged: true, deletedCount: outcome.deleted_count }
    }
}
