pub mod user_handler;
pub mod banner_handler;
pub mod test_handler;
pub mod appointment_handler;
pub mod payment_handler;
pub mod catalog_handler;
pub mod extract;

use bson::{oid::ObjectId, Document};
use serde::Serialize;
use tracing::debug;
use validator::Validate;

use crate::dto::to_set_document;
use crate::util::error::HandlerError;

/// Parses a path segment as an `ObjectId`.
pub(crate) fn parse_id(raw: &str) -> Result<ObjectId, HandlerError> {
    ObjectId::parse_str(raw).map_err(|_| {
        debug!("Rejecting malformed id '{}'", raw);
        HandlerError::bad_request("Invalid id")
    })
}

pub(crate) fn validate_payload<T: Validate>(payload: &T) -> Result<(), HandlerError> {
    payload
        .validate()
        .map_err(|e| HandlerError::bad_request(format!("Validation error: {}", e)))
}

/// Builds the `$set` fields of a partial update; an update with nothing in it is rejected.
pub(crate) fn set_fields<T: Serialize>(payload: &T) -> Result<Document, HandlerError> {
    let mut fields = to_set_document(payload)
        .map_err(|e| HandlerError::bad_request(format!("Invalid update: {}", e)))?;
    fields.remove("_id");
    if fields.is_empty() {
        return Err(HandlerError::bad_request("No fields to update"));
    }
    Ok(fields)
}
