pub mod response_dto;
pub mod user_dto;
pub mod banner_dto;
pub mod test_dto;
pub mod appointment_dto;
pub mod payment_dto;

use bson::Document;
use serde::Serialize;

/// Serializes a partial-update request into the fields of a `$set`.
/// Absent (`None`) fields are skipped by the request types, so only the
/// fields the caller sent end up in the document.
pub fn to_set_document<T: Serialize>(request: &T) -> Result<Document, bson::ser::Error> {
    bson::to_document(request)
}

/// Drops keys a client may not set through the free-form part of a body.
pub(crate) fn without_keys(mut extra: Document, keys: &[&str]) -> Document {
    for key in keys {
        extra.remove(*key);
    }
    extra
}
