use bson::{oid::ObjectId, Bson};

use crate::model::Identified;

/// Promotions and recommendations carry arbitrary display fields, so they are
/// kept as raw documents.
pub type CatalogItem = bson::Document;

impl Identified for CatalogItem {
    fn take_id(&mut self) -> Option<ObjectId> {
        match self.get("_id") {
            Some(Bson::ObjectId(id)) => {
                let id = *id;
                self.remove("_id");
                Some(id)
            }
            _ => None,
        }
    }
}
