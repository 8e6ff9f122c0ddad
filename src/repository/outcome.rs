//! Storage-agnostic results of write operations.
//!
//! Repositories return these instead of the driver's result types so the
//! HTTP layer never depends on `mongodb` directly.

use bson::oid::ObjectId;
use mongodb::results::{DeleteResult, UpdateResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertOutcome {
    pub inserted_id: ObjectId,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}

impl From<UpdateResult> for UpdateOutcome {
    fn from(result: UpdateResult) -> Self {
        UpdateOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        }
    }
}

impl From<DeleteResult> for DeleteOutcome {
    fn from(result: DeleteResult) -> Self {
        DeleteOutcome {
            deleted_count: result.deleted_count,
        }
    }
}
