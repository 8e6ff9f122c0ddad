pub mod repository_error;
pub mod outcome;
pub mod user_repo;
pub mod banner_repo;
pub mod test_repo;
pub mod appointment_repo;
pub mod payment_repo;
pub mod catalog_repo;

use bson::{doc, oid::ObjectId, Document};
use futures::stream::TryStreamExt;
use mongodb::{options::FindOptions, Collection};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::repository::outcome::{DeleteOutcome, UpdateOutcome};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

pub const USERS: &str = "users";
pub const BANNERS: &str = "banners";
pub const TESTS: &str = "tests";
pub const APPOINTMENTS: &str = "appointments";
pub const PAYMENTS: &str = "payments";
pub const PROMOTIONS: &str = "promotions";
pub const RECOMMENDATIONS: &str = "recommendation";

/// Runs `find` and drains the cursor.
pub(crate) async fn find_many<T>(
    collection: &Collection<T>,
    filter: Option<Document>,
    options: Option<FindOptions>,
) -> RepositoryResult<Vec<T>>
where
    T: DeserializeOwned + Unpin + Send + Sync,
{
    let cursor = collection.find(filter, options).await.map_err(|e| {
        error!(collection = %collection.name(), "Find failed: {}", e);
        RepositoryError::from(e)
    })?;
    let items: Vec<T> = cursor.try_collect().await.map_err(|e| {
        error!(collection = %collection.name(), "Failed to read cursor: {}", e);
        RepositoryError::serialization(format!("Failed to read {}: {}", collection.name(), e))
    })?;
    debug!(collection = %collection.name(), "Fetched {} documents", items.len());
    Ok(items)
}

/// `$set`s `fields` on the document with the given id.
pub(crate) async fn set_by_id<T>(
    collection: &Collection<T>,
    id: ObjectId,
    fields: Document,
) -> RepositoryResult<UpdateOutcome>
where
    T: Send + Sync,
{
    if fields.is_empty() {
        return Err(RepositoryError::validation("No fields to update"));
    }
    let filter = doc! { "_id": id };
    let update = doc! { "$set": fields };
    let result = collection.update_one(filter, update, None).await.map_err(|e| {
        error!(collection = %collection.name(), %id, "Update failed: {}", e);
        RepositoryError::from(e)
    })?;
    Ok(UpdateOutcome::from(result))
}

pub(crate) async fn delete_by_id<T>(collection: &Collection<T>, id: ObjectId) -> RepositoryResult<DeleteOutcome>
where
    T: Send + Sync,
{
    let result = collection.delete_one(doc! { "_id": id }, None).await.map_err(|e| {
        error!(collection = %collection.name(), %id, "Delete failed: {}", e);
        RepositoryError::from(e)
    })?;
    Ok(DeleteOutcome::from(result))
}
