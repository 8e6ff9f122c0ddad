use crate::model::diagnostic_test::DiagnosticTest;
use crate::repository::outcome::{DeleteOutcome, InsertOutcome, UpdateOutcome};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use crate::repository::{delete_by_id, find_many, set_by_id, TESTS};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use mongodb::{options::FindOptions, Collection, Database};
use tracing::{error, info, instrument};

#[async_trait]
pub trait TestRepository: Send + Sync {
    async fn insert(&self, test: DiagnosticTest) -> RepositoryResult<InsertOutcome>;
    async fn find_all(&self) -> RepositoryResult<Vec<DiagnosticTest>>;
    /// Returns at most `limit` tests after skipping `skip`, in insertion order.
    /// A `limit` of 0 means no limit.
    async fn find_page(&self, skip: u64, limit: i64) -> RepositoryResult<Vec<DiagnosticTest>>;
    async fn estimated_count(&self) -> RepositoryResult<u64>;
    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<DiagnosticTest>>;
    async fn update_fields(&self, id: ObjectId, fields: Document) -> RepositoryResult<UpdateOutcome>;
    /// Takes one slot and bumps the booked counter in a single update.
    async fn record_booking(&self, id: ObjectId) -> RepositoryResult<UpdateOutcome>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<DeleteOutcome>;
}

pub struct MongoTestRepository {
    collection: Collection<DiagnosticTest>,
}

impl MongoTestRepository {
    pub fn new(db: &Database) -> Self {
        MongoTestRepository { collection: db.collection::<DiagnosticTest>(TESTS) }
    }
}

#[async_trait]
impl TestRepository for MongoTestRepository {
    #[instrument(skip(self, test), fields(name = %test.name))]
    async fn insert(&self, mut test: DiagnosticTest) -> RepositoryResult<InsertOutcome> {
        let id = ObjectId::new();
        test.id = Some(id);
        self.collection.insert_one(&test, None).await.map_err(|e| {
            error!("Failed to insert test: {}", e);
            RepositoryError::from(e)
        })?;
        info!(%id, "Test inserted");
        Ok(InsertOutcome { inserted_id: id })
    }

    async fn find_all(&self) -> RepositoryResult<Vec<DiagnosticTest>> {
        find_many(&self.collection, None, None).await
    }

    #[instrument(skip(self))]
    async fn find_page(&self, skip: u64, limit: i64) -> RepositoryResult<Vec<DiagnosticTest>> {
        let options = FindOptions::builder()
            .sort(doc! { "_id": 1 })
            .skip(skip)
            .limit(limit)
            .build();
        find_many(&self.collection, None, Some(options)).await
    }

    async fn estimated_count(&self) -> RepositoryResult<u64> {
        self.collection.estimated_document_count(None).await.map_err(|e| {
            error!("Failed to count tests: {}", e);
            RepositoryError::database(format!("Failed to count tests: {}", e))
        })
    }

    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<DiagnosticTest>> {
        self.collection
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to fetch test by ID: {}", e)))
    }

    async fn update_fields(&self, id: ObjectId, fields: Document) -> RepositoryResult<UpdateOutcome> {
        set_by_id(&self.collection, id, fields).await
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn record_booking(&self, id: ObjectId) -> RepositoryResult<UpdateOutcome> {
        let update = doc! { "$inc": { "slot": -1, "bookedCount": 1 } };
        let result = self.collection.update_one(doc! { "_id": id }, update, None).await?;
        info!(matched = result.matched_count, "Booking recorded");
        Ok(UpdateOutcome::from(result))
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<DeleteOutcome> {
        delete_by_id(&self.collection, id).await
    }
}
