use async_trait::async_trait;
use bson::{oid::ObjectId, Document};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::model::diagnostic_test::DiagnosticTest;
use crate::repository::outcome::{DeleteOutcome, InsertOutcome, UpdateOutcome};
use crate::repository::test_repo::TestRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait TestService: Send + Sync {
    async fn create(&self, test: DiagnosticTest) -> Result<InsertOutcome, ServiceError>;
    async fn list(&self) -> Result<Vec<DiagnosticTest>, ServiceError>;
    async fn list_page(&self, skip: u64, limit: i64) -> Result<Vec<DiagnosticTest>, ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
    async fn get(&self, id: ObjectId) -> Result<DiagnosticTest, ServiceError>;
    async fn update(&self, id: ObjectId, fields: Document) -> Result<UpdateOutcome, ServiceError>;
    async fn book(&self, id: ObjectId) -> Result<UpdateOutcome, ServiceError>;
    async fn delete(&self, id: ObjectId) -> Result<DeleteOutcome, ServiceError>;
}

pub struct TestServiceImpl {
    pub test_repo: Arc<dyn TestRepository>,
}

impl TestServiceImpl {
    pub fn new(test_repo: Arc<dyn TestRepository>) -> Self {
        Self { test_repo }
    }
}

#[async_trait]
impl TestService for TestServiceImpl {
    #[instrument(skip(self, test), fields(name = %test.name))]
    async fn create(&self, test: DiagnosticTest) -> Result<InsertOutcome, ServiceError> {
        info!("Creating test");
        let inserted = self.test_repo.insert(test).await;
        if let Err(e) = &inserted {
            error!("Failed to create test: {e}");
        }
        Ok(inserted?)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<DiagnosticTest>, ServiceError> {
        Ok(self.test_repo.find_all().await?)
    }

    #[instrument(skip(self))]
    async fn list_page(&self, skip: u64, limit: i64) -> Result<Vec<DiagnosticTest>, ServiceError> {
        let page = self.test_repo.find_page(skip, limit).await;
        match &page {
            Ok(list) => info!("Fetched page of {} tests", list.len()),
            Err(e) => error!("Failed to fetch test page: {e}"),
        }
        Ok(page?)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(self.test_repo.estimated_count().await?)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get(&self, id: ObjectId) -> Result<DiagnosticTest, ServiceError> {
        match self.test_repo.find_by_id(id).await? {
            Some(test) => Ok(test),
            None => {
                warn!("Test not found");
                Err(ServiceError::NotFound("Test not found".to_string()))
            }
        }
    }

    #[instrument(skip(self, fields), fields(id = %id))]
    async fn update(&self, id: ObjectId, fields: Document) -> Result<UpdateOutcome, ServiceError> {
        info!("Updating test");
        let updated = self.test_repo.update_fields(id, fields).await;
        if let Err(e) = &updated {
            error!("Failed to update test: {e}");
        }
        Ok(updated?)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn book(&self, id: ObjectId) -> Result<UpdateOutcome, ServiceError> {
        info!("Booking a slot");
        let booked = self.test_repo.record_booking(id).await;
        if let Err(e) = &booked {
            error!("Failed to record booking: {e}");
        }
        Ok(booked?)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> Result<DeleteOutcome, ServiceError> {
        info!("Deleting test");
        Ok(self.test_repo.delete(id).await?)
    }
}
