use async_trait::async_trait;
use bson::{oid::ObjectId, Document};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::model::banner::Banner;
use crate::repository::banner_repo::BannerRepository;
use crate::repository::outcome::{DeleteOutcome, InsertOutcome, UpdateOutcome};
use crate::util::error::ServiceError;

#[async_trait]
pub trait BannerService: Send + Sync {
    async fn create(&self, banner: Banner) -> Result<InsertOutcome, ServiceError>;
    async fn list(&self) -> Result<Vec<Banner>, ServiceError>;
    async fn list_by_status(&self, status: &str) -> Result<Vec<Banner>, ServiceError>;
    async fn update(&self, id: ObjectId, fields: Document) -> Result<UpdateOutcome, ServiceError>;
    async fn delete(&self, id: ObjectId) -> Result<DeleteOutcome, ServiceError>;
}

pub struct BannerServiceImpl {
    pub banner_repo: Arc<dyn BannerRepository>,
}

impl BannerServiceImpl {
    pub fn new(banner_repo: Arc<dyn BannerRepository>) -> Self {
        Self { banner_repo }
    }
}

#[async_trait]
impl BannerService for BannerServiceImpl {
    #[instrument(skip(self, banner))]
    async fn create(&self, banner: Banner) -> Result<InsertOutcome, ServiceError> {
        info!("Creating banner");
        let inserted = self.banner_repo.insert(banner).await;
        if let Err(e) = &inserted {
            error!("Failed to create banner: {e}");
        }
        Ok(inserted?)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Banner>, ServiceError> {
        Ok(self.banner_repo.find_all().await?)
    }

    #[instrument(skip(self))]
    async fn list_by_status(&self, status: &str) -> Result<Vec<Banner>, ServiceError> {
        let banners = self.banner_repo.find_by_status(status).await;
        match &banners {
            Ok(list) => info!("Found {} banners with status", list.len()),
            Err(e) => error!("Failed to fetch banners by status: {e}"),
        }
        Ok(banners?)
    }

    #[instrument(skip(self, fields), fields(id = %id))]
    async fn update(&self, id: ObjectId, fields: Document) -> Result<UpdateOutcome, ServiceError> {
        info!("Updating banner");
        let updated = self.banner_repo.update_fields(id, fields).await;
        if let Err(e) = &updated {
            error!("Failed to update banner: {e}");
        }
        Ok(updated?)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> Result<DeleteOutcome, ServiceError> {
        info!("Deleting banner");
        Ok(self.banner_repo.delete(id).await?)
    }
}
