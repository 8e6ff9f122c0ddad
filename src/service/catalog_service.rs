use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::model::catalog::CatalogItem;
use crate::repository::catalog_repo::CatalogRepository;
use crate::util::error::ServiceError;

/// Read-only listings shown on the storefront.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn promotions(&self) -> Result<Vec<CatalogItem>, ServiceError>;
    async fn recommendations(&self) -> Result<Vec<CatalogItem>, ServiceError>;
}

pub struct CatalogServiceImpl {
    pub promotion_repo: Arc<dyn CatalogRepository>,
    pub recommendation_repo: Arc<dyn CatalogRepository>,
}

impl CatalogServiceImpl {
    pub fn new(promotion_repo: Arc<dyn CatalogRepository>, recommendation_repo: Arc<dyn CatalogRepository>) -> Self {
        Self { promotion_repo, recommendation_repo }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    #[instrument(skip(self))]
    async fn promotions(&self) -> Result<Vec<CatalogItem>, ServiceError> {
        Ok(self.promotion_repo.find_all().await?)
    }

    #[instrument(skip(self))]
    async fn recommendations(&self) -> Result<Vec<CatalogItem>, ServiceError> {
        Ok(self.recommendation_repo.find_all().await?)
    }
}
