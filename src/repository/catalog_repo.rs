use crate::model::catalog::CatalogItem;
use crate::repository::find_many;
use crate::repository::repository_error::RepositoryResult;
use async_trait::async_trait;
use mongodb::{Collection, Database};

/// Read-only access to a display-only collection.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn find_all(&self) -> RepositoryResult<Vec<CatalogItem>>;
}

pub struct MongoCatalogRepository {
    collection: Collection<CatalogItem>,
}

impl MongoCatalogRepository {
    /// `name` is the backing collection, e.g. promotions or recommendation.
    pub fn new(db: &Database, name: &str) -> Self {
        MongoCatalogRepository { collection: db.collection::<CatalogItem>(name) }
    }
}

#[async_trait]
impl CatalogRepository for MongoCatalogRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<CatalogItem>> {
        find_many(&self.collection, None, None).await
    }
}
