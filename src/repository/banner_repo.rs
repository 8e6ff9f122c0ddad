use crate::model::banner::Banner;
use crate::repository::outcome::{DeleteOutcome, InsertOutcome, UpdateOutcome};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use crate::repository::{delete_by_id, find_many, set_by_id, BANNERS};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database};
use tracing::{error, info};

#[async_trait]
pub trait BannerRepository: Send + Sync {
    async fn insert(&self, banner: Banner) -> RepositoryResult<InsertOutcome>;
    async fn find_all(&self) -> RepositoryResult<Vec<Banner>>;
    async fn find_by_status(&self, status: &str) -> RepositoryResult<Vec<Banner>>;
    async fn update_fields(&self, id: ObjectId, fields: Document) -> RepositoryResult<UpdateOutcome>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<DeleteOutcome>;
}

pub struct MongoBannerRepository {
    collection: Collection<Banner>,
}

impl MongoBannerRepository {
    pub fn new(db: &Database) -> Self {
        MongoBannerRepository { collection: db.collection::<Banner>(BANNERS) }
    }
}

#[async_trait]
impl BannerRepository for MongoBannerRepository {
    async fn insert(&self, mut banner: Banner) -> RepositoryResult<InsertOutcome> {
        let id = ObjectId::new();
        banner.id = Some(id);
        self.collection.insert_one(&banner, None).await.map_err(|e| {
            error!("Failed to insert banner: {}", e);
            RepositoryError::from(e)
        })?;
        info!(%id, "Banner inserted");
        Ok(InsertOutcome { inserted_id: id })
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Banner>> {
        find_many(&self.collection, None, None).await
    }

    async fn find_by_status(&self, status: &str) -> RepositoryResult<Vec<Banner>> {
        find_many(&self.collection, Some(doc! { "status": status }), None).await
    }

    async fn update_fields(&self, id: ObjectId, fields: Document) -> RepositoryResult<UpdateOutcome> {
        set_by_id(&self.collection, id, fields).await
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<DeleteOutcome> {
        delete_by_id(&self.collection, id).await
    }
}
