use crate::model::payment::PaymentRecord;
use crate::repository::outcome::InsertOutcome;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use crate::repository::PAYMENTS;
use async_trait::async_trait;
use bson::oid::ObjectId;
use mongodb::{Collection, Database};
use tracing::{error, info};

/// Payment history is append-only.
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn insert(&self, record: PaymentRecord) -> RepositoryResult<InsertOutcome>;
}

pub struct MongoPaymentRepository {
    collection: Collection<PaymentRecord>,
}

impl MongoPaymentRepository {
    pub fn new(db: &Database) -> Self {
        MongoPaymentRepository { collection: db.collection::<PaymentRecord>(PAYMENTS) }
    }
}

#[async_trait]
impl PaymentRepository for MongoPaymentRepository {
    async fn insert(&self, mut record: PaymentRecord) -> RepositoryResult<InsertOutcome> {
        let id = ObjectId::new();
        record.id = Some(id);
        self.collection.insert_one(&record, None).await.map_err(|e| {
            error!("Failed to insert payment record: {}", e);
            RepositoryError::from(e)
        })?;
        info!(%id, price = ?record.price, "Payment recorded");
        Ok(InsertOutcome { inserted_id: id })
    }
}
