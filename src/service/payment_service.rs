use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::model::payment::PaymentRecord;
use crate::repository::outcome::InsertOutcome;
use crate::repository::payment_repo::PaymentRepository;
use crate::util::error::ServiceError;
use crate::util::money::to_minor_units;
use crate::util::stripe::PaymentGateway;

#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Creates a card payment intent for `price` (major units) and returns its client secret.
    async fn create_intent(&self, price: f64) -> Result<String, ServiceError>;
    async fn record(&self, record: PaymentRecord) -> Result<InsertOutcome, ServiceError>;
}

pub struct PaymentServiceImpl {
    pub gateway: Arc<dyn PaymentGateway>,
    pub payment_repo: Arc<dyn PaymentRepository>,
    pub currency: String,
}

impl PaymentServiceImpl {
    pub fn new(gateway: Arc<dyn PaymentGateway>, payment_repo: Arc<dyn PaymentRepository>, currency: String) -> Self {
        Self { gateway, payment_repo, currency }
    }
}

#[async_trait]
impl PaymentService for PaymentServiceImpl {
    #[instrument(skip(self))]
    async fn create_intent(&self, price: f64) -> Result<String, ServiceError> {
        let amount = to_minor_units(price)?;
        info!(amount, currency = %self.currency, "Creating payment intent");
        let intent = self.gateway.create_intent(amount, &self.currency).await;
        match &intent {
            Ok(i) => info!(intent_id = %i.id, "Payment intent created"),
            Err(e) => error!("Failed to create payment intent: {e}"),
        }
        Ok(intent?.client_secret)
    }

    #[instrument(skip(self, record))]
    async fn record(&self, record: PaymentRecord) -> Result<InsertOutcome, ServiceError> {
        info!("Recording payment");
        let inserted = self.payment_repo.insert(record).await;
        if let Err(e) = &inserted {
            error!("Failed to record payment: {e}");
        }
        Ok(inserted?)
    }
}
