use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::model::appointment::Appointment;
use crate::repository::appointment_repo::AppointmentRepository;
use crate::repository::outcome::{DeleteOutcome, InsertOutcome, UpdateOutcome};
use crate::repository::user_repo::UserRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait AppointmentService: Send + Sync {
    async fn create(&self, appointment: Appointment) -> Result<InsertOutcome, ServiceError>;
    async fn list(&self, status: Option<&str>) -> Result<Vec<Appointment>, ServiceError>;
    /// Appointments booked under `email`; fails with `NotFound` when no user has that email.
    async fn search(&self, email: &str) -> Result<Vec<Appointment>, ServiceError>;
    async fn cancel(&self, id: ObjectId) -> Result<UpdateOutcome, ServiceError>;
    async fn deliver(&self, id: ObjectId, result_url: String) -> Result<UpdateOutcome, ServiceError>;
    async fn delete(&self, id: ObjectId) -> Result<DeleteOutcome, ServiceError>;
}

pub struct AppointmentServiceImpl {
    pub appointment_repo: Arc<dyn AppointmentRepository>,
    pub user_repo: Arc<dyn UserRepository>,
}

impl AppointmentServiceImpl {
    pub fn new(appointment_repo: Arc<dyn AppointmentRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self { appointment_repo, user_repo }
    }
}

#[async_trait]
impl AppointmentService for AppointmentServiceImpl {
    #[instrument(skip(self, appointment), fields(email = %appointment.email))]
    async fn create(&self, appointment: Appointment) -> Result<InsertOutcome, ServiceError> {
        info!("Creating appointment");
        let inserted = self.appointment_repo.insert(appointment).await;
        match &inserted {
            Ok(outcome) => info!(id = %outcome.inserted_id, "Appointment created"),
            Err(e) => error!("Failed to create appointment: {e}"),
        }
        Ok(inserted?)
    }

    #[instrument(skip(self))]
    async fn list(&self, status: Option<&str>) -> Result<Vec<Appointment>, ServiceError> {
        let appointments = self.appointment_repo.find_all(status).await;
        if let Err(e) = &appointments {
            error!("Failed to list appointments: {e}");
        }
        Ok(appointments?)
    }

    #[instrument(skip(self))]
    async fn search(&self, email: &str) -> Result<Vec<Appointment>, ServiceError> {
        if self.user_repo.find_by_email(email).await?.is_none() {
            warn!("No user registered with this email");
            return Err(ServiceError::NotFound("User not found".to_string()));
        }
        Ok(self.appointment_repo.find_by_email(email).await?)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn cancel(&self, id: ObjectId) -> Result<UpdateOutcome, ServiceError> {
        info!("Canceling appointment");
        let fields = doc! { "status": Appointment::STATUS_CANCELED };
        let updated = self.appointment_repo.update_fields(id, fields).await;
        if let Err(e) = &updated {
            error!("Failed to cancel appointment: {e}");
        }
        Ok(updated?)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn deliver(&self, id: ObjectId, result_url: String) -> Result<UpdateOutcome, ServiceError> {
        info!("Delivering appointment result");
        let fields = doc! { "status": Appointment::STATUS_DELIVERED, "resultUrl": result_url };
        let updated = self.appointment_repo.update_fields(id, fields).await;
        if let Err(e) = &updated {
            error!("Failed to deliver appointment: {e}");
        }
        Ok(updated?)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> Result<DeleteOutcome, ServiceError> {
        info!("Deleting appointment");
        Ok(self.appointment_repo.delete(id).await?)
    }
}
