use crate::model::appointment::Appointment;
use crate::repository::outcome::{DeleteOutcome, InsertOutcome, UpdateOutcome};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use crate::repository::{delete_by_id, find_many, set_by_id, APPOINTMENTS};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database};
use tracing::{error, info};

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn insert(&self, appointment: Appointment) -> RepositoryResult<InsertOutcome>;
    /// All appointments, optionally restricted to one status.
    async fn find_all(&self, status: Option<&str>) -> RepositoryResult<Vec<Appointment>>;
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Vec<Appointment>>;
    async fn update_fields(&self, id: ObjectId, fields: Document) -> RepositoryResult<UpdateOutcome>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<DeleteOutcome>;
}

pub struct MongoAppointmentRepository {
    collection: Collection<Appointment>,
}

impl MongoAppointmentRepository {
    pub fn new(db: &Database) -> Self {
        MongoAppointmentRepository { collection: db.collection::<Appointment>(APPOINTMENTS) }
    }
}

#[async_trait]
impl AppointmentRepository for MongoAppointmentRepository {
    async fn insert(&self, mut appointment: Appointment) -> RepositoryResult<InsertOutcome> {
        let id = ObjectId::new();
        appointment.id = Some(id);
        match self.collection.insert_one(&appointment, None).await {
            Ok(_) => {
                info!(%id, email = %appointment.email, "Appointment inserted");
                Ok(InsertOutcome { inserted_id: id })
            }
            Err(e) => {
                error!("Failed to insert appointment: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    async fn find_all(&self, status: Option<&str>) -> RepositoryResult<Vec<Appointment>> {
        let filter = status.map(|s| doc! { "status": s });
        find_many(&self.collection, filter, None).await
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Vec<Appointment>> {
        find_many(&self.collection, Some(doc! { "email": email }), None).await
    }

    async fn update_fields(&self, id: ObjectId, fields: Document) -> RepositoryResult<UpdateOutcome> {
        set_by_id(&self.collection, id, fields).await
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<DeleteOutcome> {
        delete_by_id(&self.collection, id).await
    }
}
