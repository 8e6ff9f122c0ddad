use crate::model::user::{User, ADMIN_ROLE};
use crate::repository::outcome::{DeleteOutcome, InsertOutcome, UpdateOutcome};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use crate::repository::{delete_by_id, find_many, set_by_id, USERS};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use mongodb::{options::UpdateOptions, Collection, Database};
use tracing::{error, info, instrument};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: User) -> RepositoryResult<InsertOutcome>;
    async fn find_all(&self) -> RepositoryResult<Vec<User>>;
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    async fn update_fields(&self, id: ObjectId, fields: Document) -> RepositoryResult<UpdateOutcome>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<DeleteOutcome>;
    /// Sets the admin role on the user with `email`, creating the user if needed.
    async fn ensure_admin(&self, email: &str, name: Option<&str>) -> RepositoryResult<UpdateOutcome>;
}

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        MongoUserRepository { collection: db.collection::<User>(USERS) }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn insert(&self, mut user: User) -> RepositoryResult<InsertOutcome> {
        let id = ObjectId::new();
        user.id = Some(id);
        match self.collection.insert_one(&user, None).await {
            Ok(_) => {
                info!(%id, "User inserted");
                Ok(InsertOutcome { inserted_id: id })
            }
            Err(e) => {
                error!("Failed to insert user: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    async fn find_all(&self) -> RepositoryResult<Vec<User>> {
        find_many(&self.collection, None, None).await
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        let filter = doc! { "email": email };
        self.collection
            .find_one(filter, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to find user by email: {}", e)))
    }

    async fn update_fields(&self, id: ObjectId, fields: Document) -> RepositoryResult<UpdateOutcome> {
        set_by_id(&self.collection, id, fields).await
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<DeleteOutcome> {
        delete_by_id(&self.collection, id).await
    }

    #[instrument(skip(self))]
    async fn ensure_admin(&self, email: &str, name: Option<&str>) -> RepositoryResult<UpdateOutcome> {
        let filter = doc! { "email": email };
        let mut on_insert = Document::new();
        if let Some(name) = name {
            on_insert.insert("name", name);
        }
        let mut update = doc! { "$set": { "role": ADMIN_ROLE } };
        if !on_insert.is_empty() {
            update.insert("$setOnInsert", on_insert);
        }
        let options = UpdateOptions::builder().upsert(true).build();
        let result = self.collection.update_one(filter, update, options).await?;
        Ok(UpdateOutcome::from(result))
    }
}
