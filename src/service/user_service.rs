use async_trait::async_trait;
use bson::{oid::ObjectId, Document};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::model::user::User;
use crate::repository::outcome::{DeleteOutcome, InsertOutcome, UpdateOutcome};
use crate::repository::user_repo::UserRepository;
use crate::util::error::ServiceError;
use crate::util::jwt::{JwtTokenUtils, JwtTokenUtilsImpl};

#[async_trait]
pub trait UserService: Send + Sync {
    /// Signs a token for `email` carrying `extra` as additional claims.
    async fn issue_token(&self, email: String, extra: Map<String, Value>) -> Result<String, ServiceError>;
    async fn list(&self) -> Result<Vec<User>, ServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServiceError>;
    async fn create(&self, user: User) -> Result<InsertOutcome, ServiceError>;
    async fn update_profile(&self, id: ObjectId, fields: Document) -> Result<UpdateOutcome, ServiceError>;
    async fn update_role(&self, id: ObjectId, fields: Document) -> Result<UpdateOutcome, ServiceError>;
    async fn delete(&self, id: ObjectId) -> Result<DeleteOutcome, ServiceError>;
    async fn ensure_admin(&self, email: &str, name: Option<&str>) -> Result<UpdateOutcome, ServiceError>;
}

pub struct UserServiceImpl {
    pub user_repo: Arc<dyn UserRepository>,
    pub jwt_utils: Arc<JwtTokenUtilsImpl>,
}

impl UserServiceImpl {
    pub fn new(user_repo: Arc<dyn UserRepository>, jwt_utils: Arc<JwtTokenUtilsImpl>) -> Self {
        Self { user_repo, jwt_utils }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    #[instrument(skip(self, extra), fields(email = %email))]
    async fn issue_token(&self, email: String, extra: Map<String, Value>) -> Result<String, ServiceError> {
        info!("Issuing access token");
        self.jwt_utils.generate_token(&email, extra).map_err(|e| {
            error!("Failed to issue token: {e}");
            ServiceError::InternalError(format!("JWT error: {}", e))
        })
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<User>, ServiceError> {
        let users = self.user_repo.find_all().await;
        match &users {
            Ok(list) => info!("Listed {} users", list.len()),
            Err(e) => error!("Failed to list users: {e}"),
        }
        Ok(users?)
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServiceError> {
        let user = self.user_repo.find_by_email(email).await;
        if let Err(e) = &user {
            error!("Failed to fetch user by email: {e}");
        }
        Ok(user?)
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn create(&self, user: User) -> Result<InsertOutcome, ServiceError> {
        info!("Creating user");
        let inserted = self.user_repo.insert(user).await;
        match &inserted {
            Ok(outcome) => info!(id = %outcome.inserted_id, "User created"),
            Err(e) => error!("Failed to create user: {e}"),
        }
        Ok(inserted?)
    }

    #[instrument(skip(self, fields), fields(id = %id))]
    async fn update_profile(&self, id: ObjectId, fields: Document) -> Result<UpdateOutcome, ServiceError> {
        info!("Updating user profile");
        let updated = self.user_repo.update_fields(id, fields).await;
        if let Err(e) = &updated {
            error!("Failed to update user profile: {e}");
        }
        Ok(updated?)
    }

    #[instrument(skip(self, fields), fields(id = %id))]
    async fn update_role(&self, id: ObjectId, fields: Document) -> Result<UpdateOutcome, ServiceError> {
        info!("Updating user role/status");
        let updated = self.user_repo.update_fields(id, fields).await;
        if let Err(e) = &updated {
            error!("Failed to update user role: {e}");
        }
        Ok(updated?)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> Result<DeleteOutcome, ServiceError> {
        info!("Deleting user");
        let deleted = self.user_repo.delete(id).await;
        match &deleted {
            Ok(outcome) => info!(deleted = outcome.deleted_count, "User delete finished"),
            Err(e) => error!("Failed to delete user: {e}"),
        }
        Ok(deleted?)
    }

    #[instrument(skip(self))]
    async fn ensure_admin(&self, email: &str, name: Option<&str>) -> Result<UpdateOutcome, ServiceError> {
        let outcome = self.user_repo.ensure_admin(email, name).await;
        match &outcome {
            Ok(o) if o.matched_count == 0 => info!("Admin user created"),
            Ok(_) => info!("Admin role confirmed on existing user"),
            Err(e) => error!("Failed to ensure admin user: {e}"),
        }
        Ok(outcome?)
    }
}
