use axum::{extract::{Path, State}, response::IntoResponse, Json};
use std::sync::Arc;

use crate::dto::response_dto::{DeleteResponse, InsertResponse, Resource, UpdateResponse};
use crate::dto::user_dto::{
    CreateUserRequest, EmailQuery, TokenRequest, TokenResponse, UpdateProfileRequest, UpdateUserRoleRequest,
};
use crate::handler::{parse_id, set_fields, validate_payload};
use crate::model::user::User;
use crate::handler::extract::{ApiJson, ApiQuery};
use crate::service::user_service::{UserService, UserServiceImpl};
use crate::util::error::HandlerError;

// Issue token
pub async fn issue_token_handler(
    State(service): State<Arc<UserServiceImpl>>,
    ApiJson(payload): ApiJson<TokenRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    validate_payload(&payload)?;
    let token = service.issue_token(payload.email, payload.extra).await?;
    Ok(Json(TokenResponse { token }))
}

// List users
pub async fn list_users_handler(
    State(service): State<Arc<UserServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let users = service.list().await?;
    Ok(Json(Resource::many(users)))
}

// One user by email, `null` when there is none
pub async fn get_user_handler(
    State(service): State<Arc<UserServiceImpl>>,
    ApiQuery(query): ApiQuery<EmailQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let user = service.find_by_email(&query.email).await?;
    Ok(Json(user.map(Resource::from)))
}

// Create user
pub async fn create_user_handler(
    State(service): State<Arc<UserServiceImpl>>,
    ApiJson(payload): ApiJson<CreateUserRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    validate_payload(&payload)?;
    let outcome = service.create(User::from(payload)).await?;
    Ok(Json(InsertResponse::from(outcome)))
}

// Update own profile
pub async fn update_profile_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateProfileRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_id(&id)?;
    let fields = set_fields(&payload)?;
    let outcome = service.update_profile(id, fields).await?;
    Ok(Json(UpdateResponse::from(outcome)))
}

// Change role/status
pub async fn update_role_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateUserRoleRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_id(&id)?;
    let fields = set_fields(&payload)?;
    let outcome = service.update_role(id, fields).await?;
    Ok(Json(UpdateResponse::from(outcome)))
}

// Delete user
pub async fn delete_user_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_id(&id)?;
    let outcome = service.delete(id).await?;
    Ok(Json(DeleteResponse::from(outcome)))
}
