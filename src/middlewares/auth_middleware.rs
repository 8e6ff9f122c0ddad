use axum::{body::Body, extract::State, http::{header::AUTHORIZATION, Request}, middleware::Next, response::Response};
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::service::user_service::{UserService, UserServiceImpl};
use crate::util::error::HandlerError;
use crate::util::jwt::{Claims, JwtError, JwtTokenUtils, JwtTokenUtilsImpl};

pub struct AuthState {
    pub jwt_utils: Arc<JwtTokenUtilsImpl>,
    pub user_service: Arc<UserServiceImpl>,
}

/// Requires a valid bearer token and stores its claims in the request extensions.
pub async fn verify_token(
    State(state): State<Arc<AuthState>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, HandlerError> {
    let auth_header = req.headers().get(AUTHORIZATION).and_then(|v| v.to_str().ok());

    let token = state.jwt_utils.extract_token_from_header(auth_header).map_err(|e| match e {
        JwtError::MissingToken => HandlerError::unauthorized("token nai"),
        _ => {
            debug!("Rejecting request: {}", e);
            HandlerError::unauthorized("Unauthorized")
        }
    })?;

    let claims = state.jwt_utils.validate_token(&token).map_err(|e| {
        warn!("Rejecting token: {}", e);
        HandlerError::unauthorized("wrong token")
    })?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Requires the caller behind the verified token to hold the admin role.
/// Must be layered after [`verify_token`].
pub async fn verify_admin(
    State(state): State<Arc<AuthState>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, HandlerError> {
    let Some(email) = req.extensions().get::<Claims>().map(|c| c.email.clone()) else {
        error!("verify_admin ran without decoded claims");
        return Err(HandlerError::unauthorized("Unauthorized"));
    };

    let user = state.user_service.find_by_email(&email).await.map_err(|e| {
        error!("Admin lookup failed: {}", e);
        HandlerError::internal("Failed to verify user role")
    })?;

    match user {
        Some(user) if user.is_admin() => Ok(next.run(req).await),
        _ => {
            warn!(email = %email, "Admin access denied");
            Err(HandlerError::forbidden("forbidden access"))
        }
    }
}
