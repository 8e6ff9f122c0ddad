use axum::{middleware, routing::{delete, get, patch, post}, Router};
use std::sync::Arc;
use tower::ServiceBuilder;

use crate::handler::user_handler::{
    create_user_handler,
    delete_user_handler,
    get_user_handler,
    issue_token_handler,
    list_users_handler,
    update_profile_handler,
    update_role_handler,
};
use crate::middlewares::auth_middleware::{verify_admin, verify_token, AuthState};
use crate::service::user_service::UserServiceImpl;

pub fn user_router(service: Arc<UserServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    // Public routes
    let public = Router::new()
        .route("/jwt", post(issue_token_handler))
        .route("/user", post(create_user_handler));

    // Any signed-in caller
    let authenticated = Router::new()
        .route("/user", get(get_user_handler))
        .route("/user/{id}", patch(update_profile_handler))
        .route_layer(middleware::from_fn_with_state(auth_state.clone(), verify_token));

    // Admin-protected routes
    let admin = Router::new()
        .route("/users", get(list_users_handler))
        .route("/updateUser/{id}", patch(update_role_handler))
        .route("/deleteUser/{id}", delete(delete_user_handler))
        .route_layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn_with_state(auth_state.clone(), verify_token))
                .layer(middleware::from_fn_with_state(auth_state, verify_admin)),
        );

    public
        .merge(authenticated)
        .merge(admin)
        .with_state(service)
}
