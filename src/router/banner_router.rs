use axum::{middleware, routing::{delete, get, patch, post}, Router};
use std::sync::Arc;
use tower::ServiceBuilder;

use crate::handler::banner_handler::{
    active_banner_handler,
    add_banner_handler,
    delete_banner_handler,
    list_banners_handler,
    update_banner_handler,
};
use crate::middlewares::auth_middleware::{verify_admin, verify_token, AuthState};
use crate::service::banner_service::BannerServiceImpl;

pub fn banner_router(service: Arc<BannerServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    let public = Router::new()
        .route("/activeBanner", get(active_banner_handler));

    let admin = Router::new()
        .route("/banners", get(list_banners_handler))
        .route("/addBanner", post(add_banner_handler))
        .route("/updateBanner/{id}", patch(update_banner_handler))
        .route("/deleteBanner/{id}", delete(delete_banner_handler))
        .route_layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn_with_state(auth_state.clone(), verify_token))
                .layer(middleware::from_fn_with_state(auth_state, verify_admin)),
        );

    public
        .merge(admin)
        .with_state(service)
}
