use axum::{routing::get, Router};
use std::sync::Arc;

use crate::handler::catalog_handler::{promotions_handler, recommendations_handler};
use crate::service::catalog_service::CatalogServiceImpl;

pub fn catalog_router(service: Arc<CatalogServiceImpl>) -> Router {
    Router::new()
        .route("/promotions", get(promotions_handler))
        .route("/recommendations", get(recommendations_handler))
        .with_state(service)
}
