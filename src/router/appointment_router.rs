use axum::{middleware, routing::{delete, get, patch, post}, Router};
use std::sync::Arc;
use tower::ServiceBuilder;

use crate::handler::appointment_handler::{
    cancel_appointment_handler,
    create_appointment_handler,
    delete_appointment_handler,
    deliver_appointment_handler,
    list_appointments_handler,
    search_appointments_handler,
};
use crate::middlewares::auth_middleware::{verify_admin, verify_token, AuthState};
use crate::service::appointment_service::AppointmentServiceImpl;

pub fn appointment_router(service: Arc<AppointmentServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    let authenticated = Router::new()
        .route("/appointments", post(create_appointment_handler))
        .route("/appointments/search", get(search_appointments_handler))
        .route("/appointments/{id}", patch(cancel_appointment_handler))
        .route_layer(middleware::from_fn_with_state(auth_state.clone(), verify_token));

    let admin = Router::new()
        .route("/appointments", get(list_appointments_handler))
        .route("/appointments/delivery/{id}", patch(deliver_appointment_handler))
        .route("/reservation/{id}", delete(delete_appointment_handler))
        .route_layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn_with_state(auth_state.clone(), verify_token))
                .layer(middleware::from_fn_with_state(auth_state, verify_admin)),
        );

    authenticated
        .merge(admin)
        .with_state(service)
}
