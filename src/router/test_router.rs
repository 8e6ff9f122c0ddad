use axum::{middleware, routing::{get, patch, post}, Router};
use std::sync::Arc;
use tower::ServiceBuilder;

use crate::handler::test_handler::{
    add_test_handler,
    book_test_handler,
    delete_test_handler,
    get_test_handler,
    list_tests_handler,
    paged_tests_handler,
    test_count_handler,
    update_test_handler,
};
use crate::middlewares::auth_middleware::{verify_admin, verify_token, AuthState};
use crate::service::test_service::TestServiceImpl;

pub fn test_router(service: Arc<TestServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    let public = Router::new()
        .route("/tests", get(list_tests_handler))
        .route("/allTests", get(paged_tests_handler))
        .route("/testCount", get(test_count_handler))
        .route("/test/{id}", get(get_test_handler));

    let authenticated = Router::new()
        .route("/tests/{id}/booking", patch(book_test_handler))
        .route_layer(middleware::from_fn_with_state(auth_state.clone(), verify_token));

    let admin = Router::new()
        .route("/addTest", post(add_test_handler))
        .route("/tests/{id}", patch(update_test_handler).delete(delete_test_handler))
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
