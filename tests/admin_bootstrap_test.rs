mod common;

use axum::http::StatusCode;
use common::{TestApp, PATIENT_EMAIL};
use diagpulse_backend::app::app::ensure_admin_user;
use diagpulse_backend::config::AdminUserConfig;
use diagpulse_backend::service::user_service::UserService;

const OWNER_EMAIL: &str = "owner@diagpulse.test";

fn owner_conf() -> AdminUserConfig {
    AdminUserConfig { email: OWNER_EMAIL.to_string(), name: Some("Clinic Owner".to_string()) }
}

#[tokio::test]
async fn test_bootstrap_creates_missing_admin() {
    let app = TestApp::new();
    let token = app.token_for(OWNER_EMAIL);

    let (status, _) = app.send("GET", "/users", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let outcome = ensure_admin_user(&app.user_service, &owner_conf()).await.unwrap();
    assert_eq!(outcome.matched_count, 0);

    let owners: Vec<_> = app.users.all().into_iter().filter(|u| u.email == OWNER_EMAIL).collect();
    assert_eq!(owners.len(), 1);
    assert!(owners[0].is_admin());
    assert_eq!(owners[0].name.as_deref(), Some("Clinic Owner"));

    let (status, body) = app.send("GET", "/users", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_bootstrap_promotes_existing_user() {
    let app = TestApp::new();
    let conf = AdminUserConfig { email: PATIENT_EMAIL.to_string(), name: None };

    let outcome = ensure_admin_user(&app.user_service, &conf).await.unwrap();
    assert_eq!(outcome.matched_count, 1);
    assert_eq!(app.users.all().len(), 2);
    assert!(app.users.all()[1].is_admin());

    let (status, _) = app.send("GET", "/users", Some(&app.user_token()), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_bootstrap_twice_keeps_one_admin_account() {
    let app = TestApp::new();
    ensure_admin_user(&app.user_service, &owner_conf()).await.unwrap();

    let outcome = app.user_service.ensure_admin(OWNER_EMAIL, None).await.unwrap();
    assert_eq!(outcome.matched_count, 1);
    let owners = app.users.all().into_iter().filter(|u| u.email == OWNER_EMAIL).count();
    assert_eq!(owners, 1);
}
