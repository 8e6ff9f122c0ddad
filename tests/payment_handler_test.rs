mod common;

use axum::http::StatusCode;
use bson::doc;
use common::{StubGateway, TestApp, PATIENT_EMAIL};
use serde_json::json;

#[tokio::test]
async fn test_intent_amount_in_minor_units() {
    let app = TestApp::new();
    let token = app.user_token();
    let (status, body) = app
        .send("POST", "/create-payment-intent", Some(&token), Some(json!({ "price": 19.99 })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "clientSecret": "pi_test_123_secret_abc" }));
    assert_eq!(*app.gateway.requests.lock().unwrap(), vec![(1999, "usd".to_string())]);
}

#[tokio::test]
async fn test_zero_price_is_forwarded() {
    let app = TestApp::new();
    let token = app.user_token();
    let (status, _) = app
        .send("POST", "/create-payment-intent", Some(&token), Some(json!({ "price": 0 })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.gateway.requests.lock().unwrap()[0].0, 0);
}

#[tokio::test]
async fn test_non_numeric_price_is_rejected() {
    let app = TestApp::new();
    let token = app.user_token();
    let (status, body) = app
        .send("POST", "/create-payment-intent", Some(&token), Some(json!({ "price": "ten" })))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "UnprocessableEntity");
    assert!(body["message"].as_str().unwrap().contains("price"));
    assert!(app.gateway.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_provider_failure_is_bad_gateway() {
    let app = TestApp::with_gateway(StubGateway { fail: true, ..Default::default() });
    let token = app.user_token();
    let (status, body) = app
        .send("POST", "/create-payment-intent", Some(&token), Some(json!({ "price": 10 })))
        .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Upstream");
}

#[tokio::test]
async fn test_intent_requires_token() {
    let app = TestApp::new();
    let (status, _) = app
        .send("POST", "/create-payment-intent", None, Some(json!({ "price": 10 })))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_payment_history_is_recorded() {
    let app = TestApp::new();
    let token = app.user_token();
    let payload = json!({
        "email": PATIENT_EMAIL,
        "price": 25.0,
        "transactionId": "pi_test_123",
        "date": "2026-11-02"
    });
    let (status, body) = app.send("POST", "/paymentHistory", Some(&token), Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["acknowledged"], true);

    let records = app.payments.all();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].transactionId.as_deref(), Some("pi_test_123"));
}

#[tokio::test]
async fn test_catalog_routes_are_public() {
    let app = TestApp::new();
    app.promotions.items.lock().unwrap().push(doc! { "title": "Family Package", "discount": 15 });

    let (status, body) = app.send("GET", "/promotions", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["title"], "Family Package");

    let (status, body) = app.send("GET", "/recommendations", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}
