mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_add_and_list_banners() {
    let app = TestApp::new();
    let token = app.admin_token();
    let banner = json!({
        "title": "Winter Checkup",
        "image": "https://img.example.com/b.png",
        "couponCode": "WINTER20",
        "discountRate": 20.0,
        "status": "active"
    });
    let (status, body) = app.send("POST", "/addBanner", Some(&token), Some(banner)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["acknowledged"], true);

    let (status, body) = app.send("GET", "/banners", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let banners = body.as_array().unwrap();
    assert_eq!(banners.len(), 1);
    assert_eq!(banners[0]["couponCode"], "WINTER20");
}

#[tokio::test]
async fn test_active_banner_filters_by_status() {
    let app = TestApp::new();
    let token = app.admin_token();
    for (title, status) in [("A", "active"), ("B", "inactive"), ("C", "active")] {
        app.send("POST", "/addBanner", Some(&token), Some(json!({ "title": title, "status": status })))
            .await;
    }

    let (status, body) = app.send("GET", "/activeBanner?status=active", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body.as_array().unwrap().iter().map(|b| b["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["A", "C"]);

    let (_, body) = app.send("GET", "/activeBanner", None, None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_update_banner() {
    let app = TestApp::new();
    let token = app.admin_token();
    let (_, body) = app
        .send("POST", "/addBanner", Some(&token), Some(json!({ "title": "Old", "status": "active" })))
        .await;
    let id = body["insertedId"].as_str().unwrap().to_string();

    let (status, body) = app
        .send("PATCH", &format!("/updateBanner/{}", id), Some(&token), Some(json!({ "status": "inactive" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matchedCount"], 1);

    let banner = app.banners.all()[0].clone();
    assert_eq!(banner.status.as_deref(), Some("inactive"));
    assert_eq!(banner.title.as_deref(), Some("Old"));
}

#[tokio::test]
async fn test_delete_banner() {
    let app = TestApp::new();
    let token = app.admin_token();
    let (_, body) = app.send("POST", "/addBanner", Some(&token), Some(json!({ "title": "X" }))).await;
    let id = body["insertedId"].as_str().unwrap().to_string();

    let (status, body) = app.send("DELETE", &format!("/deleteBanner/{}", id), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deletedCount"], 1);
    assert!(app.banners.all().is_empty());
}

#[tokio::test]
async fn test_banner_list_requires_admin() {
    let app = TestApp::new();
    let (status, _) = app.send("GET", "/banners", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
