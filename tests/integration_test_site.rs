mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::Value;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_settings() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/v1/settings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hostelName"], "Lazy Gecko Hostel");
    assert_eq!(body["wifi"]["password"], "sleepwell");
    assert_eq!(body["emergencyContacts"][0]["phone"], "1155");
    assert_eq!(body["timezone"], "Asia/Bangkok");
}

#[tokio::test]
async fn test_tour_starts_on_home() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/v1/tour/home").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active"], true);

    let steps = body["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0]["globalStep"], 0);
    assert_eq!(steps[0]["title"], "Welcome!");
    assert_eq!(steps[0]["firstOnPage"], true);
    assert_eq!(steps[1]["firstOnPage"], false);
    assert_eq!(steps[2]["navigateTo"], "/events");
    assert_eq!(steps[2]["side"], "top");
}

#[tokio::test]
async fn test_tour_personalizes_welcome() {
    let app = TestApp::new().await;

    let (_, body) = app.get("/api/v1/tour/home?hostelName=Lazy%20Gecko").await;
    assert_eq!(body["steps"][0]["title"], "Welcome to Lazy Gecko!");
}

#[tokio::test]
async fn test_tour_resumes_mid_page() {
    let app = TestApp::new().await;

    let (_, body) = app.get("/api/v1/tour/home?step=1").await;
    let steps = body["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0]["globalStep"], 1);
    // Going back from here stays on the page
    assert_eq!(steps[0]["firstOnPage"], false);
}

#[tokio::test]
async fn test_tour_inactive_on_other_pages() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/v1/tour/home?step=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active"], false);
    assert_eq!(body["steps"], Value::Array(vec![]));

    let (_, body) = app.get("/api/v1/tour/events?step=3").await;
    assert_eq!(body["active"], true);
    assert_eq!(body["steps"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_tour_first_spot_target() {
    let app = TestApp::new().await;

    let (_, body) = app.get("/api/v1/tour/restaurants?step=5&firstSpotUrl=/restaurants/jay-fai").await;
    assert_eq!(body["steps"][0]["navigateTo"], "/restaurants/jay-fai");
}

#[tokio::test]
async fn test_tour_last_step_and_completion() {
    let app = TestApp::new().await;

    let (_, body) = app.get("/api/v1/tour/info?step=7").await;
    assert_eq!(body["steps"][0]["isLast"], true);

    let (_, body) = app.get("/api/v1/tour/info?step=7&completed=true").await;
    assert_eq!(body["active"], false);
}

#[tokio::test]
async fn test_tour_rejects_bad_input() {
    let app = TestApp::new().await;

    let (status, _) = app.get("/api/v1/tour/checkout").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get("/api/v1/tour/home?step=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.get("/api/v1/tour/home?completed=maybe").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
