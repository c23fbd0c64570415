use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{admin, event, health, settings, spot, tour};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Site
        .route("/api/v1/settings", get(settings::get_settings))

        // Events
        .route("/api/v1/events", get(event::list_upcoming_events))
        .route("/api/v1/events/ids", get(event::list_event_ids))
        .route("/api/v1/events/{id}", get(event::get_event))

        // Spots
        .route("/api/v1/categories", get(spot::list_categories))
        .route("/api/v1/spots/find/{id}", get(spot::find_spot))
        .route("/api/v1/spots/{category}", get(spot::list_spots))
        .route("/api/v1/spots/{category}/{id}", get(spot::get_spot))

        // Onboarding
        .route("/api/v1/tour/{page}", get(tour::get_tour_steps))

        // Admin
        .route("/api/v1/admin/reload", post(admin::reload_content))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
