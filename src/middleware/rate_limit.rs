use axum::{
    body::Body,
    extract::{ConnectInfo, MatchedPath, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::time::Instant;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};

use crate::config::RateLimit;

/// IP-based rate limiting layer applied to the served router
pub type GlobalGovernorLayer = GovernorLayer<
    tower_governor::key_extractor::PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware<governor::clock::QuantaInstant>,
    Body,
>;

/// Per-IP limit: one token every `replenish_ms`, up to `burst` at once.
///
/// Both values are clamped to at least 1, which the builder requires.
pub fn create_global_governor(limit: &RateLimit) -> GlobalGovernorLayer {
    let config = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(limit.replenish_ms.max(1))
            .burst_size(limit.burst.max(1))
            .finish()
            .expect("rate limit period and burst size are non-zero"),
    );

    GovernorLayer::new(config)
}

/// Name of the booking operation served by a route, for log fields.
pub fn operation_for(path: &str) -> &'static str {
    match path {
        "/api/drivers" => "list_drivers",
        "/api/rides/search" => "submit_booking_request",
        "/api/rides/confirm" => "confirm_selection",
        "/api/bookings/current" => "current_booking",
        "/api/bookings/current/tracking" => "track_ride",
        "/api/fares/estimate" => "estimate_fare",
        "/api/location" => "location",
        "/api/contact" => "contact",
        "/api/auth/login" => "login",
        "/api/auth/signup" => "signup",
        "/api/driver-applications" => "driver_application",
        _ => "unknown",
    }
}

/// Log each API call with its booking operation, outcome and duration.
///
/// The duration includes any simulated latency the handler waited out.
pub async fn log_api_call(request: Request, next: Next) -> Response {
    let operation = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| operation_for(path.as_str()))
        .unwrap_or("unknown");
    let client_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_string());
    let method = request.method().clone();

    let started = Instant::now();
    let response = next.run(request).await;
    let elapsed_ms = started.elapsed().as_millis() as u64;
    let status = response.status();

    match status {
        StatusCode::TOO_MANY_REQUESTS => {
            tracing::warn!(operation, client_ip = %client_ip, "Rate limited");
        }
        StatusCode::BAD_REQUEST => {
            tracing::info!(operation, %method, elapsed_ms, "Booking input rejected");
        }
        StatusCode::NOT_FOUND => {
            tracing::warn!(operation, %method, elapsed_ms, "Unknown resource requested");
        }
        s if s.is_server_error() => {
            tracing::error!(operation, %method, %status, elapsed_ms, "API call failed");
        }
        _ => {
            tracing::debug!(operation, client_ip = %client_ip, %method, %status, elapsed_ms, "API call completed");
        }
    }

    response
}
