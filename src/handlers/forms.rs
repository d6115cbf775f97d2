use axum::{extract::State, Json};
use serde::Deserialize;

use crate::entities::notice::Notice;
use crate::error::{AppError, AppResult};
use crate::utils::latency::simulate_latency;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Simulated contact form submission
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> Json<Notice> {
    simulate_latency("contact", state.config.latency.contact).await;
    tracing::info!(email = %payload.email, "Contact message received");

    Json(Notice::success(
        "Thank you for your message! We'll get back to you soon.",
    ))
}

// ============ Accounts ============

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Simulated login: any non-empty email and password are accepted
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<Notice>> {
    simulate_latency("login", state.config.latency.login).await;

    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(AppError::Unauthorized(
            "Please check your credentials and try again.".to_string(),
        ));
    }

    tracing::info!(email = %payload.email, "Login accepted");
    Ok(Json(Notice::success("Welcome back! Login successful.")))
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Simulated account creation
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Json<Notice> {
    simulate_latency("signup", state.config.latency.signup).await;
    tracing::info!(email = %payload.email, "Account created");

    Json(Notice::success(
        "Account created successfully! Welcome to RideEasy.",
    ))
}

#[derive(Debug, Deserialize)]
pub struct DriverApplicationRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub vehicle: String,
}

/// Simulated driver application
pub async fn submit_driver_application(
    State(state): State<AppState>,
    Json(payload): Json<DriverApplicationRequest>,
) -> Json<Notice> {
    simulate_latency("driver_application", state.config.latency.driver_application).await;
    tracing::info!(
        name = %payload.name,
        vehicle = %payload.vehicle,
        "Driver application submitted"
    );

    Json(Notice::success(
        "Driver application submitted successfully! We'll review and contact you within 24 hours.",
    ))
}
