use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::booking::DriverChoices;
use crate::entities::booking::{Booking, BookingRequest, RawBookingFields};
use crate::entities::driver::{Driver, VehicleCategory};
use crate::entities::notice::Notice;
use crate::error::{AppError, AppResult};
use crate::utils::fare::{calculate_fare, mock_distance};
use crate::AppState;

/// List every driver in the fixture store
pub async fn list_drivers(State(state): State<AppState>) -> Json<Vec<Driver>> {
    Json(state.session.fixtures().drivers().to_vec())
}

// ============ Booking Flow ============

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub request: BookingRequest,
    #[serde(flatten)]
    pub choices: DriverChoices,
}

/// Validate a booking form and find drivers for it
pub async fn search_drivers(
    State(state): State<AppState>,
    Json(payload): Json<RawBookingFields>,
) -> AppResult<Json<SearchResponse>> {
    let (request, choices) = state
        .session
        .submit_booking_request(&payload, state.config.latency.match_drivers)
        .await?;

    Ok(Json(SearchResponse { request, choices }))
}

#[derive(Debug, Deserialize)]
pub struct ConfirmSelectionRequest {
    pub driver_id: u32,
    pub request: RawBookingFields,
}

/// Confirm the chosen driver and store the booking as current
pub async fn confirm_selection(
    State(state): State<AppState>,
    Json(payload): Json<ConfirmSelectionRequest>,
) -> AppResult<Json<Booking>> {
    let booking = state
        .session
        .confirm_selection(payload.driver_id, &payload.request)
        .await?;

    Ok(Json(booking))
}

/// Current booking, or `null` when nothing has been confirmed yet
pub async fn current_booking(State(state): State<AppState>) -> Json<Option<Booking>> {
    Json(state.session.current_booking().await)
}

pub async fn track_ride() -> Json<Notice> {
    Json(Notice::info(
        "Ride tracking feature will be available in the mobile app!",
    ))
}

// ============ Fares ============

#[derive(Debug, Deserialize)]
pub struct FareQuery {
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default)]
    pub distance_km: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FareEstimate {
    pub vehicle_type: VehicleCategory,
    pub distance_km: f64,
    pub fare: f64,
}

/// Estimate a fare; the distance is mocked when the caller has none
pub async fn estimate_fare(Query(query): Query<FareQuery>) -> AppResult<Json<FareEstimate>> {
    let vehicle_type = query
        .vehicle_type
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("vehicle_type is required".to_string()))?
        .parse::<VehicleCategory>()
        .map_err(|e| AppError::BadRequest(format!("Unknown vehicle type: {}", e.0)))?;

    let distance_km = match query.distance_km.as_deref() {
        Some(raw) => match raw.parse::<f64>() {
            Ok(d) if d.is_finite() && d >= 0.0 => d,
            _ => {
                return Err(AppError::BadRequest(
                    "distance_km must be a non-negative number".to_string(),
                ));
            }
        },
        None => mock_distance(&mut rand::thread_rng()),
    };

    Ok(Json(FareEstimate {
        vehicle_type,
        distance_km,
        fare: calculate_fare(distance_km, vehicle_type),
    }))
}
