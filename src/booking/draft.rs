use crate::entities::booking::{BookingRequest, RawBookingFields};
use crate::entities::driver::VehicleCategory;
use crate::error::{AppError, AppResult};

/// Validate raw form fields into a booking request.
///
/// Every field must be present and non-empty. Values are copied as entered.
///
/// A vehicle type outside the four known categories is also a validation
/// error. The page script instead let it through to matching, where it
/// matched nobody and the rider saw the "no drivers available" notice.
pub fn build_request(raw: &RawBookingFields) -> AppResult<BookingRequest> {
    let fields = [
        ("pickup", &raw.pickup),
        ("destination", &raw.destination),
        ("date", &raw.date),
        ("time", &raw.time),
        ("vehicle_type", &raw.vehicle_type),
    ];

    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.as_deref().is_none_or(str::is_empty))
        .map(|(name, _)| *name)
        .collect();

    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Please fill in all required fields: {}",
            missing.join(", ")
        )));
    }

    let vehicle_type = required(&raw.vehicle_type)
        .parse::<VehicleCategory>()
        .map_err(|e| AppError::Validation(format!("Unknown vehicle type: {}", e.0)))?;

    Ok(BookingRequest {
        pickup: required(&raw.pickup).to_string(),
        destination: required(&raw.destination).to_string(),
        date: required(&raw.date).to_string(),
        time: required(&raw.time).to_string(),
        vehicle_type,
    })
}

fn required(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}
