use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::driver::{Driver, VehicleCategory};

/// Booking form fields as the rider entered them. Any of them may be missing.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawBookingFields {
    #[serde(default)]
    pub pickup: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub vehicle_type: Option<String>,
}

/// A validated ride request. Date and time are kept exactly as entered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub pickup: String,
    pub destination: String,
    pub date: String,
    pub time: String,
    pub vehicle_type: VehicleCategory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
}

/// `RD` followed by the confirmation time in milliseconds since the epoch.
///
/// Only unique to the millisecond: two confirmations in the same
/// millisecond get the same id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(String);

impl BookingId {
    pub const PREFIX: &'static str = "RD";

    pub fn from_millis(millis: i64) -> Self {
        Self(format!("{}{}", Self::PREFIX, millis))
    }

    pub fn generate() -> Self {
        Self::from_millis(Utc::now().timestamp_millis())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A confirmed booking. The driver is a copy taken when the ride was confirmed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(flatten)]
    pub request: BookingRequest,
    pub driver: Driver,
    pub status: BookingStatus,
    pub booking_id: BookingId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_id_has_prefix_and_millis() {
        let id = BookingId::from_millis(1_717_250_400_123);
        assert_eq!(id.as_str(), "RD1717250400123");
        assert!(BookingId::generate().as_str().starts_with("RD"));
    }

    #[test]
    fn test_booking_ids_collide_within_same_millisecond() {
        assert_eq!(BookingId::from_millis(42), BookingId::from_millis(42));
        assert_ne!(BookingId::from_millis(42), BookingId::from_millis(43));
    }

    #[test]
    fn test_booking_ids_differ_across_milliseconds() {
        let first = BookingId::generate();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = BookingId::generate();
        assert_ne!(first, second);
    }
}
