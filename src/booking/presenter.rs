use serde::Serialize;

use crate::db::fixtures::FixtureStore;
use crate::entities::booking::{Booking, BookingId, BookingRequest, BookingStatus};
use crate::entities::driver::Driver;
use crate::error::{AppError, AppResult};

pub const NO_DRIVERS_MESSAGE: &str =
    "No drivers available for the selected vehicle type. Please try another option.";

/// What the rider gets to pick from after matching.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DriverChoices {
    Available { drivers: Vec<Driver> },
    NoDriversAvailable { message: String },
}

impl DriverChoices {
    pub fn drivers(&self) -> &[Driver] {
        match self {
            DriverChoices::Available { drivers } => drivers,
            DriverChoices::NoDriversAvailable { .. } => &[],
        }
    }
}

pub fn present(matched: Vec<Driver>) -> DriverChoices {
    if matched.is_empty() {
        DriverChoices::NoDriversAvailable {
            message: NO_DRIVERS_MESSAGE.to_string(),
        }
    } else {
        DriverChoices::Available { drivers: matched }
    }
}

/// Turn a chosen driver into a confirmed booking.
///
/// The id is looked up in the whole fixture store, not only the drivers that
/// were offered for this request.
pub fn resolve(
    store: &FixtureStore,
    driver_id: u32,
    request: &BookingRequest,
) -> AppResult<Booking> {
    let driver = store
        .find(driver_id)
        .ok_or_else(|| AppError::NotFound(format!("Driver {} not found", driver_id)))?;

    Ok(Booking {
        request: request.clone(),
        driver: driver.clone(),
        status: BookingStatus::Confirmed,
        booking_id: BookingId::generate(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::fixtures::mock_drivers;
    use crate::entities::driver::VehicleCategory;

    fn request(vehicle_type: VehicleCategory) -> BookingRequest {
        BookingRequest {
            pickup: "5th Ave".to_string(),
            destination: "Central Park".to_string(),
            date: "2024-06-01".to_string(),
            time: "14:00".to_string(),
            vehicle_type,
        }
    }

    #[test]
    fn test_present_empty_is_no_availability() {
        assert_eq!(
            present(Vec::new()),
            DriverChoices::NoDriversAvailable {
                message: NO_DRIVERS_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_present_exposes_matched_drivers() {
        let choices = present(mock_drivers());
        assert_eq!(choices.drivers().len(), 3);
    }

    #[test]
    fn test_resolve_confirms_known_driver() {
        let store = FixtureStore::mock();
        let booking = resolve(&store, 1, &request(VehicleCategory::Comfort)).unwrap();

        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.driver.name, "John Smith");
        assert_eq!(booking.request, request(VehicleCategory::Comfort));
        assert!(booking.booking_id.as_str().starts_with("RD"));
    }

    #[test]
    fn test_resolve_honours_driver_outside_matched_set() {
        let store = FixtureStore::mock();
        let booking = resolve(&store, 3, &request(VehicleCategory::Comfort)).unwrap();
        assert_eq!(booking.driver.category, VehicleCategory::Premium);
    }

    #[test]
    fn test_resolve_unknown_driver_is_not_found() {
        let store = FixtureStore::mock();
        let result = resolve(&store, 99, &request(VehicleCategory::Economy));
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_booking_keeps_driver_snapshot() {
        let store = FixtureStore::new(mock_drivers());
        let booking = resolve(&store, 2, &request(VehicleCategory::Economy)).unwrap();

        let mut drivers = store.into_drivers();
        drivers[1].price = 99.0;
        drivers[1].eta = "30 min".to_string();
        drivers[1].name = "Someone Else".to_string();

        assert_eq!(drivers[1].id, booking.driver.id);
        assert_ne!(drivers[1], booking.driver);
        assert_eq!(booking.driver.price, 8.80);
        assert_eq!(booking.driver.eta, "5 min");
        assert_eq!(booking.driver.name, "Sarah Johnson");
    }
}
