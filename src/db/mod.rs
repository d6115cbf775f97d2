pub mod booking_state;
pub mod fixtures;

use std::time::Duration;

use tokio::sync::RwLock;

use crate::booking::{self, DriverChoices};
use crate::entities::booking::{Booking, BookingRequest, RawBookingFields};
use crate::entities::location::Location;
use crate::error::AppResult;
use crate::utils::latency::simulate_latency;

use booking_state::BookingState;
use fixtures::FixtureStore;

/// In-memory state of one rider session.
///
/// The fixture list never changes after construction. The booking slot is
/// only written by [`RideSession::confirm_selection`].
pub struct RideSession {
    fixtures: FixtureStore,
    bookings: RwLock<BookingState>,
    location: RwLock<Option<Location>>,
}

impl RideSession {
    pub fn new(fixtures: FixtureStore) -> Self {
        Self {
            fixtures,
            bookings: RwLock::new(BookingState::default()),
            location: RwLock::new(None),
        }
    }

    pub fn with_mock_drivers() -> Self {
        Self::new(FixtureStore::mock())
    }

    pub fn fixtures(&self) -> &FixtureStore {
        &self.fixtures
    }

    /// Validate the form, wait out the simulated lookup, then match drivers.
    ///
    /// Validation failures return before any delay.
    pub async fn submit_booking_request(
        &self,
        raw: &RawBookingFields,
        latency: Duration,
    ) -> AppResult<(BookingRequest, DriverChoices)> {
        let request = booking::build_request(raw)?;
        tracing::debug!(
            pickup = %request.pickup,
            destination = %request.destination,
            vehicle_type = %request.vehicle_type,
            "Booking request validated"
        );

        simulate_latency("match_drivers", latency).await;

        let matched = booking::match_drivers(self.fixtures.drivers(), request.vehicle_type);
        tracing::info!(
            vehicle_type = %request.vehicle_type,
            matched = matched.len(),
            "Drivers matched"
        );

        Ok((request, booking::present(matched)))
    }

    /// Confirm a driver for a request and make it the current booking.
    ///
    /// The form is validated again here, so a booking can only be built from
    /// a complete request. Any failure leaves the current booking untouched.
    pub async fn confirm_selection(
        &self,
        driver_id: u32,
        raw: &RawBookingFields,
    ) -> AppResult<Booking> {
        let request = booking::build_request(raw)?;
        let booking = booking::resolve(&self.fixtures, driver_id, &request).inspect_err(|e| {
            tracing::warn!(driver_id, error = %e, "Selection referenced an unknown driver");
        })?;

        self.bookings.write().await.set_current(booking.clone());
        tracing::info!(
            booking_id = booking.booking_id.as_str(),
            driver = %booking.driver.name,
            "Booking confirmed"
        );

        Ok(booking)
    }

    pub async fn current_booking(&self) -> Option<Booking> {
        self.bookings.read().await.current().cloned()
    }

    pub async fn set_location(&self, location: Location) {
        *self.location.write().await = Some(location);
        tracing::debug!(lat = location.lat, lng = location.lng, "Location updated");
    }

    pub async fn last_location(&self) -> Option<Location> {
        *self.location.read().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn raw(vehicle_type: &str) -> RawBookingFields {
        RawBookingFields {
            pickup: Some("5th Ave".to_string()),
            destination: Some("Central Park".to_string()),
            date: Some("2024-06-01".to_string()),
            time: Some("14:00".to_string()),
            vehicle_type: Some(vehicle_type.to_string()),
        }
    }

    #[tokio::test]
    async fn test_comfort_request_confirms_john_smith() {
        let session = RideSession::with_mock_drivers();

        let (request, choices) = session
            .submit_booking_request(&raw("comfort"), Duration::ZERO)
            .await
            .unwrap();
        let ids: Vec<u32> = choices.drivers().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1]);

        let booking = session.confirm_selection(1, &raw("comfort")).await.unwrap();
        assert_eq!(booking.request, request);
        assert_eq!(booking.driver.name, "John Smith");
        assert!(booking.booking_id.as_str().starts_with("RD"));
        assert_eq!(session.current_booking().await, Some(booking));
    }

    #[tokio::test]
    async fn test_economy_request_offers_all_drivers() {
        let session = RideSession::with_mock_drivers();
        let (_, choices) = session
            .submit_booking_request(&raw("economy"), Duration::ZERO)
            .await
            .unwrap();

        let ids: Vec<u32> = choices.drivers().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_suv_request_reports_no_availability() {
        let session = RideSession::with_mock_drivers();
        let (_, choices) = session
            .submit_booking_request(&raw("suv"), Duration::ZERO)
            .await
            .unwrap();

        assert!(matches!(choices, DriverChoices::NoDriversAvailable { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_matching_waits_for_simulated_latency() {
        let session = RideSession::with_mock_drivers();
        let started = tokio::time::Instant::now();

        session
            .submit_booking_request(&raw("premium"), Duration::from_millis(2000))
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_validation_fails_without_waiting() {
        let session = RideSession::with_mock_drivers();
        let started = tokio::time::Instant::now();
        let mut fields = raw("comfort");
        fields.destination = None;

        let result = session
            .submit_booking_request(&fields, Duration::from_millis(2000))
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_unknown_driver_leaves_current_booking_untouched() {
        let session = RideSession::with_mock_drivers();
        let first = session.confirm_selection(2, &raw("economy")).await.unwrap();

        let result = session.confirm_selection(42, &raw("economy")).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(session.current_booking().await, Some(first));
    }

    #[tokio::test]
    async fn test_incomplete_form_is_never_confirmed() {
        let session = RideSession::with_mock_drivers();
        let blank = RawBookingFields {
            pickup: Some(String::new()),
            destination: Some(String::new()),
            date: Some(String::new()),
            time: Some(String::new()),
            vehicle_type: Some("suv".to_string()),
        };

        let result = session.confirm_selection(1, &blank).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(session.current_booking().await.is_none());
    }

    #[tokio::test]
    async fn test_location_round_trip() {
        let session = RideSession::with_mock_drivers();
        assert!(session.last_location().await.is_none());

        let here = Location { lat: 40.7831, lng: -73.9712 };
        session.set_location(here).await;
        assert_eq!(session.last_location().await, Some(here));
    }
}
