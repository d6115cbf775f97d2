//! Ride booking flow: a draft is validated into a [`BookingRequest`],
//! matched against the driver fixtures, presented as choices, and resolved
//! into a confirmed [`Booking`].
//!
//! [`BookingRequest`]: crate::entities::booking::BookingRequest
//! [`Booking`]: crate::entities::booking::Booking

pub mod draft;
pub mod matcher;
pub mod presenter;

pub use draft::build_request;
pub use matcher::match_drivers;
pub use presenter::{present, resolve, DriverChoices};
