use crate::entities::booking::Booking;

/// Holds the most recently confirmed booking. No history is kept.
#[derive(Debug, Default)]
pub struct BookingState {
    current: Option<Booking>,
}

impl BookingState {
    pub fn set_current(&mut self, booking: Booking) {
        self.current = Some(booking);
    }

    pub fn current(&self) -> Option<&Booking> {
        self.current.as_ref()
    }
}
