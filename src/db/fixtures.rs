use crate::entities::driver::{Driver, VehicleCategory};

/// Read-only list of drivers available for the session.
#[derive(Clone, Debug)]
pub struct FixtureStore {
    drivers: Vec<Driver>,
}

impl FixtureStore {
    pub fn new(drivers: Vec<Driver>) -> Self {
        Self { drivers }
    }

    pub fn mock() -> Self {
        Self::new(mock_drivers())
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn find(&self, driver_id: u32) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == driver_id)
    }

    pub fn into_drivers(self) -> Vec<Driver> {
        self.drivers
    }
}

pub fn mock_drivers() -> Vec<Driver> {
    vec![
        Driver {
            id: 1,
            name: "John Smith".to_string(),
            rating: 4.8,
            vehicle: "Toyota Camry".to_string(),
            category: VehicleCategory::Comfort,
            eta: "3 min".to_string(),
            price: 12.50,
            distance: "2.1 km".to_string(),
        },
        Driver {
            id: 2,
            name: "Sarah Johnson".to_string(),
            rating: 4.9,
            vehicle: "Honda Civic".to_string(),
            category: VehicleCategory::Economy,
            eta: "5 min".to_string(),
            price: 8.80,
            distance: "2.1 km".to_string(),
        },
        Driver {
            id: 3,
            name: "Michael Chen".to_string(),
            rating: 4.7,
            vehicle: "BMW 3 Series".to_string(),
            category: VehicleCategory::Premium,
            eta: "7 min".to_string(),
            price: 18.90,
            distance: "2.1 km".to_string(),
        },
    ]
}
