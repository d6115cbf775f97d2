use rand::Rng;

use crate::entities::driver::VehicleCategory;

const BASE_FARE: f64 = 2.50;

/// Per-kilometre rate for each vehicle category
pub fn rate_per_km(category: VehicleCategory) -> f64 {
    match category {
        VehicleCategory::Economy => 0.80,
        VehicleCategory::Comfort => 1.20,
        VehicleCategory::Premium => 1.80,
        VehicleCategory::Suv => 2.20,
    }
}

/// Estimated fare in dollars, rounded to cents
pub fn calculate_fare(distance_km: f64, category: VehicleCategory) -> f64 {
    round_to(BASE_FARE + distance_km * rate_per_km(category), 2)
}

/// Placeholder trip distance between 1 and 11 km, to one decimal place.
pub fn mock_distance<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    round_to(rng.gen_range(1.0..11.0), 1)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
