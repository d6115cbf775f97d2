use crate::entities::driver::{Driver, VehicleCategory};

/// Drivers eligible for a requested category, in fixture order.
///
/// An economy request matches every driver whatever their category.
pub fn match_drivers(drivers: &[Driver], requested: VehicleCategory) -> Vec<Driver> {
    drivers
        .iter()
        .filter(|driver| driver.category == requested || requested == VehicleCategory::Economy)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::fixtures::mock_drivers;

    fn ids(drivers: &[Driver]) -> Vec<u32> {
        drivers.iter().map(|d| d.id).collect()
    }

    #[test]
    fn test_economy_matches_every_driver() {
        let drivers = mock_drivers();
        assert_eq!(ids(&match_drivers(&drivers, VehicleCategory::Economy)), vec![1, 2, 3]);
    }

    #[test]
    fn test_premium_matches_only_premium() {
        let drivers = mock_drivers();
        let matched = match_drivers(&drivers, VehicleCategory::Premium);

        assert_eq!(ids(&matched), vec![3]);
        assert!(matched.iter().all(|d| d.category == VehicleCategory::Premium));
    }

    #[test]
    fn test_comfort_matches_john_smith() {
        let matched = match_drivers(&mock_drivers(), VehicleCategory::Comfort);

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, 1);
        assert_eq!(matched[0].name, "John Smith");
    }

    #[test]
    fn test_suv_matches_nobody() {
        assert!(match_drivers(&mock_drivers(), VehicleCategory::Suv).is_empty());
    }

    #[test]
    fn test_matching_is_repeatable() {
        let drivers = mock_drivers();
        for category in [
            VehicleCategory::Economy,
            VehicleCategory::Comfort,
            VehicleCategory::Premium,
            VehicleCategory::Suv,
        ] {
            assert_eq!(match_drivers(&drivers, category), match_drivers(&drivers, category));
        }
    }

    #[test]
    fn test_keeps_input_order() {
        let mut drivers = mock_drivers();
        drivers.reverse();
        assert_eq!(ids(&match_drivers(&drivers, VehicleCategory::Economy)), vec![3, 2, 1]);
    }
}
