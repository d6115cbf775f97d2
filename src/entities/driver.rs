use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Vehicle tier a rider asks for and a driver offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Economy,
    Comfort,
    Premium,
    Suv,
}

impl VehicleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Economy => "economy",
            VehicleCategory::Comfort => "comfort",
            VehicleCategory::Premium => "premium",
            VehicleCategory::Suv => "suv",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl FromStr for VehicleCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "economy" => Ok(VehicleCategory::Economy),
            "comfort" => Ok(VehicleCategory::Comfort),
            "premium" => Ok(VehicleCategory::Premium),
            "suv" => Ok(VehicleCategory::Suv),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// A driver offered to riders. Eta and distance are display strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: u32,
    pub name: String,
    pub rating: f32,
    pub vehicle: String,
    pub category: VehicleCategory,
    pub eta: String,
    pub price: f64,
    pub distance: String,
}
