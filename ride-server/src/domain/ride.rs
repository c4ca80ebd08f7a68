//! Ride options and recommendations.

use super::{IconKey, Price, Provider};

/// A bookable ride in the static catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct RideOption {
    pub id: String,
    pub provider: Provider,
    /// Product tier, e.g. "UberX".
    pub tier: String,
    pub estimated_mins: u32,
    pub estimated_price: Price,
    pub distance_km: f64,
    pub eco_friendly: bool,
    pub icon: IconKey,
}

impl RideOption {
    /// Convenience constructor used by the catalog.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: &str,
        provider: Provider,
        tier: &str,
        estimated_mins: u32,
        price_cents: u32,
        distance_km: f64,
        eco_friendly: bool,
        icon: IconKey,
    ) -> Self {
        Self {
            id: id.to_string(),
            provider,
            tier: tier.to_string(),
            estimated_mins,
            estimated_price: Price::from_cents(price_cents),
            distance_km,
            eco_friendly,
            icon,
        }
    }
}

/// A suggestion shown while the user types an origin and destination.
#[derive(Debug, Clone, PartialEq)]
pub struct RideRecommendation {
    pub provider: Provider,
    pub tier: String,
    pub estimated_price: Price,
    pub estimated_mins: u32,
    pub distance_km: f64,
    pub available: bool,
}
