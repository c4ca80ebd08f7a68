//! Configuration for the recommendation generator.

/// Ranges used when drawing a synthetic trip.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendConfig {
    /// Lower bound of the trip distance (km, inclusive).
    pub min_distance_km: f64,

    /// Upper bound of the trip distance (km, exclusive).
    pub max_distance_km: f64,

    /// Lower bound of the faster transit duration (minutes, inclusive).
    pub min_transit_mins: u32,

    /// Upper bound of the faster transit duration (minutes, exclusive).
    pub max_transit_mins: u32,

    /// Extra minutes added for the slower transit option.
    pub slow_transit_offset_mins: u32,
}

impl RecommendConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        min_distance_km: f64,
        max_distance_km: f64,
        min_transit_mins: u32,
        max_transit_mins: u32,
        slow_transit_offset_mins: u32,
    ) -> Self {
        Self {
            min_distance_km,
            max_distance_km,
            min_transit_mins,
            max_transit_mins,
            slow_transit_offset_mins,
        }
    }
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            min_distance_km: 5.0,
            max_distance_km: 15.0,
            min_transit_mins: 15,
            max_transit_mins: 45,
            slow_transit_offset_mins: 10,
        }
    }
}
