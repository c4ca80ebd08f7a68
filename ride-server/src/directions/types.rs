//! Directions API wire types and their conversion.

use serde::Deserialize;

/// Top-level response from the directions endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub routes: Vec<RouteDto>,
}

/// One candidate route.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteDto {
    /// Metres.
    pub distance: f64,

    /// Seconds.
    pub duration: f64,

    /// GeoJSON geometry, when requested with `geometries=geojson`.
    #[serde(default)]
    pub geometry: Option<serde_json::Value>,
}

/// Distance and duration of the best route, in display units.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    /// Kilometres, one decimal.
    pub distance_km: f64,

    /// Whole minutes.
    pub duration_mins: u32,

    pub geometry: Option<serde_json::Value>,
}

impl RouteSummary {
    /// Summarise the first route of a response, if there is one.
    pub fn from_response(response: DirectionsResponse) -> Option<Self> {
        let route = response.routes.into_iter().next()?;
        Some(Self {
            distance_km: (route.distance / 100.0).round() / 10.0,
            duration_mins: (route.duration / 60.0).round().max(0.0) as u32,
            geometry: route.geometry,
        })
    }
}
