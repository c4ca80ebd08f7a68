//! Route lookups against the MapTiler directions API.
//!
//! Used only for the map panel on the results page. Nothing in the
//! recommendation or filtering path depends on it, and a missing API key
//! simply means route information is unavailable.

mod client;
mod error;
mod types;

pub use client::{DirectionsClient, DirectionsConfig};
pub use error::DirectionsError;
pub use types::{DirectionsResponse, RouteDto, RouteSummary};
