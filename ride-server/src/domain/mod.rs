//! Domain types for the ride aggregator.
//!
//! This module contains the core model shared by the catalog, the
//! recommendation generator, the result filter and the web layer. Parsed
//! types (providers, statuses, schedules) validate at construction time,
//! so code that receives them can trust their validity.

mod booking;
mod error;
mod location;
mod price;
mod provider;
mod ride;
mod schedule;

pub use booking::{Booking, BookingStatus, BookingType, DriverDetails};
pub use error::DomainError;
pub use location::{Coordinates, Location, MAP_CENTRE};
pub use price::Price;
pub use provider::{IconKey, InvalidProvider, Provider};
pub use ride::{RideOption, RideRecommendation};
pub use schedule::Schedule;
