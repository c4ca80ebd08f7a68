//! Result filtering for the ride catalog.
//!
//! Four views exist: fastest, cheapest, eco-friendly and public
//! transport. All of them are total and leave the catalog untouched.

mod key;
mod view;

pub use key::FilterKey;
pub use view::{FilterOutcome, RankedRide, ResultFilter, filter_rides};
