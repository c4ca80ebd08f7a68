//! Ride recommendations shown while the user types a trip.
//!
//! The generator is a pure function of a [`TripSample`]; randomness comes
//! from an injected [`rand::Rng`] so tests can seed it.

mod config;
mod generator;

pub use config::RecommendConfig;
pub use generator::{RecommendationGenerator, TripSample, recommendations_for};
