//! Ride aggregator server.
//!
//! A web application that compares ride-hailing, bike taxis and public
//! transport for a trip and ranks them by speed, price or footprint.

pub mod bookings;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod directions;
pub mod domain;
pub mod filter;
pub mod profile;
pub mod recommend;
pub mod web;
