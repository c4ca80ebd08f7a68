//! Web layer for the ride aggregator.
//!
//! Provides JSON endpoints and server-rendered pages for searching,
//! comparing and managing rides.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
