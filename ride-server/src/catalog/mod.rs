//! Static reference data.
//!
//! Everything the aggregator shows without a live provider integration:
//! ride options, popular places, booking history, promotions and the
//! user's profile seed. The catalog is built once at startup and shared
//! read-only.

mod bookings;
mod profile;
mod rides;

use chrono::NaiveDate;

use crate::domain::{Booking, DomainError, Location, RideOption};
use crate::profile::{PaymentMethods, UserProfile};

/// A promotional offer shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Promotion {
    pub id: String,
    pub title: String,
    pub description: String,
    pub code: String,
    pub valid_until: NaiveDate,
}

/// A previously searched origin/destination pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentSearch {
    pub from: String,
    pub to: String,
}

/// All built-in reference data.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub ride_options: Vec<RideOption>,
    pub popular_locations: Vec<Location>,
    pub recent_searches: Vec<RecentSearch>,
    pub promotions: Vec<Promotion>,
    pub recent_rides: Vec<Booking>,
    pub bookings: Vec<Booking>,
    pub user_profile: UserProfile,
    pub payment_methods: PaymentMethods,
}

impl Catalog {
    /// Build the catalog from the tables compiled into the binary.
    pub fn builtin() -> Result<Self, DomainError> {
        Ok(Self {
            ride_options: rides::ride_options(),
            popular_locations: rides::popular_locations(),
            recent_searches: recent_searches(),
            promotions: promotions()?,
            recent_rides: bookings::recent_rides()?,
            bookings: bookings::user_bookings()?,
            user_profile: profile::user_profile()?,
            payment_methods: profile::payment_methods(),
        })
    }

    /// Popular places matching `query`, at most `limit` of them.
    ///
    /// An empty query returns every place, in catalog order.
    pub fn suggest_locations(&self, query: &str, limit: usize) -> Vec<&Location> {
        self.popular_locations
            .iter()
            .filter(|loc| loc.matches(query))
            .take(limit)
            .collect()
    }

    /// Find a booking by id.
    pub fn booking(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }
}

fn recent_searches() -> Vec<RecentSearch> {
    [
        ("Home", "Office"),
        ("Downtown Metro", "Shopping Mall"),
        ("Airport", "Hotel Grand"),
    ]
    .into_iter()
    .map(|(from, to)| RecentSearch {
        from: from.to_string(),
        to: to.to_string(),
    })
    .collect()
}

fn promotions() -> Result<Vec<Promotion>, DomainError> {
    [
        (
            "1",
            "50% Off First Ride",
            "New users get 50% off their first ride (up to $10)",
            "FIRST50",
            "2025-05-30",
        ),
        (
            "2",
            "Weekend Special",
            "20% off all rides this weekend with code WKND20",
            "WKND20",
            "2025-04-30",
        ),
        (
            "3",
            "Eco-Friendly Discount",
            "15% off when you choose green transportation options",
            "GOGREEN",
            "2025-06-15",
        ),
    ]
    .into_iter()
    .map(|(id, title, description, code, valid_until)| {
        let valid_until = NaiveDate::parse_from_str(valid_until, "%Y-%m-%d").map_err(|e| {
            DomainError::InvalidCatalog(format!("promotion {id}: {valid_until}: {e}"))
        })?;
        Ok(Promotion {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            code: code.to_string(),
            valid_until,
        })
    })
    .collect()
}
