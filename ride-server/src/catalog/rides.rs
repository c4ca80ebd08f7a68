//! Built-in ride options and popular places.

use crate::domain::{IconKey, Location, Provider, RideOption};

/// The ride options shown on the results page.
///
/// Order matters: it is the tie-break for the sorted views and the order
/// of the eco subset.
pub fn ride_options() -> Vec<RideOption> {
    vec![
        RideOption::new("1", Provider::Uber, "UberX", 15, 2550, 7.2, false, IconKey::CarFront),
        RideOption::new("2", Provider::Uber, "UberXL", 17, 3575, 7.2, false, IconKey::CarFront),
        RideOption::new("3", Provider::Ola, "Mini", 12, 2230, 7.2, false, IconKey::CarFront),
        RideOption::new("4", Provider::Rapido, "Bike", 10, 1500, 7.2, true, IconKey::Bike),
        RideOption::new("5", Provider::Metro, "Public", 25, 550, 8.5, false, IconKey::Train),
        RideOption::new("6", Provider::Bus, "Public", 35, 375, 8.0, false, IconKey::Bus),
        RideOption::new("7", Provider::Uber, "Green", 18, 2850, 7.2, true, IconKey::Zap),
    ]
}

/// Places offered as autocomplete suggestions.
pub fn popular_locations() -> Vec<Location> {
    vec![
        Location::new(
            "1",
            "Downtown Metro Station",
            "123 Main St, Downtown",
            40.7128,
            -74.006,
        ),
        Location::new("2", "Central Park", "5th Ave, Midtown", 40.7812, -73.9665),
        Location::new(
            "3",
            "Business District",
            "456 Commerce Ave",
            40.7551,
            -73.9884,
        ),
        Location::new(
            "4",
            "Airport Terminal",
            "International Airport",
            40.6413,
            -73.7781,
        ),
        Location::new(
            "5",
            "University Campus",
            "789 College Blvd",
            40.7291,
            -73.9965,
        ),
    ]
}
