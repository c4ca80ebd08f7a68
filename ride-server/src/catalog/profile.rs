//! Built-in user profile and payment methods.

use chrono::NaiveDate;

use crate::domain::{DomainError, Location};
use crate::profile::{PaymentMethod, PaymentMethods, Preferences, UserProfile};

pub fn user_profile() -> Result<UserProfile, DomainError> {
    let member_since = NaiveDate::from_ymd_opt(2023, 11, 15)
        .ok_or_else(|| DomainError::InvalidCatalog("member since date".into()))?;

    Ok(UserProfile {
        id: "12345".to_string(),
        name: "Alex Johnson".to_string(),
        email: "alex.johnson@example.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        member_since,
        total_rides: 42,
        saved_locations: vec![
            Location::new("home", "Home", "123 Residence Ave, Apt 4B", 40.7128, -74.006),
            Location::new(
                "work",
                "Office",
                "456 Corporate Plaza, 12th Floor",
                40.7551,
                -73.9884,
            ),
            Location::new("gym", "Gym", "789 Fitness Blvd", 40.7392, -73.9903),
        ],
        preferences: Preferences {
            default_ride_type: "UberX".to_string(),
            prefer_eco_friendly: true,
            notifications_enabled: true,
            auto_tip_percent: 15,
            preferred_payment_method: "card_1".to_string(),
        },
    })
}

pub fn payment_methods() -> PaymentMethods {
    PaymentMethods::new(vec![
        PaymentMethod::card("card_1", "visa", "4242", 11, 2026).with_default(true),
        PaymentMethod::card("card_2", "mastercard", "8123", 3, 2025),
        PaymentMethod::upi("upi_1", "googlepay", "alex@okbank"),
    ])
}
