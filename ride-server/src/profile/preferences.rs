//! User profile and ride preferences.

use chrono::NaiveDate;

use crate::domain::{DomainError, Location};

/// Largest auto-tip the preferences form accepts, in percent.
pub const MAX_AUTO_TIP_PERCENT: u8 = 25;

/// Ride preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    /// Product tier pre-selected on search, e.g. "UberX".
    pub default_ride_type: String,
    pub prefer_eco_friendly: bool,
    pub notifications_enabled: bool,
    pub auto_tip_percent: u8,
    /// Id of a saved payment method.
    pub preferred_payment_method: String,
}

impl Preferences {
    /// Check field ranges that don't depend on other profile state.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.auto_tip_percent > MAX_AUTO_TIP_PERCENT {
            return Err(DomainError::TipOutOfRange(self.auto_tip_percent));
        }
        Ok(())
    }
}

/// The signed-in user's profile.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub member_since: NaiveDate,
    pub total_rides: u32,
    pub saved_locations: Vec<Location>,
    pub preferences: Preferences,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs(tip: u8) -> Preferences {
        Preferences {
            default_ride_type: "UberX".into(),
            prefer_eco_friendly: true,
            notifications_enabled: true,
            auto_tip_percent: tip,
            preferred_payment_method: "card_1".into(),
        }
    }

    #[test]
    fn tip_bounds_are_inclusive() {
        assert!(prefs(0).validate().is_ok());
        assert!(prefs(25).validate().is_ok());
        assert_eq!(prefs(26).validate(), Err(DomainError::TipOutOfRange(26)));
    }
}
