//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They
//! are distinct from directions API and IO errors.

use chrono::NaiveDateTime;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Filter key outside {fastest, cheapest, eco, public}
    #[error("invalid filter key: {0}")]
    InvalidFilter(String),

    /// Booking status string not recognised
    #[error("invalid booking status: {0}")]
    InvalidStatus(String),

    /// Booking tab not recognised
    #[error("invalid booking type: {0}")]
    InvalidBookingType(String),

    /// Built-in reference data failed to construct
    #[error("invalid catalog data: {0}")]
    InvalidCatalog(String),

    /// Schedule time did not parse
    #[error("invalid time (expected HH:MM): {0}")]
    InvalidTime(String),

    /// Scheduled date given without a time
    #[error("a time (HH:MM) is required with the scheduled date {0}")]
    MissingTime(String),

    /// Schedule date did not parse
    #[error("invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    /// Scheduled moment is earlier than now
    #[error("cannot schedule a ride in the past ({0})")]
    ScheduleInPast(NaiveDateTime),

    /// Auto-tip percentage outside 0..=25
    #[error("auto tip must be between 0 and 25 percent, got {0}")]
    TipOutOfRange(u8),

    /// Payment method id not on file
    #[error("unknown payment method: {0}")]
    UnknownPaymentMethod(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::InvalidFilter("slowest".into());
        assert_eq!(err.to_string(), "invalid filter key: slowest");

        let err = DomainError::TipOutOfRange(30);
        assert_eq!(
            err.to_string(),
            "auto tip must be between 0 and 25 percent, got 30"
        );

        let err = DomainError::MissingTime("2025-04-02".into());
        assert_eq!(
            err.to_string(),
            "a time (HH:MM) is required with the scheduled date 2025-04-02"
        );

        let err = DomainError::UnknownPaymentMethod("card_9".into());
        assert_eq!(err.to_string(), "unknown payment method: card_9");

        let when = chrono::NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let err = DomainError::ScheduleInPast(when);
        assert_eq!(
            err.to_string(),
            "cannot schedule a ride in the past (2025-03-01 08:00:00)"
        );
    }
}
