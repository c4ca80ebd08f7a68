//! Booking records.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};

use super::{DomainError, Price, Provider};

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingStatus {
    Scheduled,
    Completed,
    Canceled,
    InProgress,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Scheduled => "scheduled",
            BookingStatus::Completed => "completed",
            BookingStatus::Canceled => "canceled",
            BookingStatus::InProgress => "in-progress",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(BookingStatus::Scheduled),
            "completed" => Ok(BookingStatus::Completed),
            "canceled" => Ok(BookingStatus::Canceled),
            "in-progress" => Ok(BookingStatus::InProgress),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which tab of the bookings page to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BookingType {
    #[default]
    Upcoming,
    Past,
    Canceled,
}

impl BookingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingType::Upcoming => "upcoming",
            BookingType::Past => "past",
            BookingType::Canceled => "canceled",
        }
    }

    /// Whether a booking with `status` belongs under this tab.
    pub fn includes(&self, status: BookingStatus) -> bool {
        match self {
            BookingType::Upcoming => {
                matches!(status, BookingStatus::Scheduled | BookingStatus::InProgress)
            }
            BookingType::Past => status == BookingStatus::Completed,
            BookingType::Canceled => status == BookingStatus::Canceled,
        }
    }
}

impl FromStr for BookingType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(BookingType::Upcoming),
            "past" => Ok(BookingType::Past),
            "canceled" => Ok(BookingType::Canceled),
            other => Err(DomainError::InvalidBookingType(other.to_string())),
        }
    }
}

impl fmt::Display for BookingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Driver assigned to a booking.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverDetails {
    pub name: String,
    /// `None` until a driver has been assigned.
    pub rating: Option<f32>,
    pub vehicle: String,
}

impl DriverDetails {
    pub fn new(name: &str, rating: f32, vehicle: &str) -> Self {
        Self {
            name: name.to_string(),
            rating: Some(rating),
            vehicle: vehicle.to_string(),
        }
    }

    /// Placeholder for scheduled rides without a driver yet.
    pub fn pending() -> Self {
        Self {
            name: "Pending Assignment".to_string(),
            rating: None,
            vehicle: "Pending Assignment".to_string(),
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.rating.is_some()
    }
}

/// A past, upcoming or canceled ride.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: String,
    pub from: String,
    pub to: String,
    pub provider: Provider,
    pub status: BookingStatus,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub price: Price,
    pub distance_km: f64,
    pub duration_mins: u32,
    pub driver: Option<DriverDetails>,
}

impl Booking {
    /// Time formatted as on the booking card, e.g. "06:30 AM".
    pub fn display_time(&self) -> String {
        self.time.format("%I:%M %p").to_string()
    }
}
