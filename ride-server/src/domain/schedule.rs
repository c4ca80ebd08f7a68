//! Ride timing: leave now or schedule for later.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::DomainError;

/// When the user wants to travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Schedule {
    #[default]
    Now,
    At(NaiveDateTime),
}

impl Schedule {
    /// Build a scheduled ride from a date and an `HH:MM` time.
    ///
    /// Rejects malformed times and moments earlier than `now`.
    pub fn at(date: NaiveDate, time: &str, now: NaiveDateTime) -> Result<Self, DomainError> {
        let time = NaiveTime::parse_from_str(time.trim(), "%H:%M")
            .map_err(|_| DomainError::InvalidTime(time.to_string()))?;
        let when = date.and_time(time);
        if when < now {
            return Err(DomainError::ScheduleInPast(when));
        }
        Ok(Schedule::At(when))
    }
}

impl fmt::Display for Schedule {
    /// `Now`, or `dd/mm/yyyy | h:mm am/pm`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schedule::Now => f.write_str("Now"),
            Schedule::At(when) => write!(f, "{}", when.format("%d/%m/%Y | %-I:%M %P")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn now() -> NaiveDateTime {
        date(2025, 4, 1).and_hms_opt(9, 0, 0).unwrap()
    }

    #[test]
    fn schedule_formats_for_display() {
        let s = Schedule::at(date(2025, 4, 8), "14:00", now()).unwrap();
        assert_eq!(s.to_string(), "08/04/2025 | 2:00 pm");

        let s = Schedule::at(date(2025, 4, 8), "00:05", now()).unwrap();
        assert_eq!(s.to_string(), "08/04/2025 | 12:05 am");

        assert_eq!(Schedule::Now.to_string(), "Now");
    }

    #[test]
    fn later_today_is_allowed() {
        let s = Schedule::at(date(2025, 4, 1), "09:30", now()).unwrap();
        assert_ne!(s, Schedule::Now);
    }

    #[test]
    fn past_is_rejected() {
        let err = Schedule::at(date(2025, 3, 31), "10:00", now()).unwrap_err();
        assert!(matches!(err, DomainError::ScheduleInPast(_)));

        let err = Schedule::at(date(2025, 4, 1), "08:59", now()).unwrap_err();
        assert!(matches!(err, DomainError::ScheduleInPast(_)));
    }

    #[test]
    fn malformed_time_is_rejected() {
        let err = Schedule::at(date(2025, 4, 8), "2pm", now()).unwrap_err();
        assert_eq!(err.to_string(), "invalid time (expected HH:MM): 2pm");
        assert!(Schedule::at(date(2025, 4, 8), "25:00", now()).is_err());
    }
}
