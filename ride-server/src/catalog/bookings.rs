//! Built-in booking history.

use chrono::{NaiveDate, NaiveTime};

use crate::domain::{Booking, BookingStatus, DomainError, DriverDetails, Price, Provider};

/// Fields of a booking as written in the tables below.
struct Row {
    id: &'static str,
    from: &'static str,
    to: &'static str,
    provider: Provider,
    status: BookingStatus,
    date: &'static str,
    time: &'static str,
    price_cents: u32,
    distance_km: f64,
    duration_mins: u32,
    driver: Option<DriverDetails>,
}

impl Row {
    fn into_booking(self) -> Result<Booking, DomainError> {
        let date = NaiveDate::parse_from_str(self.date, "%Y-%m-%d").map_err(|e| {
            DomainError::InvalidCatalog(format!("booking {}: date {}: {e}", self.id, self.date))
        })?;
        let time = NaiveTime::parse_from_str(self.time, "%I:%M %p").map_err(|e| {
            DomainError::InvalidCatalog(format!("booking {}: time {}: {e}", self.id, self.time))
        })?;

        Ok(Booking {
            id: self.id.to_string(),
            from: self.from.to_string(),
            to: self.to.to_string(),
            provider: self.provider,
            status: self.status,
            date,
            time,
            price: Price::from_cents(self.price_cents),
            distance_km: self.distance_km,
            duration_mins: self.duration_mins,
            driver: self.driver,
        })
    }
}

fn build(rows: Vec<Row>) -> Result<Vec<Booking>, DomainError> {
    rows.into_iter().map(Row::into_booking).collect()
}

/// The user's bookings: upcoming, past and canceled.
pub fn user_bookings() -> Result<Vec<Booking>, DomainError> {
    use BookingStatus::*;

    build(vec![
        Row {
            id: "101",
            from: "Home",
            to: "Airport",
            provider: Provider::Uber,
            status: Scheduled,
            date: "2025-04-15",
            time: "06:30 AM",
            price_cents: 4500,
            distance_km: 18.5,
            duration_mins: 35,
            driver: Some(DriverDetails::pending()),
        },
        Row {
            id: "102",
            from: "Office",
            to: "Client Meeting",
            provider: Provider::Ola,
            status: Scheduled,
            date: "2025-04-08",
            time: "02:00 PM",
            price_cents: 2250,
            distance_km: 8.2,
            duration_mins: 20,
            driver: Some(DriverDetails::pending()),
        },
        Row {
            id: "201",
            from: "Home",
            to: "Office",
            provider: Provider::Uber,
            status: Completed,
            date: "2025-03-15",
            time: "08:45 AM",
            price_cents: 2375,
            distance_km: 7.2,
            duration_mins: 19,
            driver: Some(DriverDetails::new(
                "Robert K.",
                4.7,
                "Hyundai Sonata (DEF 456)",
            )),
        },
        Row {
            id: "202",
            from: "Gym",
            to: "Home",
            provider: Provider::Rapido,
            status: Completed,
            date: "2025-03-12",
            time: "07:30 PM",
            price_cents: 1250,
            distance_km: 3.5,
            duration_mins: 10,
            driver: Some(DriverDetails::new("David L.", 4.9, "Honda CBR (MNO 789)")),
        },
        Row {
            id: "203",
            from: "Office",
            to: "Restaurant",
            provider: Provider::Ola,
            status: Completed,
            date: "2025-03-10",
            time: "01:15 PM",
            price_cents: 1425,
            distance_km: 4.8,
            duration_mins: 12,
            driver: Some(DriverDetails::new("Lisa P.", 4.8, "Maruti Swift (GHI 123)")),
        },
        Row {
            id: "204",
            from: "Restaurant",
            to: "Office",
            provider: Provider::Metro,
            status: Completed,
            date: "2025-03-10",
            time: "02:30 PM",
            price_cents: 475,
            distance_km: 5.2,
            duration_mins: 18,
            driver: None,
        },
        Row {
            id: "205",
            from: "Friend's House",
            to: "Home",
            provider: Provider::Bus,
            status: Completed,
            date: "2025-03-08",
            time: "11:45 PM",
            price_cents: 350,
            distance_km: 7.8,
            duration_mins: 30,
            driver: None,
        },
        Row {
            id: "301",
            from: "Home",
            to: "Mall",
            provider: Provider::Uber,
            status: Canceled,
            date: "2025-03-18",
            time: "11:30 AM",
            price_cents: 1825,
            distance_km: 6.4,
            duration_mins: 15,
            driver: None,
        },
        Row {
            id: "302",
            from: "Office",
            to: "Conference Center",
            provider: Provider::Ola,
            status: Canceled,
            date: "2025-03-05",
            time: "09:00 AM",
            price_cents: 2650,
            distance_km: 9.2,
            duration_mins: 22,
            driver: None,
        },
    ])
}

/// Rides shown in the "recent rides" strip on the home page.
pub fn recent_rides() -> Result<Vec<Booking>, DomainError> {
    use BookingStatus::*;

    build(vec![
        Row {
            id: "1",
            from: "Home",
            to: "Office",
            provider: Provider::Uber,
            status: Completed,
            date: "2025-03-21",
            time: "09:15 AM",
            price_cents: 2450,
            distance_km: 7.2,
            duration_mins: 18,
            driver: Some(DriverDetails::new("Michael S.", 4.8, "Toyota Camry (ABC 123)")),
        },
        Row {
            id: "2",
            from: "Office",
            to: "Shopping Mall",
            provider: Provider::Ola,
            status: Completed,
            date: "2025-03-19",
            time: "06:30 PM",
            price_cents: 1875,
            distance_km: 5.8,
            duration_mins: 15,
            driver: Some(DriverDetails::new("Sarah J.", 4.9, "Honda Civic (XYZ 789)")),
        },
        Row {
            id: "3",
            from: "Shopping Mall",
            to: "Home",
            provider: Provider::Metro,
            status: Completed,
            date: "2025-03-19",
            time: "08:45 PM",
            price_cents: 450,
            distance_km: 6.2,
            duration_mins: 22,
            driver: None,
        },
    ])
}
