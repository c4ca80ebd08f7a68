//! Booking lists for the bookings page.
//!
//! Bookings are reference data: the views here select and never mutate.

use crate::domain::{Booking, BookingType};

/// Bookings that belong under `tab`, in their original order.
pub fn bookings_by_type(bookings: &[Booking], tab: BookingType) -> Vec<&Booking> {
    bookings.iter().filter(|b| tab.includes(b.status)).collect()
}

/// Number of bookings under each tab, as (upcoming, past, canceled).
pub fn tab_counts(bookings: &[Booking]) -> (usize, usize, usize) {
    bookings.iter().fold((0, 0, 0), |(up, past, canceled), b| {
        (
            up + usize::from(BookingType::Upcoming.includes(b.status)),
            past + usize::from(BookingType::Past.includes(b.status)),
            canceled + usize::from(BookingType::Canceled.includes(b.status)),
        )
    })
}
