//! Fare amounts.

use std::fmt;

/// A fare in whole cents.
///
/// Stored as an integer so that sorting and equality never depend on
/// floating-point representation. Displays with two decimals.
///
/// # Examples
///
/// ```
/// use ride_server::domain::Price;
///
/// let p = Price::from_cents(2550);
/// assert_eq!(p.to_string(), "25.50");
/// assert_eq!(p.as_f64(), 25.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(u32);

impl Price {
    pub const fn from_cents(cents: u32) -> Self {
        Price(cents)
    }

    pub const fn cents(&self) -> u32 {
        self.0
    }

    /// The amount in currency units, for JSON output.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_pads_cents() {
        assert_eq!(Price::from_cents(375).to_string(), "3.75");
        assert_eq!(Price::from_cents(1500).to_string(), "15.00");
        assert_eq!(Price::from_cents(5).to_string(), "0.05");
        assert_eq!(Price::from_cents(0).to_string(), "0.00");
    }

    #[test]
    fn ordering_follows_cents() {
        assert!(Price::from_cents(375) < Price::from_cents(550));
        assert_eq!(Price::from_cents(2230).max(Price::from_cents(2550)).cents(), 2550);
    }
}
