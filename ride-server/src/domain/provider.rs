//! Ride providers and icon keys.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unknown provider name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown provider: {name}")]
pub struct InvalidProvider {
    name: String,
}

/// A ride or transport service.
///
/// Names are matched case-insensitively, so `"Metro"`, `"metro"` and
/// `"METRO"` all parse to [`Provider::Metro`].
///
/// # Examples
///
/// ```
/// use ride_server::domain::Provider;
///
/// let bus: Provider = "BUS".parse().unwrap();
/// assert_eq!(bus, Provider::Bus);
/// assert!(bus.is_public_transit());
/// assert!(!Provider::Uber.is_public_transit());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Uber,
    Ola,
    Rapido,
    Metro,
    Bus,
    Train,
}

impl Provider {
    /// Every known provider, in display order.
    pub const ALL: [Provider; 6] = [
        Provider::Uber,
        Provider::Ola,
        Provider::Rapido,
        Provider::Metro,
        Provider::Bus,
        Provider::Train,
    ];

    /// Display name, e.g. "Uber".
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Uber => "Uber",
            Provider::Ola => "Ola",
            Provider::Rapido => "Rapido",
            Provider::Metro => "Metro",
            Provider::Bus => "Bus",
            Provider::Train => "Train",
        }
    }

    /// Lowercase key used by the frontend for logos, e.g. "uber".
    pub fn key(&self) -> &'static str {
        match self {
            Provider::Uber => "uber",
            Provider::Ola => "ola",
            Provider::Rapido => "rapido",
            Provider::Metro => "metro",
            Provider::Bus => "bus",
            Provider::Train => "train",
        }
    }

    /// Whether this provider is bus or rail.
    pub fn is_public_transit(&self) -> bool {
        matches!(self, Provider::Metro | Provider::Bus | Provider::Train)
    }
}

impl FromStr for Provider {
    type Err = InvalidProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Provider::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| InvalidProvider {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Icon shown next to a ride option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKey {
    CarFront,
    Bike,
    Train,
    Bus,
    Zap,
}

impl IconKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconKey::CarFront => "car-front",
            IconKey::Bike => "bike",
            IconKey::Train => "train",
            IconKey::Bus => "bus",
            IconKey::Zap => "zap",
        }
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("uber".parse::<Provider>().unwrap(), Provider::Uber);
        assert_eq!("Uber".parse::<Provider>().unwrap(), Provider::Uber);
        assert_eq!("RAPIDO".parse::<Provider>().unwrap(), Provider::Rapido);
        assert_eq!(" metro ".parse::<Provider>().unwrap(), Provider::Metro);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "lyft".parse::<Provider>().unwrap_err();
        assert_eq!(err.to_string(), "unknown provider: lyft");
        assert!("".parse::<Provider>().is_err());
    }

    #[test]
    fn public_transit_is_bus_or_rail() {
        let public: Vec<_> = Provider::ALL
            .into_iter()
            .filter(|p| p.is_public_transit())
            .collect();
        assert_eq!(public, vec![Provider::Metro, Provider::Bus, Provider::Train]);
    }

    #[test]
    fn key_and_name_roundtrip() {
        for p in Provider::ALL {
            assert_eq!(p.key().parse::<Provider>().unwrap(), p);
            assert_eq!(p.name().parse::<Provider>().unwrap(), p);
            assert_eq!(p.to_string(), p.name());
        }
    }

    #[test]
    fn icon_keys() {
        assert_eq!(IconKey::CarFront.as_str(), "car-front");
        assert_eq!(IconKey::Zap.to_string(), "zap");
    }
}
