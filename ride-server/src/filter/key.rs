//! Filter keys for the results page.

use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// Which derived view of the ride catalog to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterKey {
    /// Ascending estimated time.
    #[default]
    Fastest,
    /// Ascending estimated price.
    Cheapest,
    /// Eco-friendly options only, catalog order.
    Eco,
    /// Bus and rail only, ascending estimated time.
    Public,
}

impl FilterKey {
    pub const ALL: [FilterKey; 4] = [
        FilterKey::Fastest,
        FilterKey::Cheapest,
        FilterKey::Eco,
        FilterKey::Public,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Fastest => "fastest",
            FilterKey::Cheapest => "cheapest",
            FilterKey::Eco => "eco",
            FilterKey::Public => "public",
        }
    }

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            FilterKey::Fastest => "Fastest",
            FilterKey::Cheapest => "Cheapest",
            FilterKey::Eco => "Eco-friendly",
            FilterKey::Public => "Public",
        }
    }

    /// Badge for the first result under this filter, if any.
    pub fn top_badge(&self) -> Option<&'static str> {
        match self {
            FilterKey::Fastest => Some("Fastest Option"),
            FilterKey::Cheapest => Some("Best Value"),
            FilterKey::Eco | FilterKey::Public => None,
        }
    }
}

impl FromStr for FilterKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        FilterKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::InvalidFilter(s.to_string()))
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
