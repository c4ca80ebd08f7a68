//! Places and map coordinates.

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Centre of the default map view.
pub const MAP_CENTRE: Coordinates = Coordinates {
    lat: 40.7128,
    lng: -74.006,
};

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Stand-in coordinates for a free-text place name.
    ///
    /// No geocoding happens: the marker is offset from [`MAP_CENTRE`] by
    /// `(sum of UTF-16 code units mod 10) * 0.01` degrees on both axes, so
    /// the same text always lands on the same spot. Characters outside the
    /// BMP count as their two surrogate halves.
    pub fn mock_for(place: &str) -> Self {
        let hash: u64 = place.encode_utf16().map(u64::from).sum();
        let offset = (hash % 10) as f64 * 0.01;
        Self {
            lat: MAP_CENTRE.lat + offset,
            lng: MAP_CENTRE.lng + offset,
        }
    }
}

/// A named place offered as an autocomplete suggestion.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
}

impl Location {
    pub fn new(id: &str, name: &str, address: &str, lat: f64, lng: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            address: address.to_string(),
            coordinates: Coordinates::new(lat, lng),
        }
    }

    /// Case-insensitive substring match on name or address.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.name.to_lowercase().contains(&query)
            || self.address.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn mock_coordinates_are_deterministic() {
        assert_eq!(Coordinates::mock_for("Home"), Coordinates::mock_for("Home"));
    }

    #[test]
    fn mock_coordinates_offset_by_char_sum() {
        // 'A' = 65, 'B' = 66 → 131 % 10 = 1
        let c = Coordinates::mock_for("AB");
        assert!(approx(c.lat, 40.7128 + 0.01));
        assert!(approx(c.lng, -74.006 + 0.01));

        // Empty string sits on the centre
        let c = Coordinates::mock_for("");
        assert!(approx(c.lat, MAP_CENTRE.lat));
        assert!(approx(c.lng, MAP_CENTRE.lng));
    }

    #[test]
    fn mock_coordinates_sum_surrogate_pairs() {
        // "Taxi " = 438; U+1F695 encodes as 0xD83D + 0xDE95 = 112338.
        // 112776 % 10 = 6
        let c = Coordinates::mock_for("Taxi 🚕");
        assert!(approx(c.lat, 40.7128 + 0.06));
        assert!(approx(c.lng, -74.006 + 0.06));
    }

    #[test]
    fn mock_coordinates_stay_near_centre() {
        for place in ["Office", "Airport Terminal", "Friend's House", "Café"] {
            let c = Coordinates::mock_for(place);
            assert!(c.lat >= MAP_CENTRE.lat && c.lat < MAP_CENTRE.lat + 0.1);
            assert!(c.lng >= MAP_CENTRE.lng && c.lng < MAP_CENTRE.lng + 0.1);
        }
    }

    #[test]
    fn location_matching() {
        let loc = Location::new("1", "Central Park", "5th Ave, Midtown", 40.78, -73.96);
        assert!(loc.matches(""));
        assert!(loc.matches("park"));
        assert!(loc.matches("MIDTOWN"));
        assert!(!loc.matches("airport"));
    }
}
