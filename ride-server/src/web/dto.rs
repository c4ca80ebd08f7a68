//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::catalog::{Promotion, RecentSearch};
use crate::directions::RouteSummary;
use crate::domain::{Booking, Coordinates, Location, RideRecommendation};
use crate::filter::RankedRide;
use crate::profile::{PaymentKind, PaymentMethod, PaymentMethods, Preferences, UserProfile};

/// Date format used on the wire.
const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// Requests
// ============================================================================

/// Request to search popular locations.
#[derive(Debug, Deserialize)]
pub struct LocationSearchRequest {
    /// Search query (name or address substring)
    #[serde(default)]
    pub q: String,

    /// Maximum results (default 10, capped at 50)
    pub limit: Option<usize>,
}

/// An origin/destination pair.
#[derive(Debug, Deserialize)]
pub struct TripRequest {
    #[serde(default)]
    pub from: String,

    #[serde(default)]
    pub to: String,
}

/// Request for the results page.
#[derive(Debug, Deserialize)]
pub struct ResultsRequest {
    #[serde(default)]
    pub from: String,

    #[serde(default)]
    pub to: String,

    /// Filter key; unknown keys show the unfiltered catalog
    pub filter: Option<String>,

    /// Scheduled date (YYYY-MM-DD); absent means today
    pub date: Option<String>,

    /// Scheduled time (HH:MM); absent means leave now
    pub time: Option<String>,
}

/// Request for the bookings page.
#[derive(Debug, Deserialize)]
pub struct BookingsRequest {
    /// upcoming, past or canceled (default upcoming)
    #[serde(rename = "type")]
    pub booking_type: Option<String>,
}

// ============================================================================
// Locations
// ============================================================================

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CoordinatesResult {
    pub lat: f64,
    pub lng: f64,
}

impl From<Coordinates> for CoordinatesResult {
    fn from(c: Coordinates) -> Self {
        Self {
            lat: c.lat,
            lng: c.lng,
        }
    }
}

/// A location in search results.
#[derive(Debug, Serialize)]
pub struct LocationResult {
    pub id: String,
    pub name: String,
    pub address: String,
    pub coordinates: CoordinatesResult,
}

impl LocationResult {
    pub fn from_location(location: &Location) -> Self {
        Self {
            id: location.id.clone(),
            name: location.name.clone(),
            address: location.address.clone(),
            coordinates: location.coordinates.into(),
        }
    }
}

/// Response for location search.
#[derive(Debug, Serialize)]
pub struct LocationSearchResponse {
    pub locations: Vec<LocationResult>,
}

// ============================================================================
// Rides
// ============================================================================

/// A generated recommendation.
#[derive(Debug, Serialize)]
pub struct RecommendationResult {
    pub provider: String,
    pub tier: String,
    pub estimated_price: f64,
    pub estimated_mins: u32,
    pub distance_km: f64,
    pub available: bool,
}

impl RecommendationResult {
    pub fn from_recommendation(rec: &RideRecommendation) -> Self {
        Self {
            provider: rec.provider.name().to_string(),
            tier: rec.tier.clone(),
            estimated_price: rec.estimated_price.as_f64(),
            estimated_mins: rec.estimated_mins,
            distance_km: rec.distance_km,
            available: rec.available,
        }
    }
}

/// Response for recommendations.
#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub from: String,
    pub to: String,
    pub recommendations: Vec<RecommendationResult>,
}

/// A catalog ride option on the results page.
#[derive(Debug, Serialize)]
pub struct RideResult {
    pub id: String,
    pub provider: String,

    /// Lowercase provider key for logos
    pub provider_key: String,

    pub tier: String,
    pub estimated_mins: u32,
    pub estimated_price: f64,
    pub distance_km: f64,
    pub eco_friendly: bool,
    pub icon: String,

    /// "Fastest Option" or "Best Value" on the first result of those views
    pub badge: Option<String>,
}

impl RideResult {
    pub fn from_ranked(ranked: &RankedRide<'_>) -> Self {
        let option = ranked.option;
        Self {
            id: option.id.clone(),
            provider: option.provider.name().to_string(),
            provider_key: option.provider.key().to_string(),
            tier: option.tier.clone(),
            estimated_mins: option.estimated_mins,
            estimated_price: option.estimated_price.as_f64(),
            distance_km: option.distance_km,
            eco_friendly: option.eco_friendly,
            icon: option.icon.as_str().to_string(),
            badge: ranked.badge.map(str::to_string),
        }
    }
}

/// Response for the results page.
#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub from: String,
    pub to: String,

    /// Applied filter key, `None` when the requested key was not recognised
    pub filter: Option<String>,

    /// "Now" or the formatted scheduled time
    pub schedule: String,

    /// Map marker for the origin
    pub from_coordinates: CoordinatesResult,

    /// Map marker for the destination
    pub to_coordinates: CoordinatesResult,

    pub rides: Vec<RideResult>,
}

/// Response for route information.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Whether route information could be fetched
    pub available: bool,

    pub distance_km: Option<f64>,
    pub duration_mins: Option<u32>,

    /// GeoJSON geometry for the map
    pub geometry: Option<serde_json::Value>,
}

impl RouteResponse {
    pub fn unavailable() -> Self {
        Self {
            available: false,
            distance_km: None,
            duration_mins: None,
            geometry: None,
        }
    }

    pub fn from_summary(summary: &RouteSummary) -> Self {
        Self {
            available: true,
            distance_km: Some(summary.distance_km),
            duration_mins: Some(summary.duration_mins),
            geometry: summary.geometry.clone(),
        }
    }
}

// ============================================================================
// Bookings
// ============================================================================

/// Driver details on a booking.
#[derive(Debug, Serialize)]
pub struct DriverResult {
    pub name: String,
    pub rating: Option<f32>,
    pub vehicle: String,
}

/// A booking.
#[derive(Debug, Serialize)]
pub struct BookingResult {
    pub id: String,
    pub from: String,
    pub to: String,
    pub provider: String,
    pub status: String,

    /// YYYY-MM-DD
    pub date: String,

    /// e.g. "09:30 AM"
    pub time: String,

    pub price: f64,
    pub distance_km: f64,
    pub duration_mins: u32,
    pub driver: Option<DriverResult>,
}

impl BookingResult {
    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            id: booking.id.clone(),
            from: booking.from.clone(),
            to: booking.to.clone(),
            provider: booking.provider.name().to_string(),
            status: booking.status.as_str().to_string(),
            date: booking.date.format(DATE_FORMAT).to_string(),
            time: booking.display_time(),
            price: booking.price.as_f64(),
            distance_km: booking.distance_km,
            duration_mins: booking.duration_mins,
            driver: booking.driver.as_ref().map(|d| DriverResult {
                name: d.name.clone(),
                rating: d.rating,
                vehicle: d.vehicle.clone(),
            }),
        }
    }
}

/// Number of bookings under each tab.
#[derive(Debug, Serialize)]
pub struct TabCounts {
    pub upcoming: usize,
    pub past: usize,
    pub canceled: usize,
}

/// Response for the bookings list.
#[derive(Debug, Serialize)]
pub struct BookingsResponse {
    #[serde(rename = "type")]
    pub booking_type: String,
    pub counts: TabCounts,
    pub bookings: Vec<BookingResult>,
}

/// Response listing recently taken rides.
#[derive(Debug, Serialize)]
pub struct RecentRidesResponse {
    pub rides: Vec<BookingResult>,
}

// ============================================================================
// Home page data
// ============================================================================

#[derive(Debug, Serialize)]
pub struct PromotionResult {
    pub id: String,
    pub title: String,
    pub description: String,
    pub code: String,
    pub valid_until: String,
}

impl PromotionResult {
    pub fn from_promotion(promo: &Promotion) -> Self {
        Self {
            id: promo.id.clone(),
            title: promo.title.clone(),
            description: promo.description.clone(),
            code: promo.code.clone(),
            valid_until: promo.valid_until.format(DATE_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PromotionsResponse {
    pub promotions: Vec<PromotionResult>,
}

#[derive(Debug, Serialize)]
pub struct RecentSearchResult {
    pub from: String,
    pub to: String,
}

impl From<&RecentSearch> for RecentSearchResult {
    fn from(s: &RecentSearch) -> Self {
        Self {
            from: s.from.clone(),
            to: s.to.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecentSearchesResponse {
    pub searches: Vec<RecentSearchResult>,
}

// ============================================================================
// Profile
// ============================================================================

/// Ride preferences, both as returned and as accepted on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesDto {
    pub default_ride_type: String,
    pub prefer_eco_friendly: bool,
    pub notifications_enabled: bool,
    pub auto_tip_percent: u8,
    pub preferred_payment_method: String,
}

impl From<&Preferences> for PreferencesDto {
    fn from(p: &Preferences) -> Self {
        Self {
            default_ride_type: p.default_ride_type.clone(),
            prefer_eco_friendly: p.prefer_eco_friendly,
            notifications_enabled: p.notifications_enabled,
            auto_tip_percent: p.auto_tip_percent,
            preferred_payment_method: p.preferred_payment_method.clone(),
        }
    }
}

impl From<PreferencesDto> for Preferences {
    fn from(dto: PreferencesDto) -> Self {
        Self {
            default_ride_type: dto.default_ride_type,
            prefer_eco_friendly: dto.prefer_eco_friendly,
            notifications_enabled: dto.notifications_enabled,
            auto_tip_percent: dto.auto_tip_percent,
            preferred_payment_method: dto.preferred_payment_method,
        }
    }
}

/// The user's profile.
#[derive(Debug, Serialize)]
pub struct ProfileResult {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub member_since: String,
    pub total_rides: u32,
    pub saved_locations: Vec<LocationResult>,
    pub preferences: PreferencesDto,
}

impl ProfileResult {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            member_since: profile.member_since.format(DATE_FORMAT).to_string(),
            total_rides: profile.total_rides,
            saved_locations: profile
                .saved_locations
                .iter()
                .map(LocationResult::from_location)
                .collect(),
            preferences: (&profile.preferences).into(),
        }
    }
}

/// Card or UPI specifics.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PaymentDetails {
    Card {
        network: String,
        last4: String,
        expiry_month: u8,
        expiry_year: u16,
    },
    Upi {
        provider: String,
        upi_id: String,
    },
}

/// A saved payment method.
#[derive(Debug, Serialize)]
pub struct PaymentMethodResult {
    pub id: String,
    pub label: String,
    pub is_default: bool,

    #[serde(flatten)]
    pub details: PaymentDetails,
}

impl PaymentMethodResult {
    pub fn from_method(method: &PaymentMethod) -> Self {
        let details = match &method.kind {
            PaymentKind::Card {
                network,
                last4,
                expiry_month,
                expiry_year,
            } => PaymentDetails::Card {
                network: network.clone(),
                last4: last4.clone(),
                expiry_month: *expiry_month,
                expiry_year: *expiry_year,
            },
            PaymentKind::Upi { provider, upi_id } => PaymentDetails::Upi {
                provider: provider.clone(),
                upi_id: upi_id.clone(),
            },
        };

        Self {
            id: method.id.clone(),
            label: method.label(),
            is_default: method.is_default,
            details,
        }
    }
}

/// Response listing payment methods.
#[derive(Debug, Serialize)]
pub struct PaymentMethodsResponse {
    pub payment_methods: Vec<PaymentMethodResult>,

    /// Id of the default method, if any
    pub default: Option<String>,
}

impl PaymentMethodsResponse {
    pub fn from_methods(methods: &PaymentMethods) -> Self {
        Self {
            payment_methods: methods
                .as_slice()
                .iter()
                .map(PaymentMethodResult::from_method)
                .collect(),
            default: methods.default_method().map(|m| m.id.clone()),
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
