//! Askama templates for the web frontend.

use askama::Template;

use crate::bookings::tab_counts;
use crate::catalog::Catalog;
use crate::directions::RouteSummary;
use crate::domain::{Booking, BookingType, Coordinates};
use crate::filter::{FilterKey, RankedRide};
use crate::profile::{PaymentMethods, UserProfile};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub popular_locations: Vec<LocationView>,
    pub recent_searches: Vec<RecentSearchView>,
    pub recent_rides: Vec<BookingView>,
    pub promotions: Vec<PromotionView>,
}

impl IndexTemplate {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            popular_locations: catalog
                .popular_locations
                .iter()
                .map(|l| LocationView {
                    name: l.name.clone(),
                    address: l.address.clone(),
                })
                .collect(),
            recent_searches: catalog
                .recent_searches
                .iter()
                .map(|s| RecentSearchView {
                    from: s.from.clone(),
                    to: s.to.clone(),
                })
                .collect(),
            recent_rides: catalog
                .recent_rides
                .iter()
                .map(BookingView::from_booking)
                .collect(),
            promotions: catalog
                .promotions
                .iter()
                .map(|p| PromotionView {
                    title: p.title.clone(),
                    description: p.description.clone(),
                    code: p.code.clone(),
                    valid_until: p.valid_until.format("%d %b %Y").to_string(),
                })
                .collect(),
        }
    }
}

/// About page.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;

/// Ride results with filter tabs and map markers.
#[derive(Template)]
#[template(path = "ride_list.html")]
pub struct RideListTemplate {
    pub from: String,
    pub to: String,
    pub schedule: String,
    pub tabs: Vec<FilterTabView>,
    pub rides: Vec<RideView>,
    pub markers: Vec<MarkerView>,
    pub route: Option<RouteView>,
}

/// Bookings page with status tabs.
#[derive(Template)]
#[template(path = "booking_list.html")]
pub struct BookingListTemplate {
    pub tabs: Vec<BookingTabView>,
    pub bookings: Vec<BookingView>,
}

impl BookingListTemplate {
    pub fn new(all: &[Booking], active: BookingType, shown: &[&Booking]) -> Self {
        let (upcoming, past, canceled) = tab_counts(all);
        let tabs = [
            (BookingType::Upcoming, "Upcoming", upcoming),
            (BookingType::Past, "Past", past),
            (BookingType::Canceled, "Canceled", canceled),
        ]
        .into_iter()
        .map(|(tab, label, count)| BookingTabView {
            key: tab.as_str(),
            label,
            count,
            active: tab == active,
        })
        .collect();

        Self {
            tabs,
            bookings: shown.iter().map(|b| BookingView::from_booking(b)).collect(),
        }
    }
}

/// Profile page: account details, preferences and payment methods.
#[derive(Template)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub member_since: String,
    pub total_rides: u32,
    pub saved_locations: Vec<LocationView>,
    pub default_ride_type: String,
    pub prefer_eco_friendly: bool,
    pub notifications_enabled: bool,
    pub auto_tip_percent: u8,
    pub payment_methods: Vec<PaymentMethodView>,
}

impl ProfileTemplate {
    pub fn new(profile: &UserProfile, payments: &PaymentMethods) -> Self {
        let prefs = &profile.preferences;
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            member_since: profile.member_since.format("%B %Y").to_string(),
            total_rides: profile.total_rides,
            saved_locations: profile
                .saved_locations
                .iter()
                .map(|l| LocationView {
                    name: l.name.clone(),
                    address: l.address.clone(),
                })
                .collect(),
            default_ride_type: prefs.default_ride_type.clone(),
            prefer_eco_friendly: prefs.prefer_eco_friendly,
            notifications_enabled: prefs.notifications_enabled,
            auto_tip_percent: prefs.auto_tip_percent,
            payment_methods: payments
                .as_slice()
                .iter()
                .map(|m| PaymentMethodView {
                    id: m.id.clone(),
                    label: m.label(),
                    is_default: m.is_default,
                    is_preferred: m.id == prefs.preferred_payment_method,
                })
                .collect(),
        }
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

#[derive(Debug, Clone)]
pub struct LocationView {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone)]
pub struct RecentSearchView {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone)]
pub struct PromotionView {
    pub title: String,
    pub description: String,
    pub code: String,
    pub valid_until: String,
}

/// A saved payment method on the profile page.
#[derive(Debug, Clone)]
pub struct PaymentMethodView {
    pub id: String,
    pub label: String,
    pub is_default: bool,
    pub is_preferred: bool,
}

/// One filter tab on the results page.
#[derive(Debug, Clone)]
pub struct FilterTabView {
    pub key: &'static str,
    pub label: &'static str,
    pub active: bool,
}

impl FilterTabView {
    /// All tabs, with `active` marked. `None` marks none of them.
    pub fn all(active: Option<FilterKey>) -> Vec<Self> {
        FilterKey::ALL
            .into_iter()
            .map(|key| Self {
                key: key.as_str(),
                label: key.label(),
                active: Some(key) == active,
            })
            .collect()
    }
}

/// A ride option card.
#[derive(Debug, Clone)]
pub struct RideView {
    pub provider: String,
    pub tier: String,
    pub icon: &'static str,
    pub price: String,
    pub mins: u32,
    pub distance: String,
    pub eco_friendly: bool,
    pub badge: Option<&'static str>,
}

impl RideView {
    pub fn from_ranked(ranked: &RankedRide<'_>) -> Self {
        let option = ranked.option;
        Self {
            provider: option.provider.name().to_string(),
            tier: option.tier.clone(),
            icon: option.icon.as_str(),
            price: option.estimated_price.to_string(),
            mins: option.estimated_mins,
            distance: format!("{:.1}", option.distance_km),
            eco_friendly: option.eco_friendly,
            badge: ranked.badge,
        }
    }
}

/// A map marker.
#[derive(Debug, Clone)]
pub struct MarkerView {
    pub label: String,
    pub lat: String,
    pub lng: String,
}

impl MarkerView {
    pub fn new(label: &str, at: Coordinates) -> Self {
        Self {
            label: label.to_string(),
            lat: format!("{:.4}", at.lat),
            lng: format!("{:.4}", at.lng),
        }
    }
}

/// Route distance and duration for the map panel.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub distance: String,
    pub duration_mins: u32,
}

impl RouteView {
    pub fn from_summary(summary: &RouteSummary) -> Self {
        Self {
            distance: format!("{:.1}", summary.distance_km),
            duration_mins: summary.duration_mins,
        }
    }
}

/// One tab on the bookings page.
#[derive(Debug, Clone)]
pub struct BookingTabView {
    pub key: &'static str,
    pub label: &'static str,
    pub count: usize,
    pub active: bool,
}

/// A booking card.
#[derive(Debug, Clone)]
pub struct BookingView {
    pub id: String,
    pub from: String,
    pub to: String,
    pub provider: String,
    pub status: &'static str,
    pub date: String,
    pub time: String,
    pub price: String,
    pub distance: String,
    pub duration_mins: u32,
    /// e.g. "Michael Brown (4.8) · Toyota Camry"
    pub driver: Option<String>,
}

impl BookingView {
    pub fn from_booking(booking: &Booking) -> Self {
        let driver = booking.driver.as_ref().map(|d| match d.rating {
            Some(rating) => format!("{} ({:.1}) · {}", d.name, rating, d.vehicle),
            None => "Driver pending assignment".to_string(),
        });

        Self {
            id: booking.id.clone(),
            from: booking.from.clone(),
            to: booking.to.clone(),
            provider: booking.provider.name().to_string(),
            status: booking.status.as_str(),
            date: booking.date.format("%d %b %Y").to_string(),
            time: booking.display_time(),
            price: booking.price.to_string(),
            distance: format!("{:.1}", booking.distance_km),
            duration_mins: booking.duration_mins,
            driver,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::ResultFilter;

    #[test]
    fn ride_list_renders_badge_and_active_tab() {
        let catalog = Catalog::builtin().unwrap();
        let filter = ResultFilter::new(catalog.ride_options.clone());
        let rides = filter
            .ranked(FilterKey::Fastest)
            .iter()
            .map(RideView::from_ranked)
            .collect();

        let template = RideListTemplate {
            from: "Home".to_string(),
            to: "Office".to_string(),
            schedule: "Now".to_string(),
            tabs: FilterTabView::all(Some(FilterKey::Fastest)),
            rides,
            markers: vec![MarkerView::new("Home", Coordinates::mock_for("Home"))],
            route: None,
        };
        let html = template.render().unwrap();

        assert!(html.contains("Fastest Option"));
        assert!(html.contains("Rapido"));
        assert!(html.contains("Route information unavailable"));
    }

    #[test]
    fn booking_list_shows_counts() {
        let catalog = Catalog::builtin().unwrap();
        let shown = crate::bookings::bookings_by_type(&catalog.bookings, BookingType::Canceled);
        let template = BookingListTemplate::new(&catalog.bookings, BookingType::Canceled, &shown);

        assert_eq!(template.bookings.len(), 2);
        assert!(template.tabs[2].active);
        assert_eq!(template.tabs[1].count, 5);

        let html = template.render().unwrap();
        assert!(html.contains("Canceled (2)"));
    }

    #[test]
    fn index_lists_promotions() {
        let catalog = Catalog::builtin().unwrap();
        let html = IndexTemplate::from_catalog(&catalog).render().unwrap();
        assert!(html.contains("FIRST50"));
        assert!(html.contains("Central Park"));
        assert!(html.contains("Shopping Mall"));
        assert!(html.contains("Michael S."));
    }

    #[test]
    fn profile_page_marks_default_and_preferred() {
        let catalog = Catalog::builtin().unwrap();
        let template = ProfileTemplate::new(&catalog.user_profile, &catalog.payment_methods);

        assert_eq!(template.member_since, "November 2023");
        assert_eq!(template.payment_methods.len(), 3);
        assert!(template.payment_methods[0].is_default);
        assert!(template.payment_methods[0].is_preferred);
        assert!(!template.payment_methods[2].is_default);

        let html = template.render().unwrap();
        assert!(html.contains("Alex Johnson"));
        assert!(html.contains("googlepay (alex@okbank)"));
        assert!(html.contains("15%"));
    }

    #[test]
    fn driver_line() {
        let catalog = Catalog::builtin().unwrap();
        for booking in &catalog.bookings {
            let view = BookingView::from_booking(booking);
            match &booking.driver {
                Some(driver) if driver.is_assigned() => {
                    let line = view.driver.unwrap();
                    assert!(line.starts_with(&driver.name));
                    assert!(line.ends_with(&driver.vehicle));
                }
                Some(_) => {
                    assert_eq!(view.driver.as_deref(), Some("Driver pending assignment"))
                }
                None => assert!(view.driver.is_none()),
            }
        }
    }
}
