//! HTTP route handlers.

use std::sync::Arc;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{delete, get, post, put},
};
use chrono::{Local, NaiveDate, NaiveDateTime};
use tower_http::services::ServeDir;
use tracing::{debug, error, info, warn};

use crate::bookings::{bookings_by_type, tab_counts};
use crate::directions::RouteSummary;
use crate::domain::{BookingType, Coordinates, DomainError, Schedule};
use crate::filter::FilterKey;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Default number of location suggestions.
const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Upper bound on location suggestions per request.
const MAX_SUGGESTION_LIMIT: usize = 50;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/about", get(about_page))
        .route("/api/locations/search", get(search_locations))
        .route("/api/recommendations", get(recommendations))
        .route("/results", get(results))
        .route("/api/route", get(route_info))
        .route("/bookings", get(bookings))
        .route("/api/bookings/:id", get(booking_detail))
        .route("/api/promotions", get(promotions))
        .route("/api/recent-searches", get(recent_searches))
        .route("/api/recent-rides", get(recent_rides))
        .route("/profile", get(profile_page))
        .route("/api/profile", get(profile))
        .route("/api/profile/preferences", put(update_preferences))
        .route("/api/payment-methods", get(payment_methods))
        .route("/api/payment-methods/:id", delete(remove_payment_method))
        .route("/api/payment-methods/:id/default", post(set_default_payment_method))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with search form.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    Html(
        IndexTemplate::from_catalog(&state.catalog)
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// About page.
async fn about_page() -> impl IntoResponse {
    Html(
        AboutTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Search popular locations by name or address.
async fn search_locations(
    State(state): State<AppState>,
    Query(req): Query<LocationSearchRequest>,
) -> Json<LocationSearchResponse> {
    let limit = req
        .limit
        .unwrap_or(DEFAULT_SUGGESTION_LIMIT)
        .min(MAX_SUGGESTION_LIMIT);

    let locations = state
        .catalog
        .suggest_locations(&req.q, limit)
        .into_iter()
        .map(LocationResult::from_location)
        .collect();

    Json(LocationSearchResponse { locations })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Generate ride recommendations for a trip.
async fn recommendations(
    State(state): State<AppState>,
    Query(req): Query<TripRequest>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let from = req.from.trim();
    let to = req.to.trim();
    if from.is_empty() || to.is_empty() {
        return Err(AppError::BadRequest {
            message: "Both from and to are required".to_string(),
        });
    }

    let recs = state.generator.lock().await.generate(from, to);

    Ok(Json(RecommendationsResponse {
        from: from.to_string(),
        to: to.to_string(),
        recommendations: recs
            .iter()
            .map(RecommendationResult::from_recommendation)
            .collect(),
    }))
}

/// Resolve the optional date and time fields of a search into a schedule.
///
/// A time without a date means today; a date without a time is rejected.
fn parse_schedule(
    date: Option<&str>,
    time: Option<&str>,
    now: NaiveDateTime,
) -> Result<Schedule, DomainError> {
    let date = date.map(str::trim).filter(|s| !s.is_empty());
    let time = time.map(str::trim).filter(|s| !s.is_empty());

    match (date, time) {
        (None, None) => Ok(Schedule::Now),
        (Some(date), None) => Err(DomainError::MissingTime(date.to_string())),
        (date, Some(time)) => {
            let date = match date {
                Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d")
                    .map_err(|_| DomainError::InvalidDate(d.to_string()))?,
                None => now.date(),
            };
            Schedule::at(date, time, now)
        }
    }
}

/// Route information between two places, if available.
///
/// Failures are logged and reported as unavailable.
async fn fetch_route(state: &AppState, from: &str, to: &str) -> Option<Arc<RouteSummary>> {
    let client = state.directions.as_ref()?;
    if from.trim().is_empty() || to.trim().is_empty() {
        return None;
    }

    match client.route_between(from, to).await {
        Ok(summary) => {
            debug!(cached_routes = client.cache_entry_count(), "route lookup succeeded");
            Some(summary)
        }
        Err(e) => {
            warn!(from, to, error = %e, "route lookup failed");
            None
        }
    }
}

/// Ride results for a trip, under a filter.
async fn results(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<ResultsRequest>,
) -> Result<Response, AppError> {
    let schedule = parse_schedule(
        req.date.as_deref(),
        req.time.as_deref(),
        Local::now().naive_local(),
    )?;

    let raw_filter = req
        .filter
        .as_deref()
        .unwrap_or(FilterKey::default().as_str());
    let outcome = state.filter.apply_raw(raw_filter);

    let from_coords = Coordinates::mock_for(&req.from);
    let to_coords = Coordinates::mock_for(&req.to);

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let route = fetch_route(&state, &req.from, &req.to)
            .await
            .map(|summary| RouteView::from_summary(&summary));

        let template = RideListTemplate {
            from: req.from.clone(),
            to: req.to.clone(),
            schedule: schedule.to_string(),
            tabs: FilterTabView::all(outcome.key),
            rides: outcome.rides.iter().map(RideView::from_ranked).collect(),
            markers: vec![
                MarkerView::new(&req.from, from_coords),
                MarkerView::new(&req.to, to_coords),
            ],
            route,
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(ResultsResponse {
            from: req.from.clone(),
            to: req.to.clone(),
            filter: outcome.key.map(|k| k.as_str().to_string()),
            schedule: schedule.to_string(),
            from_coordinates: from_coords.into(),
            to_coordinates: to_coords.into(),
            rides: outcome.rides.iter().map(RideResult::from_ranked).collect(),
        })
        .into_response())
    }
}

/// Route distance and duration for the map panel.
async fn route_info(
    State(state): State<AppState>,
    Query(req): Query<TripRequest>,
) -> Json<RouteResponse> {
    match fetch_route(&state, &req.from, &req.to).await {
        Some(summary) => Json(RouteResponse::from_summary(&summary)),
        None => Json(RouteResponse::unavailable()),
    }
}

/// Bookings under one tab.
async fn bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<BookingsRequest>,
) -> Result<Response, AppError> {
    let tab = match req.booking_type.as_deref().map(str::trim) {
        None | Some("") => BookingType::default(),
        Some(raw) => raw.parse::<BookingType>()?,
    };

    let all = &state.catalog.bookings;
    let shown = bookings_by_type(all, tab);

    if accepts_html(&headers) {
        let template = BookingListTemplate::new(all, tab, &shown);
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        let (upcoming, past, canceled) = tab_counts(all);
        Ok(Json(BookingsResponse {
            booking_type: tab.as_str().to_string(),
            counts: TabCounts {
                upcoming,
                past,
                canceled,
            },
            bookings: shown.into_iter().map(BookingResult::from_booking).collect(),
        })
        .into_response())
    }
}

/// A single booking.
async fn booking_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BookingResult>, AppError> {
    let booking = state
        .catalog
        .booking(&id)
        .ok_or_else(|| AppError::NotFound {
            message: format!("Booking {} not found", id),
        })?;

    Ok(Json(BookingResult::from_booking(booking)))
}

async fn promotions(State(state): State<AppState>) -> Json<PromotionsResponse> {
    Json(PromotionsResponse {
        promotions: state
            .catalog
            .promotions
            .iter()
            .map(PromotionResult::from_promotion)
            .collect(),
    })
}

async fn recent_searches(State(state): State<AppState>) -> Json<RecentSearchesResponse> {
    Json(RecentSearchesResponse {
        searches: state.catalog.recent_searches.iter().map(Into::into).collect(),
    })
}

async fn recent_rides(State(state): State<AppState>) -> Json<RecentRidesResponse> {
    Json(RecentRidesResponse {
        rides: state
            .catalog
            .recent_rides
            .iter()
            .map(BookingResult::from_booking)
            .collect(),
    })
}

/// Profile page with preferences and payment methods.
async fn profile_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let profile = state.profile.profile().await;
    let payments = state.profile.payment_methods().await;

    let html = ProfileTemplate::new(&profile, &payments)
        .render()
        .map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

    Ok(Html(html))
}

/// The user's profile.
async fn profile(State(state): State<AppState>) -> Json<ProfileResult> {
    Json(ProfileResult::from_profile(&state.profile.profile().await))
}

/// Replace the user's ride preferences.
async fn update_preferences(
    State(state): State<AppState>,
    Json(req): Json<PreferencesDto>,
) -> Result<Json<PreferencesDto>, AppError> {
    // An unknown preferred payment method is a bad request here, not a 404.
    let prefs = state
        .profile
        .update_preferences(req.into())
        .await
        .map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?;

    Ok(Json((&prefs).into()))
}

async fn payment_methods(State(state): State<AppState>) -> Json<PaymentMethodsResponse> {
    Json(PaymentMethodsResponse::from_methods(
        &state.profile.payment_methods().await,
    ))
}

/// Make a payment method the default.
async fn set_default_payment_method(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PaymentMethodsResponse>, AppError> {
    let methods = state.profile.set_default_payment(&id).await?;
    Ok(Json(PaymentMethodsResponse::from_methods(&methods)))
}

/// Remove a payment method and return what is left.
async fn remove_payment_method(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PaymentMethodsResponse>, AppError> {
    let removed = state.profile.remove_payment(&id).await?;
    info!(label = %removed.label(), "removed payment method");

    Ok(Json(PaymentMethodsResponse::from_methods(
        &state.profile.payment_methods().await,
    )))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::UnknownPaymentMethod(_) => AppError::NotFound {
                message: e.to_string(),
            },
            DomainError::InvalidCatalog(_) => AppError::Internal {
                message: e.to_string(),
            },
            _ => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
