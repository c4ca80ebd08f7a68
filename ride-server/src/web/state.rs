//! Application state for the web layer.

use std::sync::Arc;

use rand::rngs::StdRng;
use tokio::sync::Mutex;

use crate::cache::CachedDirectionsClient;
use crate::catalog::Catalog;
use crate::filter::ResultFilter;
use crate::profile::ProfileStore;
use crate::recommend::RecommendationGenerator;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Static reference data
    pub catalog: Arc<Catalog>,

    /// Filter views over the catalog's ride options
    pub filter: ResultFilter,

    /// Recommendation generator; its RNG needs exclusive access
    pub generator: Arc<Mutex<RecommendationGenerator<StdRng>>>,

    /// Mutable profile and payment methods
    pub profile: ProfileStore,

    /// Cached directions client, absent when no API key is configured
    pub directions: Option<Arc<CachedDirectionsClient>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        catalog: Catalog,
        generator: RecommendationGenerator<StdRng>,
        directions: Option<CachedDirectionsClient>,
    ) -> Self {
        let filter = ResultFilter::new(catalog.ride_options.clone());
        let profile = ProfileStore::new(
            catalog.user_profile.clone(),
            catalog.payment_methods.clone(),
        );

        Self {
            catalog: Arc::new(catalog),
            filter,
            generator: Arc::new(Mutex::new(generator)),
            profile,
            directions: directions.map(Arc::new),
        }
    }
}
