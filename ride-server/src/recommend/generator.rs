//! Ride recommendations for an origin/destination pair.
//!
//! No geocoding or pricing call happens. Prices and times for the
//! car and bike tiers are fixed; the only varying inputs are one trip
//! distance shared by every record and one transit duration.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::domain::{Price, Provider, RideRecommendation};

use super::config::RecommendConfig;

/// Fixed (provider, tier, price in cents, minutes) for non-transit tiers.
const FIXED_TIERS: [(Provider, &str, u32, u32); 5] = [
    (Provider::Uber, "UberX", 2550, 15),
    (Provider::Uber, "UberXL", 3575, 20),
    (Provider::Ola, "Mini", 2230, 18),
    (Provider::Ola, "Sedan", 2850, 16),
    (Provider::Rapido, "Bike", 1500, 12),
];

const METRO_PRICE_CENTS: u32 = 550;
const BUS_PRICE_CENTS: u32 = 375;

/// The random part of one set of recommendations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripSample {
    /// Trip distance in km, one decimal place.
    pub distance_km: f64,

    /// Duration of the faster transit option in minutes.
    pub transit_mins: u32,
}

impl TripSample {
    /// Draw a sample within the configured ranges.
    ///
    /// The distance is truncated to one decimal so it never reaches the
    /// exclusive upper bound. An empty range collapses to its lower bound.
    pub fn draw<R: Rng>(rng: &mut R, config: &RecommendConfig) -> Self {
        let distance = if config.max_distance_km > config.min_distance_km {
            rng.gen_range(config.min_distance_km..config.max_distance_km)
        } else {
            config.min_distance_km
        };
        let transit_mins = if config.max_transit_mins > config.min_transit_mins {
            rng.gen_range(config.min_transit_mins..config.max_transit_mins)
        } else {
            config.min_transit_mins
        };

        Self {
            distance_km: (distance * 10.0).floor() / 10.0,
            transit_mins,
        }
    }
}

/// Build the seven recommendations for a given sample.
///
/// Order: UberX, UberXL, Ola Mini, Ola Sedan, Rapido Bike, Metro, Bus.
pub fn recommendations_for(sample: TripSample, config: &RecommendConfig) -> Vec<RideRecommendation> {
    let record = |provider: Provider, tier: &str, price_cents: u32, mins: u32| RideRecommendation {
        provider,
        tier: tier.to_string(),
        estimated_price: Price::from_cents(price_cents),
        estimated_mins: mins,
        distance_km: sample.distance_km,
        available: true,
    };

    let mut recs: Vec<RideRecommendation> = FIXED_TIERS
        .iter()
        .map(|&(provider, tier, price, mins)| record(provider, tier, price, mins))
        .collect();

    recs.push(record(
        Provider::Metro,
        "Public",
        METRO_PRICE_CENTS,
        sample.transit_mins,
    ));
    recs.push(record(
        Provider::Bus,
        "Public",
        BUS_PRICE_CENTS,
        sample.transit_mins + config.slow_transit_offset_mins,
    ));

    recs
}

/// Produces recommendations using an injected random source.
///
/// Seed it for reproducible output.
#[derive(Debug)]
pub struct RecommendationGenerator<R> {
    rng: R,
    config: RecommendConfig,
}

impl<R: Rng> RecommendationGenerator<R> {
    pub fn new(rng: R, config: RecommendConfig) -> Self {
        Self { rng, config }
    }

    /// Recommendations for a trip from `from` to `to`.
    ///
    /// The inputs are not validated or geocoded; any pair, including empty
    /// strings, yields the full list.
    pub fn generate(&mut self, from: &str, to: &str) -> Vec<RideRecommendation> {
        let sample = TripSample::draw(&mut self.rng, &self.config);
        debug!(
            from,
            to,
            distance_km = sample.distance_km,
            transit_mins = sample.transit_mins,
            "generated trip sample"
        );
        recommendations_for(sample, &self.config)
    }
}

impl RecommendationGenerator<StdRng> {
    /// Generator with a fixed seed.
    pub fn seeded(seed: u64, config: RecommendConfig) -> Self {
        Self::new(StdRng::seed_from_u64(seed), config)
    }

    /// Generator seeded from the operating system.
    pub fn from_entropy(config: RecommendConfig) -> Self {
        Self::new(StdRng::from_entropy(), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(distance_km: f64, transit_mins: u32) -> TripSample {
        TripSample {
            distance_km,
            transit_mins,
        }
    }

    #[test]
    fn seven_records_in_fixed_order() {
        let recs = recommendations_for(sample(7.3, 20), &RecommendConfig::default());
        let tiers: Vec<_> = recs
            .iter()
            .map(|r| (r.provider, r.tier.as_str()))
            .collect();

        assert_eq!(
            tiers,
            vec![
                (Provider::Uber, "UberX"),
                (Provider::Uber, "UberXL"),
                (Provider::Ola, "Mini"),
                (Provider::Ola, "Sedan"),
                (Provider::Rapido, "Bike"),
                (Provider::Metro, "Public"),
                (Provider::Bus, "Public"),
            ]
        );
    }

    #[test]
    fn fixed_prices_and_times() {
        let recs = recommendations_for(sample(7.3, 20), &RecommendConfig::default());

        assert_eq!(recs[0].estimated_price.to_string(), "25.50");
        assert_eq!(recs[0].estimated_mins, 15);
        assert_eq!(recs[1].estimated_price.to_string(), "35.75");
        assert_eq!(recs[1].estimated_mins, 20);
        assert_eq!(recs[4].estimated_price.to_string(), "15.00");
        assert_eq!(recs[4].estimated_mins, 12);
        assert_eq!(recs[5].estimated_price.to_string(), "5.50");
        assert_eq!(recs[6].estimated_price.to_string(), "3.75");
    }

    #[test]
    fn transit_times_follow_sample() {
        let recs = recommendations_for(sample(7.3, 20), &RecommendConfig::default());
        assert_eq!(recs[5].estimated_mins, 20);
        assert_eq!(recs[6].estimated_mins, 30);
    }

    #[test]
    fn distance_is_shared() {
        let recs = recommendations_for(sample(12.4, 30), &RecommendConfig::default());
        assert!(recs.iter().all(|r| r.distance_km == 12.4));
        assert!(recs.iter().all(|r| r.available));
    }

    #[test]
    fn same_seed_same_output() {
        let mut a = RecommendationGenerator::seeded(42, RecommendConfig::default());
        let mut b = RecommendationGenerator::seeded(42, RecommendConfig::default());

        for _ in 0..5 {
            assert_eq!(a.generate("Home", "Office"), b.generate("Home", "Office"));
        }
    }

    #[test]
    fn inputs_are_not_validated() {
        let mut generator = RecommendationGenerator::seeded(7, RecommendConfig::default());
        assert_eq!(generator.generate("", "").len(), 7);
        assert_eq!(generator.generate("   ", "\u{1F695}").len(), 7);
    }

    #[test]
    fn degenerate_ranges_use_lower_bound() {
        let config = RecommendConfig::new(8.0, 8.0, 20, 20, 10);
        let mut rng = StdRng::seed_from_u64(1);
        let s = TripSample::draw(&mut rng, &config);
        assert_eq!(s, sample(8.0, 20));
    }

    #[test]
    fn distance_truncates_to_one_decimal() {
        let config = RecommendConfig::default();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            let s = TripSample::draw(&mut rng, &config);
            let tenths = s.distance_km * 10.0;
            assert!((tenths - tenths.round()).abs() < 1e-6);
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn generated_records_hold_invariants(
                seed in any::<u64>(),
                from in ".*",
                to in ".*",
            ) {
                let config = RecommendConfig::default();
                let mut generator = RecommendationGenerator::seeded(seed, config.clone());
                let recs = generator.generate(&from, &to);

                prop_assert_eq!(recs.len(), 7);

                let distance = recs[0].distance_km;
                prop_assert!(distance >= config.min_distance_km);
                prop_assert!(distance < config.max_distance_km);
                for r in &recs {
                    prop_assert_eq!(r.distance_km, distance);
                    prop_assert!(r.available);
                }

                let metro = recs[5].estimated_mins;
                prop_assert!(metro >= config.min_transit_mins);
                prop_assert!(metro < config.max_transit_mins);
                prop_assert_eq!(recs[6].estimated_mins, metro + config.slow_transit_offset_mins);
            }
        }
    }
}
