//! Sorted and filtered views over the ride catalog.

use std::sync::Arc;

use tracing::debug;

use crate::domain::RideOption;

use super::key::FilterKey;

/// Apply `key` to `catalog`.
///
/// Sorting is stable, so entries with equal time or price keep their
/// catalog order. `Public` is the `Fastest` view restricted to bus and
/// rail providers.
pub fn filter_rides(catalog: &[RideOption], key: FilterKey) -> Vec<&RideOption> {
    let mut rides: Vec<&RideOption> = catalog.iter().collect();
    match key {
        FilterKey::Fastest => rides.sort_by_key(|r| r.estimated_mins),
        FilterKey::Cheapest => rides.sort_by_key(|r| r.estimated_price),
        FilterKey::Eco => rides.retain(|r| r.eco_friendly),
        FilterKey::Public => {
            rides.sort_by_key(|r| r.estimated_mins);
            rides.retain(|r| r.provider.is_public_transit());
        }
    }
    rides
}

/// A ride in a filtered view, with its position badge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedRide<'a> {
    pub option: &'a RideOption,
    pub badge: Option<&'static str>,
}

/// Result of filtering by a raw key string.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome<'a> {
    /// The key that was applied, or `None` if the input was not recognised.
    pub key: Option<FilterKey>,
    pub rides: Vec<RankedRide<'a>>,
}

/// The ride catalog plus the filter operations over it.
#[derive(Debug, Clone)]
pub struct ResultFilter {
    catalog: Arc<[RideOption]>,
}

impl ResultFilter {
    pub fn new(catalog: Vec<RideOption>) -> Self {
        Self {
            catalog: catalog.into(),
        }
    }

    /// The unfiltered catalog, in its original order.
    pub fn catalog(&self) -> &[RideOption] {
        &self.catalog
    }

    pub fn apply(&self, key: FilterKey) -> Vec<&RideOption> {
        filter_rides(&self.catalog, key)
    }

    /// Apply a key and attach the first-place badge.
    pub fn ranked(&self, key: FilterKey) -> Vec<RankedRide<'_>> {
        let badge = key.top_badge();
        self.apply(key)
            .into_iter()
            .enumerate()
            .map(|(i, option)| RankedRide {
                option,
                badge: if i == 0 { badge } else { None },
            })
            .collect()
    }

    /// Apply a key given as text.
    ///
    /// An unrecognised key yields the catalog unsorted and unfiltered.
    pub fn apply_raw(&self, raw: &str) -> FilterOutcome<'_> {
        match raw.parse::<FilterKey>() {
            Ok(key) => FilterOutcome {
                key: Some(key),
                rides: self.ranked(key),
            },
            Err(e) => {
                debug!(error = %e, "falling back to unfiltered catalog");
                FilterOutcome {
                    key: None,
                    rides: self
                        .catalog
                        .iter()
                        .map(|option| RankedRide {
                            option,
                            badge: None,
                        })
                        .collect(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::domain::{IconKey, Provider};

    fn filter() -> ResultFilter {
        ResultFilter::new(Catalog::builtin().unwrap().ride_options)
    }

    fn ids(rides: &[&RideOption]) -> Vec<String> {
        rides.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn fastest_first_is_bike() {
        let f = filter();
        let rides = f.apply(FilterKey::Fastest);
        assert_eq!(rides[0].tier, "Bike");
        assert_eq!(rides[0].estimated_mins, 10);
        assert_eq!(ids(&rides), vec!["4", "3", "1", "2", "7", "5", "6"]);
    }

    #[test]
    fn cheapest_first_is_bus() {
        let f = filter();
        let rides = f.apply(FilterKey::Cheapest);
        assert_eq!(rides[0].provider, Provider::Bus);
        assert_eq!(rides[0].estimated_price.to_string(), "3.75");
        assert_eq!(ids(&rides), vec!["6", "5", "4", "3", "1", "7", "2"]);
    }

    #[test]
    fn eco_keeps_catalog_order() {
        let f = filter();
        let rides = f.apply(FilterKey::Eco);
        assert_eq!(ids(&rides), vec!["4", "7"]);
        assert!(rides.iter().all(|r| r.eco_friendly));
    }

    #[test]
    fn public_is_bus_and_rail_by_time() {
        let f = filter();
        let rides = f.apply(FilterKey::Public);
        assert_eq!(ids(&rides), vec!["5", "6"]);
        assert_eq!(rides[0].provider, Provider::Metro);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog = vec![
            RideOption::new("a", Provider::Uber, "X", 10, 500, 1.0, false, IconKey::CarFront),
            RideOption::new("b", Provider::Ola, "Y", 5, 500, 1.0, false, IconKey::CarFront),
            RideOption::new("c", Provider::Bus, "Z", 10, 100, 1.0, false, IconKey::Bus),
            RideOption::new("d", Provider::Train, "W", 5, 500, 1.0, false, IconKey::Train),
        ];

        assert_eq!(
            ids(&filter_rides(&catalog, FilterKey::Fastest)),
            vec!["b", "d", "a", "c"]
        );
        assert_eq!(
            ids(&filter_rides(&catalog, FilterKey::Cheapest)),
            vec!["c", "a", "b", "d"]
        );
        assert_eq!(
            ids(&filter_rides(&catalog, FilterKey::Public)),
            vec!["d", "c"]
        );
    }

    #[test]
    fn ranked_badges_only_first() {
        let f = filter();

        let ranked = f.ranked(FilterKey::Cheapest);
        assert_eq!(ranked[0].badge, Some("Best Value"));
        assert!(ranked[1..].iter().all(|r| r.badge.is_none()));

        let ranked = f.ranked(FilterKey::Eco);
        assert!(ranked.iter().all(|r| r.badge.is_none()));
    }

    #[test]
    fn unknown_raw_key_falls_back() {
        let f = filter();
        let outcome = f.apply_raw("slowest");
        assert_eq!(outcome.key, None);
        let got: Vec<_> = outcome.rides.iter().map(|r| r.option.id.as_str()).collect();
        assert_eq!(got, vec!["1", "2", "3", "4", "5", "6", "7"]);
        assert!(outcome.rides.iter().all(|r| r.badge.is_none()));
    }

    #[test]
    fn known_raw_key_is_applied() {
        let f = filter();
        let outcome = f.apply_raw("FASTEST");
        assert_eq!(outcome.key, Some(FilterKey::Fastest));
        assert_eq!(outcome.rides[0].option.tier, "Bike");
        assert_eq!(outcome.rides[0].badge, Some("Fastest Option"));
    }

    #[test]
    fn empty_catalog() {
        for key in FilterKey::ALL {
            assert!(filter_rides(&[], key).is_empty());
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn provider_strategy() -> impl Strategy<Value = Provider> {
            prop::sample::select(Provider::ALL.to_vec())
        }

        fn ride_strategy() -> impl Strategy<Value = (Provider, u32, u32, bool)> {
            (provider_strategy(), 1u32..60, 100u32..5000, any::<bool>())
        }

        fn catalog_strategy() -> impl Strategy<Value = Vec<RideOption>> {
            prop::collection::vec(ride_strategy(), 0..12).prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (provider, mins, cents, eco))| {
                        RideOption::new(
                            &i.to_string(),
                            provider,
                            "Tier",
                            mins,
                            cents,
                            5.0,
                            eco,
                            IconKey::CarFront,
                        )
                    })
                    .collect()
            })
        }

        fn sorted_ids(rides: &[&RideOption]) -> Vec<String> {
            let mut v = ids(rides);
            v.sort();
            v
        }

        proptest! {
            #[test]
            fn fastest_is_sorted_permutation(catalog in catalog_strategy()) {
                let all: Vec<&RideOption> = catalog.iter().collect();
                let rides = filter_rides(&catalog, FilterKey::Fastest);

                prop_assert_eq!(sorted_ids(&rides), sorted_ids(&all));
                for pair in rides.windows(2) {
                    prop_assert!(pair[0].estimated_mins <= pair[1].estimated_mins);
                }
            }

            #[test]
            fn cheapest_is_sorted_permutation(catalog in catalog_strategy()) {
                let all: Vec<&RideOption> = catalog.iter().collect();
                let rides = filter_rides(&catalog, FilterKey::Cheapest);

                prop_assert_eq!(sorted_ids(&rides), sorted_ids(&all));
                for pair in rides.windows(2) {
                    prop_assert!(pair[0].estimated_price <= pair[1].estimated_price);
                }
            }

            #[test]
            fn eco_is_ordered_subset(catalog in catalog_strategy()) {
                let rides = filter_rides(&catalog, FilterKey::Eco);
                let expected: Vec<&RideOption> =
                    catalog.iter().filter(|r| r.eco_friendly).collect();

                prop_assert_eq!(ids(&rides), ids(&expected));
            }

            #[test]
            fn public_is_transit_by_time(catalog in catalog_strategy()) {
                let rides = filter_rides(&catalog, FilterKey::Public);

                prop_assert!(rides.iter().all(|r| r.provider.is_public_transit()));
                for pair in rides.windows(2) {
                    prop_assert!(pair[0].estimated_mins <= pair[1].estimated_mins);
                }
                let transit = catalog.iter().filter(|r| r.provider.is_public_transit()).count();
                prop_assert_eq!(rides.len(), transit);
            }

            #[test]
            fn filters_are_idempotent(catalog in catalog_strategy()) {
                for key in FilterKey::ALL {
                    let first = ids(&filter_rides(&catalog, key));
                    let second = ids(&filter_rides(&catalog, key));
                    prop_assert_eq!(first, second);
                }
            }
        }
    }
}
