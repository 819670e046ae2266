// crates/citygeo-core/src/filter.rs
use crate::model::CityCollection;
use serde::{Deserialize, Serialize};

/// Diagnostic counts from one filter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterReport {
    pub original: usize,
    pub retained: usize,
    pub removed: usize,
}

/// Retains the cities whose population meets the threshold.
///
/// The comparison is inclusive (`population >= min_population`); cities
/// whose source lacked a population carry 0 and only survive a threshold
/// of 0. The input is not mutated and the output preserves the input's
/// relative order.
pub fn filter_by_population(
    collection: &CityCollection,
    min_population: u64,
) -> (CityCollection, FilterReport) {
    let original = collection.len();
    let features: Vec<_> = collection
        .features
        .iter()
        .filter(|f| f.properties.population >= min_population)
        .cloned()
        .collect();

    let retained = features.len();
    let report = FilterReport {
        original,
        retained,
        removed: original - retained,
    };

    (CityCollection::new(features), report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CityFeature;
    use serde_json::json;

    fn city(name: &str, population: u64) -> CityFeature {
        CityFeature::new(
            name.to_string(),
            "Illinois".to_string(),
            population,
            json!([0.0, 0.0]),
        )
    }

    fn names(collection: &CityCollection) -> Vec<&str> {
        collection
            .features
            .iter()
            .map(|f| f.properties.name.as_str())
            .collect()
    }

    #[test]
    fn threshold_is_inclusive() {
        let input = CityCollection::new(vec![
            city("At", 20_000),
            city("Above", 20_001),
            city("Below", 19_999),
        ]);
        let (out, report) = filter_by_population(&input, 20_000);
        assert_eq!(names(&out), vec!["At", "Above"]);
        assert_eq!(
            report,
            FilterReport {
                original: 3,
                retained: 2,
                removed: 1
            }
        );
    }

    #[test]
    fn preserves_relative_order() {
        let input = CityCollection::new(vec![
            city("a", 5),
            city("b", 1),
            city("c", 9),
            city("d", 2),
            city("e", 7),
        ]);
        let (out, _) = filter_by_population(&input, 5);
        assert_eq!(names(&out), vec!["a", "c", "e"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let input = CityCollection::new(vec![city("a", 3), city("b", 8), city("c", 5)]);
        let (once, _) = filter_by_population(&input, 5);
        let (twice, report) = filter_by_population(&once, 5);
        assert_eq!(names(&once), names(&twice));
        assert_eq!(report.removed, 0);
    }

    #[test]
    fn input_is_not_mutated() {
        let input = CityCollection::new(vec![city("a", 1), city("b", 100)]);
        let (_, _) = filter_by_population(&input, 50);
        assert_eq!(input.len(), 2);
    }

    #[test]
    fn zero_threshold_keeps_unpopulated_cities() {
        let input = CityCollection::new(vec![city("ghost town", 0)]);
        let (out, _) = filter_by_population(&input, 0);
        assert_eq!(out.len(), 1);
        let (out, _) = filter_by_population(&input, 1);
        assert!(out.is_empty());
    }
}
