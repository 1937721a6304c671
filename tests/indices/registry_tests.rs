//! Tests for map construction and lookup

use std::collections::HashSet;

use dsge_core::indices::{sector_name, IndexCategory, IndexRegistry};
use dsge_core::ModelError;

#[test]
fn test_build_is_idempotent() {
    for n in 1..=4 {
        assert_eq!(IndexRegistry::build(n).unwrap(), IndexRegistry::build(n).unwrap());
    }
}

#[test]
fn test_three_sectors_versus_one() {
    let one = IndexRegistry::build(1).unwrap();
    let three = IndexRegistry::build(3).unwrap();

    for category in IndexCategory::ALL {
        let grown = three.len(category) - one.len(category);
        assert_eq!(grown, category.size(3) - category.size(1), "{}", category);

        let one_names: HashSet<&String> = one.map(category).names().iter().collect();
        let new_names: Vec<&String> = three
            .map(category)
            .names()
            .iter()
            .filter(|n| !one_names.contains(n))
            .collect();
        assert_eq!(new_names.len(), grown);
    }

    assert_eq!(
        three.len(IndexCategory::EndogenousStates),
        one.len(IndexCategory::EndogenousStates) + 2 * 5
    );
    assert_eq!(three.len(IndexCategory::ExpectedShocks), one.len(IndexCategory::ExpectedShocks));
}

#[test]
fn test_positions_unique_without_gaps() {
    let indices = IndexRegistry::build(3).unwrap();
    for category in IndexCategory::ALL {
        let map = indices.map(category);
        let positions: HashSet<usize> = map.iter().map(|(_, i)| i).collect();
        assert_eq!(positions.len(), map.len());
        assert_eq!(positions.iter().max().copied(), map.len().checked_sub(1));
    }
}

#[test]
fn test_sector_naming_rule() {
    let indices = IndexRegistry::build(3).unwrap();
    for sector in 1..=3 {
        let name = sector_name("k_", sector, "_t");
        assert!(indices.index(IndexCategory::EndogenousStates, &name).is_ok());
        let name = sector_name("eq_phillips_", sector, "");
        assert!(indices.index(IndexCategory::EquilibriumConditions, &name).is_ok());
    }
    assert_eq!(sector_name("y_", 2, "_t"), "y_2_t");
}

#[test]
fn test_base_entries_keep_their_positions() {
    let one = IndexRegistry::build(1).unwrap();
    let five = IndexRegistry::build(5).unwrap();
    for name in ["y_t", "R_t", "n_t", "σ_ω_t"] {
        assert_eq!(
            one.index(IndexCategory::EndogenousStates, name).unwrap(),
            five.index(IndexCategory::EndogenousStates, name).unwrap()
        );
    }
    assert_eq!(one.index(IndexCategory::Observables, "obs_gdp").unwrap(), 0);
}

#[test]
fn test_invalid_dimension() {
    assert!(matches!(IndexRegistry::build(0), Err(ModelError::InvalidDimension(0))));
    let err = IndexRegistry::build(2)
        .unwrap()
        .index(IndexCategory::Observables, "obs_output_3")
        .unwrap_err();
    assert!(matches!(err, ModelError::UnknownIndex { .. }));
}
