//! Tests for the unit-system tables.

use super::*;

#[test]
fn default_is_imperial() {
    assert_eq!(UnitSystem::default(), UnitSystem::Imperial);
}

#[test]
fn metric_flag_selects_table() {
    assert_eq!(UnitSystem::from_metric_flag(true).constants().length_unit, "m");
    assert_eq!(UnitSystem::from_metric_flag(false).constants().length_unit, "ft");
}

#[test]
fn parses_names_case_insensitively() {
    assert_eq!("Metric".parse::<UnitSystem>(), Ok(UnitSystem::Metric));
    assert_eq!(" ft ".parse::<UnitSystem>(), Ok(UnitSystem::Imperial));
    assert!("furlongs".parse::<UnitSystem>().is_err());
}

#[test]
fn display_round_trips_through_from_str() {
    for system in [UnitSystem::Metric, UnitSystem::Imperial] {
        assert_eq!(system.to_string().parse::<UnitSystem>(), Ok(system));
    }
}
