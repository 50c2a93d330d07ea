use super::*;
use crate::search::SearchStatus;
use approx::assert_relative_eq;

const STATIONS: [f64; 5] = [0.0, 2.0, 4.0, 6.0, 8.0];
const ELEVATIONS: [f64; 5] = [5.0, 1.0, 0.0, 1.0, 5.0];

fn trapezoid(options: CrossSectionOptions) -> CrossSection {
    CrossSection::new(&STATIONS, &[0.0; 5], &ELEVATIONS, options).unwrap()
}

fn at_bankfull(elevation: f64) -> CrossSectionOptions {
    CrossSectionOptions {
        bankfull_elevation: Some(elevation),
        ..Default::default()
    }
}

#[test]
fn test_trapezoid_statistics() {
    let xs = trapezoid(at_bankfull(3.0));
    assert_eq!(xs.resolved().stations(), &STATIONS);
    assert_eq!(xs.thalweg_index(), 2);
    assert_relative_eq!(xs.area().unwrap(), 12.0);
    assert_relative_eq!(xs.width().unwrap(), 6.0);
    assert_relative_eq!(xs.mean_depth().unwrap(), 2.0);
    assert_relative_eq!(xs.max_depth().unwrap(), 3.0);
    assert_relative_eq!(xs.wetted_perimeter().unwrap(), 4.0 * 5.0f64.sqrt());
    assert_relative_eq!(
        xs.hydraulic_radius().unwrap(),
        12.0 / (4.0 * 5.0f64.sqrt())
    );
    assert_eq!(xs.shear_stress(), None);
    assert_eq!(xs.discharge(), None);
    assert!(xs.warnings().is_empty());
}

#[test]
fn test_no_bankfull_means_no_statistics() {
    let xs = trapezoid(CrossSectionOptions::default());
    assert_eq!(xs.bankfull_elevation(), None);
    assert!(xs.stats().is_none());
    assert!(xs.bankfull_series().is_none());
    assert_eq!(xs.area(), None);
}

#[test]
fn test_unimplemented_statistics_are_absent() {
    let xs = trapezoid(at_bankfull(3.0));
    assert_eq!(xs.flood_prone_elevation(), None);
    assert_eq!(xs.flood_prone_width(), None);
    assert_eq!(xs.entrained_particle_size(), None);
}

#[test]
fn test_display_name() {
    assert_eq!(trapezoid(CrossSectionOptions::default()).to_string(), "UNNAMED");
    let named = trapezoid(CrossSectionOptions {
        name: Some("XS-4".to_string()),
        ..Default::default()
    });
    assert_eq!(named.to_string(), "XS-4");
    assert_eq!(named.name(), Some("XS-4"));
}

#[test]
fn test_shape_mismatch() {
    let err = CrossSection::new(&STATIONS, &[0.0; 4], &ELEVATIONS, CrossSectionOptions::default())
        .unwrap_err();
    assert_eq!(
        err,
        ChannelError::ShapeMismatch {
            field: "northings",
            expected: 5,
            found: 4,
        }
    );

    let err = CrossSection::new(&STATIONS, &[0.0; 5], &[1.0, 2.0], CrossSectionOptions::default())
        .unwrap_err();
    assert!(matches!(err, ChannelError::ShapeMismatch { field: "elevations", .. }));
}

#[test]
fn test_single_shot_rejected() {
    let err = CrossSection::new(&[1.0], &[1.0], &[1.0], CrossSectionOptions::default()).unwrap_err();
    assert_eq!(err, ChannelError::InsufficientPoints { count: 1, min: 2 });
}

#[test]
fn test_self_intersection_rejected() {
    let err = CrossSection::from_stations(
        &[0.0, 4.0, 4.0, 0.0],
        &[0.0, 4.0, 0.0, 4.0],
        CrossSectionOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ChannelError::InvalidGeometry {
            series: SeriesKind::Raw,
            ..
        }
    ));
}

#[test]
fn test_overhang_resolved_and_flagged() {
    let xs = CrossSection::from_stations(
        &[0.0, 3.0, 1.0, 5.0],
        &[5.0, 4.0, 2.0, 0.0],
        CrossSectionOptions::default(),
    )
    .unwrap();
    assert!(xs.has_overhangs());
    assert_eq!(xs.warnings(), &[GeometryWarning::Overhangs { reversals: 1 }]);
    assert_eq!(xs.raw().stations(), &[0.0, 3.0, 1.0, 5.0]);
    assert_eq!(xs.resolved().stations(), &[0.0, 1.0, 3.0, 5.0]);
    assert!(xs.resolved().is_monotonic());
    assert_eq!(xs.thalweg_index(), 3);
}

#[test]
fn test_overhang_returning_to_earlier_shot() {
    let xs = CrossSection::from_stations(
        &[0.0, 2.0, 4.0, 2.0, 6.0],
        &[5.0, 4.0, 3.0, 1.0, 0.0],
        CrossSectionOptions::default(),
    )
    .unwrap();
    assert!(xs.has_overhangs());
    assert_eq!(xs.resolved().stations(), &[0.0, 2.0, 4.0, 6.0]);
    assert_eq!(xs.resolved().elevations(), &[5.0, 4.0, 3.0, 0.0]);
    assert_eq!(xs.thalweg_index(), 3);
}

#[test]
fn test_repeated_shot_accepted() {
    let xs = CrossSection::from_stations(
        &[0.0, 2.0, 4.0, 4.0, 6.0, 8.0],
        &[5.0, 1.0, 0.0, 0.0, 1.0, 5.0],
        at_bankfull(3.0),
    )
    .unwrap();
    assert_eq!(xs.thalweg_index(), 2);
    assert_relative_eq!(xs.area().unwrap(), 12.0);
    assert_relative_eq!(xs.width().unwrap(), 6.0);
    assert_relative_eq!(xs.wetted_perimeter().unwrap(), 4.0 * 5.0f64.sqrt());
}

#[test]
fn test_flat_bottom_thalweg_is_leftmost() {
    let xs = CrossSection::from_stations(
        &[0.0, 2.0, 4.0, 6.0, 8.0],
        &[5.0, 0.0, 0.0, 0.0, 5.0],
        at_bankfull(3.0),
    )
    .unwrap();
    assert_eq!(xs.thalweg_index(), 1);
    assert_eq!(xs.thalweg_station(), 2.0);
    assert_eq!(xs.thalweg_elevation(), 0.0);
}

#[test]
fn test_bad_fill_fraction_rejected() {
    let err = CrossSection::from_stations(
        &STATIONS,
        &ELEVATIONS,
        CrossSectionOptions {
            fill_fraction: 1.5,
            ..Default::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, ChannelError::InvalidParameter { .. }));
}

#[test]
fn test_thalweg_station_snaps_to_nearest_shot() {
    let xs = trapezoid(CrossSectionOptions {
        thalweg_station: Some(5.1),
        ..Default::default()
    });
    assert_eq!(xs.thalweg_index(), 3);
    assert_eq!(xs.thalweg_station(), 6.0);
    assert_eq!(xs.thalweg_elevation(), 1.0);
}

#[test]
fn test_thalweg_station_outside_survey_falls_back() {
    let xs = trapezoid(CrossSectionOptions {
        thalweg_station: Some(20.0),
        ..Default::default()
    });
    assert_eq!(xs.thalweg_index(), 2);
    assert_eq!(
        xs.warnings(),
        &[GeometryWarning::ThalwegOutOfBounds { station: 20.0 }]
    );
}

#[test]
fn test_bankfull_below_channel_rejected() {
    let err = CrossSection::from_stations(&STATIONS, &ELEVATIONS, at_bankfull(-1.0)).unwrap_err();
    assert_eq!(
        err,
        ChannelError::BelowChannel {
            elevation: -1.0,
            minimum: 0.0,
        }
    );
}

#[test]
fn test_thalweg_above_bankfull_rejected() {
    let err = CrossSection::from_stations(
        &STATIONS,
        &ELEVATIONS,
        CrossSectionOptions {
            thalweg_station: Some(6.0),
            bankfull_elevation: Some(0.5),
            ..Default::default()
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ChannelError::ThalwegAboveBankfull { thalweg_index: 3, .. }
    ));
}

#[test]
fn test_failed_update_keeps_previous_state() {
    let mut xs = trapezoid(at_bankfull(3.0));
    assert!(xs.set_bankfull_elevation(Some(-1.0)).is_err());
    assert_eq!(xs.bankfull_elevation(), Some(3.0));
    assert_relative_eq!(xs.width().unwrap(), 6.0);

    assert!(xs.set_water_slope(Some(-0.1)).is_err());
    assert_eq!(xs.water_slope(), None);
    assert!(xs.set_roughness(Some(0.0)).is_err());
    assert_eq!(xs.roughness(), None);
}

#[test]
fn test_flow_parameters_recompute() {
    let mut xs = trapezoid(at_bankfull(3.0));
    xs.set_water_slope(Some(0.01)).unwrap();
    assert_relative_eq!(xs.shear_stress().unwrap(), 62.4 * 2.0 * 0.01);
    assert_eq!(xs.discharge(), None);

    xs.set_roughness(Some(0.035)).unwrap();
    let radius = 12.0 / (4.0 * 5.0f64.sqrt());
    let expected = (1.486 / 0.035) * 12.0 * radius.powf(2.0 / 3.0) * 0.01f64.sqrt();
    assert_relative_eq!(xs.discharge().unwrap(), expected, max_relative = 1e-12);

    xs.set_bankfull_elevation(None).unwrap();
    assert_eq!(xs.discharge(), None);
    assert_eq!(xs.water_slope(), Some(0.01));
}

#[test]
fn test_metric_unit_weight() {
    let xs = trapezoid(CrossSectionOptions {
        unit_system: UnitSystem::Metric,
        bankfull_elevation: Some(3.0),
        water_slope: Some(0.001),
        ..Default::default()
    });
    assert_relative_eq!(xs.shear_stress().unwrap(), 9810.0 * 2.0 * 0.001);
}

#[test]
fn test_hydraulics_at_leaves_section_unchanged() {
    let xs = trapezoid(at_bankfull(3.0));
    let stats = xs.hydraulics_at(1.0).unwrap();
    assert_relative_eq!(stats.width, 4.0);
    assert_relative_eq!(xs.width().unwrap(), 6.0);
}

#[test]
fn test_find_then_commit() {
    let mut xs = trapezoid(CrossSectionOptions::default());
    let outcome = xs
        .find_bankfull(BankfullTarget::Width, 6.0, &SearchOptions::default())
        .unwrap();
    assert!(outcome.is_converged());
    assert_eq!(xs.bankfull_elevation(), None);

    let committed = xs.commit_search(&outcome, false).unwrap();
    assert_eq!(committed, Some(outcome.elevation));
    assert_relative_eq!(xs.bankfull_elevation().unwrap(), 3.0, epsilon = 0.01);
    assert_relative_eq!(xs.width().unwrap(), 6.0, epsilon = 0.006);
}

#[test]
fn test_failed_search_not_committed_by_default() {
    let mut xs = trapezoid(at_bankfull(3.0));
    let outcome = xs
        .find_bankfull(BankfullTarget::Width, 10.0, &SearchOptions::default())
        .unwrap();
    assert_eq!(outcome.status, SearchStatus::ExpansionCapReached);

    assert_eq!(xs.commit_search(&outcome, false).unwrap(), None);
    assert_eq!(xs.bankfull_elevation(), Some(3.0));

    assert_eq!(xs.commit_search(&outcome, true).unwrap(), Some(outcome.elevation));
    assert_eq!(xs.bankfull_elevation(), Some(outcome.elevation));
}

#[test]
fn test_search_from_current_bankfull_is_stable() {
    let xs = trapezoid(at_bankfull(3.0));
    let outcome = xs
        .find_bankfull(BankfullTarget::Width, 6.0, &SearchOptions::default())
        .unwrap();
    assert!(outcome.is_converged());
    assert_eq!(outcome.elevation, 3.0);
    assert_eq!(outcome.iterations, 1);
}

#[test]
fn test_search_floor_respects_thalweg_station() {
    let xs = trapezoid(CrossSectionOptions {
        thalweg_station: Some(6.0),
        ..Default::default()
    });
    let bounds = xs.search_bounds();
    assert_eq!(bounds.floor, 1.0);
    assert_eq!(bounds.top, 5.0);
    assert_eq!(bounds.initial_guess, None);

    let inferred = trapezoid(CrossSectionOptions::default());
    assert_eq!(inferred.search_bounds().floor, 0.0);
}

#[test]
fn test_centerline_shots() {
    let xs = CrossSection::new(
        &[0.0, 1.0, 2.0],
        &[0.0, 0.0, 0.0],
        &[2.0, 0.0, 2.0],
        CrossSectionOptions::default(),
    )
    .unwrap();
    let shots = xs.centerline_shots();
    assert_eq!(shots.len(), 3);
    assert_relative_eq!(shots[1].x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(shots[1].y, 0.0, epsilon = 1e-12);

    let stationed = CrossSection::from_stations(&[0.0, 1.0], &[1.0, 0.0], CrossSectionOptions::default())
        .unwrap();
    assert!(stationed.centerline_shots().is_empty());
}
