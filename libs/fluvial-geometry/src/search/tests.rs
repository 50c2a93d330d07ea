use super::*;
use crate::bankfull::clip_to_elevation;
use crate::core::series::StationSeries;
use crate::hydraulics::FlowParameters;
use approx::assert_abs_diff_eq;
use config::units::UnitSystem;

fn trapezoid() -> StationSeries {
    StationSeries::new(vec![0.0, 2.0, 4.0, 6.0, 8.0], vec![5.0, 1.0, 0.0, 1.0, 5.0]).unwrap()
}

fn evaluator(flow: FlowParameters) -> impl FnMut(f64) -> Result<HydraulicStats> {
    let channel = trapezoid();
    move |elevation| {
        let clipped = clip_to_elevation(&channel, 2, elevation)?;
        Ok(HydraulicStats::compute(
            &clipped,
            &flow,
            UnitSystem::Metric.constants(),
        ))
    }
}

fn bounds(initial_guess: Option<f64>) -> SearchBounds {
    SearchBounds {
        floor: 0.0,
        top: 5.0,
        initial_guess,
    }
}

#[test]
fn test_width_search_converges() {
    let outcome = search_bankfull(
        evaluator(FlowParameters::default()),
        bounds(None),
        BankfullTarget::Width,
        6.0,
        &SearchOptions::default(),
    )
    .unwrap();
    assert!(outcome.is_converged());
    assert_abs_diff_eq!(outcome.value, 6.0, epsilon = 0.006);
    assert_abs_diff_eq!(outcome.elevation, 3.0, epsilon = 0.01);
}

#[test]
fn test_known_elevation_converges_immediately() {
    let mut evaluate = evaluator(FlowParameters::default());
    let area = evaluate(3.0).unwrap().area;
    let outcome = search_bankfull(
        evaluate,
        bounds(Some(3.0)),
        BankfullTarget::Area,
        area,
        &SearchOptions::default(),
    )
    .unwrap();
    assert!(outcome.is_converged());
    assert!(outcome.iterations <= 2);
    assert_eq!(outcome.elevation, 3.0);
}

#[test]
fn test_goal_above_survey_expands_upper_bound() {
    // Width 10 needs water over the top of both banks; the walls at the
    // survey edge cap the width at 8, so the search must give up.
    let outcome = search_bankfull(
        evaluator(FlowParameters::default()),
        bounds(None),
        BankfullTarget::Width,
        10.0,
        &SearchOptions::default(),
    )
    .unwrap();
    assert_eq!(outcome.status, SearchStatus::ExpansionCapReached);
    assert_eq!(outcome.elevation_if(false), None);
    assert!(outcome.elevation_if(true).is_some());
    assert!(matches!(
        outcome.into_result(),
        Err(ChannelError::NonConvergence { .. })
    ));
}

#[test]
fn test_expansion_cap_is_relative_to_floor() {
    // The same channel surveyed on a datum 1000 units up.
    let datum: f64 = 1000.0;
    let mut inner = evaluator(FlowParameters::default());
    let mut highest = datum;
    let evaluate = |elevation: f64| {
        highest = highest.max(elevation);
        inner(elevation - datum)
    };
    let outcome = search_bankfull(
        evaluate,
        SearchBounds {
            floor: datum,
            top: datum + 5.0,
            initial_guess: None,
        },
        BankfullTarget::Width,
        10.0,
        &SearchOptions::default(),
    )
    .unwrap();
    assert_eq!(outcome.status, SearchStatus::ExpansionCapReached);
    assert!(highest > datum + 5.0);
    assert!(highest < datum + SearchConfig::default().expansion_cap * 5.0);
}

#[test]
fn test_area_above_banks_is_found() {
    // Overtopped area grows by 8 per unit of rise above elevation 5.
    let outcome = search_bankfull(
        evaluator(FlowParameters::default()),
        bounds(None),
        BankfullTarget::Area,
        60.0,
        &SearchOptions::default(),
    )
    .unwrap();
    assert!(outcome.is_converged());
    assert!(outcome.elevation > 5.0);
}

#[test]
fn test_iteration_limit() {
    let options = SearchOptions {
        tolerance: Some(1e-12),
        config: SearchConfig::new(3, 100.0).unwrap(),
    };
    let outcome = search_bankfull(
        evaluator(FlowParameters::default()),
        bounds(None),
        BankfullTarget::MaxDepth,
        std::f64::consts::PI,
        &options,
    )
    .unwrap();
    assert_eq!(outcome.status, SearchStatus::IterationLimit);
    assert_eq!(outcome.iterations, 3);
    assert!(outcome.into_result().is_err());
}

#[test]
fn test_discharge_without_flow_parameters() {
    let err = search_bankfull(
        evaluator(FlowParameters::default()),
        bounds(None),
        BankfullTarget::Discharge,
        10.0,
        &SearchOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ChannelError::InvalidParameter { name: "target", .. }));
}

#[test]
fn test_discharge_search() {
    let flow = FlowParameters {
        water_slope: Some(0.001),
        roughness: Some(0.03),
    };
    let outcome = search_bankfull(
        evaluator(flow),
        bounds(None),
        BankfullTarget::Discharge,
        5.0,
        &SearchOptions::default(),
    )
    .unwrap();
    assert!(outcome.is_converged());
    assert_abs_diff_eq!(outcome.value, 5.0, epsilon = 0.005);
}

#[test]
fn test_rejects_bad_goal_and_bounds() {
    let bad_goal = search_bankfull(
        evaluator(FlowParameters::default()),
        bounds(None),
        BankfullTarget::Width,
        -1.0,
        &SearchOptions::default(),
    );
    assert!(matches!(bad_goal, Err(ChannelError::InvalidParameter { name: "goal", .. })));

    let flat = SearchBounds {
        floor: 2.0,
        top: 2.0,
        initial_guess: None,
    };
    let bad_bounds = search_bankfull(
        evaluator(FlowParameters::default()),
        flat,
        BankfullTarget::Width,
        1.0,
        &SearchOptions::default(),
    );
    assert!(matches!(bad_bounds, Err(ChannelError::InvalidParameter { name: "bounds", .. })));
}

#[test]
fn test_target_names_round_trip() {
    for target in BankfullTarget::ALL {
        assert_eq!(target.name().parse::<BankfullTarget>().unwrap(), target);
    }
    assert_eq!("Wetted Perimeter".parse::<BankfullTarget>().unwrap(), BankfullTarget::WettedPerimeter);
    assert!("mean_depth".parse::<BankfullTarget>().is_err());
}
