use super::*;
use crate::bankfull::clip_to_elevation;
use crate::core::series::StationSeries;
use approx::assert_relative_eq;
use config::units::UnitSystem;

fn trapezoid() -> StationSeries {
    StationSeries::new(vec![0.0, 2.0, 4.0, 6.0, 8.0], vec![5.0, 1.0, 0.0, 1.0, 5.0]).unwrap()
}

fn stats_at(elevation: f64, flow: FlowParameters, system: UnitSystem) -> HydraulicStats {
    let clipped = clip_to_elevation(&trapezoid(), 2, elevation).unwrap();
    HydraulicStats::compute(&clipped, &flow, system.constants())
}

#[test]
fn test_trapezoid_geometry() {
    let stats = stats_at(3.0, FlowParameters::default(), UnitSystem::Imperial);
    assert_relative_eq!(stats.area, 12.0);
    assert_relative_eq!(stats.width, 6.0);
    assert_relative_eq!(stats.max_depth, 3.0);
    assert_relative_eq!(stats.mean_depth, 2.0);

    let bank = (1.0f64 + 4.0).sqrt();
    let bed = (4.0f64 + 1.0).sqrt();
    assert_relative_eq!(stats.wetted_perimeter, 2.0 * bank + 2.0 * bed);
    assert!(!stats.clipped_at_boundary);
}

#[test]
fn test_hydraulic_radius_identity() {
    for elevation in [0.5, 1.0, 2.2, 4.9, 7.0] {
        let stats = stats_at(elevation, FlowParameters::default(), UnitSystem::Metric);
        assert!(stats.area >= 0.0);
        assert!(stats.width >= 0.0);
        assert!(stats.wetted_perimeter >= 0.0);
        assert_eq!(stats.hydraulic_radius, stats.area / stats.wetted_perimeter);
    }
}

#[test]
fn test_missing_flow_inputs_leave_none() {
    let stats = stats_at(3.0, FlowParameters::default(), UnitSystem::Metric);
    assert_eq!(stats.shear_stress, None);
    assert_eq!(stats.discharge, None);

    let slope_only = FlowParameters {
        water_slope: Some(0.01),
        roughness: None,
    };
    let stats = stats_at(3.0, slope_only, UnitSystem::Metric);
    assert!(stats.shear_stress.is_some());
    assert_eq!(stats.discharge, None);
}

#[test]
fn test_shear_stress_uses_unit_weight() {
    let flow = FlowParameters {
        water_slope: Some(0.01),
        roughness: None,
    };
    let metric = stats_at(3.0, flow, UnitSystem::Metric);
    let imperial = stats_at(3.0, flow, UnitSystem::Imperial);
    assert_relative_eq!(metric.shear_stress.unwrap(), 9810.0 * 2.0 * 0.01);
    assert_relative_eq!(imperial.shear_stress.unwrap(), 62.4 * 2.0 * 0.01);
}

#[test]
fn test_manning_discharge() {
    let flow = FlowParameters {
        water_slope: Some(0.0004),
        roughness: Some(0.035),
    };
    let stats = stats_at(3.0, flow, UnitSystem::Imperial);
    let expected = (1.486 / 0.035) * 12.0 * stats.hydraulic_radius.powf(2.0 / 3.0) * 0.02;
    assert_relative_eq!(stats.discharge.unwrap(), expected, max_relative = 1e-12);
}

#[test]
fn test_zero_slope_gives_zero_not_none() {
    let flow = FlowParameters {
        water_slope: Some(0.0),
        roughness: Some(0.03),
    };
    let stats = stats_at(3.0, flow, UnitSystem::Metric);
    assert_eq!(stats.shear_stress, Some(0.0));
    assert_eq!(stats.discharge, Some(0.0));
}

#[test]
fn test_overtopped_channel_is_flagged() {
    let stats = stats_at(6.0, FlowParameters::default(), UnitSystem::Metric);
    assert!(stats.clipped_at_boundary);
    assert_relative_eq!(stats.width, 8.0);
    assert_relative_eq!(stats.max_depth, 6.0);
}

#[test]
fn test_flow_parameter_validation() {
    assert!(FlowParameters::default().validate().is_ok());
    let negative_slope = FlowParameters {
        water_slope: Some(-0.1),
        roughness: None,
    };
    assert!(matches!(
        negative_slope.validate(),
        Err(ChannelError::InvalidParameter { name: "water_slope", .. })
    ));
    let zero_roughness = FlowParameters {
        water_slope: None,
        roughness: Some(0.0),
    };
    assert!(matches!(
        zero_roughness.validate(),
        Err(ChannelError::InvalidParameter { name: "roughness", .. })
    ));
}
