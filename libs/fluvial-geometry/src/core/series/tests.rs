use super::*;

fn sample() -> StationSeries {
    StationSeries::new(vec![0.0, 2.0, 4.0, 6.0, 8.0], vec![5.0, 1.0, 0.0, 1.0, 5.0]).unwrap()
}

#[test]
fn test_rejects_length_mismatch() {
    let err = StationSeries::new(vec![0.0, 1.0], vec![1.0]).unwrap_err();
    assert_eq!(
        err,
        ChannelError::ShapeMismatch {
            field: "elevations",
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn test_rejects_non_finite() {
    let err = StationSeries::new(vec![0.0, f64::NAN], vec![1.0, 2.0]).unwrap_err();
    assert!(matches!(err, ChannelError::InvalidParameter { .. }));
}

#[test]
fn test_extremes() {
    let series = sample();
    assert_eq!(series.min_elevation(), Some(0.0));
    assert_eq!(series.max_elevation(), Some(5.0));
    assert_eq!(series.station_bounds(), Some((0.0, 8.0)));
}

#[test]
fn test_point_access() {
    let series = sample();
    assert_eq!(series.point(2), Some(Vec2::new(4.0, 0.0)));
    assert_eq!(series.point(5), None);
    assert_eq!(series.points().len(), 5);
}

#[test]
fn test_monotonic() {
    assert!(sample().is_monotonic());
    let folded = StationSeries::new(vec![0.0, 3.0, 1.0, 5.0], vec![5.0, 4.0, 2.0, 0.0]).unwrap();
    assert!(!folded.is_monotonic());
}

#[test]
fn test_empty_series() {
    let series = StationSeries::new(Vec::new(), Vec::new()).unwrap();
    assert!(series.is_empty());
    assert_eq!(series.min_elevation(), None);
    assert_eq!(series.station_bounds(), None);
}
