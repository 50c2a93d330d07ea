use super::*;

#[test]
fn test_zip_ignores_extra_entries() {
    let points = zip_points(&[0.0, 1.0, 2.0], &[3.0, 4.0]);
    assert_eq!(points.len(), 2);
    assert_eq!(points[1], Vec2::new(1.0, 4.0));
}

#[test]
fn test_unzip_inverts_zip() {
    let (xs, ys) = unzip_points(&[Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]);
    assert_eq!(xs, vec![1.0, 3.0]);
    assert_eq!(ys, vec![2.0, 4.0]);
}
