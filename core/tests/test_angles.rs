use biomech_core::angles::calculate_angle;
use biomech_core::models::Point;

mod common;
use common::at_angle;

#[test]
fn right_angle_at_vertex() {
    let a = Point::new(1.0, 0.0);
    let b = Point::new(0.0, 0.0);
    let c = Point::new(0.0, 1.0);
    assert_eq!(calculate_angle(a, b, c), 90);
}

#[test]
fn collinear_points_give_straight_angle() {
    let a = Point::new(0.1, 0.5);
    let b = Point::new(0.5, 0.5);
    let c = Point::new(0.9, 0.5);
    assert_eq!(calculate_angle(a, b, c), 180);
    // a og c på samme side
    assert_eq!(calculate_angle(c, b, Point::new(0.7, 0.5)), 0);
}

#[test]
fn coincident_points_give_zero_not_nan() {
    let p = Point::new(0.3, 0.3);
    assert_eq!(calculate_angle(p, p, Point::new(0.6, 0.6)), 0);
    assert_eq!(calculate_angle(Point::new(0.6, 0.6), p, p), 0);
}

#[test]
fn result_is_symmetric_and_bounded() {
    let b = Point::new(0.5, 0.5);
    let a = Point::new(0.5, 0.3);
    for deg in [5.0, 37.0, 90.0, 121.0, 179.0] {
        let c = at_angle(b, a, deg, 0.2);
        let got = calculate_angle(a, b, c);
        assert_eq!(got, deg as u16, "deg={deg}");
        assert_eq!(calculate_angle(c, b, a), got);
    }
}

#[test]
fn normalized_and_pixel_coordinates_agree() {
    let (a, b, c) = (Point::new(0.2, 0.1), Point::new(0.5, 0.5), Point::new(0.9, 0.4));
    let scale = |p: Point| Point::new(p.x * 1280.0, p.y * 1280.0);
    assert_eq!(calculate_angle(a, b, c), calculate_angle(scale(a), scale(b), scale(c)));
}
