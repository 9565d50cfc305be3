use std::f64::consts::PI;

use lambert_wgs84::{Point, Unit};

fn assert_close(point: &Point, x: f64, y: f64, z: f64, tolerance: f64) {
    assert!((point.x() - x).abs() < tolerance, "x: expected {x}, got {}", point.x());
    assert!((point.y() - y).abs() < tolerance, "y: expected {y}, got {}", point.y());
    assert!((point.z() - z).abs() < tolerance, "z: expected {z}, got {}", point.z());
}

#[test]
fn degree_is_identity_on_degree() {
    let mut point = Point::new(180.0, 180.0, 180.0, Unit::Degree);
    let expected = point;

    point.to_degree();

    assert_eq!(point, expected);
}

#[test]
fn radian_degree_round_trip() {
    let mut point = Point::new(2.228_389, 48.824_054, 12.5, Unit::Degree);

    point.to_radian();
    assert_eq!(point.unit(), Unit::Radian);
    assert_close(&point, 2.228_389 * PI / 180.0, 48.824_054 * PI / 180.0, 12.5 * PI / 180.0, 1e-15);

    point.to_degree();
    assert_eq!(point.unit(), Unit::Degree);
    assert_close(&point, 2.228_389, 48.824_054, 12.5, 1e-12);
}

#[test]
fn every_angular_cycle_returns_to_the_origin() {
    let units = [Unit::Degree, Unit::Grad, Unit::Radian];
    let convert = |point: &mut Point, unit: Unit| match unit {
        Unit::Degree => point.to_degree(),
        Unit::Grad => point.to_grad(),
        Unit::Radian => point.to_radian(),
        Unit::Meter => unreachable!(),
    };

    for from in units {
        for via in units {
            let mut point = Point::new(1.25, -0.5, 3.0, from);
            convert(&mut point, via);
            assert_eq!(point.unit(), via);
            convert(&mut point, from);

            assert_eq!(point.unit(), from);
            assert_close(&point, 1.25, -0.5, 3.0, 1e-12);
        }
    }
}

#[test]
fn grad_conversions() {
    let mut point = Point::new(100.0, 50.0, 0.0, Unit::Grad);
    point.to_degree();
    assert_close(&point, 90.0, 45.0, 0.0, 1e-12);

    point.to_grad();
    assert_close(&point, 100.0, 50.0, 0.0, 1e-12);

    point.to_radian();
    assert_close(&point, PI / 2.0, PI / 4.0, 0.0, 1e-15);

    point.to_grad();
    assert_close(&point, 100.0, 50.0, 0.0, 1e-12);
}

#[test]
fn meter_points_are_only_retagged() {
    let mut point = Point::new(600_000.0, 2_200_000.0, 10.0, Unit::Meter);

    point.to_degree();

    assert_eq!(point.unit(), Unit::Degree);
    assert_eq!((point.x(), point.y(), point.z()), (600_000.0, 2_200_000.0, 10.0));
}

#[test]
fn parse_units() {
    assert_eq!("deg".parse::<Unit>().unwrap(), Unit::Degree);
    assert_eq!("Radians".parse::<Unit>().unwrap(), Unit::Radian);
    assert_eq!(" gon ".parse::<Unit>().unwrap(), Unit::Grad);
    assert_eq!("metre".parse::<Unit>().unwrap(), Unit::Meter);
    assert!("furlong".parse::<Unit>().is_err());
}

#[test]
fn display_point() {
    let point = Point::new(2.5, 48.75, 0.0, Unit::Degree);
    assert_eq!(point.to_string(), "2.5 48.75 0.0 degree");
}
