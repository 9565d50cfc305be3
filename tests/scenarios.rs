use lambert_wgs84::{
    projections::{
        geocentric::{geographic_to_cartesian, lambert_normal, Ellipsoid},
        lambert_conformal_conic::LambertConformalConic,
    },
    constants::{E_CLARK_IGN, GREENWICH_MERIDIAN},
    Point, Tolerance, Unit, Zone,
};

#[test]
fn geographic_to_cartesian_reference_points() {
    let ellipsoid = Ellipsoid::new(6_378_249.2, 0.082_483_256_79);
    let cases = [
        ((0.017_453_292_48, 0.020_362_174_57, 100.0), (6_376_064.6955, 111_294.6230, 128_984.7250)),
        ((0.002_908_882_12, 0.0, 10.0), (6_378_232.2149, 18_553.5780, 0.0)),
        ((0.005_817_764_23, -0.031_997_703, 2000.0), (6_376_897.5369, 37_099.7050, -202_730.9070)),
    ];

    for ((lon, lat, height), (x_ref, y_ref, z_ref)) in cases {
        let (x, y, z) = geographic_to_cartesian(lon, lat, height, &ellipsoid);

        assert!((x - x_ref).abs() < 1e-4, "X: expected {x_ref}, computed {x}");
        assert!((y - y_ref).abs() < 1e-3, "Y: expected {y_ref}, computed {y}");
        assert!((z - z_ref).abs() < 1e-3, "Z: expected {z_ref}, computed {z}");
    }
}

#[test]
fn lambert_normal_reference_point() {
    let n = lambert_normal(0.977_384_381, 6_378_388.0, 0.081_991_89);
    assert!((n - 6_393_174.9755).abs() < 1e-4, "computed {n}");
}

#[test]
fn lambert_i_inverse_projection() {
    let tolerance = Tolerance::new(1e-9, 100).unwrap();
    let lcc = LambertConformalConic::new(Zone::LambertI);

    let (lon, lat) = lcc
        .unproject(1_029_705.083, 272_723.849, GREENWICH_MERIDIAN, E_CLARK_IGN, &tolerance)
        .unwrap();

    assert!((lon - 0.145_512_099).abs() < 1e-9, "lon {lon}");
    assert!((lat - 0.872_664_626).abs() < 1e-9, "lat {lat}");
}

#[test]
fn lambert93_to_wgs84() {
    let mut point = Point::new(668_832.5384, 6_950_138.7285, 0.0, Unit::Meter);

    point.to_wgs84(Zone::Lambert93).unwrap();
    assert_eq!(point.unit(), Unit::Radian);

    point.to_degree();
    assert_eq!(point.unit(), Unit::Degree);
    assert!((point.x() - 2.56865).abs() < 1e-5, "lon {}", point.x());
    assert!((point.y() - 49.64961).abs() < 1e-5, "lat {}", point.y());
    assert_eq!(point.z(), 0.0);
}

#[test]
fn round_trip_every_zone() {
    for zone in Zone::ALL {
        let mut point = Point::new(2.228_389, 48.824_054, 0.0, Unit::Degree);

        point.to_radian();
        point.to_lambert(zone).unwrap();
        assert_eq!(point.unit(), Unit::Meter);

        point.to_wgs84(zone).unwrap();
        point.to_degree();

        assert!((point.x() - 2.228_389).abs() < 1e-3, "{zone}: lon {}", point.x());
        assert!((point.y() - 48.824_054).abs() < 1e-3, "{zone}: lat {}", point.y());
    }
}

#[test]
fn round_trip_over_mainland_france() {
    for lon in [-1.0, 2.0, 5.0, 7.5] {
        for lat in [42.5, 44.0, 46.0, 48.0, 50.5] {
            for zone in Zone::ALL {
                let mut point = Point::new(lon, lat, 0.0, Unit::Degree);
                point.to_radian();
                point.to_lambert(zone).unwrap();
                point.to_wgs84(zone).unwrap();
                point.to_degree();

                assert!((point.x() - lon).abs() < 1e-3, "{zone} ({lon}, {lat}): lon {}", point.x());
                assert!((point.y() - lat).abs() < 1e-3, "{zone} ({lon}, {lat}): lat {}", point.y());
            }
        }
    }
}

#[test]
fn lambert93_round_trip_is_exact_to_the_millimeter() {
    let mut point = Point::new(643_349.5513, 6_858_498.1811, 35.0, Unit::Meter);
    let original = point;

    point.to_wgs84(Zone::Lambert93).unwrap();
    point.to_lambert(Zone::Lambert93).unwrap();

    assert!((point.x() - original.x()).abs() < 1e-3);
    assert!((point.y() - original.y()).abs() < 1e-3);
    assert_eq!(point.z(), 35.0);
}

#[test]
fn legacy_zone_applies_datum_shift() {
    // Near Paris the NTF -> WGS84 shift lifts the ellipsoidal height by ~45 m
    let mut point = Point::new(600_000.0, 2_425_072.4042, 0.0, Unit::Meter);
    point.to_wgs84(Zone::LambertIIe).unwrap();
    assert!((point.z() - 44.73).abs() < 1e-1, "height {}", point.z());

    point.to_degree();
    assert!((point.x() - 2.336_412).abs() < 1e-5, "lon {}", point.x());
    assert!((point.y() - 48.824_019).abs() < 1e-5, "lat {}", point.y());
}
