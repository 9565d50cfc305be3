use lambert_wgs84::{from_str, Error, Zone};

#[test]
fn parse_zone_names() {
    let cases = [
        ("Lambert I", Zone::LambertI),
        ("lambert-2", Zone::LambertII),
        ("III", Zone::LambertIII),
        ("Corse", Zone::LambertIV),
        ("Lambert II étendu", Zone::LambertIIe),
        ("LAMBERT_IIE", Zone::LambertIIe),
        ("Lambert 93", Zone::Lambert93),
        ("93", Zone::Lambert93),
        ("EPSG:27572", Zone::LambertIIe),
        ("epsg:2154", Zone::Lambert93),
    ];

    for (name, expected) in cases {
        let zone: Zone = from_str(name).unwrap();
        assert_eq!(zone, expected, "parsing {name}");
        assert_eq!(name.parse::<Zone>().unwrap(), expected);
    }
}

#[test]
fn reject_unknown_zones() {
    for name in ["Lambert 5", "", "EPSG:4326", "EPSG:abc"] {
        match name.parse::<Zone>() {
            Err(Error::InvalidZone(value)) => assert_eq!(value, name),
            other => panic!("{name} parsed as {other:?}"),
        }
    }
}

#[test]
fn epsg_codes_round_trip() {
    for zone in Zone::ALL {
        assert_eq!(Zone::from_epsg(zone.epsg()), Some(zone));
        assert_eq!(zone.to_string().parse::<Zone>().unwrap(), zone);
    }
    assert_eq!(Zone::from_epsg(4326), None);
}

#[test]
fn only_lambert93_is_wgs84_native() {
    for zone in Zone::ALL {
        assert_eq!(zone.is_wgs84_native(), zone == Zone::Lambert93);
    }
    assert_eq!(Zone::Lambert93.ellipsoid().a, 6_378_137.0);
    assert_eq!(Zone::LambertIV.ellipsoid().a, 6_378_249.2);
}

#[test]
fn extended_zone_shares_lambert_ii_cone() {
    let ii = Zone::LambertII.params();
    let ii_e = Zone::LambertIIe.params();

    assert_eq!(ii.n, ii_e.n);
    assert_eq!(ii.c, ii_e.c);
    assert!((ii_e.ys - ii.ys - 2_000_000.0).abs() < 1e-6);
}
