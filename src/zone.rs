use std::{collections::HashMap, fmt::Display, str::FromStr};

use lazy_static::lazy_static;

use crate::{
    constants::{E_CLARK_IGN, E_WGS84, GREENWICH_MERIDIAN, IERS_MERIDIAN, PARIS_MERIDIAN},
    projections::geocentric::Ellipsoid,
    Error, ParseCoord, ThisOrThat,
};

/// Projection constants of a Lambert zone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LambertParams {
    /// Exponent of the cone
    pub n: f64,
    /// Projection constant
    pub c: f64,
    /// False easting of the pole
    pub xs: f64,
    /// False northing of the pole
    pub ys: f64,
}

#[allow(clippy::unreadable_literal)]
const LAMBERT_I: LambertParams = LambertParams { n: 0.7604059656, c: 11603796.98, xs: 600000.0, ys: 5657616.674 };
#[allow(clippy::unreadable_literal)]
const LAMBERT_II: LambertParams = LambertParams { n: 0.7289686274, c: 11745793.39, xs: 600000.0, ys: 6199695.768 };
#[allow(clippy::unreadable_literal)]
const LAMBERT_III: LambertParams = LambertParams { n: 0.6959127966, c: 11947992.52, xs: 600000.0, ys: 6791905.085 };
#[allow(clippy::unreadable_literal)]
const LAMBERT_IV: LambertParams = LambertParams { n: 0.6712679322, c: 12136281.99, xs: 234.358, ys: 7239161.542 };
#[allow(clippy::unreadable_literal)]
const LAMBERT_II_E: LambertParams = LambertParams { n: 0.7289686274, c: 11745793.39, xs: 600000.0, ys: 8199695.768 };
#[allow(clippy::unreadable_literal)]
const LAMBERT_93: LambertParams = LambertParams { n: 0.7256077650, c: 11754255.426, xs: 700000.0, ys: 12655612.050 };

/// One of the six French Lambert projection zones.
///
/// Zones I to IV and II étendu are defined on the NTF datum (Clark 1880 IGN
/// ellipsoid). Lambert 93 is defined on RGF93, which is WGS84 compatible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Zone {
    LambertI,
    LambertII,
    LambertIII,
    LambertIV,
    LambertIIe,
    Lambert93,
}

impl Zone {
    pub const ALL: [Zone; 6] = [
        Zone::LambertI,
        Zone::LambertII,
        Zone::LambertIII,
        Zone::LambertIV,
        Zone::LambertIIe,
        Zone::Lambert93,
    ];

    /// Returns the projection constants of the zone.
    ///
    /// # Example
    /// ```
    /// use lambert_wgs84::Zone;
    ///
    /// let params = Zone::Lambert93.params();
    /// assert_eq!(params.xs, 700000.0);
    /// assert_eq!(Zone::LambertII.params().n, Zone::LambertIIe.params().n);
    /// ```
    pub const fn params(self) -> &'static LambertParams {
        match self {
            Zone::LambertI => &LAMBERT_I,
            Zone::LambertII => &LAMBERT_II,
            Zone::LambertIII => &LAMBERT_III,
            Zone::LambertIV => &LAMBERT_IV,
            Zone::LambertIIe => &LAMBERT_II_E,
            Zone::Lambert93 => &LAMBERT_93,
        }
    }

    /// Whether the zone is defined directly on the WGS84 ellipsoid, so that
    /// no datum shift is needed.
    pub const fn is_wgs84_native(self) -> bool {
        matches!(self, Zone::Lambert93)
    }

    /// Ellipsoid the zone's geographic coordinates refer to.
    pub fn ellipsoid(self) -> Ellipsoid {
        self.is_wgs84_native().ternary(Ellipsoid::WGS84, Ellipsoid::CLARK_IGN)
    }

    /// Eccentricity used by the projection formulas of the zone.
    pub fn eccentricity(self) -> f64 {
        self.is_wgs84_native().ternary(E_WGS84, E_CLARK_IGN)
    }

    /// Meridian the inverse projection measures longitudes from.
    pub(crate) fn inverse_meridian(self) -> f64 {
        self.is_wgs84_native().ternary(IERS_MERIDIAN, PARIS_MERIDIAN)
    }

    /// Meridian the forward projection measures longitudes from.
    pub(crate) fn forward_meridian(self) -> f64 {
        self.is_wgs84_native().ternary(IERS_MERIDIAN, GREENWICH_MERIDIAN)
    }

    /// EPSG code of the projected coordinate system.
    ///
    /// # Example
    /// ```
    /// use lambert_wgs84::Zone;
    ///
    /// assert_eq!(Zone::Lambert93.epsg(), 2154);
    /// assert_eq!(Zone::LambertIIe.epsg(), 27572);
    /// ```
    pub const fn epsg(self) -> u32 {
        match self {
            Zone::LambertI => 27561,
            Zone::LambertII => 27562,
            Zone::LambertIII => 27563,
            Zone::LambertIV => 27564,
            Zone::LambertIIe => 27572,
            Zone::Lambert93 => 2154,
        }
    }

    /// Finds the zone of an EPSG code.
    pub fn from_epsg(code: u32) -> Option<Zone> {
        Zone::ALL.into_iter().find(|zone| zone.epsg() == code)
    }
}

lazy_static! {
    static ref ZONE_NAMES: HashMap<&'static str, Zone> = {
        let mut names = HashMap::new();
        for (zone, aliases) in [
            (Zone::LambertI, &["lamberti", "lambert1", "i", "1", "nord"][..]),
            (Zone::LambertII, &["lambertii", "lambert2", "ii", "2", "centre"][..]),
            (Zone::LambertIII, &["lambertiii", "lambert3", "iii", "3", "sud"][..]),
            (Zone::LambertIV, &["lambertiv", "lambert4", "iv", "4", "corse"][..]),
            (Zone::LambertIIe, &["lambertiie", "lambert2e", "iie", "2e", "iietendu", "lambertiietendu", "etendu"][..]),
            (Zone::Lambert93, &["lambert93", "93", "l93", "rgf93"][..]),
        ] {
            for alias in aliases {
                names.insert(*alias, zone);
            }
        }
        names
    };
}

impl ParseCoord for Zone {
    /// Parses a zone name such as `"Lambert II étendu"`, `"IIe"`, `"93"` or
    /// an EPSG code such as `"EPSG:2154"`. Case, spaces, dashes and
    /// underscores are ignored.
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let key = value
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| match c {
                'é' | 'É' => 'e',
                other => other.to_ascii_lowercase(),
            })
            .collect::<String>();

        if let Some(code) = key.strip_prefix("epsg:") {
            return code
                .parse()
                .ok()
                .and_then(Zone::from_epsg)
                .ok_or_else(|| Error::InvalidZone(value.to_string()));
        }

        ZONE_NAMES
            .get(key.as_str())
            .copied()
            .ok_or_else(|| Error::InvalidZone(value.to_string()))
    }
}

impl FromStr for Zone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Zone::parse_coord(s)
    }
}

impl Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::LambertI => "Lambert I",
            Zone::LambertII => "Lambert II",
            Zone::LambertIII => "Lambert III",
            Zone::LambertIV => "Lambert IV",
            Zone::LambertIIe => "Lambert II étendu",
            Zone::Lambert93 => "Lambert 93",
        };
        f.write_str(name)
    }
}
