//! Geocentric/geodetic conversion.
//!
//! Thin, pure wrappers over a [`Datum`]. Nothing is validated: NaN and
//! infinite inputs come back out as NaN or infinite outputs.

use crate::coords::{Geocentric, Geodetic};
use crate::ellipsoid::Datum;

/// Convert geodetic `{longitude, latitude, altitude}` to geocentric
/// `{x, y, z}`.
#[must_use]
pub fn geocentric_from_geodetic<D: Datum + ?Sized>(datum: &D, geodetic: Geodetic) -> Geocentric {
    let (x, y, z) = datum.to_geocentric(geodetic.longitude, geodetic.latitude, geodetic.altitude);
    Geocentric::new(x, y, z)
}

/// Convert geocentric `{x, y, z}` to geodetic
/// `{longitude, latitude, altitude}`.
///
/// Round-trips [`geocentric_from_geodetic`] to the datum's precision for any
/// point away from the ellipsoid center.
#[must_use]
pub fn geodetic_from_geocentric<D: Datum + ?Sized>(datum: &D, geocentric: Geocentric) -> Geodetic {
    let (longitude, latitude, altitude) = datum.to_geodetic(geocentric.x, geocentric.y, geocentric.z);
    Geodetic::new(longitude, latitude, altitude)
}

impl Geodetic {
    /// See [`geocentric_from_geodetic`].
    #[must_use]
    pub fn to_geocentric<D: Datum + ?Sized>(self, datum: &D) -> Geocentric {
        geocentric_from_geodetic(datum, self)
    }
}

impl Geocentric {
    /// See [`geodetic_from_geocentric`].
    #[must_use]
    pub fn to_geodetic<D: Datum + ?Sized>(self, datum: &D) -> Geodetic {
        geodetic_from_geocentric(datum, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ellipsoid::WGS84;

    // Reference points from https://www.ngs.noaa.gov/NCAT/
    const POINT_0: Geocentric = Geocentric::new(6_378_137.000, 0.0, 0.0);
    const POINT_45: Geocentric = Geocentric::new(4_517_590.879, 0.0, 4_487_348.409);
    const POINT_90E: Geocentric = Geocentric::new(0.0, 6_378_137.000, 0.0);

    /// Allowed round-trip displacement in meters.
    const ERROR_CRITERION: f64 = 1.0;

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    fn assert_round_trip(point: Geocentric) {
        let geodetic = geodetic_from_geocentric(&WGS84, point);
        let back = geocentric_from_geodetic(&WGS84, geodetic);
        let error = point.distance(back);
        assert!(
            error <= ERROR_CRITERION,
            "round trip of {point:?} via {geodetic:?} drifted {error} m"
        );
    }

    #[test]
    fn test_round_trip_reference_points() {
        assert_round_trip(POINT_0);
        assert_round_trip(POINT_45);
        assert_round_trip(POINT_90E);
    }

    #[test]
    fn test_geodetic_from_reference_points() {
        let g = geodetic_from_geocentric(&WGS84, POINT_0);
        assert_close(g.longitude, 0.0, 1e-12);
        assert_close(g.latitude, 0.0, 1e-12);
        assert_close(g.altitude, 0.0, 1e-6);

        let g = geodetic_from_geocentric(&WGS84, POINT_45);
        assert_close(g.longitude, 0.0, 1e-12);
        assert_close(g.latitude, 45.0, 1e-6);
        assert_close(g.altitude, 0.0, 1e-2);

        let g = geodetic_from_geocentric(&WGS84, POINT_90E);
        assert_close(g.longitude, 90.0, 1e-12);
        assert_close(g.latitude, 0.0, 1e-12);
        assert_close(g.altitude, 0.0, 1e-6);
    }

    #[test]
    fn test_origin_equator_prime_meridian() {
        let c = Geodetic::new(0.0, 0.0, 0.0).to_geocentric(&WGS84);
        assert_close(c.x, 6_378_137.0, 1e-6);
        assert_close(c.y, 0.0, 1e-6);
        assert_close(c.z, 0.0, 1e-6);
    }

    #[test]
    fn test_methods_match_free_functions() {
        let g = Geodetic::new(-71.06, 42.36, 43.0);
        assert_eq!(g.to_geocentric(&WGS84), geocentric_from_geodetic(&WGS84, g));
        let c = g.to_geocentric(&WGS84);
        assert_eq!(c.to_geodetic(&WGS84), geodetic_from_geocentric(&WGS84, c));
    }

    #[test]
    fn test_dyn_datum() {
        let datum: &dyn Datum = &WGS84;
        let c = geocentric_from_geodetic(datum, Geodetic::new(0.0, 0.0, 0.0));
        assert_close(c.x, 6_378_137.0, 1e-6);
    }

    #[test]
    fn test_infinite_input_propagates() {
        let c = geocentric_from_geodetic(&WGS84, Geodetic::new(0.0, 0.0, f64::INFINITY));
        assert!(c.x.is_infinite());
    }
}
