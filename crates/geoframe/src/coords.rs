//! Coordinate value types.
//!
//! All three types are plain `f64` triples with the same `#[repr(C)]`
//! layout, so conversions between them and to [`DVec3`] are copies of three
//! floats.

use glam::DVec3;

/// Earth-centered Cartesian coordinates (meters), ordered `{x, y, z}`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Geocentric {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Geodetic coordinates, ordered `{longitude, latitude, altitude}`.
///
/// Longitude and latitude are in degrees, altitude in meters above the
/// ellipsoid along the local normal. Values are not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Geodetic {
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64,
}

/// Spherical coordinates for [great-circle navigation].
///
/// Same layout and units as [`Geodetic`], but read against a sphere whose
/// radius is the datum's semi-major axis.
///
/// [great-circle navigation]: https://en.wikipedia.org/wiki/Great-circle_navigation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Spherical {
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64,
}

impl Geocentric {
    /// Create a point from meters along each axis.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The x coordinate in meters.
    #[must_use]
    pub fn x(self) -> f64 {
        self.x
    }

    /// The y coordinate in meters.
    #[must_use]
    pub fn y(self) -> f64 {
        self.y
    }

    /// The z coordinate in meters.
    #[must_use]
    pub fn z(self) -> f64 {
        self.z
    }

    /// Mutable access to the x coordinate.
    pub fn x_mut(&mut self) -> &mut f64 {
        &mut self.x
    }

    /// Mutable access to the y coordinate.
    pub fn y_mut(&mut self) -> &mut f64 {
        &mut self.y
    }

    /// Mutable access to the z coordinate.
    pub fn z_mut(&mut self) -> &mut f64 {
        &mut self.z
    }

    /// The coordinates as `[x, y, z]`.
    #[must_use]
    pub fn as_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// The coordinates as a vector.
    #[must_use]
    pub fn as_dvec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// Straight-line distance to another point in meters.
    #[must_use]
    pub fn distance(self, other: Geocentric) -> f64 {
        self.as_dvec3().distance(other.as_dvec3())
    }
}

impl Geodetic {
    /// Create a point from degrees of longitude and latitude and meters of
    /// altitude.
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude,
        }
    }

    /// The longitude in degrees.
    #[must_use]
    pub fn longitude(self) -> f64 {
        self.longitude
    }

    /// The latitude in degrees.
    #[must_use]
    pub fn latitude(self) -> f64 {
        self.latitude
    }

    /// The altitude in meters.
    #[must_use]
    pub fn altitude(self) -> f64 {
        self.altitude
    }

    /// Mutable access to the longitude.
    pub fn longitude_mut(&mut self) -> &mut f64 {
        &mut self.longitude
    }

    /// Mutable access to the latitude.
    pub fn latitude_mut(&mut self) -> &mut f64 {
        &mut self.latitude
    }

    /// Mutable access to the altitude.
    pub fn altitude_mut(&mut self) -> &mut f64 {
        &mut self.altitude
    }

    /// The coordinates as `[longitude, latitude, altitude]`.
    #[must_use]
    pub fn as_array(self) -> [f64; 3] {
        [self.longitude, self.latitude, self.altitude]
    }

    /// Reinterpret as a [`Spherical`] point for navigation queries.
    #[must_use]
    pub const fn to_spherical(self) -> Spherical {
        Spherical {
            longitude: self.longitude,
            latitude: self.latitude,
            altitude: self.altitude,
        }
    }
}

impl Spherical {
    /// Create a point from degrees of longitude and latitude and meters of
    /// altitude.
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude,
        }
    }

    /// The longitude in degrees.
    #[must_use]
    pub fn longitude(self) -> f64 {
        self.longitude
    }

    /// The latitude in degrees.
    #[must_use]
    pub fn latitude(self) -> f64 {
        self.latitude
    }

    /// The altitude in meters.
    #[must_use]
    pub fn altitude(self) -> f64 {
        self.altitude
    }

    /// Mutable access to the longitude.
    pub fn longitude_mut(&mut self) -> &mut f64 {
        &mut self.longitude
    }

    /// Mutable access to the latitude.
    pub fn latitude_mut(&mut self) -> &mut f64 {
        &mut self.latitude
    }

    /// Mutable access to the altitude.
    pub fn altitude_mut(&mut self) -> &mut f64 {
        &mut self.altitude
    }

    /// The coordinates as `[longitude, latitude, altitude]`.
    #[must_use]
    pub fn as_array(self) -> [f64; 3] {
        [self.longitude, self.latitude, self.altitude]
    }

    /// Reinterpret as a [`Geodetic`] point.
    #[must_use]
    pub const fn to_geodetic(self) -> Geodetic {
        Geodetic {
            longitude: self.longitude,
            latitude: self.latitude,
            altitude: self.altitude,
        }
    }
}

impl From<Geodetic> for Spherical {
    fn from(geodetic: Geodetic) -> Self {
        geodetic.to_spherical()
    }
}

impl From<Spherical> for Geodetic {
    fn from(spherical: Spherical) -> Self {
        spherical.to_geodetic()
    }
}

impl From<DVec3> for Geocentric {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Geocentric> for DVec3 {
    fn from(g: Geocentric) -> Self {
        g.as_dvec3()
    }
}

impl From<[f64; 3]> for Geocentric {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[f64; 3]> for Geodetic {
    fn from([longitude, latitude, altitude]: [f64; 3]) -> Self {
        Self::new(longitude, latitude, altitude)
    }
}

impl From<[f64; 3]> for Spherical {
    fn from([longitude, latitude, altitude]: [f64; 3]) -> Self {
        Self::new(longitude, latitude, altitude)
    }
}

impl From<DVec3> for Geodetic {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Geodetic> for DVec3 {
    fn from(g: Geodetic) -> Self {
        DVec3::new(g.longitude, g.latitude, g.altitude)
    }
}

impl From<DVec3> for Spherical {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Spherical> for DVec3 {
    fn from(s: Spherical) -> Self {
        DVec3::new(s.longitude, s.latitude, s.altitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geodetic_spherical_reinterpretation() {
        let geodetic = Geodetic::new(12.5, -33.0, 150.0);
        let spherical = Spherical::from(geodetic);
        assert_eq!(spherical.as_array(), geodetic.as_array());
        assert_eq!(Geodetic::from(spherical), geodetic);
        assert_eq!(std::mem::size_of::<Geodetic>(), std::mem::size_of::<[f64; 3]>());
        assert_eq!(std::mem::size_of::<Spherical>(), std::mem::size_of::<Geodetic>());
    }

    #[test]
    fn test_accessors() {
        let mut point = Geocentric::new(1.0, 2.0, 3.0);
        *point.y_mut() -= 1.0;
        assert_eq!((point.x(), point.y(), point.z()), (1.0, 1.0, 3.0));

        let mut geodetic = Geodetic::from([10.0, 20.0, 30.0]);
        *geodetic.altitude_mut() += 5.0;
        assert_eq!(geodetic.longitude(), 10.0);
        assert_eq!(geodetic.latitude(), 20.0);
        assert_eq!(geodetic.altitude(), 35.0);
    }

    #[test]
    fn test_dvec3_conversion() {
        let point = Geocentric::from(DVec3::new(4.0, 5.0, 6.0));
        assert_eq!(point.as_array(), [4.0, 5.0, 6.0]);
        assert_eq!(DVec3::from(point), DVec3::new(4.0, 5.0, 6.0));
        assert!((point.distance(Geocentric::new(4.0, 5.0, 7.0)) - 1.0).abs() < 1e-12);

        let geodetic = Geodetic::from(DVec3::new(-70.0, 12.0, 3.0));
        assert_eq!(DVec3::from(geodetic), DVec3::new(-70.0, 12.0, 3.0));

        let spherical = Spherical::from(DVec3::new(100.0, -45.0, 8.0));
        assert_eq!(spherical.as_array(), [100.0, -45.0, 8.0]);
        assert_eq!(DVec3::from(spherical), DVec3::new(100.0, -45.0, 8.0));
    }
}
