//! Reference ellipsoids and the datum boundary.
//!
//! The rest of the crate only ever talks to a [`Datum`]: two conversions and
//! the semi-major axis. [`Ellipsoid`] is the provided implementation, using
//! closed-form transforms in both directions.

use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A reference system that maps geodetic coordinates to geocentric ones.
///
/// Angles cross this boundary in degrees, lengths in meters.
pub trait Datum: Send + Sync {
    /// Convert longitude, latitude (degrees) and altitude (meters) to
    /// geocentric `(x, y, z)` in meters.
    fn to_geocentric(&self, lon_deg: f64, lat_deg: f64, alt_m: f64) -> (f64, f64, f64);

    /// Convert geocentric `(x, y, z)` in meters to longitude, latitude
    /// (degrees) and altitude (meters).
    fn to_geodetic(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64);

    /// Equatorial radius in meters.
    fn semi_major_axis(&self) -> f64;
}

/// A biaxial reference ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    name: &'static str,
    a: f64,
    f: f64,
}

/// World Geodetic System 1984.
pub const WGS84: Ellipsoid = Ellipsoid {
    name: "WGS84",
    a: 6_378_137.0,
    f: 1.0 / 298.257_223_563,
};

// Searched linearly by `Ellipsoid::named`.
static CATALOGUE: [Ellipsoid; 6] = [
    WGS84,
    Ellipsoid {
        name: "GRS80",
        a: 6_378_137.0,
        f: 1.0 / 298.257_222_100_882_7,
    },
    Ellipsoid {
        name: "intl",
        a: 6_378_388.0,
        f: 1.0 / 297.0,
    },
    Ellipsoid {
        name: "Helmert",
        a: 6_378_200.0,
        f: 1.0 / 298.3,
    },
    Ellipsoid {
        name: "clrk66",
        a: 6_378_206.4,
        f: 1.0 / 294.978_698_2,
    },
    Ellipsoid {
        name: "clrk80",
        a: 6_378_249.145,
        f: 1.0 / 293.465,
    },
];

impl Ellipsoid {
    /// Create a user-defined ellipsoid from its semi-major axis (meters) and
    /// flattening.
    ///
    /// `a` must be finite and positive; `f` must lie in `[0, 1)`.
    pub fn new(a: f64, f: f64) -> Result<Self> {
        if !a.is_finite() || a <= 0.0 {
            return Err(Error::InvalidEllipsoid {
                parameter: "semi-major axis",
                value: a,
            });
        }
        if !(0.0..1.0).contains(&f) {
            return Err(Error::InvalidEllipsoid {
                parameter: "flattening",
                value: f,
            });
        }
        Ok(Self { name: "", a, f })
    }

    /// Create a sphere of the given radius.
    pub fn sphere(radius: f64) -> Result<Self> {
        Self::new(radius, 0.0)
    }

    /// Look up a predefined ellipsoid by name, ignoring ASCII case.
    pub fn named(name: &str) -> Result<Self> {
        CATALOGUE
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| Error::UnknownEllipsoid {
                name: name.to_string(),
            })
    }

    /// All predefined ellipsoids.
    #[must_use]
    pub fn catalogue() -> &'static [Ellipsoid] {
        &CATALOGUE
    }

    /// Catalogue name, empty for user-defined ellipsoids.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The semi-major axis, *a*.
    #[must_use]
    pub fn semi_major_axis(&self) -> f64 {
        self.a
    }

    /// The semi-minor axis, *b = a(1 - f)*.
    #[must_use]
    pub fn semi_minor_axis(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    /// The flattening, *f = (a - b) / a*.
    #[must_use]
    pub fn flattening(&self) -> f64 {
        self.f
    }

    /// The inverse flattening *1/f*, or zero for a sphere.
    #[must_use]
    pub fn inverse_flattening(&self) -> f64 {
        if self.f == 0.0 { 0.0 } else { 1.0 / self.f }
    }

    /// The squared eccentricity *e² = f(2 - f)*.
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        self.f * (2.0 - self.f)
    }

    /// The squared second eccentricity *e'² = e² / (1 - e²)*.
    #[must_use]
    pub fn second_eccentricity_squared(&self) -> f64 {
        let es = self.eccentricity_squared();
        es / (1.0 - es)
    }

    /// Radius of curvature in the prime vertical, *N*, at a geodetic
    /// latitude given in radians.
    #[must_use]
    pub fn prime_vertical_radius_of_curvature(&self, lat_rad: f64) -> f64 {
        let sin_lat = lat_rad.sin();
        self.a / (1.0 - self.eccentricity_squared() * sin_lat * sin_lat).sqrt()
    }

    /// Geodetic latitude in radians of a point at distance `p` from the polar
    /// axis and height `z`, found by bisection on the normal-line condition
    /// `p sinφ - |z| cosφ = e² N sinφ cosφ`.
    ///
    /// The root lies in `[0, π/2]` for `|z|` and takes the sign of `z`, so the
    /// result always stays within `[-π/2, π/2]`.
    fn interior_latitude(&self, p: f64, z: f64) -> f64 {
        const ITERATIONS: usize = 64;

        let e2 = self.eccentricity_squared();
        let height = z.abs();
        let (mut lo, mut hi) = (0.0_f64, FRAC_PI_2);
        for _ in 0..ITERATIONS {
            let mid = 0.5 * (lo + hi);
            let (sin_mid, cos_mid) = mid.sin_cos();
            let offset = p * sin_mid
                - height * cos_mid
                - e2 * self.prime_vertical_radius_of_curvature(mid) * sin_mid * cos_mid;
            if offset < 0.0 {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        (0.5 * (lo + hi)).copysign(z)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        WGS84
    }
}

impl Datum for Ellipsoid {
    fn to_geocentric(&self, lon_deg: f64, lat_deg: f64, alt_m: f64) -> (f64, f64, f64) {
        let lat = lat_deg.to_radians();
        let lon = lon_deg.to_radians();
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();

        let n = self.prime_vertical_radius_of_curvature(lat);
        let x = (n + alt_m) * cos_lat * cos_lon;
        let y = (n + alt_m) * cos_lat * sin_lon;
        let z = (n * (1.0 - self.eccentricity_squared()) + alt_m) * sin_lat;
        (x, y, z)
    }

    /// Bowring's closed-form inverse.
    ///
    /// Sub-millimeter for altitudes up to several hundred kilometers. Points
    /// deep inside the ellipsoid near the polar axis (`p < e²a`) are solved by
    /// bisection instead. The center maps to latitude 90 at an altitude of
    /// `-b`.
    fn to_geodetic(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        let a = self.a;
        let b = self.semi_minor_axis();
        let e2 = self.eccentricity_squared();
        let ep2 = self.second_eccentricity_squared();

        let p = x.hypot(y);
        let lon = y.atan2(x);

        let theta = (z * a).atan2(p * b);
        let (sin_theta, cos_theta) = theta.sin_cos();
        let denominator = p - e2 * a * cos_theta * cos_theta * cos_theta;
        let lat = if denominator <= 0.0 {
            self.interior_latitude(p, z)
        } else {
            (z + ep2 * b * sin_theta * sin_theta * sin_theta).atan2(denominator)
        };

        // Projected onto the normal, so it stays exact at the poles.
        let (sin_lat, cos_lat) = lat.sin_cos();
        let alt = p * cos_lat + z * sin_lat - a * (1.0 - e2 * sin_lat * sin_lat).sqrt();

        (lon.to_degrees(), lat.to_degrees(), alt)
    }

    fn semi_major_axis(&self) -> f64 {
        self.a
    }
}

impl fmt::Display for Ellipsoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "a={} rf={}", self.a, self.inverse_flattening())
        } else {
            write!(f, "{}", self.name)
        }
    }
}

impl FromStr for Ellipsoid {
    type Err = Error;

    /// Parse a catalogue name, `"<a>,<rf>"` (semi-major axis and inverse
    /// flattening, `rf = 0` for a sphere), or `"<a>"` for a sphere.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidFormat {
                context: "ellipsoid",
                detail: "empty definition".to_string(),
            });
        }

        if let Some((a, rf)) = s.split_once(',') {
            let a = parse_number(a, "semi-major axis")?;
            let rf = parse_number(rf, "inverse flattening")?;
            let f = if rf == 0.0 { 0.0 } else { 1.0 / rf };
            return Self::new(a, f);
        }

        if let Ok(radius) = s.parse::<f64>() {
            return Self::sphere(radius);
        }

        Self::named(s)
    }
}

fn parse_number(s: &str, what: &str) -> Result<f64> {
    s.trim().parse::<f64>().map_err(|e| Error::InvalidFormat {
        context: "ellipsoid",
        detail: format!("invalid {what} '{}': {e}", s.trim()),
    })
}
