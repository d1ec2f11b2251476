//! Great-circle navigation on the datum's reference sphere.
//!
//! The sphere radius is the datum's semi-major axis. Formulas are closed-form
//! and never fail; near their singularities they lose precision or return
//! NaN, as noted on each function.

use crate::coords::Spherical;
use crate::ellipsoid::Datum;

/// Trigonometric terms shared by the distance and bearing formulas.
struct Legs {
    sin_phi1: f64,
    cos_phi1: f64,
    sin_phi2: f64,
    cos_phi2: f64,
    sin_dlambda: f64,
    cos_dlambda: f64,
}

impl Legs {
    fn new(departure: Spherical, arrival: Spherical) -> Self {
        let (sin_phi1, cos_phi1) = departure.latitude.to_radians().sin_cos();
        let (sin_phi2, cos_phi2) = arrival.latitude.to_radians().sin_cos();
        let dlambda = arrival.longitude.to_radians() - departure.longitude.to_radians();
        let (sin_dlambda, cos_dlambda) = dlambda.sin_cos();
        Self {
            sin_phi1,
            cos_phi1,
            sin_phi2,
            cos_phi2,
            sin_dlambda,
            cos_dlambda,
        }
    }

    /// `cosφ1·sinφ2 − sinφ1·cosφ2·cosΔλ`
    fn north_component(&self) -> f64 {
        self.cos_phi1 * self.sin_phi2 - self.sin_phi1 * self.cos_phi2 * self.cos_dlambda
    }

    /// `cosφ2·sinΔλ`
    fn east_component(&self) -> f64 {
        self.cos_phi2 * self.sin_dlambda
    }
}

/// Great-circle distance in meters between two points, ignoring altitude.
///
/// Single-arctangent form of the spherical law of cosines. Past a quarter
/// circle the denominator turns negative and the result goes negative; it is
/// only reliable well short of antipodal separations.
#[must_use]
pub fn great_circle_distance<D: Datum + ?Sized>(
    departure: Spherical,
    arrival: Spherical,
    datum: &D,
) -> f64 {
    let legs = Legs::new(departure, arrival);
    let b = legs.north_component();
    let c = legs.east_component();
    let d = legs.sin_phi1 * legs.sin_phi2 + legs.cos_phi1 * legs.cos_phi2 * legs.cos_dlambda;
    let sigma = ((b * b + c * c).sqrt() / d).atan();
    datum.semi_major_axis() * sigma
}

/// Great-circle distance combined with the altitude difference.
///
/// Treats the two as orthogonal legs; a good approximation only while the
/// altitude difference is small against the sphere radius.
#[must_use]
pub fn length<D: Datum + ?Sized>(departure: Spherical, arrival: Spherical, datum: &D) -> f64 {
    let surface = great_circle_distance(departure, arrival, datum);
    let climb = arrival.altitude - departure.altitude;
    surface.hypot(climb)
}

/// Initial bearing from `departure` toward `arrival`, in degrees.
///
/// Uses the single-argument arctangent, so the result lies in [-90, 90] and
/// carries no quadrant information: a course due south reads as 0, and a
/// south-easterly course reads as a negative angle. Coincident points and
/// departures from a pole give NaN or meaningless values.
#[must_use]
pub fn initial_bearing(departure: Spherical, arrival: Spherical) -> f64 {
    let legs = Legs::new(departure, arrival);
    (legs.east_component() / legs.north_component())
        .atan()
        .to_degrees()
}

/// Bearing at which the great circle through `point` on heading
/// `bearing_deg` crosses the equator (Clairaut's relation), in degrees.
#[must_use]
pub fn equatorial_crossing_bearing(point: Spherical, bearing_deg: f64) -> f64 {
    let (sin_alpha, cos_alpha) = bearing_deg.to_radians().sin_cos();
    let (sin_phi, cos_phi) = point.latitude.to_radians().sin_cos();
    let tan_alpha0 = sin_alpha * cos_phi
        / (cos_alpha * cos_alpha + sin_alpha * sin_alpha * sin_phi * sin_phi).sqrt();
    tan_alpha0.atan().to_degrees()
}

impl Spherical {
    /// See [`great_circle_distance`].
    #[must_use]
    pub fn great_circle_distance_to<D: Datum + ?Sized>(self, arrival: Spherical, datum: &D) -> f64 {
        great_circle_distance(self, arrival, datum)
    }

    /// See [`length`].
    #[must_use]
    pub fn length_to<D: Datum + ?Sized>(self, arrival: Spherical, datum: &D) -> f64 {
        length(self, arrival, datum)
    }

    /// See [`initial_bearing`].
    #[must_use]
    pub fn initial_bearing_to(self, arrival: Spherical) -> f64 {
        initial_bearing(self, arrival)
    }

    /// See [`equatorial_crossing_bearing`].
    #[must_use]
    pub fn equatorial_crossing_bearing(self, bearing_deg: f64) -> f64 {
        equatorial_crossing_bearing(self, bearing_deg)
    }
}
