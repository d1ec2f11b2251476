//! Local tangent-plane frames.
//!
//! A [`LocalFrame`] is anchored at a geodetic origin. Its axes point east,
//! north and up (away from the ellipsoid center through the origin), and its
//! zero sits at the origin's geocentric radius. The rotation is computed
//! once per origin and reused for every point converted through the frame.

use std::f64::consts::FRAC_PI_2;

use glam::{DMat3, DVec3};

use crate::convert::geocentric_from_geodetic;
use crate::coords::{Geocentric, Geodetic};
use crate::ellipsoid::Datum;

/// Precomputed rotation state for one origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame {
    origin: Geodetic,
    radius: f64,
    geocentric_latitude: f64,
    rotation: DMat3,
    inverse_rotation: DMat3,
}

impl LocalFrame {
    /// Build the frame tangent to `origin`.
    ///
    /// The "up" axis follows the geocentric latitude ψ of the origin rather
    /// than the geodetic one.
    ///
    /// An origin at the ellipsoid center has no defined ψ: every conversion
    /// through the resulting frame yields NaN.
    #[must_use]
    pub fn new<D: Datum + ?Sized>(datum: &D, origin: Geodetic) -> Self {
        let vector = geocentric_from_geodetic(datum, origin).as_dvec3();
        let radius = vector.length();
        let psi = (vector.z / radius).asin();
        let lambda = origin.longitude.to_radians();

        // Rightmost rotation is applied first.
        let rotation = DMat3::from_rotation_z(-FRAC_PI_2)
            * DMat3::from_rotation_y(psi - FRAC_PI_2)
            * DMat3::from_rotation_z(-lambda);
        let inverse_rotation = DMat3::from_rotation_z(lambda)
            * DMat3::from_rotation_y(FRAC_PI_2 - psi)
            * DMat3::from_rotation_z(FRAC_PI_2);

        if psi.is_nan() {
            tracing::warn!(
                longitude = origin.longitude,
                latitude = origin.latitude,
                altitude = origin.altitude,
                radius,
                "local frame origin has no geocentric latitude; conversions will be NaN"
            );
        } else {
            tracing::debug!(
                longitude = origin.longitude,
                latitude = origin.latitude,
                altitude = origin.altitude,
                radius,
                geocentric_latitude = psi.to_degrees(),
                "built local frame"
            );
        }

        Self {
            origin,
            radius,
            geocentric_latitude: psi,
            rotation,
            inverse_rotation,
        }
    }

    /// Convert a geocentric point into this frame.
    #[must_use]
    pub fn to_local(&self, geocentric: Geocentric) -> DVec3 {
        let mut local = self.rotation * geocentric.as_dvec3();
        local.z -= self.radius;
        local
    }

    /// Convert a point in this frame back to geocentric coordinates.
    #[must_use]
    pub fn to_geocentric(&self, mut local: DVec3) -> Geocentric {
        local.z += self.radius;
        Geocentric::from(self.inverse_rotation * local)
    }

    /// Convert many geocentric points through the same frame.
    pub fn to_local_all<I>(&self, points: I) -> impl Iterator<Item = DVec3>
    where
        I: IntoIterator<Item = Geocentric>,
    {
        points.into_iter().map(|p| self.to_local(p))
    }

    /// Convert many local points back to geocentric coordinates.
    pub fn to_geocentric_all<I>(&self, points: I) -> impl Iterator<Item = Geocentric>
    where
        I: IntoIterator<Item = DVec3>,
    {
        points.into_iter().map(|l| self.to_geocentric(l))
    }

    /// The geodetic origin this frame was built for.
    #[must_use]
    pub fn origin(&self) -> Geodetic {
        self.origin
    }

    /// Distance from the ellipsoid center to the origin, in meters.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Geocentric latitude of the origin, in degrees.
    #[must_use]
    pub fn geocentric_latitude(&self) -> f64 {
        self.geocentric_latitude.to_degrees()
    }

    /// Rotation from geocentric axes to local axes.
    #[must_use]
    pub fn rotation(&self) -> DMat3 {
        self.rotation
    }

    /// Rotation from local axes to geocentric axes.
    #[must_use]
    pub fn inverse_rotation(&self) -> DMat3 {
        self.inverse_rotation
    }
}

/// Generate a function converting geocentric points to the local frame at
/// `origin`.
///
/// The returned closure owns its rotation state and does not borrow `datum`.
pub fn local_from_geocentric<D: Datum + ?Sized>(
    datum: &D,
    origin: Geodetic,
) -> impl Fn(Geocentric) -> DVec3 + Copy + Send + Sync + use<D> {
    let frame = LocalFrame::new(datum, origin);
    move |geocentric| frame.to_local(geocentric)
}

/// Generate a function converting points in the local frame at `origin` back
/// to geocentric coordinates.
///
/// Exactly inverts the function from [`local_from_geocentric`] for the same
/// origin.
pub fn geocentric_from_local<D: Datum + ?Sized>(
    datum: &D,
    origin: Geodetic,
) -> impl Fn(DVec3) -> Geocentric + Copy + Send + Sync + use<D> {
    let frame = LocalFrame::new(datum, origin);
    move |local| frame.to_geocentric(local)
}
