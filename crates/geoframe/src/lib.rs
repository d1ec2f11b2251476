//! Coordinate conversions on an ellipsoidal body model.
//!
//! This crate converts points between geocentric Cartesian coordinates,
//! geodetic longitude/latitude/altitude, and local tangent-plane frames, and
//! answers great-circle distance and bearing queries on the datum's reference
//! sphere.
//!
//! # Design principles
//!
//! - **Pure**: every operation is a value-to-value transform with no shared
//!   state, safe to call from any thread
//! - **Explicit datum**: the reference ellipsoid is passed in, never global
//! - **No error plumbing in the math**: non-finite inputs and singular
//!   geometry propagate as NaN; only configuration returns [`Result`]
//!
//! # Example
//!
//! ```
//! use geoframe::{Geodetic, LocalFrame, WGS84};
//!
//! let origin = Geodetic::new(-0.1276, 51.5072, 0.0);
//! let frame = LocalFrame::new(&WGS84, origin);
//!
//! let target = Geodetic::new(-0.1270, 51.5075, 20.0).to_geocentric(&WGS84);
//! let enu = frame.to_local(target);
//! assert!(enu.z > 19.0 && enu.z < 21.0);
//!
//! let distance = origin
//!     .to_spherical()
//!     .great_circle_distance_to(Geodetic::new(2.3522, 48.8566, 0.0).into(), &WGS84);
//! assert!((distance - 344_000.0).abs() < 1_000.0);
//! ```

pub mod config;
mod convert;
mod coords;
pub mod ellipsoid;
mod error;
mod local;
pub mod navigation;

pub use config::Config;
pub use convert::{geocentric_from_geodetic, geodetic_from_geocentric};
pub use coords::{Geocentric, Geodetic, Spherical};
pub use ellipsoid::{Datum, Ellipsoid, WGS84};
pub use error::{Error, Result};
pub use local::{LocalFrame, geocentric_from_local, local_from_geocentric};

// Re-export the vector type used for local coordinates.
pub use glam::DVec3;
