//! Datum configuration.
//!
//! Applications that do not hard-code a datum can read it from the
//! environment. The value accepts anything [`Ellipsoid::from_str`] does.

use std::env::VarError;
use std::str::FromStr;

use crate::ellipsoid::{Ellipsoid, WGS84};
use crate::error::{Error, Result};

/// Environment variable holding the ellipsoid definition.
pub const ELLIPSOID_ENV: &str = "GEOFRAME_ELLIPSOID";

/// Resolved configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Datum every conversion and navigation query runs against.
    pub ellipsoid: Ellipsoid,
}

impl Default for Config {
    fn default() -> Self {
        Self { ellipsoid: WGS84 }
    }
}

impl Config {
    /// Read the configuration from the process environment.
    ///
    /// Unset or empty variables fall back to the defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_var(std::env::var(ELLIPSOID_ENV))
    }

    fn from_var(var: std::result::Result<String, VarError>) -> Result<Self> {
        match var {
            Ok(value) => Self::from_lookup(|_| Some(value.clone())),
            Err(VarError::NotPresent) => Self::from_lookup(|_| None),
            Err(VarError::NotUnicode(raw)) => Err(Error::InvalidFormat {
                context: "environment",
                detail: format!("{ELLIPSOID_ENV} is not valid unicode: {raw:?}"),
            }),
        }
    }

    /// Resolve the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ELLIPSOID_ENV).filter(|v| !v.trim().is_empty()) {
            config.ellipsoid = Ellipsoid::from_str(&value)?;
        }

        tracing::debug!(
            ellipsoid = %config.ellipsoid,
            semi_major_axis = config.ellipsoid.semi_major_axis(),
            flattening = config.ellipsoid.flattening(),
            "resolved datum"
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_wgs84() {
        assert_eq!(Config::default().ellipsoid, WGS84);
        assert_eq!(Config::from_lookup(|_| None).unwrap(), Config::default());
    }

    #[test]
    fn test_blank_value_uses_default() {
        let config = Config::from_lookup(|_| Some("   ".to_string())).unwrap();
        assert_eq!(config.ellipsoid, WGS84);
    }

    #[test]
    fn test_named_value() {
        let config = Config::from_lookup(|key| {
            assert_eq!(key, ELLIPSOID_ENV);
            Some("clrk66".to_string())
        })
        .unwrap();
        assert_eq!(config.ellipsoid.name(), "clrk66");
    }

    #[test]
    fn test_custom_value() {
        let config = Config::from_lookup(|_| Some("6371000,0".to_string())).unwrap();
        assert_eq!(config.ellipsoid.flattening(), 0.0);
        assert_eq!(config.ellipsoid.semi_major_axis(), 6_371_000.0);
    }

    #[test]
    fn test_environment_variable_states() {
        assert_eq!(Config::from_var(Err(VarError::NotPresent)).unwrap(), Config::default());

        let config = Config::from_var(Ok("GRS80".to_string())).unwrap();
        assert_eq!(config.ellipsoid.name(), "GRS80");

        let raw = std::ffi::OsString::from("wgs\u{fffd}84");
        let result = Config::from_var(Err(VarError::NotUnicode(raw)));
        match result {
            Err(Error::InvalidFormat { context, detail }) => {
                assert_eq!(context, "environment");
                assert!(detail.contains(ELLIPSOID_ENV), "{detail}");
            }
            other => panic!("expected an invalid format error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let result = Config::from_lookup(|_| Some("airy".to_string()));
        assert!(matches!(result, Err(Error::UnknownEllipsoid { .. })));
    }
}
