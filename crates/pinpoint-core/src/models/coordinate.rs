//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

use crate::error::{PinpointError, Result};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees, expected within [-90, 90]
    pub latitude: f64,
    /// Longitude in degrees, expected within [-180, 180]
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate without range checks.
    ///
    /// Values coming from the map surface or the geocoder are trusted as-is.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a coordinate from raw user input, rejecting values outside the
    /// valid latitude/longitude ranges.
    ///
    /// # Errors
    ///
    /// Returns `PinpointError::InvalidInput` naming the offending field.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(PinpointError::invalid_input("latitude")
                .with_reason(format!("{latitude} is outside [-90, 90]")));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(PinpointError::invalid_input("longitude")
                .with_reason(format!("{longitude} is outside [-180, 180]")));
        }
        Ok(Self::new(latitude, longitude))
    }
}
