// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Geographic observer position.

use crate::error::Error;
use qtty::Degrees;

/// An observer's geographic coordinates.
///
/// Latitude is geodetic north-positive, longitude east-positive — the
/// convention the sidereal-time formula in [`crate::sun`] expects.
/// Construction validates both ranges up front, so the solvers never see
/// coordinates that would blow up the spherical trigonometry.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Observer {
    latitude: Degrees,
    longitude: Degrees,
}

impl Observer {
    /// Create an observer, validating latitude ∈ [-90, 90] and
    /// longitude ∈ [-180, 180].
    pub fn new(latitude: Degrees, longitude: Degrees) -> Result<Self, Error> {
        let lat = latitude.value();
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(Error::InvalidLatitude(lat));
        }
        let lon = longitude.value();
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(Error::InvalidLongitude(lon));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create an observer from raw degree values.
    #[inline]
    pub fn from_degrees(latitude: f64, longitude: f64) -> Result<Self, Error> {
        Self::new(Degrees::new(latitude), Degrees::new(longitude))
    }

    /// Geodetic latitude, north-positive.
    #[inline]
    pub const fn latitude(&self) -> Degrees {
        self.latitude
    }

    /// Longitude, east-positive.
    #[inline]
    pub const fn longitude(&self) -> Degrees {
        self.longitude
    }
}

impl std::fmt::Display for Observer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} N, {} E", self.latitude, self.longitude)
    }
}
