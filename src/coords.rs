//! Geodetic coordinates and great-circle math

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean Earth radius [m]
pub const EARTH_RADIUS_M: f64 = 6_371_000.0_f64;

/// Geodetic position in decimal degrees. Immutable value.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    /// Latitude [ddeg]
    pub latitude: f64,
    /// Longitude [ddeg]
    pub longitude: f64,
}

impl Coordinate {
    /// Builds new [Coordinate] from (latitude [ddeg], longitude [ddeg]).
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
    /// True if both components are finite degrees.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
    /// Haversine great-circle distance [m] to given [Coordinate].
    /// Symmetric, and zero for identical coordinates.
    pub fn distance_m(&self, rhs: &Self) -> f64 {
        let (lat1, lat2) = (self.latitude.to_radians(), rhs.latitude.to_radians());
        let dlat = (rhs.latitude - self.latitude).to_radians();
        let dlon = (rhs.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }
    /// Initial (forward azimuth) bearing [ddeg] along the great-circle
    /// path towards given [Coordinate], normalized to [0, 360).
    pub fn bearing_deg(&self, rhs: &Self) -> f64 {
        let (lat1, lat2) = (self.latitude.to_radians(), rhs.latitude.to_radians());
        let dlon = (rhs.longitude - self.longitude).to_radians();

        let y = dlon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
        wrap_360(y.atan2(x).to_degrees())
    }
}

/// Maps an angle [ddeg] into [0, 360).
pub fn wrap_360(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid(-1e-15, 360.0) returns 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Maps an angular difference [ddeg] into (-180, 180],
/// the shortest path around the circle.
pub fn wrap_180(deg: f64) -> f64 {
    let wrapped = wrap_360(deg);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}
