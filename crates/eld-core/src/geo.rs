//! Geographic coordinate type and great-circle utilities.
//!
//! Coordinates are stored as `f64` degrees.  Distances are reported in
//! statute miles because every downstream quantity (fuel intervals, average
//! speed, vehicle miles on the log) is expressed in miles.

/// Mean Earth radius used for haversine distances, in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in miles.
    pub fn distance_miles(self, other: Coordinate) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_MILES * c
    }

    /// Point at `fraction` along the straight lat/lon line from `self` to
    /// `other`.  `0.0` is `self`, `1.0` is `other`; values outside `[0, 1]`
    /// extrapolate.
    ///
    /// This is a planar blend of degrees, not a great-circle waypoint.
    #[inline]
    pub fn lerp(self, other: Coordinate, fraction: f64) -> Coordinate {
        Coordinate {
            lat: self.lat + (other.lat - self.lat) * fraction,
            lon: self.lon + (other.lon - self.lon) * fraction,
        }
    }

    /// `[longitude, latitude]` pair, the axis order map renderers expect.
    #[inline]
    pub fn lon_lat(self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}
