//! Display geometry for a planned route.
//!
//! Without a routing API there is no road polyline; the route is drawn as
//! straight legs current → pickup → dropoff.

use crate::RouteEndpoints;

/// `[longitude, latitude]` vertices for current, pickup, and dropoff, in
/// that order (GeoJSON axis order).
pub fn route_geometry(endpoints: &RouteEndpoints) -> Vec<[f64; 2]> {
    [&endpoints.current, &endpoints.pickup, &endpoints.dropoff]
        .into_iter()
        .map(|p| p.coordinate.lon_lat())
        .collect()
}
