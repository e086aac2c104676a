//! Great-circle distance model (Haversine).
//!
//! Straight-line distance over the sphere. Ignores roads, which is fine for
//! chaining nearby stops within a town or a lake shore.

use crate::traits::DistanceModel;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine-based distance model.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreatCircle;

impl GreatCircle {
    /// Haversine distance between two (lat, lng) degree pairs, in kilometers.
    pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lat1, lng1) = from;
        let (lat2, lng2) = to;

        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let delta_lat = (lat2 - lat1).to_radians();
        let delta_lng = (lng2 - lng1).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

impl DistanceModel for GreatCircle {
    fn distance_km(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        Self::haversine_km(from, to)
    }
}
