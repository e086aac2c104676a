//! Core seam for the tour planner.
//!
//! The planner is a pure function; the one pluggable piece is how distance
//! between two points is judged. Concrete apps can substitute road-network
//! estimates or simple test geometries for the great-circle default.

/// Supplies point-to-point distance for route shaping.
///
/// Inputs are (latitude, longitude) pairs in degrees.
pub trait DistanceModel {
    /// Distance between `from` and `to` in kilometers.
    fn distance_km(&self, from: (f64, f64), to: (f64, f64)) -> f64;
}
