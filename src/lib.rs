//! tour-planner core
//!
//! Assembles multi-day tour itineraries from tagged, geolocated points of
//! interest: relevance scoring against a weight profile, greedy
//! nearest-neighbor chaining, day and time-slot partitioning, cost totals.

pub mod traits;
pub mod planner;
pub mod pool;
pub mod place;
pub mod trip;
pub mod itinerary;
pub mod haversine;
