//! Itinerary output structures.
//!
//! Plain data with no behavior, shaped for direct JSON serialization toward
//! the rendering layer. `stops` on the itinerary itself is the total stop
//! count; each day carries its own `stops` array.

use serde::{Deserialize, Serialize};

use crate::place::Place;

/// One scheduled visit: the place plus its assigned clock time and day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledStop {
    #[serde(flatten)]
    pub place: Place,
    pub time: String,
    #[serde(rename = "_day")]
    pub day: u32,
}

/// One itinerary day. Day indices are contiguous starting at 1; a day may be
/// empty when the pool ran out before filling the trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: u32,
    pub stops: Vec<ScheduledStop>,
}

impl ItineraryDay {
    pub fn new(day: u32) -> Self {
        Self {
            day,
            stops: Vec::new(),
        }
    }
}

/// The assembled plan, fresh per request and never persisted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub name: String,
    pub days: Vec<ItineraryDay>,
    #[serde(rename = "stops")]
    pub total_stops: u32,
    #[serde(rename = "totalEntryCost")]
    pub total_entry_cost: i64,
}

impl Itinerary {
    /// The representable "nothing to plan" outcome: no days, no stops, no cost.
    pub fn empty(name: String) -> Self {
        Self {
            name,
            days: Vec::new(),
            total_stops: 0,
            total_entry_cost: 0,
        }
    }
}
