//! Trip parameters supplied by the request layer.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Per-trip relevance multipliers keyed by experience tag.
///
/// Tags absent from the profile contribute nothing to a place's score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightProfile(HashMap<String, f64>);

impl WeightProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, tag: impl Into<String>, weight: f64) -> Self {
        self.set(tag, weight);
        self
    }

    pub fn set(&mut self, tag: impl Into<String>, weight: f64) {
        self.0.insert(tag.into(), weight);
    }

    pub fn weight_for(&self, tag: &str) -> f64 {
        self.0.get(tag).copied().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for WeightProfile {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(tag, weight)| (tag.into(), weight))
                .collect(),
        )
    }
}

/// Traveler profile selector; drives how densely days are packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelerType {
    Active,
    Relaxed,
    Family,
}

impl TravelerType {
    /// Active travelers take three stops per day, everyone else two.
    pub fn stops_per_day(self) -> u32 {
        match self {
            TravelerType::Active => 3,
            _ => 2,
        }
    }
}

/// Calendar span of the requested trip, used to rule out closed places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripDates {
    pub start: NaiveDate,
    pub days: u32,
}

impl TripDates {
    pub fn new(start: NaiveDate, days: u32) -> Self {
        Self { start, days }
    }

    /// Last day of the trip, inclusive.
    pub fn end(&self) -> NaiveDate {
        self.start
            .checked_add_days(Days::new(u64::from(self.days.saturating_sub(1))))
            .unwrap_or(self.start)
    }
}

/// Everything the planner needs to know about one trip request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub tour_name: String,
    pub days: u32,
    pub stops_per_day: u32,
    pub weights: WeightProfile,
}

impl TripRequest {
    pub fn new(
        tour_name: impl Into<String>,
        days: u32,
        stops_per_day: u32,
        weights: WeightProfile,
    ) -> Self {
        Self {
            tour_name: tour_name.into(),
            days,
            stops_per_day,
            weights,
        }
    }

    /// Derive the stop density from the traveler profile.
    pub fn for_traveler(
        tour_name: impl Into<String>,
        days: u32,
        traveler: TravelerType,
        weights: WeightProfile,
    ) -> Self {
        Self::new(tour_name, days, traveler.stops_per_day(), weights)
    }
}
