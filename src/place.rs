//! Point-of-interest model.
//!
//! Places arrive from an external content source already shaped as JSON.
//! Deserialization is deliberately lenient where that data tends to be messy:
//! ids may be numbers or strings, entry costs may be numeric strings or junk.

use chrono::NaiveDate;
use serde::de::{Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize};

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both components finite and within [-90, 90] / [-180, 180].
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

/// Inclusive calendar range during which a place cannot be visited.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosurePeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ClosurePeriod {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self { start_date, end_date }
    }

    /// True when any date of the inclusive `[start, end]` range is closed.
    pub fn intersects(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && self.end_date >= start
    }
}

/// A candidate stop as sourced from the content repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default, deserialize_with = "lenient_cost")]
    pub entry_cost: f64,
    /// Informational only; carried through to the rendered plan.
    #[serde(default)]
    pub visit_duration_minutes: u32,
    #[serde(default)]
    pub experience_tags: Vec<String>,
    #[serde(default)]
    pub area_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub closure_periods: Vec<ClosurePeriod>,
}

impl Place {
    /// Usable (lat, lng), or None when coordinates are absent or invalid.
    pub fn location(&self) -> Option<(f64, f64)> {
        self.coordinates
            .filter(Coordinates::is_valid)
            .map(|coordinates| coordinates.as_tuple())
    }
}

/// Ids come through as strings or bare integers depending on the source.
fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Int(number) => number.to_string(),
    })
}

/// Entry costs must end up as a non-negative finite number; anything the
/// source sends that doesn't parse as one counts as free entry.
fn lenient_cost<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Other(IgnoredAny),
    }

    let cost = match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(number)) => number,
        Some(Raw::Text(text)) => text.trim().parse().unwrap_or(0.0),
        Some(Raw::Other(_)) | None => 0.0,
    };

    Ok(if cost.is_finite() && cost >= 0.0 { cost } else { 0.0 })
}
