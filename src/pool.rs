//! Candidate pool preparation.
//!
//! The planner assumes a pool that is already visitable: every place has
//! usable coordinates and is open for the whole trip. This module is that
//! upstream step.

use tracing::debug;

use crate::place::Place;
use crate::trip::TripDates;

/// Why a candidate was dropped from the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    /// No coordinates on record.
    MissingCoordinates,
    /// Coordinates outside the valid latitude/longitude ranges.
    InvalidCoordinates,
    /// A closure period overlaps the trip dates.
    Closed,
}

#[derive(Debug, Clone)]
pub struct ExcludedPlace {
    pub place: Place,
    pub reason: ExclusionReason,
}

/// Outcome of pool preparation: what the planner may schedule, and what was
/// dropped and why.
#[derive(Debug, Clone, Default)]
pub struct PreparedPool {
    pub eligible: Vec<Place>,
    pub excluded: Vec<ExcludedPlace>,
}

/// Filter raw candidates down to the pool the planner may schedule.
///
/// Relative order of eligible places is preserved; the planner's tie-breaks
/// depend on it. Without trip dates only the coordinate checks apply.
pub fn prepare(candidates: Vec<Place>, dates: Option<&TripDates>) -> PreparedPool {
    let mut pool = PreparedPool {
        eligible: Vec::with_capacity(candidates.len()),
        excluded: Vec::new(),
    };

    for place in candidates {
        match eligibility(&place, dates) {
            None => pool.eligible.push(place),
            Some(reason) => {
                debug!(id = %place.id, ?reason, "excluding candidate");
                pool.excluded.push(ExcludedPlace { place, reason });
            }
        }
    }

    debug!(
        eligible = pool.eligible.len(),
        excluded = pool.excluded.len(),
        "pool prepared"
    );

    pool
}

fn eligibility(place: &Place, dates: Option<&TripDates>) -> Option<ExclusionReason> {
    let Some(coordinates) = place.coordinates else {
        return Some(ExclusionReason::MissingCoordinates);
    };
    if !coordinates.is_valid() {
        return Some(ExclusionReason::InvalidCoordinates);
    }

    if let Some(dates) = dates {
        let (start, end) = (dates.start, dates.end());
        if place
            .closure_periods
            .iter()
            .any(|closure| closure.intersects(start, end))
        {
            return Some(ExclusionReason::Closed);
        }
    }

    None
}
