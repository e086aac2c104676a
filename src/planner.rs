//! Itinerary planner.
//!
//! Pure function from (trip request, candidate pool) to a day-partitioned
//! plan: score against the weight profile, rank, chain stops by proximity,
//! slice into days, assign slot times, total the entry costs.
//!
//! The proximity chain is a greedy nearest-neighbor construction with no
//! lookahead or backtracking. That keeps daily legs short for the pool sizes
//! this runs on (tens to low hundreds of places); a spatial index would be
//! needed before pools grow into the thousands.

use tracing::debug;

use crate::haversine::GreatCircle;
use crate::itinerary::{Itinerary, ItineraryDay, ScheduledStop};
use crate::place::Place;
use crate::traits::DistanceModel;
use crate::trip::{TripRequest, WeightProfile};

/// Fixed visit times per day for the recognized stop densities.
const THREE_STOP_SLOTS: [&str; 3] = ["10:00", "14:30", "17:30"];
const TWO_STOP_SLOTS: [&str; 2] = ["11:00", "16:00"];
/// Assigned past the slot table, and for unrecognized densities.
const OVERFLOW_SLOT: &str = "18:00";

/// Assemble an itinerary using great-circle distances.
pub fn plan(request: &TripRequest, pool: &[Place]) -> Itinerary {
    plan_with(request, pool, &GreatCircle)
}

/// Assemble an itinerary with a caller-chosen distance model.
pub fn plan_with<D: DistanceModel>(request: &TripRequest, pool: &[Place], distance: &D) -> Itinerary {
    let needed = (request.days as usize)
        .saturating_mul(request.stops_per_day as usize)
        .min(pool.len());
    if needed == 0 {
        return Itinerary::empty(request.tour_name.clone());
    }

    debug!(
        pool = pool.len(),
        needed,
        days = request.days,
        stops_per_day = request.stops_per_day,
        "planning itinerary"
    );

    let selected = select(pool, needed, &request.weights, distance);
    build(request, pool, &selected)
}

/// Relevance of a place under the requested weight profile.
fn score(place: &Place, weights: &WeightProfile) -> f64 {
    place
        .experience_tags
        .iter()
        .map(|tag| weights.weight_for(tag))
        .sum()
}

/// Pick `needed` pool indices: highest-scored seed, then nearest-neighbor
/// chaining, then a fill pass in pool order if the chain came up short.
fn select<D: DistanceModel>(
    pool: &[Place],
    needed: usize,
    weights: &WeightProfile,
    distance: &D,
) -> Vec<usize> {
    let scores: Vec<f64> = pool.iter().map(|place| score(place, weights)).collect();

    let mut remaining: Vec<usize> = (0..pool.len()).collect();
    // Stable sort: equal scores keep pool order.
    remaining.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut selected = Vec::with_capacity(needed);
    let mut last = remaining.remove(0);
    selected.push(last);
    debug!(seed = %pool[last].id, score = scores[last], "seeded selection");

    while selected.len() < needed && !remaining.is_empty() {
        let here = pool[last].location();
        let mut best = 0;
        let mut best_km = f64::INFINITY;
        for (candidate_ix, &pool_ix) in remaining.iter().enumerate() {
            let km = match (here, pool[pool_ix].location()) {
                (Some(from), Some(to)) => distance.distance_km(from, to),
                _ => f64::INFINITY,
            };
            if km < best_km {
                best_km = km;
                best = candidate_ix;
            }
        }
        last = remaining.remove(best);
        selected.push(last);
    }

    // Guard: top the selection up from the pool in its original order. The
    // chain above consumes one candidate per step, so this only fires if it
    // ended early.
    if selected.len() < needed {
        for pool_ix in 0..pool.len() {
            if selected.len() == needed {
                break;
            }
            if !selected.contains(&pool_ix) {
                selected.push(pool_ix);
            }
        }
    }

    selected
}

fn slot_for(stops_per_day: u32, position: usize) -> &'static str {
    let table: &[&str] = match stops_per_day {
        3 => &THREE_STOP_SLOTS,
        2 => &TWO_STOP_SLOTS,
        _ => &[],
    };
    table.get(position).copied().unwrap_or(OVERFLOW_SLOT)
}

fn build(request: &TripRequest, pool: &[Place], selected: &[usize]) -> Itinerary {
    let stops_per_day = request.stops_per_day as usize;

    // Every requested day gets an entry, even if the pool ran out.
    let mut days: Vec<ItineraryDay> = (1..=request.days).map(ItineraryDay::new).collect();

    let mut total_cost = 0.0;
    for (position, &pool_ix) in selected.iter().enumerate() {
        let day_ix = position / stops_per_day;
        let slot_ix = position % stops_per_day;

        let place = pool[pool_ix].clone();
        if place.entry_cost.is_finite() {
            total_cost += place.entry_cost;
        }

        days[day_ix].stops.push(ScheduledStop {
            place,
            time: slot_for(request.stops_per_day, slot_ix).to_string(),
            day: day_ix as u32 + 1,
        });
    }

    Itinerary {
        name: request.tour_name.clone(),
        days,
        total_stops: selected.len() as u32,
        total_entry_cost: total_cost.round() as i64,
    }
}
