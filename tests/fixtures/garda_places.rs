//! Real Lake Garda / Verona area points of interest for realistic fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Entry costs are approximate adult
//! tickets; tags mirror the labels the content source uses.

use tour_planner::place::{Coordinates, Place};

/// A named point of interest with everything the planner scores on.
#[derive(Debug, Clone)]
pub struct PoiSeed {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub tags: &'static [&'static str],
    pub entry_cost: f64,
}

impl PoiSeed {
    pub const fn new(
        name: &'static str,
        lat: f64,
        lng: f64,
        tags: &'static [&'static str],
        entry_cost: f64,
    ) -> Self {
        Self {
            name,
            lat,
            lng,
            tags,
            entry_cost,
        }
    }

    pub fn place(&self, id: &str) -> Place {
        Place {
            id: id.to_string(),
            title: self.name.to_string(),
            excerpt: String::new(),
            coordinates: Some(Coordinates::new(self.lat, self.lng)),
            entry_cost: self.entry_cost,
            visit_duration_minutes: 90,
            experience_tags: self.tags.iter().map(|tag| tag.to_string()).collect(),
            area_tags: Vec::new(),
            closure_periods: Vec::new(),
        }
    }
}

// ============================================================================
// Verona city center
// ============================================================================

pub const VERONA_SITES: &[PoiSeed] = &[
    PoiSeed::new("Arena di Verona", 45.4390, 10.9941, &["cultura", "storia"], 10.0),
    PoiSeed::new("Castelvecchio", 45.4396, 10.9884, &["cultura", "storia"], 9.0),
    PoiSeed::new("Piazza delle Erbe", 45.4429, 10.9973, &["cultura"], 0.0),
    PoiSeed::new("Giardino Giusti", 45.4447, 11.0053, &["natura", "cultura"], 11.0),
];

// ============================================================================
// Lower lake (Sirmione, Peschiera, west shore)
// ============================================================================

pub const LOWER_LAKE_SITES: &[PoiSeed] = &[
    PoiSeed::new("Grotte di Catullo", 45.5051, 10.6057, &["cultura", "storia", "panorama"], 8.0),
    PoiSeed::new("Rocca Scaligera di Sirmione", 45.4916, 10.6080, &["cultura", "storia"], 6.0),
    PoiSeed::new("Parco Giardino Sigurta", 45.3547, 10.7289, &["natura", "famiglia"], 14.5),
    PoiSeed::new("Gardaland", 45.4550, 10.7133, &["famiglia", "divertimento"], 46.0),
    PoiSeed::new("Il Vittoriale degli Italiani", 45.6251, 10.5636, &["cultura", "storia"], 16.0),
    PoiSeed::new("Isola del Garda", 45.5685, 10.5384, &["natura", "panorama"], 33.0),
    PoiSeed::new("Punta San Vigilio", 45.5960, 10.7165, &["natura", "panorama"], 0.0),
];

// ============================================================================
// Upper lake and Monte Baldo ridge
// ============================================================================

pub const UPPER_LAKE_SITES: &[PoiSeed] = &[
    PoiSeed::new("Funivia Malcesine-Monte Baldo", 45.7640, 10.8064, &["trekking", "panorama"], 22.0),
    PoiSeed::new("Castello Scaligero di Malcesine", 45.7654, 10.8107, &["cultura", "panorama"], 6.0),
    PoiSeed::new("Santuario Madonna della Corona", 45.6686, 10.8664, &["trekking", "cultura", "panorama"], 0.0),
    PoiSeed::new("Cascata del Varone", 45.9053, 10.8219, &["natura", "trekking"], 7.0),
];

/// All seeds in fixed order: Verona first, then lower lake, then upper lake.
pub fn all_seeds() -> Vec<&'static PoiSeed> {
    VERONA_SITES
        .iter()
        .chain(LOWER_LAKE_SITES)
        .chain(UPPER_LAKE_SITES)
        .collect()
}

/// The full candidate pool with sequential ids (`poi-1`, `poi-2`, ...).
pub fn garda_pool() -> Vec<Place> {
    all_seeds()
        .into_iter()
        .enumerate()
        .map(|(ix, seed)| seed.place(&format!("poi-{}", ix + 1)))
        .collect()
}
