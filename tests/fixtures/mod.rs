//! Test fixtures for tour-planner.
//!
//! Provides realistic test data: real Lake Garda / Verona area points of
//! interest (from OpenStreetMap) with experience tags and entry costs.

pub mod garda_places;

pub use garda_places::*;
