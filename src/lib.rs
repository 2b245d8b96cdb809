//! FareView - Flight Fare Data Explorer & Interactive Chart Dashboard
//!
//! Pipeline: two raw CSV sources -> loader (concatenate) -> normalizer
//! (typed fields, drop unusable rows) -> filter (per-selection view) ->
//! aggregates (chart-ready tables), rendered by the egui presentation layer.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod stats;
