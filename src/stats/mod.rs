//! Stats module - chart-ready aggregates over the Filtered View

mod calculator;

pub use calculator::{
    airline_price_summary, category_counts, duration_price_points, mean_price_by_airline,
    price_by_stops, AirlinePriceSummary, CategoryCounts, ScatterPoint,
};
