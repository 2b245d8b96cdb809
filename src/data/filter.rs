//! Selection Filter Module
//! Conjunctive set-membership filtering of the normalized table.

use polars::prelude::*;
use std::collections::BTreeSet;

/// The user's current selection: which airlines, sources and stop counts to
/// keep. Each set defaults to every value observed in the normalized table;
/// an empty set selects nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub airlines: BTreeSet<String>,
    pub sources: BTreeSet<String>,
    pub stops: BTreeSet<i64>,
}

impl FilterSelection {
    /// Selection covering every distinct value in the table.
    pub fn all_from(df: &DataFrame) -> Self {
        Self {
            airlines: distinct_strings(df, "Airline").into_iter().collect(),
            sources: distinct_strings(df, "Source").into_iter().collect(),
            stops: distinct_stops(df).into_iter().collect(),
        }
    }

    /// Compute the Filtered View: rows whose Airline, Source and Total_Stops
    /// are all in the selected sets. Returns a fresh frame; the input is
    /// never touched.
    pub fn apply(&self, df: &DataFrame) -> PolarsResult<DataFrame> {
        let predicate = membership("Airline", &self.airlines, |v| lit(v.clone()))
            .and(membership("Source", &self.sources, |v| lit(v.clone())))
            .and(membership("Total_Stops", &self.stops, |v| lit(*v)));

        df.clone().lazy().filter(predicate).collect()
    }
}

/// Set-membership expression: value-of(column) ∈ selected. An empty set
/// matches no rows at all.
fn membership<T>(
    column: &str,
    selected: &BTreeSet<T>,
    to_lit: impl Fn(&T) -> Expr,
) -> Expr {
    selected
        .iter()
        .map(|v| col(column).eq(to_lit(v)))
        .reduce(|a, b| a.or(b))
        .unwrap_or_else(|| lit(false))
}

/// Sorted distinct values of a string column. An absent column yields an
/// empty list rather than an error.
pub fn distinct_strings(df: &DataFrame, column: &str) -> Vec<String> {
    let Ok(ca) = df.column(column).and_then(|c| c.str()) else {
        return Vec::new();
    };

    let set: BTreeSet<&str> = ca.into_iter().flatten().collect();
    set.into_iter().map(|s| s.to_string()).collect()
}

/// Sorted distinct stop counts.
pub fn distinct_stops(df: &DataFrame) -> Vec<i64> {
    let Ok(ca) = df.column("Total_Stops").and_then(|c| c.i64()) else {
        return Vec::new();
    };

    let set: BTreeSet<i64> = ca.into_iter().flatten().collect();
    set.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized_frame() -> DataFrame {
        df!(
            "Airline" => ["IndiGo", "Air India", "IndiGo", "SpiceJet"],
            "Source" => ["Banglore", "Kolkata", "Delhi", "Kolkata"],
            "Destination" => ["New Delhi", "Banglore", "Cochin", "Banglore"],
            "Total_Stops" => [0i64, 2, 1, 1],
            "Price" => [3897.0, 7662.0, 6218.0, 4102.0],
        )
        .unwrap()
    }

    #[test]
    fn defaults_cover_every_observed_value() {
        let df = normalized_frame();
        let selection = FilterSelection::all_from(&df);

        assert_eq!(selection.airlines.len(), 3);
        assert_eq!(selection.sources.len(), 3);
        assert_eq!(
            selection.stops.iter().copied().collect::<Vec<_>>(),
            vec![0, 1, 2]
        );

        let view = selection.apply(&df).unwrap();
        assert_eq!(view.height(), df.height());
    }

    #[test]
    fn single_airline_selection_keeps_only_its_rows() {
        let df = normalized_frame();
        let mut selection = FilterSelection::all_from(&df);
        selection.airlines = BTreeSet::from(["IndiGo".to_string()]);

        let view = selection.apply(&df).unwrap();
        assert_eq!(view.height(), 2);

        let airlines = view.column("Airline").unwrap().str().unwrap();
        assert!(airlines.into_iter().flatten().all(|a| a == "IndiGo"));

        // Other fields ride along unchanged.
        let prices = view.column("Price").unwrap().f64().unwrap();
        let got: Vec<f64> = prices.into_iter().flatten().collect();
        assert_eq!(got, vec![3897.0, 6218.0]);
    }

    #[test]
    fn conjunction_across_fields() {
        let df = normalized_frame();
        let mut selection = FilterSelection::all_from(&df);
        selection.sources = BTreeSet::from(["Kolkata".to_string()]);
        selection.stops = BTreeSet::from([1i64]);

        let view = selection.apply(&df).unwrap();
        assert_eq!(view.height(), 1);

        let airlines = view.column("Airline").unwrap().str().unwrap();
        assert_eq!(airlines.get(0), Some("SpiceJet"));
    }

    #[test]
    fn empty_selection_yields_an_empty_view() {
        let df = normalized_frame();
        let mut selection = FilterSelection::all_from(&df);
        selection.airlines.clear();

        let view = selection.apply(&df).unwrap();
        assert_eq!(view.height(), 0);
    }
}
