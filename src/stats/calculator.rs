//! Statistics Calculator Module
//! Aggregate views over the Filtered View: distribution counts, grouped
//! means, the price-by-stops distribution and the duration/price scatter.
//! Every function is a pure read of its input frame and tolerates an empty
//! view by returning empty structures.

use polars::prelude::*;
use std::collections::BTreeMap;

/// Histogram data for one categorical column. Labels are sorted and aligned
/// with their counts.
#[derive(Debug, Clone, Default)]
pub struct CategoryCounts {
    pub labels: Vec<String>,
    pub counts: Vec<u64>,
}

/// One point of the duration/price relationship.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub duration_mins: f64,
    pub price: f64,
    pub stops: i64,
}

/// Per-airline descriptive statistics of Price for the overview table.
#[derive(Debug, Clone)]
pub struct AirlinePriceSummary {
    pub airline: String,
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

/// Distribution counts for a string column (flights by Airline, by Source).
pub fn category_counts(df: &DataFrame, column: &str) -> PolarsResult<CategoryCounts> {
    let ca = df.column(column)?.str()?;

    let mut tally: BTreeMap<&str, u64> = BTreeMap::new();
    for value in ca.into_iter().flatten() {
        *tally.entry(value).or_default() += 1;
    }

    Ok(CategoryCounts {
        labels: tally.keys().map(|s| s.to_string()).collect(),
        counts: tally.values().copied().collect(),
    })
}

/// Grouped mean of Price per Airline, sorted by airline name.
pub fn mean_price_by_airline(df: &DataFrame) -> PolarsResult<Vec<(String, f64)>> {
    let grouped = df
        .clone()
        .lazy()
        .group_by([col("Airline")])
        .agg([col("Price").mean().alias("mean_price")])
        .sort(["Airline"], SortMultipleOptions::default())
        .collect()?;

    let airlines = grouped.column("Airline")?.str()?;
    let means = grouped.column("mean_price")?.f64()?;

    Ok(airlines
        .into_iter()
        .zip(means)
        .filter_map(|(airline, mean)| Some((airline?.to_string(), mean?)))
        .collect())
}

/// Price values bucketed per stop count, for the distribution box plot.
pub fn price_by_stops(df: &DataFrame) -> PolarsResult<Vec<(i64, Vec<f64>)>> {
    let stops = df.column("Total_Stops")?.i64()?;
    let prices = df.column("Price")?.f64()?;

    let mut buckets: BTreeMap<i64, Vec<f64>> = BTreeMap::new();
    for (stop, price) in stops.into_iter().zip(prices) {
        if let (Some(stop), Some(price)) = (stop, price) {
            buckets.entry(stop).or_default().push(price);
        }
    }

    Ok(buckets.into_iter().collect())
}

/// The scatter triplet: Duration_mins (duration_hour x 60 + duration_min),
/// Price and stop count per row of the Filtered View.
pub fn duration_price_points(df: &DataFrame) -> PolarsResult<Vec<ScatterPoint>> {
    let hours = df.column("duration_hour")?.i64()?;
    let minutes = df.column("duration_min")?.i64()?;
    let prices = df.column("Price")?.f64()?;
    let stops = df.column("Total_Stops")?.i64()?;

    let mut points = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let (Some(hour), Some(min), Some(price), Some(stop)) = (
            hours.get(row),
            minutes.get(row),
            prices.get(row),
            stops.get(row),
        ) else {
            continue;
        };

        points.push(ScatterPoint {
            duration_mins: (hour * 60 + min) as f64,
            price,
            stops: stop,
        });
    }

    Ok(points)
}

/// Descriptive Price statistics per airline, sorted by airline name.
pub fn airline_price_summary(df: &DataFrame) -> PolarsResult<Vec<AirlinePriceSummary>> {
    let airlines = df.column("Airline")?.str()?;
    let prices = df.column("Price")?.f64()?;

    let mut buckets: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for (airline, price) in airlines.into_iter().zip(prices) {
        if let (Some(airline), Some(price)) = (airline, price) {
            buckets.entry(airline).or_default().push(price);
        }
    }

    Ok(buckets
        .into_iter()
        .map(|(airline, values)| describe(airline, &values))
        .collect())
}

/// Compute descriptive statistics for one airline's prices.
fn describe(airline: &str, values: &[f64]) -> AirlinePriceSummary {
    let n = values.len();

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mean = values.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };

    let variance = if n > 1 {
        values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
    } else {
        0.0
    };

    AirlinePriceSummary {
        airline: airline.to_string(),
        count: n,
        mean,
        median,
        std: variance.sqrt(),
        min: sorted[0],
        max: sorted[n - 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> DataFrame {
        df!(
            "Airline" => ["A", "A", "B"],
            "Source" => ["Delhi", "Delhi", "Kolkata"],
            "Total_Stops" => [0i64, 1, 1],
            "Price" => [100.0, 200.0, 50.0],
            "duration_hour" => [2i64, 19, 0],
            "duration_min" => [50i64, 0, 5],
        )
        .unwrap()
    }

    fn empty_view() -> DataFrame {
        view().head(Some(0))
    }

    #[test]
    fn counts_by_airline_and_source() {
        let by_airline = category_counts(&view(), "Airline").unwrap();
        assert_eq!(by_airline.labels, vec!["A", "B"]);
        assert_eq!(by_airline.counts, vec![2, 1]);

        let by_source = category_counts(&view(), "Source").unwrap();
        assert_eq!(by_source.labels, vec!["Delhi", "Kolkata"]);
        assert_eq!(by_source.counts, vec![2, 1]);
    }

    #[test]
    fn grouped_mean_price() {
        let means = mean_price_by_airline(&view()).unwrap();
        assert_eq!(
            means,
            vec![("A".to_string(), 150.0), ("B".to_string(), 50.0)]
        );
    }

    #[test]
    fn prices_bucketed_per_stop_count() {
        let buckets = price_by_stops(&view()).unwrap();
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0], (0, vec![100.0]));
        assert_eq!(buckets[1], (1, vec![200.0, 50.0]));
    }

    #[test]
    fn scatter_triplet_derives_duration_minutes() {
        let points = duration_price_points(&view()).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].duration_mins, 170.0);
        assert_eq!(points[1].duration_mins, 1140.0);
        assert_eq!(points[2].duration_mins, 5.0);
        assert_eq!(points[2].stops, 1);
    }

    #[test]
    fn summary_table_statistics() {
        let summary = airline_price_summary(&view()).unwrap();
        assert_eq!(summary.len(), 2);

        let a = &summary[0];
        assert_eq!(a.airline, "A");
        assert_eq!(a.count, 2);
        assert_eq!(a.mean, 150.0);
        assert_eq!(a.median, 150.0);
        assert_eq!(a.min, 100.0);
        assert_eq!(a.max, 200.0);
        assert!((a.std - 70.710678).abs() < 1e-5);
    }

    #[test]
    fn empty_view_produces_empty_aggregates() {
        let df = empty_view();
        assert!(category_counts(&df, "Airline").unwrap().labels.is_empty());
        assert!(mean_price_by_airline(&df).unwrap().is_empty());
        assert!(price_by_stops(&df).unwrap().is_empty());
        assert!(duration_price_points(&df).unwrap().is_empty());
        assert!(airline_price_summary(&df).unwrap().is_empty());
    }
}
