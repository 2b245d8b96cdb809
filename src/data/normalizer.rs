//! Flight Record Normalizer Module
//! Derives typed fields from the raw date/time/duration strings and drops
//! rows that cannot take part in the analysis.

use polars::prelude::*;
use thiserror::Error;

/// Lexical stop counts recognized in the raw Total_Stops column. Anything
/// else becomes a missing value and the row is discarded.
pub const STOP_LEVELS: [(&str, i64); 5] = [
    ("non-stop", 0),
    ("1 stop", 1),
    ("2 stops", 2),
    ("3 stops", 3),
    ("4 stops", 4),
];

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("row {row}: invalid {field} value '{value}'")]
    InvalidField {
        row: usize,
        field: &'static str,
        value: String,
    },
}

/// Turn the combined raw table into the normalized record set.
///
/// Consumes the input frame and returns a freshly owned one; the raw
/// Date_of_Journey, Arrival_Time, Dep_Time, Duration and Route columns do not
/// survive. Malformed date/time text anywhere aborts the whole pass, while
/// rows with missing values (unmapped stops, absent Price) are silently
/// discarded. Single-pass only: feeding the output back in fails because the
/// consumed columns are gone.
pub fn normalize(df: DataFrame) -> Result<DataFrame, NormalizeError> {
    let height = df.height();

    let airline_ca = df.column("Airline")?.str()?;
    let journey_ca = df.column("Date_of_Journey")?.str()?;
    let source_ca = df.column("Source")?.str()?;
    let destination_ca = df.column("Destination")?.str()?;
    let dep_ca = df.column("Dep_Time")?.str()?;
    let arrival_ca = df.column("Arrival_Time")?.str()?;
    let duration_ca = df.column("Duration")?.str()?;
    let stops_ca = df.column("Total_Stops")?.str()?;
    let price_col = df.column("Price")?.cast(&DataType::Float64)?;
    let price_ca = price_col.f64()?;

    let mut airlines: Vec<String> = Vec::with_capacity(height);
    let mut sources: Vec<String> = Vec::with_capacity(height);
    let mut destinations: Vec<String> = Vec::with_capacity(height);
    let mut stop_counts: Vec<i64> = Vec::with_capacity(height);
    let mut prices: Vec<f64> = Vec::with_capacity(height);
    let mut dates: Vec<i64> = Vec::with_capacity(height);
    let mut months: Vec<i64> = Vec::with_capacity(height);
    let mut years: Vec<i64> = Vec::with_capacity(height);
    let mut arrival_hours: Vec<i64> = Vec::with_capacity(height);
    let mut arrival_mins: Vec<i64> = Vec::with_capacity(height);
    let mut dept_hours: Vec<i64> = Vec::with_capacity(height);
    let mut dept_mins: Vec<i64> = Vec::with_capacity(height);
    let mut duration_hours: Vec<i64> = Vec::with_capacity(height);
    let mut duration_mins: Vec<i64> = Vec::with_capacity(height);

    let mut dropped = 0usize;

    for row in 0..height {
        // Date/time parsing runs before the missing-value drop, so malformed
        // text aborts the pass even on a row that would be discarded anyway.
        let (date, month, year) = parse_journey_date(journey_ca.get(row), row)?;
        let (arrival_hour, arrival_min) =
            parse_clock(first_token(arrival_ca.get(row)), "Arrival_Time", row)?;
        let (dept_hour, dept_min) = parse_clock(dep_ca.get(row), "Dep_Time", row)?;

        let stop_count = stops_ca.get(row).and_then(stop_count_for);

        // The single source-of-truth filter: any field still missing here
        // removes the row for good. Price-less test rows go this way.
        let (Some(airline), Some(source), Some(destination), Some(stop_count), Some(price), Some(duration)) = (
            airline_ca.get(row),
            source_ca.get(row),
            destination_ca.get(row),
            stop_count,
            price_ca.get(row),
            duration_ca.get(row),
        ) else {
            dropped += 1;
            continue;
        };

        // Duration parsing never yields a missing value: an absent component
        // is a plain 0, so "2h" alone is a valid two-hour flight.
        let (duration_hour, duration_min) = parse_duration(duration);

        airlines.push(airline.to_string());
        sources.push(source.to_string());
        destinations.push(destination.to_string());
        stop_counts.push(stop_count);
        prices.push(price);
        dates.push(date);
        months.push(month);
        years.push(year);
        arrival_hours.push(arrival_hour);
        arrival_mins.push(arrival_min);
        dept_hours.push(dept_hour);
        dept_mins.push(dept_min);
        duration_hours.push(duration_hour);
        duration_mins.push(duration_min);
    }

    log::info!("normalized {} rows ({} dropped)", airlines.len(), dropped);

    let normalized = DataFrame::new(vec![
        Column::new("Airline".into(), airlines),
        Column::new("Source".into(), sources),
        Column::new("Destination".into(), destinations),
        Column::new("Total_Stops".into(), stop_counts),
        Column::new("Price".into(), prices),
        Column::new("Date".into(), dates),
        Column::new("Month".into(), months),
        Column::new("Year".into(), years),
        Column::new("Arrival_hour".into(), arrival_hours),
        Column::new("Arrival_min".into(), arrival_mins),
        Column::new("Dept_hour".into(), dept_hours),
        Column::new("Dept_min".into(), dept_mins),
        Column::new("duration_hour".into(), duration_hours),
        Column::new("duration_min".into(), duration_mins),
    ])?;

    Ok(normalized)
}

/// "D/M/Y" into day, month, year. Extra segments past the third are ignored.
fn parse_journey_date(
    raw: Option<&str>,
    row: usize,
) -> Result<(i64, i64, i64), NormalizeError> {
    let raw = raw.ok_or_else(|| invalid(row, "Date_of_Journey", "<missing>"))?;
    let mut parts = raw.split('/');

    let date = parse_int(parts.next(), row, "Date_of_Journey", raw)?;
    let month = parse_int(parts.next(), row, "Date_of_Journey", raw)?;
    let year = parse_int(parts.next(), row, "Date_of_Journey", raw)?;

    Ok((date, month, year))
}

/// "HH:MM" into hour and minute.
fn parse_clock(
    raw: Option<&str>,
    field: &'static str,
    row: usize,
) -> Result<(i64, i64), NormalizeError> {
    let raw = raw.ok_or_else(|| invalid(row, field, "<missing>"))?;
    let mut parts = raw.split(':');

    let hour = parse_int(parts.next(), row, field, raw)?;
    let min = parse_int(parts.next(), row, field, raw)?;

    Ok((hour, min))
}

/// First whitespace-separated token. Arrival times sometimes carry a date
/// suffix ("04:25 10 Jun") that must be discarded.
fn first_token(raw: Option<&str>) -> Option<&str> {
    raw.and_then(|s| s.split_whitespace().next())
}

fn parse_int(
    segment: Option<&str>,
    row: usize,
    field: &'static str,
    raw: &str,
) -> Result<i64, NormalizeError> {
    segment
        .and_then(|s| s.trim().parse::<i64>().ok())
        .ok_or_else(|| invalid(row, field, raw))
}

fn invalid(row: usize, field: &'static str, value: &str) -> NormalizeError {
    NormalizeError::InvalidField {
        row,
        field,
        value: value.to_string(),
    }
}

/// Map the lexical stop description to its numeric count.
fn stop_count_for(raw: &str) -> Option<i64> {
    STOP_LEVELS
        .iter()
        .find(|(label, _)| *label == raw.trim())
        .map(|(_, count)| *count)
}

/// Hours and minutes from a free-form duration like "2h 50m", "19h" or "5m".
pub fn parse_duration(raw: &str) -> (i64, i64) {
    let hours = extract_count_before(raw, b'h').unwrap_or(0);
    let minutes = extract_count_before(raw, b'm').unwrap_or(0);
    (hours, minutes)
}

/// First run of digits immediately preceding `marker`, if any.
fn extract_count_before(s: &str, marker: u8) -> Option<i64> {
    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == marker && i > 0 && bytes[i - 1].is_ascii_digit() {
            let mut start = i - 1;
            while start > 0 && bytes[start - 1].is_ascii_digit() {
                start -= 1;
            }
            return s[start..i].parse().ok();
        }
    }
    None
}
