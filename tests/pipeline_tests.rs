//! End-to-end pipeline tests: CSV sources -> loader -> normalizer -> filter
//! -> aggregates, against temp-dir fixtures.

use fareview::data::{normalize, FilterSelection, FlightLoader};
use fareview::stats::mean_price_by_airline;
use std::fs;
use std::path::PathBuf;

const TRAIN_CSV: &str = "\
Airline,Date_of_Journey,Source,Destination,Route,Dep_Time,Arrival_Time,Duration,Total_Stops,Price
IndiGo,24/3/2019,Banglore,New Delhi,BLR → DEL,22:20,01:10 22 Mar,2h 50m,non-stop,3897
Air India,1/5/2019,Kolkata,Banglore,CCU → IXR → BBI → BLR,05:50,13:15,7h 25m,2 stops,7662
IndiGo,12/5/2019,Kolkata,Banglore,CCU → BLR,18:05,23:30,5h 25m,1 stop,6218
Jet Airways,9/6/2019,Delhi,Cochin,DEL → BOM → COK,09:25,04:25 10 Jun,19h,2 stops,13882
";

const TEST_CSV: &str = "\
Airline,Date_of_Journey,Source,Destination,Route,Dep_Time,Arrival_Time,Duration,Total_Stops
SpiceJet,6/6/2019,Delhi,Cochin,DEL → COK,09:00,11:25,2h 25m,non-stop
";

fn fixture_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("fareview_{}_{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_fixtures(name: &str) -> (PathBuf, PathBuf) {
    let dir = fixture_dir(name);
    let train = dir.join("Data_Train.csv");
    let test = dir.join("Test_set.csv");
    fs::write(&train, TRAIN_CSV).unwrap();
    fs::write(&test, TEST_CSV).unwrap();
    (train, test)
}

#[test]
fn pipeline_from_csv_to_aggregates() {
    let (train, test) = write_fixtures("pipeline");

    let mut loader = FlightLoader::new(train, test);
    let combined = loader.load_or_cached().unwrap().clone();
    assert_eq!(combined.height(), 5);

    let normalized = normalize(combined).unwrap();

    // The Price-less test row never reaches the normalized set.
    assert_eq!(normalized.height(), 4);
    let airlines = normalized.column("Airline").unwrap().str().unwrap();
    assert!(!airlines.into_iter().flatten().any(|a| a == "SpiceJet"));

    // Filter down to one airline and aggregate.
    let mut selection = FilterSelection::all_from(&normalized);
    selection.airlines = ["IndiGo".to_string()].into();

    let view = selection.apply(&normalized).unwrap();
    assert_eq!(view.height(), 2);

    let means = mean_price_by_airline(&view).unwrap();
    assert_eq!(means, vec![("IndiGo".to_string(), (3897.0 + 6218.0) / 2.0)]);
}

#[test]
fn loader_caches_for_the_process_lifetime() {
    let (train, test) = write_fixtures("cache");

    let mut loader = FlightLoader::new(train.clone(), test.clone());
    let first = loader.load_or_cached().unwrap().height();

    // The files are gone, the cached frame is not.
    fs::remove_file(&train).unwrap();
    fs::remove_file(&test).unwrap();
    let second = loader.load_or_cached().unwrap().height();

    assert_eq!(first, second);
}

#[test]
fn missing_train_file_aborts_the_load() {
    let dir = fixture_dir("missing");
    let mut loader = FlightLoader::new(dir.join("absent.csv"), dir.join("absent2.csv"));
    assert!(loader.load_or_cached().is_err());
}
