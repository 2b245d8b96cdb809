//! Generate small demonstration input files under data/ so the app runs out
//! of the box: a training set with Price and a test set without it.

use anyhow::{Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let dir = Path::new("data");
    std::fs::create_dir_all(dir).context("creating data directory")?;

    let mut train = train_frame()?;
    write_csv(&mut train, &dir.join("Data_Train.csv"))?;

    let mut test = test_frame()?;
    write_csv(&mut test, &dir.join("Test_set.csv"))?;

    Ok(())
}

fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .finish(df)
        .with_context(|| format!("writing {}", path.display()))?;

    println!("wrote {} ({} rows)", path.display(), df.height());
    Ok(())
}

fn train_frame() -> PolarsResult<DataFrame> {
    df!(
        "Airline" => [
            "IndiGo", "Air India", "Jet Airways", "IndiGo", "SpiceJet",
            "Vistara", "Air India", "Jet Airways", "IndiGo", "GoAir",
            "SpiceJet", "Vistara", "Air India", "Jet Airways", "IndiGo", "Air Asia",
        ],
        "Date_of_Journey" => [
            "24/3/2019", "1/5/2019", "9/6/2019", "12/5/2019", "1/3/2019",
            "24/6/2019", "12/3/2019", "1/3/2019", "24/4/2019", "27/5/2019",
            "6/6/2019", "18/4/2019", "9/5/2019", "15/4/2019", "3/3/2019", "21/3/2019",
        ],
        "Source" => [
            "Banglore", "Kolkata", "Delhi", "Kolkata", "Banglore",
            "Delhi", "Chennai", "Banglore", "Kolkata", "Delhi",
            "Mumbai", "Delhi", "Kolkata", "Delhi", "Banglore", "Banglore",
        ],
        "Destination" => [
            "New Delhi", "Banglore", "Cochin", "Banglore", "New Delhi",
            "Cochin", "Kolkata", "Delhi", "Banglore", "Cochin",
            "Hyderabad", "Cochin", "Banglore", "Cochin", "New Delhi", "Delhi",
        ],
        "Route" => [
            "BLR → DEL", "CCU → IXR → BBI → BLR", "DEL → LKO → BOM → COK", "CCU → BLR", "BLR → DEL",
            "DEL → BOM → COK", "MAA → CCU", "BLR → BOM → DEL", "CCU → BLR", "DEL → COK",
            "BOM → HYD", "DEL → BOM → COK", "CCU → BLR", "DEL → COK", "BLR → DEL", "BLR → DEL",
        ],
        "Dep_Time" => [
            "22:20", "05:50", "09:25", "18:05", "09:00",
            "17:15", "06:40", "08:55", "11:20", "14:10",
            "13:05", "07:05", "20:25", "16:30", "04:55", "19:50",
        ],
        "Arrival_Time" => [
            "01:10 22 Mar", "13:15", "04:25 10 Jun", "23:30", "11:25",
            "04:25 25 Jun", "09:05", "14:35", "13:55", "22:20",
            "14:35", "19:15", "23:20", "21:35 16 Apr", "07:45", "22:35",
        ],
        "Duration" => [
            "2h 50m", "7h 25m", "19h", "5h 25m", "2h 25m",
            "11h 10m", "2h 25m", "5h 40m", "2h 35m", "8h 10m",
            "1h 30m", "12h 10m", "2h 55m", "5h 5m", "2h 50m", "2h 45m",
        ],
        "Total_Stops" => [
            "non-stop", "2 stops", "2 stops", "1 stop", "non-stop",
            "1 stop", "non-stop", "1 stop", "non-stop", "1 stop",
            "non-stop", "1 stop", "non-stop", "1 stop", "non-stop", "non-stop",
        ],
        "Price" => [
            3897i64, 7662, 13882, 6218, 3943,
            10262, 4667, 9663, 4804, 8016,
            2754, 11087, 4823, 10261, 3873, 4174,
        ],
    )
}

fn test_frame() -> PolarsResult<DataFrame> {
    df!(
        "Airline" => ["Jet Airways", "IndiGo", "SpiceJet", "Air India", "Multiple carriers"],
        "Date_of_Journey" => ["6/6/2019", "12/5/2019", "21/5/2019", "24/6/2019", "12/6/2019"],
        "Source" => ["Delhi", "Kolkata", "Banglore", "Delhi", "Delhi"],
        "Destination" => ["Cochin", "Banglore", "Delhi", "Cochin", "Cochin"],
        "Route" => ["DEL → BOM → COK", "CCU → BLR", "BLR → DEL", "DEL → BOM → COK", "DEL → BOM → COK"],
        "Dep_Time" => ["17:30", "06:20", "19:45", "09:45", "14:05"],
        "Arrival_Time" => ["04:25 07 Jun", "10:20", "22:35", "23:00", "12:25 13 Jun"],
        "Duration" => ["10h 55m", "4h", "2h 50m", "13h 15m", "22h 20m"],
        "Total_Stops" => ["1 stop", "non-stop", "non-stop", "1 stop", "1 stop"],
    )
}
