//! CSV Data Loader Module
//! Reads the two raw flight tables and concatenates them using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("input file not found: {0}")]
    SourceMissing(PathBuf),
    #[error("failed to read CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("no data loaded")]
    NoData,
}

/// Loads the training and test sources and caches the combined table for the
/// process lifetime. The first call reads both files; every later call
/// returns the same frame. There is no invalidation.
pub struct FlightLoader {
    train_path: PathBuf,
    test_path: PathBuf,
    combined: Option<DataFrame>,
}

impl FlightLoader {
    pub fn new(train_path: PathBuf, test_path: PathBuf) -> Self {
        Self {
            train_path,
            test_path,
            combined: None,
        }
    }

    /// Load both sources and concatenate them, or hand back the cached result.
    ///
    /// Every row from both files survives; row identity from the source files
    /// is not preserved (the combined frame is indexed sequentially). The test
    /// source has no Price column and its rows carry nulls there.
    pub fn load_or_cached(&mut self) -> Result<&DataFrame, LoaderError> {
        if self.combined.is_none() {
            let train = read_table(&self.train_path)?;
            let test = read_table(&self.test_path)?;
            log::info!(
                "loaded {} train rows from {}, {} test rows from {}",
                train.height(),
                self.train_path.display(),
                test.height(),
                self.test_path.display()
            );

            let combined = combine_frames(train, test)?;
            self.combined = Some(combined);
        }

        self.combined.as_ref().ok_or(LoaderError::NoData)
    }
}

/// Read a single CSV source into a DataFrame.
fn read_table(path: &Path) -> Result<DataFrame, LoaderError> {
    if !path.exists() {
        return Err(LoaderError::SourceMissing(path.to_path_buf()));
    }

    // Use lazy evaluation for memory efficiency, then collect
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .finish()?
        .collect()?;

    Ok(df)
}

/// Stack the test rows under the train rows, aligned by column name.
///
/// Columns present in `train` but absent from `test` (Price) are filled with
/// nulls on the test side before stacking, so the schemas line up.
pub fn combine_frames(train: DataFrame, test: DataFrame) -> Result<DataFrame, PolarsError> {
    let mut test = test;

    for column in train.get_columns() {
        if test.column(column.name()).is_err() {
            let filler =
                Series::full_null(column.name().clone(), test.height(), column.dtype());
            test.with_column(filler)?;
        }
    }

    // Match the train column order so vstack sees identical schemas.
    let test = test.select(train.get_column_names_owned())?;

    train.vstack(&test)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn train_frame() -> DataFrame {
        df!(
            "Airline" => ["IndiGo", "Air India"],
            "Source" => ["Banglore", "Kolkata"],
            "Price" => [3897i64, 7662],
        )
        .unwrap()
    }

    fn test_frame() -> DataFrame {
        df!(
            "Airline" => ["Jet Airways"],
            "Source" => ["Delhi"],
        )
        .unwrap()
    }

    #[test]
    fn combine_keeps_every_row_from_both_sources() {
        let combined = combine_frames(train_frame(), test_frame()).unwrap();
        assert_eq!(combined.height(), 3);
        assert_eq!(combined.width(), 3);
    }

    #[test]
    fn rows_from_priceless_source_carry_nulls() {
        let combined = combine_frames(train_frame(), test_frame()).unwrap();
        let price = combined.column("Price").unwrap();
        assert_eq!(price.null_count(), 1);
        assert!(price.get(2).unwrap().is_null());
    }

    #[test]
    fn missing_source_file_is_fatal() {
        let mut loader = FlightLoader::new(
            PathBuf::from("no/such/train.csv"),
            PathBuf::from("no/such/test.csv"),
        );
        assert!(matches!(
            loader.load_or_cached(),
            Err(LoaderError::SourceMissing(_))
        ));
    }
}
