//! Bundled city directory.
//!
//! City-level solar irradiance and electricity tariff defaults for Indian
//! cities, shipped as CSV and embedded into the binary at build time.

use std::io::Read;
use std::sync::OnceLock;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

use solar_core::LocationRecord;

static EMBEDDED_TABLE: &str = include_str!("../data/locations.csv");
static BUNDLED: OnceLock<Result<LocationDirectory, LocationLoaderError>> = OnceLock::new();

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),
}

impl From<csv::Error> for LocationLoaderError {
    fn from(err: csv::Error) -> Self {
        LocationLoaderError::CsvParse(err.to_string())
    }
}

/// Lookup table of city reference data.
///
/// Each record carries the state, the average daily solar irradiance in
/// kWh/m²/day, and the typical grid tariff in ₹/kWh. Cities are matched
/// case-insensitively with surrounding whitespace ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationDirectory {
    records: Vec<LocationRecord>,
}

impl LocationDirectory {
    pub fn new(records: Vec<LocationRecord>) -> Self {
        LocationDirectory { records }
    }

    /// The directory shipped with the crate, parsed at most once per process.
    ///
    /// # Examples
    ///
    /// ```
    /// use solar_data::LocationDirectory;
    ///
    /// let directory = LocationDirectory::bundled().unwrap();
    /// let delhi = directory.get("Delhi").unwrap();
    /// assert_eq!(delhi.state, "Delhi");
    /// ```
    pub fn bundled() -> Result<&'static LocationDirectory, LocationLoaderError> {
        BUNDLED
            .get_or_init(|| Self::from_csv(EMBEDDED_TABLE.as_bytes()))
            .as_ref()
            .map_err(|err| err.clone())
    }

    /// Parses a directory from CSV with a `city,state,irradiance,tariff`
    /// header row.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self, LocationLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: LocationRecord = result?;
            records.push(record);
        }

        Ok(LocationDirectory::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    /// City names in alphabetical order.
    pub fn cities(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.iter().map(|r| r.city.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn get(&self, city: &str) -> Option<&LocationRecord> {
        let wanted = city.trim();
        self.records
            .iter()
            .find(|record| record.city.eq_ignore_ascii_case(wanted))
    }

    /// All records for a state, in table order.
    pub fn in_state(&self, state: &str) -> Vec<&LocationRecord> {
        let wanted = state.trim();
        self.records
            .iter()
            .filter(|record| record.state.eq_ignore_ascii_case(wanted))
            .collect()
    }

    /// Looks a city up, falling back to a conservative default profile
    /// (state "Unknown", 4.5 kWh/m²/day, ₹6/kWh) for cities not in the
    /// table.
    pub fn resolve(&self, city: &str) -> LocationRecord {
        let wanted = city.trim();
        match self.get(wanted) {
            Some(record) => record.clone(),
            None => {
                warn!(city = wanted, "city not in location table, using default profile");
                LocationRecord {
                    city: wanted.to_string(),
                    state: String::from("Unknown"),
                    irradiance: Decimal::new(45, 1),
                    tariff: Decimal::from(6),
                }
            }
        }
    }
}
