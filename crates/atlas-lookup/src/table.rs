//! Country reference table.
//!
//! The table is data rather than code: a small CSV with the columns
//! `Country,Code,Latitude,Longitude`. A copy ships inside the crate and a
//! replacement can be loaded from disk.

use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::debug;

use atlas_model::Coordinates;

use crate::error::LookupError;
use crate::names::CaseInsensitiveNames;

/// Code returned for regions the table does not know.
pub const UNKNOWN_COUNTRY_CODE: &str = "XX";

/// Environment variable pointing at a replacement country table.
pub const COUNTRIES_ENV_VAR: &str = "ATLAS_COUNTRIES_CSV";

const EMBEDDED_SOURCE: &str = "embedded countries.csv";
const EMBEDDED_TABLE: &str = include_str!("../data/countries.csv");

const COUNTRY_COLUMN: &str = "Country";
const CODE_COLUMN: &str = "Code";
const LATITUDE_COLUMN: &str = "Latitude";
const LONGITUDE_COLUMN: &str = "Longitude";

#[derive(Debug, Clone, PartialEq)]
pub struct CountryEntry {
    pub name: String,
    pub code: String,
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    entries: Vec<CountryEntry>,
    by_name: HashMap<String, usize>,
    names: CaseInsensitiveNames,
}

impl CountryTable {
    /// The table compiled into the crate.
    pub fn embedded() -> Result<Self, LookupError> {
        Self::from_reader(EMBEDDED_TABLE.as_bytes(), EMBEDDED_SOURCE)
    }

    /// Load a table from a CSV file.
    pub fn from_path(path: &Path) -> Result<Self, LookupError> {
        let file = std::fs::File::open(path).map_err(|source| LookupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, &path.display().to_string())
    }

    /// Parse a table from any reader. `source_name` is only used in errors.
    pub fn from_reader<R: Read>(reader: R, source_name: &str) -> Result<Self, LookupError> {
        let rows = read_rows(reader, source_name)?;
        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            let name = get_field(&row, COUNTRY_COLUMN);
            if name.is_empty() {
                continue;
            }
            let code = get_field(&row, CODE_COLUMN).to_ascii_uppercase();
            let coordinates = match (
                get_optional(&row, LATITUDE_COLUMN),
                get_optional(&row, LONGITUDE_COLUMN),
            ) {
                (Some(lat), Some(lng)) => Some(Coordinates::new(
                    parse_degrees(&lat, &name, "latitude", source_name)?,
                    parse_degrees(&lng, &name, "longitude", source_name)?,
                )),
                _ => None,
            };
            entries.push(CountryEntry {
                name,
                code: if code.is_empty() {
                    UNKNOWN_COUNTRY_CODE.to_string()
                } else {
                    code
                },
                coordinates,
            });
        }
        let table = Self::from_entries(entries, source_name)?;
        debug!(
            source = source_name,
            countries = table.len(),
            "loaded country table"
        );
        Ok(table)
    }

    fn from_entries(entries: Vec<CountryEntry>, source_name: &str) -> Result<Self, LookupError> {
        let mut by_name = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            if by_name.insert(entry.name.clone(), idx).is_some() {
                return Err(LookupError::DuplicateCountry {
                    source_name: source_name.to_string(),
                    country: entry.name.clone(),
                });
            }
        }
        let names = CaseInsensitiveNames::new(entries.iter().map(|e| e.name.as_str()));
        Ok(Self {
            entries,
            by_name,
            names,
        })
    }

    /// Exact-match lookup of a region string.
    pub fn get(&self, name: &str) -> Option<&CountryEntry> {
        self.by_name.get(name).map(|&idx| &self.entries[idx])
    }

    /// Two-letter code for an exact region string, or [`UNKNOWN_COUNTRY_CODE`].
    pub fn country_code(&self, name: &str) -> &str {
        self.get(name)
            .map(|entry| entry.code.as_str())
            .unwrap_or(UNKNOWN_COUNTRY_CODE)
    }

    /// Map position for an exact region string.
    pub fn coordinates(&self, name: &str) -> Option<Coordinates> {
        self.get(name).and_then(|entry| entry.coordinates)
    }

    /// Resolve any casing of a known country to the table's spelling.
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        self.names.get(name)
    }

    pub fn entries(&self) -> &[CountryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve the table to use: `ATLAS_COUNTRIES_CSV` when set, else the embedded copy.
pub fn default_country_table() -> Result<CountryTable, LookupError> {
    match std::env::var_os(COUNTRIES_ENV_VAR) {
        Some(path) => CountryTable::from_path(&PathBuf::from(path)),
        None => CountryTable::embedded(),
    }
}

fn read_rows<R: Read>(
    reader: R,
    source_name: &str,
) -> Result<Vec<BTreeMap<String, String>>, LookupError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| LookupError::csv(source_name, source))?
        .iter()
        .map(|h| h.trim().trim_matches('\u{feff}').to_string())
        .collect();
    for column in [COUNTRY_COLUMN, CODE_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(LookupError::MissingColumn {
                source_name: source_name.to_string(),
                column: column.to_string(),
            });
        }
    }
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| LookupError::csv(source_name, source))?;
        let mut row = BTreeMap::new();
        for (idx, value) in record.iter().enumerate() {
            let key = headers.get(idx).cloned().unwrap_or_default();
            row.insert(key, value.trim().to_string());
        }
        rows.push(row);
    }
    Ok(rows)
}

fn get_field(row: &BTreeMap<String, String>, key: &str) -> String {
    row.get(key).cloned().unwrap_or_default()
}

fn get_optional(row: &BTreeMap<String, String>, key: &str) -> Option<String> {
    row.get(key).filter(|v| !v.is_empty()).cloned()
}

fn parse_degrees(
    raw: &str,
    country: &str,
    field: &'static str,
    source_name: &str,
) -> Result<f64, LookupError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LookupError::InvalidNumber {
            source_name: source_name.to_string(),
            country: country.to_string(),
            field,
            value: raw.to_string(),
        })
}
