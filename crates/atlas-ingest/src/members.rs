use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use atlas_model::Builder;

use crate::error::IngestError;

pub const TITLE_COLUMN: &str = "Title";
pub const WALLET_COLUMN: &str = "Wallet";
pub const REGION_COLUMN: &str = "Region";

/// Column positions resolved once from the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    title: Option<usize>,
    wallet: Option<usize>,
    region: Option<usize>,
}

impl ColumnIndex {
    fn from_header(header: &StringRecord) -> Self {
        let position = |name: &str| {
            header
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}') == name)
        };
        Self {
            title: position(TITLE_COLUMN),
            wallet: position(WALLET_COLUMN),
            region: position(REGION_COLUMN),
        }
    }
}

fn cell(record: &StringRecord, idx: Option<usize>) -> &str {
    idx.and_then(|idx| record.get(idx)).unwrap_or("").trim()
}

/// Parse the member sheet into complete builders, in file order.
///
/// Surrounding whitespace of the whole sheet is ignored, then the first line
/// is the header; only `Title`, `Wallet` and `Region` are read, by name.
/// A missing header leaves that field empty for every row.
/// Quotes are not interpreted, so a field containing a comma shifts the
/// remaining columns. Rows without a title or wallet are dropped.
pub fn parse_members(text: &str) -> Vec<Builder> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(text.trim().as_bytes());
    // Input is already UTF-8, so records cannot fail to decode.
    let mut records = reader.records().flatten();
    let Some(header) = records.next() else {
        return Vec::new();
    };
    let columns = ColumnIndex::from_header(&header);
    let builders: Vec<Builder> = records
        .map(|record| {
            Builder::new(
                cell(&record, columns.title),
                cell(&record, columns.wallet),
                cell(&record, columns.region),
            )
        })
        .filter(Builder::is_complete)
        .collect();
    debug!(builders = builders.len(), "parsed member sheet");
    builders
}

/// Read the raw member sheet. This is the only blocking I/O in the pipeline.
pub fn read_members_file(path: &Path) -> Result<String, IngestError> {
    std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a member sheet from disk.
pub fn load_members(path: &Path) -> Result<Vec<Builder>, IngestError> {
    let text = read_members_file(path)?;
    Ok(parse_members(&text))
}
