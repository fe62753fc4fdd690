use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("failed to read country table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse country table {source_name}: {source}")]
    Csv {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    #[error("country table {source_name} is missing required column {column}")]
    MissingColumn { source_name: String, column: String },

    #[error("invalid {field} for {country} in {source_name}: {value:?}")]
    InvalidNumber {
        source_name: String,
        country: String,
        field: &'static str,
        value: String,
    },

    #[error("duplicate country {country} in {source_name}")]
    DuplicateCountry { source_name: String, country: String },
}

impl LookupError {
    pub(crate) fn csv(source_name: &str, source: csv::Error) -> Self {
        Self::Csv {
            source_name: source_name.to_string(),
            source,
        }
    }
}
