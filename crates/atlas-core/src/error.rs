use thiserror::Error;

use atlas_ingest::IngestError;
use atlas_lookup::LookupError;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
}
