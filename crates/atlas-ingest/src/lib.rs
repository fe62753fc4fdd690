//! Member sheet ingestion.
//!
//! [`parse_members`] turns the raw sheet into complete [`atlas_model::Builder`]
//! records. The demo [`Overlay`] is a separate step applied afterwards so the
//! parser can run on its own.

pub mod error;
pub mod members;
pub mod overlay;
pub mod paths;

pub use error::IngestError;
pub use members::{
    REGION_COLUMN, TITLE_COLUMN, WALLET_COLUMN, load_members, parse_members, read_members_file,
};
pub use overlay::{Overlay, demo_builders};
pub use paths::{DEFAULT_MEMBERS_PATH, MEMBERS_ENV_VAR, resolve_members_path};
