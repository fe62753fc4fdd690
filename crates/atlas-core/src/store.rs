//! The process-wide dashboard snapshot.
//!
//! A [`DashboardStore`] is built once by the startup sequence and handed by
//! reference to whatever serves requests. The sheet is read exactly once, in
//! [`DashboardStore::open`]; [`DashboardStore::load`] only hands out the
//! stored snapshot.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use tracing::{info, info_span, warn};

use atlas_ingest::read_members_file;
use atlas_lookup::CountryTable;
use atlas_model::DashboardStats;

use crate::dashboard::{PipelineOptions, build_dashboard_from_text};
use crate::error::DashboardError;

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub members_path: PathBuf,
    pub options: PipelineOptions,
}

impl StoreConfig {
    pub fn new(members_path: impl Into<PathBuf>) -> Self {
        Self {
            members_path: members_path.into(),
            options: PipelineOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }
}

#[derive(Debug, Clone)]
pub struct DashboardStore {
    source: PathBuf,
    snapshot: Arc<DashboardStats>,
}

impl DashboardStore {
    /// Read the member sheet and build the snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet cannot be read. There is no fallback source.
    pub fn open(config: &StoreConfig, table: &CountryTable) -> Result<Self, DashboardError> {
        let span = info_span!("ingest", path = %config.members_path.display());
        let _guard = span.enter();
        let start = Instant::now();
        let text = read_members_file(&config.members_path)?;
        let stats = build_dashboard_from_text(&text, &config.options, table);
        if stats.is_empty() {
            warn!("member sheet produced no builders");
        }
        info!(
            duration_ms = start.elapsed().as_millis(),
            "dashboard snapshot ready"
        );
        Ok(Self {
            source: config.members_path.clone(),
            snapshot: Arc::new(stats),
        })
    }

    /// Wrap an already built snapshot.
    pub fn from_stats(source: impl Into<PathBuf>, stats: DashboardStats) -> Self {
        Self {
            source: source.into(),
            snapshot: Arc::new(stats),
        }
    }

    /// The stored snapshot. Every call returns the same allocation.
    pub fn load(&self) -> Arc<DashboardStats> {
        Arc::clone(&self.snapshot)
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}
