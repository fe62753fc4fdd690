use tracing::{info, info_span};

use atlas_ingest::{Overlay, parse_members};
use atlas_lookup::CountryTable;
use atlas_model::{Builder, DashboardStats};

use crate::aggregate::aggregate_by_country;

/// Steps applied between parsing and aggregation.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// Records prepended to the parsed sheet. `None` runs plain ingestion.
    pub overlay: Option<Overlay>,
}

impl PipelineOptions {
    /// Options used by the public dashboard: the demo overlay is applied.
    pub fn demo() -> Self {
        Self {
            overlay: Some(Overlay::demo()),
        }
    }

    #[must_use]
    pub fn with_overlay(mut self, overlay: Option<Overlay>) -> Self {
        self.overlay = overlay;
        self
    }
}

/// Aggregate a flat builder list into a dashboard snapshot.
pub fn build_dashboard(builders: &[Builder], table: &CountryTable) -> DashboardStats {
    let span = info_span!("aggregate", builders = builders.len());
    let _guard = span.enter();
    let countries = aggregate_by_country(builders, table);
    let stats = DashboardStats {
        total_builders: builders.len(),
        total_countries: countries.len(),
        top_country: countries.first().cloned(),
        countries,
    };
    info!(
        total_builders = stats.total_builders,
        total_countries = stats.total_countries,
        top_country = stats.top_country.as_ref().map(|c| c.country.as_str()),
        "dashboard aggregated"
    );
    stats
}

/// Run ingestion and aggregation over already-loaded sheet text.
///
/// Nothing is cached: each call builds an independent snapshot.
pub fn build_dashboard_from_text(
    text: &str,
    options: &PipelineOptions,
    table: &CountryTable,
) -> DashboardStats {
    let parsed = parse_members(text);
    let builders = match &options.overlay {
        Some(overlay) => overlay.apply(parsed),
        None => parsed,
    };
    build_dashboard(&builders, table)
}
