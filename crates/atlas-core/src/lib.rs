pub mod aggregate;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod store;
pub mod views;

pub use aggregate::aggregate_by_country;
pub use dashboard::{PipelineOptions, build_dashboard, build_dashboard_from_text};
pub use error::DashboardError;
pub use format::{format_count, format_number, truncate_wallet};
pub use store::{DashboardStore, StoreConfig};
pub use views::{
    CountrySort, DEFAULT_SEARCH_LIMIT, LeaderboardRow, SearchHit, country_view, filter_by_region,
    find_builder, leaderboard, search_builders,
};
