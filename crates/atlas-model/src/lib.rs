//! Data model for the builder directory dashboard.
//!
//! The types here are the shapes every consumer reads: a flat list of
//! [`Builder`] records, grouped into [`CountryStats`], summarized by a
//! [`DashboardStats`] snapshot. All of them serialize to the camelCase JSON
//! the presentation layer expects.

pub mod builder;
pub mod country;
pub mod dashboard;

pub use builder::{Builder, Socials};
pub use country::{Coordinates, CountryStats};
pub use dashboard::DashboardStats;
