use serde::{Deserialize, Serialize};

use crate::country::CountryStats;

/// Top-level snapshot handed to every consumer.
///
/// `countries` is ordered by `builder_count` descending and `top_country`
/// mirrors its first entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_builders: usize,
    pub total_countries: usize,
    pub top_country: Option<CountryStats>,
    pub countries: Vec<CountryStats>,
}

impl DashboardStats {
    /// Derive the totals and top country from an already sorted country list.
    pub fn from_countries(countries: Vec<CountryStats>) -> Self {
        Self {
            total_builders: countries.iter().map(|c| c.builder_count).sum(),
            total_countries: countries.len(),
            top_country: countries.first().cloned(),
            countries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Look up a country group by its exact region string.
    pub fn country(&self, name: &str) -> Option<&CountryStats> {
        self.countries.iter().find(|c| c.country == name)
    }
}
