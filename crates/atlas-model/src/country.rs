use serde::{Deserialize, Serialize};

use crate::builder::Builder;

/// Map position for a country marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// All builders sharing one region value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryStats {
    /// The raw region string used as the grouping key.
    pub country: String,
    /// Two-letter code from the lookup table, or the unknown sentinel.
    pub country_code: String,
    pub builder_count: usize,
    pub total_score: f64,
    /// First member in group order. This is positional, not a ranking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_builder: Option<Builder>,
    pub builders: Vec<Builder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}
