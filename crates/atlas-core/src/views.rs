//! Read-only projections of a snapshot used by the dashboard pages.

use atlas_model::{Builder, CountryStats, DashboardStats};

/// Number of search results shown by default.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Restrict a snapshot to one region, matched case-insensitively.
///
/// Surrounding whitespace in `region` is ignored, so `" india "` selects
/// `India`. Totals and the top country are re-derived from the subset.
/// Returns `None` when no country matches; callers then show the unfiltered
/// snapshot.
pub fn filter_by_region(stats: &DashboardStats, region: &str) -> Option<DashboardStats> {
    let wanted = region.trim().to_lowercase();
    let countries: Vec<CountryStats> = stats
        .countries
        .iter()
        .filter(|c| c.country.to_lowercase() == wanted)
        .cloned()
        .collect();
    if countries.is_empty() {
        return None;
    }
    Some(DashboardStats::from_countries(countries))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit<'a> {
    pub builder: &'a Builder,
    pub country: &'a str,
}

/// Case-insensitive substring search over title, wallet and country.
///
/// The query is trimmed before matching, so `"asha "` still finds `Asha`.
/// Results follow snapshot order. A blank query matches nothing.
pub fn search_builders<'a>(
    stats: &'a DashboardStats,
    query: &str,
    limit: usize,
) -> Vec<SearchHit<'a>> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    stats
        .countries
        .iter()
        .flat_map(|country| {
            country.builders.iter().map(move |builder| SearchHit {
                builder,
                country: country.country.as_str(),
            })
        })
        .filter(|hit| {
            hit.builder.title.to_lowercase().contains(&query)
                || hit.builder.wallet.to_lowercase().contains(&query)
                || hit.country.to_lowercase().contains(&query)
        })
        .take(limit)
        .collect()
}

/// Member ordering inside a country page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountrySort {
    /// Group order.
    #[default]
    Default,
    Earned,
    Submissions,
    Won,
}

/// Members of one country filtered by title or role, then sorted.
///
/// Sorts are descending and stable; an empty query keeps every member.
pub fn country_view<'a>(
    country: &'a CountryStats,
    query: &str,
    sort: CountrySort,
) -> Vec<&'a Builder> {
    let query = query.trim().to_lowercase();
    let mut members: Vec<&Builder> = country
        .builders
        .iter()
        .filter(|b| {
            b.title.to_lowercase().contains(&query)
                || b.role
                    .as_deref()
                    .is_some_and(|role| role.to_lowercase().contains(&query))
        })
        .collect();
    match sort {
        CountrySort::Default => {}
        CountrySort::Earned => members.sort_by(|a, b| b.earned.total_cmp(&a.earned)),
        CountrySort::Submissions => members.sort_by(|a, b| b.submissions.cmp(&a.submissions)),
        CountrySort::Won => members.sort_by(|a, b| b.won.cmp(&a.won)),
    }
    members
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardRow<'a> {
    /// 1-based position.
    pub rank: usize,
    pub country: &'a CountryStats,
    /// Percentage of all builders in the snapshot.
    pub share: f64,
}

/// Countries in snapshot order with their share of all builders.
pub fn leaderboard(stats: &DashboardStats, limit: Option<usize>) -> Vec<LeaderboardRow<'_>> {
    let total: usize = stats.countries.iter().map(|c| c.builder_count).sum();
    stats
        .countries
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .enumerate()
        .map(|(idx, country)| LeaderboardRow {
            rank: idx + 1,
            country,
            share: percentage(country.builder_count, total),
        })
        .collect()
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// First builder carrying `wallet`, with its country group.
pub fn find_builder<'a>(
    stats: &'a DashboardStats,
    wallet: &str,
) -> Option<(&'a CountryStats, &'a Builder)> {
    let wallet = wallet.trim();
    stats.countries.iter().find_map(|country| {
        country
            .builders
            .iter()
            .find(|b| b.wallet == wallet)
            .map(|builder| (country, builder))
    })
}
