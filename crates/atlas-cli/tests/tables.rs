//! Rendering tests for the dashboard tables.

use atlas_cli::tables::{country_table, leaderboard_table, profile_table, search_table, stats_table};
use atlas_core::{CountrySort, build_dashboard, country_view, leaderboard, search_builders};
use atlas_ingest::demo_builders;
use atlas_lookup::CountryTable;
use atlas_model::{Builder, DashboardStats};

fn sample() -> DashboardStats {
    let mut builders = demo_builders();
    builders.push(Builder::new("Asha", "AsH4wallet", "India"));
    builders.push(Builder::new("Kofi", "K0fiwallet", "Atlantis"));
    build_dashboard(&builders, &CountryTable::embedded().expect("embedded table"))
}

fn render(mut table: comfy_table::Table) -> String {
    table.force_no_tty();
    table.to_string()
}

#[test]
fn stats_table_shows_headline_numbers() {
    let text = render(stats_table(&sample()));
    assert!(text.contains("Total builders"));
    assert!(text.contains("5"));
    assert!(text.contains("🇮🇳 India"));
    assert!(text.contains("2 builders"));
}

#[test]
fn stats_table_handles_empty_snapshot() {
    let text = render(stats_table(&DashboardStats::default()));
    assert!(text.contains("—"));
    assert!(text.contains("0 builders"));
}

#[test]
fn leaderboard_table_shows_share_and_sentinel() {
    let stats = sample();
    let text = render(leaderboard_table(&leaderboard(&stats, None)));
    assert!(text.contains("40.0%"));
    assert!(text.contains("20.0%"));
    assert!(text.contains("XX"));
    assert!(text.contains("🌍 Atlantis"));
    assert!(text.contains("1,650"));
}

#[test]
fn country_table_lists_members() {
    let stats = sample();
    let uk = stats.country("United Kingdom").expect("UK group");
    let members = country_view(uk, "", CountrySort::Earned);
    let text = render(country_table(uk, &members));
    assert!(text.contains("Alex Turner"));
    assert!(text.contains("$160,000"));
    assert!(text.contains("Creative Director"));
}

#[test]
fn search_table_truncates_wallets() {
    let stats = sample();
    let hits = search_builders(&stats, "subhajit", 20);
    let text = render(search_table(&hits));
    assert!(text.contains("Subhajit Chaudhury"));
    assert!(text.contains("8WjXrd...88KSTp"));
}

#[test]
fn profile_table_shows_socials_and_skills() {
    let stats = sample();
    let india = stats.country("India").expect("India group");
    let builder = &india.builders[0];
    let text = render(profile_table(india, builder));
    assert!(text.contains("@subhdotsol"));
    assert!(text.contains("linkedin"));
    assert!(text.contains("Anchor"));
}
