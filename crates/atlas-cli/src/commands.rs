use std::io::Write;

use anyhow::{Context, Result, anyhow};
use tracing::{info, warn};

use atlas_core::{
    DashboardStore, PipelineOptions, StoreConfig, country_view, filter_by_region, find_builder,
    leaderboard, search_builders,
};
use atlas_ingest::{Overlay, resolve_members_path};
use atlas_lookup::{CountryTable, default_country_table};
use atlas_model::{CountryStats, DashboardStats};

use crate::cli::{
    CountryArgs, ExportArgs, LeaderboardArgs, ProfileArgs, SearchArgs, SourceArgs, SummaryArgs,
};
use crate::tables::{country_table, leaderboard_table, profile_table, search_table, stats_table};

/// Countries shown before `--all` is needed.
const LEADERBOARD_TOP: usize = 10;

/// Everything the commands read, built once at startup.
pub struct AppContext {
    pub table: CountryTable,
    pub store: DashboardStore,
}

pub fn open_context(args: &SourceArgs) -> Result<AppContext> {
    let table = match &args.countries {
        Some(path) => CountryTable::from_path(path),
        None => default_country_table(),
    }
    .context("load country table")?;
    let overlay = overlay_from_args(args)?;
    let members_path = resolve_members_path(args.members.as_deref());
    let config = StoreConfig::new(members_path)
        .with_options(PipelineOptions::default().with_overlay(overlay));
    let store = DashboardStore::open(&config, &table).context("build dashboard snapshot")?;
    Ok(AppContext { table, store })
}

/// `--overlay` file, nothing with `--no-demo`, otherwise the demo profiles.
pub fn overlay_from_args(args: &SourceArgs) -> Result<Option<Overlay>> {
    let overlay = if let Some(path) = &args.overlay {
        let overlay = Overlay::from_path(path).context("load overlay")?;
        if overlay.is_empty() {
            warn!(path = %path.display(), "overlay file has no records");
        }
        Some(overlay)
    } else if args.no_demo {
        None
    } else {
        Some(Overlay::demo())
    };
    Ok(overlay.map(|o| o.replacing_existing(args.replace_existing)))
}

pub fn run_summary(ctx: &AppContext, args: &SummaryArgs) -> Result<()> {
    let snapshot = ctx.store.load();
    let stats = scoped(&snapshot, args.region.as_deref());
    if stats.is_empty() {
        println!("No builders found in {}.", ctx.store.source().display());
        return Ok(());
    }
    println!("{}", stats_table(&stats));
    println!();
    println!("Top countries:");
    println!("{}", leaderboard_table(&leaderboard(&stats, Some(3))));
    Ok(())
}

pub fn run_leaderboard(ctx: &AppContext, args: &LeaderboardArgs) -> Result<()> {
    let snapshot = ctx.store.load();
    let stats = scoped(&snapshot, args.region.as_deref());
    let limit = if args.all { None } else { Some(LEADERBOARD_TOP) };
    println!("{}", leaderboard_table(&leaderboard(&stats, limit)));
    if limit.is_some_and(|top| stats.countries.len() > top) {
        println!(
            "Showing {LEADERBOARD_TOP} of {} countries (use --all to show every country).",
            stats.countries.len()
        );
    }
    Ok(())
}

pub fn run_country(ctx: &AppContext, args: &CountryArgs) -> Result<()> {
    let snapshot = ctx.store.load();
    let country = resolve_country(&snapshot, &ctx.table, &args.name)
        .ok_or_else(|| anyhow!("no builders found for region {:?}", args.name))?;
    let members = country_view(country, &args.query, args.sort.into());
    println!(
        "{} ({}) - {} builders",
        country.country, country.country_code, country.builder_count
    );
    println!("{}", country_table(country, &members));
    Ok(())
}

pub fn run_search(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let snapshot = ctx.store.load();
    let hits = search_builders(&snapshot, &args.query, args.limit);
    if hits.is_empty() {
        println!(
            "No builders match {:?} (searched {} builders).",
            args.query, snapshot.total_builders
        );
        return Ok(());
    }
    println!("{}", search_table(&hits));
    Ok(())
}

pub fn run_profile(ctx: &AppContext, args: &ProfileArgs) -> Result<()> {
    let snapshot = ctx.store.load();
    let (country, builder) = find_builder(&snapshot, &args.wallet)
        .ok_or_else(|| anyhow!("no builder with wallet {}", args.wallet))?;
    println!("{}", profile_table(country, builder));
    Ok(())
}

pub fn run_export(ctx: &AppContext, args: &ExportArgs) -> Result<()> {
    let snapshot = ctx.store.load();
    let stats = scoped(&snapshot, args.region.as_deref());
    let json = if args.compact {
        serde_json::to_string(&stats)
    } else {
        serde_json::to_string_pretty(&stats)
    }
    .context("serialize dashboard")?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, json.as_bytes())
                .with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "dashboard exported");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("write stdout")?;
        }
    }
    Ok(())
}

/// Apply an optional region filter, falling back to the full snapshot.
pub fn scoped(snapshot: &DashboardStats, region: Option<&str>) -> DashboardStats {
    let Some(region) = region else {
        return snapshot.clone();
    };
    match filter_by_region(snapshot, region) {
        Some(filtered) => filtered,
        None => {
            warn!(region, "region matched no builders, showing all countries");
            snapshot.clone()
        }
    }
}

/// Exact region first, then any casing of a known country name.
pub fn resolve_country<'a>(
    stats: &'a DashboardStats,
    table: &CountryTable,
    name: &str,
) -> Option<&'a CountryStats> {
    stats.country(name).or_else(|| {
        table
            .canonical_name(name)
            .and_then(|canonical| stats.country(canonical))
    })
}
