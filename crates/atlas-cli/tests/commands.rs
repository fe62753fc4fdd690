//! Startup and command glue: overlay selection, region scoping, country lookup.

use std::fs;

use atlas_cli::cli::{Cli, SourceArgs};
use atlas_cli::commands::{open_context, overlay_from_args, resolve_country, scoped};
use atlas_core::build_dashboard;
use atlas_ingest::{Overlay, demo_builders};
use atlas_lookup::CountryTable;
use atlas_model::{Builder, DashboardStats};
use clap::Parser;

const DEMO_WALLET: &str = "8WjXrdfSLKt9kk58w3AHMLdm4GNigRW3ub8SHy88KSTp";

fn parse(args: &[&str]) -> SourceArgs {
    let mut argv = vec!["builder-atlas"];
    argv.extend_from_slice(args);
    argv.push("summary");
    Cli::try_parse_from(argv).expect("valid arguments").source
}

fn embedded() -> CountryTable {
    CountryTable::embedded().expect("embedded table")
}

fn sample() -> DashboardStats {
    let mut builders = demo_builders();
    builders.push(Builder::new("Asha", "AsH4wallet", "India"));
    builders.push(Builder::new("Kofi", "K0fiwallet", "Atlantis"));
    build_dashboard(&builders, &embedded())
}

#[test]
fn demo_overlay_is_the_default() {
    let overlay = overlay_from_args(&parse(&[])).expect("overlay");
    assert_eq!(overlay, Some(Overlay::demo()));
}

#[test]
fn no_demo_selects_no_overlay() {
    let overlay = overlay_from_args(&parse(&["--no-demo"])).expect("overlay");
    assert!(overlay.is_none());
}

#[test]
fn no_demo_conflicts_with_overlay_file() {
    let result = Cli::try_parse_from([
        "builder-atlas",
        "--no-demo",
        "--overlay",
        "extra.json",
        "summary",
    ]);
    assert!(result.is_err());
}

#[test]
fn replace_existing_reaches_the_overlay() {
    let overlay = overlay_from_args(&parse(&["--replace-existing"])).expect("overlay");
    assert_eq!(overlay, Some(Overlay::demo().replacing_existing(true)));
}

#[test]
fn overlay_file_replaces_demo_profiles() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("overlay.json");
    fs::write(
        &path,
        r#"[{"title": "Mina", "wallet": "M1na", "region": "Kenya"}]"#,
    )
    .expect("write overlay");
    let args = parse(&["--overlay", path.to_str().expect("utf-8 path")]);
    let overlay = overlay_from_args(&args).expect("overlay").expect("some overlay");
    assert_eq!(overlay.builders(), [Builder::new("Mina", "M1na", "Kenya")]);
}

#[test]
fn empty_overlay_file_is_kept_as_empty_overlay() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("overlay.json");
    fs::write(&path, "[]").expect("write overlay");
    let args = parse(&["--overlay", path.to_str().expect("utf-8 path")]);
    let overlay = overlay_from_args(&args).expect("overlay").expect("some overlay");
    assert!(overlay.is_empty());
}

#[test]
fn missing_overlay_file_is_an_error() {
    let args = parse(&["--overlay", "/nonexistent/overlay.json"]);
    assert!(overlay_from_args(&args).is_err());
}

#[test]
fn open_context_applies_overlay_flags() {
    let dir = tempfile::tempdir().expect("tempdir");
    let members = dir.path().join("members.csv");
    fs::write(
        &members,
        format!("Title,Wallet,Region\nSubhajit,{DEMO_WALLET},India\nAsha,AsH4,India\n"),
    )
    .expect("write sheet");
    let members = members.to_str().expect("utf-8 path");

    let plain = open_context(&parse(&["--members", members, "--no-demo"])).expect("context");
    assert_eq!(plain.store.load().total_builders, 2);

    let demo = open_context(&parse(&["--members", members])).expect("context");
    assert_eq!(demo.store.load().total_builders, 5);

    let replaced =
        open_context(&parse(&["--members", members, "--replace-existing"])).expect("context");
    assert_eq!(replaced.store.load().total_builders, 4);
}

#[test]
fn open_context_fails_without_member_sheet() {
    let args = parse(&["--members", "/nonexistent/members.csv"]);
    assert!(open_context(&args).is_err());
}

#[test]
fn unmatched_region_filter_keeps_full_snapshot() {
    let stats = sample();
    assert_eq!(scoped(&stats, Some("Narnia")), stats);
    assert_eq!(scoped(&stats, None), stats);
}

#[test]
fn matched_region_filter_narrows_snapshot() {
    let stats = sample();
    let india = scoped(&stats, Some("india"));
    assert_eq!(india.total_countries, 1);
    assert_eq!(india.total_builders, 2);
    assert_eq!(india.countries[0].country, "India");
}

#[test]
fn country_lookup_tries_exact_then_canonical_name() {
    let stats = sample();
    let table = embedded();
    let uk = resolve_country(&stats, &table, "united kingdom").expect("UK group");
    assert_eq!(uk.country, "United Kingdom");
    assert_eq!(uk.builder_count, 2);

    let atlantis = resolve_country(&stats, &table, "Atlantis").expect("exact region");
    assert_eq!(atlantis.country_code, "XX");

    assert!(resolve_country(&stats, &table, "atlantis").is_none());
    assert!(resolve_country(&stats, &table, "Germany").is_none());
}

#[test]
fn logging_flags_parse_anywhere() {
    let cli = Cli::try_parse_from(["builder-atlas", "summary", "--log-timestamps", "--log-target"])
        .expect("valid arguments");
    assert!(cli.log_timestamps);
    assert!(cli.log_target);

    let cli = Cli::try_parse_from(["builder-atlas", "summary"]).expect("valid arguments");
    assert!(!cli.log_timestamps);
    assert!(!cli.log_target);
}
