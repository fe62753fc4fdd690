//! CLI argument definitions for the builder atlas.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use atlas_core::{CountrySort, DEFAULT_SEARCH_LIMIT};

#[derive(Parser)]
#[command(
    name = "builder-atlas",
    version,
    about = "Builder Atlas - community builders grouped by country",
    long_about = "Explore the community builder directory.\n\n\
                  Reads the member sheet once, groups builders by region and\n\
                  renders leaderboards, country pages, search and profiles."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

/// Where the snapshot comes from.
#[derive(Args)]
pub struct SourceArgs {
    /// Member sheet CSV (default: $ATLAS_MEMBERS_CSV, then data/members.csv).
    #[arg(long = "members", value_name = "PATH", global = true)]
    pub members: Option<PathBuf>,

    /// Replacement country table CSV (default: $ATLAS_COUNTRIES_CSV, then built-in).
    #[arg(long = "countries", value_name = "PATH", global = true)]
    pub countries: Option<PathBuf>,

    /// JSON file of builder records to prepend instead of the demo profiles.
    #[arg(long = "overlay", value_name = "PATH", global = true)]
    pub overlay: Option<PathBuf>,

    /// Skip the demo profiles.
    #[arg(long = "no-demo", global = true, conflicts_with = "overlay")]
    pub no_demo: bool,

    /// Drop sheet rows whose wallet also appears in the overlay.
    #[arg(long = "replace-existing", global = true)]
    pub replace_existing: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show headline numbers and the top countries.
    Summary(SummaryArgs),

    /// Rank countries by builder count.
    Leaderboard(LeaderboardArgs),

    /// List the builders of one country.
    Country(CountryArgs),

    /// Find builders by name, wallet or country.
    Search(SearchArgs),

    /// Show one builder's profile.
    Profile(ProfileArgs),

    /// Write the dashboard snapshot as JSON.
    Export(ExportArgs),
}

#[derive(Args)]
pub struct SummaryArgs {
    /// Restrict the numbers to one region (case-insensitive).
    #[arg(long = "region", value_name = "NAME")]
    pub region: Option<String>,
}

#[derive(Args)]
pub struct LeaderboardArgs {
    /// Show every country instead of the top ten.
    #[arg(long = "all")]
    pub all: bool,

    /// Restrict the leaderboard to one region (case-insensitive).
    #[arg(long = "region", value_name = "NAME")]
    pub region: Option<String>,
}

#[derive(Args)]
pub struct CountryArgs {
    /// Country or region name.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Keep builders whose name or role contains this text.
    #[arg(long = "query", value_name = "TEXT", default_value = "")]
    pub query: String,

    /// Member ordering.
    #[arg(long = "sort", value_enum, default_value = "default")]
    pub sort: SortArg,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in names, wallets and countries.
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum number of results.
    #[arg(long = "limit", default_value_t = DEFAULT_SEARCH_LIMIT)]
    pub limit: usize,
}

#[derive(Args)]
pub struct ProfileArgs {
    /// Wallet address of the builder.
    #[arg(value_name = "WALLET")]
    pub wallet: String,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Restrict the export to one region (case-insensitive).
    #[arg(long = "region", value_name = "NAME")]
    pub region: Option<String>,

    /// Write to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Emit single-line JSON.
    #[arg(long = "compact")]
    pub compact: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    Default,
    Earned,
    Submissions,
    Won,
}

impl From<SortArg> for CountrySort {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Default => CountrySort::Default,
            SortArg::Earned => CountrySort::Earned,
            SortArg::Submissions => CountrySort::Submissions,
            SortArg::Won => CountrySort::Won,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
