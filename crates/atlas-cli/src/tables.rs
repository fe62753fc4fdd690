//! Table rendering for the dashboard views.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use atlas_core::{LeaderboardRow, SearchHit, format_count, format_number, truncate_wallet};
use atlas_lookup::flag_emoji;
use atlas_model::{Builder, CountryStats, DashboardStats};

/// Characters kept on each side of a shortened wallet.
pub const WALLET_CHARS: usize = 6;

/// Headline numbers, mirroring the dashboard stat cards.
pub fn stats_table(stats: &DashboardStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let (top_name, top_count) = match &stats.top_country {
        Some(top) => (
            format!("{} {}", flag_emoji(&top.country_code), top.country),
            format!("{} builders", format_count(top.builder_count)),
        ),
        None => ("—".to_string(), "0 builders".to_string()),
    };
    table.add_row(vec![
        Cell::new("Total builders"),
        Cell::new(format_count(stats.total_builders)).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Countries"),
        Cell::new(format_count(stats.total_countries)).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Top country"),
        Cell::new(top_name).fg(Color::Cyan),
    ]);
    table.add_row(vec![Cell::new("Top country size"), Cell::new(top_count)]);
    table
}

pub fn leaderboard_table(rows: &[LeaderboardRow<'_>]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Country"),
        header_cell("Code"),
        header_cell("Builders"),
        header_cell("% of Total"),
        header_cell("Score"),
    ]);
    apply_wide_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for row in rows {
        let country = row.country;
        table.add_row(vec![
            rank_cell(row.rank),
            Cell::new(format!(
                "{} {}",
                flag_emoji(&country.country_code),
                country.country
            )),
            code_cell(&country.country_code),
            Cell::new(format_count(country.builder_count)),
            Cell::new(format!("{:.1}%", row.share)),
            Cell::new(format_number(country.total_score)),
        ]);
    }
    table
}

pub fn country_table(country: &CountryStats, members: &[&Builder]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Builder"),
        header_cell("Role"),
        header_cell("Wallet"),
        header_cell("Earned"),
        header_cell("Submissions"),
        header_cell("Won"),
    ]);
    apply_wide_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    let top_wallet = country.top_builder.as_ref().map(|b| b.wallet.as_str());
    for builder in members {
        let name = if Some(builder.wallet.as_str()) == top_wallet {
            Cell::new(&builder.title)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(&builder.title)
        };
        table.add_row(vec![
            name,
            optional_cell(builder.role.as_deref()),
            Cell::new(truncate_wallet(&builder.wallet, WALLET_CHARS)),
            Cell::new(format!("${}", format_number(builder.earned))),
            Cell::new(builder.submissions),
            Cell::new(builder.won),
        ]);
    }
    table
}

pub fn search_table(hits: &[SearchHit<'_>]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Builder"),
        header_cell("Country"),
        header_cell("Wallet"),
    ]);
    apply_table_style(&mut table);
    for hit in hits {
        table.add_row(vec![
            Cell::new(&hit.builder.title),
            Cell::new(hit.country),
            Cell::new(truncate_wallet(&hit.builder.wallet, WALLET_CHARS)),
        ]);
    }
    table
}

pub fn profile_table(country: &CountryStats, builder: &Builder) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.add_row(vec![header_cell("Name"), Cell::new(&builder.title)]);
    table.add_row(vec![
        header_cell("Country"),
        Cell::new(format!(
            "{} {}",
            flag_emoji(&country.country_code),
            country.country
        )),
    ]);
    table.add_row(vec![
        header_cell("Role"),
        optional_cell(builder.role.as_deref()),
    ]);
    table.add_row(vec![header_cell("Wallet"), Cell::new(&builder.wallet)]);
    table.add_row(vec![
        header_cell("Bio"),
        optional_cell(builder.bio.as_deref()),
    ]);
    table.add_row(vec![
        header_cell("Earned"),
        Cell::new(format!("${}", format_number(builder.earned))),
    ]);
    table.add_row(vec![
        header_cell("Submissions"),
        Cell::new(builder.submissions),
    ]);
    table.add_row(vec![header_cell("Won"), Cell::new(builder.won)]);
    table.add_row(vec![
        header_cell("Score"),
        Cell::new(format_number(builder.score)),
    ]);
    let skills = builder.skills.join(", ");
    table.add_row(vec![
        header_cell("Skills"),
        optional_cell(Some(skills.as_str()).filter(|s| !s.is_empty())),
    ]);
    for (platform, url) in builder.socials.links() {
        table.add_row(vec![header_cell(platform), Cell::new(url)]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_wide_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn rank_cell(rank: usize) -> Cell {
    let color = match rank {
        1 => Color::Yellow,
        2 => Color::Grey,
        3 => Color::DarkYellow,
        _ => return Cell::new(rank),
    };
    Cell::new(rank).fg(color).add_attribute(Attribute::Bold)
}

fn code_cell(code: &str) -> Cell {
    if code == atlas_lookup::UNKNOWN_COUNTRY_CODE {
        dim_cell(code)
    } else {
        Cell::new(code)
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
