//! Terminal tables for run summaries and analytics views.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use layoffs_analytics::{AnalyticsReport, GroupAverage, GroupTotal, ShutdownEntry, VIEWS};
use layoffs_ingest::IngestIssue;
use layoffs_transform::CleaningReport;

/// Rows shown per grouped view before truncation.
pub const MAX_GROUP_ROWS: usize = 10;
/// Ingest issues listed before truncation.
pub const MAX_ISSUE_ROWS: usize = 20;

const NULL_LABEL: &str = "(null)";

pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn optional_cell<T: ToString>(value: Option<T>) -> Cell {
    match value {
        Some(value) => Cell::new(value.to_string()),
        None => dim_cell("-"),
    }
}

fn key_cell(key: Option<&str>) -> Cell {
    match key {
        Some(key) => Cell::new(key),
        None => dim_cell(NULL_LABEL),
    }
}

/// Stage-by-stage row counts.
pub fn cleaning_table(report: &CleaningReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Input"), Cell::new(report.input_rows)]);
    table.add_row(vec![
        Cell::new("Duplicates removed"),
        count_cell(report.duplicates_removed, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Records normalized"),
        count_cell(report.records_normalized, Color::Blue),
    ]);
    table.add_row(vec![
        Cell::new("Industries imputed"),
        count_cell(report.industries_imputed, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Rows filtered"),
        count_cell(report.rows_filtered, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Clean output")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.output_rows).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Data-quality warnings, truncated to [`MAX_ISSUE_ROWS`].
pub fn issues_table(issues: &[IngestIssue]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Issue"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for issue in issues.iter().take(MAX_ISSUE_ROWS) {
        table.add_row(vec![
            Cell::new(issue.row),
            Cell::new(issue.column),
            Cell::new(format!("{:?}", issue.kind)).fg(Color::Yellow),
            Cell::new(&issue.value),
        ]);
    }
    if issues.len() > MAX_ISSUE_ROWS {
        table.add_row(vec![
            dim_cell("..."),
            dim_cell(format!("{} more", issues.len() - MAX_ISSUE_ROWS)),
            dim_cell(""),
            dim_cell(""),
        ]);
    }
    table
}

fn totals_table(label: &str, totals: &[GroupTotal]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(label), header_cell("Total laid off")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for total in totals.iter().take(MAX_GROUP_ROWS) {
        table.add_row(vec![key_cell(total.key.as_deref()), Cell::new(total.total)]);
    }
    table
}

fn averages_table(averages: &[GroupAverage]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Industry"), header_cell("Avg % laid off")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for average in averages.iter().take(MAX_GROUP_ROWS) {
        table.add_row(vec![
            key_cell(average.key.as_deref()),
            Cell::new(format_percentage(average.average)),
        ]);
    }
    table
}

fn shutdown_table(metric: &str, entries: &[ShutdownEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Company"),
        header_cell("Industry"),
        header_cell(metric),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in entries.iter().take(MAX_GROUP_ROWS) {
        table.add_row(vec![
            Cell::new(&entry.company),
            key_cell(entry.industry.as_deref()),
            Cell::new(entry.value),
        ]);
    }
    table
}

fn overview_table(report: &AnalyticsReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let range = report
        .date_range
        .map(|range| format!("{} .. {}", range.earliest, range.latest));
    table.add_row(vec![Cell::new("Clean records"), Cell::new(report.record_count)]);
    table.add_row(vec![
        Cell::new("Peak single layoff"),
        optional_cell(report.peak_single_layoff),
    ]);
    table.add_row(vec![
        Cell::new("Peak % laid off"),
        optional_cell(report.peak_percentage.map(format_percentage)),
    ]);
    table.add_row(vec![
        Cell::new("Total shutdowns"),
        count_cell(report.shutdown_count, Color::Red),
    ]);
    table.add_row(vec![Cell::new("Date range"), optional_cell(range)]);
    table.add_row(vec![
        Cell::new("Average % laid off"),
        optional_cell(report.average_percentage.map(format_percentage)),
    ]);
    table
}

fn rolling_table(report: &AnalyticsReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Month"),
        header_cell("Laid off"),
        header_cell("Rolling total"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in &report.rolling_monthly {
        table.add_row(vec![
            Cell::new(row.to_string()),
            Cell::new(row.monthly_total),
            Cell::new(row.rolling_total).add_attribute(Attribute::Bold),
        ]);
    }
    table
}

fn ranking_table(report: &AnalyticsReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Year"),
        header_cell("Rank"),
        header_cell("Company"),
        header_cell("Total laid off"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    for row in &report.top_companies_per_year {
        table.add_row(vec![
            Cell::new(row.year).fg(Color::Blue),
            Cell::new(row.rank),
            Cell::new(&row.company),
            Cell::new(row.total),
        ]);
    }
    table
}

/// Titled tables for every section of the analytics report.
pub fn analytics_tables(report: &AnalyticsReport) -> Vec<(&'static str, Table)> {
    let mut by_year = Table::new();
    by_year.set_header(vec![header_cell("Year"), header_cell("Total laid off")]);
    apply_table_style(&mut by_year);
    align_column(&mut by_year, 1, CellAlignment::Right);
    for row in &report.by_year {
        by_year.add_row(vec![Cell::new(row.year), Cell::new(row.total)]);
    }

    vec![
        ("Overview", overview_table(report)),
        (
            "Shutdowns by headcount",
            shutdown_table("Laid off", &report.shutdown_headcount),
        ),
        (
            "Shutdowns by funding",
            shutdown_table("Funds ($M)", &report.shutdown_funding),
        ),
        ("By company", totals_table("Company", &report.by_company)),
        ("By industry", totals_table("Industry", &report.by_industry)),
        ("By country", totals_table("Country", &report.by_country)),
        ("By stage", totals_table("Stage", &report.by_stage)),
        ("By year", by_year),
        ("Rolling monthly total", rolling_table(report)),
        ("Top companies per year", ranking_table(report)),
        (
            "Average % laid off by industry",
            averages_table(&report.average_percentage_by_industry),
        ),
    ]
}

/// Catalog of available views.
pub fn views_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("View"), header_cell("Description")]);
    apply_table_style(&mut table);
    for view in VIEWS {
        table.add_row(vec![
            Cell::new(view.name).fg(Color::Blue),
            Cell::new(view.description),
        ]);
    }
    table
}
