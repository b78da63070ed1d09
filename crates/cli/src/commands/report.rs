//! Read-only commands: the shoe table and the aggregations.

use std::fmt::Write as _;

use shoe_inventory_core::{Inventory, ShoeFilter, ShoeRecord, stats};
use shoe_inventory_dashboard::filters::format_idr;
use shoe_inventory_dashboard::storage::{COLUMNS, ShoeRepository};

use super::CliError;

/// Render the rows of the data file selected by `filter` as a text table.
///
/// The toggles select among the file's rows exactly like the dashboard, with
/// the file's rows standing in for the session inventory.
pub async fn list(repository: &ShoeRepository, filter: ShoeFilter) -> Result<String, CliError> {
    let rows = repository.load_or_empty().await?;

    let mut inventory = Inventory::default();
    inventory.replace_all(rows.clone());
    let rows = filter.apply(rows, &inventory);

    let mut out = String::new();
    if let Some(banner) = filter.banner() {
        let _ = writeln!(out, "{banner}");
    }
    if rows.is_empty() {
        out.push_str("No shoes match your filter criteria.\n");
    } else {
        out.push_str(&render_table(&rows));
    }
    Ok(out)
}

fn cells(record: &ShoeRecord) -> [String; 7] {
    [
        record.id.to_string(),
        record.brand.clone(),
        record.model.clone(),
        record.category.to_string(),
        record.color.clone(),
        record.size_eu.to_string(),
        record.price_idr.to_string(),
    ]
}

fn render_table(rows: &[ShoeRecord]) -> String {
    let body: Vec<[String; 7]> = rows.iter().map(cells).collect();

    let mut widths = COLUMNS.map(str::len);
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header = COLUMNS.map(str::to_string);
    for row in std::iter::once(&header).chain(&body) {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

/// Render the three dashboard aggregations over every row of the data file.
pub async fn stats(repository: &ShoeRepository) -> Result<String, CliError> {
    let rows = repository.load_or_empty().await?;

    let mut out = String::new();
    if rows.is_empty() {
        out.push_str("No shoes in the data file.\n");
        return Ok(out);
    }

    out.push_str("Average price by brand\n");
    for bucket in stats::mean_price_by_brand(&rows) {
        let _ = writeln!(out, "  {:<20} {}", bucket.key, format_idr(bucket.value));
    }

    out.push_str("\nShoes by category\n");
    for bucket in stats::count_by_category(&rows) {
        let _ = writeln!(out, "  {:<20} {}", bucket.key, bucket.value);
    }

    out.push_str("\nAverage price by EU size\n");
    for bucket in stats::mean_price_by_size(&rows) {
        let _ = writeln!(out, "  {:<20} {}", bucket.key, format_idr(bucket.value));
    }

    Ok(out)
}
