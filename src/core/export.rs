//! CSV export of the monthly summary.
//!
//! A one-shot, local-only export: the current month's eight metrics as
//! label/value rows under a `Metric,Value` header, written to
//! `analytics-YYYY-MM.csv` in a caller-chosen directory. No remote
//! round-trip is involved.

use crate::core::analytics::MonthlySummary;
use crate::errors::Result;
use chrono::NaiveDate;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::info;

/// Formats a rupee amount with digit grouping, e.g. `₹15,000`.
///
/// Values are rounded to whole rupees for display.
#[must_use]
pub fn format_inr(value: f64) -> String {
    // Metric values fit comfortably in i64 rupee amounts
    #[allow(clippy::cast_possible_truncation)]
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Quotes a CSV field when it contains a delimiter, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// The eight exported metrics as label/value pairs, in display order.
#[must_use]
pub fn summary_rows(summary: &MonthlySummary) -> Vec<(String, String)> {
    vec![
        (
            "Total Revenue".to_string(),
            format_inr(summary.total_revenue),
        ),
        (
            "Total Properties".to_string(),
            summary.total_properties.to_string(),
        ),
        (
            "Average Occupancy Rate".to_string(),
            format!("{:.1}%", summary.average_occupancy_rate),
        ),
        (
            "Average Daily Rate".to_string(),
            format_inr(summary.average_daily_rate),
        ),
        (
            "Total Booked Nights".to_string(),
            summary.total_booked_nights.to_string(),
        ),
        (
            "Month-over-Month Growth".to_string(),
            format!("{:.1}%", summary.month_over_month_growth),
        ),
        (
            "Average Length of Stay".to_string(),
            format!("{:.0}", summary.average_length_of_stay),
        ),
        (
            "Properties with Bookings".to_string(),
            summary.properties_with_bookings.to_string(),
        ),
    ]
}

/// Builds the full CSV text for a monthly summary.
#[must_use]
pub fn summary_csv(summary: &MonthlySummary) -> String {
    let mut csv = String::from("Metric,Value\n");
    for (label, value) in summary_rows(summary) {
        // write! to String is infallible
        let _ = writeln!(csv, "{},{}", csv_field(&label), csv_field(&value));
    }
    csv
}

/// File name for a month's export, e.g. `analytics-2024-03.csv`.
#[must_use]
pub fn export_file_name(month: NaiveDate) -> String {
    format!("analytics-{}.csv", month.format("%Y-%m"))
}

/// Writes the summary CSV into `dir`, creating it if needed.
///
/// Returns the path of the written file.
pub fn write_summary_csv(
    summary: &MonthlySummary,
    month: NaiveDate,
    dir: &Path,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(month));
    std::fs::write(&path, summary_csv(summary))?;
    info!("Exported monthly summary to {}", path.display());
    Ok(path)
}
