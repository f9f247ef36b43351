//! Plain-text rendering of the usage view for headless output

use crate::usage::format::{format_credits, format_timestamp};
use crate::usage::{ChartData, SortField, SortState, UsageRecord};
use std::fmt::Write;

const CHART_BAR_WIDTH: usize = 40;

fn header_label(field: SortField, sort: SortState) -> String {
    match sort.get(field) {
        Some(direction) => format!("{} {}", field, direction.indicator()),
        None => field.to_string(),
    }
}

/// Render the display list as an aligned text table.
pub fn render_table(records: &[UsageRecord], sort: SortState) -> String {
    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|record| {
            [
                record.message_id.to_string(),
                format_timestamp(&record.timestamp),
                record.report_name().unwrap_or_default().to_string(),
                format_credits(record.credits_used),
            ]
        })
        .collect();

    let header = [
        "Message ID".to_string(),
        "Timestamp".to_string(),
        header_label(SortField::ReportName, sort),
        header_label(SortField::CreditsUsed, sort),
    ];

    let mut widths = header.clone().map(|cell| cell.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_row(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));
    for row in &rows {
        write_row(&mut out, row, &widths);
    }
    out
}

fn write_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let _ = writeln!(
        out,
        "{:<w0$} | {:<w1$} | {:<w2$} | {:>w3$}",
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    );
}

/// Render the per-date totals as a horizontal bar chart.
pub fn render_chart(chart: &ChartData) -> String {
    let mut out = String::from("Credits Used\n");
    if chart.is_empty() {
        out.push_str("(no data)\n");
        return out;
    }

    let label_width = chart.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let max = chart.max_value();
    for (label, value) in chart.iter() {
        let bar_len = if max > 0.0 {
            ((value / max) * CHART_BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            "{:<label_width$} | {} {}",
            label,
            "#".repeat(bar_len),
            format_credits(value),
        );
    }
    out
}
