//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
    report::{render_chart, render_table},
};
use crate::events::Event;
use crate::loader::{LoadState, apply_outcome};
use crate::usage::{SortDirection, SortField, UsageView};
use serde::Serialize;
use std::error::Error;
use tokio::sync::mpsc;

/// Output choices for a headless run.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessOptions {
    /// Emit one JSON document on stdout instead of text.
    pub json: bool,
    pub report_order: Option<SortDirection>,
    pub credits_order: Option<SortDirection>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    chart: &'a crate::usage::ChartData,
    usage: &'a [crate::usage::UsageRecord],
}

/// Drive a field through the same toggle cycle the dashboard uses.
fn apply_order(view: &mut UsageView, field: SortField, order: Option<SortDirection>) {
    let toggles = match order {
        None => 0,
        Some(SortDirection::Asc) => 1,
        Some(SortDirection::Desc) => 2,
    };
    for _ in 0..toggles {
        view.toggle_sort(field);
    }
}

/// Apply headless sort options: credits first, then report name.
pub fn apply_orders(view: &mut UsageView, options: &HeadlessOptions) {
    apply_order(view, SortField::CreditsUsed, options.credits_order);
    apply_order(view, SortField::ReportName, options.report_order);
}

fn drain_events(receiver: &mut mpsc::Receiver<Event>, to_stderr: bool) {
    while let Ok(event) = receiver.try_recv() {
        if to_stderr {
            eprintln!("{}", event);
        } else {
            println!("{}", event);
        }
    }
}

/// Runs the application in headless mode
///
/// Waits for the session's fetch, prints logged events, then prints the
/// table and chart. A failed fetch still exits cleanly with empty output.
pub async fn run_headless_mode(
    mut session: SessionData,
    options: HeadlessOptions,
) -> Result<(), Box<dyn Error>> {
    let to_stderr = options.json;
    print_session_starting("headless", &session.base_url, to_stderr);

    let mut view = UsageView::default();
    let state = match (&mut session.load_receiver).await {
        Ok(outcome) => apply_outcome(&mut view, outcome),
        Err(_) => LoadState::Failed {
            reason: "loader stopped before reporting a result".to_string(),
        },
    };
    drain_events(&mut session.event_receiver, to_stderr);

    apply_orders(&mut view, &options);

    if options.json {
        let report = JsonReport {
            chart: view.chart(),
            usage: view.display(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if view.is_empty() {
            match &state {
                LoadState::Failed { reason } => println!("No usage records ({})", reason),
                _ => println!("No usage records"),
            }
        } else {
            println!("{}", render_table(view.display(), view.sort_state()));
        }
        println!("{}", render_chart(view.chart()));
    }

    print_session_exit_success(to_stderr);
    Ok(())
}
