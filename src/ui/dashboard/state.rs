//! Dashboard state management
//!
//! Owns the usage view, the load status and the activity log

use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, TABLE_PAGE_SIZE};
use crate::events::Event;
use crate::loader::{LoadOutcome, LoadState, apply_outcome};
use crate::ui::app::UIConfig;
use crate::usage::{SortDirection, SortField, UsageView};
use log::{error, info};
use std::collections::VecDeque;

#[derive(Debug)]
pub struct DashboardState {
    /// Base URL the records are read from.
    pub base_url: String,
    /// Reference/display lists and sort state.
    pub view: UsageView,
    /// Progress of the session's fetch.
    pub load_state: LoadState,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<Event>,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Index of the first table row on screen.
    pub scroll_offset: usize,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    pub fn new(ui_config: UIConfig) -> Self {
        Self {
            base_url: ui_config.base_url,
            view: UsageView::default(),
            load_state: LoadState::Pending,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            scroll_offset: 0,
            with_background_color: ui_config.with_background_color,
            tick: 0,
        }
    }

    /// Advance the tick and move queued events into the activity log.
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }

    pub fn apply_load(&mut self, outcome: LoadOutcome) {
        self.load_state = apply_outcome(&mut self.view, outcome);
        self.scroll_offset = 0;
    }

    /// The loader task ended without reporting a result.
    pub fn mark_load_lost(&mut self) {
        error!("Usage loader stopped before reporting a result");
        self.load_state = LoadState::Failed {
            reason: "loader stopped before reporting a result".to_string(),
        };
    }

    pub fn toggle_sort(&mut self, field: SortField) -> Option<SortDirection> {
        let direction = self.view.toggle_sort(field);
        match direction {
            Some(direction) => info!("Sorted by {} ({})", field, direction),
            None => info!("Cleared {} sort", field),
        }
        direction
    }

    fn max_offset(&self) -> usize {
        self.view.display().len().saturating_sub(1)
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll_offset = (self.scroll_offset + rows).min(self.max_offset());
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(rows);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(TABLE_PAGE_SIZE);
    }

    pub fn page_up(&mut self) {
        self.scroll_up(TABLE_PAGE_SIZE);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.max_offset();
    }
}
