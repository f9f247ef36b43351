//! Owned view state for the usage table and chart
//!
//! The reference list is fixed once loaded; the display list is reordered by sort toggles.

use super::aggregate::{ChartData, aggregate_by_date};
use super::record::UsageRecord;
use super::sort::{SortDirection, SortField, next_direction, sort_records};

/// Per-column sort directions. `None` means unsorted.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct SortState {
    pub report_name: Option<SortDirection>,
    pub credits_used: Option<SortDirection>,
}

impl SortState {
    pub fn get(&self, field: SortField) -> Option<SortDirection> {
        match field {
            SortField::ReportName => self.report_name,
            SortField::CreditsUsed => self.credits_used,
        }
    }

    fn set(&mut self, field: SortField, direction: Option<SortDirection>) {
        match field {
            SortField::ReportName => self.report_name = direction,
            SortField::CreditsUsed => self.credits_used = direction,
        }
    }

    fn other(field: SortField) -> SortField {
        match field {
            SortField::ReportName => SortField::CreditsUsed,
            SortField::CreditsUsed => SortField::ReportName,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UsageView {
    reference: Vec<UsageRecord>,
    display: Vec<UsageRecord>,
    sort: SortState,
    chart: ChartData,
}

impl UsageView {
    #[cfg(test)]
    pub fn new(records: Vec<UsageRecord>) -> Self {
        let mut view = Self::default();
        view.load(records);
        view
    }

    /// Replace both lists with freshly fetched records, in server order.
    pub fn load(&mut self, records: Vec<UsageRecord>) {
        self.chart = aggregate_by_date(&records);
        self.display = records.clone();
        self.reference = records;
        self.sort = SortState::default();
    }

    #[cfg(test)]
    pub fn reference(&self) -> &[UsageRecord] {
        &self.reference
    }

    pub fn display(&self) -> &[UsageRecord] {
        &self.display
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    /// Chart input, derived from the reference list only.
    pub fn chart(&self) -> &ChartData {
        &self.chart
    }

    pub fn is_empty(&self) -> bool {
        self.reference.is_empty()
    }

    /// Advance `field` one step through its sort cycle and reorder the display list.
    pub fn toggle_sort(&mut self, field: SortField) -> Option<SortDirection> {
        let next = next_direction(self.sort.get(field));
        self.sort.set(field, next);

        match next {
            Some(direction) => sort_records(&mut self.display, field, direction),
            None => {
                let other = SortState::other(field);
                match self.sort.get(other) {
                    Some(direction) => sort_records(&mut self.display, other, direction),
                    None => self.display = self.reference.clone(),
                }
            }
        }
        next
    }
}
