//! Dashboard usage table component
//!
//! Renders the display list with sortable Report Name and Credits Used headers

use super::super::state::DashboardState;
use crate::loader::LoadState;
use crate::usage::format::{format_credits, format_timestamp};
use crate::usage::{SortField, SortState};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

const COLUMN_WIDTHS: [Constraint; 4] = [
    Constraint::Percentage(22),
    Constraint::Percentage(26),
    Constraint::Percentage(30),
    Constraint::Percentage(22),
];

const COLUMN_SPACING: u16 = 1;

/// Column index of each sortable header.
const SORTABLE_COLUMNS: [(usize, SortField); 2] =
    [(2, SortField::ReportName), (3, SortField::CreditsUsed)];

fn table_block(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
}

fn header_label(field: SortField, sort: SortState) -> String {
    match sort.get(field) {
        Some(direction) => format!("{} {}", field, direction.indicator()),
        None => field.to_string(),
    }
}

/// Which sortable header, if any, sits at terminal cell (`column`, `row`).
pub fn sortable_header_at(table_area: Rect, column: u16, row: u16) -> Option<SortField> {
    let inner = table_block(String::new()).inner(table_area);
    if inner.height == 0 || row != inner.y {
        return None;
    }
    let columns = Layout::horizontal(COLUMN_WIDTHS)
        .flex(Flex::Start)
        .spacing(COLUMN_SPACING)
        .split(inner);
    SORTABLE_COLUMNS
        .iter()
        .find(|(index, _)| {
            let cell = columns[*index];
            column >= cell.x && column < cell.x + cell.width
        })
        .map(|(_, field)| *field)
}

/// Render the usage table.
pub fn render_table(f: &mut Frame, area: Rect, state: &DashboardState) {
    let records = state.view.display();
    let title = format!("USAGE ({} rows)", records.len());

    if records.is_empty() {
        let message = match &state.load_state {
            LoadState::Pending => "Loading usage records...",
            LoadState::Loaded { .. } => "No usage records",
            LoadState::Failed { .. } => "No usage records (fetch failed)",
        };
        let placeholder = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(table_block(title));
        f.render_widget(placeholder, area);
        return;
    }

    let sort = state.view.sort_state();
    let sortable = Style::default()
        .fg(Color::LightYellow)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let plain = Style::default()
        .fg(Color::LightYellow)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Message ID").style(plain),
        Cell::from("Timestamp").style(plain),
        Cell::from(header_label(SortField::ReportName, sort)).style(sortable),
        Cell::from(
            Line::from(header_label(SortField::CreditsUsed, sort)).alignment(Alignment::Right),
        )
        .style(sortable),
    ]);

    let rows: Vec<Row> = records
        .iter()
        .skip(state.scroll_offset)
        .map(|record| {
            Row::new(vec![
                Cell::from(record.message_id.to_string()),
                Cell::from(format_timestamp(&record.timestamp)),
                Cell::from(record.report_name().unwrap_or_default().to_string()),
                Cell::from(
                    Line::from(format_credits(record.credits_used)).alignment(Alignment::Right),
                )
                .style(Style::default().fg(Color::Green)),
            ])
        })
        .collect();

    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .flex(Flex::Start)
        .column_spacing(COLUMN_SPACING)
        .block(table_block(title));

    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usage::SortDirection;

    #[test]
    fn header_labels_carry_direction_glyphs() {
        let sort = SortState {
            report_name: Some(SortDirection::Asc),
            credits_used: Some(SortDirection::Desc),
        };
        assert_eq!(header_label(SortField::ReportName, sort), "Report Name ▲");
        assert_eq!(header_label(SortField::CreditsUsed, sort), "Credits Used ▼");
        assert_eq!(
            header_label(SortField::CreditsUsed, SortState::default()),
            "Credits Used"
        );
    }

    #[test]
    fn clicks_resolve_to_sortable_headers() {
        let area = Rect::new(0, 10, 102, 20);
        let header_row = 11;

        // Columns 0 and 1 are not sortable
        assert_eq!(sortable_header_at(area, 2, header_row), None);
        // Report Name column starts a little past the middle
        assert_eq!(
            sortable_header_at(area, 60, header_row),
            Some(SortField::ReportName)
        );
        assert_eq!(
            sortable_header_at(area, 95, header_row),
            Some(SortField::CreditsUsed)
        );
        // Only the header row counts
        assert_eq!(sortable_header_at(area, 95, header_row + 1), None);
        assert_eq!(sortable_header_at(area, 95, 10), None);
    }
}
