//! Dashboard footer component
//!
//! Key hints on the left, the active sort on the right

use super::super::state::DashboardState;
use crate::usage::{SortField, SortState};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const KEY_HINTS: [(&str, &str); 5] = [
    ("r", "report"),
    ("c", "credits"),
    ("↑↓", "scroll"),
    ("PgUp/PgDn", "page"),
    ("q", "quit"),
];

fn hints_line() -> Line<'static> {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(Color::Cyan);

    let mut spans = Vec::with_capacity(KEY_HINTS.len() * 2);
    for (key, label) in KEY_HINTS {
        spans.push(Span::styled(format!(" {} ", key), key_style));
        spans.push(Span::styled(format!(" {}  ", label), label_style));
    }
    Line::from(spans)
}

/// "Sort: Report Name ▲, Credits Used ▼", or "Unsorted".
fn sort_summary(sort: SortState) -> String {
    let active: Vec<String> = [SortField::ReportName, SortField::CreditsUsed]
        .into_iter()
        .filter_map(|field| {
            sort.get(field)
                .map(|direction| format!("{} {}", field, direction.indicator()))
        })
        .collect();
    if active.is_empty() {
        "Unsorted".to_string()
    } else {
        format!("Sort: {}", active.join(", "))
    }
}

pub fn render_footer(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [left, right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(40)]).areas(inner);
    f.render_widget(Paragraph::new(hints_line()), left);
    f.render_widget(
        Paragraph::new(sort_summary(state.view.sort_state()))
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::LightYellow)),
        right,
    );
}
