//! Dashboard main renderer

use super::components::{chart, footer, header, logs, table};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

/// Screen regions of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    pub header: Rect,
    pub chart: Rect,
    pub table: Rect,
    pub logs: Rect,
    pub footer: Rect,
}

impl DashboardLayout {
    pub fn new(area: Rect) -> Self {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Percentage(35),
                Constraint::Fill(1),
                Constraint::Length(2),
            ])
            .margin(1)
            .split(area);

        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[2]);

        Self {
            header: main_chunks[0],
            chart: main_chunks[1],
            table: content_chunks[0],
            logs: content_chunks[1],
            footer: main_chunks[3],
        }
    }
}

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let layout = DashboardLayout::new(f.area());

    header::render_header(f, layout.header, state);
    chart::render_chart(f, layout.chart, state);
    table::render_table(f, layout.table, state);
    logs::render_logs_panel(f, layout.logs, state);
    footer::render_footer(f, layout.footer, state);
}
