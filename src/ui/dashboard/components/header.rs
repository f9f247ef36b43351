//! Dashboard header component
//!
//! Renders the title and the load status gauge

use super::super::state::DashboardState;
use crate::loader::LoadState;
use crate::usage::format::format_credits;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and load status.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title_text = format!(
        "CREDIT USAGE DASHBOARD v{} - {}",
        env!("CARGO_PKG_VERSION"),
        state.base_url
    );
    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let (progress_text, gauge_color, progress_percent) = match &state.load_state {
        LoadState::Pending => {
            // Loops every 20 ticks while the request is in flight
            let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
            (
                "LOADING - Fetching usage records".to_string(),
                Color::LightBlue,
                progress,
            )
        }
        LoadState::Loaded { records } => (
            format!(
                "LOADED - {} records, {} credits",
                records,
                format_credits(state.view.chart().total())
            ),
            Color::LightGreen,
            100,
        ),
        LoadState::Failed { .. } => (
            "FETCH FAILED - See activity log".to_string(),
            Color::LightRed,
            100,
        ),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
