//! Dashboard activity log component

use super::super::state::DashboardState;
use super::super::utils::{clean_http_error_message, format_compact_timestamp, get_level_color};
use crate::events::Event;
use crate::logging::LogLevel;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem};

fn level_marker(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "✖",
        LogLevel::Warn => "!",
        LogLevel::Info => "•",
        LogLevel::Debug | LogLevel::Trace => "·",
    }
}

fn event_item(event: &Event) -> ListItem<'static> {
    let color = get_level_color(event.level);
    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{} ", level_marker(event.level)),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} ", format_compact_timestamp(&event.timestamp)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{}: ", event.origin),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(clean_http_error_message(&event.msg), Style::default().fg(color)),
    ]))
}

/// Render the activity log, newest entry on top.
pub fn render_logs_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let visible = area.height.saturating_sub(2).max(1) as usize;
    let items: Vec<ListItem> = if state.activity_logs.is_empty() {
        vec![ListItem::new("Waiting for activity...").style(Style::default().fg(Color::DarkGray))]
    } else {
        state
            .activity_logs
            .iter()
            .rev()
            .take(visible)
            .map(event_item)
            .collect()
    };

    let block = Block::default()
        .title(format!("ACTIVITY LOG ({})", state.activity_logs.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::app::UIConfig;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(state: &DashboardState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 8)).unwrap();
        terminal
            .draw(|f| render_logs_panel(f, f.area(), state))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn shows_origin_and_cleaned_message() {
        let mut state = DashboardState::new(UIConfig::new(false, "http://localhost:8000".into()));
        state.add_to_activity_log(Event::new(
            LogLevel::Warn,
            "usage_dashboard::loader",
            "Failed to fetch usage: Reqwest error: operation timed out".to_string(),
        ));

        let text = rendered(&state);
        assert!(text.contains("ACTIVITY LOG (1)"));
        assert!(text.contains("Loader:"));
        assert!(text.contains("request timed out"));
    }

    #[test]
    fn empty_log_shows_placeholder() {
        let state = DashboardState::new(UIConfig::new(false, "http://localhost:8000".into()));
        assert!(rendered(&state).contains("Waiting for activity"));
    }
}
