//! Dashboard chart component
//!
//! Renders credits per date from the reference list as a bar chart

use super::super::state::DashboardState;
use crate::usage::ChartData;
use crate::usage::format::format_credits;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph};

const MIN_BAR_WIDTH: u16 = 5;
const MAX_BAR_WIDTH: u16 = 15;
const BAR_GAP: u16 = 1;

/// Bar width that fits `bars` bars in `width` columns, within the min/max bounds.
pub fn bar_width_for(width: u16, bars: usize) -> u16 {
    if bars == 0 {
        return MAX_BAR_WIDTH;
    }
    let per_bar = width / bars.min(u16::MAX as usize) as u16;
    per_bar
        .saturating_sub(BAR_GAP)
        .clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH)
}

/// Bar heights in hundredths of a credit, the precision shown in the table.
fn to_bars(chart: &ChartData) -> Vec<Bar<'_>> {
    chart
        .iter()
        .map(|(label, value)| {
            Bar::default()
                .value((value.max(0.0) * 100.0).round() as u64)
                .text_value(format_credits(value))
                .label(Line::from(label))
        })
        .collect()
}

/// Render the "Credits Used" bar chart.
pub fn render_chart(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chart = state.view.chart();
    let block = Block::default()
        .title("CREDITS USED")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if chart.is_empty() {
        let placeholder = Paragraph::new("No data")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let inner_width = block.inner(area).width;
    let bars = to_bars(chart);
    let bar_chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width_for(inner_width, bars.len()))
        .bar_gap(BAR_GAP)
        .bar_style(Style::default().fg(Color::Rgb(75, 192, 192)))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(75, 192, 192))
                .add_modifier(Modifier::BOLD),
        )
        .label_style(Style::default().fg(Color::Gray));

    f.render_widget(bar_chart, area);
}
