//! Splash screen shown while the first request is in flight.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

pub const LOGO_NAME: &str = r#"
  ██╗   ██╗  ███████╗   █████╗    ██████╗   ███████╗
  ██║   ██║  ██╔════╝  ██╔══██╗  ██╔════╝   ██╔════╝
  ██║   ██║  ███████╗  ███████║  ██║  ███╗  █████╗  
  ██║   ██║  ╚════██║  ██╔══██║  ██║   ██║  ██╔══╝  
  ╚██████╔╝  ███████║  ██║  ██║  ╚██████╔╝  ███████╗
   ╚═════╝   ╚══════╝  ╚═╝  ╚═╝   ╚═════╝   ╚══════╝
"#;

fn splash_lines(base_url: &str) -> Vec<Line<'static>> {
    let logo_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line<'static>> = LOGO_NAME
        .trim_matches('\n')
        .lines()
        .map(|line| Line::styled(line.to_string(), logo_style))
        .collect();

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Credit Usage Dashboard",
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::styled(
        format!("v{}  ·  {}", env!("CARGO_PKG_VERSION"), base_url),
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::ITALIC),
    ));
    lines.push(Line::styled(
        "press any key to continue",
        Style::default().fg(Color::DarkGray),
    ));
    lines
}

pub fn render_splash(f: &mut Frame, base_url: &str) {
    let lines = splash_lines(base_url);
    let [area] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .areas(f.area());

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
