//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::{SPLASH_DURATION_MS, UI_POLL_INTERVAL_MS};
use crate::events::Event as ActivityEvent;
use crate::loader::LoadOutcome;
use crate::ui::dashboard::components::table::sortable_header_at;
use crate::ui::dashboard::{DashboardLayout, DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crate::usage::SortField;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, oneshot};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub base_url: String,
}

impl UIConfig {
    pub fn new(with_background_color: bool, base_url: String) -> Self {
        Self {
            with_background_color,
            base_url,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the usage chart and table.
    Dashboard(Box<DashboardState>),
}

/// What the UI loop should do after handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives log events for the activity panel.
    event_receiver: mpsc::Receiver<ActivityEvent>,

    /// Result of the session's single fetch, until it has been applied.
    load_receiver: Option<oneshot::Receiver<LoadOutcome>>,

    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        event_receiver: mpsc::Receiver<ActivityEvent>,
        load_receiver: oneshot::Receiver<LoadOutcome>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            event_receiver,
            load_receiver: Some(load_receiver),
            ui_config,
        }
    }

    fn show_dashboard(&mut self) {
        self.current_screen =
            Screen::Dashboard(Box::new(DashboardState::new(self.ui_config.clone())));
    }

    /// Pull log events and the fetch result into the dashboard.
    fn sync_dashboard(&mut self) {
        let Screen::Dashboard(state) = &mut self.current_screen else {
            return;
        };

        while let Ok(event) = self.event_receiver.try_recv() {
            state.add_event(event);
        }

        if let Some(receiver) = self.load_receiver.as_mut() {
            match receiver.try_recv() {
                Ok(outcome) => {
                    state.apply_load(outcome);
                    self.load_receiver = None;
                }
                Err(oneshot::error::TryRecvError::Empty) => {}
                Err(oneshot::error::TryRecvError::Closed) => {
                    state.mark_load_lost();
                    self.load_receiver = None;
                }
            }
        }

        state.update();
    }

    fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            return Flow::Quit;
        }

        // Any key press will skip the splash screen
        if matches!(self.current_screen, Screen::Splash) {
            self.show_dashboard();
            return Flow::Continue;
        }
        let Screen::Dashboard(state) = &mut self.current_screen else {
            return Flow::Continue;
        };

        match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => {
                state.toggle_sort(SortField::ReportName);
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                state.toggle_sort(SortField::CreditsUsed);
            }
            KeyCode::Down | KeyCode::Char('j') => state.scroll_down(1),
            KeyCode::Up | KeyCode::Char('k') => state.scroll_up(1),
            KeyCode::PageDown => state.page_down(),
            KeyCode::PageUp => state.page_up(),
            KeyCode::Home | KeyCode::Char('g') => state.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => state.scroll_to_bottom(),
            _ => {}
        }
        Flow::Continue
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, frame_area: Rect) {
        let Screen::Dashboard(state) = &mut self.current_screen else {
            return;
        };
        let layout = DashboardLayout::new(frame_area);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(field) = sortable_header_at(layout.table, mouse.column, mouse.row) {
                    state.toggle_sort(field);
                }
            }
            MouseEventKind::ScrollDown => state.scroll_down(1),
            MouseEventKind::ScrollUp => state.scroll_up(1),
            _ => {}
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_millis(SPLASH_DURATION_MS);
    let mut frame_area = Rect::default();

    // UI event loop
    loop {
        app.sync_dashboard();
        terminal.draw(|f| {
            frame_area = f.area();
            render(f, &app.current_screen, &app.ui_config);
        })?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.show_dashboard();
                continue;
            }
        }

        // Poll for input events
        if event::poll(Duration::from_millis(UI_POLL_INTERVAL_MS))? {
            match event::read()? {
                // Skip events that are not KeyEventKind::Press
                Event::Key(key) if key.kind == event::KeyEventKind::Release => continue,
                Event::Key(key) => {
                    if app.handle_key(key) == Flow::Quit {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse, frame_area),
                _ => {}
            }
        }

        // Let the loader task make progress between frames
        tokio::task::yield_now().await;
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen, ui_config: &UIConfig) {
    match screen {
        Screen::Splash => render_splash(f, &ui_config.base_url),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::LoadState;
    use crate::usage::{MessageId, SortDirection, UsageRecord};
    use chrono::{TimeZone, Utc};
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn record(id: i64, report_name: &str, credits_used: f64) -> UsageRecord {
        UsageRecord {
            message_id: MessageId::Number(id),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
            report_name: Some(report_name.to_string()),
            credits_used,
        }
    }

    fn app_with(outcome: LoadOutcome) -> App {
        let (_event_sender, event_receiver) = mpsc::channel(8);
        let (load_sender, load_receiver) = oneshot::channel();
        load_sender.send(outcome).unwrap();
        App::new(
            event_receiver,
            load_receiver,
            UIConfig::new(false, "http://localhost:8000".to_string()),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn dashboard(app: &App) -> &DashboardState {
        match &app.current_screen {
            Screen::Dashboard(state) => state,
            Screen::Splash => panic!("still on splash"),
        }
    }

    #[test]
    fn any_key_leaves_splash_and_q_quits() {
        let mut app = app_with(Ok(vec![]));
        assert_eq!(app.handle_key(key(KeyCode::Enter)), Flow::Continue);
        assert!(matches!(app.current_screen, Screen::Dashboard(_)));
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Flow::Quit);
    }

    #[test]
    fn fetch_result_reaches_dashboard_and_keys_sort() {
        let mut app = app_with(Ok(vec![record(1, "B", 5.0), record(2, "A", 3.0)]));
        app.show_dashboard();
        app.sync_dashboard();
        assert_eq!(
            dashboard(&app).load_state,
            LoadState::Loaded { records: 2 }
        );
        assert!(app.load_receiver.is_none());

        app.handle_key(key(KeyCode::Char('r')));
        let state = dashboard(&app);
        assert_eq!(
            state.view.sort_state().report_name,
            Some(SortDirection::Asc)
        );
        assert_eq!(state.view.display()[0].message_id, MessageId::Number(2));
    }

    #[test]
    fn header_click_toggles_sort() {
        let mut app = app_with(Ok(vec![record(1, "B", 5.0), record(2, "A", 3.0)]));
        app.show_dashboard();
        app.sync_dashboard();

        let area = Rect::new(0, 0, 120, 40);
        let table = DashboardLayout::new(area).table;
        let column = (table.x..table.x + table.width)
            .find(|c| sortable_header_at(table, *c, table.y + 1) == Some(SortField::CreditsUsed))
            .unwrap();
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row: table.y + 1,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click, area);
        assert_eq!(
            dashboard(&app).view.sort_state().credits_used,
            Some(SortDirection::Asc)
        );
    }

    #[test]
    fn renders_failed_fetch_without_panicking() {
        let mut app = app_with(Err(crate::source::error::UsageSourceError::Http {
            status: 500,
            message: "boom".to_string(),
        }));
        app.show_dashboard();
        app.sync_dashboard();
        assert!(matches!(dashboard(&app).load_state, LoadState::Failed { .. }));

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|f| render(f, &app.current_screen, &app.ui_config))
            .unwrap();
        let rendered: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(rendered.contains("FETCH FAILED"));
        assert!(rendered.contains("No data"));
    }
}
