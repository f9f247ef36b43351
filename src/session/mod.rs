//! Session lifecycle: one fetch, shown in the TUI or printed headless.

pub mod headless_mode;
pub mod messages;
pub mod report;
pub mod setup;
pub mod tui_mode;

pub use headless_mode::{HeadlessOptions, run_headless_mode};
pub use setup::{SessionData, setup_session};
pub use tui_mode::run_tui_mode;
