//! Terminal UI: splash screen, then the usage dashboard.

mod app;
pub mod dashboard;
pub mod splash;

pub use app::{App, UIConfig, run};
