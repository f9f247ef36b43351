//! Usage dashboard
//!
//! State, layout and one module per panel

pub mod components;
pub mod renderer;
pub mod state;
pub mod utils;

pub use renderer::{DashboardLayout, render_dashboard};
pub use state::DashboardState;
