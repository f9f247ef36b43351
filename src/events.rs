//! Event System
//!
//! Activity-log entries produced from `log` records

use crate::logging::LogLevel;
use chrono::Local;
use std::fmt::Display;

/// Part of the dashboard an event came from, derived from the log target.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Origin {
    Loader,
    Source,
    Dashboard,
    Session,
}

impl Origin {
    fn from_target(target: &str) -> Self {
        let module = target.split("::").nth(1).unwrap_or_default();
        match module {
            "loader" => Origin::Loader,
            "source" => Origin::Source,
            "ui" => Origin::Dashboard,
            _ => Origin::Session,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub origin: Origin,
    pub msg: String,
    pub timestamp: String,
    pub level: LogLevel,
}

impl Event {
    pub fn new(level: LogLevel, target: &str, msg: String) -> Self {
        Self {
            origin: Origin::from_target(target),
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            level,
        }
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?} [{}] {}: {}",
            self.level, self.timestamp, self.origin, self.msg
        )
    }
}
