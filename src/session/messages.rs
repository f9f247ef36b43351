//! Unified messaging system for session operations

// ANSI Color Codes for session messages
pub const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
pub const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
pub const COLOR_RESET: &str = "\x1b[0m";

/// Session-specific message types
#[derive(Debug, Clone)]
pub enum SessionMessage {
    /// Normal session start/shutdown messages
    Info(String),
    /// Success messages for completed operations
    Success(String),
}

impl SessionMessage {
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    /// Message text with its colored prefix.
    pub fn render(&self) -> String {
        match self {
            Self::Info(msg) => format!("{}[INFO]{} {}", COLOR_INFO, COLOR_RESET, msg),
            Self::Success(msg) => format!("{}[SUCCESS]{} {}", COLOR_SUCCESS, COLOR_RESET, msg),
        }
    }

    /// Print to stdout, or stderr when stdout carries machine-readable output.
    pub fn print(&self, to_stderr: bool) {
        if to_stderr {
            eprintln!("{}", self.render());
        } else {
            println!("{}", self.render());
        }
    }
}

/// Print session startup message
pub fn print_session_starting(mode: &str, base_url: &str, to_stderr: bool) {
    SessionMessage::info(format!("Starting {} mode against {}", mode, base_url)).print(to_stderr);
}

/// Print session exit message
pub fn print_session_exit_success(to_stderr: bool) {
    SessionMessage::success("Usage dashboard exited successfully").print(to_stderr);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_prefixes_level() {
        let info = SessionMessage::info("hello").render();
        assert!(info.starts_with(COLOR_INFO));
        assert!(info.ends_with("[INFO]\x1b[0m hello"));
        assert!(SessionMessage::success("done").render().contains("[SUCCESS]"));
    }
}
