//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::logging::LogLevel;
use ratatui::prelude::Color;

/// Get a ratatui color for an activity-log entry based on its level
pub fn get_level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Error => Color::LightRed,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Info => Color::Cyan,
        LogLevel::Debug | LogLevel::Trace => Color::DarkGray,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    // Replace verbose HTTP error patterns with cleaner messages
    if msg.contains("Reqwest error") && msg.contains("timed out") {
        return "Failed to fetch usage: request timed out".to_string();
    }
    if msg.contains("Reqwest error") && msg.contains("error sending request") {
        return "Failed to fetch usage: could not reach the usage service".to_string();
    }
    msg.to_string()
}
