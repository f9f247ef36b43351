//! Session setup and initialization

use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::endpoint::BaseUrl;
use crate::events::Event;
use crate::loader::{LoadOutcome, spawn_loader};
use crate::logging::{ActivityLogger, get_rust_log_level};
use crate::source::UsageClient;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Log events emitted while the session runs
    pub event_receiver: mpsc::Receiver<Event>,
    /// The session's single fetch
    pub load_receiver: oneshot::Receiver<LoadOutcome>,
    /// Base URL being read, for display
    pub base_url: String,
}

/// Sets up a dashboard session
///
/// This function handles all the common setup required for both TUI and headless modes:
/// 1. Routes `log` records into an event channel
/// 2. Builds the HTTP client for the usage service
/// 3. Starts the one fetch of the session
///
/// # Arguments
/// * `base_url` - Root of the service serving `/usage`
/// * `timeout` - Per-request timeout
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - A logger was already installed
pub fn setup_session(base_url: BaseUrl, timeout: Duration) -> Result<SessionData, Box<dyn Error>> {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    ActivityLogger::new(event_sender, get_rust_log_level()).init()?;

    let display_url = base_url.to_string();
    let client = UsageClient::new(base_url, timeout);
    let load_receiver = spawn_loader(Arc::new(client));

    Ok(SessionData {
        event_receiver,
        load_receiver,
        base_url: display_url,
    })
}
