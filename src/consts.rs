pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Defaults for the usage source, the UI loop and the activity log,
    //! organized by functional area.

    // =============================================================================
    // USAGE SOURCE
    // =============================================================================

    /// Base URL used when neither the CLI, the environment nor the config file names one.
    pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

    /// Environment variable that overrides the configured base URL.
    pub const BASE_URL_ENV_VAR: &str = "USAGE_DASHBOARD_BASE_URL";

    /// Connect and total timeout for the usage request (seconds)
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

    // =============================================================================
    // CONFIG FILE
    // =============================================================================

    /// Directory under `$HOME` holding the config file.
    pub const CONFIG_DIR_NAME: &str = ".usage-dashboard";

    pub const CONFIG_FILE_NAME: &str = "config.json";

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the log event channel feeding the dashboard
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// How long the splash screen stays up unless a key is pressed (milliseconds)
    pub const SPLASH_DURATION_MS: u64 = 1500;

    /// Input poll interval of the UI loop (milliseconds)
    pub const UI_POLL_INTERVAL_MS: u64 = 100;

    /// Rows moved by PageUp / PageDown in the usage table
    pub const TABLE_PAGE_SIZE: usize = 10;
}
