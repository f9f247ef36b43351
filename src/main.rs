mod cli_messages;
mod config;
mod consts;
mod endpoint;
mod error_classifier;
mod events;
mod loader;
mod logging;
mod session;
mod source;
mod ui;
mod usage;

use crate::config::{Config, base_url_from_env, get_config_path};
use crate::endpoint::BaseUrl;
use crate::session::{HeadlessOptions, run_headless_mode, run_tui_mode, setup_session};
use crate::usage::SortDirection;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch usage records and show the dashboard
    Start {
        /// Base URL of the usage service (overrides environment and config file)
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        /// Print the table and chart to stdout instead of opening the dashboard
        #[arg(long, default_value_t = false)]
        headless: bool,

        /// With --headless, print a JSON document instead of text
        #[arg(long, default_value_t = false, requires = "headless")]
        json: bool,

        /// With --headless, order rows by report name
        #[arg(long, value_enum, value_name = "ORDER", requires = "headless")]
        report_order: Option<SortDirection>,

        /// With --headless, order rows by credits used
        #[arg(long, value_enum, value_name = "ORDER", requires = "headless")]
        credits_order: Option<SortDirection>,

        /// Enable background colors
        #[arg(long, default_value_t = false)]
        with_background: bool,

        /// Request timeout in seconds
        #[arg(long, value_name = "SECONDS")]
        timeout_secs: Option<u64>,
    },
    /// Save the usage service base URL to the config file
    SetBaseUrl {
        /// Base URL, e.g. http://localhost:8000
        url: String,
    },
    /// Delete the config file
    ClearConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            base_url,
            headless,
            json,
            report_order,
            credits_order,
            with_background,
            timeout_secs,
        } => {
            let config = load_config(&config_path)?;
            let env_base_url = base_url_from_env();
            let base_url = config
                .resolve_base_url(base_url.as_deref(), env_base_url.as_deref())
                .inspect_err(|e| print_cmd_error!("Invalid base URL", e.to_string().as_str()))?;
            if timeout_secs == Some(0) {
                print_cmd_warn!("Timeout too small", "using 1 second instead of 0");
            }
            let timeout = config.resolve_timeout(timeout_secs);

            let session = setup_session(base_url, timeout)?;
            if headless {
                let options = HeadlessOptions {
                    json,
                    report_order,
                    credits_order,
                };
                run_headless_mode(session, options).await
            } else {
                run_tui_mode(session, with_background).await
            }
        }
        Command::SetBaseUrl { url } => {
            let base_url: BaseUrl = url
                .parse()
                .inspect_err(|e: &crate::endpoint::BaseUrlError| {
                    print_cmd_error!("Invalid base URL", e.to_string().as_str())
                })?;
            let mut config = load_config(&config_path)?;
            config.base_url = Some(base_url.to_string());
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!(
                "Base URL saved",
                "{} -> {}",
                base_url,
                config_path.display()
            );
            Ok(())
        }
        Command::ClearConfig => {
            Config::clear(&config_path)?;
            print_cmd_info!("Config cleared", "{}", config_path.display());
            Ok(())
        }
    }
}

/// Read the config file, reporting a readable error when it is malformed.
fn load_config(path: &Path) -> Result<Config, Box<dyn Error>> {
    Config::load_or_default(path).map_err(|e| {
        print_cmd_error!(
            "Failed to read config",
            format!("{}: {}", path.display(), e).as_str()
        );
        e.into()
    })
}
