//! CLI entry point for filmguide.
//!
//! This binary exercises the schedule filters from the command line: it
//! derives the channel sidebar for a channel list and replays timed user
//! gestures through a live filter session.
//!
//! # Usage
//!
//! ```bash
//! filmguide [OPTIONS] <COMMAND>
//!
//! # Show the channel sidebar for a channel list
//! filmguide --channels channels.json channels
//!
//! # Replay a gesture script and print the final criteria and telemetry
//! filmguide --channels channels.json replay script.json --debounce-ms 300
//!
//! # Print the effective configuration
//! filmguide --config filmguide.json config
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

mod report;
mod script;

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::WrapErr;
use fg_core::{Config, FilterCriteria};
use fg_filters::{
    ChannelListing, ChannelSource, JsonFileSource, PendingSource, derive_selection, sink_for,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::script::ReplayScript;

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Schedule filter tooling for filmguide.
///
/// Derives the channel sidebar from a channel list and replays user
/// gestures against the filter store.
#[derive(Parser)]
#[command(name = "filmguide", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,

    /// Path to a JSON configuration file.
    #[arg(short, long, global = true, env = "FILMGUIDE_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Path to the channel list (`{"channels": [...]}`).
    ///
    /// Overrides `channels.path` from the configuration file. Without a
    /// channel list the sidebar is shown as loading.
    #[arg(long, global = true, env = "FILMGUIDE_CHANNELS")]
    channels: Option<Utf8PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Derive and print the channel sidebar.
    Channels {
        /// Filter criteria to derive from (JSON). Defaults to nothing hidden.
        #[arg(long)]
        state: Option<Utf8PathBuf>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Replay a timed gesture script through a filter session.
    Replay {
        /// The script to replay.
        script: Utf8PathBuf,

        /// Search debounce window in milliseconds (overrides the config).
        #[arg(long)]
        debounce_ms: Option<u64>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the effective configuration as JSON.
    Config,
}

/// Output format.
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text.
    Text,
    /// Pretty-printed JSON.
    Json,
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `info` level by default.
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(level)
    });

    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_ansi(use_ansi))
        .with(filter)
        .init();
}

/// Builds the effective [`Config`] from the file and CLI overrides.
///
/// # Errors
///
/// Returns an error if the configuration file cannot be loaded or the
/// result fails validation.
fn build_config(cli: &Cli, debounce_ms: Option<u64>) -> color_eyre::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(path) = &cli.channels {
        config.channels.path = Some(path.clone());
    }
    if let Some(debounce_ms) = debounce_ms {
        config.search.debounce_ms = debounce_ms;
    }

    config.validate()?;
    Ok(config)
}

/// Reads the channel list named by the configuration.
fn load_listing(config: &Config) -> color_eyre::Result<ChannelListing> {
    match &config.channels.path {
        Some(path) => {
            let source = JsonFileSource::load(path)?;
            let listing = source.listing();
            info!(path = %path, channels = listing.channels().len(), "Loaded channel list");
            Ok(listing)
        }
        None => {
            info!("No channel list configured; sidebar is loading");
            Ok(PendingSource.listing())
        }
    }
}

fn load_criteria(path: &Utf8Path) -> color_eyre::Result<FilterCriteria> {
    let raw = std::fs::read_to_string(path.as_std_path())
        .wrap_err_with(|| format!("Failed to read filter state: {path}"))?;
    serde_json::from_str(&raw).wrap_err_with(|| format!("Invalid filter state: {path}"))
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Prints the channel sidebar for the configured channel list.
///
/// # Errors
///
/// Returns an error if the channel list or state file cannot be read.
fn run_channels(
    config: &Config,
    state: Option<&Utf8Path>,
    format: OutputFormat,
) -> color_eyre::Result<()> {
    let criteria = state.map(load_criteria).transpose()?.unwrap_or_default();
    let listing = load_listing(config)?;
    let selection = derive_selection(&listing, &criteria);

    let content = match format {
        OutputFormat::Text => report::render_selection(&selection),
        OutputFormat::Json => serde_json::to_string_pretty(&selection)? + "\n",
    };
    write_stdout(&content)
}

/// Replays a gesture script in real time.
///
/// # Errors
///
/// Returns an error if the script or channel list cannot be read, or a
/// step cannot be applied.
async fn run_replay(
    config: &Config,
    script_path: &Utf8Path,
    format: OutputFormat,
) -> color_eyre::Result<()> {
    let script = ReplayScript::load(script_path)?;
    let listing = load_listing(config)?;

    info!(
        script = %script_path,
        duration_ms = u64::try_from(script.duration().as_millis()).unwrap_or(u64::MAX),
        debounce_ms = config.search.debounce_ms,
        "Replaying script"
    );

    let outcome = script::replay(
        &script,
        &listing,
        sink_for(&config.telemetry),
        config.search.delay(),
    )
    .await?;

    let content = match format {
        OutputFormat::Text => format!(
            "{}\n{}",
            report::render_criteria(&outcome.criteria),
            report::render_events(&outcome.events)
        ),
        OutputFormat::Json => serde_json::to_string_pretty(&outcome)? + "\n",
    };
    write_stdout(&content)
}

/// Prints the effective configuration.
fn run_config(config: &Config) -> color_eyre::Result<()> {
    write_stdout(&(serde_json::to_string_pretty(config)? + "\n"))
}

fn write_stdout(content: &str) -> color_eyre::Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write!(handle, "{content}")?;
    Ok(())
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    // 1. Install color-eyre FIRST (before any potential panics)
    color_eyre::install()?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();

    // 3. Initialize tracing (handles --no-color for log output)
    init_tracing(cli.verbose, cli.no_color);

    // 4. Route to appropriate command
    match &cli.command {
        Commands::Channels { state, format } => {
            let config = build_config(&cli, None)?;
            run_channels(&config, state.as_deref(), *format)
        }
        Commands::Replay {
            script,
            debounce_ms,
            format,
        } => {
            let config = build_config(&cli, *debounce_ms)?;
            run_replay(&config, script, *format).await
        }
        Commands::Config => {
            let config = build_config(&cli, None)?;
            run_config(&config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf8(path: &std::path::Path) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(path.to_path_buf()).unwrap()
    }

    #[test]
    fn test_build_config_defaults() {
        let cli = Cli::try_parse_from(["filmguide", "config"]).unwrap();
        let config = build_config(&cli, None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_build_config_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = utf8(&dir.path().join("filmguide.json"));
        std::fs::write(
            &path,
            r#"{"search": {"debounce_ms": 250}, "channels": {"path": "from-file.json"}}"#,
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "filmguide",
            "--config",
            path.as_str(),
            "--channels",
            "from-flag.json",
            "replay",
            "script.json",
        ])
        .unwrap();
        let config = build_config(&cli, Some(800)).unwrap();

        assert_eq!(config.search.debounce_ms, 800);
        assert_eq!(
            config.channels.path.as_deref().map(Utf8Path::as_str),
            Some("from-flag.json")
        );
    }

    #[test]
    fn test_build_config_rejects_zero_debounce() {
        let cli = Cli::try_parse_from(["filmguide", "replay", "script.json"]).unwrap();
        assert!(build_config(&cli, Some(0)).is_err());
    }

    #[test]
    fn test_load_listing_without_path_is_loading() {
        let listing = load_listing(&Config::default()).unwrap();
        assert!(listing.is_loading());
    }

    #[test]
    fn test_load_listing_and_criteria_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let channels = utf8(&dir.path().join("channels.json"));
        std::fs::write(
            &channels,
            r#"{"channels": [{"id": 1, "name": "RTP1", "is_premium": false}]}"#,
        )
        .unwrap();
        let state = utf8(&dir.path().join("state.json"));
        std::fs::write(&state, r#"{"channels": [1]}"#).unwrap();

        let mut config = Config::default();
        config.channels.path = Some(channels);
        let listing = load_listing(&config).unwrap();
        let criteria = load_criteria(&state).unwrap();

        let selection = derive_selection(&listing, &criteria);
        assert_eq!(
            report::render_selection(&selection),
            "Channels (0/1 shown) [All]\n  [ ] #1 RTP1\n"
        );
    }
}
