use std::sync::Arc;
use std::time::Duration;

use brigade::{background, commands, config, provider, tui, types};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use provider::{MerchantDataProvider, MockProvider};
use tokio::sync::{mpsc, RwLock};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use types::{SharedData, SharedDataHandle};

// Channel Constants
/// Buffer size for manual refresh trigger channel
const REFRESH_CHANNEL_BUFFER_SIZE: usize = 10;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

/// Seconds between simulated kitchen ticks in the mock backend
const MOCK_TICK_SECS: u64 = 15;

#[derive(Parser)]
#[command(name = "brigade")]
#[command(
    about = "Restaurant merchant dashboard",
    long_about = "Restaurant merchant dashboard\n\nIf no command is specified, the program starts in interactive mode."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List orders in a date range
    Orders {
        /// Start date in YYYY-MM-DD format (defaults to a week before the end)
        #[arg(short, long)]
        from: Option<String>,

        /// End date in YYYY-MM-DD format (defaults to today)
        #[arg(short, long)]
        to: Option<String>,

        /// Only show orders in this status (e.g. preparing, out-for-delivery)
        #[arg(short, long)]
        status: Option<types::OrderStatus>,
    },
    /// Display the menu with availability
    Menu,
    /// List delivery slots in a date range
    Fleet {
        /// Start date in YYYY-MM-DD format (defaults to a week before the end)
        #[arg(short, long)]
        from: Option<String>,

        /// End date in YYYY-MM-DD format (defaults to today)
        #[arg(short, long)]
        to: Option<String>,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!(
        "Configuration File: {} (Exists: {})",
        path_str,
        if exists { "yes" } else { "no" }
    );
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("refresh_interval: {} seconds", cfg.refresh_interval);
    println!("date_format: {}", cfg.date_format);
    println!("currency: {}", cfg.currency);
    println!("use_unicode: {}", cfg.use_unicode);
    println!();
    println!("[theme]");
    println!("accent_fg: {:?}", cfg.theme.accent_fg);
    println!(
        "unfocused_accent_fg: {:?}{}",
        cfg.theme.unfocused_accent_fg(),
        if cfg.theme.unfocused_accent_fg.is_none() {
            " (auto: 50% darker)"
        } else {
            ""
        }
    );
    println!("range_fg: {:?}", cfg.theme.range_fg);
    println!("today_fg: {:?}", cfg.theme.today_fg);
    println!("error_fg: {:?}", cfg.theme.error_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Run TUI mode with background data fetching
async fn run_tui_mode(config: config::Config, today: NaiveDate) -> anyhow::Result<()> {
    let mock = Arc::new(MockProvider::new(today));
    let provider: Arc<dyn MerchantDataProvider> = mock.clone();
    let shared_data: SharedDataHandle =
        Arc::new(RwLock::new(SharedData::new(config.clone(), today)));

    // Create channel for manual refresh triggers
    let (refresh_tx, refresh_rx) = mpsc::channel::<()>(REFRESH_CHANNEL_BUFFER_SIZE);

    // Spawn background task to fetch data
    let bg_provider = Arc::clone(&provider);
    let bg_shared = Arc::clone(&shared_data);
    tokio::spawn(async move {
        background::fetch_data_loop(bg_provider, bg_shared, config.refresh_interval, refresh_rx)
            .await;
    });

    // Simulated kitchen progress so the mock data keeps moving
    let tick_tx = refresh_tx.clone();
    tokio::spawn(async move {
        let mut timer = tokio::time::interval(Duration::from_secs(MOCK_TICK_SECS));
        timer.tick().await;
        loop {
            timer.tick().await;
            if mock.tick().await.is_some() {
                let _ = tick_tx.send(()).await;
            }
        }
    });

    tui::run(provider, shared_data, refresh_tx).await
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    provider: &Arc<dyn MerchantDataProvider>,
    command: Commands,
    config: &config::Config,
    today: NaiveDate,
) -> anyhow::Result<()> {
    let display = config::DisplayConfig::from_config(config);
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Orders { from, to, status } => {
            let range = commands::parse_range(from, to, today)?;
            commands::orders::execute(provider, range, status, &display).await
        }
        Commands::Menu => commands::menu::execute(provider, &display).await,
        Commands::Fleet { from, to } => {
            let range = commands::parse_range(from, to, today)?;
            commands::fleet::execute(provider, range, &display).await
        }
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let today = chrono::Local::now().date_naive();

    // If no subcommand, run TUI
    if cli.command.is_none() {
        if let Err(e) = run_tui_mode(config, today).await {
            eprintln!("Error running TUI: {:#}", e);
            std::process::exit(1);
        }
        return;
    }

    let command = cli.command.unwrap();

    // Handle Config command separately (doesn't need a provider)
    if let Commands::Config = command {
        handle_config_command();
        return;
    }

    let provider: Arc<dyn MerchantDataProvider> = Arc::new(MockProvider::new(today));
    if let Err(e) = execute_command(&provider, command, &config, today).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
