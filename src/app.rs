use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::sync::mpsc;
use tokio::task;
use tracing_subscriber::EnvFilter;

use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::fetcher;
use crate::tui;

pub const DEFAULT_COUNT: u32 = 12;
pub const DEFAULT_NATIONALITY: &str = "US";
pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Clone, Debug)]
pub struct RunConfig {
    pub count: u32,
    pub nationality: String,
    pub endpoint: String,
    pub timeout_seconds: u64,
    pub log_file: Option<PathBuf>,
    pub verbosity: u8,
}

/// Merge CLI arguments over the config file over built-in defaults.
pub fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let count = args.count.or(cfg.count).unwrap_or(DEFAULT_COUNT);
    if count == 0 || count > 100 {
        return Err(format!(
            "invalid count {count}, expected a value between 1 and 100"
        ));
    }

    let nationality = args
        .nationality
        .or(cfg.nationality)
        .unwrap_or_else(|| DEFAULT_NATIONALITY.to_string());

    let endpoint = args
        .endpoint
        .or(cfg.endpoint)
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let timeout_seconds = args.timeout.or(cfg.timeout).unwrap_or(DEFAULT_TIMEOUT_SECONDS);
    if timeout_seconds == 0 {
        return Err("invalid timeout, expected a positive number of seconds".to_string());
    }

    let log_file = args
        .log_file
        .or(cfg.log_file)
        .map(|p| config::expand_tilde(&p))
        .or_else(config::default_log_path);

    Ok(RunConfig {
        count,
        nationality,
        endpoint,
        timeout_seconds,
        log_file,
        verbosity: args.verbose,
    })
}

/// Diagnostics go to a log file because the interface owns the terminal.
/// If the file cannot be opened the program runs without a sink.
fn init_tracing(run_config: &RunConfig) {
    let Some(path) = run_config.log_file.as_ref() else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let file = match std::fs::OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(_) => return,
    };
    let default_level = match run_config.verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("crewdex={default_level}")));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
}

pub async fn run() -> Result<(), String> {
    let args = CliArgs::parse();

    let (config_path, allow_missing) = match args.config.as_deref() {
        Some(path) => (config::expand_tilde(path), false),
        None => {
            let path = config::default_config_path()
                .ok_or_else(|| "could not determine home directory".to_string())?;
            config::ensure_default_config_file(&path)?;
            (path, true)
        }
    };
    let cfg = config::load_config(&config_path, allow_missing)?;
    let run_config = build_run_config(args, cfg)?;
    init_tracing(&run_config);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(run_config.timeout_seconds))
        .build()
        .map_err(|e| format!("failed to build http client: {e}"))?;
    let url = fetcher::build_api_url(
        &run_config.endpoint,
        run_config.count,
        &run_config.nationality,
    );
    tracing::info!(%url, "fetching directory");

    // The only suspension point in the program: one fetch, no retry, no
    // cancellation. Quitting the interface just drops the receiver.
    let (tx, rx) = mpsc::channel(1);
    task::spawn(async move {
        let result = fetcher::fetch(&client, &url).await;
        let _ = tx.send(result).await;
    });

    task::spawn_blocking(move || tui::run(rx))
        .await
        .map_err(|e| format!("interface task failed: {e}"))?
        .map_err(|e| format!("terminal failure: {e}"))?;

    Ok(())
}
