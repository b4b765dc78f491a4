//! Context wiring and dispatch for the `roster` binary.
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves config dir, data file and email policy, builds the API
//! - `handle_*()`: Per-command handlers that call the API and format output

use super::menu::Menu;
use super::render::{print_config, print_messages};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use roster::api::{ConfigAction, RosterApi};
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::model::EmailPolicy;
use roster::store::fs::CsvStore;
use std::io;
use std::path::PathBuf;
use tracing::debug;

const CONFIG_DIR_ENV: &str = "ROSTER_CONFIG_DIR";
const DATA_FILE_ENV: &str = "ROSTER_FILE";

struct AppContext {
    api: RosterApi<CsvStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_menu(&mut ctx),
    }
}

fn init_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = resolve_config_dir()?;
    let config = RosterConfig::load(&config_dir)?;

    let data_file = resolve_data_file(
        cli.file.clone(),
        std::env::var_os(DATA_FILE_ENV).map(PathBuf::from),
        &config,
    );
    let email_policy = resolve_email_policy(cli.email_policy, &config);
    debug!(
        config_dir = %config_dir.display(),
        data_file = %data_file.display(),
        %email_policy,
        "resolved context"
    );

    let store = CsvStore::new(data_file);
    let api = RosterApi::new(store, email_policy, config_dir);

    Ok(AppContext { api })
}

fn resolve_config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("", "", "roster")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| RosterError::Config("Could not determine config dir".into()))
}

/// Flag beats environment beats config file.
fn resolve_data_file(
    flag: Option<PathBuf>,
    env: Option<PathBuf>,
    config: &RosterConfig,
) -> PathBuf {
    flag.or(env)
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| config.data_file.clone())
}

fn resolve_email_policy(flag: Option<EmailPolicy>, config: &RosterConfig) -> EmailPolicy {
    flag.unwrap_or(config.email_policy)
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut ctx.api, stdin.lock(), stdout.lock()).run()
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    let mut out = io::stdout().lock();
    match &result.config {
        Some(config) if result.messages.is_empty() => print_config(&mut out, config)?,
        _ => print_messages(&mut out, &result.messages)?,
    }
    debug!(config_dir = %ctx.api.config_dir().display(), "config handled");
    Ok(())
}
