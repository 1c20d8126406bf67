use crate::args::Cli;
use addrbook::config::{BookConfig, HOME_ENV};
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so the prompt on stdout stays readable.
/// `RUST_LOG` wins over `--verbose`.
pub(super) fn init_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}

/// `$ADDRBOOK_HOME`, else the platform config directory.
fn config_dir() -> Option<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Some(PathBuf::from(home));
    }
    ProjectDirs::from("com", "addrbook", "addrbook").map(|dirs| dirs.config_dir().to_path_buf())
}

pub(super) fn load_config(cli: &Cli) -> BookConfig {
    let config = match config_dir() {
        Some(dir) => BookConfig::load(&dir).unwrap_or_else(|e| {
            warn!(dir = %dir.display(), "Ignoring unreadable config: {}", e);
            BookConfig::default()
        }),
        None => BookConfig::default(),
    };
    config.with_contacts_file(cli.file.clone())
}

pub(super) fn contacts_path(config: &BookConfig) -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    config.contacts_path(&cwd)
}
