//! Command-line / environment configuration.

use std::path::PathBuf;

use clap::Parser;
use larder_infra::{DEFAULT_INVENTORY_FILE, StoreConfig};
use larder_observability::LogFormat;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "larder",
    about = "Household inventory tracker",
    long_about = "Track household items with quantities and expiration dates, list expired items, and suggest recipes you can make with what is on hand."
)]
pub struct AppConfig {
    /// Inventory file (created on first save)
    #[arg(long, short = 'f', env = "LARDER_INVENTORY_FILE", default_value = DEFAULT_INVENTORY_FILE)]
    pub file: PathBuf,

    /// Log output format: json or pretty
    #[arg(long, env = "LARDER_LOG_FORMAT", default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn store(&self) -> StoreConfig {
        StoreConfig::new(self.file.clone())
    }
}
