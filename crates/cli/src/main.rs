//! Interactive household inventory tracker.

use std::io;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use larder_cli::{AppConfig, Shell};
use larder_infra::InventoryStore;
use larder_recipes::RecipeTable;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();
    larder_observability::init(config.log_format);

    tracing::info!(file = %config.file.display(), "opening inventory");
    let mut store = InventoryStore::open(&config.store());

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(
        &mut store,
        RecipeTable::built_in(),
        || Local::now().date_naive(),
    )
    .run(stdin.lock(), stdout.lock())
    .context("interactive session failed")?;

    Ok(())
}
