mod models;
mod persist;
mod report;
mod run;
mod store;
mod ui;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let adapter = persist::FileStore::open(get_data_dir()?)?;
    let mut store = store::TransactionStore::new(Box::new(adapter));
    store
        .load()
        .context("Failed to load saved transactions")?;

    match args.len() {
        1 => run::as_tui(&mut store),
        _ => run::as_cli(&args, &mut store),
    }
}

fn get_data_dir() -> Result<std::path::PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "fintui", "FinTUI")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}
