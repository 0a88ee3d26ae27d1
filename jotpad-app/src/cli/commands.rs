use crate::cli::opts::*;

use anyhow::Result;
use jotpad_core::{StorageMode, Store};
use jotpad_file::FileStore;
use std::sync::Arc;

pub async fn run_cli(args: Cli) -> Result<()> {
    let store = open_store(&args);
    match args.cmd {
        // Save/load/share are best-effort: failures go to the log, the user
        // sees nothing and a failed load leaves the output empty.
        Command::Save { text } => {
            log::info!("saving note...");
            if let Err(e) = store.save(&text).await {
                log::warn!("save failed: {e}");
            }
        }
        Command::Load => {
            log::info!("loading note...");
            match store.load().await {
                Ok(text) => print!("{text}"),
                Err(e) => log::warn!("load failed: {e}"),
            }
        }
        Command::Share => {
            log::info!("sharing note...");
            if let Err(e) = store.share().await {
                log::warn!("share failed: {e}");
            }
        }
        Command::Info { json } => {
            let info = store.info().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                let loc = info
                    .location
                    .as_deref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "-".to_string());
                let modified = info
                    .modified_at
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{loc}\texists={}\tbytes={}\tmodified={modified}",
                    info.exists, info.bytes
                );
            }
        }
    }
    Ok(())
}

pub fn open_store(args: &Cli) -> Arc<dyn Store> {
    let mode = match args.mode {
        Mode::Internal => StorageMode::Internal,
        Mode::External => StorageMode::External,
    };
    let store = match &args.file {
        Some(p) => FileStore::open_with(p.clone(), mode.default_policy()),
        None => FileStore::open_default(mode),
    };
    Arc::new(store)
}
