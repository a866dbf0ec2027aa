// crates/cnw-cli/src/store.rs
//
// JSON state file for the collection.
//
// The whole collection (supply ledger, ownership ledger, treasury, event log)
// is rewritten on every mutating command. Writes go to a sibling temp file
// that is then renamed over the target, so a crash never leaves a torn file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cnw_mint::Collection;

/// On-disk layout of the state file.
#[derive(Debug, Serialize, Deserialize)]
pub struct StateFile {
    pub collection: Collection,
    pub updated_at: DateTime<Utc>,
}

/// Load the collection from `path` and verify its ledger invariants.
pub fn load(path: &Path) -> Result<Collection, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!(
            "No collection state at {}. Run `cnw init` first.",
            path.display()
        )
        .into());
    }
    let contents = fs::read_to_string(path)?;
    let state: StateFile = serde_json::from_str(&contents)?;
    state.collection.check_invariants()?;
    tracing::debug!(
        "Loaded collection from {} (updated {})",
        path.display(),
        state.updated_at
    );
    Ok(state.collection)
}

/// Persist `collection` to `path`, creating parent directories as needed.
pub fn save(path: &Path, collection: &Collection) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let state = StateFile {
        collection: collection.clone(),
        updated_at: Utc::now(),
    };
    let json = serde_json::to_string_pretty(&state)?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;

    tracing::debug!("Saved collection to {}", path.display());
    Ok(())
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}
