//! Seed file loading
//!
//! An optional JSON file handed over with `--seed` fills the session
//! store at startup. This is input, not persistence: mutations made in
//! the UI are never written back.

use std::fs;
use std::path::Path;

use eyre::{Context, Result};
use serde::Deserialize;
use tracing::warn;

use todostore::TaskStore;

/// One entry in the seed file. Ids are assigned by the store on load.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedTask {
    /// Task text
    pub data: String,

    /// Start out completed
    #[serde(default)]
    pub completed: bool,
}

/// Parse a seed file into its entries.
pub fn load_seed(path: &Path) -> Result<Vec<SeedTask>> {
    let content = fs::read_to_string(path).context(format!("Failed to read seed file {}", path.display()))?;
    let entries: Vec<SeedTask> = serde_json::from_str(&content).context("Failed to parse seed file")?;
    Ok(entries)
}

/// Fill a store from seed entries.
///
/// Entries with empty text or text over `max_task_len` characters are
/// rejected (skipped with a warning), matching the UI boundary rule:
/// over-long input is never truncated.
pub fn populate(store: &mut TaskStore, entries: Vec<SeedTask>, max_task_len: usize) {
    for entry in entries {
        if entry.data.is_empty() {
            warn!("seed entry skipped: empty text");
            continue;
        }
        if entry.data.chars().count() > max_task_len {
            warn!(len = entry.data.chars().count(), max = max_task_len, "seed entry skipped: over length cap");
            continue;
        }
        let id = store.create_task(entry.data);
        if entry.completed {
            store.perform_task(id);
        }
    }
}
