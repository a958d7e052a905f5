// src/store.rs
// Last-notified marker for duplicate suppression. Opt-in via NOTIFY_STATE_FILE.

use std::collections::BTreeSet;
use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifiedState {
    /// `CellResult::key` of every cell announced by the last successful send.
    pub available: BTreeSet<String>,
}

/// Missing, unreadable or corrupt markers all read as "nothing notified yet".
pub fn load(path: &Path) -> NotifiedState {
    let txt = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return NotifiedState::default(),
        Err(e) => {
            logw!("cannot read {}: {e}; treating as empty", path.display());
            return NotifiedState::default();
        }
    };
    serde_json::from_str(&txt).unwrap_or_else(|e| {
        logw!("corrupt state in {}: {e}; treating as empty", path.display());
        NotifiedState::default()
    })
}

pub fn save(path: &Path, state: &NotifiedState) -> io::Result<()> {
    // Ensure parent directories exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)
}

pub fn clear(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}
