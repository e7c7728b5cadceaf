//! Final fleet snapshot written when a run ends.
//!
//! The snapshot is a single JSON document with the complete fleet and
//! run metadata, suitable for offline inspection or feeding a replay
//! tool.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use fairway_types::Contact;
use serde::Serialize;

use crate::error::EngineError;

/// One serialized fleet snapshot.
#[derive(Debug, Serialize)]
struct FleetSnapshot<'a> {
    /// Tick at which the snapshot was taken.
    tick: u64,
    /// Wall-clock time the snapshot was written.
    written_at: DateTime<Utc>,
    /// Number of contacts in the fleet.
    contact_count: usize,
    /// Every contact with full attributes.
    contacts: &'a [Contact],
}

/// Write the fleet to `path` as pretty-printed JSON.
///
/// Parent directories are created if missing.
///
/// # Errors
///
/// Returns [`EngineError::Snapshot`] if serialization or the filesystem
/// write fails.
pub fn write_fleet_snapshot(path: &Path, fleet: &[Contact], tick: u64) -> Result<(), EngineError> {
    let snapshot = FleetSnapshot {
        tick,
        written_at: Utc::now(),
        contact_count: fleet.len(),
        contacts: fleet,
    };

    let json = serde_json::to_string_pretty(&snapshot).map_err(|e| EngineError::Snapshot {
        message: format!("failed to serialize fleet: {e}"),
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| EngineError::Snapshot {
                message: format!("failed to create {}: {e}", parent.display()),
            })?;
        }
    }

    fs::write(path, json).map_err(|e| EngineError::Snapshot {
        message: format!("failed to write {}: {e}", path.display()),
    })?;

    Ok(())
}
