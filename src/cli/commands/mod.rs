//! CLI command implementations

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

pub mod duel;
pub mod play;
pub mod vs_random;

/// Write any serializable report as pretty-printed JSON
pub(crate) fn export_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, value)?;
    Ok(())
}
