pub mod storage_port;
pub mod stores;

use crate::prelude::{AppError, Contact, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE_NAME: &str = "contacts.json";

/// Medium holding the whole contact mapping, keyed by lowercase name.
pub trait StorageBackend {
    fn load(&self) -> Result<BTreeMap<String, Contact>>;

    /// Replaces everything previously stored with `contacts`.
    fn save(&self, contacts: &BTreeMap<String, Contact>) -> Result<()>;

    fn get_medium(&self) -> &str;
}

/// Picks the backing file: the explicit path (`--file` or `CONTACTS_FILE`,
/// already merged by clap), else `contacts.json` beside the running
/// executable.
pub fn resolve_storage_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit
        && !path.as_os_str().is_empty()
    {
        return Ok(path);
    }

    let exe = std::env::current_exe()?;
    let dir = exe.parent().ok_or_else(|| {
        AppError::NotFound(format!("Directory of executable {:?}", exe))
    })?;
    Ok(dir.join(DEFAULT_FILE_NAME))
}

pub fn create_file_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
