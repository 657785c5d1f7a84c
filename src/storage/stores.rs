use super::*;

use std::cell::RefCell;
use tracing::debug;
use uuid::Uuid;

pub struct JsonStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        create_file_parent(&path)?;

        Ok(Self {
            medium: "json".to_string(),
            path,
        })
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());

        self.path
            .with_file_name(format!(".{}-{}.tmp", file_name, Uuid::new_v4()))
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<BTreeMap<String, Contact>> {
        if !fs::exists(&self.path)? {
            debug!(path = ?self.path, "contact file missing, creating empty book");
            create_file_parent(&self.path)?;
            fs::write(&self.path, "{}")?;
            return Ok(BTreeMap::new());
        }

        let data = fs::read_to_string(&self.path)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&data).map_err(|source| AppError::StorageCorrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, contacts: &BTreeMap<String, Contact>) -> Result<()> {
        create_file_parent(&self.path)?;

        let json_contacts = serde_json::to_string_pretty(contacts)?;

        // Atomic write: a crash mid-save leaves the previous file intact
        let tmp_path = self.temp_path();
        if let Err(err) =
            fs::write(&tmp_path, json_contacts).and_then(|_| fs::rename(&tmp_path, &self.path))
        {
            let _ = fs::remove_file(&tmp_path);
            return Err(err.into());
        }

        debug!(path = ?self.path, contacts = contacts.len(), "saved contacts");
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}

/// Keeps contacts in process memory only.
#[derive(Default)]
pub struct MemStorage {
    pub data: RefCell<BTreeMap<String, Contact>>,
}

impl MemStorage {
    pub fn new(data: BTreeMap<String, Contact>) -> Self {
        Self {
            data: RefCell::new(data),
        }
    }
}

impl StorageBackend for MemStorage {
    fn load(&self) -> Result<BTreeMap<String, Contact>> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &BTreeMap<String, Contact>) -> Result<()> {
        *self.data.borrow_mut() = contacts.clone();
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
