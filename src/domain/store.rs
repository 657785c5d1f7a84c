use super::*;

use super::contact::normalize_name;
use crate::errors::AppError;
use tracing::{debug, info, warn};

/// In-memory contact book mirrored in full to a storage backend.
///
/// Every mutating call rewrites the whole backing medium before returning.
/// Expected misses ("not found", "already exists") are reported through the
/// returned `bool`/`Option`, never as errors; only persistence failures
/// surface as `Err`, and then the in-memory book is left as it was.
pub struct ContactStore {
    pub mem: BTreeMap<String, Contact>,
    pub storage: Box<dyn StorageBackend>,
}

impl ContactStore {
    /// Loads every contact from `storage` into memory.
    pub fn open(storage: Box<dyn StorageBackend>) -> Result<Self> {
        let mut store = Self {
            mem: BTreeMap::new(),
            storage,
        };
        store.load()?;
        Ok(store)
    }

    /// Fails with `DuplicateKey` when two stored keys differ only in case,
    /// rather than dropping one of them on the next save.
    pub fn load(&mut self) -> Result<()> {
        let loaded = self.storage.load()?;
        let mut mem = BTreeMap::new();

        for (key, mut contact) in loaded {
            let key = normalize_name(&key);

            if contact.name != key {
                warn!(
                    key = %key,
                    name = %contact.name,
                    "contact name disagrees with its key, using key"
                );
                contact.name = key.clone();
            }

            if mem.contains_key(&key) {
                return Err(AppError::DuplicateKey(key));
            }
            mem.insert(key, contact);
        }

        debug!(
            medium = self.storage.get_medium(),
            contacts = mem.len(),
            "loaded contacts"
        );
        self.mem = mem;
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        self.storage.save(&self.mem)
    }

    // Saves the current book; on failure `undo` reverts the pending change.
    fn persist(&mut self, undo: impl FnOnce(&mut BTreeMap<String, Contact>)) -> Result<()> {
        if let Err(err) = self.storage.save(&self.mem) {
            undo(&mut self.mem);
            return Err(err);
        }
        Ok(())
    }

    pub fn add(
        &mut self,
        name: &str,
        phone: &str,
        email: &str,
        group: Option<&str>,
    ) -> Result<bool> {
        let contact = Contact::new(name, phone, email, group);

        if self.mem.contains_key(&contact.name) {
            return Ok(false);
        }

        info!(name = %contact.name, "adding contact");
        let key = contact.name.clone();
        self.mem.insert(key.clone(), contact);
        self.persist(|mem| {
            mem.remove(&key);
        })?;
        Ok(true)
    }

    pub fn view(&self, name: &str) -> Option<&Contact> {
        self.mem.get(&normalize_name(name))
    }

    pub fn edit(
        &mut self,
        name: &str,
        phone: &str,
        email: &str,
        group: Option<&str>,
    ) -> Result<bool> {
        let key = normalize_name(name);
        let Some(contact) = self.mem.get_mut(&key) else {
            return Ok(false);
        };

        let previous = contact.clone();
        contact.phone = phone.to_string();
        contact.email = email.to_string();
        contact.group = group.map(str::to_string);

        info!(name = %key, "edited contact");
        self.persist(|mem| {
            mem.insert(key, previous);
        })?;
        Ok(true)
    }

    pub fn delete(&mut self, name: &str) -> Result<bool> {
        let key = normalize_name(name);
        let Some(removed) = self.mem.remove(&key) else {
            return Ok(false);
        };

        info!(name = %key, "deleted contact");
        self.persist(|mem| {
            mem.insert(key, removed);
        })?;
        Ok(true)
    }

    pub fn view_all(&self, group: Option<&str>) -> BTreeMap<String, Contact> {
        self.mem
            .iter()
            .filter(|(_, c)| group.is_none_or(|g| c.in_group(g)))
            .map(|(k, c)| (k.clone(), c.clone()))
            .collect()
    }

    pub fn search(&self, term: &str) -> BTreeMap<String, Contact> {
        let term = term.to_lowercase();

        self.mem
            .iter()
            .filter(|(_, c)| c.matches_term(&term))
            .map(|(k, c)| (k.clone(), c.clone()))
            .collect()
    }

    /// Adds each contact unless its name is blank or already taken, then
    /// persists once. Returns `(imported, skipped)`.
    pub fn import(&mut self, contacts: impl IntoIterator<Item = Contact>) -> Result<(u64, u64)> {
        let mut added: Vec<String> = Vec::new();
        let mut skipped = 0u64;

        for contact in contacts {
            let contact = Contact::new(
                &contact.name,
                &contact.phone,
                &contact.email,
                contact.group.as_deref(),
            );

            if contact.name.trim().is_empty() || self.mem.contains_key(&contact.name) {
                skipped += 1;
                continue;
            }
            added.push(contact.name.clone());
            self.mem.insert(contact.name.clone(), contact);
        }

        let imported = added.len() as u64;
        if imported > 0 {
            self.persist(|mem| {
                for key in &added {
                    mem.remove(key);
                }
            })?;
        }
        info!(imported, skipped, "imported contacts");
        Ok((imported, skipped))
    }

    pub fn contact_list(&self) -> Vec<&Contact> {
        self.mem.values().collect()
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }
}
