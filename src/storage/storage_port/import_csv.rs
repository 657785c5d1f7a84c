use super::*;
use crate::domain::ContactStore;
use csv::Reader;

const IMPORT_PATH: &str = "./import_export/contacts.csv";

/// Returns the source path with the imported and skipped counts.
pub fn import_contacts_from_csv(
    store: &mut ContactStore,
    src: Option<&str>,
) -> Result<(PathBuf, u64, u64)> {
    let file_path = PathBuf::from(src.unwrap_or(IMPORT_PATH));

    if !file_path.exists() {
        return Err(AppError::NotFound("CSV file".to_string()));
    }

    if file_path.extension().is_none_or(|ext| ext != "csv") {
        return Err(AppError::Validation("File not .csv".to_string()));
    }

    let mut reader = Reader::from_path(&file_path)?;
    let contacts = reader
        .deserialize()
        .collect::<std::result::Result<Vec<Contact>, csv::Error>>()?;

    let (imported, skipped) = store.import(contacts)?;

    Ok((file_path, imported, skipped))
}
