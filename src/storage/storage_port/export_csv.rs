use super::*;
use csv::Writer;
use serde::Serialize;

const EXPORT_PATH: &str = "./import_export/exported.csv";

// Every row carries the group column, even when empty.
#[derive(Serialize)]
struct CsvRow<'a> {
    name: &'a str,
    phone: &'a str,
    email: &'a str,
    group: Option<&'a str>,
}

pub fn export_contacts_to_csv<'a>(
    contacts: impl IntoIterator<Item = &'a Contact>,
    des: Option<&str>,
) -> Result<(PathBuf, u64)> {
    let mut file_path = PathBuf::from(des.unwrap_or(EXPORT_PATH));

    if file_path.is_dir() {
        file_path = file_path.join("exported.csv");
    } else if file_path.extension().is_none_or(|ext| ext != "csv") {
        return Err(AppError::Validation(
            "Export file must be a .csv file".to_string(),
        ));
    }

    create_file_parent(&file_path)?;
    let mut writer = Writer::from_path(&file_path)?;

    let mut counter: u64 = 0;
    for contact in contacts {
        writer.serialize(CsvRow {
            name: &contact.name,
            phone: &contact.phone,
            email: &contact.email,
            group: contact.group.as_deref(),
        })?;
        counter += 1;
    }

    writer.flush()?;

    Ok((file_path, counter))
}
