use crate::{
    cli::{display_contact, print_listing},
    prelude::{
        AppError, ContactStore, Result,
        command::{Cli, Commands},
        storage::{
            resolve_storage_path,
            storage_port::{export_contacts_to_csv, import_contacts_from_csv},
            stores::JsonStorage,
        },
    },
};
use clap::Parser;
use tracing::debug;

pub fn run_app() -> Result<()> {
    // .env must be loaded before clap reads CONTACTS_FILE
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let path = resolve_storage_path(cli.file)?;
    debug!(path = ?path, "opening contact file");

    let mut store = ContactStore::open(Box::new(JsonStorage::new(path)?))?;

    run_command(&mut store, cli.command)
}

pub fn run_command(store: &mut ContactStore, command: Commands) -> Result<()> {
    match command {
        Commands::Add {
            name,
            phone,
            email,
            group,
        } => {
            if name.trim().is_empty() {
                return Err(AppError::Validation("Name must not be empty".to_string()));
            }

            let added = store.add(
                &name,
                &phone,
                &email.unwrap_or_default(),
                group.as_deref(),
            )?;

            if !added {
                return Err(AppError::AlreadyExists(name.to_lowercase()));
            }

            println!("Contact added successfully");
            Ok(())
        }

        Commands::View { name } => {
            match store.view(&name) {
                Some(contact) => println!("{}", display_contact(contact)),
                None => eprintln!("{}", AppError::NotFound("Contact".to_string())),
            }
            Ok(())
        }

        // Missing fields are prefilled from the stored contact
        Commands::Edit {
            name,
            phone,
            email,
            group,
        } => {
            let Some(current) = store.view(&name).cloned() else {
                eprintln!("{}", AppError::NotFound("Contact".to_string()));
                return Ok(());
            };

            let phone = phone.unwrap_or(current.phone);
            let email = email.unwrap_or(current.email);
            let group = group.or(current.group);

            if store.edit(&name, &phone, &email, group.as_deref())? {
                println!("Contact updated successfully");
            }
            Ok(())
        }

        Commands::Delete { name } => {
            if store.delete(&name)? {
                println!("Contact deleted successfully");
            } else {
                eprintln!("{}", AppError::NotFound("Contact".to_string()));
            }
            Ok(())
        }

        Commands::List { group } => {
            if store.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            let contacts = store.view_all(group.as_deref());

            if contacts.is_empty() {
                println!("Found no contact in group {}", group.unwrap_or_default());
                return Ok(());
            }

            print_listing(contacts.values());
            Ok(())
        }

        Commands::Search { term } => {
            let found = store.search(&term);

            if found.is_empty() {
                println!("Couldn't find a contact matching {term}");
                return Ok(());
            }

            print_listing(found.values());
            Ok(())
        }

        // Import contacts into storage from .csv file
        Commands::Import { src } => {
            let (path, total, skipped) = import_contacts_from_csv(store, src.as_deref())?;

            println!(
                "Successfully imported {} contacts from {:?} ({} skipped).",
                total, path, skipped
            );
            Ok(())
        }

        Commands::Export { des } => {
            let (path, total) = export_contacts_to_csv(store.contact_list(), des.as_deref())?;

            println!("Successfully exported {} contacts to {:?}.", total, path);
            Ok(())
        }
    }
}
