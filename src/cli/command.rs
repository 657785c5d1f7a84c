use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "address-book", version, about = "Simple personal address book")]
pub struct Cli {
    /// Contact file (defaults to contacts.json next to the executable)
    #[arg(long, global = true, env = "CONTACTS_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name (stored lowercase, must be unique)
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: Option<String>,

        /// Contact group (friends, work, family)
        #[arg(long)]
        group: Option<String>,
    },
    /// Show one contact by name
    View {
        #[arg(long)]
        name: String,
    },
    /// Edit the data of an existing contact
    /// Fields left out keep their current value
    Edit {
        /// Name of the contact to edit
        #[arg(long)]
        name: String,

        /// Update phone number
        #[arg(long)]
        phone: Option<String>,

        /// Update email address
        #[arg(long)]
        email: Option<String>,

        /// Update group
        #[arg(long)]
        group: Option<String>,
    },
    /// Delete a contact by name
    Delete {
        /// Name of contact to delete
        #[arg(long)]
        name: String,
    },
    /// List contacts
    List {
        /// List only contacts in this group
        #[arg(long)]
        group: Option<String>,
    },
    /// Search name, phone, email and group for a substring
    Search {
        #[arg(long)]
        term: String,
    },

    /// Import contacts from .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: Option<String>,
    },

    /// Export contacts to a .csv file
    Export {
        /// File path to the destination location for export file
        #[arg(short, long)]
        des: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_with_group() {
        let cli = Cli::try_parse_from([
            "address-book",
            "--file",
            "book.json",
            "add",
            "--name",
            "Alice",
            "--phone",
            "555-1234",
            "--group",
            "friends",
        ])
        .unwrap();

        assert_eq!(cli.file, Some(PathBuf::from("book.json")));
        match cli.command {
            Commands::Add {
                name, email, group, ..
            } => {
                assert_eq!(name, "Alice");
                assert_eq!(email, None);
                assert_eq!(group.as_deref(), Some("friends"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
