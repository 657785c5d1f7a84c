pub mod command;
pub mod run;

use crate::domain::Contact;

pub use run::run_app;

pub fn display_contact(contact: &Contact) -> String {
    format!(
        "Name: {}\n\
        Phone: {}\n\
        Email: {}\n\
        Group: {}",
        contact.name,
        contact.phone,
        contact.email,
        contact.group.as_deref().unwrap_or_default()
    )
}

pub fn listing_row(i: usize, contact: &Contact) -> String {
    format!(
        "{i:>3}. {:<20} {:15} {:^30} {:<15}",
        contact.name,
        contact.phone,
        contact.email,
        contact.group.as_deref().unwrap_or_default()
    )
}

pub fn print_listing<'a>(contacts: impl IntoIterator<Item = &'a Contact>) {
    for (i, c) in contacts.into_iter().enumerate() {
        println!("{}", listing_row(i + 1, c));
    }
}
