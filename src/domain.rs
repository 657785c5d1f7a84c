pub mod contact;
pub mod store;

use crate::errors::Result;
use crate::storage::StorageBackend;
use std::collections::BTreeMap;

pub use contact::Contact;
pub use store::ContactStore;
